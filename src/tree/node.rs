//! Sparse interval tree node
//!
//! A node covers an index range `[lo, hi]` it never stores; ranges are
//! re-derived on every descent from the root's `[0, size]` span:
//!   midpoint m = lo + (hi - lo) / 2
//!   left child covers [lo, m], right child covers [m+1, hi]
//!
//! Children are owned optional slots. An absent child stands for a whole
//! untouched subtree and contributes a minimum of 0 with no pending delta.

/// One node of the sparse tree.
///
/// `pending` is an additive delta covering the node's whole range that is
/// never pushed into children; `min` aggregates the children's contributions
/// and excludes `pending` itself.
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct Node {
    pub(super) left: Option<Box<Node>>,
    pub(super) right: Option<Box<Node>>,
    pub(super) min: i64,
    pub(super) pending: i64,
}

/// Floor midpoint of an inclusive range, written to avoid `lo + hi` overflow.
#[inline]
fn midpoint(lo: i64, hi: i64) -> i64 {
    lo + (hi - lo) / 2
}

impl Node {
    /// Minimum this subtree contributes to its parent: the child aggregate
    /// plus the delta pending on the node itself.
    #[inline]
    pub(super) fn aggregate(&self) -> i64 {
        self.pending + self.min
    }

    /// Recompute `min` from the children after a mutation below this node.
    ///
    /// Invariant restored: `min` equals the smaller of the children's
    /// aggregates, with an absent child counting as 0.
    pub(super) fn refresh_min(&mut self) {
        let left = self.left.as_deref().map_or(0, Node::aggregate);
        let right = self.right.as_deref().map_or(0, Node::aggregate);
        self.min = left.min(right);
    }

    /// Add `value` to every index of `[left_edge, right_edge]`, where this
    /// node covers `[lo, hi]` and the edges lie within it.
    ///
    /// Materializes children only along the descent; every non-terminal arm
    /// refreshes `min` on the way back up. An exact match records the delta
    /// on this node and stops; nothing is ever pushed down.
    pub(super) fn apply(&mut self, value: i64, lo: i64, hi: i64, left_edge: i64, right_edge: i64) {
        if lo == left_edge && hi == right_edge {
            self.pending += value;
            return;
        }
        let mid = midpoint(lo, hi);
        if mid >= right_edge {
            self.left
                .get_or_insert_with(Box::default)
                .apply(value, lo, mid, left_edge, right_edge);
        } else if mid < left_edge {
            self.right
                .get_or_insert_with(Box::default)
                .apply(value, mid + 1, hi, left_edge, right_edge);
        } else {
            self.left
                .get_or_insert_with(Box::default)
                .apply(value, lo, mid, left_edge, mid);
            self.right
                .get_or_insert_with(Box::default)
                .apply(value, mid + 1, hi, mid + 1, right_edge);
        }
        self.refresh_min();
    }

    /// Minimum over `[left_edge, right_edge]`, where this node covers
    /// `[lo, hi]` and the edges lie within it.
    ///
    /// Same decomposition as [`Node::apply`], folding by minimum instead of
    /// mutating. Read-only: absent children contribute 0 without being
    /// materialized, and the deltas pending along the descent are summed in.
    pub(super) fn query(&self, lo: i64, hi: i64, left_edge: i64, right_edge: i64) -> i64 {
        if lo == left_edge && hi == right_edge {
            return self.aggregate();
        }
        let mid = midpoint(lo, hi);
        if mid >= right_edge {
            let left = self
                .left
                .as_deref()
                .map_or(0, |n| n.query(lo, mid, left_edge, right_edge));
            left + self.pending
        } else if mid < left_edge {
            let right = self
                .right
                .as_deref()
                .map_or(0, |n| n.query(mid + 1, hi, left_edge, right_edge));
            right + self.pending
        } else {
            let left = self
                .left
                .as_deref()
                .map_or(0, |n| n.query(lo, mid, left_edge, mid));
            let right = self
                .right
                .as_deref()
                .map_or(0, |n| n.query(mid + 1, hi, mid + 1, right_edge));
            left.min(right) + self.pending
        }
    }
}
