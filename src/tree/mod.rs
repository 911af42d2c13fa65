//! Growable sparse interval tree
//!
//! Range-add and range-minimum over an unbounded, uniformly baselined array
//! of `i64`, indexed from 0. The tree materializes nodes only along paths
//! updates actually touch, keeps additive deltas on the covering node
//! instead of pushing them down, and doubles its capacity on demand by
//! wrapping the root.

mod node;

use node::Node;
use tracing::debug;

use crate::util::next_power_of_two_at_least;
use crate::TreeError;

/// Sparse interval tree supporting range-add and range-minimum.
///
/// Conceptually an array of `i64` indexed from 0, every element starting at
/// the construction-time baseline. [`update`](Self::update) adds a delta to
/// an inclusive index range, [`min`](Self::min) reads the minimum over one;
/// both run in O(log capacity). Updates past the current capacity grow the
/// tree transparently, and growth never disturbs recorded data.
///
/// Not synchronized: callers needing concurrent access must serialize
/// externally, one lock per tree.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeMinTree {
    root: Node,
    /// Maximum addressable index (inclusive); always `2^k - 1`, and `-1`
    /// for a tree constructed with a capacity request of 0.
    size: i64,
    baseline: i64,
}

impl RangeMinTree {
    /// Create a tree addressing at least `size` indices, every element
    /// logically starting at `baseline`.
    ///
    /// `size` is an optimization hint: capacity is rounded up to the next
    /// power of two, and later updates may grow it further. `baseline`
    /// applies to every index forever, including indices the tree has not
    /// grown to cover yet.
    ///
    /// # Errors
    ///
    /// [`TreeError::NegativeSize`] if `size < 0`.
    pub fn new(size: i64, baseline: i64) -> Result<Self, TreeError> {
        if size < 0 {
            return Err(TreeError::NegativeSize(size));
        }
        Ok(Self {
            root: Node::default(),
            size: next_power_of_two_at_least(size) - 1,
            baseline,
        })
    }

    /// Add `value` to every element of `[left_edge, right_edge]` inclusive.
    ///
    /// Grows the tree first when `right_edge` lies past the current
    /// capacity. `value` may be negative. Callers must ensure
    /// `left_edge <= right_edge`; the update path does not reorder edges
    /// (debug builds assert the contract).
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidUpdateRange`] if either edge is negative.
    pub fn update(&mut self, value: i64, left_edge: i64, right_edge: i64) -> Result<(), TreeError> {
        if left_edge < 0 || right_edge < 0 {
            return Err(TreeError::InvalidUpdateRange {
                left: left_edge,
                right: right_edge,
            });
        }
        debug_assert!(
            left_edge <= right_edge,
            "update range [{left_edge}, {right_edge}] is inverted"
        );
        if right_edge > self.size {
            self.ensure_capacity(right_edge);
        }
        self.root.apply(value, 0, self.size, left_edge, right_edge);
        Ok(())
    }

    /// Minimum element over `[left_edge, right_edge]` inclusive, baseline
    /// included.
    ///
    /// Pure read: untouched subtrees contribute the baseline without being
    /// allocated, and a range reaching past the current capacity folds in
    /// the implicit untouched value for the excess.
    ///
    /// # Errors
    ///
    /// [`TreeError::InvalidQueryRange`] if either edge is negative or
    /// `left_edge > right_edge`.
    pub fn min(&self, left_edge: i64, right_edge: i64) -> Result<i64, TreeError> {
        if left_edge < 0 || right_edge < 0 || left_edge > right_edge {
            return Err(TreeError::InvalidQueryRange {
                left: left_edge,
                right: right_edge,
            });
        }
        if left_edge > self.size {
            // Entirely beyond ever-touched territory.
            return Ok(self.baseline);
        }
        let effective_right = right_edge.min(self.size);
        let mut lowest = self.root.query(0, self.size, left_edge, effective_right);
        if effective_right < right_edge {
            // The tail past capacity is untouched and sits at the baseline.
            lowest = lowest.min(0);
        }
        Ok(self.baseline + lowest)
    }

    /// Number of currently addressable indices (a power of two, or 0 for an
    /// empty tree that has never been written).
    #[inline]
    pub fn capacity(&self) -> i64 {
        self.size + 1
    }

    /// Baseline value applied to every index, fixed at construction.
    #[inline]
    pub fn baseline(&self) -> i64 {
        self.baseline
    }

    /// Double the capacity until `right_edge` is addressable.
    ///
    /// Each step wraps the current root as the *left* child of a fresh,
    /// otherwise-empty root; the old subtree is never copied or rebalanced,
    /// so growth costs O(log new capacity). Refreshing the fresh root keeps
    /// the `min` invariant intact when the absorbed subtree's contribution
    /// is negative.
    fn ensure_capacity(&mut self, right_edge: i64) {
        let old_size = self.size;
        let mut capacity = (self.size + 1).max(1);
        loop {
            let absorbed = std::mem::take(&mut self.root);
            self.root.left = Some(Box::new(absorbed));
            self.root.refresh_min();
            capacity *= 2;
            if capacity - 1 >= right_edge {
                break;
            }
        }
        self.size = capacity - 1;
        debug!(from = old_size, to = self.size, "grew tree capacity");
    }
}

impl Default for RangeMinTree {
    /// An empty tree with baseline 0; the first update sizes it.
    fn default() -> Self {
        Self {
            root: Node::default(),
            size: -1,
            baseline: 0,
        }
    }
}
