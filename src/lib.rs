//! # Growable range-add / range-min interval tree
//!
//! This library implements a sparse, dynamically growable interval tree over
//! a conceptually unbounded array of signed 64-bit integers indexed from 0:
//!
//! 1. **Range add**: add a signed delta to every element of an inclusive
//!    index range in O(log capacity).
//! 2. **Range minimum**: read the minimum element of an inclusive index range
//!    in O(log capacity), without allocating along untouched paths.
//! 3. **On-demand growth**: updates past the current capacity double it by
//!    wrapping the root, preserving everything already recorded.
//!
//! Nodes are materialized lazily, only along paths an update actually
//! touches; an absent subtree behaves as an all-zero one. Pending deltas are
//! recorded on the single node covering an update's range exactly and are
//! never pushed down into children: queries re-derive the same range
//! decomposition and sum the deltas met along the way, which is equivalent
//! by commutativity of addition.
//!
//! ## Usage Example
//!
//! ```
//! use rangemin::RangeMinTree;
//!
//! let mut counters = RangeMinTree::new(8, 0)?;
//! counters.update(5, 2, 5)?;
//! assert_eq!(counters.min(2, 5)?, 5);
//! assert_eq!(counters.min(0, 1)?, 0);
//!
//! // Writing past the capacity hint grows the tree transparently.
//! counters.update(3, 10, 10)?;
//! assert_eq!(counters.min(10, 10)?, 3);
//! # Ok::<(), rangemin::TreeError>(())
//! ```
//!
//! All arithmetic is plain `i64` addition; overflow is the caller's
//! responsibility. The structure is single-threaded; wrap it in a lock for
//! concurrent use.

#![warn(missing_docs, missing_debug_implementations)]

pub mod tree; // Sparse interval tree with capacity growth
pub mod util; // Capacity rounding helpers

// Re-exports for convenience
pub use tree::RangeMinTree;
pub use util::next_power_of_two_at_least;

use thiserror::Error;

/// Errors raised when an operation's preconditions are violated.
///
/// Every variant is a programmer error, not an environmental failure: the
/// call is rejected outright, nothing is retried, and no input is silently
/// clamped into range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// A tree was constructed with a negative capacity request.
    #[error("requested tree size {0} is negative")]
    NegativeSize(i64),

    /// An update was given a negative range edge.
    #[error("invalid update range [{left}, {right}]: edges must be non-negative")]
    InvalidUpdateRange {
        /// Left edge as passed by the caller.
        left: i64,
        /// Right edge as passed by the caller.
        right: i64,
    },

    /// A query was given a negative range edge, or an inverted range.
    #[error("invalid query range [{left}, {right}]: edges must be non-negative and ordered")]
    InvalidQueryRange {
        /// Left edge as passed by the caller.
        left: i64,
        /// Right edge as passed by the caller.
        right: i64,
    },
}
