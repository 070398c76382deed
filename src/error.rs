//! Errors reported by [`Tree::validate`][crate::Tree::validate].

use thiserror::Error as ThisError;

/// Result alias for fallible tree probes.
pub type Result<T, E = InvariantError> = std::result::Result<T, E>;

/// A broken structural invariant found while walking a tree.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum InvariantError {
    /// The in-order walk was not strictly increasing, meaning some left subtree held a value that
    /// was not smaller than its parent (or some right subtree one that was not larger).
    #[error("in-order walk is not strictly increasing at position {position}")]
    OutOfOrder {
        /// Index in the in-order walk of the first value not greater than its predecessor.
        position: usize,
    },

    /// The number of reachable nodes differs from the tracked length.
    #[error("tree holds {actual} values but tracks {expected}")]
    LengthMismatch {
        /// The length the tree handle recorded.
        expected: usize,
        /// The number of nodes actually reachable from the root.
        actual: usize,
    },
}
