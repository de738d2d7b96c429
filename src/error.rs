use crate::Balance;
use thiserror::Error;

/// A broken invariant found by [`AvlTree::check`](crate::AvlTree::check).
///
/// Depths count from the root, which is at depth 0.  Heights count nodes, so
/// an empty subtree has height 0 and a leaf has height 1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// A key is not strictly greater than every key before it in order.
    #[error("key at depth {depth} is out of order")]
    OutOfOrder {
        /// depth of the offending node
        depth: usize,
    },

    /// The subtrees of a node differ in height by more than one.
    #[error("subtree heights {left} and {right} at depth {depth} differ by more than one")]
    Unbalanced {
        /// depth of the offending node
        depth: usize,
        /// height of the left subtree
        left: usize,
        /// height of the right subtree
        right: usize,
    },

    /// A node's balance tag disagrees with its subtree heights.
    #[error("tag {tag:?} at depth {depth} does not match subtree heights {left} and {right}")]
    WrongTag {
        /// depth of the offending node
        depth: usize,
        /// the tag stored in the node
        tag: Balance,
        /// height of the left subtree
        left: usize,
        /// height of the right subtree
        right: usize,
    },

    /// The tree's recorded length is not the number of nodes reachable from
    /// its root.
    #[error("tree records {recorded} keys but holds {counted}")]
    LenMismatch {
        /// the length stored in the tree handle
        recorded: usize,
        /// the number of nodes found by walking the tree
        counted: usize,
    },
}
