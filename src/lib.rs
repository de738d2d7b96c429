//! # Persistent AVL trees balanced by per-node tags
//!
//! `tagged-avl` provides [`AvlTree`], a sorted set of keys stored in an AVL
//! tree.  Instead of a height, each node carries a [`Balance`] tag saying
//! which of its subtrees, if either, is one level taller.  Insertion keeps
//! the tags exact and restores balance with the four classic rotations.
//!
//! Trees are persistent: nodes are immutable and shared, so inserting into a
//! tree returns a new tree and leaves the old one usable.  A clone
//! `t.clone()` shares its whole representation with `t`.
//!
//! [`AvlTree::check`] verifies the AVL invariants at runtime and reports the
//! first violation it finds as an [`InvariantError`].

mod avl;
pub use avl::AvlTree;
pub use avl::Balance;

mod error;
pub use error::InvariantError;
