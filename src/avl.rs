#![warn(missing_docs)]
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

mod insert;
mod node;
mod rotate;

use crate::InvariantError;
use insert::ins;
use node::{chk, height, same_tree, OptNodePtr};

pub use node::Balance;

#[cfg(test)]
macro_rules! chk_tree {
    ( $x:expr ) => {{
        let t = $x;
        if let Err(e) = t.check() {
            panic!("insert produced an invalid tree: {}", e);
        }
        t
    }};
}

#[cfg(not(test))]
macro_rules! chk_tree {
    ( $x:expr ) => {{
        $x
    }};
}

/// A sorted set of keys kept in a persistent AVL tree.
///
/// Every node records which of its subtrees, if either, is one level taller
/// than the other.  No node stores its height.  [`insert`](AvlTree::insert)
/// walks down to the new key's position and on the way back up decides,
/// from those tags alone, whether to relabel a node, rotate, or tell its
/// parent that the subtree grew.
///
/// Trees are persistent.  Nodes are never modified once built, so inserting
/// into a tree leaves it untouched and returns a new tree that shares every
/// node off the insertion path with the old one.  Cloning a tree is O(1),
/// and a tree may be read from many threads at once.
///
/// ```
/// use tagged_avl::AvlTree;
///
/// let t1: AvlTree<u32> = [1, 2].into();
/// let t2 = t1.insert(3);
///
/// assert_eq!(t1.len(), 2);
/// assert_eq!(t2.len(), 3);
/// assert_eq!(format!("{:?}", t2), "AvlTree(#3, (2 = (1 = . .) (3 = . .)))");
/// ```
#[derive(Clone)]
pub struct AvlTree<T> {
    len: usize,
    root: OptNodePtr<T>,
}

impl<T> AvlTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        AvlTree { len: 0, root: None }
    }

    /// Removes all keys from self.  Other trees sharing nodes with self are
    /// not affected.
    pub fn clear(&mut self) {
        self.len = 0;
        self.root = None;
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Tests if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes on the longest path from the root to a
    /// leaf.  The empty tree has height 0.
    ///
    /// The height is found by following the balance tags, so this takes
    /// time proportional to the height itself.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Tests if self and other share their root, which means they hold the
    /// same keys in the same shape without comparing any of them.
    ///
    /// ```
    /// use tagged_avl::AvlTree;
    ///
    /// let t: AvlTree<_> = [5, 3, 8].into();
    /// assert!(t.insert(3).ptr_eq(&t));
    /// assert!(!t.insert(4).ptr_eq(&t));
    /// ```
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T: Ord> AvlTree<T> {
    /// Verifies that the tree is a valid AVL tree: keys strictly increase
    /// in order, sibling subtrees differ in height by at most one, every
    /// balance tag describes its node's subtrees, and the recorded length is
    /// the number of nodes.
    ///
    /// Trees built through this crate's API always pass.
    pub fn check(&self) -> Result<(), InvariantError> {
        let (counted, _, _) = chk(&self.root, None, 0)?;
        if counted != self.len {
            return Err(InvariantError::LenMismatch {
                recorded: self.len,
                counted,
            });
        }
        Ok(())
    }
}

impl<T: Clone + Ord> AvlTree<T> {
    /// Returns a tree holding the keys of self and key.
    ///
    /// If key is already present, the result shares its root with self.
    /// Otherwise the result is at most one level taller than self.  In either
    /// case self is left unchanged.
    ///
    /// ```
    /// use tagged_avl::AvlTree;
    ///
    /// let t = AvlTree::new().insert(3).insert(1).insert(2);
    /// assert_eq!(format!("{:?}", t), "AvlTree(#3, (2 = (1 = . .) (3 = . .)))");
    /// ```
    pub fn insert(&self, key: T) -> Self {
        match ins(&self.root, key) {
            None => self.clone(),
            Some(added) => chk_tree!(AvlTree {
                len: self.len + 1,
                root: Some(added.into_node()),
            }),
        }
    }

    /// Replaces self with `self.insert(key)`.  Returns true if the key was
    /// not already present.
    pub fn insert_mut(&mut self, key: T) -> bool {
        let old_len = self.len;
        *self = self.insert(key);
        self.len != old_len
    }
}

impl<T: Debug> Debug for AvlTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.root {
            None => f.write_str("AvlTree(EMPTY)"),
            Some(rc) => {
                // use Node's Debug formatter
                f.write_fmt(format_args!("AvlTree(#{}, {:?})", self.len, rc))
            }
        }
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Equality is structural: same keys, same shape, same tags.  Two trees with
// the same keys built in different orders may differ.
impl<T: PartialEq> PartialEq for AvlTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && same_tree(&self.root, &other.root)
    }
}

impl<T: Eq> Eq for AvlTree<T> {}

impl<T: Clone + Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for k in iter {
            self.insert_mut(k);
        }
    }
}

impl<T: Clone + Ord, const N: usize> From<[T; N]> for AvlTree<T> {
    fn from(keys: [T; N]) -> Self {
        AvlTree::from_iter(keys)
    }
}

impl<T: Clone + Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = AvlTree::new();
        t.extend(iter);
        t
    }
}
