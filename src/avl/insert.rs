use super::node::{Node, NodePtr, OptNodePtr};
use super::rotate::{rebal_lf_to_rt, rebal_rt_to_lf};
use super::Balance::*;
use std::cmp::Ordering::*;
use tracing::trace;

/// The subtree that replaces an old one after a key was added, and whether
/// it is one level taller than the subtree it replaces.
pub(super) enum Added<T> {
    Same(NodePtr<T>),
    Rose(NodePtr<T>),
}

impl<T> Added<T> {
    pub(super) fn rose(&self) -> bool {
        matches!(self, Added::Rose(_))
    }

    pub(super) fn into_node(self) -> NodePtr<T> {
        match self {
            Added::Same(n) | Added::Rose(n) => n,
        }
    }
}

// Adding a key raises a subtree by at most one level, so the rotation that
// follows always gets back to the height the subtree had before.
fn absorbed<T>(added: Added<T>) -> Added<T> {
    debug_assert!(!added.rose(), "rotation after an insert left the tree taller");
    added
}

// Inserts key into the tree rooted at root.  Returns None if the key is
// already present, in which case the caller keeps root as it is.
pub(super) fn ins<T: Clone + Ord>(root: &OptNodePtr<T>, key: T) -> Option<Added<T>> {
    use Added::*;

    let n = match root {
        None => return Some(Rose(Node::leaf(key))), // *** EARLY RETURN ***
        Some(n) => n,
    };

    let added = match key.cmp(&n.key) {
        Equal => {
            trace!("key already present");
            return None;
        }

        Less => match ins(&n.left, key)? {
            Same(lf) => Same(Node::new(n.key.clone(), Some(lf), n.right.clone(), n.bal)),

            Rose(lf) => match n.bal {
                RightTaller => Same(Node::new(
                    n.key.clone(),
                    Some(lf),
                    n.right.clone(),
                    Balanced,
                )),

                Balanced => Rose(Node::new(
                    n.key.clone(),
                    Some(lf),
                    n.right.clone(),
                    LeftTaller,
                )),

                LeftTaller => absorbed(rebal_lf_to_rt(n.key.clone(), lf, n.right.clone())),
            },
        },

        Greater => match ins(&n.right, key)? {
            Same(rt) => Same(Node::new(n.key.clone(), n.left.clone(), Some(rt), n.bal)),

            Rose(rt) => match n.bal {
                LeftTaller => Same(Node::new(
                    n.key.clone(),
                    n.left.clone(),
                    Some(rt),
                    Balanced,
                )),

                Balanced => Rose(Node::new(
                    n.key.clone(),
                    n.left.clone(),
                    Some(rt),
                    RightTaller,
                )),

                RightTaller => absorbed(rebal_rt_to_lf(n.key.clone(), n.left.clone(), rt)),
            },
        },
    };

    Some(added)
}
