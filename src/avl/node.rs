use crate::InvariantError;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

pub(super) type NodePtr<T> = Arc<Node<T>>;
pub(super) type OptNodePtr<T> = Option<NodePtr<T>>;

/// Which subtree of a node, if either, is one level taller than the other.
///
/// Nodes never store their height.  The tag is all an insertion needs to
/// decide whether to relabel a node, rotate, or report that it grew.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Balance {
    /// the left subtree is one level taller
    LeftTaller,
    /// both subtrees have the same height
    Balanced,
    /// the right subtree is one level taller
    RightTaller,
}

impl Balance {
    /// The tag describing subtrees of the given heights, or `None` if they
    /// differ by more than one.
    pub fn from_heights(left: usize, right: usize) -> Option<Balance> {
        use Balance::*;
        if left == right {
            Some(Balanced)
        } else if left == right + 1 {
            Some(LeftTaller)
        } else if right == left + 1 {
            Some(RightTaller)
        } else {
            None
        }
    }

    fn symbol(self) -> char {
        match self {
            Balance::LeftTaller => '-',
            Balance::Balanced => '=',
            Balance::RightTaller => '+',
        }
    }
}

#[derive(Clone)]
pub(super) struct Node<T> {
    pub(super) key: T,
    pub(super) bal: Balance,
    pub(super) left: OptNodePtr<T>,
    pub(super) right: OptNodePtr<T>,
}

impl<T> Node<T> {
    // The caller supplies the tag because it always knows which case it is
    // in.  Passing subtrees whose heights disagree with `bal` is a bug.
    pub(super) fn new(
        key: T,
        left: OptNodePtr<T>,
        right: OptNodePtr<T>,
        bal: Balance,
    ) -> NodePtr<T> {
        debug_assert_eq!(
            Balance::from_heights(height(&left), height(&right)),
            Some(bal),
            "subtree heights do not match the balance tag"
        );

        Arc::new(Node {
            key,
            bal,
            left,
            right,
        })
    }

    pub(super) fn leaf(key: T) -> NodePtr<T> {
        Self::new(key, None, None, Balance::Balanced)
    }

    #[cfg(test)]
    pub(super) fn for_each<F: FnMut(&T)>(&self, g: &mut F) {
        if let Some(lf) = self.left.as_ref() {
            lf.for_each(g);
        }

        g(&self.key);

        if let Some(rt) = self.right.as_ref() {
            rt.for_each(g);
        }
    }
}

impl<T: Ord> Node<T> {
    // Walks the subtree in order, verifying each node against the greatest
    // key seen so far.  Returns the subtree's length, its measured height,
    // and the greatest key it holds (or `greatest` if it is empty).
    fn chk<'a>(
        &'a self,
        greatest: Option<&'a T>,
        depth: usize,
    ) -> Result<(usize, usize, Option<&'a T>), InvariantError> {
        let (lf_len, lf_ht, greatest) = chk(&self.left, greatest, depth + 1)?;

        if greatest.is_some_and(|k| k >= &self.key) {
            return Err(InvariantError::OutOfOrder { depth });
        }

        let (rt_len, rt_ht, greatest) =
            chk(&self.right, Some(&self.key), depth + 1)?;

        match Balance::from_heights(lf_ht, rt_ht) {
            None => Err(InvariantError::Unbalanced {
                depth,
                left: lf_ht,
                right: rt_ht,
            }),

            Some(bal) if bal != self.bal => Err(InvariantError::WrongTag {
                depth,
                tag: self.bal,
                left: lf_ht,
                right: rt_ht,
            }),

            Some(_) => Ok((lf_len + rt_len + 1, lf_ht.max(rt_ht) + 1, greatest)),
        }
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({:?} {} ", self.key, self.bal.symbol()))?;

        match &self.left {
            None => f.write_str(".")?,
            Some(lf) => lf.fmt(f)?,
        }

        f.write_str(" ")?;

        match &self.right {
            None => f.write_str(".")?,
            Some(rt) => rt.fmt(f)?,
        }

        f.write_str(")")
    }
}

/// Height of a subtree, found by following the tags down its tallest path.
pub(super) fn height<T>(opt_node: &OptNodePtr<T>) -> usize {
    let mut ht = 0;
    let mut curr = opt_node;
    while let Some(n) = curr {
        ht += 1;
        curr = match n.bal {
            Balance::RightTaller => &n.right,
            _ => &n.left,
        };
    }
    ht
}

pub(super) fn chk<'a, T: Ord>(
    opt_node: &'a OptNodePtr<T>,
    greatest: Option<&'a T>,
    depth: usize,
) -> Result<(usize, usize, Option<&'a T>), InvariantError> {
    match opt_node.as_ref() {
        None => Ok((0, 0, greatest)),
        Some(n) => n.chk(greatest, depth),
    }
}

// Moves the node out of its pointer if nobody else holds it, and copies it
// otherwise.  Copying a node only bumps the counts of its children.
pub(super) fn take_node<T: Clone>(node: NodePtr<T>) -> Node<T> {
    Arc::try_unwrap(node).unwrap_or_else(|rc| (*rc).clone())
}

// Two subtrees are the same when they have the same shape, keys and tags.
pub(super) fn same_tree<T: PartialEq>(
    lhs: &OptNodePtr<T>,
    rhs: &OptNodePtr<T>,
) -> bool {
    match (lhs, rhs) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            Arc::ptr_eq(a, b)
                || (a.bal == b.bal
                    && a.key == b.key
                    && same_tree(&a.left, &b.left)
                    && same_tree(&a.right, &b.right))
        }
        _ => false,
    }
}
