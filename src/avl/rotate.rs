use super::insert::Added;
use super::node::{take_node, Node, NodePtr, OptNodePtr};
use super::Balance::{self, *};
use tracing::trace;

// Rebalances a node whose left subtree has become two levels taller than its
// right subtree.  `key` and `right` belong to the node being replaced.
pub(super) fn rebal_lf_to_rt<T: Clone>(
    key: T,
    left: NodePtr<T>,
    right: OptNodePtr<T>,
) -> Added<T> {
    if left.bal == RightTaller {
        Added::Same(rot_lf_rt(key, left, right))
    } else {
        rot_rt(key, left, right)
    }
}

// Rebalances a node whose right subtree has become two levels taller than its
// left subtree.
pub(super) fn rebal_rt_to_lf<T: Clone>(
    key: T,
    left: OptNodePtr<T>,
    right: NodePtr<T>,
) -> Added<T> {
    if right.bal == LeftTaller {
        Added::Same(rot_rt_lf(key, left, right))
    } else {
        rot_lf(key, left, right)
    }
}

fn rot_rt<T: Clone>(key: T, left: NodePtr<T>, right: OptNodePtr<T>) -> Added<T> {
    // We want the following transformation:
    //    a(b(x, y), z)   =>   b(x, a(y, z))
    // x and z retain the same parents.
    let b = take_node(left);
    trace!(child = ?b.bal, "single rotation to the right");

    match b.bal {
        LeftTaller => {
            let a = Node::new(key, b.right, right, Balanced);
            Added::Same(Node::new(b.key, b.left, Some(a), Balanced))
        }

        // insertion never gets here; the result is as tall as the
        // unbalanced tree was
        Balanced => {
            let a = Node::new(key, b.right, right, LeftTaller);
            Added::Rose(Node::new(b.key, b.left, Some(a), RightTaller))
        }

        RightTaller => panic!("single rotation of a right-taller left subtree"),
    }
}

fn rot_lf<T: Clone>(key: T, left: OptNodePtr<T>, right: NodePtr<T>) -> Added<T> {
    // We want the following transformation:
    //    a(x, b(y, z))   =>   b(a(x, y), z)
    // x and z retain the same parents.
    let b = take_node(right);
    trace!(child = ?b.bal, "single rotation to the left");

    match b.bal {
        RightTaller => {
            let a = Node::new(key, left, b.left, Balanced);
            Added::Same(Node::new(b.key, Some(a), b.right, Balanced))
        }

        Balanced => {
            let a = Node::new(key, left, b.left, RightTaller);
            Added::Rose(Node::new(b.key, Some(a), b.right, LeftTaller))
        }

        LeftTaller => panic!("single rotation of a left-taller right subtree"),
    }
}

// Tags for the two nodes reattached under the promoted grandchild c of a
// double rotation, in left-to-right order.  The side of c that was shorter
// leaves the node that receives it one level short on that side.
fn split_tags(c_bal: Balance) -> (Balance, Balance) {
    match c_bal {
        Balanced => (Balanced, Balanced),
        LeftTaller => (Balanced, RightTaller),
        RightTaller => (LeftTaller, Balanced),
    }
}

fn rot_lf_rt<T: Clone>(key: T, left: NodePtr<T>, right: OptNodePtr<T>) -> NodePtr<T> {
    // We want the following transformation:
    //    a(b(x, c(y, z)), w)   =>   c(b(x, y), a(z, w))
    // x and w retain the same parents.
    let b = take_node(left);
    let c = match b.right {
        Some(c) => take_node(c),
        None => panic!("right-taller node with an empty right subtree"),
    };
    trace!(grandchild = ?c.bal, "double rotation, left then right");

    let (b_bal, a_bal) = split_tags(c.bal);
    let b = Node::new(b.key, b.left, c.left, b_bal);
    let a = Node::new(key, c.right, right, a_bal);

    // this rebalance always makes the tree shorter
    Node::new(c.key, Some(b), Some(a), Balanced)
}

fn rot_rt_lf<T: Clone>(key: T, left: OptNodePtr<T>, right: NodePtr<T>) -> NodePtr<T> {
    // We want the following transformation:
    //    a(x, b(c(y, z), w))   =>   c(a(x, y), b(z, w))
    // x and w retain the same parents.
    let b = take_node(right);
    let c = match b.left {
        Some(c) => take_node(c),
        None => panic!("left-taller node with an empty left subtree"),
    };
    trace!(grandchild = ?c.bal, "double rotation, right then left");

    let (a_bal, b_bal) = split_tags(c.bal);
    let a = Node::new(key, left, c.left, a_bal);
    let b = Node::new(b.key, c.right, b.right, b_bal);

    Node::new(c.key, Some(a), Some(b), Balanced)
}
