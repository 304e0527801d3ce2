use std::cmp::Ordering;
use std::fmt::Debug;

use tracing::{debug, trace};

use crate::error::InvariantError;
use crate::types::{link_height, AvlNode, Link};

/// Height of a subtree, 0 when absent. Reads the stored field only.
#[inline]
pub fn height<K>(link: &Link<K>) -> u32 {
    link_height(link)
}

/// Balance factor of a subtree, 0 when absent.
#[inline]
pub fn balance<K>(link: &Link<K>) -> i32 {
    link.as_ref().map_or(0, |n| n.bf())
}

/// Left rotation around `n`. Its right child becomes the subtree root.
///
/// A pivot without a right child is returned untouched.
pub fn rotate_left<K>(mut n: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let Some(mut nr) = n.right.take() else {
        return n;
    };
    n.right = nr.left.take();
    n.update_height();
    nr.left = Some(n);
    nr.update_height();
    trace!(height = nr.height, "rotate_left");
    nr
}

/// Right rotation around `n`. Its left child becomes the subtree root.
///
/// A pivot without a left child is returned untouched.
pub fn rotate_right<K>(mut n: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    let Some(mut nl) = n.left.take() else {
        return n;
    };
    n.left = nl.right.take();
    n.update_height();
    nl.right = Some(n);
    nl.update_height();
    trace!(height = nl.height, "rotate_right");
    nl
}

/// Inserts `key` and returns the new root. Keys equal to a node's key go to
/// its right subtree, so duplicates are kept.
pub fn insert<K: Ord>(root: Link<K>, key: K) -> Link<K> {
    Some(insert_node(root, key))
}

fn insert_node<K: Ord>(link: Link<K>, key: K) -> Box<AvlNode<K>> {
    let Some(mut node) = link else {
        return AvlNode::boxed(key);
    };

    // If this node ends up unbalanced, no rotation happened below it, so the
    // child's key is the same before and after the descent.
    if key < node.key {
        let outer = node.left.as_ref().is_some_and(|l| key < l.key);
        node.left = Some(insert_node(node.left.take(), key));
        node.update_height();
        if node.bf() > 1 {
            if !outer {
                node.left = node.left.take().map(rotate_left);
            }
            return rotate_right(node);
        }
    } else {
        let outer = node.right.as_ref().is_some_and(|r| key >= r.key);
        node.right = Some(insert_node(node.right.take(), key));
        node.update_height();
        if node.bf() < -1 {
            if !outer {
                node.right = node.right.take().map(rotate_right);
            }
            return rotate_left(node);
        }
    }
    node
}

/// Removes one node holding `key` and returns the new root. Removing a key
/// that is not present returns the tree unchanged.
pub fn remove<K: Ord>(root: Link<K>, key: &K) -> Link<K> {
    remove_tracked(root, key).0
}

/// Like [`remove`], also reporting whether a node was detached.
pub fn remove_tracked<K: Ord>(root: Link<K>, key: &K) -> (Link<K>, bool) {
    let Some(mut node) = root else {
        return (None, false);
    };
    let removed = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, removed) = remove_tracked(node.left.take(), key);
            node.left = left;
            removed
        }
        Ordering::Greater => {
            let (right, removed) = remove_tracked(node.right.take(), key);
            node.right = right;
            removed
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => return (right, true),
            (left, None) => return (left, true),
            (Some(left), Some(right)) => {
                let (rest, successor) = take_min(right);
                node.key = successor;
                node.left = Some(left);
                node.right = rest;
                true
            }
        },
    };
    (Some(rebalance(node)), removed)
}

/// Detaches the minimum of `node`'s subtree, returning what is left of the
/// subtree and the minimum key.
fn take_min<K>(mut node: Box<AvlNode<K>>) -> (Link<K>, K) {
    match node.left.take() {
        None => {
            let AvlNode { key, right, .. } = *node;
            (right, key)
        }
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            (Some(rebalance(node)), min)
        }
    }
}

/// Restores height and balance of `node` after a removal in one of its
/// subtrees. The rotation case is chosen from the heavy child's balance.
fn rebalance<K>(mut node: Box<AvlNode<K>>) -> Box<AvlNode<K>> {
    node.update_height();
    let bf = node.bf();
    if bf > 1 {
        if balance(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if bf < -1 {
        if balance(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

/// Finds a node holding `key`. With duplicates, any one of them may be
/// returned.
pub fn search<'a, K: Ord>(root: &'a Link<K>, key: &K) -> Option<&'a AvlNode<K>> {
    let mut curr = root.as_deref();
    while let Some(node) = curr {
        curr = match key.cmp(&node.key) {
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
            Ordering::Equal => return Some(node),
        };
    }
    None
}

/// Leftmost node in the tree.
pub fn first<K>(root: &Link<K>) -> Option<&AvlNode<K>> {
    let mut curr = root.as_deref()?;
    while let Some(l) = curr.left() {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<K>(root: &Link<K>) -> Option<&AvlNode<K>> {
    let mut curr = root.as_deref()?;
    while let Some(r) = curr.right() {
        curr = r;
    }
    Some(curr)
}

/// Number of nodes.
pub fn size<K>(root: &Link<K>) -> usize {
    let mut count = 0;
    for_each(root, |_| count += 1);
    count
}

/// Visits every node in key order.
pub fn for_each<'a, K, F>(root: &'a Link<K>, mut f: F)
where
    F: FnMut(&'a AvlNode<K>),
{
    let mut stack: Vec<&'a AvlNode<K>> = Vec::new();
    let mut curr = root.as_deref();
    loop {
        while let Some(node) = curr {
            stack.push(node);
            curr = node.left();
        }
        let Some(node) = stack.pop() else {
            break;
        };
        f(node);
        curr = node.right();
    }
}

/// Keys in order.
pub fn in_order<K>(root: &Link<K>) -> Vec<&K> {
    let mut keys = Vec::new();
    for_each(root, |n| keys.push(&n.key));
    keys
}

/// Checks stored heights, balance factors and key order of the whole tree.
pub fn assert_avl_tree<K>(root: &Link<K>) -> Result<(), InvariantError>
where
    K: Ord + Debug,
{
    fn validate<K: Debug>(node: &AvlNode<K>) -> Result<u32, InvariantError> {
        let lh = match node.left() {
            Some(l) => validate(l)?,
            None => 0,
        };
        let rh = match node.right() {
            Some(r) => validate(r)?,
            None => 0,
        };

        let expected = 1 + lh.max(rh);
        if node.height != expected {
            return Err(InvariantError::HeightMismatch {
                key: format!("{:?}", node.key),
                stored: node.height,
                expected,
            });
        }
        let bf = lh as i32 - rh as i32;
        if !(-1..=1).contains(&bf) {
            return Err(InvariantError::BalanceViolated {
                key: format!("{:?}", node.key),
                bf,
            });
        }
        Ok(expected)
    }

    if let Some(node) = root.as_deref() {
        validate(node)?;
    }

    let keys = in_order(root);
    for pair in keys.windows(2) {
        if pair[0] > pair[1] {
            return Err(InvariantError::OrderViolated {
                prev: format!("{:?}", pair[0]),
                next: format!("{:?}", pair[1]),
            });
        }
    }

    debug!(nodes = keys.len(), height = height(root), "tree is valid");
    Ok(())
}

/// Debug printer for AVL trees.
pub fn print<K: Debug>(node: &Link<K>, tab: &str) -> String {
    match node.as_deref() {
        None => "∅".to_string(),
        Some(n) => {
            let left = print(&n.left, &format!("{tab}  "));
            let right = print(&n.right, &format!("{tab}  "));
            format!(
                "Node [h={}] [bf={}] {{ {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.height,
                n.bf(),
                n.key
            )
        }
    }
}
