//! Node and link definitions.
//!
//! Every node is exclusively owned by its parent's `left` / `right` slot, or
//! by the caller's root [`Link`]. There are no parent pointers: rebalancing
//! walks back up the recursion instead.

/// Owned, optional subtree. `None` is the empty tree.
pub type Link<K> = Option<Box<AvlNode<K>>>;

/// AVL tree node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvlNode<K> {
    pub key: K,
    pub left: Link<K>,
    pub right: Link<K>,
    /// Height of the subtree rooted here, leaf = 1.
    pub height: u32,
}

impl<K> AvlNode<K> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    pub fn boxed(key: K) -> Box<Self> {
        Box::new(Self::new(key))
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn left(&self) -> Option<&AvlNode<K>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&AvlNode<K>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// `height(left) - height(right)`.
    pub fn bf(&self) -> i32 {
        link_height(&self.left) as i32 - link_height(&self.right) as i32
    }

    /// Recomputes the stored height from the children's stored heights.
    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + link_height(&self.left).max(link_height(&self.right));
    }
}

#[inline]
pub(crate) fn link_height<K>(link: &Link<K>) -> u32 {
    link.as_ref().map_or(0, |n| n.height)
}
