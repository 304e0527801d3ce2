use std::fmt::{self, Debug, Display};

use tracing::debug;

use crate::error::InvariantError;
use crate::layout::{compute_layout, Grid};
use crate::types::{AvlNode, Link};

use super::util;

/// AVL tree that owns its root link.
///
/// Thin wrapper over the functions in [`super::util`], which take and return
/// the root explicitly. Keeps a node count so `size` is O(1).
pub struct AvlTree<K> {
    root: Link<K>,
    size: usize,
}

impl<K> AvlTree<K> {
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    pub fn root(&self) -> Option<&AvlNode<K>> {
        self.root.as_deref()
    }

    /// Borrow of the root link, for use with the free functions.
    pub fn link(&self) -> &Link<K> {
        &self.root
    }

    /// Takes the root link out, leaving the tree empty.
    pub fn into_link(self) -> Link<K> {
        self.root
    }

    pub fn height(&self) -> u32 {
        util::height(&self.root)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    pub fn first(&self) -> Option<&K> {
        util::first(&self.root).map(|n| &n.key)
    }

    pub fn last(&self) -> Option<&K> {
        util::last(&self.root).map(|n| &n.key)
    }

    pub fn for_each<'a, G: FnMut(&'a K)>(&'a self, mut f: G) {
        util::for_each(&self.root, |n| f(&n.key));
    }

    /// Keys in order.
    pub fn keys(&self) -> Vec<&K> {
        util::in_order(&self.root)
    }
}

impl<K: Ord> AvlTree<K> {
    pub fn insert(&mut self, key: K) {
        self.root = util::insert(self.root.take(), key);
        self.size += 1;
        debug!(size = self.size, height = self.height(), "insert");
    }

    /// Removes one occurrence of `key`. Returns `false` if it was absent.
    pub fn delete(&mut self, key: &K) -> bool {
        let (root, removed) = util::remove_tracked(self.root.take(), key);
        self.root = root;
        if !removed {
            return false;
        }
        self.size -= 1;
        debug!(size = self.size, height = self.height(), "delete");
        true
    }

    pub fn search(&self, key: &K) -> Option<&AvlNode<K>> {
        util::search(&self.root, key)
    }

    pub fn has(&self, key: &K) -> bool {
        self.search(key).is_some()
    }
}

impl<K: Ord + Debug> AvlTree<K> {
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        util::assert_avl_tree(&self.root)
    }
}

impl<K: Display> AvlTree<K> {
    /// Fresh grid layout of the current shape.
    pub fn layout(&self) -> Grid {
        compute_layout(&self.root)
    }
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Debug> Debug for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AvlTree {}", util::print(&self.root, ""))
    }
}
