//! AVL tree over owned links.
//!
//! [`util`] holds the functional core: every operation takes the root link by
//! value and returns the new root. [`AvlTree`] wraps a root for callers that
//! would rather not thread it through by hand.

#[path = "AvlTree.rs"]
pub mod avl_tree;
pub mod util;

pub use avl_tree::AvlTree;
pub use util::remove as delete;
pub use util::{
    assert_avl_tree, balance, first, for_each, height, in_order, insert, last, print, remove,
    remove_tracked, rotate_left, rotate_right, search, size,
};
