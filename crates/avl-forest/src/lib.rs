//! Height-balanced binary search tree with a grid layout for renderers.
//!
//! Nodes own their children through `Option<Box<_>>` links. Mutating
//! operations take the root link by value and hand back the new root, so
//! rotations move subtrees instead of aliasing them.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`AvlNode`] and the [`Link`] alias |
//! [`avl`] | `insert`, `remove`, `search`, rotations, validation, [`AvlTree`] |
//! [`layout`] | [`compute_layout`] and the [`Grid`] it returns |
//! [`print`] | text dumps of trees and grids |
//! [`error`] | [`InvariantError`] |
//!
//! # Example
//!
//! ```
//! use avl_forest::{avl, compute_layout};
//!
//! let mut root = None;
//! for key in [5, 10, 3] {
//!     root = avl::insert(root, key);
//! }
//! assert_eq!(avl::in_order(&root), vec![&3, &5, &10]);
//!
//! let grid = compute_layout(&root);
//! assert_eq!(grid.height(), avl::height(&root));
//! assert_eq!(grid.slot(0, 0).map(|s| s.label.as_str()), Some("5"));
//! ```

pub mod avl;
pub mod error;
pub mod layout;
pub mod print;
pub mod types;

pub use avl::AvlTree;
pub use error::InvariantError;
pub use layout::{compute_layout, Grid, GridEdge, GridSlot, Side, SlotPos};
pub use types::{AvlNode, Link};
