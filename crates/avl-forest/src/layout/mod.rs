//! Grid layout of a tree shape.
//!
//! [`compute_layout`] walks the tree breadth-first and returns a fresh
//! [`Grid`] per call. The grid is a plain value: renderers turn
//! `(level, slot_index)` into screen coordinates and draw [`Grid::edges`].

pub mod grid;
pub mod indexer;

pub use grid::{global_index, level_offset, slot_of, Grid, GridEdge, GridSlot, Side, SlotPos};
pub use indexer::compute_layout;
