//! `avl-view` — replays insert/delete sequences on an AVL tree and renders
//! the grid layout after every step.
//!
//! Provides the logic behind the `avl-view` binary:
//! - [`config`]   — TOML config and defaults
//! - [`playback`] — builds the tree, then deletes one key per frame
//! - [`render`]   — text or JSON output per frame

pub mod config;
pub mod error;
pub mod playback;
pub mod render;

pub use config::{parse_keys, DeleteOrder, OutputFormat, ViewConfig, ViewOverrides, DEMO_KEYS};
pub use error::ViewError;
pub use playback::{deletion_order, Action, Frame, Playback};
pub use render::{render, render_json, render_text};
