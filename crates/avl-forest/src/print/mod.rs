//! Text rendering of trees and grids.

pub mod binary;
pub mod grid;
pub mod types;

use std::fmt::Display;

use crate::types::{AvlNode, Link};

pub use binary::print_binary;
pub use grid::print_grid;
pub use types::PrintChild;

/// Tree dump with `←` / `→` branches, e.g.
///
/// ```text
/// 5 [h=2]
/// ← 3 [h=1]
/// → 10 [h=1]
/// ```
pub fn dump<K: Display>(root: &Link<K>) -> String {
    match root.as_deref() {
        None => "∅".to_string(),
        Some(node) => dump_node(node, ""),
    }
}

fn dump_node<K: Display>(node: &AvlNode<K>, tab: &str) -> String {
    let left = node.left().map(|l| move |tab: &str| dump_node(l, tab));
    let right = node.right().map(|r| move |tab: &str| dump_node(r, tab));
    format!(
        "{} [h={}]{}",
        node.key,
        node.height,
        print_binary(
            Some(tab),
            left.as_ref().map(|f| f as &PrintChild<'_>),
            right.as_ref().map(|f| f as &PrintChild<'_>),
        )
    )
}
