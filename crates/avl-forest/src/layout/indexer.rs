use std::collections::VecDeque;
use std::fmt::Display;

use tracing::debug;

use crate::avl::height;
use crate::types::{AvlNode, Link};

use super::grid::{level_offset, Grid, SlotPos};

/// Pending BFS visit.
struct Visit<'a, K> {
    node: &'a AvlNode<K>,
    global_index: u64,
    level: u32,
}

/// Maps every node of the tree onto a complete-binary-tree grid of the same
/// height.
///
/// Grid size is taken from the root's stored height, so the grid always has
/// room for every node. Each child's global index is derived from its own
/// parent's index, so missing siblings never shift anything. The tree is
/// only read.
pub fn compute_layout<K: Display>(root: &Link<K>) -> Grid {
    let mut grid = Grid::with_height(height(root));
    let Some(root) = root.as_deref() else {
        return grid;
    };

    let mut queue = VecDeque::new();
    queue.push_back(Visit {
        node: root,
        global_index: 0,
        level: 0,
    });

    let mut visited = 0usize;
    while let Some(Visit {
        node,
        global_index,
        level,
    }) = queue.pop_front()
    {
        let pos = SlotPos::new(level, global_index - level_offset(level));
        grid.mark(pos, node.key.to_string());
        visited += 1;

        if let Some(l) = node.left() {
            queue.push_back(Visit {
                node: l,
                global_index: 2 * global_index + 1,
                level: level + 1,
            });
        }
        if let Some(r) = node.right() {
            queue.push_back(Visit {
                node: r,
                global_index: 2 * global_index + 2,
                level: level + 1,
            });
        }
    }

    debug!(nodes = visited, height = grid.height(), "layout computed");
    grid
}
