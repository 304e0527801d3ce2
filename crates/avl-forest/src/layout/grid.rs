//! Complete-binary-tree grid produced by [`super::compute_layout`].
//!
//! Positions use heap-style addressing: the root has global index 0, the
//! left child of `i` is `2i + 1` and the right child `2i + 2`. Within a level
//! the slot index is the global index minus the number of slots on all
//! shallower levels, `2^level - 1`.

use serde::Serialize;

/// Number of slots on all levels above `level`.
#[inline]
pub fn level_offset(level: u32) -> u64 {
    (1u64 << level) - 1
}

/// Global heap index of a slot.
#[inline]
pub fn global_index(level: u32, slot_index: u64) -> u64 {
    level_offset(level) + slot_index
}

/// Slot position of a global heap index. `None` for `u64::MAX`, which would
/// sit on level 64.
pub fn slot_of(global_index: u64) -> Option<SlotPos> {
    let level = 63 - global_index.checked_add(1)?.leading_zeros();
    Some(SlotPos {
        level,
        slot_index: global_index - level_offset(level),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// `(level, slot_index)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SlotPos {
    pub level: u32,
    pub slot_index: u64,
}

impl SlotPos {
    pub const ROOT: SlotPos = SlotPos {
        level: 0,
        slot_index: 0,
    };

    pub fn new(level: u32, slot_index: u64) -> Self {
        Self { level, slot_index }
    }

    pub fn child(self, side: Side) -> Self {
        let slot_index = match side {
            Side::Left => 2 * self.slot_index,
            Side::Right => 2 * self.slot_index + 1,
        };
        Self {
            level: self.level + 1,
            slot_index,
        }
    }

    pub fn left(self) -> Self {
        self.child(Side::Left)
    }

    pub fn right(self) -> Self {
        self.child(Side::Right)
    }

    pub fn parent(self) -> Option<Self> {
        if self.level == 0 {
            return None;
        }
        Some(Self {
            level: self.level - 1,
            slot_index: self.slot_index / 2,
        })
    }

    pub fn global_index(self) -> u64 {
        global_index(self.level, self.slot_index)
    }
}

/// One cell of the grid. Only slots backed by a tree node are visible.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GridSlot {
    pub level: u32,
    pub slot_index: u64,
    pub visible: bool,
    pub label: String,
}

impl GridSlot {
    pub fn pos(&self) -> SlotPos {
        SlotPos::new(self.level, self.slot_index)
    }
}

/// Connection between a visible slot and one of its visible children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GridEdge {
    pub parent: SlotPos,
    pub child: SlotPos,
    pub side: Side,
}

/// Layout of one tree shape: level `l` holds exactly `2^l` slots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Grid {
    levels: Vec<Vec<GridSlot>>,
}

impl Grid {
    /// All-invisible grid with `height` levels.
    pub(crate) fn with_height(height: u32) -> Self {
        let levels = (0..height)
            .map(|level| {
                (0..1u64 << level)
                    .map(|slot_index| GridSlot {
                        level,
                        slot_index,
                        ..GridSlot::default()
                    })
                    .collect()
            })
            .collect();
        Self { levels }
    }

    pub(crate) fn mark(&mut self, pos: SlotPos, label: String) {
        let slot = &mut self.levels[pos.level as usize][pos.slot_index as usize];
        slot.visible = true;
        slot.label = label;
    }

    pub fn height(&self) -> u32 {
        self.levels.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn levels(&self) -> &[Vec<GridSlot>] {
        &self.levels
    }

    pub fn level(&self, level: u32) -> Option<&[GridSlot]> {
        self.levels.get(level as usize).map(Vec::as_slice)
    }

    pub fn slot(&self, level: u32, slot_index: u64) -> Option<&GridSlot> {
        self.level(level)?.get(usize::try_from(slot_index).ok()?)
    }

    pub fn get(&self, pos: SlotPos) -> Option<&GridSlot> {
        self.slot(pos.level, pos.slot_index)
    }

    pub fn is_visible(&self, pos: SlotPos) -> bool {
        self.get(pos).is_some_and(|s| s.visible)
    }

    /// Visible slots, level by level, left to right.
    pub fn visible(&self) -> impl Iterator<Item = &GridSlot> + '_ {
        self.levels.iter().flatten().filter(|s| s.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    /// Visible children of the slot at `pos`, left first.
    pub fn children(&self, pos: SlotPos) -> impl Iterator<Item = (Side, &GridSlot)> + '_ {
        [Side::Left, Side::Right]
            .into_iter()
            .filter_map(move |side| self.get(pos.child(side)).map(|s| (side, s)))
            .filter(|(_, s)| s.visible)
    }

    /// Every parent/child pair where both slots are visible.
    pub fn edges(&self) -> Vec<GridEdge> {
        let mut edges = Vec::new();
        for slot in self.visible() {
            let parent = slot.pos();
            for (side, child) in self.children(parent) {
                edges.push(GridEdge {
                    parent,
                    child: child.pos(),
                    side,
                });
            }
        }
        edges
    }
}
