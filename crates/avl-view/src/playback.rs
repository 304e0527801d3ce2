//! Insert-then-delete playback.
//!
//! All keys are inserted up front and shown as the first frame. Each later
//! frame deletes one key and shows the fresh layout, until no keys remain to
//! delete.

use std::collections::VecDeque;

use avl_forest::{AvlTree, Grid};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{DeleteOrder, ViewConfig};
use crate::error::ViewError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Action {
    Built { inserted: usize },
    Deleted { key: i64 },
}

/// One rendered state of the tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub step: usize,
    pub action: Action,
    pub height: u32,
    pub size: usize,
    pub grid: Grid,
}

/// Keys in the order they will be deleted.
pub fn deletion_order(keys: &[i64], order: DeleteOrder, seed: u64) -> Vec<i64> {
    match order {
        DeleteOrder::None => Vec::new(),
        DeleteOrder::Input => keys.to_vec(),
        DeleteOrder::Reverse => keys.iter().rev().copied().collect(),
        DeleteOrder::Shuffled => {
            let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
            let mut out = keys.to_vec();
            out.shuffle(&mut rng);
            out
        }
    }
}

pub struct Playback {
    tree: AvlTree<i64>,
    pending: VecDeque<i64>,
    inserted: usize,
    step: usize,
    check: bool,
    seed: u64,
}

impl Playback {
    pub fn new(config: &ViewConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| OsRng.next_u64());
        if config.delete_order == DeleteOrder::Shuffled {
            info!(seed, "shuffling deletion order");
        }

        let tree: AvlTree<i64> = config.keys.iter().copied().collect();
        let pending = deletion_order(&config.keys, config.delete_order, seed).into();
        Self {
            tree,
            pending,
            inserted: config.keys.len(),
            step: 0,
            check: config.check,
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tree(&self) -> &AvlTree<i64> {
        &self.tree
    }

    /// Keys still waiting to be deleted.
    pub fn pending(&self) -> impl Iterator<Item = &i64> + '_ {
        self.pending.iter()
    }

    /// Advances one step. Returns `None` once every pending key is deleted.
    pub fn next_frame(&mut self) -> Result<Option<Frame>, ViewError> {
        let action = if self.step == 0 {
            Action::Built {
                inserted: self.inserted,
            }
        } else {
            let Some(key) = self.pending.pop_front() else {
                return Ok(None);
            };
            if !self.tree.delete(&key) {
                debug!(key, "key already gone");
            }
            Action::Deleted { key }
        };

        if self.check {
            self.tree
                .assert_valid()
                .map_err(|source| ViewError::Invariant {
                    step: self.step,
                    source,
                })?;
        }

        let frame = Frame {
            step: self.step,
            action,
            height: self.tree.height(),
            size: self.tree.size(),
            grid: self.tree.layout(),
        };
        debug!(step = frame.step, size = frame.size, "frame ready");
        self.step += 1;
        Ok(Some(frame))
    }

    /// Plays every step and collects the frames.
    pub fn run(config: &ViewConfig) -> Result<Vec<Frame>, ViewError> {
        let mut playback = Self::new(config);
        let mut frames = Vec::new();
        while let Some(frame) = playback.next_frame()? {
            frames.push(frame);
        }
        Ok(frames)
    }
}
