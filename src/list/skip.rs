// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checkpoint skip index.
//!
//! The index is another [`LinkedList`], holding [`NodeId`]s instead of
//! user values and never carrying an index of its own. Entry `k` names the
//! node at logical position `k * SKIP_DENSITY` of the owning list.
//!
//! # Maintenance
//!
//! Mutations shift every node at or after the mutation point by one position,
//! so each affected checkpoint moves exactly one link:
//!
//! ```text
//! insert at p:  checkpoint k with k*D >= p  ->  prev(target)
//! remove at i:  checkpoint k with k*D >= i  ->  next(target)   (pre-removal links)
//! ```
//!
//! Only structural links are followed, never `locate`, so a checkpoint being
//! repaired is never used to find another one. The cost is one step per
//! affected checkpoint, plus one walk through the index to reach the first.

use super::LinkedList;
use crate::node::{Node, NodeId};

/// Spacing between consecutive checkpoints.
pub const SKIP_DENSITY: usize = 250;

pub(crate) type SkipIndex = LinkedList<NodeId>;

/// Number of checkpoints a list of `len` elements carries once indexed.
///
/// Positions `0, D, 2D, ...` below `len` each get one.
#[inline]
pub fn checkpoint_count(len: usize) -> usize {
    len.div_ceil(SKIP_DENSITY)
}

/// Splits a position into `(checkpoint, remainder)` for an index holding
/// `checkpoints` entries.
///
/// The checkpoint is clamped to the last entry, so one-past-the-last positions
/// on a density boundary resolve to the final checkpoint plus `SKIP_DENSITY`.
#[inline]
pub fn split_position(position: usize, checkpoints: usize) -> (usize, usize) {
    let checkpoint = (position / SKIP_DENSITY).min(checkpoints.saturating_sub(1));
    (checkpoint, position - checkpoint * SKIP_DENSITY)
}

/// First checkpoint whose position is at or after `position`.
#[inline]
fn first_affected(position: usize) -> usize {
    position.div_ceil(SKIP_DENSITY)
}

impl<T> LinkedList<T> {
    /// Repairs the index after a node was linked in at `position`.
    ///
    /// `len` already counts the new node.
    pub(super) fn shift_checkpoints_for_insert(&mut self, position: usize) {
        let Some(skip) = self.skip.as_deref_mut() else {
            if self.len > SKIP_DENSITY {
                let index = self.sweep_checkpoints();
                self.skip = Some(Box::new(index));
            }
            return;
        };

        let arena = &self.arena;
        skip.update_from(first_affected(position), |target| *target = arena.prev(*target));

        // The new last node sits on a density boundary.
        if (self.len - 1) % SKIP_DENSITY == 0 {
            let tail = arena.prev(self.end);
            skip.push_checkpoint(tail);
        }
    }

    /// Repairs the index before the node at `index` is unlinked.
    pub(super) fn shift_checkpoints_for_remove(&mut self, index: usize) {
        let Some(skip) = self.skip.as_deref_mut() else {
            return;
        };

        let remaining = checkpoint_count(self.len - 1);
        while skip.len() > remaining {
            skip.pop_back();
        }

        let arena = &self.arena;
        skip.update_from(first_affected(index), |target| *target = arena.next(*target));
    }

    /// Builds a fresh index with one forward sweep over the whole list.
    fn sweep_checkpoints(&self) -> SkipIndex {
        let mut index = SkipIndex::new();
        for id in self.node_ids().step_by(SKIP_DENSITY) {
            index.push_checkpoint(id);
        }
        index
    }

    /// Applies `f` to every item from position `start` to the end, in order.
    pub(crate) fn update_from(&mut self, start: usize, mut f: impl FnMut(&mut T)) {
        if start >= self.len {
            return;
        }
        let mut id = self.locate(start);
        while let Node::Occupied { item, next, .. } = self.arena.node_mut(id) {
            f(item);
            id = *next;
        }
    }
}

impl SkipIndex {
    fn push_checkpoint(&mut self, id: NodeId) {
        let position = self.len;
        self.insert_unchecked(id, position);
    }
}
