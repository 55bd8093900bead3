// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural audit of a list.
//!
//! # Checked Invariants
//!
//! | Invariant            | What's checked                                      |
//! |----------------------|-----------------------------------------------------|
//! | Length               | occupied nodes reachable from head == `len`         |
//! | Back links           | `prev` of every node names its predecessor          |
//! | Terminal             | the walk ends at the list's own terminal            |
//! | Slots                | no leaked arena slots                               |
//! | Capacity             | `len <= capacity`                                   |
//! | Checkpoint count     | `ceil(len / SKIP_DENSITY)` entries                  |
//! | Checkpoint placement | entry `k` names the node at `k * SKIP_DENSITY`      |

use crate::list::{checkpoint_count, LinkedList, SKIP_DENSITY};
use crate::node::NodeId;
use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// The walk from head found a different number of elements than `len`.
    LengthMismatch { claimed: usize, actual: usize },
    /// The node at `position` does not point back at its predecessor.
    BrokenBackLink { position: usize },
    /// The forward walk ended somewhere other than the list's terminal node.
    TerminalMismatch,
    /// Arena holds more or fewer live slots than nodes in the chain.
    SlotLeak { live_slots: usize, expected: usize },
    /// More elements than the capacity allows.
    OverCapacity { len: usize, capacity: usize },
    /// A skip index exists on a list built without one.
    UnexpectedSkipIndex,
    /// A skip-indexed list grew past one window without building its index.
    MissingSkipIndex { len: usize },
    /// The skip index holds the wrong number of checkpoints.
    CheckpointCount { expected: usize, actual: usize },
    /// A checkpoint names a node other than the one at its position.
    MisplacedCheckpoint {
        checkpoint: usize,
        expected_position: usize,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::LengthMismatch { claimed, actual } => {
                write!(f, "len {} but {} nodes reachable from head", claimed, actual)
            }
            InvariantError::BrokenBackLink { position } => {
                write!(f, "node at position {} has a wrong prev link", position)
            }
            InvariantError::TerminalMismatch => {
                f.write_str("forward walk does not end at the terminal node")
            }
            InvariantError::SlotLeak {
                live_slots,
                expected,
            } => {
                write!(f, "{} live arena slots, expected {}", live_slots, expected)
            }
            InvariantError::OverCapacity { len, capacity } => {
                write!(f, "len {} exceeds capacity {}", len, capacity)
            }
            InvariantError::UnexpectedSkipIndex => {
                f.write_str("skip index present while skip indexing is disabled")
            }
            InvariantError::MissingSkipIndex { len } => {
                write!(f, "no skip index on skip-enabled list of length {}", len)
            }
            InvariantError::CheckpointCount { expected, actual } => {
                write!(f, "{} checkpoints, expected {}", actual, expected)
            }
            InvariantError::MisplacedCheckpoint {
                checkpoint,
                expected_position,
            } => {
                write!(
                    f,
                    "checkpoint {} does not point at position {}",
                    checkpoint, expected_position
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Summary of a successful audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationReport {
    /// Elements walked from head to terminal.
    pub len: usize,
    /// Checkpoints confirmed in the skip index.
    pub checkpoints: usize,
}

impl<T> LinkedList<T> {
    /// Walks the whole list and checks every structural invariant.
    pub fn verify(&self) -> Result<VerificationReport, InvariantError> {
        let arena = self.arena();
        let mut previous: Option<NodeId> = None;
        let mut positions: Vec<NodeId> = Vec::with_capacity(self.len());

        for (position, id) in self.node_ids().enumerate() {
            if arena.node(id).prev() != previous {
                return Err(InvariantError::BrokenBackLink { position });
            }
            positions.push(id);
            previous = Some(id);
        }

        let last = previous.map_or(self.head_id(), |id| arena.next(id));
        if last != self.end_id() {
            return Err(InvariantError::TerminalMismatch);
        }
        if arena.node(self.end_id()).prev() != previous {
            return Err(InvariantError::BrokenBackLink {
                position: positions.len(),
            });
        }
        if positions.len() != self.len() {
            return Err(InvariantError::LengthMismatch {
                claimed: self.len(),
                actual: positions.len(),
            });
        }
        if arena.live_slots() != positions.len() + 1 {
            return Err(InvariantError::SlotLeak {
                live_slots: arena.live_slots(),
                expected: positions.len() + 1,
            });
        }
        if let Some(capacity) = self.capacity() {
            if self.len() > capacity {
                return Err(InvariantError::OverCapacity {
                    len: self.len(),
                    capacity,
                });
            }
        }

        let checkpoints = self.verify_checkpoints(&positions)?;
        Ok(VerificationReport {
            len: positions.len(),
            checkpoints,
        })
    }

    fn verify_checkpoints(&self, positions: &[NodeId]) -> Result<usize, InvariantError> {
        let Some(skip) = self.checkpoints() else {
            if self.skip_index_enabled() && self.len() > SKIP_DENSITY {
                return Err(InvariantError::MissingSkipIndex { len: self.len() });
            }
            return Ok(0);
        };
        if !self.skip_index_enabled() {
            return Err(InvariantError::UnexpectedSkipIndex);
        }

        let expected = checkpoint_count(self.len());
        if skip.len() != expected {
            return Err(InvariantError::CheckpointCount {
                expected,
                actual: skip.len(),
            });
        }
        for (checkpoint, id) in skip.iter().enumerate() {
            let expected_position = checkpoint * SKIP_DENSITY;
            if positions.get(expected_position) != Some(id) {
                return Err(InvariantError::MisplacedCheckpoint {
                    checkpoint,
                    expected_position,
                });
            }
        }
        Ok(skip.len())
    }
}
