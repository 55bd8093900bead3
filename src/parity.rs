// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Differential harness: a skip-indexed list against a plain one.
//!
//! Both lists receive the identical operation schedule. The plain list only
//! ever walks from head or terminal, so it is the trusted side; any element
//! where the indexed list disagrees points at a checkpoint maintenance bug.
//!
//! The default schedule is the classic stress pattern: for `i` in `1..n`,
//! insert `i` at `len / 3` and again at `i - 1`, then remove the values
//! `n-1, n-4, n-7, ...` down to 1. Inserts land all over the list and cross
//! density boundaries constantly.

use crate::config::ListConfig;
use crate::error::ListError;
use crate::list::LinkedList;
use serde::{Deserialize, Serialize};

/// Most mismatches a report lists individually.
pub const MAX_REPORTED_MISMATCHES: usize = 16;

/// One step of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Op {
    Insert { value: i64, position: usize },
    RemoveAt { index: usize },
    Remove { value: i64 },
    Clear,
}

/// Applies one operation to a list.
pub fn apply(list: &mut LinkedList<i64>, op: &Op) -> Result<(), ListError> {
    match *op {
        Op::Insert { value, position } => list.insert(value, position),
        Op::RemoveAt { index } => list.remove_at(index).map(drop),
        Op::Remove { value } => list.remove(&value).map(drop),
        Op::Clear => {
            list.clear();
            Ok(())
        }
    }
}

/// The interleaved insert/remove schedule over `n` values.
///
/// Insert positions are computed from the list length the schedule itself
/// produces, so the schedule is valid for any unbounded list.
pub fn demo_schedule(n: usize) -> Vec<Op> {
    let mut ops = Vec::with_capacity(n * 2 + n / 3 + 1);
    ops.push(Op::Insert {
        value: 0,
        position: 0,
    });

    let mut len = 1usize;
    for i in 1..n {
        ops.push(Op::Insert {
            value: i as i64,
            position: len / 3,
        });
        ops.push(Op::Insert {
            value: i as i64,
            position: i - 1,
        });
        len += 2;
    }

    let mut value = n.saturating_sub(1);
    while value > 0 {
        ops.push(Op::Remove {
            value: value as i64,
        });
        value = value.saturating_sub(3);
    }
    ops
}

/// An element where the two lists disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mismatch {
    pub index: usize,
    pub plain: i64,
    pub indexed: i64,
}

/// Outcome of a differential run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParityReport {
    /// Operations applied to each list.
    pub operations: usize,
    /// Operations both lists rejected with the same error.
    pub rejected: usize,
    /// Schedule positions where one list accepted and the other rejected.
    pub diverged_ops: Vec<usize>,
    pub plain_len: usize,
    pub indexed_len: usize,
    /// Checkpoints held by the indexed list at the end.
    pub checkpoints: usize,
    /// Total element mismatches.
    pub mismatch_count: usize,
    /// The first few mismatches.
    pub mismatches: Vec<Mismatch>,
    /// Structural audit failure of the indexed list, if any.
    pub audit_error: Option<String>,
}

impl ParityReport {
    pub fn is_consistent(&self) -> bool {
        self.diverged_ops.is_empty()
            && self.plain_len == self.indexed_len
            && self.mismatch_count == 0
            && self.audit_error.is_none()
    }
}

/// Runs `schedule` against a plain and a skip-indexed list with the same
/// capacity, then compares every element by indexed reads.
pub fn run(schedule: &[Op], capacity: Option<usize>) -> ParityReport {
    let base = ListConfig {
        capacity,
        skip_index: false,
    };
    let mut plain = LinkedList::with_config(base);
    let mut indexed = LinkedList::with_config(base.with_skip_index(true));

    let mut rejected = 0;
    let mut diverged_ops = Vec::new();
    for (step, op) in schedule.iter().enumerate() {
        let expected = apply(&mut plain, op);
        let actual = apply(&mut indexed, op);
        match (expected, actual) {
            (Ok(()), Ok(())) => {}
            (Err(a), Err(b)) if a == b => rejected += 1,
            _ => diverged_ops.push(step),
        }
    }

    let mut mismatch_count = 0;
    let mut mismatches = Vec::new();
    for (index, &expected) in plain.iter().enumerate() {
        let Ok(&actual) = indexed.get(index) else {
            break;
        };
        if actual != expected {
            mismatch_count += 1;
            if mismatches.len() < MAX_REPORTED_MISMATCHES {
                mismatches.push(Mismatch {
                    index,
                    plain: expected,
                    indexed: actual,
                });
            }
        }
    }

    ParityReport {
        operations: schedule.len(),
        rejected,
        diverged_ops,
        plain_len: plain.len(),
        indexed_len: indexed.len(),
        checkpoints: indexed.checkpoint_count(),
        mismatch_count,
        mismatches,
        audit_error: indexed.verify().err().map(|e| e.to_string()),
    }
}
