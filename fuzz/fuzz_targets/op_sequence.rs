// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for arbitrary operation sequences.
//!
//! Replays fuzzer-chosen inserts and removals against a skip-indexed list and
//! a `Vec`. Checkpoint maintenance is where the subtle bugs live: an entry
//! that drifts by one node still returns *a* value, just the wrong one.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use skiplink::{LinkedList, ListConfig, ListError};

/// One fuzzed operation. Positions are reduced modulo `len + 2` so that both
/// valid and rejected calls show up.
#[derive(Debug, Arbitrary)]
enum FuzzOp {
    Insert { value: u16, position: u16 },
    /// Inserts a run of values at one spot to grow the list quickly.
    Burst { value: u16, position: u16, count: u8 },
    RemoveAt { index: u16 },
    Remove { value: u16 },
    Set { index: u16, value: u16 },
    Clear,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    capacity: Option<u16>,
    skip_index: bool,
    ops: Vec<FuzzOp>,
}

fn reduce(raw: u16, len: usize) -> usize {
    raw as usize % (len + 2)
}

fuzz_target!(|input: FuzzInput| {
    let mut config = ListConfig::new().with_skip_index(input.skip_index);
    if let Some(capacity) = input.capacity {
        config = config.with_capacity_limit(capacity as usize);
    }
    let mut list: LinkedList<u16> = LinkedList::with_config(config);
    let mut oracle: Vec<u16> = Vec::new();

    // Cap work per input to avoid timeouts
    for op in input.ops.iter().take(2_000) {
        let len = oracle.len();
        match *op {
            FuzzOp::Insert { value, position } => {
                let position = reduce(position, len);
                let result = list.insert(value, position);
                let full = config.capacity.is_some_and(|c| len >= c);
                if full {
                    assert!(matches!(result, Err(ListError::CapacityExceeded { .. })));
                } else if position > len {
                    assert!(matches!(result, Err(ListError::InvalidPosition { .. })));
                } else {
                    assert_eq!(result, Ok(()));
                    oracle.insert(position, value);
                }
            }
            FuzzOp::Burst {
                value,
                position,
                count,
            } => {
                let position = position as usize % (len + 1);
                for _ in 0..count {
                    if list.insert(value, position).is_ok() {
                        oracle.insert(position, value);
                    }
                }
            }
            FuzzOp::RemoveAt { index } => {
                let index = reduce(index, len);
                let result = list.remove_at(index);
                if index < len {
                    assert_eq!(result, Ok(oracle.remove(index)));
                } else {
                    assert!(result.is_err());
                }
            }
            FuzzOp::Remove { value } => match oracle.iter().position(|&v| v == value) {
                Some(index) => {
                    oracle.remove(index);
                    assert_eq!(list.remove(&value), Ok(value));
                }
                None => assert_eq!(list.remove(&value), Err(ListError::NotFound)),
            },
            FuzzOp::Set { index, value } => {
                let index = reduce(index, len);
                let result = list.set(index, value);
                match oracle.get_mut(index) {
                    Some(slot) => assert_eq!(result, Ok(std::mem::replace(slot, value))),
                    None => assert!(result.is_err()),
                }
            }
            FuzzOp::Clear => {
                list.clear();
                oracle.clear();
            }
        }
        assert_eq!(list.len(), oracle.len());
    }

    if let Err(e) = list.verify() {
        panic!("audit failed: {}", e);
    }
    for (index, expected) in oracle.iter().enumerate() {
        assert_eq!(list.get(index), Ok(expected), "index {}", index);
    }
});
