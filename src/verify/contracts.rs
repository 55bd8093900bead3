// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts checked after every mutation.
//!
//! These are `debug_assert!`s: zero-cost in release builds, early failure in
//! development. Each check is O(1) so that debug builds can still push tens of
//! thousands of operations through a list in tests.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract                  | Invariant                                        |
//! |---------------------------|--------------------------------------------------|
//! | empty iff head is end     | `len == 0` exactly when head is the terminal     |
//! | no leaked slots           | live arena slots == `len + 1`                    |
//! | capacity respected        | `len <= capacity`                                |
//! | checkpoint count          | `ceil(len / SKIP_DENSITY)` entries when indexed  |
//! | first checkpoint is head  | entry 0 names the head node                      |
//! | index only when enabled   | no skip index on a list built without one        |
//!
//! The O(n) placement check for every checkpoint lives in `LinkedList::verify`.

use crate::list::{checkpoint_count, LinkedList};

/// Check the O(1) bookkeeping of a list.
///
/// # Panics (debug builds only)
/// Panics if any invariant in the table above is violated.
#[inline]
pub fn check_list_bookkeeping<T>(list: &LinkedList<T>) {
    // INVARIANT: empty iff head is end
    debug_assert_eq!(
        list.len() == 0,
        list.head_id() == list.end_id(),
        "Contract violation: len {} disagrees with head/terminal identity",
        list.len()
    );

    // INVARIANT: no leaked slots
    debug_assert_eq!(
        list.arena().live_slots(),
        list.len() + 1,
        "Contract violation: {} live slots for len {}",
        list.arena().live_slots(),
        list.len()
    );

    // INVARIANT: capacity respected
    if let Some(capacity) = list.capacity() {
        debug_assert!(
            list.len() <= capacity,
            "Contract violation: len {} exceeds capacity {}",
            list.len(),
            capacity
        );
    }

    check_checkpoint_bookkeeping(list);
}

/// Check the skip index's size and anchor.
///
/// # Panics (debug builds only)
/// Panics if the index exists on a plain list, holds the wrong number of
/// checkpoints, or does not start at the head.
#[inline]
pub fn check_checkpoint_bookkeeping<T>(list: &LinkedList<T>) {
    let Some(skip) = list.checkpoints() else {
        return;
    };

    // INVARIANT: index only when enabled
    debug_assert!(
        list.skip_index_enabled(),
        "Contract violation: skip index present on a list built without one"
    );

    // INVARIANT: checkpoint count
    debug_assert_eq!(
        skip.len(),
        checkpoint_count(list.len()),
        "Contract violation: {} checkpoints for len {}",
        skip.len(),
        list.len()
    );

    // INVARIANT: first checkpoint is head
    if let Some(first) = skip.front() {
        debug_assert_eq!(
            *first,
            list.head_id(),
            "Contract violation: checkpoint 0 is not the head node"
        );
    }
}
