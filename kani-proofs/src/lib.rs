// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for skiplink checkpoint arithmetic.
//!
//! This standalone crate extracts the position arithmetic behind the skip
//! index and proves it for every input within the bounds below.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Count**: `checkpoint_count(len)` is the smallest `c` with `c * D >= len`
//! 2. **Split**: every position up to `len` lands in an existing window
//! 3. **Affected range**: `k >= first_affected(p)` exactly when `k * D >= p`
//! 4. **Growth**: one insert adds a checkpoint iff the old length was a multiple of `D`
//! 5. **Shrink**: one removal drops a checkpoint iff the new length is a multiple of `D`

/// Spacing between consecutive checkpoints.
pub const SKIP_DENSITY: usize = 250;

/// Largest length the proofs consider; keeps the products far from overflow.
pub const MAX_LEN: usize = 1 << 40;

// ============================================================================
// CHECKPOINT ARITHMETIC (copied from src/list/skip.rs)
// ============================================================================

/// Number of checkpoints a list of `len` elements carries once indexed.
pub fn checkpoint_count(len: usize) -> usize {
    len.div_ceil(SKIP_DENSITY)
}

/// Splits a position into `(checkpoint, remainder)`.
pub fn split_position(position: usize, checkpoints: usize) -> (usize, usize) {
    let checkpoint = (position / SKIP_DENSITY).min(checkpoints.saturating_sub(1));
    (checkpoint, position - checkpoint * SKIP_DENSITY)
}

/// First checkpoint whose position is at or after `position`.
pub fn first_affected(position: usize) -> usize {
    position.div_ceil(SKIP_DENSITY)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify checkpoint_count is the ceiling of len / D.
    #[kani::proof]
    fn verify_checkpoint_count_is_ceiling() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let count = checkpoint_count(len);

        kani::assert(count * SKIP_DENSITY >= len, "checkpoints must cover len");
        if count > 0 {
            kani::assert(
                (count - 1) * SKIP_DENSITY < len,
                "no checkpoint may sit at or past len",
            );
        }
    }

    /// Verify split_position never panics and stays inside the index.
    #[kani::proof]
    fn verify_split_position_in_bounds() {
        let len: usize = kani::any_where(|&n| n >= 1 && n <= MAX_LEN);
        let position: usize = kani::any_where(|&p| p <= len);
        let checkpoints = checkpoint_count(len);

        let (checkpoint, offset) = split_position(position, checkpoints);

        kani::assert(checkpoint < checkpoints, "checkpoint must exist");
        kani::assert(
            checkpoint * SKIP_DENSITY + offset == position,
            "split must recombine to the position",
        );
        kani::assert(offset <= SKIP_DENSITY, "walk from checkpoint is bounded");
        if position < len {
            kani::assert(offset < SKIP_DENSITY, "element lookups stay in one window");
        }
    }

    /// Verify the affected checkpoints are exactly those at or after p.
    #[kani::proof]
    fn verify_first_affected_boundary() {
        let position: usize = kani::any_where(|&p| p <= MAX_LEN);
        let k: usize = kani::any_where(|&k| k <= MAX_LEN / SKIP_DENSITY + 1);

        let affected = k >= first_affected(position);
        kani::assert(
            affected == (k * SKIP_DENSITY >= position),
            "affected range must match checkpoint positions",
        );
    }

    /// Verify an insert adds a checkpoint exactly when the new tail is on a boundary.
    #[kani::proof]
    fn verify_insert_growth() {
        let len: usize = kani::any_where(|&n| n < MAX_LEN);
        let before = checkpoint_count(len);
        let after = checkpoint_count(len + 1);

        kani::assert(after - before <= 1, "at most one checkpoint per insert");
        kani::assert(
            (after == before + 1) == (len % SKIP_DENSITY == 0),
            "new checkpoint iff new tail sits at a multiple of D",
        );
    }

    /// Verify a removal drops a checkpoint exactly when the shorter list ends on a boundary.
    #[kani::proof]
    fn verify_remove_shrink() {
        let len: usize = kani::any_where(|&n| n >= 1 && n <= MAX_LEN);
        let before = checkpoint_count(len);
        let after = checkpoint_count(len - 1);

        kani::assert(before - after <= 1, "at most one checkpoint per removal");
        kani::assert(
            (after + 1 == before) == ((len - 1) % SKIP_DENSITY == 0),
            "checkpoint dropped iff its position falls off the end",
        );
    }
}
