// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: full audits and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Audits** (`LinkedList::verify`) walk the whole structure and report
//!    the first violated invariant as an [`InvariantError`]. O(n), meant for
//!    tests and diagnostics.
//!
//! 2. **Runtime contracts** that panic in debug builds after every mutation.
//!    They only check O(1) bookkeeping, so debug builds stay usable on large
//!    lists. Zero-cost in release.
//!
//! Use both. The contracts catch bookkeeping slips at the exact mutation that
//! caused them; the audit catches misplaced checkpoints the contracts cannot
//! afford to look for.

mod types;
pub mod contracts;

pub use types::*;
