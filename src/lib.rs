// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Doubly linked list with a checkpoint skip index for positional access.
//!
//! A plain doubly linked list reaches position `p` in `min(p, len - p)` steps.
//! With the skip index enabled the list also keeps a secondary list of
//! checkpoints, one every [`SKIP_DENSITY`] nodes, and any lookup costs at most
//! `len / SKIP_DENSITY` checkpoint hops plus `SKIP_DENSITY` node hops.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────┐
//! │  config.rs  │────▶│   list/mod.rs    │────▶│  list/iter   │
//! │ (ListConfig)│     │ (LinkedList ops, │     │ (Iter,       │
//! └─────────────┘     │  locate)         │     │  IntoIter)   │
//!                     └──────────────────┘     └──────────────┘
//!                        │            │
//!                        ▼            ▼
//!               ┌────────────┐  ┌────────────────────────────┐
//!               │  node.rs   │  │  list/skip.rs              │
//!               │ (Arena,    │  │ (LinkedList<NodeId>        │
//!               │  NodeId)   │  │  checkpoints, maintenance) │
//!               └────────────┘  └────────────────────────────┘
//!                        │            │
//!                        ▼            ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      verify/                         │
//! │  (contracts after every mutation, full `verify()`    │
//! │   audit, InvariantError)                             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The skip index is itself a `LinkedList<NodeId>` built with skip indexing
//! disabled, so the nesting stops after one level.
//!
//! # Usage
//!
//! ```
//! use skiplink::{LinkedList, ListConfig, ListError};
//!
//! let mut list = LinkedList::from_values([4, 5, 6], ListConfig::new()).unwrap();
//! list.insert(7, 2).unwrap();
//! list.prepend(3).unwrap();
//! assert_eq!(list.to_string(), "5 elements: 3 -> 4 -> 5 -> 7 -> 6 -> End");
//!
//! assert_eq!(list.remove(&9), Err(ListError::NotFound));
//! assert_eq!(list.remove_at(0), Ok(3));
//! ```

pub mod config;
mod error;
mod list;
mod node;
pub mod parity;
pub mod verify;

// Re-exports for public API
pub use config::{ConfigError, ListConfig};
pub use error::ListError;
pub use list::{checkpoint_count, split_position, IntoIter, Iter, LinkedList, SKIP_DENSITY};
pub use node::NodeId;
pub use verify::{InvariantError, VerificationReport};
