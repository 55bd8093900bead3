// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors reported by list operations.
//!
//! Every check runs before the list is touched, so an `Err` always means the
//! list is exactly as it was before the call.

use std::fmt;

/// Error type for rejected list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// Insert attempted on a list already holding `capacity` elements.
    CapacityExceeded { capacity: usize },
    /// Insert position lies beyond one-past-the-last element.
    InvalidPosition { position: usize, len: usize },
    /// Read, write or removal index does not name an element.
    IndexOutOfRange { index: usize, len: usize },
    /// Removal by value found no matching element.
    NotFound,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::CapacityExceeded { capacity } => {
                write!(f, "list is full (capacity {})", capacity)
            }
            ListError::InvalidPosition { position, len } => {
                write!(f, "cannot insert at position {} in list of length {}", position, len)
            }
            ListError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for list of length {}", index, len)
            }
            ListError::NotFound => f.write_str("value not found"),
        }
    }
}

impl std::error::Error for ListError {}
