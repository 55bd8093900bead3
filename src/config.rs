// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Construction-time settings for a list.
//!
//! Configs are plain data so the CLI can read them from JSON:
//!
//! ```json
//! { "capacity": 1000, "skipIndex": true }
//! ```
//!
//! Both keys are optional. A missing `capacity` means unbounded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Capacity limit and skip-index switch for a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListConfig {
    /// Maximum number of elements, `None` for unbounded.
    pub capacity: Option<usize>,
    /// Maintain checkpoints every `SKIP_DENSITY` nodes for faster lookup.
    pub skip_index: bool,
}

impl ListConfig {
    /// Unbounded list without a skip index.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity_limit(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn with_skip_index(mut self, enabled: bool) -> Self {
        self.skip_index = enabled;
        self
    }

    /// Parse a config from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }
}

/// Failure to load a [`ListConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The config file could not be read.
    Io { path: String, message: String },
    /// The document is not a valid config.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "failed to read config {}: {}", path, message)
            }
            ConfigError::Parse(message) => write!(f, "invalid config: {}", message),
        }
    }
}

impl std::error::Error for ConfigError {}
