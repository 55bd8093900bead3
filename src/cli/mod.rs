// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the skiplink command-line interface.
//!
//! Three subcommands: `parity` runs the differential harness between a plain
//! and a skip-indexed list, `bench` times indexed reads, and `render` builds a
//! list from the command line and prints it.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "skiplink",
    about = "Linked list with a checkpoint skip index",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare a skip-indexed list against a plain list under one schedule
    Parity {
        /// Number of values in the built-in stress schedule
        #[arg(short, long, default_value = "10000")]
        ops: usize,

        /// JSON file with an explicit operation schedule (overrides --ops)
        ///
        /// The file holds an array of tagged operations, for example
        /// `[{"op": "insert", "value": 1, "position": 0}, {"op": "removeAt", "index": 0}]`.
        #[arg(long)]
        schedule: Option<String>,

        /// Capacity limit applied to both lists
        #[arg(long)]
        capacity: Option<usize>,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Time indexed reads over a list of the given size
    Bench {
        /// Number of elements in the list
        #[arg(short, long, default_value = "20000")]
        size: usize,

        /// Number of indexed reads (index = i % size)
        #[arg(short, long, default_value = "2000000")]
        lookups: usize,

        /// Build the list with a skip index
        #[arg(long)]
        skip_index: bool,
    },

    /// Build a list from the given values and print it
    Render {
        /// Values appended in order
        values: Vec<String>,

        /// JSON config file (`{"capacity": 8, "skipIndex": true}`)
        #[arg(long)]
        config: Option<String>,

        /// Capacity limit (overrides the config file)
        #[arg(long)]
        capacity: Option<usize>,

        /// Enable the skip index (overrides the config file)
        #[arg(long)]
        skip_index: bool,
    },
}
