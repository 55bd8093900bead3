// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for config parsing.
//!
//! Arbitrary bytes must parse to a config or fail with `ConfigError::Parse`,
//! never panic. Accepted configs must build a working list.

#![no_main]

use libfuzzer_sys::fuzz_target;
use skiplink::{ConfigError, LinkedList, ListConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    match ListConfig::from_json(text) {
        Ok(config) => {
            let mut list = LinkedList::with_config(config);
            // Small fill only: capacity may be huge.
            let fill = config.capacity.map_or(300, |c| c.min(300));
            list.try_extend(0..fill).unwrap();
            assert!(list.verify().is_ok());
        }
        Err(ConfigError::Parse(_)) => {}
        Err(other) => panic!("unexpected error kind: {:?}", other),
    }
});
