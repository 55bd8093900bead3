//! Shared test utilities and fixtures.

#![allow(dead_code)]

use skiplink::{LinkedList, ListConfig, SKIP_DENSITY};
use std::fmt::Debug;

// ============================================================================
// CONFIGS
// ============================================================================

/// Unbounded list with the skip index on.
pub fn indexed() -> ListConfig {
    ListConfig::new().with_skip_index(true)
}

/// Unbounded list without a skip index.
pub fn plain() -> ListConfig {
    ListConfig::new()
}

/// Lengths that sit on and around checkpoint boundaries.
pub const BOUNDARY_LENS: [usize; 8] = [
    0,
    1,
    SKIP_DENSITY - 1,
    SKIP_DENSITY,
    SKIP_DENSITY + 1,
    2 * SKIP_DENSITY,
    2 * SKIP_DENSITY + 1,
    4 * SKIP_DENSITY + 17,
];

// ============================================================================
// BUILDERS
// ============================================================================

/// `0..len` as an `i64` list with the given config.
pub fn counting_list(len: usize, config: ListConfig) -> LinkedList<i64> {
    LinkedList::from_values(0..len as i64, config).unwrap()
}

/// `[22, 33, 44]` followed by `append(1); append(2); append(3)`.
pub fn appended_fixture() -> LinkedList<i64> {
    let mut list = LinkedList::from_values([22, 33, 44], plain()).unwrap();
    list.append(1).unwrap();
    list.append(2).unwrap();
    list.append(3).unwrap();
    list
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Elements in order.
pub fn contents<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

/// Audit the list and check it holds exactly `expected`, read both by
/// iteration and by indexed access.
pub fn assert_list_eq<T: PartialEq + Debug + Clone>(list: &LinkedList<T>, expected: &[T]) {
    if let Err(e) = list.verify() {
        panic!("list failed audit: {}", e);
    }
    assert_eq!(contents(list), expected);
    assert_eq!(list.len(), expected.len());
    for (index, value) in expected.iter().enumerate() {
        assert_eq!(list.get(index), Ok(value), "mismatch at index {}", index);
    }
}
