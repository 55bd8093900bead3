//! Capacity limits: full lists reject inserts and stay untouched.

use super::common::assert_list_eq;
use skiplink::{LinkedList, ListConfig, ListError};

fn bounded(capacity: usize) -> ListConfig {
    ListConfig::new().with_capacity_limit(capacity)
}

#[test]
fn test_full_list_rejects_insert() {
    let mut list = LinkedList::from_values([1, 2], bounded(2)).unwrap();
    assert!(list.is_full());

    assert_eq!(
        list.insert(0, 0),
        Err(ListError::CapacityExceeded { capacity: 2 })
    );
    assert_eq!(
        list.append(3),
        Err(ListError::CapacityExceeded { capacity: 2 })
    );
    assert_list_eq(&list, &[1, 2]);
}

#[test]
fn test_capacity_checked_before_position() {
    let mut list = LinkedList::from_values([1, 2], bounded(2)).unwrap();
    assert_eq!(
        list.insert(0, 10),
        Err(ListError::CapacityExceeded { capacity: 2 })
    );
}

#[test]
fn test_initial_values_over_capacity() {
    let result = LinkedList::from_values([1, 2, 3], bounded(2));
    assert_eq!(
        result.err(),
        Some(ListError::CapacityExceeded { capacity: 2 })
    );
}

#[test]
fn test_try_extend_stops_at_capacity() {
    let mut list = LinkedList::with_config(bounded(3));
    assert_eq!(
        list.try_extend(1..=5),
        Err(ListError::CapacityExceeded { capacity: 3 })
    );
    assert_list_eq(&list, &[1, 2, 3]);
}

#[test]
fn test_removal_frees_room() {
    let mut list = LinkedList::from_values([1, 2], bounded(2)).unwrap();
    list.remove_at(0).unwrap();
    assert!(!list.is_full());
    list.prepend(0).unwrap();
    assert_list_eq(&list, &[0, 2]);
}

#[test]
fn test_zero_capacity() {
    let mut list: LinkedList<u8> = LinkedList::with_config(bounded(0));
    assert!(list.is_full());
    assert_eq!(
        list.append(1),
        Err(ListError::CapacityExceeded { capacity: 0 })
    );
    assert!(list.is_empty());
}

#[test]
fn test_unbounded_is_never_full() {
    let list = LinkedList::from_values(0..10_000, ListConfig::new()).unwrap();
    assert_eq!(list.capacity(), None);
    assert!(!list.is_full());
}

#[test]
fn test_bounded_skip_indexed_list() {
    let config = bounded(600).with_skip_index(true);
    let mut list = LinkedList::from_values(0..600, config).unwrap();
    assert_eq!(list.checkpoint_count(), 3);
    assert!(list.append(600).is_err());

    list.remove_at(250).unwrap();
    list.insert(-1, 0).unwrap();
    assert_eq!(list.get(250), Ok(&249));
    assert_eq!(list.get(251), Ok(&251));
    assert!(list.verify().is_ok());
}

#[test]
#[should_panic(expected = "list is full")]
fn test_extend_panics_when_full() {
    let mut list = LinkedList::with_config(bounded(1));
    list.extend([1, 2]);
}
