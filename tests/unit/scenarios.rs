//! End-to-end walkthroughs of the list operations on small inputs.

use super::common::{appended_fixture, assert_list_eq, counting_list, indexed, plain};
use skiplink::{LinkedList, ListError};

#[test]
fn test_append_and_contains() {
    let list = appended_fixture();
    assert_list_eq(&list, &[22, 33, 44, 1, 2, 3]);
    assert!(!list.contains(&99));
    assert!(list.contains(&22));
}

#[test]
fn test_prepend_then_insert() {
    let mut list = appended_fixture();
    list.prepend(0).unwrap();
    list.prepend(-1).unwrap();
    assert_list_eq(&list, &[-1, 0, 22, 33, 44, 1, 2, 3]);

    list.insert(17, 3).unwrap();
    assert_list_eq(&list, &[-1, 0, 22, 17, 33, 44, 1, 2, 3]);
}

#[test]
fn test_remove_by_value_then_position() {
    let mut list = appended_fixture();
    list.prepend(0).unwrap();
    list.prepend(-1).unwrap();
    list.insert(17, 3).unwrap();

    assert_eq!(list.remove(&2), Ok(2));
    assert_list_eq(&list, &[-1, 0, 22, 17, 33, 44, 1, 3]);

    assert_eq!(list.remove_at(1), Ok(0));
    assert_list_eq(&list, &[-1, 22, 17, 33, 44, 1, 3]);
}

#[test]
fn test_remove_absent_value_is_reported() {
    let mut list = appended_fixture();
    assert_eq!(list.remove(&99), Err(ListError::NotFound));
    assert_list_eq(&list, &[22, 33, 44, 1, 2, 3]);
}

#[test]
fn test_remove_takes_first_occurrence() {
    let mut list = LinkedList::from([7, 1, 7, 2]);
    assert_eq!(list.index_of(&7), Some(0));
    list.remove(&7).unwrap();
    assert_list_eq(&list, &[1, 7, 2]);
    assert_eq!(list.index_of(&7), Some(1));
}

#[test]
fn test_strided_removal_matches_plain_list() {
    let mut with_index = counting_list(1000, indexed());
    let mut without = counting_list(1000, plain());

    for i in (1..=999).rev().step_by(3) {
        assert_eq!(with_index.remove_at(i), without.remove_at(i));
    }

    let expected: Vec<i64> = (0..1000).filter(|v| *v == 0 || v % 3 != 0).collect();
    assert_eq!(expected.len(), 667);
    assert_list_eq(&without, &expected);
    assert_list_eq(&with_index, &expected);
    assert_eq!(with_index.checkpoint_count(), 3);
    assert_eq!(with_index, without);
}

#[test]
fn test_display_rendering() {
    let list = LinkedList::from([1, 2, 3]);
    assert_eq!(list.to_string(), "3 elements: 1 -> 2 -> 3 -> End");

    let empty: LinkedList<i32> = LinkedList::new();
    assert_eq!(empty.to_string(), "0 elements: End");
}

#[test]
fn test_out_of_range_positions() {
    let mut list = LinkedList::from([1, 2, 3]);
    assert_eq!(
        list.insert(9, 4),
        Err(ListError::InvalidPosition {
            position: 4,
            len: 3
        })
    );
    assert_eq!(
        list.remove_at(3),
        Err(ListError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(
        list.get(3),
        Err(ListError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_list_eq(&list, &[1, 2, 3]);
}

#[test]
fn test_insert_at_len_appends() {
    let mut list = LinkedList::from([1, 2]);
    list.insert(3, 2).unwrap();
    assert_eq!(list.back(), Some(&3));
    assert_list_eq(&list, &[1, 2, 3]);
}

#[test]
fn test_empty_list_edges() {
    let mut list: LinkedList<i32> = LinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.pop_back(), None);
    assert_eq!(list.iter().next(), None);
    assert_eq!(list.index_of(&1), None);

    list.clear();
    assert_list_eq(&list, &[]);
}

#[test]
fn test_removing_the_only_element() {
    let mut list = LinkedList::from(["solo".to_string()]);
    assert_eq!(list.remove_at(0).as_deref(), Ok("solo"));
    assert!(list.is_empty());
    list.append("again".to_string()).unwrap();
    assert_list_eq(&list, &["again".to_string()]);
}

#[test]
fn test_index_mut_and_set() {
    let mut list = LinkedList::from([1, 2, 3]);
    list[1] = 20;
    assert_eq!(list.set(2, 30), Ok(3));
    *list.get_mut(0).unwrap() += 9;
    assert_list_eq(&list, &[10, 20, 30]);
}

#[test]
#[should_panic(expected = "index 5 out of range")]
fn test_index_panics_out_of_range() {
    let list = LinkedList::from([1, 2, 3]);
    let _ = list[5];
}

#[test]
fn test_collect_and_into_iter() {
    let list: LinkedList<i32> = (1..=4).collect();
    let doubled: Vec<i32> = list.iter().map(|v| v * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6, 8]);

    let owned: Vec<i32> = list.into_iter().collect();
    assert_eq!(owned, vec![1, 2, 3, 4]);
}

#[test]
fn test_clone_is_independent() {
    let original = LinkedList::from([1, 2, 3]);
    let mut copy = original.clone();
    copy.append(4).unwrap();
    assert_list_eq(&original, &[1, 2, 3]);
    assert_list_eq(&copy, &[1, 2, 3, 4]);
}
