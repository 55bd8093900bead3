//! Checkpoint index lifecycle and placement through mutations.

use super::common::{assert_list_eq, counting_list, indexed, plain, BOUNDARY_LENS};
use skiplink::{checkpoint_count, split_position, LinkedList, SKIP_DENSITY};

#[test]
fn test_index_built_once_past_first_window() {
    let mut list = counting_list(SKIP_DENSITY, indexed());
    assert_eq!(list.checkpoint_count(), 0);

    list.append(SKIP_DENSITY as i64).unwrap();
    assert_eq!(list.checkpoint_count(), 2);
    assert_eq!(list.verify().unwrap().checkpoints, 2);
}

#[test]
fn test_plain_list_never_builds_index() {
    let list = counting_list(3 * SKIP_DENSITY, plain());
    assert!(!list.skip_index_enabled());
    assert_eq!(list.checkpoint_count(), 0);
}

#[test]
fn test_checkpoint_count_tracks_length() {
    for len in BOUNDARY_LENS {
        let list = counting_list(len, indexed());
        let expected = if len > SKIP_DENSITY {
            checkpoint_count(len)
        } else {
            0
        };
        assert_eq!(list.checkpoint_count(), expected, "len {}", len);
        assert!(list.verify().is_ok(), "len {}", len);
    }
}

#[test]
fn test_index_survives_shrinking_below_one_window() {
    let mut list = counting_list(SKIP_DENSITY + 1, indexed());
    while list.len() > 1 {
        list.pop_back().unwrap();
        assert!(list.verify().is_ok(), "len {}", list.len());
    }
    assert_eq!(list.checkpoint_count(), 1);
    assert_list_eq(&list, &[0]);
}

#[test]
fn test_clear_discards_index() {
    let mut list = counting_list(1000, indexed());
    list.clear();
    assert_eq!(list.checkpoint_count(), 0);
    assert!(list.skip_index_enabled());

    list.try_extend(0..600).unwrap();
    assert_eq!(list.checkpoint_count(), 3);
    assert!(list.verify().is_ok());
}

#[test]
fn test_inserts_on_every_boundary() {
    let mut list = counting_list(1000, indexed());
    let mut model: Vec<i64> = (0..1000).collect();

    for k in (0..=4).rev() {
        let position = k * SKIP_DENSITY;
        for offset in [1, 0] {
            let at = (position + offset).min(model.len());
            list.insert(-(at as i64), at).unwrap();
            model.insert(at, -(at as i64));
        }
    }
    assert_list_eq(&list, &model);
}

#[test]
fn test_removals_on_every_boundary() {
    let mut list = counting_list(1251, indexed());
    let mut model: Vec<i64> = (0..1251).collect();

    for k in (0..=5).rev() {
        let index = (k * SKIP_DENSITY).min(model.len() - 1);
        assert_eq!(list.remove_at(index).ok(), Some(model.remove(index)));
        assert_list_eq(&list, &model);
    }
}

#[test]
fn test_front_heavy_mutation_keeps_lookups_exact() {
    let mut with_index = counting_list(900, indexed());
    let mut without = counting_list(900, plain());

    for round in 0..300i64 {
        with_index.prepend(-round).unwrap();
        without.prepend(-round).unwrap();
        if round % 2 == 0 {
            with_index.remove_at(1).unwrap();
            without.remove_at(1).unwrap();
        }
    }
    assert_eq!(with_index, without);
    for index in (0..without.len()).step_by(37) {
        assert_eq!(with_index.get(index), without.get(index));
    }
    assert!(with_index.verify().is_ok());
}

#[test]
fn test_split_position() {
    assert_eq!(split_position(0, 4), (0, 0));
    assert_eq!(split_position(249, 4), (0, 249));
    assert_eq!(split_position(250, 4), (1, 0));
    assert_eq!(split_position(999, 4), (3, 249));
    // One past the end of a list that fills its last window exactly.
    assert_eq!(split_position(1000, 4), (3, 250));
}

#[test]
fn test_config_is_preserved() {
    let list: LinkedList<u8> = LinkedList::with_config(indexed().with_capacity_limit(9));
    assert_eq!(list.config(), indexed().with_capacity_limit(9));
}
