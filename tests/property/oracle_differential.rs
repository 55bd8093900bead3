//! Differential testing: the list against `Vec`, and the skip-indexed list
//! against the plain one.
//!
//! Every action goes to all sides. Results, including errors, must match
//! exactly, and the final contents must read back identically by iteration
//! and by index.

use super::common::{counting_list, indexed, plain};
use super::oracles::{action_strategy, long_schedule, reduce, Action, VecOracle};
use proptest::prelude::*;
use skiplink::{LinkedList, ListConfig, ListError};

/// Applies one action, reducing raw positions against the oracle's length.
fn step(list: &mut LinkedList<i32>, oracle: &mut VecOracle, action: &Action) -> Result<(), String> {
    let len = oracle.items.len();
    let (actual, expected): (Result<i32, ListError>, Result<i32, ListError>) = match *action {
        Action::Insert { value, position } => {
            let position = reduce(position, len);
            (
                list.insert(value, position).map(|()| value),
                oracle.insert(value, position).map(|()| value),
            )
        }
        Action::RemoveAt { index } => {
            let index = if len == 0 { index % 2 } else { reduce(index, len - 1) };
            (list.remove_at(index), oracle.remove_at(index))
        }
        Action::Remove { value } => (list.remove(&value), oracle.remove(value)),
        Action::Set { index, value } => {
            let index = reduce(index, len);
            (list.set(index, value), oracle.set(index, value))
        }
        Action::Clear => {
            list.clear();
            oracle.items.clear();
            (Ok(0), Ok(0))
        }
    };
    if actual != expected {
        return Err(format!(
            "{:?}: list returned {:?}, oracle {:?}",
            action, actual, expected
        ));
    }
    Ok(())
}

fn replay(config: ListConfig, actions: &[Action]) -> Result<(LinkedList<i32>, VecOracle), String> {
    let mut list = LinkedList::with_config(config);
    let mut oracle = VecOracle::with_capacity_limit(config.capacity);
    for action in actions {
        step(&mut list, &mut oracle, action)?;
    }
    Ok((list, oracle))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Plain list behaves exactly like `Vec`.
    #[test]
    fn diff_plain_vs_vec(actions in prop::collection::vec(action_strategy(), 0..300)) {
        let (list, oracle) = replay(plain(), &actions).map_err(TestCaseError::fail)?;
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), oracle.items);
    }

    /// Skip-indexed list behaves exactly like `Vec`, read back by index.
    #[test]
    fn diff_indexed_vs_vec(actions in long_schedule()) {
        let (list, oracle) = replay(indexed(), &actions).map_err(TestCaseError::fail)?;
        prop_assert_eq!(list.len(), oracle.items.len());
        for (index, expected) in oracle.items.iter().enumerate() {
            prop_assert_eq!(list.get(index), Ok(expected), "index {}", index);
        }
        prop_assert!(list.verify().is_ok(), "{:?}", list.verify());
    }

    /// Bounded lists reject the same inserts as a bounded `Vec`.
    #[test]
    fn diff_bounded_vs_vec(
        capacity in 0usize..600,
        actions in long_schedule(),
    ) {
        let config = indexed().with_capacity_limit(capacity);
        let (list, oracle) = replay(config, &actions).map_err(TestCaseError::fail)?;
        prop_assert!(list.len() <= capacity);
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), oracle.items);
    }

    /// Starting from a list already past several windows, indexed and plain
    /// lists agree at every position after random mutations.
    #[test]
    fn diff_indexed_vs_plain_prefilled(
        seed_len in 251usize..1500,
        actions in prop::collection::vec(action_strategy(), 0..200),
    ) {
        let seed: Vec<i32> = (0..seed_len as i32).collect();
        let mut with_index = LinkedList::from_values(seed.clone(), indexed()).unwrap();
        let mut without = LinkedList::from_values(seed.clone(), plain()).unwrap();
        let mut oracle = VecOracle { items: seed, capacity: None };
        let mut shadow = oracle.clone();

        for action in &actions {
            step(&mut with_index, &mut oracle, action).map_err(TestCaseError::fail)?;
            step(&mut without, &mut shadow, action).map_err(TestCaseError::fail)?;
        }
        prop_assert_eq!(&with_index, &without);
        for index in 0..without.len() {
            prop_assert_eq!(with_index.get(index), without.get(index));
        }
    }
}

#[test]
fn diff_demo_schedule_by_index() {
    let mut list = counting_list(0, indexed());
    let mut oracle = Vec::new();
    for op in skiplink::parity::demo_schedule(700) {
        skiplink::parity::apply(&mut list, &op).unwrap();
        match op {
            skiplink::parity::Op::Insert { value, position } => oracle.insert(position, value),
            skiplink::parity::Op::Remove { value } => {
                let index = oracle.iter().position(|&v| v == value).unwrap();
                oracle.remove(index);
            }
            other => panic!("unexpected op {:?}", other),
        }
    }
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), oracle);
    assert!(list.verify().is_ok());
}
