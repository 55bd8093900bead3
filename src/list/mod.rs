// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The sequence core: a doubly linked list over an arena of nodes.
//!
//! Positional lookup picks the cheapest route to a node:
//!
//! 1. With a skip index, jump to the checkpoint at or below the position and
//!    walk forward at most `SKIP_DENSITY` steps.
//! 2. Otherwise walk forward from the head when the position is in the first
//!    half of the list.
//! 3. Otherwise walk backward from the terminal node.
//!
//! Without a skip index no lookup takes more than `len / 2` steps.
//!
//! # Invariants
//!
//! - Walking `next` from `head` visits exactly `len` occupied nodes and then
//!   reaches `end`, the only terminal node.
//! - Every node's `prev` names the node whose `next` points at it.
//! - When the skip index exists, entry `k` names the node at `k * SKIP_DENSITY`
//!   and there are exactly `ceil(len / SKIP_DENSITY)` entries.

mod iter;
mod skip;

pub use iter::{IntoIter, Iter};
pub(crate) use iter::NodeIds;
pub use skip::{checkpoint_count, split_position, SKIP_DENSITY};

use crate::config::ListConfig;
use crate::error::ListError;
use crate::node::{Arena, Node, NodeId};
use crate::verify::contracts;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A doubly linked list with optional capacity limit and skip index.
///
/// ```
/// use skiplink::{LinkedList, ListConfig};
///
/// let mut list = LinkedList::with_config(ListConfig::new().with_skip_index(true));
/// for i in 0..1000 {
///     list.append(i).unwrap();
/// }
/// list.insert(-1, 500).unwrap();
/// assert_eq!(list[500], -1);
/// assert_eq!(list.checkpoint_count(), 5);
/// ```
#[derive(Clone)]
pub struct LinkedList<T> {
    arena: Arena<T>,
    head: NodeId,
    end: NodeId,
    len: usize,
    capacity: Option<usize>,
    skip_enabled: bool,
    skip: Option<Box<skip::SkipIndex>>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty, unbounded list without a skip index.
    pub fn new() -> Self {
        Self::with_config(ListConfig::default())
    }

    /// Creates an empty list with the given capacity limit and skip-index setting.
    pub fn with_config(config: ListConfig) -> Self {
        let mut arena = Arena::new();
        let end = arena.alloc(Node::Terminal { prev: None });
        Self {
            arena,
            head: end,
            end,
            len: 0,
            capacity: config.capacity,
            skip_enabled: config.skip_index,
            skip: None,
        }
    }

    /// Creates a list from initial values, appended in order.
    ///
    /// Fails with [`ListError::CapacityExceeded`] if `values` outgrow the
    /// configured capacity.
    pub fn from_values<I>(values: I, config: ListConfig) -> Result<Self, ListError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::with_config(config);
        list.try_extend(values)?;
        Ok(list)
    }

    /// The settings this list was built with.
    pub fn config(&self) -> ListConfig {
        ListConfig {
            capacity: self.capacity,
            skip_index: self.skip_enabled,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.arena.node(self.head).is_terminal()
    }

    /// Whether another insert would exceed the capacity limit.
    pub fn is_full(&self) -> bool {
        self.capacity == Some(self.len)
    }

    /// Maximum number of elements, `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn skip_index_enabled(&self) -> bool {
        self.skip_enabled
    }

    /// Number of checkpoints currently held by the skip index.
    pub fn checkpoint_count(&self) -> usize {
        self.skip.as_ref().map_or(0, |skip| skip.len())
    }

    // ========================================================================
    // MUTATION
    // ========================================================================

    /// Inserts `value` so that it ends up at `position`.
    ///
    /// Valid positions are `0..=len`; `len` appends.
    pub fn insert(&mut self, value: T, position: usize) -> Result<(), ListError> {
        if let Some(capacity) = self.capacity {
            if self.len >= capacity {
                return Err(ListError::CapacityExceeded { capacity });
            }
        }
        if position > self.len {
            return Err(ListError::InvalidPosition {
                position,
                len: self.len,
            });
        }
        self.insert_unchecked(value, position);
        Ok(())
    }

    pub fn prepend(&mut self, value: T) -> Result<(), ListError> {
        self.insert(value, 0)
    }

    pub fn append(&mut self, value: T) -> Result<(), ListError> {
        self.insert(value, self.len)
    }

    /// Same as [`prepend`](Self::prepend).
    pub fn push_front(&mut self, value: T) -> Result<(), ListError> {
        self.prepend(value)
    }

    /// Same as [`append`](Self::append).
    pub fn push_back(&mut self, value: T) -> Result<(), ListError> {
        self.append(value)
    }

    /// Appends every value in order, stopping at the first rejected insert.
    pub fn try_extend<I>(&mut self, values: I) -> Result<(), ListError>
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().try_for_each(|value| self.append(value))
    }

    /// Removes and returns the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.len {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let id = self.locate(index);
        if self.skip_enabled {
            self.shift_checkpoints_for_remove(index);
        }
        let item = self.unlink(id);
        contracts::check_list_bookkeeping(self);
        Ok(item)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.remove_at(0).ok()
    }

    pub fn pop_back(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.remove_at(last).ok()
    }

    /// Drops every element and the skip index.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.end = self.arena.alloc(Node::Terminal { prev: None });
        self.head = self.end;
        self.len = 0;
        self.skip = None;
        contracts::check_list_bookkeeping(self);
    }

    // ========================================================================
    // ACCESS
    // ========================================================================

    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.check_index(index)?;
        Ok(self.item(self.locate(index)))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        self.check_index(index)?;
        let id = self.locate(index);
        Ok(self.item_mut(id))
    }

    /// Replaces the element at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        self.get_mut(index).map(|slot| std::mem::replace(slot, value))
    }

    pub fn front(&self) -> Option<&T> {
        self.arena.node(self.head).item()
    }

    pub fn back(&self) -> Option<&T> {
        let tail = self.arena.node(self.end).prev()?;
        self.arena.node(tail).item()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.head, self.len)
    }

    // ========================================================================
    // INTERNALS
    // ========================================================================

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index < self.len {
            Ok(())
        } else {
            Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Finds the node at `position` (`0..=len`, `len` being the terminal).
    pub(crate) fn locate(&self, position: usize) -> NodeId {
        debug_assert!(position <= self.len, "locate({}) past len {}", position, self.len);

        if let Some(skip) = self.skip.as_deref().filter(|skip| !skip.is_empty()) {
            let (checkpoint, remainder) = split_position(position, skip.len());
            let start = *skip.item(skip.locate(checkpoint));
            return self.arena.walk_forward(start, remainder);
        }

        if position <= self.len / 2 {
            self.arena.walk_forward(self.head, position)
        } else {
            self.arena.walk_backward(self.end, self.len - position)
        }
    }

    /// Links a new node at `position` after the caller has validated it.
    fn insert_unchecked(&mut self, value: T, position: usize) {
        let successor = self.locate(position);
        let predecessor = self.arena.node(successor).prev();
        let id = self.arena.alloc(Node::Occupied {
            item: value,
            next: successor,
            prev: predecessor,
        });
        self.arena.node_mut(successor).set_prev(Some(id));
        match predecessor {
            Some(prev) => self.arena.node_mut(prev).set_next(id),
            None => self.head = id,
        }
        self.len += 1;

        if self.skip_enabled {
            self.shift_checkpoints_for_insert(position);
        }
        contracts::check_list_bookkeeping(self);
    }

    /// Detaches an occupied node and returns its item.
    fn unlink(&mut self, id: NodeId) -> T {
        let Node::Occupied { item, next, prev } = self.arena.release(id) else {
            panic!("terminal node {} cannot be unlinked", id.as_raw());
        };
        self.arena.node_mut(next).set_prev(prev);
        match prev {
            Some(prev) => self.arena.node_mut(prev).set_next(next),
            None => self.head = next,
        }
        self.len -= 1;
        item
    }

    fn item(&self, id: NodeId) -> &T {
        self.arena
            .node(id)
            .item()
            .unwrap_or_else(|| panic!("node {} is the terminal", id.as_raw()))
    }

    fn item_mut(&mut self, id: NodeId) -> &mut T {
        self.arena
            .node_mut(id)
            .item_mut()
            .unwrap_or_else(|| panic!("node {} is the terminal", id.as_raw()))
    }

    /// Handles of the occupied nodes, head to tail.
    pub(crate) fn node_ids(&self) -> NodeIds<'_, T> {
        NodeIds::new(&self.arena, self.head)
    }

    pub(crate) fn arena(&self) -> &Arena<T> {
        &self.arena
    }

    pub(crate) fn head_id(&self) -> NodeId {
        self.head
    }

    pub(crate) fn end_id(&self) -> NodeId {
        self.end
    }

    pub(crate) fn checkpoints(&self) -> Option<&LinkedList<NodeId>> {
        self.skip.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn checkpoints_mut(&mut self) -> Option<&mut LinkedList<NodeId>> {
        self.skip.as_deref_mut()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.iter().position(|item| item == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Removes the first element equal to `value`.
    ///
    /// Reports [`ListError::NotFound`] and leaves the list untouched when no
    /// element matches.
    pub fn remove(&mut self, value: &T) -> Result<T, ListError> {
        let index = self.index_of(value).ok_or(ListError::NotFound)?;
        self.remove_at(index)
    }
}

// ============================================================================
// STANDARD TRAITS
// ============================================================================

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Panics if the list's capacity limit is hit; use
/// [`LinkedList::try_extend`] to get the error instead.
impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if let Err(e) = self.try_extend(iter) {
            panic!("{}", e);
        }
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        // Draining from the front never needs positional lookups.
        self.skip_enabled = false;
        self.skip = None;
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Lists compare by their elements only; capacity and skip index are ignored.
impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders `3 elements: 1 -> 2 -> 3 -> End`.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} elements: ", self.len)?;
        for item in self {
            write!(f, "{} -> ", item)?;
        }
        f.write_str("End")
    }
}
