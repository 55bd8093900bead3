// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Forward iteration over a list.
//!
//! Each iterator owns its cursor, so any number of them can walk the same list
//! at once. There is no reset: start over by asking the list for a new one.

use super::LinkedList;
use crate::node::{Arena, Node, NodeId};
use std::iter::FusedIterator;

/// Borrowing iterator over a list's elements, head to tail.
#[derive(Debug)]
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    cursor: NodeId,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(arena: &'a Arena<T>, head: NodeId, len: usize) -> Self {
        Self {
            arena,
            cursor: head,
            remaining: len,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let arena = self.arena;
        match arena.node(self.cursor) {
            Node::Occupied { item, next, .. } => {
                self.cursor = *next;
                self.remaining -= 1;
                Some(item)
            }
            Node::Terminal { .. } => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator that drains a list from the front.
#[derive(Debug)]
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(list: LinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// Handles of occupied nodes in list order. Used by the skip index and audits.
pub(crate) struct NodeIds<'a, T> {
    arena: &'a Arena<T>,
    cursor: NodeId,
}

impl<'a, T> NodeIds<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, head: NodeId) -> Self {
        Self {
            arena,
            cursor: head,
        }
    }
}

impl<T> Iterator for NodeIds<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.cursor;
        self.cursor = self.arena.node(current).next()?;
        Some(current)
    }
}
