// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arena-backed list nodes.
//!
//! Nodes live in a slot vector and refer to each other by [`NodeId`]. The
//! forward chain is owned by the arena, not by the nodes, so `prev` links and
//! checkpoint handles carry no lifetime obligations at all.
//!
//! Every list has exactly one [`Node::Terminal`]. It holds no item and marks
//! one-past-the-last position; walking `next` from the head always reaches it.

/// Stable handle to a node slot inside one list's arena.
///
/// A handle is only meaningful for the list that issued it, and only until
/// the node it names is removed (its slot may then be recycled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the raw slot index for debugging or external maps.
    pub fn as_raw(self) -> usize {
        self.0
    }
}

/// A single cell of the list.
#[derive(Debug, Clone)]
pub(crate) enum Node<T> {
    /// A real element.
    Occupied {
        item: T,
        next: NodeId,
        prev: Option<NodeId>,
    },
    /// The end marker. `prev` is the tail, or `None` when the list is empty.
    Terminal { prev: Option<NodeId> },
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn is_terminal(&self) -> bool {
        matches!(self, Node::Terminal { .. })
    }

    #[inline]
    pub(crate) fn next(&self) -> Option<NodeId> {
        match self {
            Node::Occupied { next, .. } => Some(*next),
            Node::Terminal { .. } => None,
        }
    }

    #[inline]
    pub(crate) fn prev(&self) -> Option<NodeId> {
        match self {
            Node::Occupied { prev, .. } | Node::Terminal { prev } => *prev,
        }
    }

    /// Repoints the successor link. The terminal has none, so this panics there.
    #[inline]
    pub(crate) fn set_next(&mut self, id: NodeId) {
        match self {
            Node::Occupied { next, .. } => *next = id,
            Node::Terminal { .. } => panic!("terminal node has no successor link"),
        }
    }

    #[inline]
    pub(crate) fn set_prev(&mut self, id: Option<NodeId>) {
        match self {
            Node::Occupied { prev, .. } | Node::Terminal { prev } => *prev = id,
        }
    }

    #[inline]
    pub(crate) fn item(&self) -> Option<&T> {
        match self {
            Node::Occupied { item, .. } => Some(item),
            Node::Terminal { .. } => None,
        }
    }

    #[inline]
    pub(crate) fn item_mut(&mut self) -> Option<&mut T> {
        match self {
            Node::Occupied { item, .. } => Some(item),
            Node::Terminal { .. } => None,
        }
    }
}

/// Slot storage for nodes with a free list for recycling removed slots.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Releases a slot and hands back the node that occupied it.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<T> {
        let node = self.slots[id.0]
            .take()
            .unwrap_or_else(|| panic!("node {} released twice", id.0));
        self.free.push(id.0);
        node
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Number of slots currently holding a node (terminal included).
    pub(crate) fn live_slots(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        match self.slots.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling node handle {}", id.0),
        }
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling node handle {}", id.0),
        }
    }

    /// Whether `id` names a slot that currently holds a node.
    pub(crate) fn contains(&self, id: NodeId) -> bool {
        matches!(self.slots.get(id.0), Some(Some(_)))
    }

    /// Successor of an occupied node. Panics on the terminal.
    #[inline]
    pub(crate) fn next(&self, id: NodeId) -> NodeId {
        self.node(id)
            .next()
            .unwrap_or_else(|| panic!("walked past the terminal node {}", id.0))
    }

    /// Predecessor of a node. Panics on the head.
    #[inline]
    pub(crate) fn prev(&self, id: NodeId) -> NodeId {
        self.node(id)
            .prev()
            .unwrap_or_else(|| panic!("walked before the head node {}", id.0))
    }

    /// Walks `steps` links forward from `from`.
    pub(crate) fn walk_forward(&self, mut from: NodeId, steps: usize) -> NodeId {
        for _ in 0..steps {
            from = self.next(from);
        }
        from
    }

    /// Walks `steps` links backward from `from`.
    pub(crate) fn walk_backward(&self, mut from: NodeId, steps: usize) -> NodeId {
        for _ in 0..steps {
            from = self.prev(from);
        }
        from
    }
}
