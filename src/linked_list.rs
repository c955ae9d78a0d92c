//! LinkedList: doubly-linked list whose nodes live in a `SlotMap`.
//!
//! Links are `NodeId`s (generational slotmap keys) rather than pointers,
//! so a `NodeId` stays valid across pushes and pops of other nodes and
//! resolves to `None` once its own node has been popped, even if the slot
//! is reused afterwards.
//!
//! Traversal is by following links: start from `head()`/`tail()` and step
//! with `NodeRef::next`/`NodeRef::prev`. `iter`/`iter_rev` wrap exactly
//! that walk.
//!
//! Nodes are allocated through the slot map and so follow the global
//! allocator's abort-on-failure behaviour.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle to a list node.
    pub struct NodeId;
}

#[derive(Debug, Clone)]
struct Node<T> {
    data: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    nodes: SlotMap<NodeId, Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<NodeRef<'_, T>> {
        self.head.and_then(|id| self.node(id))
    }
    pub fn tail(&self) -> Option<NodeRef<'_, T>> {
        self.tail.and_then(|id| self.node(id))
    }

    /// Borrowed view of node `id`, or `None` if it has been popped.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        self.nodes.get(id).map(|node| NodeRef {
            list: self,
            id,
            node,
        })
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|n| &n.data)
    }
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id).map(|n| &mut n.data)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Links `value` after the current tail and returns its id. O(1).
    pub fn push_back(&mut self, value: T) -> NodeId {
        let id = self.nodes.insert(Node {
            data: value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    /// Links `value` before the current head and returns its id. O(1).
    pub fn push_front(&mut self, value: T) -> NodeId {
        let id = self.nodes.insert(Node {
            data: value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.nodes[head].prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        id
    }

    /// Unlinks and returns the tail value; `None` on an empty list. O(1).
    pub fn pop_back(&mut self) -> Option<T> {
        let node = self.nodes.remove(self.tail?)?;
        self.tail = node.prev;
        match node.prev {
            Some(prev) => self.nodes[prev].next = None,
            None => self.head = None,
        }
        Some(node.data)
    }

    /// Unlinks and returns the head value; `None` on an empty list. O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.nodes.remove(self.head?)?;
        self.head = node.next;
        match node.next {
            Some(next) => self.nodes[next].prev = None,
            None => self.tail = None,
        }
        Some(node.data)
    }

    /// Drops every node but keeps the slot map's allocation.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Drops every node and releases all node storage.
    pub fn clear_and_release(&mut self) {
        *self = Self::new();
    }

    /// Values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cursor: self.head(),
            forward: true,
        }
    }

    /// Values from tail to head.
    pub fn iter_rev(&self) -> Iter<'_, T> {
        Iter {
            cursor: self.tail(),
            forward: false,
        }
    }

    /// Panics if the links are inconsistent.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert_eq!(self.head.is_none(), self.tail.is_none());
        let mut seen = 0usize;
        let mut prev: Option<NodeId> = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            assert_eq!(node.prev, prev, "prev link does not mirror next link");
            seen += 1;
            assert!(seen <= self.nodes.len(), "cycle in forward links");
            prev = Some(id);
            cursor = node.next;
        }
        assert_eq!(prev, self.tail, "forward walk must end at tail");
        assert_eq!(seen, self.nodes.len(), "unlinked nodes in storage");
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed view of one node and its neighbours.
pub struct NodeRef<'a, T> {
    list: &'a LinkedList<T>,
    id: NodeId,
    node: &'a Node<T>,
}

impl<'a, T> NodeRef<'a, T> {
    pub fn id(&self) -> NodeId {
        self.id
    }
    pub fn data(&self) -> &'a T {
        &self.node.data
    }
    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        self.node.next.and_then(|id| self.list.node(id))
    }
    pub fn prev(&self) -> Option<NodeRef<'a, T>> {
        self.node.prev.and_then(|id| self.list.node(id))
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for NodeRef<'_, T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("data", &self.node.data)
            .finish()
    }
}

/// Link-following iterator over list values.
pub struct Iter<'a, T> {
    cursor: Option<NodeRef<'a, T>>,
    forward: bool,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let node = self.cursor?;
        self.cursor = if self.forward { node.next() } else { node.prev() };
        Some(node.data())
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
