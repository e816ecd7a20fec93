//! Arena-backed circular doubly-linked ring.
//!
//! Nodes live in a slot vector owned by the [`Ring`] and refer to each other by
//! [`NodeId`] instead of by pointer. Vacant slots form a free list and are reused
//! by the next insertion, so a ring that shrinks and grows again does not
//! reallocate.
//!
//! The primitives here only splice and unlink. [`Ring::unlink`] keeps `head` and
//! `tail` pointing at live nodes; the insert primitives leave them alone and the
//! caller moves them with [`Ring::set_head`] / [`Ring::set_tail`] when the new node
//! belongs at an end.
//!
//! Invariants (checked by [`Ring::assert_closed`]):
//! - `len == 0` iff `head` and `tail` are `None` and no slot is occupied.
//! - Walking `next` from `head` `len` times returns to `head`; walking `previous`
//!   from `tail` `len` times returns to `tail`.
//! - `node.next.previous == node` and `node.previous.next == node` for every node.
//! - `tail.next == head` and `head.previous == tail`.

use std::iter::FusedIterator;

/// Stable index of a node inside its ring's arena.
///
/// Only meaningful for the ring that produced it, and only until that node is
/// unlinked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A value plus its two ring links. Links never own.
#[derive(Debug, Clone)]
pub struct Node<T> {
    value: T,
    next: NodeId,
    previous: NodeId,
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

/// Circular doubly-linked ring over an index arena.
#[derive(Clone)]
pub struct Ring<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> Ring<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Pre-sizes the arena for `capacity` live nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    #[inline]
    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    pub fn node(&self, id: NodeId) -> &Node<T> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => node,
            _ => panic!("ring slot {} is not a live node", id.0),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(node)) => node,
            _ => panic!("ring slot {} is not a live node", id.0),
        }
    }

    #[inline]
    pub fn next(&self, id: NodeId) -> NodeId {
        self.node(id).next
    }

    #[inline]
    pub fn previous(&self, id: NodeId) -> NodeId {
        self.node(id).previous
    }

    #[inline]
    pub fn value(&self, id: NodeId) -> &T {
        &self.node(id).value
    }

    pub(crate) fn set_head(&mut self, id: NodeId) {
        debug_assert_eq!(self.node(id).previous, self.tail.unwrap_or(id));
        self.head = Some(id);
    }

    pub(crate) fn set_tail(&mut self, id: NodeId) {
        debug_assert_eq!(self.node(id).next, self.head.unwrap_or(id));
        self.tail = Some(id);
    }

    /// Slot the next insertion will occupy.
    fn vacant_id(&self) -> NodeId {
        NodeId(self.free.unwrap_or(self.slots.len()))
    }

    fn occupy(&mut self, node: Node<T>) -> NodeId {
        match self.free {
            Some(index) => {
                let next_free = match self.slots[index] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => panic!("free list points at live slot {index}"),
                };
                self.free = next_free;
                self.slots[index] = Slot::Occupied(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<T> {
        assert!(
            matches!(self.slots.get(id.0), Some(Slot::Occupied(_))),
            "ring slot {} released while vacant",
            id.0
        );
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match std::mem::replace(&mut self.slots[id.0], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(id.0);
                node
            }
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    /// Places the first node of an empty ring, self-linked, as both head and tail.
    pub fn insert_first(&mut self, value: T) -> NodeId {
        assert!(self.is_empty(), "insert_first on a ring of length {}", self.len);
        let id = self.vacant_id();
        let placed = self.occupy(Node {
            value,
            next: id,
            previous: id,
        });
        debug_assert_eq!(placed, id);

        self.head = Some(id);
        self.tail = Some(id);
        self.len = 1;
        id
    }

    /// Splices a new node between `at` and its predecessor.
    pub fn insert_before(&mut self, at: NodeId, value: T) -> NodeId {
        let previous = self.previous(at);
        let id = self.occupy(Node {
            value,
            next: at,
            previous,
        });
        self.node_mut(previous).next = id;
        self.node_mut(at).previous = id;
        self.len += 1;
        id
    }

    /// Splices a new node between `at` and its successor.
    pub fn insert_after(&mut self, at: NodeId, value: T) -> NodeId {
        let next = self.next(at);
        let id = self.occupy(Node {
            value,
            next,
            previous: at,
        });
        self.node_mut(next).previous = id;
        self.node_mut(at).next = id;
        self.len += 1;
        id
    }

    /// Removes `id` from the ring, closing the gap, and hands back its value.
    ///
    /// `head` moves to the successor and `tail` to the predecessor when `id` was
    /// one of them. Unlinking the last node returns the ring to its empty state.
    pub fn unlink(&mut self, id: NodeId) -> T {
        let (previous, next) = {
            let node = self.node(id);
            (node.previous, node.next)
        };

        if self.len == 1 {
            assert_eq!(self.head, Some(id), "sole node must be the head");
            self.head = None;
            self.tail = None;
        } else {
            self.node_mut(previous).next = next;
            self.node_mut(next).previous = previous;
            if self.head == Some(id) {
                self.head = Some(next);
            }
            if self.tail == Some(id) {
                self.tail = Some(previous);
            }
        }

        self.len -= 1;
        let node = self.release(id);
        if self.len == 0 {
            // Nothing is live, so the free list can be dropped wholesale.
            self.slots.clear();
            self.free = None;
        }
        node.value
    }

    /// Finds the node at 1-based `index`.
    ///
    /// Walks forward from `head` when `index <= len / 2` and backward from `tail`
    /// otherwise, so the walk costs `min(index - 1, len - index)` hops. The exact
    /// midpoint walks forward.
    pub fn locate(&self, index: usize) -> Option<NodeId> {
        if index == 0 || index > self.len {
            return None;
        }

        if index <= self.len / 2 {
            let mut current = self.head?;
            for _ in 1..index {
                current = self.next(current);
            }
            Some(current)
        } else {
            let mut current = self.tail?;
            for _ in index..self.len {
                current = self.previous(current);
            }
            Some(current)
        }
    }

    /// Drops every node and returns to the empty state. Arena capacity is kept.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Full traversal check of the ring invariants. Panics on the first violation.
    pub fn assert_closed(&self) {
        let occupied = self
            .slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Occupied(_)))
            .count();
        assert_eq!(occupied, self.len, "live slots must match len");

        let (head, tail) = match (self.head, self.tail) {
            (None, None) => {
                assert_eq!(self.len, 0, "empty ring must have len 0");
                return;
            }
            (Some(head), Some(tail)) => (head, tail),
            (head, tail) => panic!("head {head:?} and tail {tail:?} disagree on emptiness"),
        };
        assert!(self.len >= 1);

        assert_eq!(self.next(tail), head, "tail.next must be head");
        assert_eq!(self.previous(head), tail, "head.previous must be tail");

        let mut current = head;
        for step in 0..self.len {
            let next = self.next(current);
            let previous = self.previous(current);
            assert_eq!(self.previous(next), current, "next.previous broken at step {step}");
            assert_eq!(self.next(previous), current, "previous.next broken at step {step}");
            if step + 1 < self.len {
                assert_ne!(next, head, "forward walk closed early at step {step}");
            }
            current = next;
        }
        assert_eq!(current, head, "forward walk of len hops must return to head");

        let mut current = tail;
        for _ in 0..self.len {
            current = self.previous(current);
        }
        assert_eq!(current, tail, "backward walk of len hops must return to tail");
    }
}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator over a ring, head to tail (or tail to head via `rev`).
pub struct Iter<'a, T> {
    ring: &'a Ring<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let ring = self.ring;
        let node = ring.node(self.front?);
        self.remaining -= 1;
        self.front = Some(node.next);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let ring = self.ring;
        let node = ring.node(self.back?);
        self.remaining -= 1;
        self.back = Some(node.previous);
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            ring: self.ring,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}
