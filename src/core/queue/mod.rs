use std::fmt;
use std::iter::FusedIterator;

use crate::core::error::{QueueError, Result};
use crate::core::ring::Ring;

pub use crate::core::ring::Iter;

/// FIFO queue over a circular doubly-linked ring.
///
/// New values go in just before `head` (becoming the new tail); `dequeue` takes
/// from `head`. Both are O(1).
///
/// Not synchronized: callers sharing a queue across threads must serialize every
/// mutation themselves and must not iterate while another thread mutates.
#[derive(Clone)]
pub struct CircularDoubleLinkedQueue<T> {
    ring: Ring<T>,
}

impl<T> CircularDoubleLinkedQueue<T> {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self { ring: Ring::new() }
    }

    /// Create an empty queue with room for `capacity` values before the arena grows
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ring: Ring::with_capacity(capacity),
        }
    }

    /// Enqueue an item at the back
    pub fn enqueue(&mut self, item: T) {
        let len_before = self.ring.len();
        match self.ring.head() {
            None => {
                self.ring.insert_first(item);
            }
            Some(head) => {
                let id = self.ring.insert_before(head, item);
                self.ring.set_tail(id);
            }
        }
        // -- post op assertion: exactly one node added
        assert_eq!(self.ring.len(), len_before + 1, "Queue length should grow by 1");
    }

    /// Dequeue the front item
    pub fn dequeue(&mut self) -> Result<T> {
        let head = self.ring.head().ok_or(QueueError::EmptyContainer)?;
        let len_before = self.ring.len();
        let item = self.ring.unlink(head);
        // -- post op assertion: exactly one node removed
        assert_eq!(self.ring.len(), len_before - 1, "Queue length should decrease by 1");
        Ok(item)
    }

    /// Get the current queue length
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// The value `dequeue` would return next
    pub fn front(&self) -> Option<&T> {
        self.ring.head().map(|id| self.ring.value(id))
    }

    /// The most recently enqueued value
    pub fn back(&self) -> Option<&T> {
        self.ring.tail().map(|id| self.ring.value(id))
    }

    /// Drop every value
    pub fn clear(&mut self) {
        self.ring.clear();
    }

    /// Front-to-back view of the queue. Call again to restart.
    pub fn iter(&self) -> Iter<'_, T> {
        self.ring.iter()
    }

    /// Walks the whole ring and panics if any link or end pointer is inconsistent.
    pub fn assert_ring_closed(&self) {
        self.ring.assert_closed();
    }

    pub(crate) fn ring(&self) -> &Ring<T> {
        &self.ring
    }

    pub(crate) fn ring_mut(&mut self) -> &mut Ring<T> {
        &mut self.ring
    }
}

impl<T> Default for CircularDoubleLinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders `[]` when empty, otherwise `[v1, v2, ..., vn]` front to back.
pub(crate) fn write_bracketed<'a, T, I>(f: &mut fmt::Formatter<'_>, values: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("[")?;
    for (position, value) in values.into_iter().enumerate() {
        if position > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{value}")?;
    }
    f.write_str("]")
}

impl<T: fmt::Display> fmt::Display for CircularDoubleLinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularDoubleLinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for CircularDoubleLinkedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularDoubleLinkedQueue<T> {}

impl<T> Extend<T> for CircularDoubleLinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for CircularDoubleLinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a CircularDoubleLinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for CircularDoubleLinkedQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

/// Owning iterator that drains a queue in dequeue order.
pub struct IntoIter<T> {
    queue: CircularDoubleLinkedQueue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
