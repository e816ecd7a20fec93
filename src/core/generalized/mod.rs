use std::fmt;

use crate::core::error::{QueueError, Result};
use crate::core::queue::{CircularDoubleLinkedQueue, IntoIter, Iter, write_bracketed};

/// FIFO queue that can also remove a value at any 1-based position.
///
/// Positional access walks from whichever end is closer: forward from the front
/// when `index <= len / 2`, backward from the back otherwise.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneralizedQueue<T> {
    queue: CircularDoubleLinkedQueue<T>,
}

impl<T> GeneralizedQueue<T> {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self {
            queue: CircularDoubleLinkedQueue::new(),
        }
    }

    /// Create an empty queue with room for `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: CircularDoubleLinkedQueue::with_capacity(capacity),
        }
    }

    /// Enqueue an item at the back
    pub fn enqueue(&mut self, item: T) {
        self.queue.enqueue(item);
    }

    /// Dequeue the front item
    pub fn dequeue(&mut self) -> Result<T> {
        self.queue.dequeue()
    }

    /// Removes and returns the value at 1-based `index`.
    ///
    /// Fails with [`QueueError::IndexOutOfRange`] unless `1 <= index <= len`; the
    /// queue is untouched on failure. Index 1 is a plain dequeue.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.queue.len();
        if index < 1 || index > len {
            return Err(QueueError::IndexOutOfRange { index, len });
        }

        if index == 1 {
            return self.queue.dequeue();
        }

        let ring = self.queue.ring_mut();
        let target = ring
            .locate(index)
            .ok_or(QueueError::IndexOutOfRange { index, len })?;
        let item = ring.unlink(target);

        // --post operation assertion
        assert_eq!(self.queue.len(), len - 1, "remove_at must drop exactly one node");
        Ok(item)
    }

    /// Borrows the value at 1-based `index` without removing it.
    pub fn get(&self, index: usize) -> Result<&T> {
        let ring = self.queue.ring();
        ring.locate(index)
            .map(|id| ring.value(id))
            .ok_or(QueueError::IndexOutOfRange {
                index,
                len: ring.len(),
            })
    }

    /// Get the current queue length
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// The value `dequeue` would return next
    pub fn front(&self) -> Option<&T> {
        self.queue.front()
    }

    /// The most recently enqueued value
    pub fn back(&self) -> Option<&T> {
        self.queue.back()
    }

    /// Drop every value
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Front-to-back view of the queue
    pub fn iter(&self) -> Iter<'_, T> {
        self.queue.iter()
    }

    /// Panics if the underlying ring is inconsistent
    pub fn assert_ring_closed(&self) {
        self.queue.assert_ring_closed();
    }
}

impl<T> Default for GeneralizedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<CircularDoubleLinkedQueue<T>> for GeneralizedQueue<T> {
    fn from(queue: CircularDoubleLinkedQueue<T>) -> Self {
        Self { queue }
    }
}

impl<T: fmt::Display> fmt::Display for GeneralizedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for GeneralizedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.queue, f)
    }
}

impl<T> Extend<T> for GeneralizedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.queue.extend(iter);
    }
}

impl<T> FromIterator<T> for GeneralizedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a GeneralizedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for GeneralizedQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.queue.into_iter()
    }
}
