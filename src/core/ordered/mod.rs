use std::fmt;

use crate::core::error::Result;
use crate::core::queue::{CircularDoubleLinkedQueue, IntoIter, Iter, write_bracketed};

/// Queue that keeps its values in ascending order.
///
/// `enqueue` scans from the front for the first value strictly greater than the
/// new one and splices in before it, so equal values keep their arrival order.
/// `dequeue` always yields the current minimum.
#[derive(Clone, PartialEq, Eq)]
pub struct OrderedQueue<T> {
    queue: CircularDoubleLinkedQueue<T>,
}

impl<T> OrderedQueue<T> {
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

    /// Removes the smallest value.
    pub fn dequeue(&mut self) -> Result<T> {
        self.queue.dequeue()
    }

    /// Get the current queue length
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Smallest value.
    pub fn front(&self) -> Option<&T> {
        self.queue.front()
    }

    /// Largest value.
    pub fn back(&self) -> Option<&T> {
        self.queue.back()
    }

    /// Drop every value
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Smallest to largest view of the queue
    pub fn iter(&self) -> Iter<'_, T> {
        self.queue.iter()
    }

    /// Panics if the underlying ring is inconsistent
    pub fn assert_ring_closed(&self) {
        self.queue.assert_ring_closed();
    }
}

impl<T: Ord> OrderedQueue<T> {
    /// Inserts `item` after every value less than or equal to it.
    pub fn enqueue(&mut self, item: T) {
        let len_before = self.queue.len();
        let ring = self.queue.ring_mut();

        match (ring.head(), ring.tail()) {
            (Some(head), Some(tail)) => {
                let mut current = head;
                loop {
                    if ring.value(current) > &item {
                        let id = ring.insert_before(current, item);
                        if current == head {
                            ring.set_head(id);
                        }
                        break;
                    }
                    if current == tail {
                        let id = ring.insert_after(tail, item);
                        ring.set_tail(id);
                        break;
                    }
                    current = ring.next(current);
                }
            }
            _ => {
                ring.insert_first(item);
            }
        }

        // -- post op assertion
        assert_eq!(self.queue.len(), len_before + 1, "Queue length should grow by 1");
    }
}

impl<T> Default for OrderedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.queue, f)
    }
}

impl<T: Ord> Extend<T> for OrderedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a OrderedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for OrderedQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.queue.into_iter()
    }
}
