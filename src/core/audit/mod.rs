pub use crate::core::{
    error::{QueueError, Result},
    generalized::GeneralizedQueue,
    log::{LogEntry, Logger, Op, Outcome},
};
use std::sync::{Arc, Mutex};

/// Generalized queue that records every mutating call in a [`Logger`].
///
/// Failed calls are recorded as [`Outcome::Rejected`] and still leave the queue
/// unchanged.
#[derive(Clone, Debug)]
pub struct AuditedQueue<T> {
    queue: GeneralizedQueue<T>,
    logger: Logger<T>,
}

impl<T: Clone> AuditedQueue<T> {
    pub fn new() -> Self {
        Self {
            queue: GeneralizedQueue::new(),
            logger: Logger::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: GeneralizedQueue::with_capacity(capacity),
            logger: Logger::new(),
        }
    }

    /// Enqueue with logging
    pub fn enqueue(&mut self, item: T) {
        self.queue.enqueue(item.clone());
        self.logger
            .log(Op::Enqueue, None, Some(item), Outcome::Applied, self.queue.len());
    }

    /// Dequeue with logging
    pub fn dequeue(&mut self) -> Result<T> {
        let result = self.queue.dequeue();
        self.record(Op::Dequeue, None, &result);
        result
    }

    /// Positional removal with logging
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let result = self.queue.remove_at(index);
        self.record(Op::RemoveAt, Some(index), &result);
        result
    }

    fn record(&mut self, op: Op, index: Option<usize>, result: &Result<T>) {
        let (item, outcome) = match result {
            Ok(item) => (Some(item.clone()), Outcome::Applied),
            Err(err) => (
                None,
                Outcome::Rejected {
                    reason: err.to_string(),
                },
            ),
        };
        self.logger.log(op, index, item, outcome, self.queue.len());
    }

    pub fn queue(&self) -> &GeneralizedQueue<T> {
        &self.queue
    }

    /// Expose logs
    pub fn logs(&self) -> &[LogEntry<T>] {
        self.logger.entries()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn into_parts(self) -> (GeneralizedQueue<T>, Logger<T>) {
        (self.queue, self.logger)
    }
}

impl<T: Clone> Default for AuditedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle for callers that need one queue across threads.
/// The mutex serializes every operation; the queue itself does no locking.
pub type SharedQueue<T> = Arc<Mutex<AuditedQueue<T>>>;
