use std::collections::VecDeque;
use std::iter::FromIterator;

use tracing::{debug, trace};

use crate::util::EmptyQueueError;

/// First-in-first-out queue.
///
/// Items are held in a private `VecDeque`, so enqueue and dequeue are both
/// O(1). The storage is never handed out: the only ways in and out are
/// `enqueue` and `dequeue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    data: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Queue<T> {
        Queue {
            data: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Queue<T> {
        Queue {
            data: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends `item` at the tail.
    pub fn enqueue(&mut self, item: T) {
        self.data.push_back(item);
        trace!(len = self.data.len(), "enqueued item");
    }

    /// Removes and returns the oldest item. An empty queue is left untouched.
    pub fn dequeue(&mut self) -> Result<T, EmptyQueueError> {
        match self.data.pop_front() {
            Some(item) => {
                trace!(len = self.data.len(), "dequeued item");
                Ok(item)
            }
            None => {
                debug!("dequeue on empty queue");
                Err(EmptyQueueError)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        for item in iter {
            queue.enqueue(item);
        }
        queue
    }
}
