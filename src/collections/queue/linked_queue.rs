//! `LinkedQueue` — a bounded queue over [`LinkedList`].

use super::Queue;
use crate::collections::LinkedList;
use crate::error::CapacityError;

/// A bounded FIFO queue that appends at the list tail and pops from its head.
#[derive(Debug, Clone)]
pub struct LinkedQueue<T> {
    values: LinkedList<T>,
    capacity: usize,
}

impl<T> LinkedQueue<T> {
    /// Creates an empty queue that holds at most `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: LinkedList::with_capacity(capacity),
            capacity,
        }
    }
}

impl<T> Queue<T> for LinkedQueue<T> {
    fn enqueue(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError::new(value, self.capacity));
        }
        self.values.push_back(value);
        Ok(())
    }

    fn dequeue(&mut self) -> Option<T> {
        self.values.pop_front()
    }

    fn peek(&self) -> Option<&T> {
        self.values.front()
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}
