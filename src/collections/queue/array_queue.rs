//! `ArrayQueue` — a fixed-capacity ring buffer queue.
//!
//! Head and length wrap modulo the capacity, so interleaved enqueue/dequeue
//! never runs off the end of the buffer.

use super::Queue;
use crate::error::CapacityError;

/// A bounded FIFO queue backed by a ring buffer.
#[derive(Debug, Clone)]
pub struct ArrayQueue<T> {
    buffer: Box<[Option<T>]>,
    head: usize,
    len: usize,
}

impl<T> ArrayQueue<T> {
    /// Creates an empty queue that holds at most `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        let buffer = (0..capacity).map(|_| None).collect();
        Self {
            buffer,
            head: 0,
            len: 0,
        }
    }

    #[inline]
    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % self.buffer.len()
    }
}

impl<T> Queue<T> for ArrayQueue<T> {
    fn enqueue(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError::new(value, self.buffer.len()));
        }
        let idx = self.slot(self.len);
        self.buffer[idx] = Some(value);
        self.len += 1;
        Ok(())
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.buffer[self.head].take();
        self.head = self.slot(1);
        self.len -= 1;
        if self.len == 0 {
            self.head = 0;
        }
        value
    }

    fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.buffer[self.head].as_ref()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.buffer.len()
    }

    fn clear(&mut self) {
        for slot in self.buffer.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }
}
