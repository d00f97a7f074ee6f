//! Bounded FIFO queues.
//!
//! Two interchangeable implementations sit behind the [`Queue`] trait:
//! - [`ArrayQueue`]: ring buffer over a fixed slice
//! - [`LinkedQueue`]: [`LinkedList`](crate::collections::LinkedList) with a length bound

pub mod array_queue;
pub mod linked_queue;

pub use array_queue::ArrayQueue;
pub use linked_queue::LinkedQueue;

use crate::error::CapacityError;

/// A bounded first-in-first-out queue.
pub trait Queue<T> {
    /// Adds `value` at the rear of the queue.
    ///
    /// # Errors
    /// Returns the value inside a [`CapacityError`] if the queue is full.
    fn enqueue(&mut self, value: T) -> Result<(), CapacityError<T>>;

    /// Removes and returns the value at the front of the queue.
    fn dequeue(&mut self) -> Option<T>;

    /// Returns the value at the front without removing it.
    fn peek(&self) -> Option<&T>;

    /// Returns the number of queued values.
    fn len(&self) -> usize;

    /// Returns the maximum number of values the queue holds.
    fn capacity(&self) -> usize;

    /// Removes every value. The queue stays usable with the same capacity.
    fn clear(&mut self);

    /// Returns `true` if the queue is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the queue is at capacity.
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled<Q: Queue<usize>>(mut q: Q) -> Q {
        for i in 0..q.capacity() {
            q.enqueue(i).unwrap();
        }
        q
    }

    fn exercise<Q: Queue<usize>>(q: Q) {
        let mut q = filled(q);
        assert_eq!(q.capacity(), 10);
        assert!(q.is_full());
        assert_eq!(q.enqueue(100).unwrap_err().into_inner(), 100);
        assert_eq!(q.len(), 10);

        for i in 0..10 {
            assert_eq!(q.peek(), Some(&i));
            assert_eq!(q.dequeue(), Some(i));
            assert_eq!(q.len(), 10 - i - 1);
        }
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.peek(), None);

        let mut q = filled(q);
        q.clear();
        assert!(q.is_empty());
        q.enqueue(7).unwrap();
        assert_eq!(q.dequeue(), Some(7));
    }

    #[test]
    fn array_queue_contract() {
        exercise(ArrayQueue::with_capacity(10));
    }

    #[test]
    fn linked_queue_contract() {
        exercise(LinkedQueue::with_capacity(10));
    }
}
