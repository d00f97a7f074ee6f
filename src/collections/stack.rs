//! `ArrayStack` — a bounded LIFO stack over contiguous storage.

use crate::error::CapacityError;

/// A fixed-capacity stack.
///
/// Storage for `capacity` elements is reserved up front and never grows;
/// pushing onto a full stack hands the element back in a [`CapacityError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayStack<T> {
    values: Vec<T>,
    capacity: usize,
}

impl<T> ArrayStack<T> {
    /// Creates an empty stack that holds at most `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the maximum number of elements.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if no more elements can be pushed.
    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    /// Pushes `value` onto the top of the stack.
    ///
    /// # Errors
    /// Returns the value inside a [`CapacityError`] if the stack is full.
    pub fn push(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError::new(value, self.capacity));
        }
        self.values.push(value);
        Ok(())
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Option<T> {
        self.values.pop()
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.values.last()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Consumes the stack, returning its elements bottom to top.
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}
