//! Error types shared by the graph and the bounded containers.

use core::fmt;

use thiserror::Error;

/// Errors reported by graph operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex id outside `[0, vertex_count)` was passed to an operation.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The rejected vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

/// The error returned when a bounded container is already full.
///
/// The rejected element is handed back to the caller.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CapacityError<T> {
    element: T,
    capacity: usize,
}

impl<T> CapacityError<T> {
    pub(crate) const fn new(element: T, capacity: usize) -> Self {
        Self { element, capacity }
    }

    /// Returns the capacity of the container that rejected the element.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Recovers the element that could not be inserted.
    pub fn into_inner(self) -> T {
        self.element
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapacityError")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container is full (capacity {})", self.capacity)
    }
}

impl<T> std::error::Error for CapacityError<T> {}
