//! # `trellis` - Classic data structures around an undirected graph
//!
//! A small library of building-block containers and an adjacency-list
//! undirected graph that composes them.
//!
//! ## Architecture
//!
//! Leaf-first:
//!
//! 1. **Sequence** ([`LinkedList<T>`]): singly linked list in an index arena.
//!    O(1) prepend and append; serves as each vertex's adjacency list.
//! 2. **Queues** ([`Queue<T>`], [`ArrayQueue<T>`], [`LinkedQueue<T>`]): bounded
//!    FIFO containers; any of them can drive a breadth-first traversal.
//! 3. **Stack** ([`ArrayStack<T>`]): bounded LIFO container; holds the
//!    candidate path during path search.
//! 4. **Graph** ([`UndirectedGraph`]): one adjacency list per vertex, with
//!    traversals, connected components and path finding.
//!
//! ## Errors
//!
//! Every operation that takes a vertex id validates it up front and returns
//! [`GraphError::VertexOutOfRange`] before touching the graph. Bounded
//! containers return [`CapacityError`] with the rejected element. Failing to
//! find a path is not an error: [`UndirectedGraph::find_path`] returns
//! `Ok(None)`.
//!
//! ## Logging
//!
//! Operations emit [`tracing`] events (`trace` for edge insertion, `debug`
//! for traversal and search results). Install a subscriber to see them.
//!
//! ## Example
//!
//! ```rust
//! use trellis::UndirectedGraph;
//!
//! let mut graph = UndirectedGraph::from_edges(4, [(0, 1), (1, 2)]).unwrap();
//!
//! assert_eq!(graph.adjacent(1).unwrap(), vec![2, 0]);
//! assert_eq!(graph.dfs(), vec![0, 1, 2, 3]);
//! assert_eq!(graph.find_path(0, 2).unwrap(), Some(vec![0, 1, 2]));
//! assert_eq!(graph.find_path(0, 3).unwrap(), None);
//! assert!(graph.add_edge(0, 4).is_err());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{ArrayQueue, ArrayStack, LinkedList, LinkedQueue, Queue};
pub use error::{CapacityError, GraphError};
pub use graph::{GraphStatistics, UndirectedGraph};
