//! Graph representations and the algorithms that run on them.
//!
//! - `undirected`: adjacency-list undirected graph with DFS/BFS, component
//!   discovery and backtracking path search

pub mod undirected;
pub(crate) mod access;

pub use undirected::{GraphStatistics, UndirectedGraph};
