//! An adjacency-list undirected graph over a fixed vertex set.
//!
//! Vertices are the integers `0..vertex_count`. Each vertex owns a
//! [`LinkedList`] of neighbor ids; adding the edge `{u, v}` prepends `v` to
//! `u`'s list and `u` to `v`'s list, so every list is in most-recent-first
//! order and traversal orders follow from the order edges were added.
//!
//! Self-loops and parallel edges are accepted and show up as repeated
//! adjacency entries.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_edge` | \(O(1)\) | Two list prepends |
//! | `degree` | \(O(1)\) | List length |
//! | `adjacent` | \(O(\text{degree})\) | Copies the list |
//! | `has_edge` | \(O(\text{degree})\) | Linear search |
//! | `dfs` / `bfs` | \(O(n + m)\) | Whole-graph sweep |
//! | `connected_vertices` | \(O(n + m)\) | One component |
//! | `find_path` | \(O(n + m)\) | Backtracking DFS |

mod path;
mod traversal;


use core::fmt;

use crate::collections::LinkedList;
use crate::error::GraphError;

/// An undirected graph stored as one adjacency list per vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph {
    adjacency: Vec<LinkedList<usize>>,
    edge_count: usize,
}

impl UndirectedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        let adjacency = (0..vertex_count).map(|_| LinkedList::new()).collect();
        Self {
            adjacency,
            edge_count: 0,
        }
    }

    /// Creates a graph with `vertex_count` vertices and the given edges,
    /// added in iteration order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for the first edge with an
    /// endpoint outside `0..vertex_count`; no graph is produced.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges added so far.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Checks that `vertex` names a vertex of this graph.
    fn check(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Adds the undirected edge `{u, v}`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint is invalid;
    /// the graph is left untouched.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check(u)?;
        self.check(v)?;
        self.adjacency[u].push_front(v);
        self.adjacency[v].push_front(u);
        self.edge_count += 1;
        tracing::trace!(u, v, edges = self.edge_count, "added edge");
        Ok(())
    }

    /// Returns the neighbors of `vertex` in adjacency-list order.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `vertex` is invalid.
    pub fn adjacent(&self, vertex: usize) -> Result<Vec<usize>, GraphError> {
        self.check(vertex)?;
        Ok(self.adjacency[vertex].to_vec())
    }

    /// Iterates over the neighbors of `vertex` without copying them.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `vertex` is invalid.
    pub fn neighbors(
        &self,
        vertex: usize,
    ) -> Result<impl ExactSizeIterator<Item = usize> + '_, GraphError> {
        self.check(vertex)?;
        Ok(self.adjacency[vertex].iter().copied())
    }

    /// Returns the number of edges incident on `vertex`.
    ///
    /// A self-loop counts twice.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `vertex` is invalid.
    pub fn degree(&self, vertex: usize) -> Result<usize, GraphError> {
        self.check(vertex)?;
        Ok(self.adjacency[vertex].len())
    }

    /// Same as [`degree`](Self::degree); every edge of an undirected graph
    /// points both ways.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `vertex` is invalid.
    pub fn in_degree(&self, vertex: usize) -> Result<usize, GraphError> {
        self.degree(vertex)
    }

    /// Same as [`degree`](Self::degree).
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `vertex` is invalid.
    pub fn out_degree(&self, vertex: usize) -> Result<usize, GraphError> {
        self.degree(vertex)
    }

    /// Checks whether an edge joins `u` and `v`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint is invalid.
    pub fn has_edge(&self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.check(u)?;
        self.check(v)?;
        Ok(self.adjacency[u].contains(&v))
    }

    /// Neighbors of an already validated vertex.
    #[inline]
    pub(crate) fn neighbors_unchecked(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[vertex].iter().copied()
    }

    /// Computes basic degree statistics.
    pub fn statistics(&self) -> GraphStatistics {
        let vertex_count = self.vertex_count();
        let mut degrees: Vec<usize> = self.adjacency.iter().map(LinkedList::len).collect();
        degrees.sort_unstable();

        let (min_degree, max_degree) = match (degrees.first(), degrees.last()) {
            (Some(&min), Some(&max)) => (min, max),
            _ => (0, 0),
        };
        let median_degree = if degrees.is_empty() {
            0
        } else if degrees.len() % 2 == 0 {
            let a = degrees[degrees.len() / 2 - 1];
            let b = degrees[degrees.len() / 2];
            (a + b) / 2
        } else {
            degrees[degrees.len() / 2]
        };
        let total_degree: usize = degrees.iter().sum();

        #[allow(clippy::cast_precision_loss)]
        let average_degree = if vertex_count == 0 {
            0.0
        } else {
            total_degree as f64 / vertex_count as f64
        };

        GraphStatistics {
            vertex_count,
            edge_count: self.edge_count,
            min_degree,
            max_degree,
            median_degree,
            average_degree,
        }
    }
}

/// Statistics about a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStatistics {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of undirected edges.
    pub edge_count: usize,
    /// Minimum degree over all vertices.
    pub min_degree: usize,
    /// Maximum degree over all vertices.
    pub max_degree: usize,
    /// Median degree over all vertices (lower-rounded mean of the middle pair).
    pub median_degree: usize,
    /// Average degree \(= 2m/n\).
    pub average_degree: f64,
}

/// One line per vertex: `<id> => [<neighbors in adjacency order>]`.
impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, list) in self.adjacency.iter().enumerate() {
            write!(f, "{v} => [")?;
            for (i, u) in list.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{u}")?;
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}
