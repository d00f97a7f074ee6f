//! Whole-graph traversals and connected-component discovery.

use crate::collections::queue::{ArrayQueue, Queue};
use crate::error::GraphError;
use crate::graph::access::visited::VisitedSet;
use crate::graph::undirected::UndirectedGraph;

/// Enqueues `vertex`, treating a full queue as a sizing bug.
fn enqueue_vertex<Q: Queue<usize>>(queue: &mut Q, vertex: usize) {
    if let Err(err) = queue.enqueue(vertex) {
        panic!("bfs queue capacity too small: {err}");
    }
}

impl UndirectedGraph {
    /// Pre-order depth-first walk of the component containing `start`.
    ///
    /// Runs on an explicit stack of neighbor iterators, so the visit order is
    /// the same as the recursive formulation without its depth limit.
    fn dfs_from(&self, start: usize, visited: &mut VisitedSet, out: &mut Vec<usize>) {
        if !visited.try_visit(start) {
            return;
        }
        out.push(start);

        let mut stack = vec![self.neighbors_unchecked(start)];
        while let Some(neighbors) = stack.last_mut() {
            match neighbors.find(|&w| !visited.is_visited(w)) {
                Some(next) => {
                    visited.try_visit(next);
                    out.push(next);
                    stack.push(self.neighbors_unchecked(next));
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    /// Depth-first traversal of the whole graph.
    ///
    /// Start vertices are tried in ascending id order, so the result is one
    /// block per connected component, each in depth-first pre-order with
    /// neighbors taken most-recent-edge first.
    pub fn dfs(&self) -> Vec<usize> {
        let n = self.vertex_count();
        let mut visited = VisitedSet::new(n);
        let mut order = Vec::with_capacity(n);
        for start in 0..n {
            if !visited.is_visited(start) {
                self.dfs_from(start, &mut visited, &mut order);
            }
        }
        tracing::debug!(visited = order.len(), "dfs complete");
        order
    }

    /// Breadth-first traversal of the whole graph.
    ///
    /// Uses an [`ArrayQueue`] sized to the vertex count.
    pub fn bfs(&self) -> Vec<usize> {
        self.bfs_with(ArrayQueue::with_capacity(self.vertex_count()))
    }

    /// Breadth-first traversal driven by a caller-supplied queue.
    ///
    /// Vertices are marked visited when they are enqueued, so each vertex
    /// enters the queue at most once. Start vertices are tried in ascending
    /// id order; the result is one block per component in layer order.
    ///
    /// # Panics
    /// Panics if `queue` cannot hold one whole component; a capacity of
    /// `vertex_count()` is always enough.
    pub fn bfs_with<Q: Queue<usize>>(&self, mut queue: Q) -> Vec<usize> {
        let n = self.vertex_count();
        let mut visited = VisitedSet::new(n);
        let mut order = Vec::with_capacity(n);
        queue.clear();

        for start in 0..n {
            if !visited.try_visit(start) {
                continue;
            }
            enqueue_vertex(&mut queue, start);

            while let Some(v) = queue.dequeue() {
                order.push(v);
                for w in self.neighbors_unchecked(v) {
                    if visited.try_visit(w) {
                        enqueue_vertex(&mut queue, w);
                    }
                }
            }
        }
        tracing::debug!(visited = order.len(), "bfs complete");
        order
    }

    /// Returns every vertex reachable from `source`, in depth-first visit order.
    ///
    /// The result always contains `source` itself.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `source` is invalid.
    pub fn connected_vertices(&self, source: usize) -> Result<Vec<usize>, GraphError> {
        self.check(source)?;
        let mut visited = VisitedSet::new(self.vertex_count());
        let mut connected = Vec::new();
        self.dfs_from(source, &mut visited, &mut connected);
        tracing::debug!(source, reachable = connected.len(), "connected vertices");
        Ok(connected)
    }

    /// Labels every vertex with its connected component.
    ///
    /// Returns `comp` where `comp[v]` is the smallest vertex id in `v`'s
    /// component. Two vertices are connected iff their labels are equal.
    pub fn connected_components(&self) -> Vec<usize> {
        let n = self.vertex_count();
        let mut visited = VisitedSet::new(n);
        let mut comp = vec![usize::MAX; n];
        let mut members = Vec::new();

        for start in 0..n {
            if visited.is_visited(start) {
                continue;
            }
            members.clear();
            self.dfs_from(start, &mut visited, &mut members);
            for &v in &members {
                comp[v] = start;
            }
        }
        debug_assert_eq!(visited.count(), visited.len());
        comp
    }

    /// Returns the number of connected components.
    pub fn component_count(&self) -> usize {
        self.connected_components()
            .iter()
            .enumerate()
            .filter(|&(v, &label)| v == label)
            .count()
    }
}
