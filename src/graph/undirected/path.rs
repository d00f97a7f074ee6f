//! Path search with backtracking.
//!
//! The search is a depth-first walk that keeps the current candidate path on
//! an [`ArrayStack`]. A vertex is pushed only when it still has unvisited
//! neighbors to try, and popped again once all of them failed, so when the
//! destination is reached the stack holds exactly the source-to-destination
//! path. Every vertex is visited at most once, giving \(O(n + m)\) overall.

use crate::collections::ArrayStack;
use crate::error::GraphError;
use crate::graph::access::visited::VisitedSet;
use crate::graph::undirected::UndirectedGraph;

/// Unvisited neighbors of a vertex on the candidate path, and how many of
/// them have been tried.
struct Frame {
    candidates: Vec<usize>,
    next: usize,
}

enum Step {
    Found,
    DeadEnd,
    Descend(Frame),
}

struct PathSearch<'g> {
    graph: &'g UndirectedGraph,
    dest: usize,
    visited: VisitedSet,
    path: ArrayStack<usize>,
}

impl PathSearch<'_> {
    fn push(&mut self, vertex: usize) {
        if let Err(err) = self.path.push(vertex) {
            panic!("path stack capacity too small: {err}");
        }
    }

    fn enter(&mut self, vertex: usize) -> Step {
        self.visited.try_visit(vertex);
        if vertex == self.dest {
            self.push(vertex);
            return Step::Found;
        }

        let candidates: Vec<usize> = self
            .graph
            .neighbors_unchecked(vertex)
            .filter(|&w| !self.visited.is_visited(w))
            .collect();
        if candidates.is_empty() {
            return Step::DeadEnd;
        }

        self.push(vertex);
        Step::Descend(Frame {
            candidates,
            next: 0,
        })
    }

    /// Returns `true` once `dest` is reached; the path is then on `self.path`.
    fn run(&mut self, source: usize) -> bool {
        let mut frames = match self.enter(source) {
            Step::Found => return true,
            Step::DeadEnd => return false,
            Step::Descend(frame) => vec![frame],
        };

        while let Some(frame) = frames.last_mut() {
            let mut candidate = None;
            while let Some(&w) = frame.candidates.get(frame.next) {
                frame.next += 1;
                if !self.visited.is_visited(w) {
                    candidate = Some(w);
                    break;
                }
            }

            match candidate {
                Some(w) => match self.enter(w) {
                    Step::Found => return true,
                    Step::DeadEnd => {}
                    Step::Descend(child) => frames.push(child),
                },
                None => {
                    // Nothing below this vertex reaches `dest`.
                    frames.pop();
                    self.path.pop();
                }
            }
        }
        false
    }
}

impl UndirectedGraph {
    /// Finds a path from `source` to `dest`.
    ///
    /// Returns `Ok(Some(path))` with `path[0] == source`, the last element
    /// equal to `dest`, consecutive vertices joined by an edge and no vertex
    /// repeated. Returns `Ok(None)` when `dest` is not reachable. A vertex
    /// always reaches itself: `find_path(s, s)` is `[s]`.
    ///
    /// The path is the first one found by a depth-first search that follows
    /// adjacency lists in most-recent-edge-first order; it need not be the
    /// shortest.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if either vertex is invalid.
    pub fn find_path(&self, source: usize, dest: usize) -> Result<Option<Vec<usize>>, GraphError> {
        self.check(source)?;
        self.check(dest)?;
        if source == dest {
            return Ok(Some(vec![source]));
        }

        let n = self.vertex_count();
        let mut search = PathSearch {
            graph: self,
            dest,
            visited: VisitedSet::new(n),
            path: ArrayStack::with_capacity(n),
        };
        let found = search.run(source);
        tracing::debug!(
            source,
            dest,
            found,
            explored = search.visited.count(),
            "path search complete"
        );

        if found {
            Ok(Some(search.path.into_vec()))
        } else {
            debug_assert!(search.path.is_empty());
            Ok(None)
        }
    }
}
