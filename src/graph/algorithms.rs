//! Generic graph algorithms over [`GraphProtocol`].
//!
//! Nothing here knows about a concrete storage layout. The algorithms only use
//! the protocol's ranges, so they work for [`crate::DirectedGraph`] and for any
//! other conforming graph.

use std::collections::VecDeque;

use crate::error::{GraphError, Result};
use crate::graph::protocol::{Edge, GraphProtocol, VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Orders the vertices so that every edge points forward.
///
/// Depth-first search from each unvisited vertex in `vertices()` order, with
/// neighbours taken in adjacency order; the result is the reverse of the
/// finishing order. Isolated vertices are included.
///
/// # Errors
/// Returns [`GraphError::NotADag`] with the first back edge found if the graph
/// has a cycle (self-loops included).
pub fn topological_sort<G: GraphProtocol>(graph: &G) -> Result<Vec<VertexId>> {
    let n = graph.num_vertices();
    let mut color = vec![Color::White; n];
    let mut finished = Vec::with_capacity(n);
    let mut stack: Vec<(VertexId, G::AdjacentVertices<'_>)> = Vec::new();

    for root in graph.vertices() {
        if color[root] != Color::White {
            continue;
        }
        color[root] = Color::Gray;
        stack.push((root, graph.adjacent_vertices(root)));

        while let Some((u, neighbors)) = stack.last_mut() {
            let u = *u;
            match neighbors.next() {
                Some(v) => match color[v] {
                    Color::White => {
                        color[v] = Color::Gray;
                        stack.push((v, graph.adjacent_vertices(v)));
                    }
                    Color::Gray => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(source = u, target = v, "back edge found during topological sort");
                        return Err(GraphError::NotADag { edge: Edge::new(u, v) });
                    }
                    Color::Black => {}
                },
                None => {
                    color[u] = Color::Black;
                    finished.push(u);
                    stack.pop();
                }
            }
        }
    }

    finished.reverse();
    Ok(finished)
}

/// Returns `true` if `to` can be reached from `from` (every vertex reaches itself).
pub fn is_reachable<G: GraphProtocol>(graph: &G, from: VertexId, to: VertexId) -> bool {
    Dfs::new(graph, from).any(|v| v == to)
}

/// An iterator for Depth-First Search (DFS).
///
/// Yields vertices in preorder, starting with `start` and descending into
/// neighbours in adjacency order. Holds one adjacency range per vertex on the
/// current path.
pub struct Dfs<'g, G: GraphProtocol + 'g> {
    graph: &'g G,
    visited: Vec<bool>,
    stack: Vec<G::AdjacentVertices<'g>>,
    pending: Option<VertexId>,
}

impl<'g, G: GraphProtocol + 'g> Dfs<'g, G> {
    /// Creates a new DFS iterator starting from `start`.
    ///
    /// A `start` outside the graph yields nothing.
    pub fn new(graph: &'g G, start: VertexId) -> Self {
        let mut visited = vec![false; graph.num_vertices()];
        let pending = if start < visited.len() {
            visited[start] = true;
            Some(start)
        } else {
            None
        };

        Self {
            graph,
            visited,
            stack: Vec::new(),
            pending,
        }
    }
}

impl<'g, G: GraphProtocol + 'g> Iterator for Dfs<'g, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(u) = self.pending.take() {
            self.stack.push(self.graph.adjacent_vertices(u));
            return Some(u);
        }

        while let Some(neighbors) = self.stack.last_mut() {
            let visited = &self.visited;
            if let Some(v) = neighbors.find(|&v| !visited[v]) {
                self.visited[v] = true;
                self.stack.push(self.graph.adjacent_vertices(v));
                return Some(v);
            }
            self.stack.pop();
        }

        None
    }
}

/// An iterator for Breadth-First Search (BFS).
///
/// Yields vertices level by level from `start`, discovering neighbours in
/// adjacency order.
pub struct Bfs<'g, G: GraphProtocol> {
    graph: &'g G,
    visited: Vec<bool>,
    queue: VecDeque<VertexId>,
}

impl<'g, G: GraphProtocol> Bfs<'g, G> {
    /// Creates a new BFS iterator starting from `start`.
    ///
    /// A `start` outside the graph yields nothing.
    pub fn new(graph: &'g G, start: VertexId) -> Self {
        let len = graph.num_vertices();
        let mut visited = vec![false; len];
        let mut queue = VecDeque::new();

        if start < len {
            visited[start] = true;
            queue.push_back(start);
        }

        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<G: GraphProtocol> Iterator for Bfs<'_, G> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.adjacent_vertices(u) {
            if !self.visited[v] {
                self.visited[v] = true;
                self.queue.push_back(v);
            }
        }

        Some(u)
    }
}
