//! A growable, set-backed directed graph over dense vertex identifiers.
//!
//! Vertical split:
//! - `iter`: the three range types
//! - `interchange`: edge-list conversion used by serde
//! - `tests`: module tests

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::graph::basic::invariant_assert::{invariant_assert, vertex_in_range};
use crate::graph::protocol::{Edge, GraphProtocol, VertexId};

mod interchange;
mod iter;
#[cfg(test)]
mod tests;

pub use interchange::EdgeList;
pub use iter::{AdjacentVertices, Edges, Vertices};

/// A directed, sparse, unweighted graph.
///
/// Storage is three parallel collections:
/// - `vertices`: the identifiers `0..n` in creation order
/// - `adjacency`: one ordered set of targets per vertex, indexed like `vertices`
/// - `edge_list`: every edge once, in insertion order
///
/// Vertices and edges are only ever added. Inserting an edge whose endpoints do
/// not exist yet first grows the vertex set up to the larger endpoint, and
/// inserting an existing edge changes nothing.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Appends to both vertex-indexed vectors |
/// | `add_edge` | \(O(\log d + k)\) | `d` out-degree of `u`, `k` vertices created by growth |
/// | `edge` | \(O(\log d)\) | Set lookup |
/// | `num_vertices` / `num_edges` | \(O(1)\) | |
/// | `adjacent_vertices` | \(O(1)\) to create | Yields targets in ascending order |
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "EdgeList", try_from = "EdgeList")]
pub struct DirectedGraph {
    vertices: Vec<VertexId>,
    adjacency: Vec<BTreeSet<VertexId>>,
    edge_list: Vec<Edge>,
}

impl DirectedGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `vertex_capacity` vertices and
    /// `edge_capacity` edges before reallocating.
    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            adjacency: Vec::with_capacity(vertex_capacity),
            edge_list: Vec::with_capacity(edge_capacity),
        }
    }

    /// Builds a graph by inserting every edge of `edges` in order.
    ///
    /// Vertices grow to cover every endpoint; repeated pairs are ignored.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }

    /// Appends a vertex and returns its identifier, which is the previous vertex
    /// count.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = self.vertices.len();
        self.vertices.push(id);
        self.adjacency.push(BTreeSet::new());
        debug_assert_eq!(self.vertices.len(), self.adjacency.len());
        id
    }

    /// Inserts the directed edge `u -> v`.
    ///
    /// If either endpoint is `>= num_vertices()`, vertices are appended up to
    /// and including `max(u, v)` before the edge is recorded. Returns the edge
    /// descriptor with `true` if the edge is new, or with `false` if it already
    /// existed, in which case the graph is unchanged.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> (Edge, bool) {
        let edge = Edge::new(u, v);
        self.grow_to_include(u.max(v));

        if !self.adjacency[u].insert(v) {
            #[cfg(feature = "tracing")]
            tracing::trace!(source = u, target = v, "edge already present");
            return (edge, false);
        }

        self.edge_list.push(edge);
        #[cfg(feature = "tracing")]
        tracing::trace!(source = u, target = v, edges = self.edge_list.len(), "edge inserted");
        (edge, true)
    }

    /// Looks up the edge `u -> v`.
    ///
    /// `u` must be an existing vertex. `v` may be any identifier; targets that
    /// are not vertices are simply not found.
    pub fn edge(&self, u: VertexId, v: VertexId) -> (Edge, bool) {
        vertex_in_range(u, self.num_vertices());
        (Edge::new(u, v), self.adjacency[u].contains(&v))
    }

    /// Out-neighbors of `u` in ascending order.
    ///
    /// `u` must be an existing vertex.
    pub fn adjacent_vertices(&self, u: VertexId) -> AdjacentVertices<'_> {
        vertex_in_range(u, self.num_vertices());
        AdjacentVertices::new(&self.adjacency[u])
    }

    /// All vertices in creation order.
    pub fn vertices(&self) -> Vertices<'_> {
        Vertices::new(&self.vertices)
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> Edges<'_> {
        Edges::new(&self.edge_list)
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edge_list.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertex at position `index` in creation order.
    ///
    /// Identifiers are dense and never reordered, so this is `index` itself.
    /// Debug builds panic when `index >= num_vertices()`; release builds trust
    /// the caller.
    #[inline]
    pub fn vertex(&self, index: usize) -> VertexId {
        vertex_in_range(index, self.num_vertices());
        index
    }

    /// Returns `true` if `u` names an existing vertex.
    #[inline]
    pub fn contains_vertex(&self, u: VertexId) -> bool {
        u < self.num_vertices()
    }

    /// Number of edges leaving `u`.
    pub fn out_degree(&self, u: VertexId) -> usize {
        vertex_in_range(u, self.num_vertices());
        self.adjacency[u].len()
    }

    /// Checks the structural invariants of the graph.
    ///
    /// This method checks that:
    /// 1. The vertex sequence and the adjacency sets have equal length
    /// 2. Vertex identifiers are exactly `0..n`, in order
    /// 3. Every adjacency target is an existing vertex
    /// 4. Edges and adjacency memberships correspond one-to-one
    ///
    /// Each check is debug-asserted, so in debug builds a violation panics with a
    /// description instead of returning `false`.
    pub fn validate_invariants(&self) -> bool {
        let n = self.vertices.len();

        let mut ok = invariant_assert(
            self.adjacency.len() == n,
            "vertex sequence and adjacency sets must have equal length",
        );
        ok &= invariant_assert(
            self.vertices.iter().copied().eq(0..n),
            "vertex identifiers must be exactly 0..n in creation order",
        );
        ok &= invariant_assert(
            self.adjacency.iter().flatten().all(|&v| v < n),
            "adjacency target must be an existing vertex",
        );

        let memberships: usize = self.adjacency.iter().map(BTreeSet::len).sum();
        ok &= invariant_assert(
            memberships == self.edge_list.len(),
            "edge count must equal the number of adjacency memberships",
        );
        ok &= invariant_assert(
            self.edge_list
                .iter()
                .all(|e| self.adjacency.get(e.source()).is_some_and(|set| set.contains(&e.target()))),
            "every edge must be recorded in its source's adjacency set",
        );
        let distinct: BTreeSet<Edge> = self.edge_list.iter().copied().collect();
        ok &= invariant_assert(
            distinct.len() == self.edge_list.len(),
            "edge sequence must not repeat an ordered pair",
        );

        ok
    }

    /// Appends vertices until `vertex` exists.
    fn grow_to_include(&mut self, vertex: VertexId) {
        if vertex < self.vertices.len() {
            return;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            from = self.vertices.len(),
            to = vertex + 1,
            "growing vertex set for edge endpoint"
        );

        let additional = vertex + 1 - self.vertices.len();
        self.vertices.reserve(additional);
        self.adjacency.reserve(additional);
        while self.vertices.len() <= vertex {
            self.add_vertex();
        }
    }
}

impl GraphProtocol for DirectedGraph {
    type Vertices<'a> = Vertices<'a>;
    type Edges<'a> = Edges<'a>;
    type AdjacentVertices<'a> = AdjacentVertices<'a>;

    #[inline]
    fn add_vertex(&mut self) -> VertexId {
        DirectedGraph::add_vertex(self)
    }

    #[inline]
    fn add_edge(&mut self, u: VertexId, v: VertexId) -> (Edge, bool) {
        DirectedGraph::add_edge(self, u, v)
    }

    #[inline]
    fn edge(&self, u: VertexId, v: VertexId) -> (Edge, bool) {
        DirectedGraph::edge(self, u, v)
    }

    #[inline]
    fn adjacent_vertices(&self, u: VertexId) -> AdjacentVertices<'_> {
        DirectedGraph::adjacent_vertices(self, u)
    }

    #[inline]
    fn vertices(&self) -> Vertices<'_> {
        DirectedGraph::vertices(self)
    }

    #[inline]
    fn edges(&self) -> Edges<'_> {
        DirectedGraph::edges(self)
    }

    #[inline]
    fn num_vertices(&self) -> usize {
        DirectedGraph::num_vertices(self)
    }

    #[inline]
    fn num_edges(&self) -> usize {
        DirectedGraph::num_edges(self)
    }

    #[inline]
    fn vertex(&self, index: usize) -> VertexId {
        DirectedGraph::vertex(self, index)
    }
}

impl<E: Into<Edge>> Extend<E> for DirectedGraph {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for e in iter {
            let e = e.into();
            self.add_edge(e.source(), e.target());
        }
    }
}

impl FromIterator<Edge> for DirectedGraph {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl FromIterator<(VertexId, VertexId)> for DirectedGraph {
    fn from_iter<I: IntoIterator<Item = (VertexId, VertexId)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}
