//! The graph access protocol.
//!
//! Every graph type in this crate, and any external type that wants to reuse the
//! generic algorithms in [`crate::graph::algorithms`], implements
//! [`GraphProtocol`]. The shape mirrors the concept set of classic generic graph
//! libraries: a vertex-identifier type, an edge descriptor, three range kinds
//! (vertices, edges, adjacency) and two size queries.
//!
//! The free functions at the bottom of this module expose the same operations in
//! call-with-graph form (`add_edge(u, v, &mut g)`), for algorithms written in that
//! style.

use serde::{Deserialize, Serialize};

/// A dense, zero-based vertex identifier.
pub type VertexId = usize;

/// A directed edge descriptor.
///
/// The ordered pair `(source, target)` is the edge's identity: two descriptors
/// with the same endpoints denote the same edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    source: VertexId,
    target: VertexId,
}

impl Edge {
    /// Creates the descriptor for the edge `source -> target`.
    #[inline]
    pub const fn new(source: VertexId, target: VertexId) -> Self {
        Self { source, target }
    }

    /// The tail of the edge.
    #[inline]
    pub const fn source(self) -> VertexId {
        self.source
    }

    /// The head of the edge.
    #[inline]
    pub const fn target(self) -> VertexId {
        self.target
    }

    /// The descriptor of the opposite edge `target -> source`.
    #[inline]
    pub const fn reversed(self) -> Self {
        Self::new(self.target, self.source)
    }
}

impl From<(VertexId, VertexId)> for Edge {
    #[inline]
    fn from((source, target): (VertexId, VertexId)) -> Self {
        Self::new(source, target)
    }
}

impl From<Edge> for (VertexId, VertexId) {
    #[inline]
    fn from(edge: Edge) -> Self {
        (edge.source, edge.target)
    }
}

/// Capability interface of a directed, unweighted graph over dense vertex ids.
///
/// Ranges are plain iterators. The `Clone` bound on each range type makes them
/// restartable: an algorithm can keep a copy of a range and walk it again.
/// Ranges borrow the graph, so a graph cannot be mutated while a range is alive.
///
/// ### Contract
/// | Operation | Result |
/// |-----------|--------|
/// | `add_vertex` | next id `n == num_vertices()` |
/// | `add_edge(u, v)` | grows vertices to `max(u, v) + 1`; `(e, false)` if `e` already existed |
/// | `edge(u, v)` | `(e, true)` iff `v` is adjacent to `u` |
/// | `adjacent_vertices(u)` | targets of `u` in ascending order |
/// | `vertices()` | `0..num_vertices()` in creation order |
/// | `edges()` | edges in insertion order |
///
/// Passing a vertex `>= num_vertices()` to `edge`, `adjacent_vertices` or
/// `vertex` is a precondition violation.
pub trait GraphProtocol {
    /// Range over all vertices.
    type Vertices<'a>: Iterator<Item = VertexId> + Clone
    where
        Self: 'a;

    /// Range over all edges.
    type Edges<'a>: Iterator<Item = Edge> + Clone
    where
        Self: 'a;

    /// Range over the out-neighbors of one vertex.
    type AdjacentVertices<'a>: Iterator<Item = VertexId> + Clone
    where
        Self: 'a;

    /// Appends a vertex and returns its identifier.
    fn add_vertex(&mut self) -> VertexId;

    /// Inserts the edge `u -> v`, growing the vertex set as needed.
    ///
    /// The flag is `false` when the edge was already present.
    fn add_edge(&mut self, u: VertexId, v: VertexId) -> (Edge, bool);

    /// Looks up the edge `u -> v`.
    fn edge(&self, u: VertexId, v: VertexId) -> (Edge, bool);

    /// Out-neighbors of `u`, ascending.
    fn adjacent_vertices(&self, u: VertexId) -> Self::AdjacentVertices<'_>;

    /// All vertices, in creation order.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// All edges, in insertion order.
    fn edges(&self) -> Self::Edges<'_>;

    /// Number of vertices.
    fn num_vertices(&self) -> usize;

    /// Number of edges.
    fn num_edges(&self) -> usize;

    /// The vertex at position `index` in creation order.
    fn vertex(&self, index: usize) -> VertexId;

    /// Projects the tail of an edge descriptor.
    #[inline]
    fn source(edge: Edge) -> VertexId {
        edge.source()
    }

    /// Projects the head of an edge descriptor.
    #[inline]
    fn target(edge: Edge) -> VertexId {
        edge.target()
    }
}

/// Appends a vertex to `g`.
#[inline]
pub fn add_vertex<G: GraphProtocol>(g: &mut G) -> VertexId {
    g.add_vertex()
}

/// Inserts `u -> v` into `g`.
#[inline]
pub fn add_edge<G: GraphProtocol>(u: VertexId, v: VertexId, g: &mut G) -> (Edge, bool) {
    g.add_edge(u, v)
}

/// Looks up `u -> v` in `g`.
#[inline]
pub fn edge<G: GraphProtocol>(u: VertexId, v: VertexId, g: &G) -> (Edge, bool) {
    g.edge(u, v)
}

/// Out-neighbors of `u` in `g`.
#[inline]
pub fn adjacent_vertices<G: GraphProtocol>(u: VertexId, g: &G) -> G::AdjacentVertices<'_> {
    g.adjacent_vertices(u)
}

/// All vertices of `g`.
#[inline]
pub fn vertices<G: GraphProtocol>(g: &G) -> G::Vertices<'_> {
    g.vertices()
}

/// All edges of `g`.
#[inline]
pub fn edges<G: GraphProtocol>(g: &G) -> G::Edges<'_> {
    g.edges()
}

/// Vertex count of `g`.
#[inline]
pub fn num_vertices<G: GraphProtocol>(g: &G) -> usize {
    g.num_vertices()
}

/// Edge count of `g`.
#[inline]
pub fn num_edges<G: GraphProtocol>(g: &G) -> usize {
    g.num_edges()
}

/// Tail of `e`.
#[inline]
pub fn source(e: Edge) -> VertexId {
    e.source()
}

/// Head of `e`.
#[inline]
pub fn target(e: Edge) -> VertexId {
    e.target()
}

/// The vertex at position `index` of `g`.
#[inline]
pub fn vertex<G: GraphProtocol>(index: usize, g: &G) -> VertexId {
    g.vertex(index)
}
