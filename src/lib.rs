//! # `sparse-digraph` - Directed Graph Container
//!
//! A minimal in-memory directed graph exposing a generic, iterator-based access
//! protocol: vertices, edges, and adjacency. Generic algorithms are written once
//! against the protocol and run on any conforming graph type.
//!
//! ## Guarantees
//!
//! ### Identity
//! - **Dense vertex ids**: vertices are numbered `0..n` in creation order. An id
//!   never changes and is never reused, because nothing is ever removed.
//! - **Edge identity is the ordered pair**: inserting `(u, v)` twice records one
//!   edge, and `(u, v)` and `(v, u)` are distinct.
//!
//! ### Ordering
//! - `vertices()` yields ids in creation order.
//! - `edges()` yields edges in insertion order.
//! - `adjacent_vertices(u)` yields targets in ascending order, whatever order
//!   they were inserted in.
//!
//! ### Growth
//! Inserting an edge whose endpoint does not exist first appends vertices up to
//! the larger endpoint, so the dense-id invariant always holds.
//!
//! ### Misuse
//! Querying a vertex that does not exist violates a precondition. Debug builds
//! report it with a panic that names the vertex. The structural invariants can
//! be checked at any time with [`DirectedGraph::validate_invariants`].
//!
//! ## Architecture
//!
//! 1. **Protocol** ([`GraphProtocol`], [`Edge`], [`VertexId`]):
//!    - Capability trait with generic associated range types
//!    - Ranges are `Clone`, so they can be restarted
//!    - Free functions in [`graph::protocol`] offer the same operations in
//!      call-with-graph form
//!
//! 2. **Container** ([`DirectedGraph`]):
//!    - Vertex sequence, per-vertex `BTreeSet` of targets, insertion-ordered edge list
//!    - Serde interchange through [`EdgeList`]
//!
//! 3. **Algorithms** ([`topological_sort`], [`Dfs`], [`Bfs`], [`is_reachable`]):
//!    - Generic over the protocol
//!
//! ## Example
//!
//! ```rust
//! use sparse_digraph::{topological_sort, DirectedGraph};
//!
//! let mut g = DirectedGraph::new();
//! let a = g.add_vertex();
//!
//! // Endpoint 5 does not exist yet: the graph grows to six vertices.
//! let (e, inserted) = g.add_edge(a, 5);
//! assert!(inserted);
//! assert_eq!(g.num_vertices(), 6);
//! assert_eq!((e.source(), e.target()), (0, 5));
//!
//! // Re-inserting is a no-op that reports `false`.
//! assert_eq!(g.add_edge(a, 5), (e, false));
//! assert_eq!(g.num_edges(), 1);
//!
//! g.add_edge(a, 2);
//! assert_eq!(g.adjacent_vertices(a).collect::<Vec<_>>(), vec![2, 5]);
//!
//! let order = topological_sort(&g).unwrap();
//! let pos = |v: usize| order.iter().position(|&x| x == v).unwrap();
//! assert!(pos(a) < pos(2) && pos(a) < pos(5));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{
    is_reachable, topological_sort, AdjacentVertices, Bfs, DirectedGraph, Dfs, Edge, EdgeList,
    Edges, GraphProtocol, VertexId, Vertices,
};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // An edge descriptor is exactly two vertex ids.
    assert!(mem::size_of::<Edge>() == 2 * mem::size_of::<VertexId>());
};
