//! Directed graph storage, the access protocol, and algorithms written against it.
//!
//! - `protocol`: vertex/edge descriptors and the `GraphProtocol` capability trait
//! - `basic`: the `DirectedGraph` container
//! - `algorithms`: topological sort and traversals generic over the protocol

pub mod algorithms;
pub mod basic;
pub mod protocol;

pub use algorithms::{is_reachable, topological_sort, Bfs, Dfs};
pub use basic::{AdjacentVertices, DirectedGraph, EdgeList, Edges, Vertices};
pub use protocol::{Edge, GraphProtocol, VertexId};
