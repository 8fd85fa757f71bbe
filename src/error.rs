//! Error type for the recoverable failures of the crate.
//!
//! Protocol misuse (querying a vertex that does not exist) is a precondition
//! violation and is reported through debug assertions, not through this type.
//! `GraphError` covers the outcomes a caller is expected to handle: a cycle found
//! by a topological sort, and malformed input when rebuilding a graph from an
//! edge list.

use thiserror::Error;

use crate::graph::{Edge, VertexId};

/// Failures reported by graph algorithms and by edge-list interchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The graph contains a cycle; `edge` is a back edge closing it.
    #[error("graph is not a DAG: edge {}->{} closes a cycle", .edge.source(), .edge.target())]
    NotADag {
        /// A back edge found during the depth-first walk.
        edge: Edge,
    },

    /// An edge list names a vertex outside `0..vertex_count`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex identifier.
        vertex: VertexId,
        /// The declared vertex count.
        vertex_count: usize,
    },

    /// An edge list contains the same ordered pair twice.
    #[error("edge {}->{} appears more than once", .edge.source(), .edge.target())]
    DuplicateEdge {
        /// The repeated edge.
        edge: Edge,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
