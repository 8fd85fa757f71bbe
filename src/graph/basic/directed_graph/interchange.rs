//! Edge-list form of a [`DirectedGraph`].
//!
//! This is the shape the graph takes under serde: the vertex count plus the
//! edges in insertion order. Adjacency sets are derived data and are rebuilt on
//! the way back in.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::DirectedGraph;
use crate::error::{GraphError, Result};
use crate::graph::protocol::Edge;

/// A vertex count and an insertion-ordered edge list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeList {
    /// Number of vertices; identifiers are `0..vertex_count`.
    pub vertex_count: usize,
    /// Edges in insertion order.
    pub edges: Vec<Edge>,
}

impl DirectedGraph {
    /// Snapshots the graph as an edge list.
    pub fn to_edge_list(&self) -> EdgeList {
        EdgeList {
            vertex_count: self.num_vertices(),
            edges: self.edge_list.clone(),
        }
    }

    /// Rebuilds a graph from an edge list.
    ///
    /// Unlike [`DirectedGraph::add_edge`], this does not grow the vertex set:
    /// the list must be self-consistent.
    ///
    /// # Errors
    /// - [`GraphError::VertexOutOfRange`] if an endpoint is `>= vertex_count`
    /// - [`GraphError::DuplicateEdge`] if an ordered pair appears twice
    pub fn try_from_edge_list(list: &EdgeList) -> Result<Self> {
        let mut graph = Self::with_capacity(list.vertex_count, list.edges.len());
        for _ in 0..list.vertex_count {
            graph.add_vertex();
        }

        let mut seen = BTreeSet::new();
        for &edge in &list.edges {
            for vertex in [edge.source(), edge.target()] {
                if vertex >= list.vertex_count {
                    return Err(GraphError::VertexOutOfRange {
                        vertex,
                        vertex_count: list.vertex_count,
                    });
                }
            }
            if !seen.insert(edge) {
                return Err(GraphError::DuplicateEdge { edge });
            }
            graph.add_edge(edge.source(), edge.target());
        }

        debug_assert!(graph.validate_invariants());
        Ok(graph)
    }
}

impl From<DirectedGraph> for EdgeList {
    fn from(graph: DirectedGraph) -> Self {
        Self {
            vertex_count: graph.vertices.len(),
            edges: graph.edge_list,
        }
    }
}

impl TryFrom<EdgeList> for DirectedGraph {
    type Error = GraphError;

    fn try_from(list: EdgeList) -> Result<Self> {
        Self::try_from_edge_list(&list)
    }
}
