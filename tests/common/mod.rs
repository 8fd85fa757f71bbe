//! Reference implementation of `GraphProtocol` over petgraph.
//!
//! Tests run the same call sequences against this adapter and against
//! `DirectedGraph`; matching return values is the compatibility bar.

#![allow(dead_code)]

use std::ops::Range;

use petgraph::graph::{DiGraph, NodeIndex};
use sparse_digraph::{Edge, GraphProtocol, VertexId};

/// A `petgraph::graph::DiGraph` behaving like a set-backed adjacency list:
/// parallel edges are refused and neighbours are reported in ascending order.
#[derive(Debug, Default)]
pub struct PetgraphReference {
    inner: DiGraph<(), ()>,
}

impl PetgraphReference {
    pub fn inner(&self) -> &DiGraph<(), ()> {
        &self.inner
    }
}

impl GraphProtocol for PetgraphReference {
    type Vertices<'a> = Range<VertexId>;
    type Edges<'a> = std::vec::IntoIter<Edge>;
    type AdjacentVertices<'a> = std::vec::IntoIter<VertexId>;

    fn add_vertex(&mut self) -> VertexId {
        self.inner.add_node(()).index()
    }

    fn add_edge(&mut self, u: VertexId, v: VertexId) -> (Edge, bool) {
        while self.inner.node_count() <= u.max(v) {
            self.inner.add_node(());
        }
        let edge = Edge::new(u, v);
        let (a, b) = (NodeIndex::new(u), NodeIndex::new(v));
        if self.inner.find_edge(a, b).is_some() {
            return (edge, false);
        }
        self.inner.add_edge(a, b, ());
        (edge, true)
    }

    fn edge(&self, u: VertexId, v: VertexId) -> (Edge, bool) {
        let found = v < self.inner.node_count()
            && self.inner.find_edge(NodeIndex::new(u), NodeIndex::new(v)).is_some();
        (Edge::new(u, v), found)
    }

    fn adjacent_vertices(&self, u: VertexId) -> Self::AdjacentVertices<'_> {
        let mut targets: Vec<VertexId> = self
            .inner
            .neighbors(NodeIndex::new(u))
            .map(NodeIndex::index)
            .collect();
        targets.sort_unstable();
        targets.into_iter()
    }

    fn vertices(&self) -> Self::Vertices<'_> {
        0..self.inner.node_count()
    }

    fn edges(&self) -> Self::Edges<'_> {
        self.inner
            .raw_edges()
            .iter()
            .map(|e| Edge::new(e.source().index(), e.target().index()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn num_vertices(&self) -> usize {
        self.inner.node_count()
    }

    fn num_edges(&self) -> usize {
        self.inner.edge_count()
    }

    fn vertex(&self, index: usize) -> VertexId {
        assert!(index < self.inner.node_count(), "vertex {index} out of bounds");
        index
    }
}
