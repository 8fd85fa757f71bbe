use core::iter::FusedIterator;
use core::slice;
use std::collections::{btree_set, BTreeSet};

use crate::graph::protocol::{Edge, VertexId};

/// Range over the vertices of a [`super::DirectedGraph`], in creation order.
#[derive(Debug, Clone)]
pub struct Vertices<'a> {
    inner: slice::Iter<'a, VertexId>,
}

impl<'a> Vertices<'a> {
    #[inline]
    pub(super) fn new(vertices: &'a [VertexId]) -> Self {
        Self { inner: vertices.iter() }
    }
}

impl Iterator for Vertices<'_> {
    type Item = VertexId;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n).copied()
    }
}

impl DoubleEndedIterator for Vertices<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Vertices<'_> {}
impl FusedIterator for Vertices<'_> {}

/// Range over the edges of a [`super::DirectedGraph`], in insertion order.
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    inner: slice::Iter<'a, Edge>,
}

impl<'a> Edges<'a> {
    #[inline]
    pub(super) fn new(edges: &'a [Edge]) -> Self {
        Self { inner: edges.iter() }
    }
}

impl Iterator for Edges<'_> {
    type Item = Edge;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n).copied()
    }
}

impl DoubleEndedIterator for Edges<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Edges<'_> {}
impl FusedIterator for Edges<'_> {}

/// Range over the out-neighbors of one vertex, in ascending order.
#[derive(Debug, Clone)]
pub struct AdjacentVertices<'a> {
    inner: btree_set::Iter<'a, VertexId>,
}

impl<'a> AdjacentVertices<'a> {
    #[inline]
    pub(super) fn new(targets: &'a BTreeSet<VertexId>) -> Self {
        Self { inner: targets.iter() }
    }
}

impl Iterator for AdjacentVertices<'_> {
    type Item = VertexId;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for AdjacentVertices<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for AdjacentVertices<'_> {}
impl FusedIterator for AdjacentVertices<'_> {}
