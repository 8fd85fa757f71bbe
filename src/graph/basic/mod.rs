//! Basic graph implementations.
//!
//! This module contains the growable, set-backed directed graph that
//! implements the access protocol.

pub mod directed_graph;
mod invariant_assert;

pub use directed_graph::{AdjacentVertices, DirectedGraph, EdgeList, Edges, Vertices};
