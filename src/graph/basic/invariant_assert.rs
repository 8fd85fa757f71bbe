//! Debug-only invariant assertion helpers.
//!
//! `DirectedGraph` uses these to keep its structural invariants explicit while
//! release builds stay unaffected.

/// Debug-asserts a structural invariant and hands the condition back, so callers
/// can fold the result into a summary.
#[inline(always)]
pub(crate) fn invariant_assert(condition: bool, message: &str) -> bool {
    debug_assert!(condition, "Graph invariant violated: {message}");
    condition
}

/// Debug-asserts that `vertex` names an existing vertex.
#[inline(always)]
pub(crate) fn vertex_in_range(vertex: usize, vertex_count: usize) {
    debug_assert!(
        vertex < vertex_count,
        "vertex {vertex} out of bounds for a graph with {vertex_count} vertices"
    );
}
