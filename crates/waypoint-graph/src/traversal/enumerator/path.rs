//! The path buffer an enumerator exposes after each successful step.

use waypoint_core::{EdgeId, VertexId};

/// A path through the graph: `vertices[0]` is the start vertex and
/// `edges[i]` connects `vertices[i]` to `vertices[i + 1]`.
///
/// Whenever an enumerator is positioned on a path,
/// `vertices.len() == edges.len() + 1`. An exhausted enumerator exposes an
/// empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EnumeratedPath {
    pub(crate) vertices: Vec<VertexId>,
    pub(crate) edges: Vec<EdgeId>,
}

impl EnumeratedPath {
    /// A depth-0 path holding only `start`.
    #[must_use]
    pub fn new(start: VertexId) -> Self {
        Self { vertices: vec![start], edges: Vec::new() }
    }

    /// Build a path from its parts.
    ///
    /// Returns `None` unless there is exactly one more vertex than edges.
    #[must_use]
    pub fn from_parts(vertices: Vec<VertexId>, edges: Vec<EdgeId>) -> Option<Self> {
        (vertices.len() == edges.len() + 1).then_some(Self { vertices, edges })
    }

    /// The vertices along the path.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// The edges along the path.
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Number of edges on the path.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.edges.len()
    }

    /// True once the enumerator holding this path is exhausted.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn start_vertex(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    #[must_use]
    pub fn last_vertex(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    /// The final edge, or `None` for a depth-0 or empty path.
    #[must_use]
    pub fn last_edge(&self) -> Option<EdgeId> {
        self.edges.last().copied()
    }

    /// True if `prefix` is this path or an ancestor of it.
    #[must_use]
    pub fn starts_with(&self, prefix: &EnumeratedPath) -> bool {
        self.vertices.starts_with(&prefix.vertices) && self.edges.starts_with(&prefix.edges)
    }

    /// Drop the final edge and vertex. Depth-0 paths are left unchanged.
    pub(crate) fn pop_step(&mut self) {
        if self.edges.pop().is_some() {
            self.vertices.pop();
        }
    }

    pub(crate) fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }
}
