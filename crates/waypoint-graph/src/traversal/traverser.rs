//! The data source a path enumerator pulls edges and vertices from.

use std::mem;

use waypoint_core::{EdgeId, Value, VertexId};

use crate::store::GraphResult;

/// A one-shot sequence of edges leaving a single vertex.
///
/// Each item pairs the edge with a cursor index identifying which underlying
/// edge source produced it (for example `0` for outgoing and `1` for incoming
/// adjacency). The index is handed back to the [`Traverser`] condition checks.
pub trait EdgeCursor {
    /// Read the next edge, or `None` once the cursor is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying edge source fails.
    fn next(&mut self) -> GraphResult<Option<(EdgeId, usize)>>;

    /// Drain every remaining edge in cursor order.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by [`next`](Self::next).
    fn read_all(&mut self) -> GraphResult<Vec<(EdgeId, usize)>> {
        let mut edges = Vec::new();
        while let Some(edge) = self.next()? {
            edges.push(edge);
        }
        Ok(edges)
    }
}

/// Counters a traverser accumulates while a traversal runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Number of edge and vertex documents read.
    pub read_documents: u64,
    /// Number of candidate steps rejected by conditions or uniqueness.
    pub filtered_paths: u64,
}

impl TraversalStats {
    /// Return the read counter and reset it to zero.
    pub fn get_and_reset_read_documents(&mut self) -> u64 {
        mem::take(&mut self.read_documents)
    }

    /// Return the filter counter and reset it to zero.
    pub fn get_and_reset_filtered_paths(&mut self) -> u64 {
        mem::take(&mut self.filtered_paths)
    }
}

/// The collaborator that supplies graph access to a path enumerator.
///
/// `depth` arguments are the number of edges on the path before the step
/// being evaluated, so edges leaving the start vertex are checked at depth 0.
pub trait Traverser {
    /// The cursor type produced for each expanded vertex.
    type Cursor: EdgeCursor;

    /// Whether `vertex` exists in the underlying graph.
    ///
    /// Enumerators ask this once for the start vertex; a missing start vertex
    /// makes the traversal empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex source cannot be read.
    fn has_vertex(&self, vertex: VertexId) -> GraphResult<bool>;

    /// Open a cursor over the edges leaving `vertex`.
    ///
    /// Returns `None` when the vertex has nothing to expand; enumerators
    /// treat that exactly like an immediately exhausted cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge source cannot be opened.
    fn next_cursor(&mut self, vertex: VertexId, depth: usize) -> GraphResult<Option<Self::Cursor>>;

    /// Check the edge conditions for `edge` reached from `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge cannot be read.
    fn edge_matches_conditions(
        &mut self,
        edge: EdgeId,
        source: VertexId,
        depth: usize,
        cursor_idx: usize,
    ) -> GraphResult<bool>;

    /// Resolve the far end of `edge` from the last entry of `vertices`.
    ///
    /// On success the vertex is appended to `vertices` and `true` is
    /// returned. If the vertex fails the vertex conditions nothing is
    /// appended and `false` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or vertex cannot be read.
    fn get_vertex(
        &mut self,
        edge: EdgeId,
        vertices: &mut Vec<VertexId>,
        depth: usize,
        cursor_idx: usize,
    ) -> GraphResult<bool>;

    /// Resolve the far end of `edge` from `source` without a path buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge or vertex cannot be read.
    fn get_single_vertex(
        &mut self,
        edge: EdgeId,
        source: VertexId,
        depth: usize,
        cursor_idx: usize,
    ) -> GraphResult<Option<VertexId>>;

    /// Materialize a vertex for output.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex no longer exists.
    fn vertex_to_value(&self, vertex: VertexId) -> GraphResult<Value>;

    /// Materialize an edge for output.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge no longer exists.
    fn edge_to_value(&self, edge: EdgeId) -> GraphResult<Value>;

    /// Current counters.
    fn stats(&self) -> &TraversalStats;

    /// Mutable access to the counters.
    fn stats_mut(&mut self) -> &mut TraversalStats;
}
