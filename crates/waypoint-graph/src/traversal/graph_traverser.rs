//! A [`Traverser`] backed by a [`MemoryGraph`].

use std::fmt;

use tracing::trace;
use waypoint_core::{Edge, EdgeId, Value, Vertex, VertexId};

use super::{Direction, EdgeCursor, TraversalFilter, TraversalStats, Traverser};
use crate::store::{GraphError, GraphResult, MemoryGraph};

/// Cursor index for edges read from the outgoing adjacency list.
const OUTGOING_CURSOR: usize = 0;
/// Cursor index for edges read from the incoming adjacency list.
const INCOMING_CURSOR: usize = 1;

type EdgeCondition<'g> = Box<dyn Fn(&Edge, usize) -> bool + 'g>;
type VertexCondition<'g> = Box<dyn Fn(&Vertex, usize) -> bool + 'g>;

/// Edge cursor over a vertex's adjacency lists.
///
/// Outgoing edges come first, then incoming edges, each in insertion order.
/// With [`Direction::Both`] a self-loop is therefore produced twice.
#[derive(Debug, Clone)]
pub struct AdjacencyCursor<'g> {
    outgoing: &'g [EdgeId],
    incoming: &'g [EdgeId],
    pos: usize,
}

impl<'g> AdjacencyCursor<'g> {
    fn new(outgoing: &'g [EdgeId], incoming: &'g [EdgeId]) -> Self {
        Self { outgoing, incoming, pos: 0 }
    }
}

impl EdgeCursor for AdjacencyCursor<'_> {
    fn next(&mut self) -> GraphResult<Option<(EdgeId, usize)>> {
        let item = if let Some(&edge) = self.outgoing.get(self.pos) {
            Some((edge, OUTGOING_CURSOR))
        } else {
            self.incoming.get(self.pos - self.outgoing.len()).map(|&edge| (edge, INCOMING_CURSOR))
        };
        if item.is_some() {
            self.pos += 1;
        }
        Ok(item)
    }
}

/// Traverses a [`MemoryGraph`] in a fixed [`Direction`].
///
/// Edge and vertex conditions come from a declarative [`TraversalFilter`]
/// plus optional closures. Edge closures receive the depth of the edge (the
/// number of edges before it on the path); vertex closures receive the depth
/// at which the vertex would sit.
pub struct GraphTraverser<'g> {
    graph: &'g MemoryGraph,
    direction: Direction,
    filter: TraversalFilter,
    edge_condition: Option<EdgeCondition<'g>>,
    vertex_condition: Option<VertexCondition<'g>>,
    stats: TraversalStats,
}

impl<'g> GraphTraverser<'g> {
    /// Create a traverser following outgoing edges with no conditions.
    pub fn new(graph: &'g MemoryGraph) -> Self {
        Self {
            graph,
            direction: Direction::Outgoing,
            filter: TraversalFilter::default(),
            edge_condition: None,
            vertex_condition: None,
            stats: TraversalStats::default(),
        }
    }

    /// Set the direction of traversal.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the declarative edge and vertex filter.
    #[must_use]
    pub fn with_filter(mut self, filter: TraversalFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Only traverse edges accepted by `condition`.
    #[must_use]
    pub fn with_edge_condition<F>(mut self, condition: F) -> Self
    where
        F: Fn(&Edge, usize) -> bool + 'g,
    {
        self.edge_condition = Some(Box::new(condition));
        self
    }

    /// Only step onto vertices accepted by `condition`.
    #[must_use]
    pub fn with_vertex_condition<F>(mut self, condition: F) -> Self
    where
        F: Fn(&Vertex, usize) -> bool + 'g,
    {
        self.vertex_condition = Some(Box::new(condition));
        self
    }

    /// The direction this traverser follows.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    fn read_edge(&mut self, edge: EdgeId) -> GraphResult<&'g Edge> {
        let graph = self.graph;
        let edge = graph.edge(edge).ok_or(GraphError::EdgeNotFound(edge))?;
        self.stats.read_documents += 1;
        Ok(edge)
    }

    fn resolve_vertex(
        &mut self,
        edge: EdgeId,
        source: VertexId,
        depth: usize,
    ) -> GraphResult<Option<VertexId>> {
        let graph = self.graph;
        let edge_doc = graph.edge(edge).ok_or(GraphError::EdgeNotFound(edge))?;
        let target = edge_doc.other_end(source).ok_or_else(|| {
            GraphError::Internal(format!("edge {edge} is not incident to {source}"))
        })?;
        let vertex = graph.vertex(target).ok_or(GraphError::VertexNotFound(target))?;
        self.stats.read_documents += 1;

        let accepted = self.filter.should_include_vertex(vertex)
            && self.vertex_condition.as_ref().map_or(true, |cond| cond(vertex, depth + 1));
        if !accepted {
            trace!(%edge, vertex = %target, depth, "vertex rejected by conditions");
            self.stats.filtered_paths += 1;
            return Ok(None);
        }
        Ok(Some(target))
    }
}

impl fmt::Debug for GraphTraverser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphTraverser")
            .field("direction", &self.direction)
            .field("filter", &self.filter)
            .field("has_edge_condition", &self.edge_condition.is_some())
            .field("has_vertex_condition", &self.vertex_condition.is_some())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<'g> Traverser for GraphTraverser<'g> {
    type Cursor = AdjacencyCursor<'g>;

    fn has_vertex(&self, vertex: VertexId) -> GraphResult<bool> {
        Ok(self.graph.vertex(vertex).is_some())
    }

    fn next_cursor(
        &mut self,
        vertex: VertexId,
        _depth: usize,
    ) -> GraphResult<Option<Self::Cursor>> {
        if self.graph.vertex(vertex).is_none() {
            return Ok(None);
        }
        let outgoing: &'g [EdgeId] = if self.direction.includes_outgoing() {
            self.graph.outgoing_edge_ids(vertex)
        } else {
            &[]
        };
        let incoming: &'g [EdgeId] = if self.direction.includes_incoming() {
            self.graph.incoming_edge_ids(vertex)
        } else {
            &[]
        };
        Ok(Some(AdjacencyCursor::new(outgoing, incoming)))
    }

    fn edge_matches_conditions(
        &mut self,
        edge: EdgeId,
        _source: VertexId,
        depth: usize,
        _cursor_idx: usize,
    ) -> GraphResult<bool> {
        let doc = self.read_edge(edge)?;
        let accepted = self.filter.should_include_edge_type(&doc.edge_type)
            && self.edge_condition.as_ref().map_or(true, |cond| cond(doc, depth));
        if !accepted {
            trace!(%edge, depth, "edge rejected by conditions");
            self.stats.filtered_paths += 1;
        }
        Ok(accepted)
    }

    fn get_vertex(
        &mut self,
        edge: EdgeId,
        vertices: &mut Vec<VertexId>,
        depth: usize,
        _cursor_idx: usize,
    ) -> GraphResult<bool> {
        let source = vertices
            .last()
            .copied()
            .ok_or_else(|| GraphError::Internal("path has no vertices".to_owned()))?;
        match self.resolve_vertex(edge, source, depth)? {
            Some(vertex) => {
                vertices.push(vertex);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn get_single_vertex(
        &mut self,
        edge: EdgeId,
        source: VertexId,
        depth: usize,
        _cursor_idx: usize,
    ) -> GraphResult<Option<VertexId>> {
        self.resolve_vertex(edge, source, depth)
    }

    fn vertex_to_value(&self, vertex: VertexId) -> GraphResult<Value> {
        self.graph.vertex(vertex).map(Value::from).ok_or(GraphError::VertexNotFound(vertex))
    }

    fn edge_to_value(&self, edge: EdgeId) -> GraphResult<Value> {
        self.graph.edge(edge).map(Value::from).ok_or(GraphError::EdgeNotFound(edge))
    }

    fn stats(&self) -> &TraversalStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut TraversalStats {
        &mut self.stats
    }
}
