//! In-memory graph storage with adjacency lists.

use std::collections::HashMap;

use waypoint_core::{Edge, EdgeId, EdgeType, Vertex, VertexId};

use super::{GraphError, GraphResult, IdGenerator};

/// An in-memory property graph.
///
/// Vertices and edges are kept in hash maps keyed by ID. Each vertex owns an
/// outgoing and an incoming adjacency list; both preserve edge insertion
/// order, which is the order edge cursors hand edges to a traversal.
///
/// # Example
///
/// ```
/// use waypoint_core::Vertex;
/// use waypoint_graph::store::MemoryGraph;
///
/// let mut graph = MemoryGraph::new();
/// let alice = graph.create_vertex(|id| Vertex::new(id).with_label("Person"))?;
/// let bob = graph.create_vertex(|id| Vertex::new(id).with_label("Person"))?;
/// let knows = graph.create_edge(alice, bob, "KNOWS")?;
///
/// assert_eq!(graph.outgoing_edge_ids(alice), &[knows]);
/// assert_eq!(graph.incoming_edge_ids(bob), &[knows]);
/// # Ok::<(), waypoint_graph::store::GraphError>(())
/// ```
#[derive(Debug, Default)]
pub struct MemoryGraph {
    vertices: HashMap<VertexId, Vertex>,
    edges: HashMap<EdgeId, Edge>,
    outgoing: HashMap<VertexId, Vec<EdgeId>>,
    incoming: HashMap<VertexId, Vec<EdgeId>>,
    ids: IdGenerator,
}

impl MemoryGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex with a caller-chosen ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexAlreadyExists`] if the ID is taken.
    pub fn add_vertex(&mut self, vertex: Vertex) -> GraphResult<VertexId> {
        let id = vertex.id;
        if self.vertices.contains_key(&id) {
            return Err(GraphError::VertexAlreadyExists(id));
        }
        self.vertices.insert(id, vertex);
        Ok(id)
    }

    /// Insert a vertex built around a freshly generated ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexAlreadyExists`] if the generated ID collides
    /// with a vertex inserted through [`add_vertex`](Self::add_vertex).
    pub fn create_vertex<F>(&mut self, build: F) -> GraphResult<VertexId>
    where
        F: FnOnce(VertexId) -> Vertex,
    {
        let id = self.ids.next_vertex_id();
        let mut vertex = build(id);
        vertex.id = id;
        self.add_vertex(vertex)
    }

    /// Insert an edge with a caller-chosen ID.
    ///
    /// Both endpoints must already exist.
    ///
    /// # Errors
    ///
    /// - [`GraphError::EdgeAlreadyExists`] if the edge ID is taken
    /// - [`GraphError::InvalidVertexReference`] if an endpoint is missing
    pub fn add_edge(&mut self, edge: Edge) -> GraphResult<EdgeId> {
        let id = edge.id;
        if self.edges.contains_key(&id) {
            return Err(GraphError::EdgeAlreadyExists(id));
        }
        for endpoint in [edge.source, edge.target] {
            if !self.vertices.contains_key(&endpoint) {
                return Err(GraphError::InvalidVertexReference(endpoint));
            }
        }

        self.outgoing.entry(edge.source).or_default().push(id);
        self.incoming.entry(edge.target).or_default().push(id);
        self.edges.insert(id, edge);
        Ok(id)
    }

    /// Insert an edge with a freshly generated ID and no properties.
    ///
    /// # Errors
    ///
    /// Same as [`add_edge`](Self::add_edge).
    pub fn create_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        edge_type: impl Into<EdgeType>,
    ) -> GraphResult<EdgeId> {
        let id = self.ids.next_edge_id();
        self.add_edge(Edge::new(id, source, target, edge_type))
    }

    /// Look up a vertex by ID.
    #[inline]
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Look up an edge by ID.
    #[inline]
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Outgoing edge IDs of a vertex, in insertion order.
    #[must_use]
    pub fn outgoing_edge_ids(&self, vertex: VertexId) -> &[EdgeId] {
        self.outgoing.get(&vertex).map(Vec::as_slice).unwrap_or_default()
    }

    /// Incoming edge IDs of a vertex, in insertion order.
    #[must_use]
    pub fn incoming_edge_ids(&self, vertex: VertexId) -> &[EdgeId] {
        self.incoming.get(&vertex).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of vertices in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
