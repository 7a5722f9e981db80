//! Graph traversal and path enumeration.
//!
//! A traversal walks the graph one edge at a time from a start vertex and
//! yields every path whose length lies within the configured depth bounds and
//! which satisfies the configured uniqueness rules.
//!
//! # Overview
//!
//! - [`TraverserOptions`] - Depth bounds, uniqueness levels, and order
//! - [`Traverser`] / [`EdgeCursor`] - The data source an enumerator pulls from
//! - [`GraphTraverser`] - A [`Traverser`] over a [`MemoryGraph`](crate::store::MemoryGraph)
//! - [`PathEnumerator`] - The `next()` / `prune()` contract
//! - [`DepthFirstEnumerator`] / [`BreadthFirstEnumerator`] - The two strategies
//! - [`Enumerator`] - Picks a strategy from the options
//! - [`PathIterator`] - Standard iterator over enumerated paths
//!
//! # Direction
//!
//! - [`Direction::Outgoing`] - Follow edges from source to target
//! - [`Direction::Incoming`] - Follow edges from target to source
//! - [`Direction::Both`] - Follow edges in both directions
//!
//! # Example
//!
//! ```
//! use waypoint_core::Vertex;
//! use waypoint_graph::store::MemoryGraph;
//! use waypoint_graph::traversal::{
//!     Direction, Enumerator, GraphTraverser, PathEnumerator, TraverserOptions,
//! };
//!
//! let mut graph = MemoryGraph::new();
//! let a = graph.create_vertex(Vertex::new)?;
//! let b = graph.create_vertex(Vertex::new)?;
//! let c = graph.create_vertex(Vertex::new)?;
//! graph.create_edge(a, b, "NEXT")?;
//! graph.create_edge(b, c, "NEXT")?;
//!
//! let mut traverser = GraphTraverser::new(&graph).with_direction(Direction::Outgoing);
//! let options = TraverserOptions::new().with_depth_range(1, 2);
//! let mut paths = Enumerator::new(a, options, &mut traverser)?;
//!
//! let mut found = Vec::new();
//! while paths.next()? {
//!     found.push(paths.path().vertices().to_vec());
//! }
//! assert_eq!(found, vec![vec![a, b], vec![a, b, c]]);
//! # Ok::<(), waypoint_graph::store::GraphError>(())
//! ```

mod enumerator;
mod graph_traverser;
mod options;
mod traverser;

pub use enumerator::{
    BreadthFirstEnumerator, DepthFirstEnumerator, EnumeratedPath, Enumerator, PathEnumerator,
    PathIterator,
};
pub use graph_traverser::{AdjacencyCursor, GraphTraverser};
pub use options::{TraversalOrder, TraverserOptions, UniquenessLevel};
pub use traverser::{EdgeCursor, TraversalStats, Traverser};

use waypoint_core::{EdgeType, Label, Vertex, VertexId};

/// Direction for graph traversal.
///
/// Specifies which edges to follow when traversing from a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Follow outgoing edges (source -> target).
    #[default]
    Outgoing,

    /// Follow incoming edges (target <- source).
    Incoming,

    /// Follow edges in both directions.
    Both,
}

impl Direction {
    /// Returns true if this direction includes outgoing edges.
    #[inline]
    pub const fn includes_outgoing(self) -> bool {
        matches!(self, Self::Outgoing | Self::Both)
    }

    /// Returns true if this direction includes incoming edges.
    #[inline]
    pub const fn includes_incoming(self) -> bool {
        matches!(self, Self::Incoming | Self::Both)
    }
}

/// Declarative edge and vertex conditions for a traversal.
///
/// An edge that fails the edge conditions, or leads to a vertex that fails the
/// vertex conditions, is skipped as if it did not exist.
#[derive(Debug, Clone, Default)]
pub struct TraversalFilter {
    /// Only traverse edges of these types.
    pub edge_types: Option<Vec<EdgeType>>,
    /// Never step onto these vertices.
    pub exclude_vertices: Option<Vec<VertexId>>,
    /// Only step onto vertices carrying at least one of these labels.
    pub vertex_labels: Option<Vec<Label>>,
}

impl TraversalFilter {
    /// Create a new empty filter.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter to only traverse edges of the specified type.
    pub fn with_edge_type(mut self, edge_type: impl Into<EdgeType>) -> Self {
        self.edge_types.get_or_insert_with(Vec::new).push(edge_type.into());
        self
    }

    /// Filter to only traverse edges of the specified types.
    pub fn with_edge_types(mut self, edge_types: impl IntoIterator<Item = EdgeType>) -> Self {
        self.edge_types.get_or_insert_with(Vec::new).extend(edge_types);
        self
    }

    /// Exclude the specified vertex from traversal.
    pub fn exclude_vertex(mut self, vertex: VertexId) -> Self {
        self.exclude_vertices.get_or_insert_with(Vec::new).push(vertex);
        self
    }

    /// Exclude the specified vertices from traversal.
    pub fn exclude_vertices(mut self, vertices: impl IntoIterator<Item = VertexId>) -> Self {
        self.exclude_vertices.get_or_insert_with(Vec::new).extend(vertices);
        self
    }

    /// Only step onto vertices with the given label (or any other added label).
    pub fn with_vertex_label(mut self, label: impl Into<Label>) -> Self {
        self.vertex_labels.get_or_insert_with(Vec::new).push(label.into());
        self
    }

    /// Check if an edge type should be included.
    #[inline]
    pub fn should_include_edge_type(&self, edge_type: &EdgeType) -> bool {
        match &self.edge_types {
            Some(types) => types.contains(edge_type),
            None => true,
        }
    }

    /// Check if a vertex may be stepped onto.
    pub fn should_include_vertex(&self, vertex: &Vertex) -> bool {
        if let Some(excluded) = &self.exclude_vertices {
            if excluded.contains(&vertex.id) {
                return false;
            }
        }
        match &self.vertex_labels {
            Some(labels) => labels.iter().any(|l| vertex.has_label(l.as_str())),
            None => true,
        }
    }
}
