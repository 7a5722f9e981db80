//! Edge types for the graph.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{EdgeId, Value, VertexId};

/// The type of an edge, describing the relationship.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeType(String);

impl EdgeType {
    /// Create a new edge type.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the edge type name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EdgeType {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EdgeType {
    #[inline]
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A directed edge between two vertices.
///
/// Edges connect vertices and have:
/// - A unique identifier
/// - A source and target vertex
/// - A type describing the relationship
/// - Properties as key-value pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge.
    pub id: EdgeId,
    /// The source vertex ID.
    pub source: VertexId,
    /// The target vertex ID.
    pub target: VertexId,
    /// The type of this edge.
    pub edge_type: EdgeType,
    /// Properties stored on this edge.
    pub properties: HashMap<String, Value>,
}

impl Edge {
    /// Create a new edge between two vertices.
    #[must_use]
    pub fn new(
        id: EdgeId,
        source: VertexId,
        target: VertexId,
        edge_type: impl Into<EdgeType>,
    ) -> Self {
        Self { id, source, target, edge_type: edge_type.into(), properties: HashMap::new() }
    }

    /// Add a property to this edge.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Get a property value by key.
    #[inline]
    #[must_use]
    pub fn get_property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Returns the endpoint opposite to `from`.
    ///
    /// For a self-loop both endpoints are the same vertex. Returns `None` if
    /// `from` is not an endpoint of this edge.
    #[must_use]
    pub fn other_end(&self, from: VertexId) -> Option<VertexId> {
        if from == self.source {
            Some(self.target)
        } else if from == self.target {
            Some(self.source)
        } else {
            None
        }
    }
}
