//! Vertex types for the graph.
//!
//! # Example
//!
//! ```
//! use waypoint_core::types::{Vertex, VertexId};
//!
//! let vertex = Vertex::new(VertexId::new(1))
//!     .with_label("Person")
//!     .with_label("Employee")
//!     .with_property("name", "Alice")
//!     .with_property("age", 30i64);
//!
//! assert!(vertex.has_label("Employee"));
//! assert_eq!(vertex.get_property("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Value, VertexId};

/// A label that categorizes a vertex.
///
/// A vertex can carry several labels, e.g. "Person" and "Employee".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label(String);

impl Label {
    /// Create a new label.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the label name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Label {
    #[inline]
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A vertex (document) in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier for this vertex.
    pub id: VertexId,
    /// Labels that categorize this vertex.
    pub labels: Vec<Label>,
    /// Properties stored on this vertex.
    pub properties: HashMap<String, Value>,
}

impl Vertex {
    /// Create a new vertex with the given ID.
    #[must_use]
    pub fn new(id: VertexId) -> Self {
        Self { id, labels: Vec::new(), properties: HashMap::new() }
    }

    /// Add a label to this vertex.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<Label>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Add a property to this vertex.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Check if this vertex has a specific label.
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l.as_str() == label)
    }

    /// Get a property value by key.
    #[inline]
    #[must_use]
    pub fn get_property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Set a property value.
    #[inline]
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(key.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_labels() {
        let vertex = Vertex::new(VertexId::new(1)).with_label("Person").with_label("Admin");

        assert!(vertex.has_label("Person"));
        assert!(vertex.has_label("Admin"));
        assert!(!vertex.has_label("Robot"));
    }

    #[test]
    fn vertex_properties() {
        let mut vertex = Vertex::new(VertexId::new(1)).with_property("name", "Alice");
        vertex.set_property("verified", true);

        assert_eq!(vertex.get_property("name"), Some(&Value::String("Alice".to_owned())));
        assert_eq!(vertex.get_property("verified"), Some(&Value::Bool(true)));
        assert_eq!(vertex.get_property("missing"), None);
    }
}
