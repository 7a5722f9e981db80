//! Traversal configuration.
//!
//! [`TraverserOptions`] is plain, immutable configuration. It can be built
//! in code or parsed from JSON:
//!
//! ```
//! use waypoint_graph::traversal::{TraversalOrder, TraverserOptions, UniquenessLevel};
//!
//! let options = TraverserOptions::from_json(
//!     r#"{ "minDepth": 1, "maxDepth": 3, "uniqueVertices": "global", "order": "bfs" }"#,
//! )?;
//!
//! assert_eq!(options.max_depth, 3);
//! assert_eq!(options.unique_vertices, UniquenessLevel::Global);
//! assert_eq!(options.unique_edges, UniquenessLevel::Path);
//! assert_eq!(options.order, TraversalOrder::BreadthFirst);
//! # Ok::<(), waypoint_graph::store::GraphError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::store::{GraphError, GraphResult};

/// How strictly vertices or edges must be unique during a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UniquenessLevel {
    /// No uniqueness check.
    #[default]
    None,
    /// No repeat within a single path.
    Path,
    /// No repeat across the whole traversal.
    Global,
}

/// The order in which paths are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TraversalOrder {
    /// Depth-first pre-order.
    #[default]
    #[serde(rename = "dfs")]
    DepthFirst,
    /// All paths of length k before any path of length k + 1.
    #[serde(rename = "bfs")]
    BreadthFirst,
}

/// Depth bounds, uniqueness levels, and order of a traversal.
///
/// Depths are counted in edges and both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TraverserOptions {
    /// Shortest path length to return (default: 1).
    pub min_depth: usize,
    /// Longest path length to return (default: 1).
    pub max_depth: usize,
    /// Vertex uniqueness (default: none).
    pub unique_vertices: UniquenessLevel,
    /// Edge uniqueness (default: path).
    pub unique_edges: UniquenessLevel,
    /// Enumeration order (default: depth-first).
    pub order: TraversalOrder,
}

impl Default for TraverserOptions {
    fn default() -> Self {
        Self {
            min_depth: 1,
            max_depth: 1,
            unique_vertices: UniquenessLevel::None,
            unique_edges: UniquenessLevel::Path,
            order: TraversalOrder::DepthFirst,
        }
    }
}

impl TraverserOptions {
    /// Create options with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object and validate them.
    ///
    /// Missing keys take their default values; unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Config`] for malformed JSON and
    /// [`GraphError::InvalidOptions`] if validation fails.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Set the minimum depth.
    #[must_use]
    pub const fn with_min_depth(mut self, min_depth: usize) -> Self {
        self.min_depth = min_depth;
        self
    }

    /// Set the maximum depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set both depth bounds.
    #[must_use]
    pub const fn with_depth_range(mut self, min: usize, max: usize) -> Self {
        self.min_depth = min;
        self.max_depth = max;
        self
    }

    /// Set the vertex uniqueness level.
    #[must_use]
    pub const fn with_unique_vertices(mut self, level: UniquenessLevel) -> Self {
        self.unique_vertices = level;
        self
    }

    /// Set the edge uniqueness level.
    #[must_use]
    pub const fn with_unique_edges(mut self, level: UniquenessLevel) -> Self {
        self.unique_edges = level;
        self
    }

    /// Set the enumeration order.
    #[must_use]
    pub const fn with_order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }

    /// Check that the options describe a traversal that can be run.
    ///
    /// Breadth-first order does not scan partial paths, so PATH uniqueness is
    /// accepted with a warning and only applied by depth-first enumeration.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidOptions`] if `min_depth > max_depth`, or if
    /// GLOBAL vertex uniqueness is combined with depth-first order.
    pub fn validate(&self) -> GraphResult<()> {
        if self.min_depth > self.max_depth {
            return Err(GraphError::InvalidOptions(format!(
                "minDepth ({}) is greater than maxDepth ({})",
                self.min_depth, self.max_depth
            )));
        }

        if self.order == TraversalOrder::DepthFirst
            && self.unique_vertices == UniquenessLevel::Global
        {
            return Err(GraphError::InvalidOptions(
                "uniqueVertices 'global' requires breadth-first order".to_owned(),
            ));
        }

        if self.order == TraversalOrder::BreadthFirst
            && (self.unique_vertices == UniquenessLevel::Path
                || self.unique_edges == UniquenessLevel::Path)
        {
            warn!(
                unique_vertices = ?self.unique_vertices,
                unique_edges = ?self.unique_edges,
                "path uniqueness is not checked by breadth-first traversal"
            );
        }

        Ok(())
    }
}
