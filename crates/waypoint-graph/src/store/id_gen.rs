//! Monotonic ID generation for vertices and edges.

use std::sync::atomic::{AtomicU64, Ordering};

use waypoint_core::{EdgeId, VertexId};

/// A monotonic ID generator.
///
/// Generates unique, monotonically increasing IDs. The generator is thread-safe
/// and can be shared across threads. IDs start from 1 (0 is reserved for "no ID").
///
/// # Example
///
/// ```
/// use waypoint_graph::store::IdGenerator;
///
/// let gen = IdGenerator::new();
/// let id1 = gen.next_vertex_id();
/// let id2 = gen.next_vertex_id();
/// assert!(id1.as_u64() < id2.as_u64());
/// ```
#[derive(Debug)]
pub struct IdGenerator {
    next_vertex_id: AtomicU64,
    next_edge_id: AtomicU64,
}

impl IdGenerator {
    /// Create a new ID generator starting from 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next_vertex_id: AtomicU64::new(1), next_edge_id: AtomicU64::new(1) }
    }

    /// Generate the next vertex ID.
    pub fn next_vertex_id(&self) -> VertexId {
        VertexId::new(self.next_vertex_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Generate the next edge ID.
    pub fn next_edge_id(&self) -> EdgeId {
        EdgeId::new(self.next_edge_id.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
