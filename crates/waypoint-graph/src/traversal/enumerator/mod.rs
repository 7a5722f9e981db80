//! Path enumeration strategies.
//!
//! Both strategies implement [`PathEnumerator`]: a pull-based cursor that is
//! advanced with [`next`](PathEnumerator::next) and exposes the current path
//! through [`path`](PathEnumerator::path). A returned path always satisfies
//! `min_depth <= depth <= max_depth` and the configured uniqueness levels.

mod breadth_first;
mod depth_first;
mod iter;
mod path;


pub use breadth_first::BreadthFirstEnumerator;
pub use depth_first::DepthFirstEnumerator;
pub use iter::PathIterator;
pub use path::EnumeratedPath;

use std::fmt;

use waypoint_core::{Value, VertexId};

use super::{TraversalOrder, Traverser, TraverserOptions};
use crate::store::GraphResult;

/// The contract shared by all path enumeration strategies.
pub trait PathEnumerator {
    /// Advance to the next path.
    ///
    /// Returns `false` once the traversal is exhausted, and keeps returning
    /// `false` on every later call.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the traverser or an edge cursor. The
    /// enumerator must not be advanced again after an error.
    fn next(&mut self) -> GraphResult<bool>;

    /// Skip every path that extends the current one.
    ///
    /// Only valid directly after [`next`](Self::next) returned `true`.
    fn prune(&mut self);

    /// The current path. Empty once the enumerator is exhausted.
    fn path(&self) -> &EnumeratedPath;

    /// Materialize the final vertex of the current path.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex cannot be read.
    fn last_vertex_to_value(&self) -> GraphResult<Value>;

    /// Materialize the final edge of the current path, or [`Value::Null`]
    /// if the path has no edges.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge cannot be read.
    fn last_edge_to_value(&self) -> GraphResult<Value>;

    /// Materialize the whole current path as a [`Value::Path`].
    ///
    /// # Errors
    ///
    /// Returns an error if any vertex or edge cannot be read.
    fn path_to_value(&self) -> GraphResult<Value>;

    /// Wrap this enumerator in a standard [`Iterator`].
    fn into_paths(self) -> PathIterator<Self>
    where
        Self: Sized,
    {
        PathIterator::new(self)
    }
}

/// A path enumerator whose strategy is picked from [`TraverserOptions::order`].
pub enum Enumerator<'a, T: Traverser> {
    DepthFirst(DepthFirstEnumerator<'a, T>),
    BreadthFirst(BreadthFirstEnumerator<'a, T>),
}

impl<'a, T: Traverser> Enumerator<'a, T> {
    /// Validate `options` and build the matching enumerator.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidOptions`](crate::store::GraphError::InvalidOptions)
    /// if the options are inconsistent.
    pub fn new(
        start: VertexId,
        options: TraverserOptions,
        traverser: &'a mut T,
    ) -> GraphResult<Self> {
        options.validate()?;
        Ok(match options.order {
            TraversalOrder::DepthFirst => {
                Self::DepthFirst(DepthFirstEnumerator::new(start, options, traverser))
            }
            TraversalOrder::BreadthFirst => {
                Self::BreadthFirst(BreadthFirstEnumerator::new(start, options, traverser))
            }
        })
    }

    /// The traverser this enumerator pulls from.
    pub fn traverser(&self) -> &T {
        match self {
            Self::DepthFirst(e) => e.traverser(),
            Self::BreadthFirst(e) => e.traverser(),
        }
    }
}

impl<T: Traverser> fmt::Debug for Enumerator<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthFirst(e) => f.debug_tuple("DepthFirst").field(e).finish(),
            Self::BreadthFirst(e) => f.debug_tuple("BreadthFirst").field(e).finish(),
        }
    }
}

impl<T: Traverser> PathEnumerator for Enumerator<'_, T> {
    fn next(&mut self) -> GraphResult<bool> {
        match self {
            Self::DepthFirst(e) => e.next(),
            Self::BreadthFirst(e) => e.next(),
        }
    }

    fn prune(&mut self) {
        match self {
            Self::DepthFirst(e) => e.prune(),
            Self::BreadthFirst(e) => e.prune(),
        }
    }

    fn path(&self) -> &EnumeratedPath {
        match self {
            Self::DepthFirst(e) => e.path(),
            Self::BreadthFirst(e) => e.path(),
        }
    }

    fn last_vertex_to_value(&self) -> GraphResult<Value> {
        match self {
            Self::DepthFirst(e) => e.last_vertex_to_value(),
            Self::BreadthFirst(e) => e.last_vertex_to_value(),
        }
    }

    fn last_edge_to_value(&self) -> GraphResult<Value> {
        match self {
            Self::DepthFirst(e) => e.last_edge_to_value(),
            Self::BreadthFirst(e) => e.last_edge_to_value(),
        }
    }

    fn path_to_value(&self) -> GraphResult<Value> {
        match self {
            Self::DepthFirst(e) => e.path_to_value(),
            Self::BreadthFirst(e) => e.path_to_value(),
        }
    }
}

// Materializers shared by both strategies.

fn last_vertex_value<T: Traverser>(traverser: &T, path: &EnumeratedPath) -> GraphResult<Value> {
    match path.last_vertex() {
        Some(vertex) => traverser.vertex_to_value(vertex),
        None => Ok(Value::Null),
    }
}

fn last_edge_value<T: Traverser>(traverser: &T, path: &EnumeratedPath) -> GraphResult<Value> {
    match path.last_edge() {
        Some(edge) => traverser.edge_to_value(edge),
        None => Ok(Value::Null),
    }
}

fn path_value<T: Traverser>(traverser: &T, path: &EnumeratedPath) -> GraphResult<Value> {
    let vertices = path
        .vertices()
        .iter()
        .map(|&v| traverser.vertex_to_value(v))
        .collect::<GraphResult<Vec<_>>>()?;
    let edges =
        path.edges().iter().map(|&e| traverser.edge_to_value(e)).collect::<GraphResult<Vec<_>>>()?;
    Ok(Value::Path { vertices, edges })
}
