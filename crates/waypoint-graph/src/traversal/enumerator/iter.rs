//! Standard iterator over the paths of a [`PathEnumerator`].

use waypoint_core::Value;

use super::{EnumeratedPath, PathEnumerator};
use crate::store::GraphResult;

/// Yields owned copies of each enumerated path.
///
/// Iteration stops after the first error or once the optional limit is
/// reached.
///
/// # Example
///
/// ```
/// use waypoint_core::Vertex;
/// use waypoint_graph::store::MemoryGraph;
/// use waypoint_graph::traversal::{Enumerator, GraphTraverser, PathEnumerator, TraverserOptions};
///
/// let mut graph = MemoryGraph::new();
/// let hub = graph.create_vertex(Vertex::new)?;
/// for _ in 0..5 {
///     let spoke = graph.create_vertex(Vertex::new)?;
///     graph.create_edge(hub, spoke, "SPOKE")?;
/// }
///
/// let mut traverser = GraphTraverser::new(&graph);
/// let paths = Enumerator::new(hub, TraverserOptions::new(), &mut traverser)?
///     .into_paths()
///     .with_limit(3)
///     .collect_all()?;
/// assert_eq!(paths.len(), 3);
/// # Ok::<(), waypoint_graph::store::GraphError>(())
/// ```
#[derive(Debug)]
pub struct PathIterator<E: PathEnumerator> {
    enumerator: E,
    limit: Option<usize>,
    returned: usize,
    done: bool,
}

impl<E: PathEnumerator> PathIterator<E> {
    /// Wrap an enumerator.
    pub fn new(enumerator: E) -> Self {
        Self { enumerator, limit: None, returned: 0, done: false }
    }

    /// Stop after `limit` paths.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Advance the enumerator, returning `false` when iteration is over.
    fn advance(&mut self) -> GraphResult<bool> {
        if self.done || self.limit.is_some_and(|limit| self.returned >= limit) {
            return Ok(false);
        }
        if self.enumerator.next()? {
            self.returned += 1;
            Ok(true)
        } else {
            self.done = true;
            Ok(false)
        }
    }

    /// Get the next path, propagating errors.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the enumerator.
    pub fn try_next(&mut self) -> GraphResult<Option<EnumeratedPath>> {
        Ok(self.advance()?.then(|| self.enumerator.path().clone()))
    }

    /// Get the next path materialized as a [`Value::Path`].
    ///
    /// # Errors
    ///
    /// Returns any error raised by the enumerator or during materialization.
    pub fn try_next_value(&mut self) -> GraphResult<Option<Value>> {
        if self.advance()? {
            self.enumerator.path_to_value().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Collect all remaining paths into a vector.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the enumerator.
    pub fn collect_all(mut self) -> GraphResult<Vec<EnumeratedPath>> {
        let mut results = Vec::new();
        while let Some(path) = self.try_next()? {
            results.push(path);
        }
        Ok(results)
    }

    /// Collect all remaining paths as materialized values.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the enumerator or during materialization.
    pub fn collect_values(mut self) -> GraphResult<Vec<Value>> {
        let mut results = Vec::new();
        while let Some(value) = self.try_next_value()? {
            results.push(value);
        }
        Ok(results)
    }

    /// Count remaining paths without cloning them.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the enumerator.
    pub fn count_all(mut self) -> GraphResult<usize> {
        let mut count = 0;
        while self.advance()? {
            count += 1;
        }
        Ok(count)
    }

    /// Recover the wrapped enumerator.
    pub fn into_inner(self) -> E {
        self.enumerator
    }
}

impl<E: PathEnumerator> Iterator for PathIterator<E> {
    type Item = GraphResult<EnumeratedPath>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.try_next() {
            Ok(Some(path)) => Some(Ok(path)),
            Ok(None) => None,
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
