//! Integration tests for path enumeration.
//!
//! These tests drive both enumeration strategies over small hand-built graphs
//! and check path order, depth bounds, uniqueness, pruning, statistics, and
//! error propagation from the traverser.

use waypoint_core::{EdgeId, Value, Vertex, VertexId};
use waypoint_graph::store::{GraphError, GraphResult, MemoryGraph};
use waypoint_graph::traversal::{
    AdjacencyCursor, BreadthFirstEnumerator, DepthFirstEnumerator, Direction, EdgeCursor,
    EnumeratedPath, Enumerator, GraphTraverser, PathEnumerator, TraversalFilter, TraversalOrder,
    TraversalStats, Traverser, TraverserOptions, UniquenessLevel,
};

/// Vertices `A, B, C, D` with `A->B e1`, `B->C e2`, `B->D e3`, `A->D e4`.
struct Fixture {
    graph: MemoryGraph,
    a: VertexId,
    b: VertexId,
    c: VertexId,
    d: VertexId,
    e1: EdgeId,
    e2: EdgeId,
    e3: EdgeId,
    e4: EdgeId,
}

fn fixture() -> Fixture {
    let mut graph = MemoryGraph::new();
    let a = graph.create_vertex(|id| Vertex::new(id).with_label("Hub")).unwrap();
    let b = graph.create_vertex(|id| Vertex::new(id).with_label("Hub")).unwrap();
    let c = graph.create_vertex(|id| Vertex::new(id).with_label("Leaf")).unwrap();
    let d = graph.create_vertex(|id| Vertex::new(id).with_label("Leaf")).unwrap();
    let e1 = graph.create_edge(a, b, "LINK").unwrap();
    let e2 = graph.create_edge(b, c, "LINK").unwrap();
    let e3 = graph.create_edge(b, d, "LINK").unwrap();
    let e4 = graph.create_edge(a, d, "SHORTCUT").unwrap();
    Fixture { graph, a, b, c, d, e1, e2, e3, e4 }
}

fn no_uniqueness(min: usize, max: usize) -> TraverserOptions {
    TraverserOptions::new()
        .with_depth_range(min, max)
        .with_unique_vertices(UniquenessLevel::None)
        .with_unique_edges(UniquenessLevel::None)
}

fn path(vertices: &[VertexId], edges: &[EdgeId]) -> EnumeratedPath {
    EnumeratedPath::from_parts(vertices.to_vec(), edges.to_vec()).unwrap()
}

fn drain(enumerator: &mut impl PathEnumerator) -> Vec<EnumeratedPath> {
    let mut paths = Vec::new();
    while enumerator.next().unwrap() {
        paths.push(enumerator.path().clone());
    }
    paths
}

// ============================================================================
// Enumeration order
// ============================================================================

#[test]
fn depth_first_order() {
    let f = fixture();
    let mut traverser = GraphTraverser::new(&f.graph);
    let mut dfs = DepthFirstEnumerator::new(f.a, no_uniqueness(1, 2), &mut traverser);

    assert_eq!(
        drain(&mut dfs),
        vec![
            path(&[f.a, f.b], &[f.e1]),
            path(&[f.a, f.b, f.c], &[f.e1, f.e2]),
            path(&[f.a, f.b, f.d], &[f.e1, f.e3]),
            path(&[f.a, f.d], &[f.e4]),
        ]
    );
}

#[test]
fn breadth_first_order() {
    let f = fixture();
    let mut traverser = GraphTraverser::new(&f.graph);
    let mut bfs = BreadthFirstEnumerator::new(f.a, no_uniqueness(1, 2), &mut traverser);

    assert_eq!(
        drain(&mut bfs),
        vec![
            path(&[f.a, f.b], &[f.e1]),
            path(&[f.a, f.d], &[f.e4]),
            path(&[f.a, f.b, f.c], &[f.e1, f.e2]),
            path(&[f.a, f.b, f.d], &[f.e1, f.e3]),
        ]
    );
}

#[test]
fn min_depth_zero_yields_start_first() {
    let f = fixture();

    for order in [TraversalOrder::DepthFirst, TraversalOrder::BreadthFirst] {
        let mut traverser = GraphTraverser::new(&f.graph);
        let options = no_uniqueness(0, 2).with_order(order);
        let mut enumerator = Enumerator::new(f.a, options, &mut traverser).unwrap();

        let paths = drain(&mut enumerator);
        assert_eq!(paths.len(), 5, "{order:?}");
        assert_eq!(paths[0], EnumeratedPath::new(f.a), "{order:?}");
        assert_eq!(paths.iter().filter(|p| p.depth() == 0).count(), 1, "{order:?}");
    }
}

#[test]
fn missing_start_vertex_is_empty_for_any_min_depth() {
    let f = fixture();

    for order in [TraversalOrder::DepthFirst, TraversalOrder::BreadthFirst] {
        for min in [0, 1] {
            let mut traverser = GraphTraverser::new(&f.graph);
            let options = no_uniqueness(min, 2).with_order(order);
            let mut enumerator =
                Enumerator::new(VertexId::new(404), options, &mut traverser).unwrap();

            assert!(!enumerator.next().unwrap(), "{order:?} min {min}");
            assert!(enumerator.path().is_empty(), "{order:?} min {min}");
            assert!(enumerator.last_vertex_to_value().unwrap().is_null(), "{order:?} min {min}");
        }
    }
}

#[test]
fn exhaustion_is_idempotent() {
    let f = fixture();
    let mut traverser = GraphTraverser::new(&f.graph);
    let mut dfs = DepthFirstEnumerator::new(f.a, no_uniqueness(1, 2), &mut traverser);

    drain(&mut dfs);
    for _ in 0..3 {
        assert!(!dfs.next().unwrap());
        assert!(dfs.path().is_empty());
    }
}

// ============================================================================
// Uniqueness
// ============================================================================

#[test]
fn global_edges_on_cycle() {
    let mut graph = MemoryGraph::new();
    let a = graph.create_vertex(Vertex::new).unwrap();
    let b = graph.create_vertex(Vertex::new).unwrap();
    let e1 = graph.create_edge(a, b, "NEXT").unwrap();
    let e1_rev = graph.create_edge(b, a, "NEXT").unwrap();

    for order in [TraversalOrder::DepthFirst, TraversalOrder::BreadthFirst] {
        let mut traverser = GraphTraverser::new(&graph);
        let options = TraverserOptions::new()
            .with_depth_range(1, 4)
            .with_unique_edges(UniquenessLevel::Global)
            .with_order(order);
        let mut enumerator = Enumerator::new(a, options, &mut traverser).unwrap();

        let paths = drain(&mut enumerator);
        let expected = vec![path(&[a, b], &[e1]), path(&[a, b, a], &[e1, e1_rev])];
        assert_eq!(paths, expected, "{order:?}");
        assert_eq!(enumerator.traverser().stats().filtered_paths, 1, "{order:?}");
    }
}

#[test]
fn path_uniqueness_defaults_prevent_edge_reuse() {
    let mut graph = MemoryGraph::new();
    let a = graph.create_vertex(Vertex::new).unwrap();
    let lap = graph.create_edge(a, a, "LAP").unwrap();

    let mut traverser = GraphTraverser::new(&graph);
    let options = TraverserOptions::new().with_depth_range(1, 5);
    let mut dfs = DepthFirstEnumerator::new(a, options, &mut traverser);

    assert_eq!(drain(&mut dfs), vec![path(&[a, a], &[lap])]);
}

#[test]
fn breadth_first_global_vertices() {
    let f = fixture();
    let mut traverser = GraphTraverser::new(&f.graph);
    let options = TraverserOptions::new()
        .with_depth_range(1, 2)
        .with_unique_vertices(UniquenessLevel::Global)
        .with_order(TraversalOrder::BreadthFirst);
    let mut bfs = Enumerator::new(f.a, options, &mut traverser).unwrap();

    // D is reached directly through e4, so the longer route via B is dropped.
    assert_eq!(
        drain(&mut bfs),
        vec![
            path(&[f.a, f.b], &[f.e1]),
            path(&[f.a, f.d], &[f.e4]),
            path(&[f.a, f.b, f.c], &[f.e1, f.e2]),
        ]
    );
}

// ============================================================================
// Pruning
// ============================================================================

#[test]
fn depth_first_prune_skips_extensions() {
    let f = fixture();
    let mut traverser = GraphTraverser::new(&f.graph);
    let mut dfs = DepthFirstEnumerator::new(f.a, no_uniqueness(1, 2), &mut traverser);

    assert!(dfs.next().unwrap());
    let pruned = dfs.path().clone();
    assert_eq!(pruned, path(&[f.a, f.b], &[f.e1]));
    dfs.prune();

    let rest = drain(&mut dfs);
    assert_eq!(rest, vec![path(&[f.a, f.d], &[f.e4])]);
    assert!(rest.iter().all(|p| !p.starts_with(&pruned)));
}

#[test]
fn breadth_first_prune_skips_extensions() {
    let f = fixture();
    let mut traverser = GraphTraverser::new(&f.graph);
    let mut bfs = BreadthFirstEnumerator::new(f.a, no_uniqueness(1, 2), &mut traverser);

    assert!(bfs.next().unwrap());
    bfs.prune();

    assert_eq!(drain(&mut bfs), vec![path(&[f.a, f.d], &[f.e4])]);
}

// ============================================================================
// Conditions, direction, and statistics
// ============================================================================

#[test]
fn edge_type_filter() {
    let f = fixture();
    let mut traverser =
        GraphTraverser::new(&f.graph).with_filter(TraversalFilter::new().with_edge_type("LINK"));
    let mut dfs = DepthFirstEnumerator::new(f.a, no_uniqueness(1, 2), &mut traverser);

    let paths = drain(&mut dfs);
    assert_eq!(paths.len(), 3);
    assert!(paths.iter().all(|p| !p.edges().contains(&f.e4)));
    assert_eq!(dfs.traverser().stats().filtered_paths, 1);
}

#[test]
fn vertex_label_filter() {
    let f = fixture();
    let mut traverser =
        GraphTraverser::new(&f.graph).with_filter(TraversalFilter::new().with_vertex_label("Hub"));
    let mut bfs = BreadthFirstEnumerator::new(f.a, no_uniqueness(1, 2), &mut traverser);

    assert_eq!(drain(&mut bfs), vec![path(&[f.a, f.b], &[f.e1])]);
}

#[test]
fn closure_conditions_see_depth() {
    let f = fixture();
    let mut traverser = GraphTraverser::new(&f.graph)
        .with_edge_condition(|edge, depth| depth == 0 || edge.edge_type.as_str() == "LINK")
        .with_vertex_condition(|vertex, depth| depth < 2 || vertex.has_label("Leaf"));
    let mut dfs = DepthFirstEnumerator::new(f.a, no_uniqueness(1, 2), &mut traverser);

    assert_eq!(drain(&mut dfs).len(), 4);
}

#[test]
fn both_directions() {
    let f = fixture();
    let mut traverser = GraphTraverser::new(&f.graph).with_direction(Direction::Both);
    let mut dfs = DepthFirstEnumerator::new(f.d, no_uniqueness(1, 1), &mut traverser);

    assert_eq!(drain(&mut dfs), vec![path(&[f.d, f.b], &[f.e3]), path(&[f.d, f.a], &[f.e4])]);
}

#[test]
fn statistics_count_reads() {
    let f = fixture();
    let mut traverser = GraphTraverser::new(&f.graph);
    {
        let mut dfs = DepthFirstEnumerator::new(f.a, no_uniqueness(1, 2), &mut traverser);
        drain(&mut dfs);
    }

    // One edge read and one vertex read per traversed edge.
    let stats = traverser.stats_mut();
    assert_eq!(stats.get_and_reset_read_documents(), 8);
    assert_eq!(stats.get_and_reset_filtered_paths(), 0);
    assert_eq!(*traverser.stats(), TraversalStats::default());
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn enumerator_rejects_inconsistent_options() {
    let f = fixture();
    let mut traverser = GraphTraverser::new(&f.graph);

    let err = Enumerator::new(f.a, TraverserOptions::new().with_depth_range(3, 1), &mut traverser)
        .unwrap_err();
    assert!(matches!(err, GraphError::InvalidOptions(_)));

    let global_dfs = TraverserOptions::new().with_unique_vertices(UniquenessLevel::Global);
    let err = Enumerator::new(f.a, global_dfs, &mut traverser).unwrap_err();
    assert!(matches!(err, GraphError::InvalidOptions(_)));
}

#[test]
fn enumerator_from_json_options() {
    let f = fixture();
    let options = TraverserOptions::from_json(
        r#"{ "minDepth": 2, "maxDepth": 2, "uniqueEdges": "none", "order": "bfs" }"#,
    )
    .unwrap();
    let mut traverser = GraphTraverser::new(&f.graph);
    let enumerator = Enumerator::new(f.a, options, &mut traverser).unwrap();
    assert!(matches!(enumerator, Enumerator::BreadthFirst(_)));

    let paths = enumerator.into_paths().collect_all().unwrap();
    assert_eq!(
        paths,
        vec![path(&[f.a, f.b, f.c], &[f.e1, f.e2]), path(&[f.a, f.b, f.d], &[f.e1, f.e3])]
    );
}

// ============================================================================
// Materialization
// ============================================================================

#[test]
fn materializes_current_path() {
    let f = fixture();
    let mut traverser = GraphTraverser::new(&f.graph);
    let mut dfs = DepthFirstEnumerator::new(f.a, no_uniqueness(0, 2), &mut traverser);

    assert!(dfs.next().unwrap());
    assert!(dfs.last_edge_to_value().unwrap().is_null());
    assert_eq!(dfs.last_vertex_to_value().unwrap().as_vertex_id(), Some(f.a));

    assert!(dfs.next().unwrap());
    assert!(dfs.next().unwrap());
    assert_eq!(dfs.path().vertices(), &[f.a, f.b, f.c]);

    let value = dfs.path_to_value().unwrap();
    assert_eq!(value.path_vertex_ids().unwrap(), vec![f.a, f.b, f.c]);
    assert_eq!(value.path_edge_ids().unwrap(), vec![f.e1, f.e2]);
    assert_eq!(dfs.last_edge_to_value().unwrap().as_edge_id(), Some(f.e2));

    match dfs.last_vertex_to_value().unwrap() {
        Value::Vertex { labels, .. } => assert_eq!(labels, vec!["Leaf".to_owned()]),
        other => panic!("expected vertex, got {other:?}"),
    }
}

#[test]
fn path_iterator_collects_values() {
    let f = fixture();
    let mut traverser = GraphTraverser::new(&f.graph);
    let enumerator = Enumerator::new(f.a, no_uniqueness(1, 2), &mut traverser).unwrap();

    let values = enumerator.into_paths().with_limit(2).collect_values().unwrap();
    assert_eq!(values.len(), 2);
    assert!(values.iter().all(|v| v.as_path().is_some()));
}

// ============================================================================
// Error propagation
// ============================================================================

/// Cursor that fails on its first read.
struct BrokenCursor<'g> {
    inner: AdjacencyCursor<'g>,
    broken: bool,
}

impl EdgeCursor for BrokenCursor<'_> {
    fn next(&mut self) -> GraphResult<Option<(EdgeId, usize)>> {
        if self.broken {
            return Err(GraphError::Cursor("edge index unavailable".to_owned()));
        }
        self.inner.next()
    }
}

/// Traverser whose cursors break from a given depth on.
struct BrokenTraverser<'g> {
    inner: GraphTraverser<'g>,
    broken_from_depth: usize,
}

impl<'g> Traverser for BrokenTraverser<'g> {
    type Cursor = BrokenCursor<'g>;

    fn has_vertex(&self, vertex: VertexId) -> GraphResult<bool> {
        self.inner.has_vertex(vertex)
    }

    fn next_cursor(
        &mut self,
        vertex: VertexId,
        depth: usize,
    ) -> GraphResult<Option<Self::Cursor>> {
        let broken = depth >= self.broken_from_depth;
        Ok(self.inner.next_cursor(vertex, depth)?.map(|inner| BrokenCursor { inner, broken }))
    }

    fn edge_matches_conditions(
        &mut self,
        edge: EdgeId,
        source: VertexId,
        depth: usize,
        cursor_idx: usize,
    ) -> GraphResult<bool> {
        self.inner.edge_matches_conditions(edge, source, depth, cursor_idx)
    }

    fn get_vertex(
        &mut self,
        edge: EdgeId,
        vertices: &mut Vec<VertexId>,
        depth: usize,
        cursor_idx: usize,
    ) -> GraphResult<bool> {
        self.inner.get_vertex(edge, vertices, depth, cursor_idx)
    }

    fn get_single_vertex(
        &mut self,
        edge: EdgeId,
        source: VertexId,
        depth: usize,
        cursor_idx: usize,
    ) -> GraphResult<Option<VertexId>> {
        self.inner.get_single_vertex(edge, source, depth, cursor_idx)
    }

    fn vertex_to_value(&self, vertex: VertexId) -> GraphResult<Value> {
        self.inner.vertex_to_value(vertex)
    }

    fn edge_to_value(&self, edge: EdgeId) -> GraphResult<Value> {
        self.inner.edge_to_value(edge)
    }

    fn stats(&self) -> &TraversalStats {
        self.inner.stats()
    }

    fn stats_mut(&mut self) -> &mut TraversalStats {
        self.inner.stats_mut()
    }
}

#[test]
fn depth_first_propagates_cursor_errors() {
    let f = fixture();
    let mut traverser =
        BrokenTraverser { inner: GraphTraverser::new(&f.graph), broken_from_depth: 1 };
    let mut dfs = DepthFirstEnumerator::new(f.a, no_uniqueness(1, 2), &mut traverser);

    assert!(dfs.next().unwrap());
    assert!(matches!(dfs.next(), Err(GraphError::Cursor(_))));
}

#[test]
fn breadth_first_propagates_cursor_errors() {
    let f = fixture();
    let mut traverser =
        BrokenTraverser { inner: GraphTraverser::new(&f.graph), broken_from_depth: 1 };
    let mut bfs = BreadthFirstEnumerator::new(f.a, no_uniqueness(1, 2), &mut traverser);

    assert!(bfs.next().unwrap());
    assert!(bfs.next().unwrap());
    assert!(matches!(bfs.next(), Err(GraphError::Cursor(_))));
}

#[test]
fn path_iterator_stops_after_error() {
    let f = fixture();
    let mut traverser =
        BrokenTraverser { inner: GraphTraverser::new(&f.graph), broken_from_depth: 0 };
    let dfs = DepthFirstEnumerator::new(f.a, no_uniqueness(1, 2), &mut traverser);
    let mut paths = dfs.into_paths();

    assert!(matches!(paths.next(), Some(Err(GraphError::Cursor(_)))));
    assert!(paths.next().is_none());
}
