use surface_embed::algs::euler::{
    Classification, face_count, genus, is_embedding, is_planar_embedding, is_toroidal_embedding,
    summarize,
};
use surface_embed::algs::face_traversal::collect_faces;
use surface_embed::topology::{EdgeId, EmbeddedGraph, VertexId};
use surface_embed::{DebugInvariants, EmbeddingError};

fn v(i: u32) -> VertexId {
    VertexId::new(i)
}

fn add_all(g: &mut EmbeddedGraph, edges: &[(u32, u32)]) {
    for &(a, b) in edges {
        let (_, created) = g.add_edge(v(a), v(b)).unwrap();
        assert!(created);
    }
}

fn counts(g: &EmbeddedGraph) -> (usize, usize, usize, usize) {
    (
        face_count(g.rotation()),
        g.num_vertices(),
        g.num_edges(),
        g.connected_components(),
    )
}

/// Triangle 0-1-2 with vertex 3 attached to 0 and 1.
fn scenario_a() -> EmbeddedGraph {
    let mut g = EmbeddedGraph::with_vertices(4);
    add_all(&mut g, &[(0, 1), (0, 2), (0, 3), (1, 3), (1, 2)]);
    g
}

fn scenario_b() -> EmbeddedGraph {
    let mut g = scenario_a();
    add_all(&mut g, &[(2, 3)]);
    g
}

#[test]
fn scenario_a_is_planar_with_three_faces() {
    let g = scenario_a();
    let (f, n, e, c) = counts(&g);
    assert_eq!(f, 3);
    assert!(is_planar_embedding(f, n, e, c));
    assert!(!is_toroidal_embedding(f, n, e, c));
    assert!(!is_embedding(f, n, e, c, 2));
    assert_eq!(genus(f, n, e, c), Ok(0));
    assert_eq!(summarize(&g).unwrap().classification, Classification::Planar);
}

#[test]
fn scenario_a_face_boundaries() {
    let faces = collect_faces(scenario_a().rotation());
    let cycles: Vec<Vec<u32>> = faces
        .iter()
        .map(|f| f.vertices.iter().map(|v| v.get()).collect())
        .collect();
    assert_eq!(cycles, vec![vec![0, 1, 3], vec![0, 2, 1], vec![0, 3, 1, 2]]);
}

#[test]
fn scenario_b_complete_graph_is_toroidal() {
    let g = scenario_b();
    let (f, n, e, c) = counts(&g);
    assert_eq!(f, 2);
    assert!(!is_planar_embedding(f, n, e, c));
    assert!(is_toroidal_embedding(f, n, e, c));
    assert!(!is_embedding(f, n, e, c, 2));
    assert_eq!(genus(f, n, e, c), Ok(1));
    let summary = summarize(&g).unwrap();
    assert_eq!(summary.classification, Classification::Toroidal);
    assert_eq!(summary.genus, 1);
}

#[test]
fn scenario_c_reversing_one_rotation_restores_planarity() {
    let mut g = scenario_b();
    g.reverse_rotation(v(3)).unwrap();
    let order: Vec<u32> = g.rotation().rotation(v(3)).map(EdgeId::get).collect();
    assert_eq!(order, vec![5, 3, 2]);

    let (f, n, e, c) = counts(&g);
    assert_eq!(f, 4);
    assert!(is_planar_embedding(f, n, e, c));
    assert!(!is_toroidal_embedding(f, n, e, c));
    assert_eq!(genus(f, n, e, c), Ok(0));
    assert_eq!(summarize(&g).unwrap().classification, Classification::Planar);
    g.validate_invariants().unwrap();
}

#[test]
fn scenario_d_five_vertices_reach_genus_two() {
    let mut g = scenario_b();
    g.reverse_rotation(v(3)).unwrap();
    let apex = g.add_vertex();
    assert_eq!(apex, v(4));
    add_all(&mut g, &[(0, 4), (2, 4), (1, 4)]);

    let (f, n, e, c) = counts(&g);
    assert_eq!((f, n, e, c), (2, 5, 9, 1));
    assert!(!is_planar_embedding(f, n, e, c));
    assert!(!is_toroidal_embedding(f, n, e, c));
    assert!(is_embedding(f, n, e, c, 2));
    let summary = summarize(&g).unwrap();
    assert_eq!(summary.genus, 2);
    assert_eq!(summary.classification, Classification::GenusG(2));
}

#[test]
fn classification_is_idempotent() {
    let g = scenario_b();
    let first = summarize(&g).unwrap();
    for _ in 0..5 {
        assert_eq!(summarize(&g).unwrap(), first);
    }
}

#[test]
fn double_reverse_restores_rotation_and_faces() {
    let mut g = scenario_b();
    let before = g.to_string();
    for vertex in 0..4 {
        g.reverse_rotation(v(vertex)).unwrap();
        g.reverse_rotation(v(vertex)).unwrap();
    }
    assert_eq!(g.to_string(), before);
    assert_eq!(face_count(g.rotation()), 2);
}

#[test]
fn reversing_every_vertex_mirrors_the_surface() {
    let mut g = scenario_b();
    for vertex in 0..4 {
        g.reverse_rotation(v(vertex)).unwrap();
    }
    // the mirror image of an embedding has the same genus
    assert_eq!(summarize(&g).unwrap().classification, Classification::Toroidal);
}

#[test]
fn diagnostic_dump_matches_insertion_order() {
    let g = scenario_a();
    assert_eq!(
        g.to_string(),
        "0: 0--1 0--2 0--3\n1: 0--1 1--3 1--2\n2: 0--2 1--2\n3: 0--3 1--3\n"
    );
}

#[test]
fn disconnected_graphs_use_the_generalized_formula() {
    let mut g = EmbeddedGraph::with_vertices(7);
    add_all(&mut g, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
    let summary = summarize(&g).unwrap();
    assert_eq!(summary.components, 3);
    assert_eq!(summary.faces, 5);
    assert_eq!(summary.classification, Classification::Planar);
}

#[test]
fn empty_graph_cannot_be_classified() {
    let err = summarize(&EmbeddedGraph::new()).unwrap_err();
    assert_eq!(err, EmbeddingError::EmptyEmbedding);
    assert!(err.is_precondition());
}
