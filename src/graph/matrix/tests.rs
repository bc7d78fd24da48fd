//! Tests for the adjacency-matrix graph.

use super::*;
use crate::error::Error;

fn sample() -> MatrixGraph {
    // 0 -1- 1 -2- 2
    //  \         /
    //   5-- 3 -2
    MatrixGraph::from_edges(&[
        Edge::new(0, 1, 1),
        Edge::new(1, 2, 2),
        Edge::new(2, 3, 2),
        Edge::new(3, 0, 5),
    ])
    .unwrap()
}

#[test]
fn test_empty_graph_queries() {
    let graph = MatrixGraph::new();
    assert_eq!(graph.vertices(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.max_weight(), 0);
    assert_eq!(graph.min_weight(), 0);
    assert!(graph.minimal_edges(1).is_empty());
    assert!(graph.incident_edges(0).is_empty());
    assert!(graph.edges().is_empty());
    assert_eq!(graph.to_string(), "");
}

#[test]
fn test_counts_and_symmetry() {
    let graph = sample();
    assert_eq!(graph.vertices(), 4);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.weight(3, 0), Some(5));
    assert_eq!(graph.weight(0, 3), Some(5));
    assert_eq!(graph.weight(0, 2), None);
    assert!(graph.has_edge(2, 1));
    assert_eq!(graph.degree(0), 2);
    assert_eq!(graph.degree(9), 0);
}

#[test]
fn test_incident_edges() {
    let graph = sample();
    let edges = graph.incident_edges(0);
    assert_eq!(edges.len(), 2);
    assert!(edges.iter().all(|e| e.start() == 0));
    assert!(edges.contains(&Edge::new(0, 1, 1)));
    assert!(edges.contains(&Edge::new(0, 3, 5)));
}

#[test]
fn test_incident_edges_out_of_range_is_empty() {
    let graph = sample();
    assert!(graph.incident_edges(4).is_empty());
    assert!(graph.incident_edges(usize::MAX).is_empty());
}

#[test]
fn test_minimal_edges() {
    let graph = sample();
    assert_eq!(graph.minimal_edges(1), vec![Edge::new(0, 1, 1)]);

    let tier = graph.minimal_edges(2);
    assert_eq!(tier, vec![Edge::new(1, 2, 2), Edge::new(2, 3, 2)]);
    assert!(tier.iter().all(|e| e.start() < e.end()));

    // Skips straight to the next stored weight.
    assert_eq!(graph.minimal_edges(3), vec![Edge::new(0, 3, 5)]);
    assert!(graph.minimal_edges(6).is_empty());

    // The zero sentinel is never reported as an edge.
    assert_eq!(graph.minimal_edges(0), graph.minimal_edges(1));
}

#[test]
fn test_min_max_ignore_sentinel() {
    let graph = sample();
    assert_eq!(graph.min_weight(), 1);
    assert_eq!(graph.max_weight(), 5);
}

#[test]
fn test_load_matrix() {
    let graph = MatrixGraph::from_matrix(vec![
        vec![0, 4, 0],
        vec![4, 0, 6],
        vec![0, 6, 0],
    ])
    .unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.matrix_rows()[1], vec![4, 0, 6]);
    assert_eq!(graph.to_string(), "0\t4\t0\t\n4\t0\t6\t\n0\t6\t0\t\n");
}

#[test]
fn test_load_rejects_invalid_input() {
    assert!(matches!(
        MatrixGraph::from_matrix(vec![vec![0, 4], vec![4]]),
        Err(Error::InvalidGraph(ValidationError::NotSquare { .. }))
    ));
    assert!(matches!(
        MatrixGraph::from_matrix(vec![vec![0, 4], vec![3, 0]]),
        Err(Error::InvalidGraph(ValidationError::Asymmetric { .. }))
    ));
    // Vertex 1 never appears in an edge.
    assert!(matches!(
        MatrixGraph::from_edges(&[Edge::new(0, 2, 1)]),
        Err(Error::InvalidGraph(ValidationError::IsolatedVertex { vertex: 1 }))
    ));
    assert!(matches!(
        MatrixGraph::from_edges(&[]),
        Err(Error::InvalidGraph(ValidationError::Empty))
    ));
}

#[test]
fn test_failed_load_keeps_previous_contents() {
    let mut graph = sample();
    let before = graph.clone();
    assert!(graph.load_edges(&[Edge::new(1, 1, 1)]).is_err());
    assert_eq!(graph, before);
}

#[test]
fn test_to_list_preserves_edges() {
    let graph = sample();
    let list = graph.to_list().unwrap();
    assert_eq!(list.edges(), graph.edges());
    assert_eq!(list.edge_count(), graph.edge_count());
}

#[test]
fn test_load_rejects_huge_vertex_ids() {
    for far in [usize::MAX, 1 << 40] {
        let mut graph = sample();
        let before = graph.clone();
        assert!(matches!(
            graph.load_edges(&[Edge::new(0, far, 1)]),
            Err(Error::InvalidGraph(ValidationError::IsolatedVertex { vertex: 1 }))
        ));
        assert_eq!(graph, before);
    }
}
