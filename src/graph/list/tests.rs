//! Tests for the adjacency-list graph.

use super::*;
use crate::error::{Error, ValidationError};

fn sample() -> ListGraph {
    // Inserted out of order on purpose: list order must not leak into queries.
    ListGraph::from_edges(&[
        Edge::new(3, 2, 2),
        Edge::new(0, 3, 5),
        Edge::new(2, 1, 2),
        Edge::new(1, 0, 1),
    ])
    .unwrap()
}

#[test]
fn test_empty_graph_queries() {
    let graph = ListGraph::new();
    assert_eq!(graph.vertices(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.max_weight(), 0);
    assert_eq!(graph.min_weight(), 0);
    assert!(graph.minimal_edges(1).is_empty());
    assert!(graph.incident_edges(0).is_empty());
    assert!(graph.edges().is_empty());
}

#[test]
fn test_counts_from_degrees() {
    let graph = sample();
    assert_eq!(graph.vertices(), 4);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.degree(2), 2);
    assert_eq!(graph.degree(8), 0);
    assert_eq!(graph.neighbors(1), Some(&[(2, 2), (0, 1)][..]));
    assert!(graph.neighbors(4).is_none());
}

#[test]
fn test_incident_edges() {
    let graph = sample();
    assert_eq!(graph.incident_edges(3), vec![Edge::new(3, 2, 2), Edge::new(3, 0, 5)]);
    assert!(graph.incident_edges(3).iter().all(|e| e.start() == 3));
}

#[test]
fn test_incident_edges_out_of_range_is_empty() {
    let graph = sample();
    assert!(graph.incident_edges(4).is_empty());
    assert!(graph.incident_edges(100).is_empty());
}

#[test]
fn test_minimal_edges_sorted_and_deduplicated() {
    let graph = sample();
    assert_eq!(graph.minimal_edges(1), vec![Edge::new(0, 1, 1)]);
    assert_eq!(
        graph.minimal_edges(2),
        vec![Edge::new(1, 2, 2), Edge::new(2, 3, 2)]
    );
    assert_eq!(graph.minimal_edges(3), vec![Edge::new(0, 3, 5)]);
    assert!(graph.minimal_edges(6).is_empty());
}

#[test]
fn test_min_max() {
    let graph = sample();
    assert_eq!(graph.min_weight(), 1);
    assert_eq!(graph.max_weight(), 5);
}

#[test]
fn test_load_list() {
    let graph = ListGraph::from_list(vec![
        vec![(1, 4)],
        vec![(0, 4), (2, 6)],
        vec![(1, 6)],
    ])
    .unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.to_string(), "0:\t(1 4)\t\n1:\t(0 4)\t(2 6)\t\n2:\t(1 6)\t\n");
}

#[test]
fn test_load_rejects_invalid_input() {
    assert!(matches!(
        ListGraph::from_list(vec![vec![(1, 4)]]),
        Err(Error::InvalidGraph(ValidationError::TooFewVertices { vertices: 1 }))
    ));
    assert!(matches!(
        ListGraph::from_list(vec![vec![(1, 4)], vec![(0, 4)], vec![]]),
        Err(Error::InvalidGraph(ValidationError::IsolatedVertex { vertex: 2 }))
    ));
    assert!(matches!(
        ListGraph::from_edges(&[Edge::new(0, 1, 3), Edge::new(1, 0, 3)]),
        Err(Error::InvalidGraph(ValidationError::DuplicateEdge { start: 0, end: 1 }))
    ));
}

#[test]
fn test_failed_load_keeps_previous_contents() {
    let mut graph = sample();
    let before = graph.clone();
    assert!(graph.load_list(vec![vec![(0, 1)], vec![(0, 1)]]).is_err());
    assert_eq!(graph, before);
}

#[test]
fn test_to_matrix_preserves_edges() {
    let graph = sample();
    let matrix = graph.to_matrix().unwrap();
    assert_eq!(matrix.edges(), graph.edges());
    assert_eq!(matrix.weight(0, 3), Some(5));
}

#[test]
fn test_load_rejects_huge_vertex_ids() {
    for far in [usize::MAX, 1 << 40] {
        assert!(matches!(
            ListGraph::from_edges(&[Edge::new(0, far, 1)]),
            Err(Error::InvalidGraph(ValidationError::IsolatedVertex { vertex: 1 }))
        ));
    }
    assert!(matches!(
        ListGraph::from_edges(&[Edge::new(0, 1, 1), Edge::new(1, usize::MAX, 2)]),
        Err(Error::InvalidGraph(_))
    ));
}
