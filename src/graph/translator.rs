//! Lossless conversion between graph representations.
//!
//! Every conversion goes through one intermediate view: the set of undirected
//! edges, collected into a `HashSet<Edge>` so that the two stored halves of
//! an edge (matrix cells `[i][j]` and `[j][i]`, or the two list links) collapse
//! into one.

use std::collections::HashSet;

use crate::collections::SquareMatrix;
use crate::error::Result;

use super::list::Link;
use super::{Edge, Graph, GraphValidator, ListGraph, MatrixGraph, Weight};

/// Converts between adjacency matrices, adjacency lists and edge sets.
pub struct GraphTranslator;

impl GraphTranslator {
    /// The undirected edge set of a raw matrix.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidGraph`] if the matrix fails validation.
    pub fn matrix_to_edges(matrix: &SquareMatrix<Weight>) -> Result<Vec<Edge>> {
        GraphValidator::validate_matrix(matrix)?;
        Ok(collect_matrix_edges(matrix))
    }

    /// The undirected edge set of raw adjacency lists.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidGraph`] if the lists fail validation.
    pub fn list_to_edges(list: &[Vec<Link>]) -> Result<Vec<Edge>> {
        GraphValidator::validate_list(list)?;
        Ok(collect_list_edges(list))
    }

    /// Rebuilds a matrix graph as adjacency lists.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidGraph`] if `graph` is empty.
    pub fn matrix_to_list(graph: &MatrixGraph) -> Result<ListGraph> {
        let edges = Self::matrix_to_edges(graph.matrix())?;
        ListGraph::from_edges(&edges)
    }

    /// Rebuilds a list graph as an adjacency matrix.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidGraph`] if `graph` is empty.
    pub fn list_to_matrix(graph: &ListGraph) -> Result<MatrixGraph> {
        let edges = Self::list_to_edges(graph.adjacency())?;
        MatrixGraph::from_edges(&edges)
    }

    /// Edge triples `[start, end, weight]` of any graph, one row per edge.
    pub fn to_triples<G: Graph + ?Sized>(graph: &G) -> Vec<[u64; 3]> {
        graph.edges().iter().map(Edge::to_array).collect()
    }
}

pub(crate) fn collect_matrix_edges(matrix: &SquareMatrix<Weight>) -> Vec<Edge> {
    let edges: HashSet<Edge> = matrix
        .cells()
        .filter(|&(_, _, &w)| w != 0)
        .map(|(i, j, &w)| Edge::new(i, j, w))
        .collect();
    into_sorted(edges)
}

pub(crate) fn collect_list_edges(list: &[Vec<Link>]) -> Vec<Edge> {
    let edges: HashSet<Edge> = list
        .iter()
        .enumerate()
        .flat_map(|(v, links)| links.iter().map(move |&(n, w)| Edge::new(v, n, w)))
        .collect();
    into_sorted(edges)
}

/// Sorts by `Edge` order and orients every edge `start < end`, so the output
/// does not depend on which half of an edge the set happened to keep.
fn into_sorted(edges: HashSet<Edge>) -> Vec<Edge> {
    let mut edges: Vec<Edge> = edges
        .into_iter()
        .map(|e| if e.start() > e.end() { e.reversed() } else { e })
        .collect();
    edges.sort_unstable();
    edges
}
