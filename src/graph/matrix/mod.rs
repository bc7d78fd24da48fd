//! Adjacency-matrix graph.
//!
//! Stores a dense symmetric `V x V` grid of weights where `0` means "no
//! edge". Whole-graph queries are a single pass over contiguous rows; the
//! upper triangle is enough to enumerate each undirected edge once.
//!
//! ### Performance Characteristics
//! | Operation | Complexity |
//! |-----------|------------|
//! | `vertices`, `edge_count` | \(O(1)\) |
//! | `incident_edges` | \(O(V)\) |
//! | `minimal_edges`, `min_weight`, `max_weight` | \(O(V^2)\) |
//! | `load_edges` | \(O(V^2 + E)\) |

use core::fmt;

use tracing::debug;

use crate::collections::SquareMatrix;
use crate::error::{Result, ValidationError};

use super::translator::{self, GraphTranslator};
use super::{Edge, Graph, GraphValidator, ListGraph, Representation, VertexId, Weight};

/// An undirected weighted graph backed by an adjacency matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixGraph {
    matrix: SquareMatrix<Weight>,
    edges: usize,
}

impl MatrixGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from an edge collection.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidGraph`] if validation fails.
    pub fn from_edges(edges: &[Edge]) -> Result<Self> {
        let mut graph = Self::new();
        graph.load_edges(edges)?;
        Ok(graph)
    }

    /// Builds a graph from raw matrix rows.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidGraph`] if the rows are not a valid
    /// symmetric adjacency matrix.
    pub fn from_matrix(rows: Vec<Vec<Weight>>) -> Result<Self> {
        let mut graph = Self::new();
        graph.load_matrix(rows)?;
        Ok(graph)
    }

    /// Replaces the contents with raw matrix rows.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidGraph`] if the rows are not square,
    /// symmetric and loop-free with every vertex connected to something.
    pub fn load_matrix(&mut self, rows: Vec<Vec<Weight>>) -> Result<()> {
        GraphValidator::validate_square(&rows)?;
        let expected = rows.len();
        let matrix = SquareMatrix::from_rows(rows).ok_or(ValidationError::NotSquare {
            row: 0,
            len: 0,
            expected,
        })?;
        GraphValidator::validate_matrix(&matrix)?;
        self.commit(matrix);
        Ok(())
    }

    /// Weight of the edge between `a` and `b`, if there is one.
    pub fn weight(&self, a: VertexId, b: VertexId) -> Option<Weight> {
        self.matrix.get(a, b).copied().filter(|&w| w != 0)
    }

    /// Returns true if `a` and `b` are adjacent.
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.weight(a, b).is_some()
    }

    /// Degree of `vertex`, `0` when out of range.
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.matrix
            .row(vertex)
            .map_or(0, |row| row.iter().filter(|&&w| w != 0).count())
    }

    /// The underlying storage.
    pub fn matrix(&self) -> &SquareMatrix<Weight> {
        &self.matrix
    }

    /// Copies the matrix out as nested rows.
    pub fn matrix_rows(&self) -> Vec<Vec<Weight>> {
        self.matrix.to_rows()
    }

    /// Converts to the adjacency-list representation.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidGraph`] if this graph is empty.
    pub fn to_list(&self) -> Result<ListGraph> {
        GraphTranslator::matrix_to_list(self)
    }

    fn commit(&mut self, matrix: SquareMatrix<Weight>) {
        self.edges = matrix.cells().filter(|&(i, j, &w)| i < j && w != 0).count();
        self.matrix = matrix;
        debug!(vertices = self.vertices(), edges = self.edges, "matrix graph loaded");
    }

    /// Stored weights, each undirected edge once.
    fn upper_triangle(&self) -> impl Iterator<Item = (VertexId, VertexId, Weight)> + '_ {
        self.matrix
            .cells()
            .filter(|&(i, j, &w)| i < j && w != 0)
            .map(|(i, j, &w)| (i, j, w))
    }
}

impl Graph for MatrixGraph {
    fn representation(&self) -> Representation {
        Representation::Matrix
    }

    fn vertices(&self) -> usize {
        self.matrix.order()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn incident_edges(&self, vertex: VertexId) -> Vec<Edge> {
        let Some(row) = self.matrix.row(vertex) else {
            return Vec::new();
        };
        row.iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0)
            .map(|(j, &w)| Edge::new(vertex, j, w))
            .collect()
    }

    fn minimal_edges(&self, min_weight: Weight) -> Vec<Edge> {
        let Some(minimum) = self
            .upper_triangle()
            .map(|(_, _, w)| w)
            .filter(|&w| w >= min_weight)
            .min()
        else {
            return Vec::new();
        };
        // Row-major over the upper triangle is already (start, end) order.
        self.upper_triangle()
            .filter(|&(_, _, w)| w == minimum)
            .map(|(i, j, w)| Edge::new(i, j, w))
            .collect()
    }

    fn max_weight(&self) -> Weight {
        self.matrix.cells().map(|(_, _, &w)| w).max().unwrap_or(0)
    }

    fn min_weight(&self) -> Weight {
        self.matrix
            .cells()
            .map(|(_, _, &w)| w)
            .filter(|&w| w != 0)
            .min()
            .unwrap_or(0)
    }

    fn edges(&self) -> Vec<Edge> {
        translator::collect_matrix_edges(&self.matrix)
    }

    fn load_edges(&mut self, edges: &[Edge]) -> Result<()> {
        GraphValidator::validate_edges(edges)?;
        // Bounded by `2 * edges.len()` once validated.
        let order = edges
            .iter()
            .map(|e| e.start().max(e.end()))
            .max()
            .map_or(0, |max_vertex| max_vertex + 1);

        let mut matrix = SquareMatrix::new(order);
        for edge in edges {
            matrix.set_symmetric(edge.start(), edge.end(), edge.weight());
        }
        GraphValidator::validate_matrix(&matrix)?;
        self.commit(matrix);
        Ok(())
    }

    fn empty_like(&self) -> Self {
        Self::new()
    }
}

impl fmt::Display for MatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.matrix.rows() {
            for weight in row {
                write!(f, "{weight}\t")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
