//! Adjacency-list graph.
//!
//! Every vertex owns an ordered sequence of `(neighbor, weight)` links. An
//! undirected edge contributes one link to each endpoint, so the two halves
//! are always kept in step by the load operations.

use core::fmt;

use tracing::debug;

use crate::error::Result;

use super::translator::{self, GraphTranslator};
use super::{Edge, Graph, GraphValidator, MatrixGraph, Representation, VertexId, Weight};

/// One adjacency-list entry: `(neighbor, weight)`.
pub type Link = (VertexId, Weight);

/// An undirected weighted graph backed by adjacency lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListGraph {
    adjacency: Vec<Vec<Link>>,
    edges: usize,
}

impl ListGraph {
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

    /// Builds a graph from raw adjacency lists.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidGraph`] if the lists fail validation.
    pub fn from_list(list: Vec<Vec<Link>>) -> Result<Self> {
        let mut graph = Self::new();
        graph.load_list(list)?;
        Ok(graph)
    }

    /// Replaces the contents with raw adjacency lists.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidGraph`] if a list is empty, refers to
    /// itself or an unknown vertex, repeats a neighbor, carries weight 0, or
    /// lacks its mirror entry.
    pub fn load_list(&mut self, list: Vec<Vec<Link>>) -> Result<()> {
        GraphValidator::validate_list(&list)?;
        self.commit(list);
        Ok(())
    }

    /// Links of `vertex`, or `None` when out of range.
    pub fn neighbors(&self, vertex: VertexId) -> Option<&[Link]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Degree of `vertex`, `0` when out of range.
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency.get(vertex).map_or(0, Vec::len)
    }

    /// The raw adjacency lists.
    pub fn adjacency(&self) -> &[Vec<Link>] {
        &self.adjacency
    }

    /// Converts to the adjacency-matrix representation.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidGraph`] if this graph is empty.
    pub fn to_matrix(&self) -> Result<MatrixGraph> {
        GraphTranslator::list_to_matrix(self)
    }

    fn commit(&mut self, adjacency: Vec<Vec<Link>>) {
        self.edges = adjacency.iter().map(Vec::len).sum::<usize>() / 2;
        self.adjacency = adjacency;
        debug!(vertices = self.vertices(), edges = self.edges, "list graph loaded");
    }

    fn links(&self) -> impl Iterator<Item = (VertexId, VertexId, Weight)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(v, links)| links.iter().map(move |&(n, w)| (v, n, w)))
    }
}

/// Appends the two halves of an undirected edge.
fn insert_connection(list: &mut [Vec<Link>], start: VertexId, end: VertexId, weight: Weight) {
    list[start].push((end, weight));
    list[end].push((start, weight));
}

impl Graph for ListGraph {
    fn representation(&self) -> Representation {
        Representation::List
    }

    fn vertices(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn incident_edges(&self, vertex: VertexId) -> Vec<Edge> {
        self.adjacency.get(vertex).map_or_else(Vec::new, |links| {
            links.iter().map(|&(n, w)| Edge::new(vertex, n, w)).collect()
        })
    }

    fn minimal_edges(&self, min_weight: Weight) -> Vec<Edge> {
        let Some(minimum) = self
            .links()
            .map(|(_, _, w)| w)
            .filter(|&w| w >= min_weight)
            .min()
        else {
            return Vec::new();
        };
        // Each edge is stored twice; keep the half seen from the smaller vertex.
        let mut tier: Vec<Edge> = self
            .links()
            .filter(|&(v, n, w)| w == minimum && v < n)
            .map(|(v, n, w)| Edge::new(v, n, w))
            .collect();
        tier.sort_unstable_by_key(|e| (e.start(), e.end()));
        tier
    }

    fn max_weight(&self) -> Weight {
        self.links().map(|(_, _, w)| w).max().unwrap_or(0)
    }

    fn min_weight(&self) -> Weight {
        self.links().map(|(_, _, w)| w).min().unwrap_or(0)
    }

    fn edges(&self) -> Vec<Edge> {
        translator::collect_list_edges(&self.adjacency)
    }

    fn load_edges(&mut self, edges: &[Edge]) -> Result<()> {
        GraphValidator::validate_edges(edges)?;
        // Bounded by `2 * edges.len()` once validated.
        let len = edges
            .iter()
            .map(|e| e.start().max(e.end()))
            .max()
            .map_or(0, |max_vertex| max_vertex + 1);

        let mut list = vec![Vec::new(); len];
        for edge in edges {
            insert_connection(&mut list, edge.start(), edge.end(), edge.weight());
        }
        GraphValidator::validate_list(&list)?;
        self.commit(list);
        Ok(())
    }

    fn empty_like(&self) -> Self {
        Self::new()
    }
}

impl fmt::Display for ListGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, links) in self.adjacency.iter().enumerate() {
            write!(f, "{vertex}:\t")?;
            for (neighbor, weight) in links {
                write!(f, "({neighbor} {weight})\t")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
