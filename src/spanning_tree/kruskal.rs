//! Kruskal's algorithm driven by weight tiers.
//!
//! Instead of sorting every edge up front, the graph is asked for one tier at
//! a time: all edges of the smallest weight `>= t`, starting at `t = 1` and
//! moving to `t = tier weight + 1`. Each candidate joins the tree iff its
//! endpoints are still in different components of a [`DisjointSet`].

use tracing::{debug, trace};

use crate::collections::DisjointSet;
use crate::error::{Result, ValidationError};
use crate::graph::{Edge, Graph, Weight};

use super::{ensure_loaded, MinimumSpanningTree};

/// Kruskal's minimum spanning tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Kruskal;

impl MinimumSpanningTree for Kruskal {
    fn name(&self) -> &'static str {
        "kruskal"
    }

    fn tree_edges<G: Graph + ?Sized>(&self, graph: &G) -> Result<Vec<Edge>> {
        let vertices = ensure_loaded(graph)?;
        let target = vertices - 1;
        debug!(vertices, edges = graph.edge_count(), "kruskal started");

        let mut components = DisjointSet::new(vertices);
        let mut tree = Vec::with_capacity(target);
        let mut threshold: Option<Weight> = Some(1);

        while tree.len() < target {
            let tier = threshold.map(|t| graph.minimal_edges(t)).unwrap_or_default();
            let Some(weight) = tier.first().map(Edge::weight) else {
                let reached = component_size(&mut components, 0);
                debug!(reached, vertices, "kruskal ran out of edges");
                return Err(ValidationError::Disconnected { reached, vertices }.into());
            };
            trace!(weight, candidates = tier.len(), "kruskal tier");

            for edge in tier {
                if tree.len() == target {
                    break;
                }
                if components.union(edge.start(), edge.end()) {
                    trace!(%edge, "accepted");
                    tree.push(edge);
                } else {
                    trace!(%edge, "rejected, closes a cycle");
                }
            }
            threshold = weight.checked_add(1);
        }
        Ok(tree)
    }
}

/// Number of vertices sharing a component with `vertex`.
fn component_size(components: &mut DisjointSet, vertex: usize) -> usize {
    (0..components.len())
        .filter(|&v| components.connected(vertex, v))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::graph::{ListGraph, MatrixGraph};

    #[test]
    fn test_square_cycle() {
        let graph = MatrixGraph::from_edges(&[
            Edge::new(0, 1, 1),
            Edge::new(1, 2, 2),
            Edge::new(2, 3, 3),
            Edge::new(3, 0, 4),
        ])
        .unwrap();
        let edges = Kruskal.tree_edges(&graph).unwrap();
        assert_eq!(edges, vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(2, 3, 3)]);
    }

    #[test]
    fn test_equal_weights_skip_cycle() {
        // Triangle of equal weights plus a pendant: exactly one triangle edge is dropped.
        let graph = ListGraph::from_edges(&[
            Edge::new(0, 1, 5),
            Edge::new(1, 2, 5),
            Edge::new(0, 2, 5),
            Edge::new(2, 3, 9),
        ])
        .unwrap();
        let tree = Kruskal.spanning_tree(&graph).unwrap();
        assert_eq!(tree.edges(), vec![Edge::new(0, 1, 5), Edge::new(0, 2, 5), Edge::new(2, 3, 9)]);
        assert_eq!(tree.total_weight(), 19);
    }

    #[test]
    fn test_two_vertices() {
        let graph = MatrixGraph::from_edges(&[Edge::new(1, 0, 7)]).unwrap();
        let tree = Kruskal.spanning_tree(&graph).unwrap();
        assert_eq!(tree.edges(), vec![Edge::new(0, 1, 7)]);
    }

    #[test]
    fn test_max_weight_tier_terminates() {
        let graph = MatrixGraph::from_edges(&[
            Edge::new(0, 1, Weight::MAX),
            Edge::new(1, 2, Weight::MAX),
        ])
        .unwrap();
        assert_eq!(Kruskal.tree_edges(&graph).unwrap().len(), 2);
    }

    #[test]
    fn test_disconnected_graph_is_rejected() {
        let graph = ListGraph::from_edges(&[
            Edge::new(0, 1, 1),
            Edge::new(1, 2, 1),
            Edge::new(3, 4, 2),
        ])
        .unwrap();
        assert!(matches!(
            Kruskal.tree_edges(&graph),
            Err(Error::InvalidGraph(ValidationError::Disconnected { reached: 3, vertices: 5 }))
        ));
    }
}
