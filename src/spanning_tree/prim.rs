//! Prim's algorithm over an ordered edge frontier.
//!
//! The tree grows from a start vertex. Each round pushes the incident edges
//! of every vertex reached so far into an ordered set and accepts the lightest
//! edge whose far endpoint is not yet part of the tree.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::error::{Error, Result, ValidationError};
use crate::graph::{Edge, Graph, VertexId};

use super::{ensure_loaded, MinimumSpanningTree};

/// Prim's minimum spanning tree, grown from `start`.
///
/// Among frontier edges of equal weight the one first in [`Edge`]'s order
/// wins, which compares the normalized pair `(min, max)`, not the stored
/// direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Prim {
    start: VertexId,
}

impl Prim {
    /// Grows the tree from `start`.
    pub const fn new(start: VertexId) -> Self {
        Self { start }
    }

    /// The vertex the tree is grown from.
    pub const fn start(&self) -> VertexId {
        self.start
    }
}

impl MinimumSpanningTree for Prim {
    fn name(&self) -> &'static str {
        "prim"
    }

    fn tree_edges<G: Graph + ?Sized>(&self, graph: &G) -> Result<Vec<Edge>> {
        let vertices = ensure_loaded(graph)?;
        if self.start >= vertices {
            return Err(Error::UnknownVertex {
                vertex: self.start,
                vertices,
            });
        }
        debug!(vertices, start = self.start, "prim started");

        let mut included = BTreeSet::from([self.start]);
        // Endpoints of accepted edges.
        let mut joined = vec![false; vertices];
        // Never pruned: stale edges are skipped by the `joined` check.
        let mut frontier: BTreeSet<Edge> = BTreeSet::new();
        let mut tree = Vec::with_capacity(vertices - 1);

        while included.len() < vertices {
            for &vertex in &included {
                frontier.extend(graph.incident_edges(vertex));
            }

            let Some(edge) = frontier.iter().find(|e| !joined[e.end()]).copied() else {
                debug!(reached = included.len(), vertices, "prim frontier exhausted");
                return Err(ValidationError::Disconnected {
                    reached: included.len(),
                    vertices,
                }
                .into());
            };
            trace!(%edge, "accepted");

            joined[edge.start()] = true;
            joined[edge.end()] = true;
            included.insert(edge.start());
            included.insert(edge.end());
            tree.push(edge);
        }
        Ok(tree)
    }
}
