//! Minimum spanning trees over any [`Graph`].
//!
//! Strategies only talk to the graph through the [`Graph`] trait, and hand
//! back a fresh graph of the same representation holding exactly the
//! `V - 1` tree edges:
//!
//! ```rust
//! use spanwood::graph::{Edge, Graph, ListGraph};
//! use spanwood::spanning_tree::{Kruskal, MinimumSpanningTree};
//!
//! let graph = ListGraph::from_edges(&[
//!     Edge::new(0, 1, 1),
//!     Edge::new(1, 2, 2),
//!     Edge::new(2, 3, 3),
//!     Edge::new(3, 0, 4),
//! ])?;
//! let tree = Kruskal.spanning_tree(&graph)?;
//! assert_eq!(tree.edge_count(), 3);
//! assert_eq!(tree.total_weight(), 6);
//! # Ok::<(), spanwood::Error>(())
//! ```
//!
//! Neither strategy checks connectivity up front. Run
//! [`GraphValidator::validate_connected`](crate::graph::GraphValidator::validate_connected)
//! first when the input is untrusted; a disconnected graph that slips through
//! is reported as [`ValidationError::Disconnected`] instead of a partial forest.

pub mod kruskal;
pub mod prim;

use core::fmt;
use core::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result, ValidationError};
use crate::graph::{Edge, Graph};

pub use kruskal::Kruskal;
pub use prim::Prim;

/// A minimum spanning tree construction strategy.
pub trait MinimumSpanningTree {
    /// Short lowercase name, used in logs and reports.
    fn name(&self) -> &'static str;

    /// The `V - 1` edges of a minimum spanning tree of `graph`, in the order
    /// they were accepted.
    ///
    /// # Errors
    /// Returns [`Error::InvalidGraph`] for an empty or disconnected graph.
    fn tree_edges<G: Graph + ?Sized>(&self, graph: &G) -> Result<Vec<Edge>>;

    /// A new graph of the same representation as `graph` holding only the
    /// tree edges.
    ///
    /// # Errors
    /// See [`MinimumSpanningTree::tree_edges`].
    fn spanning_tree<G: Graph>(&self, graph: &G) -> Result<G> {
        let edges = self.tree_edges(graph)?;
        let mut tree = graph.empty_like();
        tree.load_edges(&edges)?;
        debug!(
            strategy = self.name(),
            vertices = tree.vertices(),
            total_weight = tree.total_weight(),
            "spanning tree complete"
        );
        Ok(tree)
    }
}

/// Runtime choice between the two strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Threshold-scan Kruskal.
    Kruskal(Kruskal),
    /// Frontier-growing Prim.
    Prim(Prim),
}

impl Strategy {
    /// Both strategies with default settings.
    pub const ALL: [Strategy; 2] = [Strategy::Kruskal(Kruskal), Strategy::Prim(Prim::new(0))];
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Kruskal(Kruskal)
    }
}

impl MinimumSpanningTree for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::Kruskal(s) => s.name(),
            Strategy::Prim(s) => s.name(),
        }
    }

    fn tree_edges<G: Graph + ?Sized>(&self, graph: &G) -> Result<Vec<Edge>> {
        match self {
            Strategy::Kruskal(s) => s.tree_edges(graph),
            Strategy::Prim(s) => s.tree_edges(graph),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    /// Accepts `kruskal`, `prim`, or `prim:<start vertex>`.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        let unsupported = || Error::Unsupported(name.clone());
        match name.split_once(':') {
            None if name == "kruskal" => Ok(Strategy::Kruskal(Kruskal)),
            None if name == "prim" => Ok(Strategy::Prim(Prim::default())),
            Some(("prim", start)) => start
                .parse()
                .map(|start| Strategy::Prim(Prim::new(start)))
                .map_err(|_| unsupported()),
            _ => Err(unsupported()),
        }
    }
}

/// Vertex count of a loaded graph; an unloaded graph has no spanning tree.
fn ensure_loaded<G: Graph + ?Sized>(graph: &G) -> Result<usize> {
    match graph.vertices() {
        0 => Err(ValidationError::Empty.into()),
        vertices => Ok(vertices),
    }
}
