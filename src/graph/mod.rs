//! Undirected weighted graphs with interchangeable representations.
//!
//! Graph implementations are organized by representation:
//! - `matrix`: dense adjacency matrix
//! - `list`: per-vertex adjacency lists
//!
//! Both implement [`Graph`], the capability set every algorithm in this crate
//! is written against, and must answer every query identically for the same
//! edge set. Conversions between them go through [`GraphTranslator`].

pub mod edge;
pub mod generator;
pub mod io;
pub mod list;
pub mod matrix;
pub mod translator;
pub mod validator;

use core::fmt;
use core::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use edge::Edge;
pub use generator::GeneratorConfig;
pub use list::ListGraph;
pub use matrix::MatrixGraph;
pub use translator::GraphTranslator;
pub use validator::GraphValidator;

/// Vertex identifier. Vertices of a graph are the contiguous range `0..vertices()`.
pub type VertexId = usize;

/// Edge weight. Valid edges carry weights of at least 1; `0` means "no edge"
/// inside an adjacency matrix.
pub type Weight = u32;

/// The shared query and load contract of every graph representation.
///
/// A graph starts empty (0 vertices), is populated by one of the load
/// operations and is then treated as read-only by its consumers.
pub trait Graph {
    /// Which representation backs this graph.
    fn representation(&self) -> Representation;

    /// Number of vertices.
    fn vertices(&self) -> usize;

    /// Number of undirected edges.
    fn edge_count(&self) -> usize;

    /// Returns true if nothing has been loaded.
    fn is_empty(&self) -> bool {
        self.vertices() == 0
    }

    /// All edges touching `vertex`, oriented with `start == vertex`.
    ///
    /// An out-of-range vertex yields an empty vector rather than an error.
    fn incident_edges(&self, vertex: VertexId) -> Vec<Edge>;

    /// Every edge carrying the smallest stored weight that is `>= min_weight`.
    ///
    /// Each undirected edge appears once, oriented `start < end`, and the
    /// result is sorted by `(start, end)`. Empty when no such weight exists.
    fn minimal_edges(&self, min_weight: Weight) -> Vec<Edge>;

    /// Largest stored weight, `0` for an empty graph.
    fn max_weight(&self) -> Weight;

    /// Smallest stored weight, `0` for an empty graph.
    fn min_weight(&self) -> Weight;

    /// The de-duplicated undirected edge set, sorted by [`Edge`] order.
    fn edges(&self) -> Vec<Edge>;

    /// Replaces the contents with `edges`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidGraph`] if the edges, or the graph they
    /// describe, fail validation. The previous contents are kept on failure.
    fn load_edges(&mut self, edges: &[Edge]) -> Result<()>;

    /// A fresh, empty graph of the same representation.
    fn empty_like(&self) -> Self
    where
        Self: Sized;

    /// Replaces the contents with the edge set of `other`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidGraph`] if `other` is empty.
    fn load_graph<G: Graph + ?Sized>(&mut self, other: &G) -> Result<()>
    where
        Self: Sized,
    {
        self.load_edges(&other.edges())
    }

    /// Replaces the contents with a random connected graph.
    ///
    /// # Errors
    /// Returns [`Error::InvalidGraph`] if the configuration is out of range.
    fn generate(&mut self, config: &GeneratorConfig) -> Result<()>
    where
        Self: Sized,
    {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let edges = generator::generate_edges(config, &mut rng)?;
        self.load_edges(&edges)
    }

    /// Sum of all edge weights.
    fn total_weight(&self) -> u64 {
        self.edges().iter().map(|e| u64::from(e.weight())).sum()
    }
}

/// The closed set of graph representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Dense `V x V` adjacency matrix.
    Matrix,
    /// Per-vertex adjacency lists.
    List,
}

impl Representation {
    /// All supported representations.
    pub const ALL: [Representation; 2] = [Representation::Matrix, Representation::List];

    /// Instantiates an empty graph of this representation.
    pub fn empty(self) -> AnyGraph {
        match self {
            Representation::Matrix => AnyGraph::Matrix(MatrixGraph::new()),
            Representation::List => AnyGraph::List(ListGraph::new()),
        }
    }

    /// Lowercase name, as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Representation::Matrix => "matrix",
            Representation::List => "list",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Representation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "matrix" => Ok(Representation::Matrix),
            "list" => Ok(Representation::List),
            other => Err(Error::Unsupported(other.to_string())),
        }
    }
}

/// A graph whose representation is chosen at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyGraph {
    /// Adjacency-matrix backed graph.
    Matrix(MatrixGraph),
    /// Adjacency-list backed graph.
    List(ListGraph),
}

impl AnyGraph {
    /// Builds a graph of the given representation from `edges`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidGraph`] if the edges fail validation.
    pub fn from_edges(representation: Representation, edges: &[Edge]) -> Result<Self> {
        let mut graph = representation.empty();
        graph.load_edges(edges)?;
        Ok(graph)
    }

    /// Returns the matrix graph, if that is the active representation.
    pub fn as_matrix(&self) -> Option<&MatrixGraph> {
        match self {
            AnyGraph::Matrix(g) => Some(g),
            AnyGraph::List(_) => None,
        }
    }

    /// Returns the list graph, if that is the active representation.
    pub fn as_list(&self) -> Option<&ListGraph> {
        match self {
            AnyGraph::List(g) => Some(g),
            AnyGraph::Matrix(_) => None,
        }
    }

    /// Re-expresses the graph in `representation`, moving it when it already matches.
    ///
    /// # Errors
    /// Returns [`Error::InvalidGraph`] if a conversion is needed and the graph is empty.
    pub fn into_representation(self, representation: Representation) -> Result<Self> {
        if self.representation() == representation {
            return Ok(self);
        }
        let mut converted = representation.empty();
        converted.load_graph(&self)?;
        Ok(converted)
    }
}

impl Default for AnyGraph {
    fn default() -> Self {
        Representation::Matrix.empty()
    }
}

impl From<MatrixGraph> for AnyGraph {
    fn from(graph: MatrixGraph) -> Self {
        AnyGraph::Matrix(graph)
    }
}

impl From<ListGraph> for AnyGraph {
    fn from(graph: ListGraph) -> Self {
        AnyGraph::List(graph)
    }
}

macro_rules! delegate {
    ($self:ident, $g:ident => $body:expr) => {
        match $self {
            AnyGraph::Matrix($g) => $body,
            AnyGraph::List($g) => $body,
        }
    };
}

impl Graph for AnyGraph {
    fn representation(&self) -> Representation {
        delegate!(self, g => g.representation())
    }

    fn vertices(&self) -> usize {
        delegate!(self, g => g.vertices())
    }

    fn edge_count(&self) -> usize {
        delegate!(self, g => g.edge_count())
    }

    fn incident_edges(&self, vertex: VertexId) -> Vec<Edge> {
        delegate!(self, g => g.incident_edges(vertex))
    }

    fn minimal_edges(&self, min_weight: Weight) -> Vec<Edge> {
        delegate!(self, g => g.minimal_edges(min_weight))
    }

    fn max_weight(&self) -> Weight {
        delegate!(self, g => g.max_weight())
    }

    fn min_weight(&self) -> Weight {
        delegate!(self, g => g.min_weight())
    }

    fn edges(&self) -> Vec<Edge> {
        delegate!(self, g => g.edges())
    }

    fn load_edges(&mut self, edges: &[Edge]) -> Result<()> {
        delegate!(self, g => g.load_edges(edges))
    }

    fn empty_like(&self) -> Self {
        self.representation().empty()
    }
}

impl fmt::Display for AnyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        delegate!(self, g => fmt::Display::fmt(g, f))
    }
}
