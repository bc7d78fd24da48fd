//! Error types for graph loading, validation and spanning-tree construction.
//!
//! Structural problems with a graph are reported as [`ValidationError`] and
//! wrapped in [`Error::InvalidGraph`] when they surface from a load or an
//! algorithm. None of these errors are retried internally: graph algorithms
//! are deterministic, so the only recovery is to fix the input and resubmit.

use crate::graph::{VertexId, Weight};

/// Convenient alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Primary error type for graph operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input does not describe a valid undirected, positively weighted graph.
    #[error("invalid graph: {0}")]
    InvalidGraph(#[from] ValidationError),

    /// A vertex index outside `0..vertices` was supplied where a valid one is required.
    #[error("unknown vertex {vertex} (graph has {vertices} vertices)")]
    UnknownVertex {
        /// The offending vertex.
        vertex: VertexId,
        /// Vertex count of the graph it was checked against.
        vertices: usize,
    },

    /// A representation name outside the supported set was requested.
    #[error("unsupported graph representation `{0}`")]
    Unsupported(String),

    /// A text graph could not be parsed.
    #[error("corrupted graph file at line {line}: {reason}")]
    FileCorrupted {
        /// 1-based line number of the failure.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// Reading or writing a graph failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON graph document could not be encoded or decoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Structural invariant violations detected by the validators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No edges, no rows or an unloaded graph.
    #[error("graph is empty")]
    Empty,

    /// Fewer than two vertices can never form a valid graph.
    #[error("graph needs at least 2 vertices, got {vertices}")]
    TooFewVertices {
        /// Vertex count found.
        vertices: usize,
    },

    /// Weights must be at least 1.
    #[error("edge {start}-{end} has weight 0")]
    ZeroWeight {
        /// First endpoint.
        start: VertexId,
        /// Second endpoint.
        end: VertexId,
    },

    /// An edge or entry connects a vertex to itself.
    #[error("self-loop on vertex {vertex}")]
    SelfLoop {
        /// The looping vertex.
        vertex: VertexId,
    },

    /// Two edges connect the same unordered vertex pair.
    #[error("duplicate edge between {start} and {end}")]
    DuplicateEdge {
        /// First endpoint.
        start: VertexId,
        /// Second endpoint.
        end: VertexId,
    },

    /// A matrix row does not have one cell per vertex.
    #[error("matrix row {row} has {len} cells, expected {expected}")]
    NotSquare {
        /// Row index.
        row: usize,
        /// Cells found.
        len: usize,
        /// Cells expected.
        expected: usize,
    },

    /// `m[row][col] != m[col][row]`, or a list entry has no matching mirror entry.
    #[error("asymmetric entry at ({row}, {col})")]
    Asymmetric {
        /// Row (or owning vertex).
        row: VertexId,
        /// Column (or neighbor).
        col: VertexId,
    },

    /// A vertex has no incident edge.
    #[error("vertex {vertex} is isolated")]
    IsolatedVertex {
        /// The isolated vertex.
        vertex: VertexId,
    },

    /// A list entry refers to a vertex that does not exist.
    #[error("vertex {vertex} refers to neighbor {neighbor} outside 0..{vertices}")]
    NeighborOutOfRange {
        /// Owning vertex.
        vertex: VertexId,
        /// The out-of-range neighbor.
        neighbor: VertexId,
        /// Vertex count.
        vertices: usize,
    },

    /// Not every vertex is reachable from vertex 0.
    #[error("graph is disconnected: {reached} of {vertices} vertices reachable")]
    Disconnected {
        /// Vertices reached before the search or algorithm ran dry.
        reached: usize,
        /// Vertex count.
        vertices: usize,
    },

    /// Random generation parameters are out of range.
    #[error("invalid generator parameters: {vertices} vertices, density {density}%, max weight {max_weight}")]
    InvalidGenerator {
        /// Requested vertex count.
        vertices: usize,
        /// Requested density in percent.
        density: u8,
        /// Requested maximum weight.
        max_weight: Weight,
    },
}
