//! # `spanwood` - Weighted Graphs and Minimum Spanning Trees
//!
//! Undirected, positively weighted graphs in two interchangeable
//! representations, and the two classic minimum spanning tree algorithms
//! written against the capability trait they share.
//!
//! ## Guarantees
//!
//! ### Representation Independence
//! - **One contract**: [`MatrixGraph`] and [`ListGraph`] both implement
//!   [`Graph`] and answer every query identically for the same edge set,
//!   including the order of [`Graph::minimal_edges`].
//! - **Lossless conversion**: [`GraphTranslator`] moves a graph between
//!   representations through its de-duplicated edge set.
//!
//! ### Validated Loads
//! - **No partial state**: every load validates first and leaves the previous
//!   contents untouched on failure.
//! - **Structural invariants**: at least two vertices, no self-loops, no
//!   duplicate undirected edges, no zero weights, no isolated vertices,
//!   symmetric storage.
//!
//! ### Terminating Algorithms
//! - [`Kruskal`] and [`Prim`] either return exactly `V - 1` tree edges or an
//!   error; a disconnected input is reported, never looped on.
//!
//! ## Architecture
//!
//! 1. **Storage** ([`collections`]): a dense square matrix and a disjoint set.
//! 2. **Graphs** ([`graph`]): the [`Edge`] value type, the two representations,
//!    validation, translation, random generation and text/JSON persistence.
//! 3. **Algorithms** ([`spanning_tree`]): strategies implementing
//!    [`MinimumSpanningTree`], returning a tree of the input's representation.
//!
//! ## Example
//!
//! ```rust
//! use spanwood::{Edge, Graph, MatrixGraph, MinimumSpanningTree, Prim};
//!
//! let graph = MatrixGraph::from_edges(&[
//!     Edge::new(0, 1, 1),
//!     Edge::new(1, 2, 2),
//!     Edge::new(2, 3, 3),
//!     Edge::new(3, 0, 4),
//! ])?;
//!
//! let tree = Prim::default().spanning_tree(&graph)?;
//! assert_eq!(tree.edge_count(), 3);
//! assert!(!tree.has_edge(3, 0));
//! # Ok::<(), spanwood::Error>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;
pub mod spanning_tree;

pub use collections::{DisjointSet, SquareMatrix};
pub use error::{Error, Result, ValidationError};
pub use graph::io::GraphFormat;
pub use graph::{
    AnyGraph, Edge, GeneratorConfig, Graph, GraphTranslator, GraphValidator, ListGraph,
    MatrixGraph, Representation, VertexId, Weight,
};
pub use spanning_tree::{Kruskal, MinimumSpanningTree, Prim, Strategy};

// Compile-time assertions for layout and thread-safety claims.
const _: () = {
    use core::mem;

    const fn assert_send_sync<T: Send + Sync>() {}

    // Edges stay small plain values.
    assert!(mem::size_of::<Edge>() <= 3 * mem::size_of::<usize>());

    assert_send_sync::<MatrixGraph>();
    assert_send_sync::<ListGraph>();
    assert_send_sync::<AnyGraph>();
    assert_send_sync::<Error>();
};
