//! Storage primitives backing the graph representations and algorithms.
//!
//! - `matrix`: dense square matrix used by the adjacency-matrix graph
//! - `disjoint_set`: union-find used by Kruskal's component tracking

pub mod disjoint_set;
pub mod matrix;

pub use disjoint_set::DisjointSet;
pub use matrix::SquareMatrix;
