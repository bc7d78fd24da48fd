//! Structural invariant checks shared by both representations.
//!
//! None of the structural checks look at global connectivity: a disconnected
//! graph passes them. Callers that need a spanning tree should run
//! [`GraphValidator::validate_connected`] first.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::collections::SquareMatrix;
use crate::error::ValidationError;

use super::{Edge, Graph, VertexId, Weight};

/// Validators for edge collections and raw representations.
pub struct GraphValidator;

impl GraphValidator {
    /// Checks a flat edge collection.
    ///
    /// Fails if the slice is empty, an edge has weight 0, an edge is a
    /// self-loop, or two edges connect the same unordered vertex pair
    /// (whatever their weights).
    ///
    /// Also fails with [`ValidationError::IsolatedVertex`] when the largest
    /// endpoint implies more vertices than `2 * edges.len()` can cover, so
    /// callers may size their storage from it.
    pub fn validate_edges(edges: &[Edge]) -> Result<(), ValidationError> {
        if edges.is_empty() {
            return Err(ValidationError::Empty);
        }

        let mut seen = HashSet::with_capacity(edges.len());
        let mut max_vertex = 0;
        for edge in edges {
            if edge.weight() < 1 {
                return Err(ValidationError::ZeroWeight {
                    start: edge.start(),
                    end: edge.end(),
                });
            }
            if edge.is_loop() {
                return Err(ValidationError::SelfLoop { vertex: edge.start() });
            }
            if !seen.insert(edge.pair()) {
                let (start, end) = edge.pair();
                return Err(ValidationError::DuplicateEdge { start, end });
            }
            max_vertex = max_vertex.max(edge.start()).max(edge.end());
        }

        // Every vertex needs an incident edge, so `V <= 2E`.
        let coverable = edges.len().saturating_mul(2);
        if max_vertex >= coverable {
            let touched: HashSet<VertexId> = seen.iter().flat_map(|&(a, b)| [a, b]).collect();
            let vertex = (0..=coverable).find(|v| !touched.contains(v)).unwrap_or(coverable);
            return Err(ValidationError::IsolatedVertex { vertex });
        }
        Ok(())
    }

    /// Checks that nested rows form a square matrix.
    pub fn validate_square(rows: &[Vec<Weight>]) -> Result<(), ValidationError> {
        let expected = rows.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(ValidationError::NotSquare {
                    row,
                    len: cells.len(),
                    expected,
                });
            }
        }
        Ok(())
    }

    /// Checks an adjacency matrix: at least 2 vertices, loop-free, symmetric,
    /// and every row has a nonzero entry.
    pub fn validate_matrix(matrix: &SquareMatrix<Weight>) -> Result<(), ValidationError> {
        let vertices = matrix.order();
        check_vertex_count(vertices)?;

        for (i, row) in matrix.rows().enumerate() {
            let mut degree = 0usize;
            for (j, &weight) in row.iter().enumerate() {
                if weight == 0 {
                    continue;
                }
                if i == j {
                    return Err(ValidationError::SelfLoop { vertex: i });
                }
                if matrix.get(j, i) != Some(&weight) {
                    return Err(ValidationError::Asymmetric { row: i, col: j });
                }
                degree += 1;
            }
            if degree == 0 {
                return Err(ValidationError::IsolatedVertex { vertex: i });
            }
        }
        Ok(())
    }

    /// Checks adjacency lists: at least 2 vertices, no empty list, no zero
    /// weight, no self-reference, neighbors in range, no repeated neighbor,
    /// and every entry mirrored with the same weight.
    pub fn validate_list(list: &[Vec<(VertexId, Weight)>]) -> Result<(), ValidationError> {
        let vertices = list.len();
        check_vertex_count(vertices)?;

        let mut entries: HashMap<(VertexId, VertexId), Weight> = HashMap::new();
        for (vertex, links) in list.iter().enumerate() {
            if links.is_empty() {
                return Err(ValidationError::IsolatedVertex { vertex });
            }
            for &(neighbor, weight) in links {
                if neighbor >= vertices {
                    return Err(ValidationError::NeighborOutOfRange {
                        vertex,
                        neighbor,
                        vertices,
                    });
                }
                if neighbor == vertex {
                    return Err(ValidationError::SelfLoop { vertex });
                }
                if weight == 0 {
                    return Err(ValidationError::ZeroWeight {
                        start: vertex,
                        end: neighbor,
                    });
                }
                if entries.insert((vertex, neighbor), weight).is_some() {
                    return Err(ValidationError::DuplicateEdge {
                        start: vertex.min(neighbor),
                        end: vertex.max(neighbor),
                    });
                }
            }
        }

        for (&(vertex, neighbor), weight) in &entries {
            if entries.get(&(neighbor, vertex)) != Some(weight) {
                return Err(ValidationError::Asymmetric {
                    row: vertex,
                    col: neighbor,
                });
            }
        }
        Ok(())
    }

    /// Returns true if every vertex is reachable from vertex 0.
    pub fn is_connected<G: Graph + ?Sized>(graph: &G) -> bool {
        let vertices = graph.vertices();
        vertices > 0 && reachable_from_first(graph) == vertices
    }

    /// Fails unless the graph is loaded and connected.
    ///
    /// Spanning-tree construction assumes connectivity; this is the upstream
    /// guard for it.
    pub fn validate_connected<G: Graph + ?Sized>(graph: &G) -> Result<(), ValidationError> {
        let vertices = graph.vertices();
        if vertices == 0 {
            return Err(ValidationError::Empty);
        }
        let reached = reachable_from_first(graph);
        if reached == vertices {
            Ok(())
        } else {
            Err(ValidationError::Disconnected { reached, vertices })
        }
    }
}

fn check_vertex_count(vertices: usize) -> Result<(), ValidationError> {
    match vertices {
        0 => Err(ValidationError::Empty),
        1 => Err(ValidationError::TooFewVertices { vertices }),
        _ => Ok(()),
    }
}

/// Breadth-first search from vertex 0; returns how many vertices it reached.
fn reachable_from_first<G: Graph + ?Sized>(graph: &G) -> usize {
    let len = graph.vertices();
    if len == 0 {
        return 0;
    }
    let mut visited = vec![false; len];
    let mut queue = VecDeque::new();
    visited[0] = true;
    queue.push_back(0);
    let mut reached = 0;

    while let Some(u) = queue.pop_front() {
        reached += 1;
        for edge in graph.incident_edges(u) {
            let v = edge.end();
            if v < len && !visited[v] {
                visited[v] = true;
                queue.push_back(v);
            }
        }
    }
    reached
}
