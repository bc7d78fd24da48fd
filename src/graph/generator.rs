//! Random connected graph generation.
//!
//! A generated graph always starts from the chain `0 - 1 - ... - (V-1)`, which
//! makes it connected and leaves no vertex isolated, and is then filled up with
//! random extra edges until the requested density is reached.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collections::SquareMatrix;
use crate::error::{Result, ValidationError};

use super::{Edge, Weight};

/// Parameters for [`Graph::generate`](super::Graph::generate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Vertex count, `2..=GeneratorConfig::MAX_VERTICES`.
    pub vertices: usize,
    /// Share of all possible vertex pairs that get an edge, in percent (`1..=100`).
    /// The chain is always kept, so sparse requests are rounded up to `V - 1` edges.
    pub density: u8,
    /// Upper bound for the uniformly drawn weights, at least 1.
    pub max_weight: Weight,
    /// Fixed RNG seed for reproducible graphs; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            vertices: 10,
            density: 50,
            max_weight: Weight::MAX,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Largest vertex count accepted; generation works on a dense `V x V` matrix.
    pub const MAX_VERTICES: usize = 4096;

    /// Checks the parameter ranges.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(2..=Self::MAX_VERTICES).contains(&self.vertices)
            || !(1..=100).contains(&self.density)
            || self.max_weight < 1
        {
            return Err(ValidationError::InvalidGenerator {
                vertices: self.vertices,
                density: self.density,
                max_weight: self.max_weight,
            });
        }
        Ok(())
    }

    /// Number of edges a graph generated from this configuration will have.
    pub fn edge_budget(&self) -> usize {
        calculate_edges(self.vertices, self.density)
    }
}

/// Edge count for `vertices` at `density` percent, never below `vertices - 1`.
///
/// `floor(density / 100 * V * (V - 1) / 2)`, computed in integers.
pub fn calculate_edges(vertices: usize, density: u8) -> usize {
    let pairs = (vertices as u128) * (vertices.saturating_sub(1) as u128);
    let wanted = pairs * u128::from(density.min(100)) / 200;
    usize::try_from(wanted)
        .unwrap_or(usize::MAX)
        .max(vertices.saturating_sub(1))
}

/// Draws a random connected edge set.
///
/// # Errors
/// Returns [`crate::Error::InvalidGraph`] if `config` fails
/// [`GeneratorConfig::validate`].
pub fn generate_edges<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<Vec<Edge>> {
    config.validate()?;
    let vertices = config.vertices;
    let budget = config.edge_budget();

    let mut matrix: SquareMatrix<Weight> = SquareMatrix::new(vertices);
    let mut degree = vec![0usize; vertices];

    for i in 0..vertices - 1 {
        let weight = rng.gen_range(1..=config.max_weight);
        matrix.set_symmetric(i, i + 1, weight);
        degree[i] += 1;
        degree[i + 1] += 1;
    }

    // `budget <= V(V-1)/2`, so some vertex has free capacity while extras remain.
    let mut candidates = Vec::with_capacity(vertices);
    for _ in 0..budget - (vertices - 1) {
        let start = loop {
            let v = rng.gen_range(0..vertices);
            if degree[v] < vertices - 1 {
                break v;
            }
        };

        candidates.clear();
        candidates.extend(
            (0..vertices).filter(|&j| j != start && matrix.get(start, j) == Some(&0)),
        );
        let Some(&end) = candidates.choose(rng) else {
            continue;
        };

        let weight = rng.gen_range(1..=config.max_weight);
        matrix.set_symmetric(start, end, weight);
        degree[start] += 1;
        degree[end] += 1;
    }

    let edges: Vec<Edge> = matrix
        .cells()
        .filter(|&(i, j, &w)| i < j && w != 0)
        .map(|(i, j, &w)| Edge::new(i, j, w))
        .collect();
    debug!(vertices, edges = edges.len(), density = config.density, "generated random graph");
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::graph::{Graph, GraphValidator, MatrixGraph};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config(vertices: usize, density: u8) -> GeneratorConfig {
        GeneratorConfig {
            vertices,
            density,
            max_weight: 20,
            seed: Some(42),
        }
    }

    #[test]
    fn test_calculate_edges() {
        assert_eq!(calculate_edges(10, 100), 45);
        assert_eq!(calculate_edges(10, 50), 22);
        // Never below the chain.
        assert_eq!(calculate_edges(10, 1), 9);
        assert_eq!(calculate_edges(2, 1), 1);
    }

    #[test]
    fn test_rejects_out_of_range_parameters() {
        let mut rng = StdRng::seed_from_u64(1);
        for bad in [config(1, 50), config(5, 0), config(5, 101)] {
            assert!(generate_edges(&bad, &mut rng).is_err());
        }
        let zero_weight = GeneratorConfig { max_weight: 0, ..config(5, 50) };
        assert!(matches!(
            zero_weight.validate(),
            Err(ValidationError::InvalidGenerator { max_weight: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_vertex_count_above_cap() {
        let too_many = config(1_000_000, 1);
        assert!(matches!(
            generate_edges(&too_many, &mut StdRng::seed_from_u64(1)),
            Err(Error::InvalidGraph(ValidationError::InvalidGenerator { vertices: 1_000_000, .. }))
        ));
        assert!(config(GeneratorConfig::MAX_VERTICES, 1).validate().is_ok());
        assert!(config(GeneratorConfig::MAX_VERTICES + 1, 1).validate().is_err());
    }

    #[test]
    fn test_generated_graph_is_valid_and_connected() {
        let mut rng = StdRng::seed_from_u64(3);
        for density in [1, 30, 75, 100] {
            let cfg = config(15, density);
            let edges = generate_edges(&cfg, &mut rng).unwrap();
            assert_eq!(edges.len(), cfg.edge_budget());
            assert!(edges.iter().all(|e| (1..=20).contains(&e.weight())));

            let graph = MatrixGraph::from_edges(&edges).unwrap();
            assert_eq!(graph.vertices(), 15);
            assert!(GraphValidator::is_connected(&graph));
        }
    }

    #[test]
    fn test_same_seed_same_edges() {
        let cfg = config(30, 40);
        let a = generate_edges(&cfg, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = generate_edges(&cfg, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let cfg: GeneratorConfig = serde_json::from_str(r#"{"vertices": 6, "seed": 1}"#).unwrap();
        assert_eq!(cfg.vertices, 6);
        assert_eq!(cfg.density, 50);
        assert_eq!(cfg.max_weight, Weight::MAX);
        assert_eq!(cfg.seed, Some(1));
    }
}
