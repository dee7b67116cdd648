//! Seeded synthetic inputs for the benchmarks.
//!
//! Every generator is deterministic for a given seed so runs stay comparable.

use classics_core::{Edge, OutEdge};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;
use crate::params::SequenceOrder;

const MAX_WEIGHT: f64 = 100.0;
const FEW_UNIQUE_KEYS: i64 = 8;

/// Parameters for a synthetic graph.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of nodes.
    pub node_count: usize,
    /// Arcs per node (directed) or edges per node (undirected).
    pub degree: usize,
    /// RNG seed.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    fn validate(&self) -> Result<usize, BenchSetupError> {
        if self.node_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "node_count",
            });
        }
        if self.degree == 0 {
            return Err(BenchSetupError::ZeroValue { context: "degree" });
        }
        self.node_count
            .checked_mul(self.degree)
            .ok_or(BenchSetupError::Overflow {
                node_count: self.node_count,
                degree: self.degree,
            })
    }
}

/// A directed graph where every node has `degree` arcs to random nodes.
///
/// # Errors
/// Returns [`BenchSetupError`] when a size is zero or the arc count overflows.
pub fn random_digraph(
    config: &SyntheticGraphConfig,
) -> Result<Vec<Vec<OutEdge>>, BenchSetupError> {
    config.validate()?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let graph = (0..config.node_count)
        .map(|_| {
            (0..config.degree)
                .map(|_| {
                    OutEdge::new(
                        rng.gen_range(0..config.node_count),
                        rng.gen_range(0.0..MAX_WEIGHT),
                    )
                })
                .collect()
        })
        .collect();
    Ok(graph)
}

/// A connected undirected edge list: a random-weight path through every node
/// plus random extra edges, `node_count * degree` edges in total.
///
/// # Errors
/// Returns [`BenchSetupError`] when a size is zero or the edge count overflows.
pub fn random_edges(config: &SyntheticGraphConfig) -> Result<Vec<Edge>, BenchSetupError> {
    let edge_count = config.validate()?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut edges = Vec::with_capacity(edge_count.max(config.node_count));
    for node in 1..config.node_count {
        edges.push(Edge::new(node - 1, node, rng.gen_range(0.0..MAX_WEIGHT)));
    }
    while edges.len() < edge_count {
        edges.push(Edge::new(
            rng.gen_range(0..config.node_count),
            rng.gen_range(0..config.node_count),
            rng.gen_range(0.0..MAX_WEIGHT),
        ));
    }
    Ok(edges)
}

/// A sequence of `len` integers arranged according to `order`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `len` is zero.
pub fn sequence(len: usize, order: SequenceOrder, seed: u64) -> Result<Vec<i64>, BenchSetupError> {
    if len == 0 {
        return Err(BenchSetupError::ZeroValue { context: "len" });
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    let values = match order {
        SequenceOrder::Random => (0..len).map(|_| rng.r#gen::<i64>()).collect(),
        SequenceOrder::Ascending => (0_i64..).take(len).collect(),
        SequenceOrder::Descending => {
            let mut values: Vec<i64> = (0_i64..).take(len).collect();
            values.reverse();
            values
        }
        SequenceOrder::FewUnique => (0..len)
            .map(|_| rng.gen_range(0..FEW_UNIQUE_KEYS))
            .collect(),
    };
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn config(node_count: usize, degree: usize) -> SyntheticGraphConfig {
        SyntheticGraphConfig {
            node_count,
            degree,
            seed: 7,
        }
    }

    #[rstest]
    #[case::no_nodes(0, 3, "node_count")]
    #[case::no_degree(3, 0, "degree")]
    fn zero_sizes_are_rejected(
        #[case] node_count: usize,
        #[case] degree: usize,
        #[case] context: &'static str,
    ) {
        let expected = BenchSetupError::ZeroValue { context };
        assert_eq!(random_digraph(&config(node_count, degree)).err(), Some(expected.clone()));
        assert_eq!(random_edges(&config(node_count, degree)).err(), Some(expected));
    }

    #[test]
    fn overflowing_sizes_are_rejected() {
        let err = random_edges(&config(usize::MAX, 2)).expect_err("size must overflow");
        assert!(matches!(err, BenchSetupError::Overflow { .. }));
    }

    #[test]
    fn digraph_has_requested_shape() {
        let graph = random_digraph(&config(50, 4)).expect("valid config");
        assert_eq!(graph.len(), 50);
        assert!(graph.iter().all(|arcs| arcs.len() == 4));
        assert!(graph.iter().flatten().all(|arc| arc.target < 50 && arc.weight >= 0.0));
    }

    #[test]
    fn edges_connect_every_node() {
        let edges = random_edges(&config(40, 3)).expect("valid config");
        assert_eq!(edges.len(), 120);
        assert!(classics_core::kruskal(40, &edges).is_tree());
    }

    #[test]
    fn generators_are_deterministic() {
        assert_eq!(random_edges(&config(30, 2)), random_edges(&config(30, 2)));
        assert_eq!(
            sequence(100, SequenceOrder::Random, 3),
            sequence(100, SequenceOrder::Random, 3)
        );
    }

    #[rstest]
    #[case::ascending(SequenceOrder::Ascending, vec![0, 1, 2, 3])]
    #[case::descending(SequenceOrder::Descending, vec![3, 2, 1, 0])]
    fn ordered_sequences(#[case] order: SequenceOrder, #[case] expected: Vec<i64>) {
        assert_eq!(sequence(4, order, 0).expect("valid length"), expected);
    }

    #[test]
    fn few_unique_sequences_repeat_keys() {
        let values = sequence(256, SequenceOrder::FewUnique, 11).expect("valid length");
        assert!(values.iter().all(|value| (0..FEW_UNIQUE_KEYS).contains(value)));
    }
}
