//! Graph generators for spanning forest property tests.
//!
//! Each generator is driven by a seeded [`SmallRng`] so rstest cases can pin
//! a distribution and seed while proptest samples both.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::Edge;

use super::types::{MstFixture, WeightDistribution};

const MIN_NODES: usize = 4;
const MAX_NODES: usize = 48;
/// Dense graphs stay smaller to keep the edge count manageable.
const DENSE_MAX_NODES: usize = 24;

pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let (node_count, edges) = match distribution {
        WeightDistribution::Unique => {
            let nodes = rng.gen_range(MIN_NODES..=MAX_NODES);
            (nodes, random_pairs(rng, 0, nodes, 0.2..=0.6, continuous_weight))
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<f64> = (0..rng.gen_range(1..=3))
                .map(|_| f64::from(rng.gen_range(1_u8..=10)))
                .collect();
            let nodes = rng.gen_range(MIN_NODES..=MAX_NODES);
            let edges = random_pairs(rng, 0, nodes, 0.3..=0.7, |r| {
                pool[r.gen_range(0..pool.len())]
            });
            (nodes, edges)
        }
        WeightDistribution::Sparse => sparse(rng),
        WeightDistribution::Dense => {
            let nodes = rng.gen_range(MIN_NODES..=DENSE_MAX_NODES);
            (nodes, random_pairs(rng, 0, nodes, 0.7..=0.95, continuous_weight))
        }
        WeightDistribution::Disconnected => disconnected(rng),
    };

    MstFixture {
        node_count,
        edges,
        distribution,
    }
}

/// Weights with two decimal places in `[0.01, 100.0)`.
fn continuous_weight(rng: &mut SmallRng) -> f64 {
    f64::from(rng.gen_range(1_u32..10_000)) / 100.0
}

/// Adds each pair in `offset..offset + size` with a probability drawn from
/// `probability`, randomly flipping the orientation.
fn random_pairs(
    rng: &mut SmallRng,
    offset: usize,
    size: usize,
    probability: std::ops::RangeInclusive<f64>,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> Vec<Edge> {
    let edge_probability = rng.gen_range(probability);
    let mut edges = Vec::new();
    for left in offset..offset + size {
        for right in (left + 1)..offset + size {
            if rng.gen_bool(edge_probability) {
                let w = weight(rng);
                if rng.gen_bool(0.5) {
                    edges.push(Edge::new(left, right, w));
                } else {
                    edges.push(Edge::new(right, left, w));
                }
            }
        }
    }
    edges
}

fn sparse(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let nodes = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut order: Vec<usize> = (0..nodes).collect();
    for index in (1..order.len()).rev() {
        let other = rng.gen_range(0..=index);
        order.swap(index, other);
    }

    let mut edges: Vec<Edge> = order
        .windows(2)
        .map(|pair| Edge::new(pair[0], pair[1], continuous_weight(rng)))
        .collect();

    for _ in 0..rng.gen_range(nodes / 2..=nodes) {
        let left = rng.gen_range(0..nodes);
        let right = rng.gen_range(0..nodes);
        edges.push(Edge::new(left, right, continuous_weight(rng)));
    }
    (nodes, edges)
}

fn disconnected(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=12))
        .collect();
    let mut edges = Vec::new();
    let mut offset = 0;
    for size in sizes {
        edges.extend(random_pairs(rng, offset, size, 0.3..=0.8, continuous_weight));
        offset += size;
    }
    (offset, edges)
}
