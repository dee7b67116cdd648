//! Fixture types for spanning forest property tests.

use test_strategy::Arbitrary;

use crate::graph::Edge;

/// Weight distribution used when generating a fixture.
#[derive(Arbitrary, Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Every edge draws its own weight from a continuous range.
    #[weight(2)]
    Unique,
    /// Edges share a handful of weights, so ties dominate the sort.
    #[weight(3)]
    ManyIdentical,
    /// A random spanning path plus roughly `n / 2` to `n` extra edges.
    #[weight(2)]
    Sparse,
    /// Edge probability between 0.7 and 0.95.
    #[weight(2)]
    Dense,
    /// Two to five components with no edges between them.
    #[weight(2)]
    Disconnected,
}

/// Generated graph plus the distribution that produced it, kept together so
/// failures report their full context.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    pub node_count: usize,
    pub edges: Vec<Edge>,
    pub distribution: WeightDistribution,
}
