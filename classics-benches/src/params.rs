//! Labels for parameterised benchmark runs.

use std::fmt;

/// Size of a graph benchmark input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphBenchParams {
    /// Number of nodes.
    pub node_count: usize,
    /// Arcs leaving each node, or edges per node for undirected graphs.
    pub degree: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},deg={}", self.node_count, self.degree)
    }
}

/// Shape of a sequence benchmark input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceBenchParams {
    /// Number of elements.
    pub len: usize,
    /// Initial arrangement of the elements.
    pub order: SequenceOrder,
}

/// Initial arrangement of a generated sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceOrder {
    /// Uniformly random values.
    Random,
    /// Already ascending.
    Ascending,
    /// Strictly descending.
    Descending,
    /// Random values drawn from a handful of keys.
    FewUnique,
}

impl fmt::Display for SequenceOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Random => "random",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::FewUnique => "few_unique",
        })
    }
}

impl fmt::Display for SequenceBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "len={},{}", self.len, self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_compact() {
        let graph = GraphBenchParams {
            node_count: 1_000,
            degree: 8,
        };
        assert_eq!(graph.to_string(), "n=1000,deg=8");

        let sequence = SequenceBenchParams {
            len: 64,
            order: SequenceOrder::FewUnique,
        };
        assert_eq!(sequence.to_string(), "len=64,few_unique");
    }
}
