//! Benchmark setup error type.

/// Errors raised while generating benchmark inputs.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum BenchSetupError {
    /// A size parameter was zero.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was zero.
        context: &'static str,
    },
    /// `node_count * degree` does not fit in `usize`.
    #[error("edge count for {node_count} nodes of degree {degree} overflows usize")]
    Overflow {
        /// Requested node count.
        node_count: usize,
        /// Requested per-node degree.
        degree: usize,
    },
}
