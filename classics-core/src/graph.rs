//! Plain edge records shared by the graph algorithms.
//!
//! Graphs are not wrapped in an owning type: a directed graph is a slice of
//! adjacency lists indexed by node id, and an undirected graph is a node count
//! plus an edge slice. Node ids are dense integers in `0..n`.

/// A weighted arc in a directed adjacency list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutEdge {
    /// Node the arc points at.
    pub target: usize,
    /// Non-negative traversal cost.
    pub weight: f64,
}

impl OutEdge {
    /// Creates an arc towards `target` with the given `weight`.
    #[must_use]
    pub const fn new(target: usize, weight: f64) -> Self {
        Self { target, weight }
    }
}

/// A weighted undirected edge.
///
/// The orientation of `source` and `target` carries no meaning; it is kept
/// as supplied so selected edges can be reported back verbatim.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// One endpoint.
    pub source: usize,
    /// The other endpoint.
    pub target: usize,
    /// Edge weight.
    pub weight: f64,
}

impl Edge {
    /// Creates an edge between `source` and `target`.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns `true` when both endpoints lie in `0..node_count`.
    #[must_use]
    pub const fn is_within(&self, node_count: usize) -> bool {
        self.source < node_count && self.target < node_count
    }
}
