//! Minimum spanning tree/forest construction with Kruskal's algorithm.
//!
//! Edges are copied, sorted ascending by weight, and accepted whenever they
//! join two components of a [`DisjointSetUnion`]. A disconnected input
//! produces a minimum spanning forest with one tree per component.

#[cfg(test)]
mod property;

use tracing::{debug, instrument};

use crate::{graph::Edge, union_find::DisjointSetUnion};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    total_weight: f64,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the accepted edges in ascending-weight acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Consumes the forest, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

/// Computes a minimum spanning forest over `node_count` nodes.
///
/// The edges are treated as undirected and reported exactly as supplied.
/// Ties between equal weights keep their input order, though callers should
/// not rely on which of several equal-weight edges is selected. Self-loops are
/// never selected, and edges touching a node outside `0..node_count` are
/// skipped.
///
/// # Examples
/// ```
/// use classics_core::{Edge, kruskal};
///
/// let edges = [
///     Edge::new(0, 1, 4.0),
///     Edge::new(0, 2, 3.0),
///     Edge::new(1, 2, 1.0),
///     Edge::new(1, 3, 2.0),
///     Edge::new(2, 3, 4.0),
///     Edge::new(3, 4, 2.0),
///     Edge::new(2, 4, 5.0),
/// ];
/// let forest = kruskal(5, &edges);
/// assert_eq!(forest.total_weight(), 8.0);
/// assert_eq!(forest.edges().len(), 4);
/// assert!(forest.is_tree());
/// ```
#[must_use]
#[instrument(
    name = "mst.kruskal",
    level = "debug",
    skip(edges),
    fields(edges = edges.len())
)]
pub fn kruskal(node_count: usize, edges: &[Edge]) -> SpanningForest {
    let mut sorted: Vec<Edge> = edges
        .iter()
        .copied()
        .filter(|edge| edge.is_within(node_count))
        .collect();
    sorted.sort_by(|left, right| left.weight.total_cmp(&right.weight));

    let mut components = DisjointSetUnion::new(node_count);
    let mut accepted = Vec::with_capacity(node_count.saturating_sub(1));
    let mut total_weight = 0.0;

    for edge in sorted {
        if components.component_count() <= 1 {
            break;
        }
        if components.union(edge.source, edge.target) {
            total_weight += edge.weight;
            accepted.push(edge);
        }
    }

    debug!(
        accepted = accepted.len(),
        components = components.component_count(),
        "spanning forest built"
    );
    SpanningForest {
        edges: accepted,
        total_weight,
        component_count: components.component_count(),
    }
}
