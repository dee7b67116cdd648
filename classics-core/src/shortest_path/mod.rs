//! Single-source shortest paths with Dijkstra's algorithm.
//!
//! The priority queue is a [`MinHeap`] without decrease-key. When a node's
//! distance improves a fresh `(distance, node)` entry is pushed, and entries
//! whose priority no longer matches the node's best distance are discarded as
//! they are popped.
//!
//! Edge weights must be non-negative. Negative weights are not detected and
//! may yield distances that are not minimal. Arcs pointing outside the graph
//! are skipped rather than rejected, so malformed input degrades to a partial
//! answer instead of a panic.

use tracing::{debug, instrument};

use crate::{graph::OutEdge, heap::MinHeap};

/// Distances and predecessors produced by [`dijkstra`].
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    start: usize,
    dist: Vec<Option<f64>>,
    prev: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Node the search started from.
    #[must_use]
    #[rustfmt::skip]
    pub fn start(&self) -> usize { self.start }

    /// Best-known distance per node; `None` marks an unreachable node.
    #[must_use]
    #[rustfmt::skip]
    pub fn distances(&self) -> &[Option<f64>] { &self.dist }

    /// Predecessor per node on its shortest path; `None` for the start node
    /// and for unreachable nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn predecessors(&self) -> &[Option<usize>] { &self.prev }

    /// Distance from the start to `node`, or `None` when `node` is unreachable
    /// or outside the graph.
    #[must_use]
    pub fn distance(&self, node: usize) -> Option<f64> {
        self.dist.get(node).copied().flatten()
    }

    /// Shortest path from the start to `target`, both inclusive.
    #[must_use]
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        reconstruct_path(&self.prev, self.start, target)
    }

    /// Consumes the result, returning the distance and predecessor vectors.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Option<f64>>, Vec<Option<usize>>) {
        (self.dist, self.prev)
    }
}

/// Computes shortest distances from `start` to every node of `graph`.
///
/// `graph[u]` lists the arcs leaving `u`. Runs in `O((n + e) log n)`.
///
/// A `start` outside `0..graph.len()` yields a result where every node is
/// unreachable.
///
/// # Examples
/// ```
/// use classics_core::{OutEdge, dijkstra};
///
/// let graph = vec![
///     vec![OutEdge::new(1, 2.0), OutEdge::new(2, 5.0)],
///     vec![OutEdge::new(2, 1.0), OutEdge::new(3, 2.0)],
///     vec![OutEdge::new(3, 1.0)],
///     vec![],
/// ];
/// let paths = dijkstra(&graph, 0);
/// assert_eq!(paths.distances(), &[Some(0.0), Some(2.0), Some(3.0), Some(4.0)]);
/// assert_eq!(paths.distance(3), Some(4.0));
/// ```
#[must_use]
#[instrument(
    name = "shortest_path.dijkstra",
    level = "debug",
    skip(graph),
    fields(nodes = graph.len())
)]
pub fn dijkstra(graph: &[Vec<OutEdge>], start: usize) -> ShortestPaths {
    let node_count = graph.len();
    let mut dist: Vec<Option<f64>> = vec![None; node_count];
    let mut prev: Vec<Option<usize>> = vec![None; node_count];

    let Some(slot) = dist.get_mut(start) else {
        debug!(start, "start node lies outside the graph");
        return ShortestPaths { start, dist, prev };
    };
    *slot = Some(0.0);

    let mut queue = MinHeap::with_capacity(node_count);
    queue.push(0.0, start);
    let mut stale = 0_usize;

    while let Some((distance, node)) = queue.pop() {
        if dist[node] != Some(distance) {
            stale += 1;
            continue;
        }

        for arc in &graph[node] {
            let Some(best) = dist.get_mut(arc.target) else {
                continue;
            };
            let candidate = distance + arc.weight;
            if best.is_none_or(|current| candidate < current) {
                *best = Some(candidate);
                prev[arc.target] = Some(node);
                queue.push(candidate, arc.target);
            }
        }
    }

    debug!(
        reachable = dist.iter().filter(|entry| entry.is_some()).count(),
        stale, "shortest paths settled"
    );
    ShortestPaths { start, dist, prev }
}

/// Rebuilds the path from `start` to `target` out of a predecessor table.
///
/// Returns `None` when `target` is outside the table, unreachable, or when the
/// predecessor chain never arrives at `start`. `target == start` yields the
/// single-node path.
///
/// # Examples
/// ```
/// use classics_core::reconstruct_path;
///
/// let prev = [None, Some(0), Some(1), Some(1), None];
/// assert_eq!(reconstruct_path(&prev, 0, 3), Some(vec![0, 1, 3]));
/// assert_eq!(reconstruct_path(&prev, 0, 0), Some(vec![0]));
/// assert_eq!(reconstruct_path(&prev, 0, 4), None);
/// ```
#[must_use]
pub fn reconstruct_path(prev: &[Option<usize>], start: usize, target: usize) -> Option<Vec<usize>> {
    if target >= prev.len() {
        return None;
    }

    let mut path = vec![target];
    let mut current = target;
    // A well-formed chain visits each node at most once.
    while current != start && path.len() <= prev.len() {
        current = prev.get(current).copied().flatten()?;
        path.push(current);
    }

    if current != start {
        return None;
    }
    path.reverse();
    Some(path)
}
