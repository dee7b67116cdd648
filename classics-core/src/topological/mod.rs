//! Topological ordering with Kahn's algorithm.
//!
//! Nodes with no incoming arcs are queued in ascending id order; draining the
//! queue releases successors whose in-degree reaches zero. If any node is
//! never released the graph contains a cycle.

use std::collections::VecDeque;

use tracing::{debug, instrument};

/// Orders the nodes of `graph` so every arc `u -> v` has `u` before `v`.
///
/// `graph[u]` lists the successors of `u`. Returns `None` when the graph
/// contains a cycle; which nodes form the cycle is not reported. Successor
/// ids outside `0..graph.len()` are ignored.
///
/// Nodes that become available together are emitted in discovery order,
/// starting from the in-degree-zero nodes in ascending id order.
///
/// # Examples
/// ```
/// use classics_core::topological_sort;
///
/// let courses = vec![vec![1], vec![2, 3], vec![4], vec![4], vec![]];
/// assert_eq!(topological_sort(&courses), Some(vec![0, 1, 2, 3, 4]));
///
/// let cycle = vec![vec![1], vec![2], vec![0]];
/// assert_eq!(topological_sort(&cycle), None);
/// ```
#[must_use]
#[instrument(
    name = "topological.sort",
    level = "debug",
    skip(graph),
    fields(nodes = graph.len())
)]
pub fn topological_sort(graph: &[Vec<usize>]) -> Option<Vec<usize>> {
    let node_count = graph.len();
    let mut in_degree = vec![0_usize; node_count];
    for successors in graph {
        for &successor in successors {
            if let Some(degree) = in_degree.get_mut(successor) {
                *degree += 1;
            }
        }
    }

    let mut ready: VecDeque<usize> = (0..node_count)
        .filter(|&node| in_degree[node] == 0)
        .collect();
    let mut order = Vec::with_capacity(node_count);

    while let Some(node) = ready.pop_front() {
        order.push(node);
        for &successor in &graph[node] {
            let Some(degree) = in_degree.get_mut(successor) else {
                continue;
            };
            *degree -= 1;
            if *degree == 0 {
                ready.push_back(successor);
            }
        }
    }

    if order.len() == node_count {
        Some(order)
    } else {
        debug!(
            ordered = order.len(),
            blocked = node_count - order.len(),
            "cycle detected"
        );
        None
    }
}
