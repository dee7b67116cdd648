//! Dense Prim oracle for spanning forest verification.
//!
//! Shares no code with the Kruskal implementation: it grows one tree per
//! component over an adjacency matrix holding the lightest parallel edge.

use crate::graph::Edge;

#[derive(Clone, Debug)]
pub(super) struct OracleForest {
    pub total_weight: f64,
    pub edge_count: usize,
    pub component_count: usize,
}

pub(super) fn prim_forest(node_count: usize, edges: &[Edge]) -> OracleForest {
    let mut matrix: Vec<Vec<Option<f64>>> = vec![vec![None; node_count]; node_count];
    for edge in edges {
        if !edge.is_within(node_count) || edge.source == edge.target {
            continue;
        }
        for (from, to) in [(edge.source, edge.target), (edge.target, edge.source)] {
            let slot = &mut matrix[from][to];
            if slot.is_none_or(|current| edge.weight < current) {
                *slot = Some(edge.weight);
            }
        }
    }

    let mut in_tree = vec![false; node_count];
    let mut best: Vec<Option<f64>> = vec![None; node_count];
    let mut forest = OracleForest {
        total_weight: 0.0,
        edge_count: 0,
        component_count: 0,
    };

    for _ in 0..node_count {
        let next = (0..node_count)
            .filter(|&node| !in_tree[node])
            .min_by(|&left, &right| match (best[left], best[right]) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => left.cmp(&right),
            });
        let Some(node) = next else { break };

        match best[node] {
            Some(weight) => {
                forest.total_weight += weight;
                forest.edge_count += 1;
            }
            None => forest.component_count += 1,
        }
        in_tree[node] = true;

        for (other, weight) in matrix[node].iter().enumerate() {
            if let Some(weight) = *weight {
                if !in_tree[other] && best[other].is_none_or(|current| weight < current) {
                    best[other] = Some(weight);
                }
            }
        }
    }
    forest
}
