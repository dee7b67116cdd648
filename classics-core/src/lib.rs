//! Classic graph, search and sorting algorithms.
//!
//! Graphs are plain owned data: adjacency lists of [`OutEdge`] for shortest
//! paths, `Vec<Vec<usize>>` successor lists for topological ordering, and
//! [`Edge`] lists for spanning forests. "No answer" outcomes such as an
//! unreachable node or a cyclic graph are reported as `None` rather than as
//! errors.

mod algorithm;
mod error;
mod graph;
mod heap;
mod mst;
mod search;
mod shortest_path;
mod sort;
mod topological;
mod union_find;

#[cfg(test)]
mod test_utils;

pub use crate::{
    algorithm::Algorithm,
    error::{AlgorithmError, AlgorithmErrorCode, ExpectedNames, Result},
    graph::{Edge, OutEdge},
    heap::MinHeap,
    mst::{SpanningForest, kruskal},
    search::{binary_search, equal_range, lower_bound, upper_bound},
    shortest_path::{ShortestPaths, dijkstra, reconstruct_path},
    sort::{merge_sort, merge_sort_in_place},
    topological::topological_sort,
    union_find::DisjointSetUnion,
};
