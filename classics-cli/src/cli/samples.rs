//! Fixed demo inputs shared by the demo commands and `classics sample`.

use classics_core::Algorithm;

use super::document::{
    ArcDocument, BsearchDocument, DijkstraDocument, EdgeDocument, InputDocument, KruskalDocument,
    MergesortDocument, TopsortDocument,
};

/// The odd numbers 1 to 19, searched by the `bsearch` demo.
pub const SEARCH_VALUES: [i32; 10] = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

/// Target searched for when `bsearch` gets no argument.
pub const DEFAULT_SEARCH_TARGET: i32 = 7;

/// Extra targets probed after the requested one.
pub const EXTRA_SEARCH_PROBES: [i64; 4] = [4, 11, 20, 0];

/// Values sorted when `mergesort` gets no arguments.
pub const DEFAULT_SORT_VALUES: [i32; 8] = [64, 34, 25, 12, 22, 11, 90, 5];

const fn arc(to: usize, w: f64) -> ArcDocument {
    ArcDocument { to, w }
}

const fn edge(u: usize, v: usize, w: f64) -> EdgeDocument {
    EdgeDocument { u, v, w }
}

/// `0→1 (2), 0→2 (5), 1→2 (1), 1→3 (2), 2→3 (1)`, searched from 0 to 3.
#[must_use]
pub fn dijkstra() -> DijkstraDocument {
    DijkstraDocument {
        graph: vec![
            vec![arc(1, 2.0), arc(2, 5.0)],
            vec![arc(2, 1.0), arc(3, 2.0)],
            vec![arc(3, 1.0)],
            vec![],
        ],
        start: 0,
        target: 3,
    }
}

/// Five nodes, seven undirected edges; the minimum spanning tree weighs 8.
#[must_use]
pub fn kruskal() -> KruskalDocument {
    KruskalDocument {
        n: 5,
        edges: vec![
            edge(0, 1, 4.0),
            edge(0, 2, 3.0),
            edge(1, 2, 1.0),
            edge(1, 3, 2.0),
            edge(2, 3, 4.0),
            edge(3, 4, 2.0),
            edge(2, 4, 5.0),
        ],
    }
}

/// Course prerequisites: intro before data structures, which precedes
/// algorithms and databases, both of which precede web development.
#[must_use]
pub fn course_prerequisites() -> TopsortDocument {
    TopsortDocument {
        graph: vec![vec![1], vec![2, 3], vec![4], vec![4], vec![]],
    }
}

/// Course titles for [`course_prerequisites`], indexed by node id.
pub const COURSE_TITLES: [&str; 5] = [
    "Intro to Programming",
    "Data Structures",
    "Algorithms",
    "Databases",
    "Web Development",
];

/// `0→1→2→0`.
#[must_use]
pub fn three_cycle() -> TopsortDocument {
    TopsortDocument {
        graph: vec![vec![1], vec![2], vec![0]],
    }
}

/// [`SEARCH_VALUES`] searched for [`DEFAULT_SEARCH_TARGET`].
#[must_use]
pub fn bsearch() -> BsearchDocument {
    BsearchDocument {
        arr: SEARCH_VALUES.map(f64::from).to_vec(),
        target: f64::from(DEFAULT_SEARCH_TARGET),
    }
}

/// [`DEFAULT_SORT_VALUES`] as a merge sort document.
#[must_use]
pub fn mergesort() -> MergesortDocument {
    MergesortDocument {
        arr: DEFAULT_SORT_VALUES.map(f64::from).to_vec(),
    }
}

/// The demo document for `algorithm`.
#[must_use]
pub fn document_for(algorithm: Algorithm) -> InputDocument {
    match algorithm {
        Algorithm::Dijkstra => InputDocument::Dijkstra(dijkstra()),
        Algorithm::Kruskal => InputDocument::Kruskal(kruskal()),
        Algorithm::TopologicalSort => InputDocument::Topsort(course_prerequisites()),
        Algorithm::BinarySearch => InputDocument::Bsearch(bsearch()),
        Algorithm::MergeSort => InputDocument::Mergesort(mergesort()),
    }
}
