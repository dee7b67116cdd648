//! JSON input documents, their validation and the result envelope.
//!
//! Field names match the interactive demo page (`to`/`w` arcs, `u`/`v`/`w`
//! edges, `arr`/`target` arrays) so documents can be copied between the two.
//! Validation happens here, before any core algorithm sees the data.

use classics_core::{
    Algorithm, Edge, OutEdge, binary_search, dijkstra, kruskal, lower_bound, merge_sort,
    topological_sort, upper_bound,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{Span, field, instrument};

/// Largest `n` a spanning-forest document may declare.
pub const MAX_NODES: usize = 1 << 20;

/// A weighted arc of a Dijkstra document.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcDocument {
    /// Node the arc points at.
    pub to: usize,
    /// Arc weight.
    pub w: f64,
}

/// Input for a shortest-path run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DijkstraDocument {
    /// Adjacency lists indexed by node id.
    pub graph: Vec<Vec<ArcDocument>>,
    /// Source node.
    pub start: usize,
    /// Node whose path is reported.
    pub target: usize,
}

impl DijkstraDocument {
    /// Converts the adjacency lists into core arcs.
    #[must_use]
    pub fn to_graph(&self) -> Vec<Vec<OutEdge>> {
        self.graph
            .iter()
            .map(|arcs| arcs.iter().map(|arc| OutEdge::new(arc.to, arc.w)).collect())
            .collect()
    }
}

/// An undirected weighted edge of a Kruskal document.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeDocument {
    /// One endpoint.
    pub u: usize,
    /// The other endpoint.
    pub v: usize,
    /// Edge weight.
    pub w: f64,
}

impl From<EdgeDocument> for Edge {
    fn from(edge: EdgeDocument) -> Self {
        Self::new(edge.u, edge.v, edge.w)
    }
}

impl From<Edge> for EdgeDocument {
    fn from(edge: Edge) -> Self {
        Self {
            u: edge.source,
            v: edge.target,
            w: edge.weight,
        }
    }
}

/// Input for a spanning-forest run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KruskalDocument {
    /// Number of nodes.
    pub n: usize,
    /// Undirected edges.
    pub edges: Vec<EdgeDocument>,
}

impl KruskalDocument {
    /// Converts the edge list into core edges.
    #[must_use]
    pub fn to_edges(&self) -> Vec<Edge> {
        self.edges.iter().copied().map(Edge::from).collect()
    }
}

/// Input for a topological sort.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopsortDocument {
    /// Successor lists indexed by node id.
    pub graph: Vec<Vec<usize>>,
}

/// Input for a binary search. `arr` must already be ascending.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BsearchDocument {
    /// Ascending values to search.
    pub arr: Vec<f64>,
    /// Value to look for.
    pub target: f64,
}

/// Input for a merge sort.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergesortDocument {
    /// Values to sort.
    pub arr: Vec<f64>,
}

/// Any of the five input documents.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InputDocument {
    /// Shortest-path input.
    Dijkstra(DijkstraDocument),
    /// Spanning-forest input.
    Kruskal(KruskalDocument),
    /// Topological sort input.
    Topsort(TopsortDocument),
    /// Binary search input.
    Bsearch(BsearchDocument),
    /// Merge sort input.
    Mergesort(MergesortDocument),
}

impl InputDocument {
    /// Decodes `value` as the document shape expected by `algorithm`.
    ///
    /// # Errors
    /// Returns [`DocumentError::Json`] when `value` does not have that shape.
    pub fn from_value(algorithm: Algorithm, value: Value) -> Result<Self, DocumentError> {
        let kind = algorithm.as_str();
        let wrap = |source| DocumentError::Json { kind, source };
        Ok(match algorithm {
            Algorithm::Dijkstra => Self::Dijkstra(serde_json::from_value(value).map_err(wrap)?),
            Algorithm::Kruskal => Self::Kruskal(serde_json::from_value(value).map_err(wrap)?),
            Algorithm::TopologicalSort => {
                Self::Topsort(serde_json::from_value(value).map_err(wrap)?)
            }
            Algorithm::BinarySearch => Self::Bsearch(serde_json::from_value(value).map_err(wrap)?),
            Algorithm::MergeSort => Self::Mergesort(serde_json::from_value(value).map_err(wrap)?),
        })
    }

    /// The algorithm this document feeds.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Self::Dijkstra(_) => Algorithm::Dijkstra,
            Self::Kruskal(_) => Algorithm::Kruskal,
            Self::Topsort(_) => Algorithm::TopologicalSort,
            Self::Bsearch(_) => Algorithm::BinarySearch,
            Self::Mergesort(_) => Algorithm::MergeSort,
        }
    }

    /// Checks node counts, node references, weights and values.
    ///
    /// Sortedness of a search array is left to the caller.
    ///
    /// # Errors
    /// Returns the first [`DocumentError`] found, scanning in document order.
    pub fn validate(&self) -> Result<(), DocumentError> {
        match self {
            Self::Dijkstra(doc) => validate_dijkstra(doc),
            Self::Kruskal(doc) => validate_kruskal(doc),
            Self::Topsort(doc) => validate_topsort(doc),
            Self::Bsearch(doc) => {
                check_values(&doc.arr)?;
                check_value(|| "target".to_owned(), doc.target)
            }
            Self::Mergesort(doc) => check_values(&doc.arr),
        }
    }

    /// Runs the matching algorithm. Call [`Self::validate`] first.
    #[must_use]
    pub fn evaluate(&self) -> Outcome {
        match self {
            Self::Dijkstra(doc) => {
                let paths = dijkstra(&doc.to_graph(), doc.start);
                Outcome::Dijkstra(DijkstraOutcome {
                    path: paths.path_to(doc.target),
                    cost: paths.distance(doc.target),
                    dist: paths.distances().to_vec(),
                })
            }
            Self::Kruskal(doc) => {
                let forest = kruskal(doc.n, &doc.to_edges());
                Outcome::Kruskal(KruskalOutcome {
                    total_weight: forest.total_weight(),
                    edges: forest.edges().iter().copied().map(EdgeDocument::from).collect(),
                })
            }
            Self::Topsort(doc) => Outcome::Topsort(TopsortOutcome {
                order: topological_sort(&doc.graph),
            }),
            Self::Bsearch(doc) => {
                let index = binary_search(&doc.arr, &doc.target);
                Outcome::Bsearch(BsearchOutcome {
                    index,
                    lower_bound: lower_bound(&doc.arr, &doc.target),
                    upper_bound: upper_bound(&doc.arr, &doc.target),
                    found: index.is_some(),
                })
            }
            Self::Mergesort(doc) => Outcome::Mergesort(MergesortOutcome {
                sorted: merge_sort(&doc.arr),
            }),
        }
    }
}

fn check_node(
    location: impl FnOnce() -> String,
    node: usize,
    node_count: usize,
) -> Result<(), DocumentError> {
    if node < node_count {
        Ok(())
    } else {
        Err(DocumentError::NodeOutOfRange {
            location: location(),
            node,
            node_count,
        })
    }
}

fn check_finite(location: impl FnOnce() -> String, weight: f64) -> Result<(), DocumentError> {
    if weight.is_finite() {
        Ok(())
    } else {
        Err(DocumentError::NonFiniteWeight {
            location: location(),
            weight,
        })
    }
}

fn check_value(location: impl FnOnce() -> String, value: f64) -> Result<(), DocumentError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DocumentError::NonFiniteValue {
            location: location(),
            value,
        })
    }
}

fn check_values(values: &[f64]) -> Result<(), DocumentError> {
    values
        .iter()
        .enumerate()
        .try_for_each(|(slot, &value)| check_value(|| format!("arr[{slot}]"), value))
}

fn validate_dijkstra(doc: &DijkstraDocument) -> Result<(), DocumentError> {
    let node_count = doc.graph.len();
    check_node(|| "start".to_owned(), doc.start, node_count)?;
    for (node, arcs) in doc.graph.iter().enumerate() {
        for (slot, arc) in arcs.iter().enumerate() {
            check_node(|| format!("graph[{node}][{slot}].to"), arc.to, node_count)?;
            check_finite(|| format!("graph[{node}][{slot}].w"), arc.w)?;
            if arc.w < 0.0 {
                return Err(DocumentError::NegativeWeight {
                    location: format!("graph[{node}][{slot}].w"),
                    weight: arc.w,
                });
            }
        }
    }
    Ok(())
}

fn validate_kruskal(doc: &KruskalDocument) -> Result<(), DocumentError> {
    if doc.n > MAX_NODES {
        return Err(DocumentError::TooManyNodes {
            n: doc.n,
            limit: MAX_NODES,
        });
    }
    for (slot, edge) in doc.edges.iter().enumerate() {
        check_node(|| format!("edges[{slot}].u"), edge.u, doc.n)?;
        check_node(|| format!("edges[{slot}].v"), edge.v, doc.n)?;
        check_finite(|| format!("edges[{slot}].w"), edge.w)?;
    }
    Ok(())
}

fn validate_topsort(doc: &TopsortDocument) -> Result<(), DocumentError> {
    let node_count = doc.graph.len();
    for (node, successors) in doc.graph.iter().enumerate() {
        for (slot, &successor) in successors.iter().enumerate() {
            check_node(|| format!("graph[{node}][{slot}]"), successor, node_count)?;
        }
    }
    Ok(())
}

/// Shortest-path result. `null` entries mark unreachable nodes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DijkstraOutcome {
    /// Distance per node.
    pub dist: Vec<Option<f64>>,
    /// Path to the target, if reachable.
    pub path: Option<Vec<usize>>,
    /// Distance to the target, if reachable.
    pub cost: Option<f64>,
}

/// Spanning-forest result.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KruskalOutcome {
    /// Sum of the selected weights.
    pub total_weight: f64,
    /// Selected edges in acceptance order.
    pub edges: Vec<EdgeDocument>,
}

/// Topological sort result; `null` when the graph has a cycle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TopsortOutcome {
    /// A valid order, if one exists.
    pub order: Option<Vec<usize>>,
}

/// Binary search result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BsearchOutcome {
    /// Index of a matching element.
    pub index: Option<usize>,
    /// First index whose value is not less than the target.
    pub lower_bound: usize,
    /// First index whose value is greater than the target.
    pub upper_bound: usize,
    /// Whether the target occurs.
    pub found: bool,
}

/// Merge sort result.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MergesortOutcome {
    /// The input values in ascending order.
    pub sorted: Vec<f64>,
}

/// Any of the five results.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// Shortest-path result.
    Dijkstra(DijkstraOutcome),
    /// Spanning-forest result.
    Kruskal(KruskalOutcome),
    /// Topological sort result.
    Topsort(TopsortOutcome),
    /// Binary search result.
    Bsearch(BsearchOutcome),
    /// Merge sort result.
    Mergesort(MergesortOutcome),
}

/// The `{kind, input, result}` object printed by `classics run`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Envelope {
    /// Canonical algorithm name.
    pub kind: &'static str,
    /// The input exactly as parsed, unknown fields included.
    pub input: Value,
    /// The algorithm's answer.
    pub result: Outcome,
}

/// Parses, validates and evaluates a raw JSON document for `algorithm`.
///
/// # Errors
/// Returns [`DocumentError`] when `raw` is not JSON, does not have the
/// expected shape, or fails validation.
///
/// # Examples
/// ```
/// use classics_cli::cli::{Outcome, run_document};
/// use classics_core::Algorithm;
///
/// let envelope = run_document(Algorithm::MergeSort, r#"{"arr": [3, 1, 2]}"#)?;
/// assert_eq!(envelope.kind, "mergesort");
/// let Outcome::Mergesort(outcome) = envelope.result else {
///     unreachable!("mergesort documents yield mergesort outcomes");
/// };
/// assert_eq!(outcome.sorted, vec![1.0, 2.0, 3.0]);
/// # Ok::<(), classics_cli::cli::DocumentError>(())
/// ```
#[instrument(
    name = "cli.run_document",
    skip(raw),
    fields(kind = %algorithm, bytes = raw.len(), code = field::Empty),
)]
pub fn run_document(algorithm: Algorithm, raw: &str) -> Result<Envelope, DocumentError> {
    let evaluated = serde_json::from_str::<Value>(raw)
        .map_err(|source| DocumentError::Json {
            kind: algorithm.as_str(),
            source,
        })
        .and_then(|input| {
            let document = InputDocument::from_value(algorithm, input.clone())?;
            document.validate()?;
            Ok(Envelope {
                kind: algorithm.as_str(),
                input,
                result: document.evaluate(),
            })
        });
    if let Err(err) = &evaluated {
        Span::current().record("code", field::display(err.code()));
    }
    evaluated
}

/// Errors raised while reading an input document.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The text was not JSON or did not have the expected shape.
    #[error("invalid `{kind}` document")]
    Json {
        /// Algorithm the document was meant for.
        kind: &'static str,
        /// Decoder failure, with line and column.
        #[source]
        source: serde_json::Error,
    },
    /// A node reference lies outside the graph.
    #[error("`{location}` refers to node {node}, but the graph has {node_count} nodes")]
    NodeOutOfRange {
        /// Path of the offending field within the document.
        location: String,
        /// Referenced node.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// A weight was infinite or NaN.
    #[error("`{location}` has non-finite weight {weight}")]
    NonFiniteWeight {
        /// Path of the offending field within the document.
        location: String,
        /// Offending weight.
        weight: f64,
    },
    /// A spanning-forest document declared more nodes than [`MAX_NODES`].
    #[error("document declares {n} nodes, more than the limit of {limit}")]
    TooManyNodes {
        /// Declared node count.
        n: usize,
        /// Largest accepted node count.
        limit: usize,
    },
    /// A search or sort value was infinite or NaN.
    #[error("`{location}` has non-finite value {value}")]
    NonFiniteValue {
        /// Path of the offending field within the document.
        location: String,
        /// Offending value.
        value: f64,
    },
    /// A shortest-path arc had a negative weight.
    #[error("`{location}` has negative weight {weight}; shortest paths need non-negative weights")]
    NegativeWeight {
        /// Path of the offending field within the document.
        location: String,
        /// Offending weight.
        weight: f64,
    },
}

classics_core::define_error_codes! {
    /// Machine-readable error codes for [`DocumentError`].
    enum DocumentErrorCode for DocumentError {
        /// The document is not JSON of the expected shape.
        InvalidDocument => Json { .. } => "INVALID_DOCUMENT",
        /// A node reference lies outside the graph.
        NodeOutOfRange => NodeOutOfRange { .. } => "NODE_OUT_OF_RANGE",
        /// A weight was infinite or NaN.
        NonFiniteWeight => NonFiniteWeight { .. } => "NON_FINITE_WEIGHT",
        /// A shortest-path arc had a negative weight.
        NegativeWeight => NegativeWeight { .. } => "NEGATIVE_WEIGHT",
        /// A spanning-forest document declared too many nodes.
        TooManyNodes => TooManyNodes { .. } => "TOO_MANY_NODES",
        /// A search or sort value was infinite or NaN.
        NonFiniteValue => NonFiniteValue { .. } => "NON_FINITE_VALUE",
    }
}
