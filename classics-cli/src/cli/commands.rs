//! Command definitions, execution and rendering for the `classics` binary.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, CommandFactory, Parser, Subcommand};
use classics_core::{
    Algorithm, AlgorithmError, Edge, ShortestPaths, SpanningForest, binary_search, dijkstra,
    kruskal, lower_bound, merge_sort, topological_sort, upper_bound,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::document::{DocumentError, Envelope, InputDocument, run_document};
use super::samples::{
    self, DEFAULT_SEARCH_TARGET, DEFAULT_SORT_VALUES, EXTRA_SEARCH_PROBES, SEARCH_VALUES,
};

const STDIN_MARKER: &str = "-";

/// Top-level options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "classics",
    version,
    about = "Run demos of classic graph, search and sorting algorithms."
)]
pub struct Cli {
    /// Command to execute; prints help when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Shortest paths over the 4-node sample graph.
    Dijkstra,
    /// Minimum spanning tree of the 5-node, 7-edge sample graph.
    #[command(visible_alias = "kruskal")]
    Mst,
    /// Topological order of a course-prerequisite DAG, then of a 3-cycle.
    Topsort,
    /// Binary search, lower bound and upper bound over the odd numbers 1 to 19.
    Bsearch(BsearchArgs),
    /// Stable merge sort of the given integers.
    Mergesort(MergesortArgs),
    /// Print the demo input document for an algorithm as JSON.
    Sample(SampleArgs),
    /// Run an algorithm over a JSON input document.
    Run(RunArgs),
}

/// Options accepted by `bsearch`.
#[derive(Debug, Args, Clone)]
pub struct BsearchArgs {
    /// Integer to search for.
    #[arg(default_value_t = i64::from(DEFAULT_SEARCH_TARGET), allow_negative_numbers = true)]
    pub target: i64,
}

/// Options accepted by `mergesort`.
#[derive(Debug, Args, Clone)]
pub struct MergesortArgs {
    /// Integers to sort; a fixed sample is used when none are given.
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

/// Options accepted by `sample`.
#[derive(Debug, Args, Clone)]
pub struct SampleArgs {
    /// Algorithm name: dijkstra, kruskal (or mst), topsort, bsearch, mergesort.
    pub kind: String,
}

/// Options accepted by `run`.
#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    /// Algorithm name: dijkstra, kruskal (or mst), topsort, bsearch, mergesort.
    pub kind: String,

    /// JSON document to read; standard input when omitted or `-`.
    pub path: Option<PathBuf>,
}

/// Errors surfaced while executing commands.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading an input document failed.
    #[error("failed to read `{path}`")]
    Io {
        /// File that failed, or `-` for standard input.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input document was rejected.
    #[error(transparent)]
    Document(#[from] DocumentError),
    /// The requested algorithm does not exist.
    #[error(transparent)]
    Core(#[from] AlgorithmError),
    /// Writing the report failed.
    #[error("failed to write output")]
    Render {
        /// Underlying writer or encoder error.
        #[from]
        source: io::Error,
    },
}

impl CliError {
    /// Stable code of the underlying document or algorithm error, if any.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Document(err) => Some(err.code().as_str()),
            Self::Core(err) => Some(err.code().as_str()),
            Self::Io { .. } | Self::Render { .. } => None,
        }
    }
}

/// Outcome of the `dijkstra` demo.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPathDemo {
    /// Node whose path is reported.
    pub target: usize,
    /// Distances and predecessors from node 0.
    pub paths: ShortestPaths,
}

/// Outcome of the `mst` demo.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTreeDemo {
    /// Number of nodes in the sample.
    pub node_count: usize,
    /// Input edges in sample order.
    pub edges: Vec<Edge>,
    /// Selected edges and their total weight.
    pub forest: SpanningForest,
}

/// Outcome of the `topsort` demo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopologicalDemo {
    /// Order of the course-prerequisite DAG.
    pub courses: Option<Vec<usize>>,
    /// Order of the 3-cycle, expected to be `None`.
    pub cyclic: Option<Vec<usize>>,
}

/// One binary search probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchProbe {
    /// Value searched for.
    pub target: i64,
    /// Index of a match.
    pub index: Option<usize>,
    /// First index not less than `target`.
    pub lower_bound: usize,
    /// First index greater than `target`.
    pub upper_bound: usize,
}

impl SearchProbe {
    fn over(values: &[i64], target: i64) -> Self {
        Self {
            target,
            index: binary_search(values, &target),
            lower_bound: lower_bound(values, &target),
            upper_bound: upper_bound(values, &target),
        }
    }
}

/// Outcome of the `bsearch` demo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchDemo {
    /// The sorted values searched.
    pub values: Vec<i64>,
    /// The requested probe.
    pub requested: SearchProbe,
    /// The fixed additional probes.
    pub extra: Vec<SearchProbe>,
}

/// Outcome of the `mergesort` demo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortDemo {
    /// Values as given.
    pub original: Vec<i64>,
    /// Values in ascending order.
    pub sorted: Vec<i64>,
}

/// Everything a command can produce, ready for [`render_report`].
#[derive(Clone, Debug, PartialEq)]
pub enum Report {
    /// Help text, printed when no command is given.
    Help(String),
    /// `dijkstra` demo.
    ShortestPath(ShortestPathDemo),
    /// `mst` demo.
    SpanningTree(SpanningTreeDemo),
    /// `topsort` demo.
    TopologicalOrder(TopologicalDemo),
    /// `bsearch` demo.
    Search(SearchDemo),
    /// `mergesort` demo.
    Sort(SortDemo),
    /// `sample` output.
    Sample(InputDocument),
    /// `run` output.
    Document(Envelope),
}

/// Executes `cli`, reading `run` documents from standard input when no path
/// is given.
///
/// # Errors
/// Returns [`CliError`] when an algorithm name is unknown, an input cannot be
/// read, or a document is rejected.
///
/// # Examples
/// ```
/// use classics_cli::cli::{Cli, Command, MergesortArgs, Report, run_cli};
///
/// let cli = Cli {
///     command: Some(Command::Mergesort(MergesortArgs {
///         values: vec![5, 2, 8, 1, 9, 3],
///     })),
/// };
/// let Report::Sort(demo) = run_cli(cli)? else {
///     unreachable!("mergesort produces a sort report");
/// };
/// assert_eq!(demo.sorted, vec![1, 2, 3, 5, 8, 9]);
/// # Ok::<(), classics_cli::cli::CliError>(())
/// ```
pub fn run_cli(cli: Cli) -> Result<Report, CliError> {
    run_cli_with_stdin(cli, io::stdin().lock())
}

/// Executes `cli`, reading `run` documents from `stdin` when no path is
/// given.
///
/// # Errors
/// See [`run_cli`].
#[instrument(
    name = "cli.run",
    skip(cli, stdin),
    fields(command = field::Empty),
)]
pub fn run_cli_with_stdin(cli: Cli, stdin: impl Read) -> Result<Report, CliError> {
    let Some(command) = cli.command else {
        Span::current().record("command", "help");
        return Ok(Report::Help(Cli::command().render_help().to_string()));
    };

    let label = command_label(&command);
    Span::current().record("command", label);
    let report = match command {
        Command::Dijkstra => Report::ShortestPath(shortest_path_demo()),
        Command::Mst => Report::SpanningTree(spanning_tree_demo()),
        Command::Topsort => Report::TopologicalOrder(topological_demo()),
        Command::Bsearch(args) => Report::Search(search_demo(args.target)),
        Command::Mergesort(args) => Report::Sort(sort_demo(args.values)),
        Command::Sample(args) => {
            let algorithm: Algorithm = args.kind.parse()?;
            Report::Sample(samples::document_for(algorithm))
        }
        Command::Run(args) => Report::Document(run_command(&args, stdin)?),
    };
    info!(command = label, "command completed");
    Ok(report)
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Dijkstra => "dijkstra",
        Command::Mst => "mst",
        Command::Topsort => "topsort",
        Command::Bsearch(_) => "bsearch",
        Command::Mergesort(_) => "mergesort",
        Command::Sample(_) => "sample",
        Command::Run(_) => "run",
    }
}

fn shortest_path_demo() -> ShortestPathDemo {
    let document = samples::dijkstra();
    ShortestPathDemo {
        target: document.target,
        paths: dijkstra(&document.to_graph(), document.start),
    }
}

fn spanning_tree_demo() -> SpanningTreeDemo {
    let document = samples::kruskal();
    let edges = document.to_edges();
    SpanningTreeDemo {
        node_count: document.n,
        forest: kruskal(document.n, &edges),
        edges,
    }
}

fn topological_demo() -> TopologicalDemo {
    TopologicalDemo {
        courses: topological_sort(&samples::course_prerequisites().graph),
        cyclic: topological_sort(&samples::three_cycle().graph),
    }
}

fn search_demo(target: i64) -> SearchDemo {
    let values: Vec<i64> = SEARCH_VALUES.map(i64::from).to_vec();
    SearchDemo {
        requested: SearchProbe::over(&values, target),
        extra: EXTRA_SEARCH_PROBES
            .iter()
            .map(|&probe| SearchProbe::over(&values, probe))
            .collect(),
        values,
    }
}

fn sort_demo(values: Vec<i64>) -> SortDemo {
    let original = if values.is_empty() {
        DEFAULT_SORT_VALUES.map(i64::from).to_vec()
    } else {
        values
    };
    SortDemo {
        sorted: merge_sort(&original),
        original,
    }
}

#[instrument(
    name = "cli.run_document_command",
    skip(args, stdin),
    fields(kind = args.kind.as_str(), source = field::Empty),
)]
pub(super) fn run_command(args: &RunArgs, stdin: impl Read) -> Result<Envelope, CliError> {
    let algorithm: Algorithm = args.kind.parse()?;
    let raw = match args.path.as_deref() {
        Some(path) if path != Path::new(STDIN_MARKER) => {
            Span::current().record("source", field::display(path.display()));
            read_document(path)?
        }
        _ => {
            Span::current().record("source", STDIN_MARKER);
            read_stdin(stdin)?
        }
    };
    Ok(run_document(algorithm, &raw)?)
}

pub(super) fn read_document(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_stdin(mut stdin: impl Read) -> Result<String, CliError> {
    let mut raw = String::new();
    stdin
        .read_to_string(&mut raw)
        .map_err(|source| CliError::Io {
            path: PathBuf::from(STDIN_MARKER),
            source,
        })?;
    Ok(raw)
}

/// Writes `report` to `writer`: demos as text, documents as pretty JSON.
///
/// # Errors
/// Returns [`CliError::Render`] if writing or JSON encoding fails.
///
/// # Examples
/// ```
/// use classics_cli::cli::{Report, SortDemo, render_report};
///
/// let report = Report::Sort(SortDemo {
///     original: vec![3, 1, 2],
///     sorted: vec![1, 2, 3],
/// });
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("Sorted array:   [1, 2, 3]"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_report(report: &Report, mut writer: impl Write) -> Result<(), CliError> {
    match report {
        Report::Help(text) => write!(writer, "{text}")?,
        Report::ShortestPath(demo) => render_shortest_path(demo, &mut writer)?,
        Report::SpanningTree(demo) => render_spanning_tree(demo, &mut writer)?,
        Report::TopologicalOrder(demo) => render_topological(demo, &mut writer)?,
        Report::Search(demo) => render_search(demo, &mut writer)?,
        Report::Sort(demo) => render_sort(demo, &mut writer)?,
        Report::Sample(document) => render_json(document, &mut writer)?,
        Report::Document(envelope) => render_json(envelope, &mut writer)?,
    }
    Ok(())
}

fn render_json(value: &impl Serialize, writer: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)
}

fn joined<T: ToString>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

fn render_shortest_path(demo: &ShortestPathDemo, writer: &mut impl Write) -> io::Result<()> {
    let start = demo.paths.start();
    writeln!(writer, "=== Dijkstra's Shortest Path ===")?;
    writeln!(writer)?;
    writeln!(writer, "Graph (adjacency list):")?;
    for (node, arcs) in samples::dijkstra().graph.iter().enumerate() {
        if arcs.is_empty() {
            continue;
        }
        let rendered: Vec<String> = arcs
            .iter()
            .map(|arc| format!("{node} -> {} (weight: {})", arc.to, arc.w))
            .collect();
        writeln!(writer, "  {}", rendered.join(", "))?;
    }
    writeln!(writer)?;
    writeln!(writer, "Shortest distances from node {start}:")?;
    for (node, distance) in demo.paths.distances().iter().enumerate() {
        match distance {
            Some(distance) => writeln!(writer, "  Node {node}: {distance}")?,
            None => writeln!(writer, "  Node {node}: unreachable")?,
        }
    }
    writeln!(writer)?;
    match (demo.paths.path_to(demo.target), demo.paths.distance(demo.target)) {
        (Some(path), Some(cost)) => writeln!(
            writer,
            "Shortest path from {start} to {}: {} (cost: {cost})",
            demo.target,
            joined(&path, " -> ")
        ),
        _ => writeln!(writer, "No path from {start} to {}", demo.target),
    }
}

fn render_spanning_tree(demo: &SpanningTreeDemo, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "=== Kruskal's Minimum Spanning Tree ===")?;
    writeln!(writer)?;
    writeln!(
        writer,
        "Graph: {} nodes, {} edges",
        demo.node_count,
        demo.edges.len()
    )?;
    writeln!(writer, "Edges:")?;
    for edge in &demo.edges {
        writeln!(writer, "  {}", edge_line(edge))?;
    }
    writeln!(writer)?;
    writeln!(writer, "MST edges selected:")?;
    for edge in demo.forest.edges() {
        writeln!(writer, "  {}", edge_line(edge))?;
    }
    writeln!(writer)?;
    writeln!(writer, "Total MST weight: {}", demo.forest.total_weight())
}

fn edge_line(edge: &Edge) -> String {
    format!("{} -- {} (weight: {})", edge.source, edge.target, edge.weight)
}

fn render_topological(demo: &TopologicalDemo, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "=== Topological Sort (Kahn's Algorithm) ===")?;
    writeln!(writer)?;
    writeln!(writer, "DAG (course prerequisites):")?;
    let graph = samples::course_prerequisites().graph;
    for (course, title) in samples::COURSE_TITLES.iter().enumerate() {
        let prerequisites: Vec<usize> = graph
            .iter()
            .enumerate()
            .filter(|(_, successors)| successors.contains(&course))
            .map(|(node, _)| node)
            .collect();
        if prerequisites.is_empty() {
            writeln!(writer, "  {course}: {title}")?;
        } else {
            writeln!(
                writer,
                "  {course}: {title} (requires {})",
                joined(&prerequisites, ", ")
            )?;
        }
    }
    writeln!(writer)?;
    match &demo.courses {
        Some(order) => writeln!(writer, "Valid course order: {}", joined(order, " -> "))?,
        None => writeln!(writer, "Error: graph contains a cycle")?,
    }
    writeln!(writer)?;
    writeln!(writer, "--- Cyclic graph 0 -> 1 -> 2 -> 0 ---")?;
    match &demo.cyclic {
        Some(order) => writeln!(writer, "Cyclic graph result: {}", joined(order, " -> ")),
        None => writeln!(writer, "Cyclic graph result: none (cycle detected)"),
    }
}

fn render_search(demo: &SearchDemo, writer: &mut impl Write) -> io::Result<()> {
    let bound_value = |index: usize| {
        demo.values
            .get(index)
            .map_or_else(|| "past end".to_owned(), |value| format!("value: {value}"))
    };
    let found = |probe: &SearchProbe| {
        probe
            .index
            .map_or_else(|| "not found".to_owned(), |index| format!("found at index {index}"))
    };
    let probe = &demo.requested;

    writeln!(writer, "=== Binary Search ===")?;
    writeln!(writer)?;
    writeln!(writer, "Sorted array: [{}]", joined(&demo.values, ", "))?;
    writeln!(writer)?;
    writeln!(writer, "Searching for: {}", probe.target)?;
    writeln!(writer, "  binary search: {}", found(probe))?;
    writeln!(
        writer,
        "  lower bound (first >= {}): index {} ({})",
        probe.target,
        probe.lower_bound,
        bound_value(probe.lower_bound)
    )?;
    writeln!(
        writer,
        "  upper bound (first > {}): index {} ({})",
        probe.target,
        probe.upper_bound,
        bound_value(probe.upper_bound)
    )?;
    writeln!(writer)?;
    writeln!(writer, "--- Additional searches ---")?;
    for extra in &demo.extra {
        writeln!(writer, "  binary search({}): {}", extra.target, found(extra))?;
    }
    Ok(())
}

fn render_sort(demo: &SortDemo, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "=== Merge Sort ===")?;
    writeln!(writer)?;
    writeln!(writer, "Original array: [{}]", joined(&demo.original, ", "))?;
    writeln!(writer, "Sorted array:   [{}]", joined(&demo.sorted, ", "))?;
    writeln!(writer)?;
    writeln!(writer, "Merge sort is stable and runs in O(n log n) time.")
}
