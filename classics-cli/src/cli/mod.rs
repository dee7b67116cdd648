//! Command-line surface of the `classics` binary.
//!
//! The fixed demos (`dijkstra`, `mst`, `topsort`, `bsearch`, `mergesort`)
//! print text reports. `sample` and `run` speak JSON documents so inputs can
//! be edited and fed back in.

mod commands;
mod document;
pub mod samples;

pub use commands::{
    BsearchArgs, Cli, CliError, Command, MergesortArgs, Report, RunArgs, SampleArgs, SearchDemo,
    SearchProbe, ShortestPathDemo, SortDemo, SpanningTreeDemo, TopologicalDemo, render_report,
    run_cli, run_cli_with_stdin,
};
pub use document::{
    ArcDocument, BsearchDocument, BsearchOutcome, DijkstraDocument, DijkstraOutcome,
    DocumentError, DocumentErrorCode, EdgeDocument, Envelope, InputDocument, KruskalDocument,
    KruskalOutcome, MAX_NODES, MergesortDocument, MergesortOutcome, Outcome, TopsortDocument,
    TopsortOutcome, run_document,
};
