//! Property-based tests for the Kruskal spanning forest.
//!
//! Checks Kruskal against an independent Prim oracle and validates the
//! structural invariants of every produced forest (acyclicity, edge count,
//! edges drawn from the input) across topologies with varied weight
//! distributions.

mod oracle;
mod strategies;
mod types;
