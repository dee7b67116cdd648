//! Shared test utilities used across the classics crates.

pub mod ci;
pub mod tracing;
