//! Benchmark support crate for the classics algorithms.
//!
//! Provides seeded synthetic graphs and sequences plus the parameter types
//! Criterion uses to label each run.

pub mod error;
pub mod params;
pub mod source;
