//! Support library for the `classics` binary.
//!
//! Exposes the command pipeline and logging setup so tests can drive
//! [`cli::run_cli`] without spawning a subprocess.

pub mod cli;
pub mod logging;
