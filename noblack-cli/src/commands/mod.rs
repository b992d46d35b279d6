//! Command implementations for the CLI.

/// Runs one job document end to end and produces the result document.
pub mod run;
