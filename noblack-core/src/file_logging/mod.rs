//! log4rs setup shared by the binary and integration tooling.

pub mod setup;

pub use setup::{build_config, setup_logging};
