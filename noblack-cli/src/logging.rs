// ============================================================================
// noblack-cli/src/logging.rs
// ============================================================================
//
// LOGGING UTILITIES: Helper Functions for Logging
//
// The log4rs backend itself is configured by noblack_core::file_logging; this
// file only holds the CLI-side helpers.

use log::LevelFilter;

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// # Example
/// ```
/// let stamp = noblack::logging::get_timestamp();
/// assert_eq!(stamp.len(), 15);
/// ```
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Log level for the given verbosity flag.
pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose { LevelFilter::Debug } else { LevelFilter::Info }
}
