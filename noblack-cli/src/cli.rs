// noblack-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "noblack: batch black-bar removal for images and videos",
    long_about = "Reads a JSON job document, crops letterbox and pillarbox bars from every \
                  image and video under the configured directory, and writes a JSON result document."
)]
pub struct Cli {
    /// JSON job document describing the input directory and options
    #[arg(value_name = "INPUT_CONFIG")]
    pub input_config: PathBuf,

    /// Where the JSON result document is written
    #[arg(value_name = "OUTPUT_RESULT")]
    pub output_result: PathBuf,

    /// Enable debug-level logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Optional: also write the log to this file
    #[arg(long, value_name = "PATH", env = "NOBLACK_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Options that take a value, so the value is not mistaken for a positional.
const VALUE_OPTIONS: &[&str] = &["--log-file"];

/// Best-effort recovery of the result path from arguments clap rejected.
///
/// Returns the second positional argument when there is one.
pub fn result_path_from_raw_args<I>(args: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = OsString>,
{
    let mut positionals = Vec::new();
    let mut skip_next = false;
    for arg in args.into_iter().skip(1) {
        if skip_next {
            skip_next = false;
            continue;
        }
        let text = arg.to_string_lossy();
        if VALUE_OPTIONS.contains(&text.as_ref()) {
            skip_next = true;
        } else if !text.starts_with('-') {
            positionals.push(PathBuf::from(arg));
        }
    }
    positionals.into_iter().nth(1)
}
