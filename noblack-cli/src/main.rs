// noblack-cli/src/main.rs
//
// Entry point for the noblack binary.
//
// Responsibilities include:
// - Parsing the two positional arguments and the logging flags.
// - Setting up console and optional file logging.
// - Running the job and writing the result document.
// - Exiting with 0 only when the job succeeded and its result was written.

use clap::Parser;
use clap::error::ErrorKind;
use noblack::cli::{Cli, result_path_from_raw_args};
use noblack::logging::{get_timestamp, log_level};
use noblack::{run_job, write_result};
use noblack_core::JobResult;
use noblack_core::file_logging::setup_logging;
use std::process;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = e.print();
                process::exit(0);
            }
            let _ = e.print();
            if let Some(result_path) = result_path_from_raw_args(std::env::args_os()) {
                let result = JobResult::from_error(format!("Invalid arguments: {}", e.kind()));
                if let Err(write_err) = result.write_to(&result_path) {
                    eprintln!("Failed to write result document: {write_err}");
                }
            }
            process::exit(1);
        }
    };

    if let Err(e) = setup_logging(cli.log_file.as_deref(), log_level(cli.verbose)) {
        eprintln!(
            "{} failed to initialize logging: {e:#}",
            console::style("warning:").yellow().bold()
        );
    }
    log::debug!("noblack run {} started", get_timestamp());

    let result = run_job(&cli.input_config);
    let exit_code = write_result(&result, &cli.output_result);
    process::exit(exit_code);
}
