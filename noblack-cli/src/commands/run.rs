// ============================================================================
// noblack-cli/src/commands/run.rs
// ============================================================================
//
// RUN COMMAND: job document in, result document out
//
// 1. Load and validate the job document
// 2. Run the batch with the system toolkit (ffmpeg, ffprobe, image codecs)
// 3. Build the result document; any setup error becomes `success: false`
// 4. Write the result document; the exit code follows `success`

use crate::error::{CliErrorContext, CliResult};

use log::{error, info};
use noblack_core::{EnvironmentInfo, InputDocument, JobResult, Toolkit, run_batch, terminal_output};
use std::path::Path;

/// Loads the job, runs the batch and builds a successful result document.
pub fn execute_job(input_config: &Path) -> CliResult<JobResult> {
    let document = InputDocument::from_path(input_config)?;
    let config = document.into_batch_config()?;

    let toolkit = Toolkit::system(&config);
    let report = run_batch(&config, &toolkit)?;
    info!("Results written under {}", report.output_root.display());

    Ok(JobResult::from_report(&report, EnvironmentInfo::collect()))
}

/// Like [`execute_job`], but folds fatal errors into the result document.
pub fn run_job(input_config: &Path) -> JobResult {
    match execute_job(input_config) {
        Ok(result) => result,
        Err(e) => {
            error!("Processing failed: {}", e);
            JobResult::from_error(e.to_string())
        }
    }
}

/// Writes the result document and returns the process exit code.
///
/// A failed write forces exit code 1 even when the batch succeeded.
pub fn write_result(result: &JobResult, output_result: &Path) -> i32 {
    match result
        .write_to(output_result)
        .cli_context(format!("Failed to write result document {}", output_result.display()))
    {
        Ok(()) => {
            if result.success {
                terminal_output::print_success("Batch processing complete");
                0
            } else {
                1
            }
        }
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}
