// ============================================================================
// noblack-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: FFmpeg Process Management and Abstraction
//
// This module provides abstractions for spawning and interacting with FFmpeg
// processes. Detection (cropdetect) and video cropping both go through the
// FfmpegSpawner trait so tests can substitute a mock that never touches a
// real binary.
//
// KEY COMPONENTS:
// - FfmpegProcess: Trait representing an active FFmpeg process
// - FfmpegSpawner: Trait for creating new FFmpeg processes from an argument list
// - SidecarSpawner: Concrete implementation using ffmpeg-sidecar
// - FfmpegRun / run_ffmpeg: spawn, drain events, wait, map the exit status

use crate::error::{CoreResult, command_failed_error, command_start_error, command_wait_error};
use ffmpeg_sidecar::child::FfmpegChild as SidecarChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use std::process::ExitStatus;

// --- FFmpeg Execution Abstraction ---

/// Trait representing an active ffmpeg process instance.
pub trait FfmpegProcess {
    /// Processes events from the running command using a provided handler closure.
    fn handle_events<F>(&mut self, handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>;

    /// Waits for the command to complete and returns its exit status.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Trait representing something that can spawn an FfmpegProcess.
///
/// Spawners are shared between worker threads, hence `Send + Sync`.
pub trait FfmpegSpawner: Send + Sync {
    type Process: FfmpegProcess;

    /// Spawns ffmpeg with the given arguments (the binary name is implied).
    fn spawn(&self, args: &[String]) -> CoreResult<Self::Process>;
}

// --- Concrete Implementation using ffmpeg-sidecar ---

/// Wrapper around `ffmpeg_sidecar::child::FfmpegChild` implementing `FfmpegProcess`.
pub struct SidecarProcess(SidecarChild);

impl FfmpegProcess for SidecarProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        let iterator = self.0.iter().map_err(|e| {
            log::error!("Failed to get ffmpeg event iterator: {}", e);
            command_failed_error(
                "ffmpeg (sidecar - get iter)",
                ExitStatus::default(), // Placeholder status
                e.to_string(),
            )
        })?;
        for event in iterator {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.0
            .wait()
            .map_err(|e| command_wait_error("ffmpeg (sidecar)", e))
    }
}

/// Concrete implementation of `FfmpegSpawner` using `ffmpeg-sidecar`.
#[derive(Debug, Clone, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, args: &[String]) -> CoreResult<Self::Process> {
        let mut cmd = FfmpegCommand::new();
        cmd.args(args);
        log::debug!("Spawning ffmpeg {}", args.join(" "));
        cmd.spawn()
            .map(SidecarProcess)
            .map_err(|e| command_start_error("ffmpeg (sidecar)", e))
    }
}

// --- Shared run helper ---

/// Everything collected from one finished ffmpeg run.
#[derive(Debug, Default, Clone)]
pub struct FfmpegRun {
    /// Log lines at info level or above, in arrival order.
    pub log_lines: Vec<String>,
    /// Error and fatal lines, kept separately for failure messages.
    pub error_lines: Vec<String>,
}

/// Spawns ffmpeg, drains its event stream and maps a non-zero exit to
/// `CoreError::CommandFailed` carrying the captured error lines.
pub fn run_ffmpeg<S: FfmpegSpawner>(
    spawner: &S,
    context: &str,
    args: &[String],
) -> CoreResult<FfmpegRun> {
    let mut process = spawner.spawn(args)?;
    let mut run = FfmpegRun::default();

    process.handle_events(|event| {
        match event {
            FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, line) => {
                run.error_lines.push(line.clone());
                run.log_lines.push(line);
            }
            FfmpegEvent::Log(_, line) => run.log_lines.push(line),
            FfmpegEvent::Error(line) => run.error_lines.push(line),
            _ => {}
        }
        Ok(())
    })?;

    let status = process.wait()?;
    if !status.success() {
        log::error!("{} exited with {}", context, status);
        let stderr = if run.error_lines.is_empty() {
            "no error output captured".to_string()
        } else {
            run.error_lines.join("\n")
        };
        return Err(command_failed_error(context, status, stderr));
    }
    Ok(run)
}
