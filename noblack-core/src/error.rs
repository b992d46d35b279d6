// ============================================================================
// noblack-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the noblack Core Library
//
// This module defines the error taxonomy shared by every component of the
// core library. Errors fall into two tiers:
//
// - Fatal errors (Config, InputNotFound, PathError on the input root) stop a
//   batch before any file is touched.
// - Per-file errors (DetectionFailure, InvalidCropRectangle, command and codec
//   failures) are caught by the orchestrator and recorded as a failed outcome
//   for that single file.
//
// The tier is decided by where the error is raised, not by its variant.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced by the noblack core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Input not found: {0}")]
    InputNotFound(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Black-bar detection failed: {0}")]
    DetectionFailure(String),

    #[error("Invalid crop rectangle: {0}")]
    InvalidCropRectangle(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Failed waiting for command '{0}': {1}")]
    CommandWait(String, #[source] io::Error),

    #[error("Command '{command}' failed with status {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Required external command not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to parse ffprobe output: {0}")]
    FfprobeParse(String),

    #[error("JSON error: {0}")]
    JsonParseError(String),

    #[error("Image codec error: {0}")]
    ImageCodec(#[from] image::ImageError),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type used throughout the core library.
pub type CoreResult<T> = Result<T, CoreError>;

/// Builds a [`CoreError::CommandStart`] for a command that could not be spawned.
pub fn command_start_error(command: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(command.into(), err)
}

/// Builds a [`CoreError::CommandWait`] for a command whose exit could not be collected.
pub fn command_wait_error(command: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandWait(command.into(), err)
}

/// Builds a [`CoreError::CommandFailed`] for a command that exited unsuccessfully.
pub fn command_failed_error(
    command: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        command: command.into(),
        status,
        stderr: stderr.into(),
    }
}
