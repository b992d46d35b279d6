// ============================================================================
// noblack-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with External CLI Tools and Codecs
//
// This module encapsulates interactions with ffmpeg and ffprobe, plus the
// image-header probe. Traits sit at every seam so the orchestrator and its
// collaborators can be exercised without the real binaries.
//
// KEY COMPONENTS:
// - FfmpegSpawner / FfmpegProcess: spawning ffmpeg and consuming its events
// - DimensionProber: native width/height of a source file
// - check_dependency: presence check for required binaries

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::io;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

/// Contains the dimension prober used as ground truth by the evaluator
pub mod ffprobe_executor;

#[cfg(all(test, unix))]
pub(crate) mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffmpeg_executor::{
    FfmpegProcess, FfmpegRun, FfmpegSpawner, SidecarProcess, SidecarSpawner, run_ffmpeg,
};
pub use ffprobe_executor::{DimensionProber, MediaProber, get_image_dimensions, get_video_dimensions};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks if a required external command is available and executable.
///
/// The command is run with `-version`; only a failure to start it counts.
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", cmd_name);
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{}': {}", cmd_name, e);
            Err(CoreError::CommandStart(cmd_name.to_string(), e))
        }
    }
}
