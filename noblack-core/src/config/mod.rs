//! Configuration structures and constants for the noblack-core library.
//!
//! A [`BatchConfig`] is created once per invocation, validated before any file
//! is touched, and then shared read-only by every worker for the rest of the
//! batch. It can be built programmatically through [`BatchConfigBuilder`] or
//! parsed from the JSON job document via [`InputDocument`].

mod builder;
mod document;

use crate::error::{CoreError, CoreResult};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub use builder::BatchConfigBuilder;
pub use document::InputDocument;

// Default constants

/// Default output root, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "output_noblack";

/// Cropping is on unless the job document turns it off.
pub const DEFAULT_CROP_ENABLED: bool = true;

/// Default number of frames sampled by the static video strategy.
pub const DEFAULT_MAX_FRAMES: u32 = 500;

/// Default worker count. One worker reproduces the sequential baseline;
/// `0` means one worker per logical CPU.
pub const DEFAULT_WORKERS: usize = 1;

/// Suffix appended to every output file stem.
pub const OUTPUT_SUFFIX: &str = "_noblack";

/// Black-bar detection strategy for video files.
///
/// Images always use the single static image strategy regardless of this
/// choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlgorithmChoice {
    /// Scan the whole stream and adapt to bars that change size over time.
    #[default]
    Dynamic,
    /// Sample a bounded number of frames (`max_frames`).
    Static,
}

impl AlgorithmChoice {
    /// Machine-friendly identifier used in job documents.
    pub const fn as_str(self) -> &'static str {
        match self {
            AlgorithmChoice::Dynamic => "dynamic",
            AlgorithmChoice::Static => "static",
        }
    }

    pub const fn variants_display() -> &'static str {
        "dynamic, static"
    }
}

impl fmt::Display for AlgorithmChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmChoice {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("dynamic") {
            Ok(AlgorithmChoice::Dynamic)
        } else if trimmed.eq_ignore_ascii_case("static") {
            Ok(AlgorithmChoice::Static)
        } else {
            Err(CoreError::UnsupportedAlgorithm(format!(
                "unknown video algorithm '{}'. Valid options: {}",
                s,
                AlgorithmChoice::variants_display()
            )))
        }
    }
}

/// Configuration for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Root directory scanned recursively for media files
    pub input_root: PathBuf,

    /// Root directory receiving `<stem>_noblack<ext>` outputs, mirroring the
    /// relative layout of `input_root`
    pub output_root: PathBuf,

    /// When false, every supported file is copied verbatim even if bars are found
    pub crop_enabled: bool,

    /// Detection strategy for videos
    pub video_algorithm: AlgorithmChoice,

    /// Frame sampling bound for the static video strategy
    pub max_frames: u32,

    /// Files processed concurrently (0 = one per logical CPU)
    pub workers: usize,
}

impl BatchConfig {
    /// Creates a configuration with default options for the given roots.
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            crop_enabled: DEFAULT_CROP_ENABLED,
            video_algorithm: AlgorithmChoice::default(),
            max_frames: DEFAULT_MAX_FRAMES,
            workers: DEFAULT_WORKERS,
        }
    }

    /// Checks option values. Filesystem checks on the roots happen when the
    /// batch starts, see [`crate::orchestrator::run_batch`].
    pub fn validate(&self) -> CoreResult<()> {
        if self.input_root.as_os_str().is_empty() {
            return Err(CoreError::Config("input root must not be empty".to_string()));
        }
        if self.output_root.as_os_str().is_empty() {
            return Err(CoreError::Config("output path must not be empty".to_string()));
        }
        if self.max_frames == 0 {
            return Err(CoreError::Config("max_frames must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Number of worker threads actually used for the batch.
    pub fn effective_workers(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get().max(1)
        } else {
            self.workers
        }
    }
}
