// ============================================================================
// noblack-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for BatchConfig
//
// Fluent construction of BatchConfig with the documented defaults. The
// builder never fails; call `BatchConfig::validate` (or `build_validated`)
// before starting a batch.

use std::path::PathBuf;

use super::{AlgorithmChoice, BatchConfig};
use crate::error::CoreResult;

/// Builder for creating [`BatchConfig`] instances.
///
/// # Examples
///
/// ```rust
/// use noblack_core::config::{AlgorithmChoice, BatchConfigBuilder};
///
/// let config = BatchConfigBuilder::new()
///     .input_root("/path/to/clips")
///     .output_root("/path/to/output")
///     .crop_enabled(true)
///     .video_algorithm(AlgorithmChoice::Static)
///     .max_frames(10)
///     .build();
///
/// assert_eq!(config.max_frames, 10);
/// ```
#[derive(Debug, Clone)]
pub struct BatchConfigBuilder {
    config: BatchConfig,
}

impl Default for BatchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchConfigBuilder {
    /// Creates a builder with an empty input root and the default output root.
    pub fn new() -> Self {
        Self {
            config: BatchConfig::new(PathBuf::new(), super::DEFAULT_OUTPUT_PATH),
        }
    }

    /// Sets the directory scanned for media.
    pub fn input_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_root = path.into();
        self
    }

    /// Sets the directory receiving outputs.
    pub fn output_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_root = path.into();
        self
    }

    /// Enables or disables cropping. Disabled means every file is copied.
    pub fn crop_enabled(mut self, enabled: bool) -> Self {
        self.config.crop_enabled = enabled;
        self
    }

    /// Sets the video detection strategy.
    pub fn video_algorithm(mut self, algorithm: AlgorithmChoice) -> Self {
        self.config.video_algorithm = algorithm;
        self
    }

    /// Sets the frame sampling bound for the static video strategy.
    pub fn max_frames(mut self, max_frames: u32) -> Self {
        self.config.max_frames = max_frames;
        self
    }

    /// Sets the number of concurrent workers (0 = one per logical CPU).
    pub fn workers(mut self, workers: usize) -> Self {
        self.config.workers = workers;
        self
    }

    pub fn build(self) -> BatchConfig {
        self.config
    }

    /// Builds and validates in one step.
    pub fn build_validated(self) -> CoreResult<BatchConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
