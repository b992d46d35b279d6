//! JSON job document accepted by the `noblack` binary.
//!
//! ```json
//! {
//!   "params": { "video_path": { "video_path": "clips" } },
//!   "config": {
//!     "output_path": "output_noblack",
//!     "crop_enabled": true,
//!     "video_algorithm": "dynamic",
//!     "max_frames": 500
//!   }
//! }
//! ```
//!
//! The nested `params.video_path.video_path` key names the input root for
//! image batches too; other tooling writes that shape, so it is kept.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::{
    AlgorithmChoice, BatchConfig, DEFAULT_CROP_ENABLED, DEFAULT_MAX_FRAMES, DEFAULT_OUTPUT_PATH,
    DEFAULT_WORKERS,
};
use crate::error::{CoreError, CoreResult};

/// Top-level job document.
#[derive(Debug, Clone, Deserialize)]
pub struct InputDocument {
    pub params: Params,
    pub config: ConfigSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Params {
    pub video_path: VideoPathParam,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoPathParam {
    pub video_path: String,
}

/// Optional settings; every key falls back to its documented default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConfigSection {
    pub output_path: String,
    pub crop_enabled: bool,
    pub video_algorithm: String,
    pub max_frames: u32,
    pub workers: usize,
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            crop_enabled: DEFAULT_CROP_ENABLED,
            video_algorithm: AlgorithmChoice::default().as_str().to_string(),
            max_frames: DEFAULT_MAX_FRAMES,
            workers: DEFAULT_WORKERS,
        }
    }
}

impl InputDocument {
    /// Reads and parses a job document from disk.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::InputNotFound(format!(
                "input document does not exist: {}",
                path.display()
            )));
        }
        let contents = fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("cannot read input document {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
    }

    /// Parses a job document from a JSON string.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| CoreError::Config(format!("invalid input document: {e}")))
    }

    /// Converts the document into a validated [`BatchConfig`].
    pub fn into_batch_config(self) -> CoreResult<BatchConfig> {
        let video_algorithm: AlgorithmChoice = self.config.video_algorithm.parse()?;
        let config = BatchConfig {
            input_root: self.params.video_path.video_path.into(),
            output_root: self.config.output_path.into(),
            crop_enabled: self.config.crop_enabled,
            video_algorithm,
            max_frames: self.config.max_frames,
            workers: self.config.workers,
        };
        config.validate()?;
        Ok(config)
    }
}
