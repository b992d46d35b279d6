//! Black-bar detection.
//!
//! Every detector answers the same question: which part of this file is
//! content? The answer is a [`DetectedRegion`] in the detector's native shape.
//! Detectors never decide whether bars exist; that comparison against the
//! probed native size happens in [`crate::evaluate`].
//!
//! Shipped implementations:
//! - [`DynamicVideoDetector`]: whole-stream `cropdetect`, union envelope
//! - [`StaticVideoDetector`]: first `max_frames` frames, most common sample
//! - [`ImageEdgeDetector`]: luma edge scan on the decoded image

pub mod cropdetect;
pub mod image_edge;
pub mod video;

use crate::error::CoreResult;
use crate::media::DetectedRegion;
use std::path::Path;

pub use cropdetect::{CropSample, parse_crop_samples};
pub use image_edge::{DEFAULT_BLACK_THRESHOLD, ImageEdgeDetector};
pub use video::{DynamicVideoDetector, StaticVideoDetector};

/// A black-bar detection strategy.
///
/// Implementations are shared across worker threads. Errors are per-file:
/// the orchestrator records them against the file being processed.
pub trait BlackBarDetector: Send + Sync {
    /// Short identifier used in log lines.
    fn name(&self) -> &'static str;

    /// Reports the content region of the file at `path`.
    fn detect(&self, path: &Path) -> CoreResult<DetectedRegion>;
}
