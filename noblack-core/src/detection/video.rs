// ============================================================================
// noblack-core/src/detection/video.rs
// ============================================================================
//
// VIDEO DETECTION: ffmpeg cropdetect strategies
//
// Both strategies run ffmpeg's cropdetect filter through the FfmpegSpawner
// abstraction and differ only in how many frames are decoded and how the
// per-frame samples are reduced to one rectangle.
//
// - Dynamic: decodes the whole stream and returns the union envelope so that
//   bars which change size over time never clip content.
// - Static: decodes at most `max_frames` frames and returns the most common
//   sample.

use super::BlackBarDetector;
use super::cropdetect::{
    CropSample, DYNAMIC_CROPDETECT_FILTER, STATIC_CROPDETECT_FILTER, most_common, parse_crop_samples,
    union_envelope,
};
use crate::error::{CoreError, CoreResult};
use crate::external::{FfmpegSpawner, SidecarSpawner, run_ffmpeg};
use crate::media::DetectedRegion;
use std::path::Path;
use std::sync::Arc;

/// Builds the cropdetect argument list. `max_frames` of `None` decodes the
/// whole stream with the dynamic filter; `Some` bounds decoding and uses the
/// per-frame static filter.
fn cropdetect_args(input: &Path, max_frames: Option<u32>) -> Vec<String> {
    let mut args = vec!["-i".to_string(), input.to_string_lossy().into_owned()];
    let filter = match max_frames {
        Some(frames) => {
            args.push("-frames:v".to_string());
            args.push(frames.to_string());
            STATIC_CROPDETECT_FILTER
        }
        None => DYNAMIC_CROPDETECT_FILTER,
    };
    args.extend(
        ["-vf", filter, "-an", "-f", "null", "-"]
            .iter()
            .map(|s| (*s).to_string()),
    );
    args
}

/// Runs cropdetect and returns every parsed sample. No samples at all is a
/// detection failure.
fn collect_samples<S: FfmpegSpawner>(
    spawner: &S,
    input: &Path,
    max_frames: Option<u32>,
) -> CoreResult<Vec<CropSample>> {
    let args = cropdetect_args(input, max_frames);
    let run = run_ffmpeg(spawner, "ffmpeg (cropdetect)", &args)?;

    let samples = parse_crop_samples(run.log_lines.iter().map(String::as_str));
    log::debug!("cropdetect produced {} samples for {}", samples.len(), input.display());

    if samples.is_empty() {
        return Err(CoreError::DetectionFailure(format!(
            "ffmpeg reported no crop samples for {}",
            input.display()
        )));
    }
    Ok(samples)
}

/// Falls back to the first sample when none is positive, so a frame with no
/// content surfaces as a degenerate region instead of a silent full frame.
fn degenerate_fallback(samples: &[CropSample]) -> Option<CropSample> {
    samples.first().copied()
}

/// Whole-stream cropdetect reduced to the union envelope of all samples.
pub struct DynamicVideoDetector<S: FfmpegSpawner = SidecarSpawner> {
    spawner: Arc<S>,
}

impl<S: FfmpegSpawner> DynamicVideoDetector<S> {
    pub fn new(spawner: Arc<S>) -> Self {
        Self { spawner }
    }
}

impl<S: FfmpegSpawner> BlackBarDetector for DynamicVideoDetector<S> {
    fn name(&self) -> &'static str {
        "video-dynamic"
    }

    fn detect(&self, path: &Path) -> CoreResult<DetectedRegion> {
        let samples = collect_samples(self.spawner.as_ref(), path, None)?;
        union_envelope(&samples)
            .or_else(|| degenerate_fallback(&samples))
            .map(CropSample::to_region)
            .ok_or_else(|| CoreError::DetectionFailure(format!("no usable samples for {}", path.display())))
    }
}

/// Cropdetect over the first `max_frames` frames, reduced to the most common sample.
pub struct StaticVideoDetector<S: FfmpegSpawner = SidecarSpawner> {
    spawner: Arc<S>,
    max_frames: u32,
}

impl<S: FfmpegSpawner> StaticVideoDetector<S> {
    pub fn new(spawner: Arc<S>, max_frames: u32) -> Self {
        Self { spawner, max_frames }
    }
}

impl<S: FfmpegSpawner> BlackBarDetector for StaticVideoDetector<S> {
    fn name(&self) -> &'static str {
        "video-static"
    }

    fn detect(&self, path: &Path) -> CoreResult<DetectedRegion> {
        let samples = collect_samples(self.spawner.as_ref(), path, Some(self.max_frames))?;
        let positive: Vec<CropSample> = samples.iter().copied().filter(CropSample::is_positive).collect();
        most_common(&positive)
            .or_else(|| degenerate_fallback(&samples))
            .map(CropSample::to_region)
            .ok_or_else(|| CoreError::DetectionFailure(format!("no usable samples for {}", path.display())))
    }
}
