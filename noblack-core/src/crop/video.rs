// ============================================================================
// noblack-core/src/crop/video.rs
// ============================================================================
//
// VIDEO CROP: re-encode with ffmpeg's crop filter
//
// The crop runs as a single synchronous ffmpeg invocation:
//
//   ffmpeg -i SRC -vf crop=W:H:X:Y -c:v libx264 -crf 23 -preset medium -c:a copy -y DST
//
// Spawn failures (ffmpeg missing) and non-zero exits both surface as errors
// for the file being cropped, carrying ffmpeg's error lines.

use super::{CropExecutor, ensure_parent_dir};
use crate::error::CoreResult;
use crate::external::{FfmpegSpawner, SidecarSpawner, run_ffmpeg};
use crate::media::CropRect;
use std::path::Path;
use std::sync::Arc;

/// Video codec used for cropped output.
pub const VIDEO_CODEC: &str = "libx264";

/// Constant rate factor for cropped output.
pub const VIDEO_CRF: u8 = 23;

/// x264 preset for cropped output.
pub const VIDEO_PRESET: &str = "medium";

/// Builds the full ffmpeg argument list for a crop.
pub fn crop_args(src: &Path, dst: &Path, rect: &CropRect) -> Vec<String> {
    vec![
        "-i".to_string(),
        src.to_string_lossy().into_owned(),
        "-vf".to_string(),
        rect.ffmpeg_filter(),
        "-c:v".to_string(),
        VIDEO_CODEC.to_string(),
        "-crf".to_string(),
        VIDEO_CRF.to_string(),
        "-preset".to_string(),
        VIDEO_PRESET.to_string(),
        "-c:a".to_string(),
        "copy".to_string(),
        "-y".to_string(),
        dst.to_string_lossy().into_owned(),
    ]
}

pub struct FfmpegCropExecutor<S: FfmpegSpawner = SidecarSpawner> {
    spawner: Arc<S>,
}

impl<S: FfmpegSpawner> FfmpegCropExecutor<S> {
    pub fn new(spawner: Arc<S>) -> Self {
        Self { spawner }
    }
}

impl<S: FfmpegSpawner> CropExecutor for FfmpegCropExecutor<S> {
    fn name(&self) -> &'static str {
        "ffmpeg"
    }

    fn crop(&self, src: &Path, dst: &Path, rect: &CropRect) -> CoreResult<()> {
        rect.ensure_non_empty()?;
        ensure_parent_dir(dst)?;

        let args = crop_args(src, dst, rect);
        log::debug!("Cropping {} with {}", src.display(), rect.ffmpeg_filter());
        run_ffmpeg(self.spawner.as_ref(), "ffmpeg (crop)", &args)?;
        Ok(())
    }
}
