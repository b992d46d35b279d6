//! Crop executors.
//!
//! A [`CropExecutor`] writes a cropped copy of `src` to `dst`. Executors
//! re-validate the rectangle before running and create the destination's
//! parent directories themselves.

pub mod image_codec;
pub mod video;

use crate::error::CoreResult;
use crate::media::CropRect;
use std::fs;
use std::path::Path;

pub use image_codec::ImageCropExecutor;
pub use video::FfmpegCropExecutor;

/// Writes a cropped copy of a source file.
pub trait CropExecutor: Send + Sync {
    fn name(&self) -> &'static str;

    fn crop(&self, src: &Path, dst: &Path, rect: &CropRect) -> CoreResult<()>;
}

/// Creates the parent directory of `dst` if it has one.
pub(crate) fn ensure_parent_dir(dst: &Path) -> CoreResult<()> {
    if let Some(parent) = dst.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
