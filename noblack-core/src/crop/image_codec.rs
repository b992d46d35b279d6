//! Image crop through the `image` crate.
//!
//! The output format follows the destination's extension. Animated GIFs are
//! decoded to their first frame, so only that frame survives the crop.

use super::{CropExecutor, ensure_parent_dir};
use crate::error::{CoreError, CoreResult};
use crate::media::{CropRect, Dimensions};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCropExecutor;

impl ImageCropExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CropExecutor for ImageCropExecutor {
    fn name(&self) -> &'static str {
        "image"
    }

    fn crop(&self, src: &Path, dst: &Path, rect: &CropRect) -> CoreResult<()> {
        rect.ensure_non_empty()?;

        let img = image::open(src)?;
        let dims = Dimensions::new(img.width(), img.height());
        if !rect.fits_within(dims) {
            return Err(CoreError::InvalidCropRectangle(format!(
                "{rect} exceeds the {dims} image {}",
                src.display()
            )));
        }

        ensure_parent_dir(dst)?;
        img.crop_imm(rect.x, rect.y, rect.width, rect.height).save(dst)?;
        log::debug!("Cropped {} to {} -> {}", src.display(), rect, dst.display());
        Ok(())
    }
}
