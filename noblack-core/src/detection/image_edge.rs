//! Edge-scan detector for still images.
//!
//! The image is decoded, converted to 8-bit luma, and scanned inward from each
//! edge. A row or column is a bar while every pixel in it is at or below the
//! black threshold. The result uses corner form with exclusive `x2`/`y2`.

use super::BlackBarDetector;
use crate::error::CoreResult;
use crate::media::DetectedRegion;
use image::GrayImage;
use std::path::Path;

/// Luma value at or below which a pixel counts as black.
pub const DEFAULT_BLACK_THRESHOLD: u8 = 16;

#[derive(Debug, Clone, Copy)]
pub struct ImageEdgeDetector {
    threshold: u8,
}

impl Default for ImageEdgeDetector {
    fn default() -> Self {
        Self::new(DEFAULT_BLACK_THRESHOLD)
    }
}

impl ImageEdgeDetector {
    pub fn new(threshold: u8) -> Self {
        Self { threshold }
    }

    /// Content region of an already decoded luma image.
    pub fn content_region(&self, luma: &GrayImage) -> DetectedRegion {
        let (width, height) = luma.dimensions();
        let is_black = |x: u32, y: u32| luma.get_pixel(x, y)[0] <= self.threshold;
        let row_is_black = |y: u32| (0..width).all(|x| is_black(x, y));

        let Some(top) = (0..height).find(|&y| !row_is_black(y)) else {
            // Nothing but black: report an empty region
            return DetectedRegion::Image { x1: 0, y1: 0, x2: 0, y2: 0 };
        };
        // A non-black row exists, so this search always succeeds
        let bottom = (top..height).rev().find(|&y| !row_is_black(y)).unwrap_or(top) + 1;

        let column_is_black = |x: u32| (top..bottom).all(|y| is_black(x, y));
        let left = (0..width).find(|&x| !column_is_black(x)).unwrap_or(0);
        let right = (left..width).rev().find(|&x| !column_is_black(x)).unwrap_or(left) + 1;

        DetectedRegion::Image {
            x1: i64::from(left),
            y1: i64::from(top),
            x2: i64::from(right),
            y2: i64::from(bottom),
        }
    }
}

impl BlackBarDetector for ImageEdgeDetector {
    fn name(&self) -> &'static str {
        "image-edge"
    }

    fn detect(&self, path: &Path) -> CoreResult<DetectedRegion> {
        let luma = image::open(path)?.to_luma8();
        let region = self.content_region(&luma);
        log::debug!("Edge scan of {} found content {}", path.display(), region);
        Ok(region)
    }
}
