//! Rectangles and dimensions shared by detectors, the evaluator and croppers.
//!
//! Detectors report content regions in one of two shapes. Video detectors
//! speak ffmpeg's `x, y, width, height`; the image detector reports corner
//! points `x1, y1, x2, y2` (exclusive `x2`/`y2`). Both are signed because a
//! detector may legitimately report a degenerate region, for example ffmpeg's
//! `cropdetect` on an all-black frame. [`DetectedRegion::normalize`] turns
//! either shape into the canonical unsigned [`CropRect`] or rejects it.

use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Native width and height of an unmodified source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Content region as reported by a detector, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedRegion {
    /// Video-style rectangle: top-left corner plus size.
    Video { x: i64, y: i64, width: i64, height: i64 },
    /// Image-style rectangle: top-left and exclusive bottom-right corners.
    Image { x1: i64, y1: i64, x2: i64, y2: i64 },
}

impl DetectedRegion {
    /// Returns `(x, y, width, height)` without validation.
    pub fn as_xywh(&self) -> (i64, i64, i64, i64) {
        match *self {
            DetectedRegion::Video { x, y, width, height } => (x, y, width, height),
            DetectedRegion::Image { x1, y1, x2, y2 } => (x1, y1, x2 - x1, y2 - y1),
        }
    }

    /// Converts to the canonical form, failing on non-positive size or a
    /// negative origin.
    pub fn normalize(&self) -> CoreResult<CropRect> {
        let (x, y, width, height) = self.as_xywh();
        if width <= 0 || height <= 0 || x < 0 || y < 0 {
            return Err(CoreError::InvalidCropRectangle(format!(
                "{self} normalizes to x={x} y={y} width={width} height={height}"
            )));
        }
        let to_u32 = |value: i64| {
            u32::try_from(value).map_err(|_| {
                CoreError::InvalidCropRectangle(format!("{self} exceeds the supported range"))
            })
        };
        Ok(CropRect {
            x: to_u32(x)?,
            y: to_u32(y)?,
            width: to_u32(width)?,
            height: to_u32(height)?,
        })
    }
}

impl fmt::Display for DetectedRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectedRegion::Video { x, y, width, height } => {
                write!(f, "(x={x}, y={y}, w={width}, h={height})")
            }
            DetectedRegion::Image { x1, y1, x2, y2 } => {
                write!(f, "(x1={x1}, y1={y1}, x2={x2}, y2={y2})")
            }
        }
    }
}

/// Validated crop rectangle in source pixel coordinates.
///
/// Construct through [`DetectedRegion::normalize`] or [`CropRect::new`]; the
/// crop executors re-check `width > 0 && height > 0` before running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u64 {
        u64::from(self.x) + u64::from(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u64 {
        u64::from(self.y) + u64::from(self.height)
    }

    /// Fails with `InvalidCropRectangle` when either side is zero.
    pub fn ensure_non_empty(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::InvalidCropRectangle(format!(
                "width and height must be positive, got {self}"
            )));
        }
        Ok(())
    }

    /// Whether the rectangle lies inside a frame of the given size.
    pub fn fits_within(&self, dims: Dimensions) -> bool {
        self.right() <= u64::from(dims.width) && self.bottom() <= u64::from(dims.height)
    }

    /// ffmpeg crop filter, `crop=width:height:x:y`.
    pub fn ffmpeg_filter(&self) -> String {
        format!("crop={}:{}:{}:{}", self.width, self.height, self.x, self.y)
    }
}

impl fmt::Display for CropRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_region_normalizes_unchanged() {
        let region = DetectedRegion::Video { x: 0, y: 140, width: 1920, height: 520 };
        assert_eq!(region.normalize().unwrap(), CropRect::new(0, 140, 1920, 520));
    }

    #[test]
    fn image_corners_become_width_and_height() {
        let region = DetectedRegion::Image { x1: 10, y1: 20, x2: 110, y2: 70 };
        assert_eq!(region.normalize().unwrap(), CropRect::new(10, 20, 100, 50));
    }

    #[test]
    fn degenerate_regions_are_rejected() {
        let cases = [
            DetectedRegion::Video { x: 0, y: 0, width: 0, height: 100 },
            DetectedRegion::Video { x: 0, y: 0, width: 100, height: -4 },
            DetectedRegion::Video { x: -2, y: 0, width: 100, height: 100 },
            DetectedRegion::Image { x1: 50, y1: 0, x2: 50, y2: 10 },
            DetectedRegion::Image { x1: 0, y1: 30, x2: 10, y2: 10 },
        ];
        for region in cases {
            assert!(
                matches!(region.normalize(), Err(CoreError::InvalidCropRectangle(_))),
                "{region} should be rejected"
            );
        }
    }

    #[test]
    fn oversized_values_are_rejected() {
        let region = DetectedRegion::Video { x: 0, y: 0, width: i64::from(u32::MAX) + 1, height: 1 };
        assert!(region.normalize().is_err());
    }

    #[test]
    fn ffmpeg_filter_orders_size_before_offset() {
        assert_eq!(CropRect::new(0, 140, 1920, 520).ffmpeg_filter(), "crop=1920:520:0:140");
    }

    #[test]
    fn fits_within_checks_both_edges() {
        let dims = Dimensions::new(100, 50);
        assert!(CropRect::new(0, 0, 100, 50).fits_within(dims));
        assert!(!CropRect::new(1, 0, 100, 50).fits_within(dims));
        assert!(!CropRect::new(0, 10, 10, 41).fits_within(dims));
    }

    #[test]
    fn empty_rect_fails_non_empty_check() {
        assert!(CropRect::new(0, 0, 0, 10).ensure_non_empty().is_err());
        assert!(CropRect::new(0, 0, 1, 1).ensure_non_empty().is_ok());
    }
}
