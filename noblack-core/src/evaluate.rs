//! Decides whether a detected region means the source has black bars.

use crate::error::CoreResult;
use crate::media::{DetectedRegion, Dimensions};

/// Compares a detected region against the probed native size.
///
/// The region is normalized first, so a degenerate region is an error and
/// never reads as "no bars". Video-style regions compare size only; image
/// regions compare all four corners against the full frame.
pub fn has_black_bars(region: &DetectedRegion, native: Dimensions) -> CoreResult<bool> {
    region.normalize()?;

    let width = i64::from(native.width);
    let height = i64::from(native.height);
    let bars = match *region {
        DetectedRegion::Video { width: w, height: h, .. } => (w, h) != (width, height),
        DetectedRegion::Image { x1, y1, x2, y2 } => (x1, y1, x2, y2) != (0, 0, width, height),
    };
    Ok(bars)
}
