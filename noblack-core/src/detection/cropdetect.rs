//! Parsing of ffmpeg `cropdetect` log output.
//!
//! `cropdetect` prints one line per analysed frame ending in
//! `crop=w:h:x:y`. On frames with no detectable content ffmpeg reports
//! negative sizes, so samples are parsed as signed values and left for the
//! caller to judge.

use crate::media::DetectedRegion;
use std::collections::HashMap;

/// Whole-stream filter. `reset=0` makes every sample the running union so
/// far; `skip=0` keeps ffmpeg from discarding the first two frames.
pub const DYNAMIC_CROPDETECT_FILTER: &str = "cropdetect=limit=24:round=2:skip=0:reset=0";

/// Bounded-sample filter. `reset=1` makes each sample describe its own frame.
pub const STATIC_CROPDETECT_FILTER: &str = "cropdetect=limit=24:round=2:skip=0:reset=1";

/// One `crop=w:h:x:y` sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CropSample {
    pub width: i64,
    pub height: i64,
    pub x: i64,
    pub y: i64,
}

impl CropSample {
    pub fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0 && self.x >= 0 && self.y >= 0
    }

    pub fn area(&self) -> i64 {
        self.width.saturating_mul(self.height)
    }

    pub fn to_region(self) -> DetectedRegion {
        DetectedRegion::Video {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Extracts every well-formed crop sample from the given lines, in order.
pub fn parse_crop_samples<'a, I>(lines: I) -> Vec<CropSample>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().filter_map(parse_crop_line).collect()
}

fn parse_crop_line(line: &str) -> Option<CropSample> {
    let crop_pos = line.rfind("crop=")?;
    let crop_part = &line[crop_pos + 5..];

    // Value runs until whitespace or end of line
    let end_pos = crop_part
        .find(|c: char| c.is_whitespace())
        .unwrap_or(crop_part.len());

    parse_crop_value(&crop_part[..end_pos])
}

/// Parses `w:h:x:y`. Anything else is rejected.
fn parse_crop_value(crop: &str) -> Option<CropSample> {
    let parts: Vec<i64> = crop
        .split(':')
        .map(|part| part.parse::<i64>().ok())
        .collect::<Option<Vec<_>>>()?;

    match parts.as_slice() {
        &[width, height, x, y] => Some(CropSample { width, height, x, y }),
        _ => None,
    }
}

/// Smallest rectangle containing every positive sample.
///
/// Returns `None` when there are no positive samples.
pub fn union_envelope(samples: &[CropSample]) -> Option<CropSample> {
    let mut positive = samples.iter().filter(|s| s.is_positive());
    let first = positive.next()?;

    let (mut left, mut top) = (first.x, first.y);
    let (mut right, mut bottom) = (first.x + first.width, first.y + first.height);
    for sample in positive {
        left = left.min(sample.x);
        top = top.min(sample.y);
        right = right.max(sample.x + sample.width);
        bottom = bottom.max(sample.y + sample.height);
    }

    Some(CropSample {
        width: right - left,
        height: bottom - top,
        x: left,
        y: top,
    })
}

/// Most frequent sample. Ties go to the larger area, then to the sample
/// seen first.
pub fn most_common(samples: &[CropSample]) -> Option<CropSample> {
    let mut counts: HashMap<CropSample, (usize, usize)> = HashMap::new();
    for (index, sample) in samples.iter().enumerate() {
        counts.entry(*sample).or_insert((0, index)).0 += 1;
    }

    counts
        .into_iter()
        .max_by(|(a, (count_a, first_a)), (b, (count_b, first_b))| {
            count_a
                .cmp(count_b)
                .then(a.area().cmp(&b.area()))
                .then(first_b.cmp(first_a))
        })
        .map(|(sample, _)| sample)
}
