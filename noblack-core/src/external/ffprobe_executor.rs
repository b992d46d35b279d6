//! Native dimension probing for videos (ffprobe) and images (image headers).
//!
//! The orchestrator compares a detected region against these dimensions to
//! decide whether a source has black bars. They are always obtained here,
//! independently of the detector that produced the region.
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::media::{Dimensions, MediaKind};
use ffprobe::{FfProbeError, ffprobe};
use std::path::Path;

/// Source of native media dimensions.
pub trait DimensionProber: Send + Sync {
    fn dimensions(&self, path: &Path, kind: MediaKind) -> CoreResult<Dimensions>;
}

/// Default prober: ffprobe for video, the `image` crate's header reader for images.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaProber;

impl MediaProber {
    pub fn new() -> Self {
        Self
    }
}

impl DimensionProber for MediaProber {
    fn dimensions(&self, path: &Path, kind: MediaKind) -> CoreResult<Dimensions> {
        match kind {
            MediaKind::Video => get_video_dimensions(path),
            MediaKind::Image => get_image_dimensions(path),
            MediaKind::Unsupported => Err(CoreError::OperationFailed(format!(
                "cannot probe dimensions of unsupported file {}",
                path.display()
            ))),
        }
    }
}

/// Gets the width and height of the first video stream.
pub fn get_video_dimensions(input_path: &Path) -> CoreResult<Dimensions> {
    log::debug!(
        "Running ffprobe (via crate) for video dimensions on: {}",
        input_path.display()
    );
    match ffprobe(input_path) {
        Ok(metadata) => {
            let video_stream = metadata
                .streams
                .iter()
                .find(|s| s.codec_type.as_deref() == Some("video"))
                .ok_or_else(|| {
                    CoreError::FfprobeParse(format!(
                        "No video stream found in {}",
                        input_path.display()
                    ))
                })?;
            let width = video_stream.width.ok_or_else(|| {
                CoreError::FfprobeParse(format!(
                    "Video stream missing width in {}",
                    input_path.display()
                ))
            })?;
            let height = video_stream.height.ok_or_else(|| {
                CoreError::FfprobeParse(format!(
                    "Video stream missing height in {}",
                    input_path.display()
                ))
            })?;

            dimensions_from_stream(width, height).ok_or_else(|| {
                CoreError::FfprobeParse(format!(
                    "Invalid dimensions found in {}: width={}, height={}",
                    input_path.display(),
                    width,
                    height
                ))
            })
        }
        Err(err) => {
            log::error!("ffprobe failed for video dimensions on {}: {:?}", input_path.display(), err);
            Err(map_ffprobe_error(err, "video dimensions"))
        }
    }
}

/// Reads image dimensions from the file header without decoding pixel data.
pub fn get_image_dimensions(input_path: &Path) -> CoreResult<Dimensions> {
    let (width, height) = image::image_dimensions(input_path)?;
    Ok(Dimensions::new(width, height))
}

fn dimensions_from_stream(width: i64, height: i64) -> Option<Dimensions> {
    let width = u32::try_from(width).ok().filter(|w| *w > 0)?;
    let height = u32::try_from(height).ok().filter(|h| *h > 0)?;
    Some(Dimensions::new(width, height))
}

fn map_ffprobe_error(err: FfProbeError, context: &str) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => {
            command_start_error(format!("ffprobe ({context})"), io_err)
        }
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            command_failed_error(format!("ffprobe ({context})"), output.status, stderr)
        }
        FfProbeError::Deserialize(err) => CoreError::JsonParseError(format!(
            "ffprobe {context} output deserialization: {err}"
        )),
        _ => CoreError::FfprobeParse(format!(
            "Unknown ffprobe error during {context}: {err:?}"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use tempfile::tempdir;

    #[test]
    fn stream_dimensions_must_be_positive() {
        assert_eq!(dimensions_from_stream(1920, 800), Some(Dimensions::new(1920, 800)));
        assert_eq!(dimensions_from_stream(0, 800), None);
        assert_eq!(dimensions_from_stream(1920, -1), None);
    }

    #[test]
    fn image_dimensions_come_from_the_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frame.png");
        GrayImage::from_pixel(64, 48, Luma([200])).save(&path).unwrap();

        let dims = MediaProber::new().dimensions(&path, MediaKind::Image).unwrap();
        assert_eq!(dims, Dimensions::new(64, 48));
    }

    #[test]
    fn unreadable_image_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();
        assert!(MediaProber::new().dimensions(&path, MediaKind::Image).is_err());
    }

    #[test]
    fn unsupported_kind_cannot_be_probed() {
        let result = MediaProber::new().dimensions(Path::new("notes.txt"), MediaKind::Unsupported);
        assert!(matches!(result, Err(CoreError::OperationFailed(_))));
    }
}
