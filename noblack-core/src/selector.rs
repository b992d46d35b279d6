//! Strategy table mapping `(MediaKind, AlgorithmChoice)` to a detector.

use crate::config::AlgorithmChoice;
use crate::detection::{BlackBarDetector, DynamicVideoDetector, ImageEdgeDetector, StaticVideoDetector};
use crate::error::{CoreError, CoreResult};
use crate::external::FfmpegSpawner;
use crate::media::MediaKind;
use std::sync::Arc;

/// One detector per supported (kind, algorithm) pair.
pub struct DetectorSet {
    dynamic_video: Box<dyn BlackBarDetector>,
    static_video: Box<dyn BlackBarDetector>,
    image: Box<dyn BlackBarDetector>,
}

impl DetectorSet {
    pub fn new(
        dynamic_video: Box<dyn BlackBarDetector>,
        static_video: Box<dyn BlackBarDetector>,
        image: Box<dyn BlackBarDetector>,
    ) -> Self {
        Self { dynamic_video, static_video, image }
    }

    /// The shipped detectors, with both video strategies sharing `spawner`.
    pub fn with_spawner<S>(spawner: Arc<S>, max_frames: u32) -> Self
    where
        S: FfmpegSpawner + 'static,
    {
        Self::new(
            Box::new(DynamicVideoDetector::new(Arc::clone(&spawner))),
            Box::new(StaticVideoDetector::new(spawner, max_frames)),
            Box::new(ImageEdgeDetector::default()),
        )
    }

    /// Picks the detector for a file. Images ignore `choice`.
    pub fn select(&self, kind: MediaKind, choice: AlgorithmChoice) -> CoreResult<&dyn BlackBarDetector> {
        match (kind, choice) {
            (MediaKind::Video, AlgorithmChoice::Dynamic) => Ok(self.dynamic_video.as_ref()),
            (MediaKind::Video, AlgorithmChoice::Static) => Ok(self.static_video.as_ref()),
            (MediaKind::Image, _) => Ok(self.image.as_ref()),
            (MediaKind::Unsupported, _) => Err(CoreError::UnsupportedAlgorithm(format!(
                "no detector for {kind} media"
            ))),
        }
    }
}
