//! Core library for batch black-bar removal in images and videos.
//!
//! This crate walks a directory tree, detects letterbox and pillarbox bars in
//! every supported file, and writes either a cropped or a verbatim copy to a
//! mirrored output tree. Detection, dimension probing and cropping sit behind
//! traits so the orchestrator can be driven with any implementation.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use noblack_core::{AlgorithmChoice, BatchConfigBuilder, Toolkit, run_batch};
//!
//! let config = BatchConfigBuilder::new()
//!     .input_root("clips")
//!     .output_root("output_noblack")
//!     .video_algorithm(AlgorithmChoice::Static)
//!     .max_frames(200)
//!     .build_validated()
//!     .unwrap();
//!
//! let toolkit = Toolkit::system(&config);
//! let report = run_batch(&config, &toolkit).unwrap();
//! println!("{:?}", report.summary());
//! ```

pub mod config;
pub mod crop;
pub mod detection;
pub mod discovery;
pub mod error;
pub mod evaluate;
pub mod external;
pub mod file_logging;
pub mod media;
pub mod orchestrator;
pub mod report;
pub mod selector;
pub mod system_info;
pub mod terminal_output;
pub mod utils;

// Re-exports for public API
pub use config::{AlgorithmChoice, BatchConfig, BatchConfigBuilder, InputDocument};
pub use crop::{CropExecutor, FfmpegCropExecutor, ImageCropExecutor};
pub use detection::{BlackBarDetector, DynamicVideoDetector, ImageEdgeDetector, StaticVideoDetector};
pub use discovery::{enumerate_media_files, target_path_for};
pub use error::{CoreError, CoreResult};
pub use evaluate::has_black_bars;
pub use external::{DimensionProber, FfmpegSpawner, MediaProber, SidecarSpawner};
pub use media::{CropRect, DetectedRegion, Dimensions, MediaKind, MediaPath, classify};
pub use orchestrator::{Toolkit, process_file, run_batch};
pub use report::{BatchReport, BatchSummary, FileOutcome, FileReport, JobResult};
pub use selector::DetectorSet;
pub use system_info::EnvironmentInfo;
pub use utils::{format_bytes, format_duration};
