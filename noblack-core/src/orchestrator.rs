// ============================================================================
// noblack-core/src/orchestrator.rs
// ============================================================================
//
// BATCH ORCHESTRATION: crop-or-copy over a directory tree
//
// WORKFLOW:
// 1. Validate the configuration and the input root, create the output root
// 2. Enumerate every regular file under the input root
// 3. For each file:
//    a. Classify; unsupported files are skipped
//    b. Resolve the target path; an existing target is skipped
//    c. Select a detector, detect, normalize the region
//    d. Probe native dimensions and evaluate whether bars exist
//    e. Copy verbatim, or crop with the kind-appropriate executor
// 4. Collect one FileReport per file into a BatchReport
//
// Errors in step 1 abort the batch. Errors in step 3 are recorded against the
// file and processing continues. With more than one worker, files run on a
// dedicated rayon pool of that size.

// ---- Internal crate imports ----
use crate::config::BatchConfig;
use crate::crop::{CropExecutor, FfmpegCropExecutor, ImageCropExecutor};
use crate::discovery::{enumerate_media_files, target_path_for};
use crate::error::{CoreError, CoreResult};
use crate::evaluate::has_black_bars;
use crate::external::{DimensionProber, FfmpegSpawner, MediaProber, SidecarSpawner, check_dependency};
use crate::media::{MediaKind, MediaPath};
use crate::report::{BatchReport, FileOutcome, FileReport};
use crate::selector::DetectorSet;
use crate::terminal_output;
use crate::utils::{format_bytes, format_duration, total_size};

// ---- External crate imports ----
use rayon::prelude::*;

// ---- Standard library imports ----
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

// ============================================================================
// COLLABORATORS
// ============================================================================

/// Everything the orchestrator delegates to.
pub struct Toolkit {
    pub detectors: DetectorSet,
    pub prober: Box<dyn DimensionProber>,
    pub video_cropper: Box<dyn CropExecutor>,
    pub image_cropper: Box<dyn CropExecutor>,
}

impl Toolkit {
    pub fn new(
        detectors: DetectorSet,
        prober: Box<dyn DimensionProber>,
        video_cropper: Box<dyn CropExecutor>,
        image_cropper: Box<dyn CropExecutor>,
    ) -> Self {
        Self {
            detectors,
            prober,
            video_cropper,
            image_cropper,
        }
    }

    /// The shipped collaborators, with every ffmpeg call going through `spawner`.
    pub fn with_spawner<S>(spawner: Arc<S>, config: &BatchConfig) -> Self
    where
        S: FfmpegSpawner + 'static,
    {
        Self::new(
            DetectorSet::with_spawner(Arc::clone(&spawner), config.max_frames),
            Box::new(MediaProber::new()),
            Box::new(FfmpegCropExecutor::new(spawner)),
            Box::new(ImageCropExecutor::new()),
        )
    }

    /// The shipped collaborators backed by the system ffmpeg.
    pub fn system(config: &BatchConfig) -> Self {
        Self::with_spawner(Arc::new(SidecarSpawner), config)
    }

    fn cropper_for(&self, kind: MediaKind) -> CoreResult<&dyn CropExecutor> {
        match kind {
            MediaKind::Video => Ok(self.video_cropper.as_ref()),
            MediaKind::Image => Ok(self.image_cropper.as_ref()),
            MediaKind::Unsupported => Err(CoreError::OperationFailed(
                "no crop executor for unsupported media".to_string(),
            )),
        }
    }
}

// ============================================================================
// BATCH ENTRY POINT
// ============================================================================

/// Runs one batch.
///
/// Returns `Err` only for fatal setup problems. Per-file failures are part of
/// the returned report.
///
/// # Examples
///
/// ```rust,no_run
/// use noblack_core::{BatchConfig, Toolkit, run_batch};
///
/// let config = BatchConfig::new("clips", "output_noblack");
/// let toolkit = Toolkit::system(&config);
/// let report = run_batch(&config, &toolkit)?;
/// println!("{} files failed", report.summary().failed);
/// # Ok::<(), noblack_core::CoreError>(())
/// ```
pub fn run_batch(config: &BatchConfig, toolkit: &Toolkit) -> CoreResult<BatchReport> {
    let start = Instant::now();

    // ========================================================================
    // STEP 1: VALIDATE
    // ========================================================================

    config.validate()?;
    prepare_roots(config)?;

    // ========================================================================
    // STEP 2: ENUMERATE
    // ========================================================================

    let files = enumerate_media_files(&config.input_root, &config.output_root)?;
    let workers = config.effective_workers();

    terminal_output::print_section("Batch");
    terminal_output::print_status("Input", &config.input_root.display().to_string(), false);
    terminal_output::print_status("Output", &config.output_root.display().to_string(), false);
    terminal_output::print_status("Files found", &files.len().to_string(), true);
    terminal_output::print_status("Video algorithm", config.video_algorithm.as_str(), false);
    terminal_output::print_status("Cropping", if config.crop_enabled { "enabled" } else { "disabled" }, false);
    terminal_output::print_status("Workers", &workers.to_string(), false);

    if files.iter().any(|f| MediaKind::from_path(f) == MediaKind::Video) {
        warn_on_missing_tools();
    }

    // ========================================================================
    // STEP 3: PROCESS EACH FILE
    // ========================================================================

    terminal_output::print_section("Processing");
    let process = |source: &PathBuf| {
        let report = process_file(config, toolkit, source);
        terminal_output::print_file_outcome(&report);
        report
    };

    let reports: Vec<FileReport> = if workers <= 1 {
        files.iter().map(process).collect()
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|e| CoreError::OperationFailed(format!("failed to build worker pool: {e}")))?;
        pool.install(|| files.par_iter().map(process).collect())
    };

    // ========================================================================
    // STEP 4: REPORT
    // ========================================================================

    let report = BatchReport {
        output_root: config.output_root.clone(),
        files: reports,
        elapsed: start.elapsed(),
    };
    print_summary(&report);
    Ok(report)
}

/// Fatal checks on the roots: the input must be an existing directory and the
/// output root must be creatable.
fn prepare_roots(config: &BatchConfig) -> CoreResult<()> {
    let input = &config.input_root;
    if !input.exists() {
        return Err(CoreError::InputNotFound(format!(
            "input directory does not exist: {}",
            input.display()
        )));
    }
    if !input.is_dir() {
        return Err(CoreError::PathError(format!(
            "input path is not a directory: {}",
            input.display()
        )));
    }

    fs::create_dir_all(&config.output_root).map_err(|e| {
        CoreError::PathError(format!(
            "cannot create output directory {}: {e}",
            config.output_root.display()
        ))
    })
}

fn warn_on_missing_tools() {
    for tool in ["ffmpeg", "ffprobe"] {
        if let Err(e) = check_dependency(tool) {
            terminal_output::print_warning(&format!("{e}; video files will fail"));
        }
    }
}

// ============================================================================
// PER-FILE PROCESSING
// ============================================================================

/// Processes one source file. Never fails: errors become `FileOutcome::Failed`.
pub fn process_file(config: &BatchConfig, toolkit: &Toolkit, source: &Path) -> FileReport {
    let media = MediaPath::classify(source);
    if media.kind() == MediaKind::Unsupported {
        log::debug!("Skipping unsupported file: {}", source.display());
        return FileReport {
            source: source.to_path_buf(),
            target: None,
            outcome: FileOutcome::SkippedUnsupported,
        };
    }

    let target = match target_path_for(&config.input_root, &config.output_root, source) {
        Ok(target) => target,
        Err(e) => {
            log::error!("Failed to resolve output path for {}: {}", source.display(), e);
            return FileReport {
                source: source.to_path_buf(),
                target: None,
                outcome: FileOutcome::Failed(e.to_string()),
            };
        }
    };

    if target.exists() {
        log::debug!("Output exists, skipping: {}", target.display());
        return FileReport {
            source: source.to_path_buf(),
            target: Some(target),
            outcome: FileOutcome::SkippedExisting,
        };
    }

    let outcome = match crop_or_copy(config, toolkit, &media, &target) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("Failed to process {}: {}", source.display(), e);
            remove_partial_output(&target);
            FileOutcome::Failed(e.to_string())
        }
    };

    FileReport {
        source: source.to_path_buf(),
        target: Some(target),
        outcome,
    }
}

fn crop_or_copy(
    config: &BatchConfig,
    toolkit: &Toolkit,
    media: &MediaPath,
    target: &Path,
) -> CoreResult<FileOutcome> {
    let (source, kind) = (media.path(), media.kind());
    let detector = toolkit.detectors.select(kind, config.video_algorithm)?;
    log::debug!("Detecting black bars in {} with {}", source.display(), detector.name());

    let region = detector.detect(source)?;
    let rect = region.normalize()?;
    let native = toolkit.prober.dimensions(source, kind)?;
    let bars = has_black_bars(&region, native)?;
    log::debug!("{}: native {}, content {}, bars: {}", source.display(), native, rect, bars);

    if !config.crop_enabled || !bars {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, target)?;
        return Ok(FileOutcome::Copied);
    }

    let cropper = toolkit.cropper_for(kind)?;
    log::debug!("Cropping {} to {} with {}", source.display(), rect, cropper.name());
    cropper.crop(source, target, &rect)?;
    Ok(FileOutcome::Cropped)
}

/// Removes whatever a failed step left at the target so the next run retries it.
fn remove_partial_output(target: &Path) {
    if target.is_file() {
        match fs::remove_file(target) {
            Ok(()) => log::debug!("Removed partial output {}", target.display()),
            Err(e) => log::warn!("Could not remove partial output {}: {}", target.display(), e),
        }
    }
}

fn print_summary(report: &BatchReport) {
    let summary = report.summary();
    let written = total_size(
        report
            .files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Copied | FileOutcome::Cropped))
            .filter_map(|f| f.target.as_deref()),
    );

    terminal_output::print_section("Summary");
    terminal_output::print_status("Total", &summary.total.to_string(), false);
    terminal_output::print_status("Cropped", &summary.cropped.to_string(), false);
    terminal_output::print_status("Copied", &summary.copied.to_string(), false);
    terminal_output::print_status("Skipped (existing)", &summary.skipped_existing.to_string(), false);
    terminal_output::print_status("Skipped (other)", &summary.skipped_unsupported.to_string(), false);
    terminal_output::print_status("Failed", &summary.failed.to_string(), summary.failed > 0);
    terminal_output::print_status("Written", &format_bytes(written), false);
    terminal_output::print_status("Elapsed", &format_duration(report.elapsed.as_secs_f64()), false);

    if summary.failed > 0 {
        terminal_output::print_warning(&format!("{} file(s) failed", summary.failed));
    } else {
        terminal_output::print_success("Batch complete");
    }
}
