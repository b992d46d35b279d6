use noblack_core::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

// --- Test doubles implementing the public collaborator traits ---

#[derive(Clone)]
enum Detection {
    Region(DetectedRegion),
    Fail,
}

/// Detector answering from a table keyed by file name.
struct TableDetector {
    table: HashMap<String, Detection>,
    calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl BlackBarDetector for TableDetector {
    fn name(&self) -> &'static str {
        "table"
    }

    fn detect(&self, path: &Path) -> CoreResult<DetectedRegion> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        match self.table.get(&name) {
            Some(Detection::Region(region)) => Ok(*region),
            Some(Detection::Fail) | None => Err(CoreError::DetectionFailure(format!("cannot read {name}"))),
        }
    }
}

struct FixedProber(Dimensions);

impl DimensionProber for FixedProber {
    fn dimensions(&self, _path: &Path, _kind: MediaKind) -> CoreResult<Dimensions> {
        Ok(self.0)
    }
}

#[derive(Clone, Default)]
struct RecordingCropper {
    calls: Arc<Mutex<Vec<(PathBuf, CropRect)>>>,
}

impl CropExecutor for RecordingCropper {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn crop(&self, src: &Path, dst: &Path, rect: &CropRect) -> CoreResult<()> {
        self.calls.lock().unwrap().push((src.to_path_buf(), *rect));
        fs::create_dir_all(dst.parent().unwrap())?;
        fs::write(dst, format!("cropped {rect}"))?;
        Ok(())
    }
}

struct Harness {
    toolkit: Toolkit,
    detect_calls: Arc<Mutex<Vec<PathBuf>>>,
    video_cropper: RecordingCropper,
    image_cropper: RecordingCropper,
}

fn harness(table: &[(&str, Detection)], native: Dimensions) -> Harness {
    let table: HashMap<String, Detection> =
        table.iter().map(|(name, d)| (name.to_string(), d.clone())).collect();
    let detect_calls = Arc::new(Mutex::new(Vec::new()));
    let detector = || -> Box<dyn BlackBarDetector> {
        Box::new(TableDetector {
            table: table.clone(),
            calls: Arc::clone(&detect_calls),
        })
    };
    let video_cropper = RecordingCropper::default();
    let image_cropper = RecordingCropper::default();
    let toolkit = Toolkit::new(
        DetectorSet::new(detector(), detector(), detector()),
        Box::new(FixedProber(native)),
        Box::new(video_cropper.clone()),
        Box::new(image_cropper.clone()),
    );
    Harness {
        toolkit,
        detect_calls,
        video_cropper,
        image_cropper,
    }
}

const FULL_HD: Dimensions = Dimensions::new(1920, 1080);

fn full_frame() -> Detection {
    Detection::Region(DetectedRegion::Video { x: 0, y: 0, width: 1920, height: 1080 })
}

fn letterboxed() -> Detection {
    Detection::Region(DetectedRegion::Video { x: 0, y: 140, width: 1920, height: 800 })
}

fn write(path: &Path, contents: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn outcome_for<'a>(report: &'a BatchReport, name: &str) -> &'a FileOutcome {
    &report
        .files
        .iter()
        .find(|f| f.source.file_name().unwrap() == name)
        .unwrap_or_else(|| panic!("no report for {name}"))
        .outcome
}

// --- Tests ---

#[test]
fn full_frame_source_is_copied_byte_for_byte() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let source = input.path().join("clip.mp4");
    write(&source, b"\x00\x01original bytes\xff");

    let h = harness(&[("clip.mp4", full_frame())], FULL_HD);
    let config = BatchConfig::new(input.path(), output.path());
    let report = run_batch(&config, &h.toolkit).unwrap();

    assert_eq!(outcome_for(&report, "clip.mp4"), &FileOutcome::Copied);
    let target = output.path().join("clip_noblack.mp4");
    assert_eq!(fs::read(&target).unwrap(), fs::read(&source).unwrap());
    assert!(h.video_cropper.calls.lock().unwrap().is_empty());
}

#[test]
fn letterboxed_source_is_cropped_with_normalized_rectangle() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write(&input.path().join("clip.mov"), b"video");

    let h = harness(&[("clip.mov", letterboxed())], FULL_HD);
    let report = run_batch(&BatchConfig::new(input.path(), output.path()), &h.toolkit).unwrap();

    assert_eq!(outcome_for(&report, "clip.mov"), &FileOutcome::Cropped);
    let calls = h.video_cropper.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, CropRect::new(0, 140, 1920, 800));
}

#[test]
fn disabled_cropping_copies_even_with_bars() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write(&input.path().join("clip.mp4"), b"video");

    let h = harness(&[("clip.mp4", letterboxed())], FULL_HD);
    let mut config = BatchConfig::new(input.path(), output.path());
    config.crop_enabled = false;
    let report = run_batch(&config, &h.toolkit).unwrap();

    assert_eq!(outcome_for(&report, "clip.mp4"), &FileOutcome::Copied);
    assert!(h.video_cropper.calls.lock().unwrap().is_empty());
}

#[test]
fn degenerate_rectangle_fails_the_file_without_cropping() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write(&input.path().join("black.png"), b"image");

    let degenerate = Detection::Region(DetectedRegion::Image { x1: 0, y1: 0, x2: 0, y2: 0 });
    let h = harness(&[("black.png", degenerate)], Dimensions::new(16, 16));
    let report = run_batch(&BatchConfig::new(input.path(), output.path()), &h.toolkit).unwrap();

    match outcome_for(&report, "black.png") {
        FileOutcome::Failed(reason) => assert!(reason.contains("Invalid crop rectangle")),
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(h.image_cropper.calls.lock().unwrap().is_empty());
    assert!(!output.path().join("black_noblack.png").exists());
}

#[test]
fn one_bad_file_does_not_stop_the_batch() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    for name in ["a.mp4", "b.mp4", "c.mp4"] {
        write(&input.path().join(name), b"video");
    }

    let h = harness(
        &[("a.mp4", full_frame()), ("b.mp4", Detection::Fail), ("c.mp4", letterboxed())],
        FULL_HD,
    );
    let report = run_batch(&BatchConfig::new(input.path(), output.path()), &h.toolkit).unwrap();

    let summary = report.summary();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.copied, 1);
    assert_eq!(summary.cropped, 1);
    assert_eq!(summary.failed, 1);
    assert!(outcome_for(&report, "b.mp4").is_failure());
}

#[test]
fn second_run_skips_everything_already_written() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write(&input.path().join("one.mkv"), b"video one");
    write(&input.path().join("nested/two.jpg"), b"image two");

    let h = harness(
        &[
            ("one.mkv", letterboxed()),
            ("two.jpg", Detection::Region(DetectedRegion::Image { x1: 0, y1: 0, x2: 1920, y2: 1080 })),
        ],
        FULL_HD,
    );
    let config = BatchConfig::new(input.path(), output.path());

    let first = run_batch(&config, &h.toolkit).unwrap();
    assert_eq!(first.summary().skipped_existing, 0);
    let detections_after_first = h.detect_calls.lock().unwrap().len();
    let written = fs::read(output.path().join("one_noblack.mkv")).unwrap();

    let second = run_batch(&config, &h.toolkit).unwrap();
    assert!(second.files.iter().all(|f| f.outcome == FileOutcome::SkippedExisting));
    assert_eq!(second.summary().skipped_existing, 2);
    assert_eq!(h.detect_calls.lock().unwrap().len(), detections_after_first);
    assert_eq!(fs::read(output.path().join("one_noblack.mkv")).unwrap(), written);
}

#[test]
fn relative_directories_are_mirrored() {
    let root = tempdir().unwrap();
    let input = root.path().join("clips");
    let output = root.path().join("out");
    write(&input.join("a/b.mp4"), b"video");

    let h = harness(&[("b.mp4", full_frame())], FULL_HD);
    let report = run_batch(&BatchConfig::new(&input, &output), &h.toolkit).unwrap();

    assert_eq!(report.files[0].target.as_deref(), Some(output.join("a/b_noblack.mp4").as_path()));
    assert!(output.join("a/b_noblack.mp4").is_file());
    assert_eq!(report.output_root, output);
}

#[test]
fn unsupported_files_are_skipped_not_failed() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write(&input.path().join("notes.txt"), b"text");
    write(&input.path().join("README"), b"text");

    let h = harness(&[], FULL_HD);
    let report = run_batch(&BatchConfig::new(input.path(), output.path()), &h.toolkit).unwrap();

    assert_eq!(report.summary().skipped_unsupported, 2);
    assert_eq!(report.summary().failed, 0);
    assert!(h.detect_calls.lock().unwrap().is_empty());
}

#[test]
fn output_nested_in_input_is_not_reprocessed() {
    let input = tempdir().unwrap();
    let output = input.path().join("output_noblack");
    write(&input.path().join("clip.mp4"), b"video");

    let h = harness(&[("clip.mp4", full_frame()), ("clip_noblack.mp4", full_frame())], FULL_HD);
    let config = BatchConfig::new(input.path(), &output);

    run_batch(&config, &h.toolkit).unwrap();
    let second = run_batch(&config, &h.toolkit).unwrap();

    assert_eq!(second.files.len(), 1);
    assert_eq!(second.files[0].outcome, FileOutcome::SkippedExisting);
    assert!(!output.join("output_noblack").exists());
}

#[test]
fn parallel_workers_report_in_walk_order() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let names: Vec<String> = (0..12).map(|i| format!("clip{i:02}.mp4")).collect();
    for name in &names {
        write(&input.path().join(name), b"video");
    }

    let table: Vec<(&str, Detection)> = names
        .iter()
        .enumerate()
        .map(|(i, n)| (n.as_str(), if i % 2 == 0 { full_frame() } else { letterboxed() }))
        .collect();
    let h = harness(&table, FULL_HD);
    let mut config = BatchConfig::new(input.path(), output.path());
    config.workers = 4;

    let report = run_batch(&config, &h.toolkit).unwrap();
    let reported: Vec<String> = report
        .files
        .iter()
        .map(|f| f.source.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(reported, names);
    assert_eq!(report.summary().copied, 6);
    assert_eq!(report.summary().cropped, 6);
}

#[test]
fn missing_input_root_is_fatal() {
    let root = tempdir().unwrap();
    let h = harness(&[], FULL_HD);
    let config = BatchConfig::new(root.path().join("missing"), root.path().join("out"));

    let result = run_batch(&config, &h.toolkit);
    assert!(matches!(result, Err(CoreError::InputNotFound(_))));
    assert!(!root.path().join("out").exists());
}

#[test]
fn input_root_that_is_a_file_is_fatal() {
    let root = tempdir().unwrap();
    let file = root.path().join("clip.mp4");
    write(&file, b"video");
    let h = harness(&[], FULL_HD);

    let result = run_batch(&BatchConfig::new(&file, root.path().join("out")), &h.toolkit);
    assert!(matches!(result, Err(CoreError::PathError(_))));
}

#[test]
fn invalid_config_is_rejected_before_touching_files() {
    let input = tempdir().unwrap();
    let output = input.path().join("out");
    let h = harness(&[], FULL_HD);
    let mut config = BatchConfig::new(input.path(), &output);
    config.max_frames = 0;

    assert!(matches!(run_batch(&config, &h.toolkit), Err(CoreError::Config(_))));
    assert!(!output.exists());
}
