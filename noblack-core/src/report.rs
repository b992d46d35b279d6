// ============================================================================
// noblack-core/src/report.rs
// ============================================================================
//
// REPORTING: Per-file outcomes, batch summary and the job result document
//
// FileOutcome is produced exactly once per enumerated source file. The batch
// report aggregates them; JobResult is the JSON document written for callers.
// `success` in the job result only reflects fatal setup errors. Per-file
// failures are counted in the summary instead.

use crate::error::{CoreError, CoreResult};
use crate::system_info::EnvironmentInfo;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// PER-FILE OUTCOMES
// ============================================================================

/// What happened to one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// No bars, or cropping disabled: copied verbatim.
    Copied,
    /// Bars found and removed.
    Cropped,
    /// The target already existed from an earlier run.
    SkippedExisting,
    /// Not a recognized image or video.
    SkippedUnsupported,
    /// Processing failed; the reason is the rendered error.
    Failed(String),
}

impl FileOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            FileOutcome::Copied => "copied",
            FileOutcome::Cropped => "cropped",
            FileOutcome::SkippedExisting => "skipped (exists)",
            FileOutcome::SkippedUnsupported => "skipped (unsupported)",
            FileOutcome::Failed(_) => "failed",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FileOutcome::Failed(_))
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOutcome::Failed(reason) => write!(f, "failed: {reason}"),
            other => f.write_str(other.label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub source: PathBuf,
    /// `None` when no target could be resolved (unsupported files, path errors).
    pub target: Option<PathBuf>,
    pub outcome: FileOutcome,
}

// ============================================================================
// BATCH REPORT
// ============================================================================

/// Counts of each outcome across a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub copied: usize,
    pub cropped: usize,
    pub skipped_existing: usize,
    pub skipped_unsupported: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.total += 1;
        match outcome {
            FileOutcome::Copied => self.copied += 1,
            FileOutcome::Cropped => self.cropped += 1,
            FileOutcome::SkippedExisting => self.skipped_existing += 1,
            FileOutcome::SkippedUnsupported => self.skipped_unsupported += 1,
            FileOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Result of a completed batch, one entry per enumerated file in walk order.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub output_root: PathBuf,
    pub files: Vec<FileReport>,
    pub elapsed: Duration,
}

impl BatchReport {
    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary::default();
        for file in &self.files {
            summary.record(&file.outcome);
        }
        summary
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.outcome.is_failure())
    }
}

// ============================================================================
// JOB RESULT DOCUMENT
// ============================================================================

/// The result document written after every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobResult {
    pub success: bool,
    pub video_path: Option<String>,
    pub environment_info: Option<EnvironmentInfo>,
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub summary: Option<BatchSummary>,
}

impl JobResult {
    /// Result of a batch that ran to completion.
    pub fn from_report(report: &BatchReport, environment_info: EnvironmentInfo) -> Self {
        Self {
            success: true,
            video_path: Some(report.output_root.to_string_lossy().into_owned()),
            environment_info: Some(environment_info),
            error: None,
            summary: Some(report.summary()),
        }
    }

    /// Result of a fatal setup error.
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            video_path: None,
            environment_info: None,
            error: Some(message.into()),
            summary: None,
        }
    }

    pub fn to_json(&self) -> CoreResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::JsonParseError(format!("failed to serialize job result: {e}")))
    }

    /// Writes the document as pretty UTF-8 JSON.
    pub fn write_to(&self, path: &Path) -> CoreResult<()> {
        let json = self.to_json()?;
        fs::write(path, json)?;
        Ok(())
    }
}
