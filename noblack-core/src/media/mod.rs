//! Media classification and geometry types.
//!
//! Classification is a pure function of the file extension: the file's
//! contents are never opened or sniffed.

pub mod region;

use std::path::{Path, PathBuf};

pub use region::{CropRect, DetectedRegion, Dimensions};

/// Video container extensions recognized by the classifier (lowercase).
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "flv", "mov", "mkv"];

/// Image container extensions recognized by the classifier (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tiff"];

/// Kind of media a path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Video,
    Image,
    Unsupported,
}

impl MediaKind {
    /// Classifies by extension alone (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(MediaKind::Unsupported, Self::from_extension)
    }

    /// Classifies a bare extension without the leading dot.
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        if VIDEO_EXTENSIONS.iter().any(|v| ext.eq_ignore_ascii_case(v)) {
            MediaKind::Video
        } else if IMAGE_EXTENSIONS.iter().any(|i| ext.eq_ignore_ascii_case(i)) {
            MediaKind::Image
        } else {
            MediaKind::Unsupported
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Image => "image",
            MediaKind::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a path on disk. Anything that is not a regular file is
/// `Unsupported`; otherwise the extension decides.
#[must_use]
pub fn classify(path: &Path) -> MediaKind {
    if !path.is_file() {
        return MediaKind::Unsupported;
    }
    MediaKind::from_path(path)
}

/// A source path together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPath {
    path: PathBuf,
    kind: MediaKind,
}

impl MediaPath {
    /// Classifies `path` and captures the result.
    pub fn classify(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let kind = classify(&path);
        Self { path, kind }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }
}
