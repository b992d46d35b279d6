//! Source enumeration and output path mapping.
//!
//! The input tree is walked recursively in file-name order so reports are
//! deterministic. When the output root sits inside the input root it is
//! pruned from the walk, keeping outputs from being picked up as sources on
//! the next run.

use crate::config::OUTPUT_SUFFIX;
use crate::error::{CoreError, CoreResult};

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Lists every regular file under `input_root`, skipping `output_root` when
/// it is nested inside the input tree.
///
/// An unreadable input root is an error. Unreadable entries further down are
/// logged and skipped.
///
/// # Examples
///
/// ```rust,no_run
/// use noblack_core::discovery::enumerate_media_files;
/// use std::path::Path;
///
/// let files = enumerate_media_files(Path::new("clips"), Path::new("clips/output_noblack"))?;
/// for file in files {
///     println!("{}", file.display());
/// }
/// # Ok::<(), noblack_core::CoreError>(())
/// ```
pub fn enumerate_media_files(input_root: &Path, output_root: &Path) -> CoreResult<Vec<PathBuf>> {
    let pruned = nested_output_root(input_root, output_root);
    if let Some(dir) = &pruned {
        log::debug!("Excluding output directory {} from the scan", dir.display());
    }

    let walker = WalkDir::new(input_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_pruned(entry, pruned.as_deref()));

    let mut files = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.path().is_file() {
                    files.push(entry.into_path());
                }
            }
            Err(e) if e.depth() == 0 => return Err(CoreError::Io(e.into())),
            Err(e) => log::warn!("Skipping unreadable entry: {}", e),
        }
    }
    Ok(files)
}

/// Canonical output root, if it is strictly inside the input root.
fn nested_output_root(input_root: &Path, output_root: &Path) -> Option<PathBuf> {
    let input = fs::canonicalize(input_root).ok()?;
    let output = fs::canonicalize(output_root).ok()?;
    (output != input && output.starts_with(&input)).then_some(output)
}

fn is_pruned(entry: &DirEntry, pruned: Option<&Path>) -> bool {
    let Some(pruned) = pruned else {
        return false;
    };
    entry.depth() > 0
        && entry.file_type().is_dir()
        && fs::canonicalize(entry.path()).is_ok_and(|p| p == pruned)
}

/// Maps a source file to `<output_root>/<relative_dir>/<stem>_noblack<.ext>`.
///
/// `source` must live under `input_root`. The mapping is injective, so two
/// sources never share a target.
pub fn target_path_for(input_root: &Path, output_root: &Path, source: &Path) -> CoreResult<PathBuf> {
    let relative = source.strip_prefix(input_root).map_err(|_| {
        CoreError::PathError(format!(
            "{} is not under the input root {}",
            source.display(),
            input_root.display()
        ))
    })?;

    let stem = relative.file_stem().ok_or_else(|| {
        CoreError::PathError(format!("Failed to get file stem for {}", source.display()))
    })?;

    let mut file_name = OsString::from(stem);
    file_name.push(OUTPUT_SUFFIX);
    if let Some(ext) = relative.extension() {
        file_name.push(".");
        file_name.push(ext);
    }

    let target_dir = match relative.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => output_root.join(parent),
        _ => output_root.to_path_buf(),
    };
    Ok(target_dir.join(file_name))
}
