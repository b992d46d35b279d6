//! Simple terminal output functions for noblack-core.
//!
//! Every line goes through the `log` facade so it lands in both the console
//! and the optional log file. Styling comes from `console` and is dropped when
//! `NO_COLOR` is set.

use crate::report::{FileOutcome, FileReport};
use console::style;
use log::{error, info, warn};

/// Check if color should be used (respects NO_COLOR environment variable)
fn should_use_color() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a section header (Level 1 - Main sections with cyan color)
pub fn print_section(title: &str) {
    info!("");
    if should_use_color() {
        info!("===== {} =====", style(title.to_uppercase()).cyan().bold());
    } else {
        info!("===== {} =====", title.to_uppercase());
    }
    info!("");
}

/// Spaces after `label:` so values line up in a 20-column label field.
fn status_padding(label: &str) -> usize {
    let label_width: usize = 20;
    label_width.saturating_sub(label.len()).max(1)
}

/// Print a status line (Level 4 - 6 spaces indentation, aligned labels)
pub fn print_status(label: &str, value: &str, highlight: bool) {
    let padding = status_padding(label);

    if should_use_color() && highlight {
        info!("      {}:{} {}", label, " ".repeat(padding), style(value).bold());
    } else {
        info!("      {}:{} {}", label, " ".repeat(padding), value);
    }
}

/// Print a success message (Level 2 - green)
pub fn print_success(message: &str) {
    if should_use_color() {
        info!("  ✓ {}", style(message).green());
    } else {
        info!("  ✓ {}", message);
    }
}

/// Print a warning (Level 2 - yellow)
pub fn print_warning(message: &str) {
    if should_use_color() {
        warn!("  ⚠ {}", style(message).yellow());
    } else {
        warn!("  ⚠ {}", message);
    }
}

/// Print a per-file result line.
pub fn print_file_outcome(report: &FileReport) {
    let source = report.source.display();
    match &report.outcome {
        FileOutcome::Failed(reason) => {
            if should_use_color() {
                error!("    {} {}: {}", style("✗").red().bold(), source, reason);
            } else {
                error!("    ✗ {}: {}", source, reason);
            }
        }
        outcome => {
            let target = report
                .target
                .as_ref()
                .map(|t| format!(" -> {}", t.display()))
                .unwrap_or_default();
            if should_use_color() {
                info!("    {} {}{}", style(outcome.label()).dim(), source, target);
            } else {
                info!("    {} {}{}", outcome.label(), source, target);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_are_padded_to_a_common_column() {
        assert_eq!(status_padding("Input"), 15);
        assert_eq!("Files found".len() + status_padding("Files found"), 20);
    }

    #[test]
    fn long_status_labels_keep_one_space() {
        assert_eq!(status_padding("A label well past twenty columns"), 1);
        assert_eq!(status_padding("exactly twenty chars"), 1);
    }
}
