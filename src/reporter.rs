//! Progress and summary printing.
//!
//! Kept apart from the core library so context-builder can be used as a
//! library without printing side effects.

use std::path::Path;

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{FileRecord, TraversalOutcome, TraversalWarning};
use crate::utils::relative_path;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print_scanning(directory: &Path) {
    println!("Scanning directory: {}", directory.display());
}

pub fn print_config_source(config_path: Option<&Path>) {
    match config_path {
        Some(path) => eprintln!("{} Using config {}", "note:".bold().cyan(), path.display()),
        None => eprintln!(
            "{} No {} found, using default configuration",
            "note:".bold().cyan(),
            crate::config::CONFIG_FILE_NAME
        ),
    }
}

pub fn print_found(count: usize, skipped_count: usize, verbose: bool) {
    println!("Found {} files matching pattern", count);
    if skipped_count > 0 && verbose {
        eprintln!(
            "{} {} path(s) could not be accessed while scanning",
            "warning:".bold().yellow(),
            skipped_count
        );
    }
}

/// Print traversal warnings.
///
/// With `verbose`, every warning is listed; otherwise a single line
/// summarises how many files were affected.
pub fn print_warnings(outcome: &TraversalOutcome, root: &Path, verbose: bool) {
    if verbose {
        for warning in &outcome.warnings {
            let label = match warning {
                TraversalWarning::Unreadable { .. } => "could not read",
                TraversalWarning::ParseFailed { .. } => "could not parse imports of",
            };
            eprintln!(
                "{} {} {}: {}",
                "warning:".bold().yellow(),
                label,
                relative_path(root, warning.path()),
                warning.message()
            );
        }
        return;
    }

    let unreadable = outcome.unreadable_count();
    let unparsed = outcome.parse_failure_count();
    if unreadable > 0 {
        eprintln!(
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            unreadable,
            "-v".cyan()
        );
    }
    if unparsed > 0 {
        eprintln!(
            "{} {} file(s) could not be parsed, imports were found by pattern only (use {} for details)",
            "warning:".bold().yellow(),
            unparsed,
            "-v".cyan()
        );
    }
}

/// Print an aligned table of every file in the document.
pub fn print_file_table(files: &[FileRecord], root: &Path) {
    let rows: Vec<(String, &FileRecord)> = files
        .iter()
        .map(|f| (relative_path(root, &f.path), f))
        .collect();

    let path_width = rows
        .iter()
        .map(|(path, _)| UnicodeWidthStr::width(path.as_str()))
        .max()
        .unwrap_or(0);

    for (path, record) in &rows {
        let padding = path_width - UnicodeWidthStr::width(path.as_str());
        let size = if record.is_readable() {
            format!("{} bytes", record.content.len())
        } else {
            "unreadable".red().to_string()
        };
        println!(
            "  {}{:padding$}  {} {}  {}",
            path,
            "",
            "depth".dimmed(),
            record.depth,
            size,
            padding = padding
        );
    }
}

pub fn print_success(output_file: &Path, file_count: usize) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Context built successfully to {} ({} {})",
            output_file.display(),
            file_count,
            if file_count == 1 { "file" } else { "files" }
        )
        .green()
    );
}
