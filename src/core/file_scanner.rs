use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use walkdir::{DirEntry, WalkDir};

/// `*` stops at `/`, `**` spans directories, and wildcards skip dotfiles.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Result of scanning files.
pub struct ScanResult {
    /// Matching files, absolute and sorted.
    pub files: Vec<PathBuf>,
    /// Entries the walker could not access.
    pub skipped_count: usize,
}

/// Compile glob patterns, naming `field` in the error for an invalid one.
///
/// `{a,b}` alternatives are expanded first, so one input pattern may yield
/// several compiled patterns.
pub fn compile_patterns(patterns: &[String], field: &str) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .flat_map(|p| expand_braces(p).into_iter().map(move |expanded| (p, expanded)))
        .map(|(p, expanded)| {
            Pattern::new(&expanded)
                .with_context(|| format!("Invalid glob pattern in '{}': \"{}\"", field, p))
        })
        .collect()
}

/// Expand `{a,b}` alternatives into one pattern per combination.
///
/// Groups may nest. A `{` without a matching `}` and a group without a
/// comma are kept literally.
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some((open, close)) = find_brace_group(pattern) else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..open];
    let inner = &pattern[open + 1..close];
    let suffix = &pattern[close + 1..];

    let alternatives = split_alternatives(inner);
    if alternatives.len() < 2 {
        return expand_braces(suffix)
            .into_iter()
            .map(|rest| format!("{}{{{}}}{}", prefix, inner, rest))
            .collect();
    }

    alternatives
        .into_iter()
        .flat_map(|alt| expand_braces(&format!("{}{}{}", prefix, alt, suffix)))
        .collect()
}

/// Byte offsets of the first `{` that has a matching `}`.
fn find_brace_group(pattern: &str) -> Option<(usize, usize)> {
    pattern
        .char_indices()
        .filter(|&(_, c)| c == '{')
        .find_map(|(open, _)| {
            let mut depth = 0usize;
            for (offset, c) in pattern[open..].char_indices() {
                match c {
                    '{' => depth += 1,
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            return Some((open, open + offset));
                        }
                    }
                    _ => {}
                }
            }
            None
        })
}

/// Split a group body on commas that are not inside a nested group.
fn split_alternatives(inner: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in inner.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&inner[start..]);
    parts
}

/// Walk `root` and return the files whose root-relative path matches any
/// include pattern and no exclude pattern.
///
/// Directories covered by an exclude pattern ending in `/**` (such as
/// `**/node_modules/**`) are not descended into.
pub fn scan_files(root: &Path, includes: &[String], excludes: &[String]) -> Result<ScanResult> {
    let include_patterns = compile_patterns(includes, "include")?;
    let exclude_patterns = compile_patterns(excludes, "exclude")?;
    let excluded_dirs: Vec<Pattern> = exclude_patterns
        .iter()
        .filter_map(|p| p.as_str().strip_suffix("/**"))
        .filter_map(|dir| Pattern::new(dir).ok())
        .collect();

    let mut files = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry, root, &excluded_dirs));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => {
                skipped_count += 1;
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let relative = relative_str(path, root);
        let included = include_patterns
            .iter()
            .any(|p| p.matches_with(&relative, MATCH_OPTIONS));
        let excluded = exclude_patterns
            .iter()
            .any(|p| p.matches_with(&relative, MATCH_OPTIONS));

        if included && !excluded {
            files.push(path.to_path_buf());
        }
    }

    files.sort();

    Ok(ScanResult {
        files,
        skipped_count,
    })
}

fn is_excluded_dir(entry: &DirEntry, root: &Path, excluded_dirs: &[Pattern]) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let relative = relative_str(entry.path(), root);
    excluded_dirs
        .iter()
        .any(|p| p.matches_with(&relative, MATCH_OPTIONS))
}

/// Root-relative path with `/` separators, as glob patterns expect.
fn relative_str(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
