//! Markdown rendering of the collected files.

use std::{fmt::Write as _, path::Path};

/// One file as it appears in the rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    /// Path relative to the scanned directory, `/`-separated.
    pub relative_path: String,
    /// Code fence language tag; empty when unknown.
    pub language: &'static str,
    pub content: String,
}

/// Code fence language tag for a file extension.
pub fn language_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("js") => "javascript",
        Some("jsx") => "jsx",
        Some("ts") => "typescript",
        Some("tsx") => "tsx",
        Some("json") => "json",
        Some("md") => "markdown",
        Some("css") => "css",
        Some("scss") => "scss",
        Some("html") => "html",
        _ => "",
    }
}

/// Render the file index (optional) followed by every file in a fenced block.
pub fn render_document(entries: &[DocumentEntry], include_file_structure: bool) -> String {
    let mut output = String::new();

    if include_file_structure {
        output.push_str("## Project File Structure\n\n");
        output.push_str("The following files have been included in this context:\n\n");
        for entry in entries {
            let _ = writeln!(output, "- {}", entry.relative_path);
        }
        output.push_str("\n---\n\n");
    }

    for entry in entries {
        let _ = write!(
            output,
            "## File: {}\n\n```{}\n{}\n```\n\n---\n\n",
            entry.relative_path, entry.language, entry.content
        );
    }

    output
}
