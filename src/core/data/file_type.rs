use std::path::Path;

/// Comment syntax family of a file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// JavaScript/TypeScript: `// line` and `/* block */`
    Script,
    /// Python: `# line`
    Python,
    /// HTML/XML: `<!-- block -->`
    Markup,
    /// CSS/SCSS/Less: `/* block */`
    Stylesheet,
    /// Markdown is never stripped.
    Markdown,
    /// Anything else gets every rule applied.
    Other,
}

impl FileType {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("js" | "jsx" | "ts" | "tsx" | "mjs" | "cjs" | "mts" | "cts") => FileType::Script,
            Some("py") => FileType::Python,
            Some("html" | "htm" | "xml") => FileType::Markup,
            Some("css" | "scss" | "less") => FileType::Stylesheet,
            Some("md" | "markdown") => FileType::Markdown,
            _ => FileType::Other,
        }
    }
}
