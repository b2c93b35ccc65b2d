use std::path::PathBuf;

/// A file read during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Absolute, lexically normalized path.
    pub path: PathBuf,
    /// File text, or a placeholder describing why it could not be read.
    pub content: String,
    /// Specifiers as written in the file, before resolution.
    pub import_specifiers: Vec<String>,
    /// Resolved project imports, in first-seen order.
    pub imports: Vec<PathBuf>,
    /// Import hops from the initially scanned files.
    pub depth: usize,
    /// The read error, when `content` is a placeholder.
    pub read_error: Option<String>,
}

impl FileRecord {
    pub fn new(path: PathBuf, content: String, depth: usize) -> Self {
        Self {
            path,
            content,
            import_specifiers: Vec::new(),
            imports: Vec::new(),
            depth,
            read_error: None,
        }
    }

    /// Record for a file that could not be read. Its content documents the
    /// error inline and it contributes no imports.
    pub fn unreadable(path: PathBuf, error: String, depth: usize) -> Self {
        Self {
            path,
            content: format!("// Error reading file: {}", error),
            import_specifiers: Vec::new(),
            imports: Vec::new(),
            depth,
            read_error: Some(error),
        }
    }

    pub fn is_readable(&self) -> bool {
        self.read_error.is_none()
    }
}
