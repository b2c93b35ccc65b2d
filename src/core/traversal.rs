//! Breadth-first import traversal.
//!
//! Starting from the scanned files (depth 0), each level reads every file not
//! yet visited, extracts its imports and turns the newly discovered paths into
//! the next level's frontier. A file is read at most once per run, which is
//! also what stops import cycles.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::core::{FileRecord, FileType, ImportExtractor, SourceLoader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalOptions {
    pub follow_imports: bool,
    /// Import hops allowed beyond the initial files. 0 reads only those.
    pub max_import_depth: usize,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self {
            follow_imports: true,
            max_import_depth: 3,
        }
    }
}

/// Non-fatal problems encountered while traversing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalWarning {
    /// The file could not be read; a placeholder was recorded instead.
    Unreadable { path: PathBuf, message: String },
    /// The grammar pass failed; only the regex pass found imports.
    ParseFailed { path: PathBuf, message: String },
}

impl TraversalWarning {
    pub fn path(&self) -> &Path {
        match self {
            TraversalWarning::Unreadable { path, .. } | TraversalWarning::ParseFailed { path, .. } => {
                path
            }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            TraversalWarning::Unreadable { message, .. }
            | TraversalWarning::ParseFailed { message, .. } => message,
        }
    }
}

/// Result of one traversal run.
#[derive(Debug, Default)]
pub struct TraversalOutcome {
    /// Every file read, in discovery order.
    pub files: Vec<FileRecord>,
    /// Deepest level that had at least one file to read.
    pub depth_reached: usize,
    pub warnings: Vec<TraversalWarning>,
}

impl TraversalOutcome {
    pub fn unreadable_count(&self) -> usize {
        self.files.iter().filter(|f| !f.is_readable()).count()
    }

    /// Parse failures in script files. Stylesheets, markdown and other
    /// non-script files reached through imports are expected not to parse.
    pub fn parse_failure_count(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| {
                matches!(w, TraversalWarning::ParseFailed { .. })
                    && FileType::from_path(w.path()) == FileType::Script
            })
            .count()
    }
}

/// Traversal engine. Holds its collaborators; all per-run state lives in
/// [`Traversal::run`].
pub struct Traversal<'a> {
    extractor: &'a dyn ImportExtractor,
    loader: &'a dyn SourceLoader,
    options: TraversalOptions,
}

impl<'a> Traversal<'a> {
    pub fn new(
        extractor: &'a dyn ImportExtractor,
        loader: &'a dyn SourceLoader,
        options: TraversalOptions,
    ) -> Self {
        Self {
            extractor,
            loader,
            options,
        }
    }

    pub fn run(&self, initial: Vec<PathBuf>) -> TraversalOutcome {
        let mut visited: HashSet<PathBuf> = HashSet::new();
        let mut outcome = TraversalOutcome::default();

        let mut frontier = initial;
        let mut depth = 0;

        loop {
            let mut candidates: Vec<PathBuf> = Vec::new();
            let mut queued: HashSet<PathBuf> = HashSet::new();

            for path in frontier {
                if !visited.insert(path.clone()) {
                    continue;
                }

                let record = self.visit(path, depth, &mut outcome.warnings);
                outcome.depth_reached = depth;

                for import in &record.imports {
                    if !visited.contains(import) && queued.insert(import.clone()) {
                        candidates.push(import.clone());
                    }
                }
                outcome.files.push(record);
            }

            // Files imported earlier in the level may have been read later in it.
            candidates.retain(|path| !visited.contains(path));

            if !self.options.follow_imports
                || candidates.is_empty()
                || depth + 1 > self.options.max_import_depth
            {
                break;
            }

            frontier = candidates;
            depth += 1;
        }

        outcome
    }

    fn visit(
        &self,
        path: PathBuf,
        depth: usize,
        warnings: &mut Vec<TraversalWarning>,
    ) -> FileRecord {
        let content = match self.loader.load(&path) {
            Ok(content) => content,
            Err(e) => {
                let message = e.to_string();
                warnings.push(TraversalWarning::Unreadable {
                    path: path.clone(),
                    message: message.clone(),
                });
                return FileRecord::unreadable(path, message, depth);
            }
        };

        let mut record = FileRecord::new(path, content, depth);
        if self.options.follow_imports {
            let extraction = self.extractor.extract(&record.path, &record.content);
            if let Some(message) = extraction.warning {
                warnings.push(TraversalWarning::ParseFailed {
                    path: record.path.clone(),
                    message,
                });
            }
            record.import_specifiers = extraction.specifiers;
            record.imports = extraction.imports;
        }
        record
    }
}
