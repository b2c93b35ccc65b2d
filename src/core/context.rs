use std::fs;

use anyhow::{Context as _, Result};
use rayon::prelude::*;

use crate::{
    config::Options,
    core::{
        FileType, FsLoader, SourceImportExtractor,
        document::{DocumentEntry, language_for_path, render_document},
        file_scanner::{ScanResult, scan_files},
        normalize::strip_comments,
        traversal::{Traversal, TraversalOptions, TraversalOutcome},
    },
    utils::relative_path,
};

/// Summary of a completed build.
pub struct BuildReport {
    pub scan: ScanResult,
    pub outcome: TraversalOutcome,
    /// Size of the written document in bytes.
    pub bytes_written: usize,
}

/// Runs the scan → traverse → render → write pipeline for one set of options.
///
/// Each step is exposed separately so callers can report progress between
/// them; [`ContextBuilder::build`] runs them all.
pub struct ContextBuilder {
    options: Options,
}

impl ContextBuilder {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Find the initial files in the target directory.
    pub fn scan(&self) -> Result<ScanResult> {
        scan_files(
            &self.options.directory,
            &self.options.include,
            &self.options.exclude,
        )
    }

    /// Read the scanned files and everything they import, within the depth limit.
    pub fn traverse(&self, scan: &ScanResult) -> TraversalOutcome {
        let extractor = SourceImportExtractor;
        let loader = FsLoader;
        let options = TraversalOptions {
            follow_imports: self.options.follow_imports,
            max_import_depth: self.options.max_import_depth,
        };

        Traversal::new(&extractor, &loader, options).run(scan.files.clone())
    }

    /// Render the document for a finished traversal.
    pub fn render(&self, outcome: &TraversalOutcome) -> String {
        let strip = !self.options.include_comments;

        let entries: Vec<DocumentEntry> = outcome
            .files
            .par_iter()
            .map(|record| {
                // Placeholders stay visible even when comments are stripped.
                let content = if strip && record.is_readable() {
                    strip_comments(&record.content, FileType::from_path(&record.path))
                } else {
                    record.content.clone()
                };
                DocumentEntry {
                    relative_path: relative_path(&self.options.directory, &record.path),
                    language: language_for_path(&record.path),
                    content,
                }
            })
            .collect();

        render_document(&entries, self.options.include_file_structure)
    }

    /// Write the rendered document to the configured output file.
    pub fn write(&self, document: &str) -> Result<()> {
        let output = &self.options.output_file;
        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
        fs::write(output, document)
            .with_context(|| format!("Failed to write output file: {}", output.display()))
    }

    /// Run every step and write the document.
    pub fn build(&self) -> Result<BuildReport> {
        let scan = self.scan()?;
        let outcome = self.traverse(&scan);
        let document = self.render(&outcome);
        self.write(&document)?;

        Ok(BuildReport {
            scan,
            outcome,
            bytes_written: document.len(),
        })
    }
}
