//! Import extraction.
//!
//! Two independent passes find specifiers in a file's text:
//!
//! - `grammar`: swc-based, understands import/export/dynamic import syntax
//! - `pattern`: regex-based, also catches `require()` and unparseable files
//!
//! Both always run and their results are unioned, then every specifier is
//! resolved to a path. External specifiers are dropped.

mod grammar;
mod pattern;

use std::{
    collections::HashSet,
    hash::Hash,
    path::{Path, PathBuf},
};

pub use grammar::grammar_specifiers;
pub use pattern::pattern_specifiers;

use crate::core::resolve::resolve_import_path;

/// What an extractor found in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Specifiers as written, deduplicated in first-seen order.
    pub specifiers: Vec<String>,
    /// Resolved project-relative imports, deduplicated in first-seen order.
    pub imports: Vec<PathBuf>,
    /// Set when the grammar pass failed and only the regex pass contributed.
    pub warning: Option<String>,
}

/// Finds the files a source file references.
///
/// The traversal engine receives an implementation at construction time.
pub trait ImportExtractor {
    fn extract(&self, file_path: &Path, content: &str) -> Extraction;
}

/// Default extractor: grammar pass plus regex pass, resolved on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct SourceImportExtractor;

impl ImportExtractor for SourceImportExtractor {
    fn extract(&self, file_path: &Path, content: &str) -> Extraction {
        let (grammar, warning) = match grammar_specifiers(file_path, content) {
            Ok(found) => (found, None),
            Err(e) => (Vec::new(), Some(format!("{:#}", e))),
        };

        let specifiers = dedup_ordered(grammar.into_iter().chain(pattern_specifiers(content)));
        let imports = dedup_ordered(
            specifiers
                .iter()
                .filter_map(|spec| resolve_import_path(spec, file_path)),
        );

        Extraction {
            specifiers,
            imports,
            warning,
        }
    }
}

/// Keep the first occurrence of each item.
fn dedup_ordered<T>(items: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
