//! Core engine: scan, traverse imports, normalize and render.
//!
//! ## Module Structure
//!
//! - `context`: ContextBuilder, which runs the whole pipeline for one set of options
//! - `data`: FileRecord and FileType
//! - `document`: Markdown rendering of the collected files
//! - `file_scanner`: Glob-based discovery of the initial file set
//! - `imports`: Import extraction (swc grammar pass + regex pass)
//! - `loader`: File reading behind the SourceLoader trait
//! - `normalize`: Per-file-type comment stripping
//! - `parsers`: swc parser setup
//! - `resolve`: Specifier to path resolution
//! - `traversal`: Breadth-first, depth-limited import traversal

pub mod context;
pub mod data;
pub mod document;
pub mod file_scanner;
pub mod imports;
pub mod loader;
pub mod normalize;
pub mod parsers;
pub mod resolve;
pub mod traversal;

pub use context::{BuildReport, ContextBuilder};
pub use data::{FileRecord, FileType};
pub use imports::{Extraction, ImportExtractor, SourceImportExtractor};
pub use loader::{FsLoader, SourceLoader};
pub use traversal::{Traversal, TraversalOptions, TraversalOutcome, TraversalWarning};
