//! context-builder - LLM context documents for JavaScript/TypeScript projects
//!
//! context-builder scans a project for source files, follows their relative
//! imports up to a depth limit, optionally strips comments, and writes one
//! Markdown document containing a file index and every file's content.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and option resolution
//! - `core`: Scanning, import traversal, comment stripping and rendering
//! - `reporter`: Progress and summary output
//! - `utils`: Shared path helpers

pub mod cli;
pub mod config;
pub mod core;
pub mod reporter;
pub mod utils;
