//! CLI argument definitions using clap.
//!
//! Every flag overrides the matching field of `.contextrc.json`; anything
//! left unset falls back to the config file and then to the built-in
//! defaults.

use std::path::PathBuf;

use clap::Parser;

/// Build a comprehensive context file from JavaScript/TypeScript projects for LLMs
#[derive(Debug, Parser)]
#[command(name = "context-builder", author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory to process
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Output file path [default: context.md]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Glob patterns for files to include
    #[arg(short, long, value_name = "PATTERNS", num_args = 1..)]
    pub include: Vec<String>,

    /// Glob patterns for files to exclude
    #[arg(short, long, value_name = "PATTERNS", num_args = 1..)]
    pub exclude: Vec<String>,

    /// Do not follow imports
    #[arg(long)]
    pub no_imports: bool,

    /// Do not include comments
    #[arg(long)]
    pub no_comments: bool,

    /// Maximum depth for import traversal [default: 3]
    #[arg(long, value_name = "DEPTH")]
    pub max_depth: Option<usize>,

    /// Do not include file structure information
    #[arg(long)]
    pub no_file_structure: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
