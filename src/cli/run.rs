use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{args::Arguments, exit_status::ExitStatus};
use crate::{
    config::{Options, load_config},
    core::ContextBuilder,
    reporter,
};

/// Resolve options from the config file and CLI flags, then build and write
/// the document, printing progress along the way.
pub fn run(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose;
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    let (options, config_source) = resolve_options(args, &cwd)?;

    if verbose {
        reporter::print_config_source(config_source.as_deref());
    }

    let builder = ContextBuilder::new(options);
    let options = builder.options();

    reporter::print_scanning(&options.directory);
    let scan = builder.scan()?;
    reporter::print_found(scan.files.len(), scan.skipped_count, verbose);

    let outcome = builder.traverse(&scan);
    reporter::print_warnings(&outcome, &options.directory, verbose);
    if verbose {
        reporter::print_file_table(&outcome.files, &options.directory);
    }

    let document = builder.render(&outcome);
    builder.write(&document)?;

    reporter::print_success(&options.output_file, outcome.files.len());
    Ok(ExitStatus::Success)
}

/// Layer defaults, the project config file and CLI flags into run options.
///
/// Returns the options and the config file they were read from, if any.
pub fn resolve_options(args: Arguments, cwd: &Path) -> Result<(Options, Option<PathBuf>)> {
    let directory = cwd.join(&args.directory);
    let directory = directory
        .canonicalize()
        .with_context(|| format!("Cannot access directory: {}", directory.display()))?;
    if !directory.is_dir() {
        anyhow::bail!("Not a directory: {}", directory.display());
    }

    let loaded = load_config(&directory)?;
    let mut options = Options::from_config(loaded.config, directory, cwd);

    if let Some(output) = args.output {
        options.output_file = cwd.join(output);
    }
    if !args.include.is_empty() {
        options.include = args.include;
    }
    if !args.exclude.is_empty() {
        options.exclude = args.exclude;
    }
    if args.no_imports {
        options.follow_imports = false;
    }
    if args.no_comments {
        options.include_comments = false;
    }
    if let Some(depth) = args.max_depth {
        options.max_import_depth = depth;
    }
    if args.no_file_structure {
        options.include_file_structure = false;
    }

    Ok((options, loaded.source))
}
