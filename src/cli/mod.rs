//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `exit_status`: process exit codes
//! - `run`: option resolution and the build run with progress output

pub mod args;
pub mod exit_status;
pub mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

use anyhow::Result;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(args)
}
