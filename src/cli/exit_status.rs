use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): the document was written
/// - `Error` (2): the run failed (invalid config, unwritable output, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The document was written.
    Success,
    /// The run failed before the document could be written.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
