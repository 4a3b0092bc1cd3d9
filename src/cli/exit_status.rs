use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): conversion completed and all files were written
/// - `Error` (1): any failure - missing source file, grammar violation,
///   unwritable output
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
