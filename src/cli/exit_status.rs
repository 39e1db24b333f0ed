use std::process::ExitCode;

/// Exit status of a generation run.
///
/// - `Success` (0): every header was regenerated
/// - `Error` (1): the run aborted (missing parser, malformed declaration, I/O error, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every header was regenerated.
    Success,
    /// The run aborted.
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
