use std::process::ExitCode;

/// Exit status for the CLI, following common conventions for checker tools.
///
/// - `Success` (0): Everything processed (and, with `--check`, nothing to strip)
/// - `Failure` (1): `--check` found files that contain comments
/// - `Error` (2): A file or the command itself failed (unterminated comment, bad config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
