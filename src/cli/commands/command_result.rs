use std::path::PathBuf;

use super::super::exit_status::ExitStatus;

/// What to do with processed files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripAction {
    /// Print the stripped text to stdout.
    Print,
    /// Rewrite changed files in place.
    Write,
    /// Only report which files contain comments.
    Check,
}

#[derive(Debug)]
pub enum CommandSummary {
    Strip(StripSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct StripSummary {
    pub action: StripAction,
    /// One entry per input, in path order.
    pub outcomes: Vec<FileOutcome>,
    /// Paths that could not be walked.
    pub skipped_count: usize,
}

impl StripSummary {
    pub fn changed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(&o.result, Ok(s) if s.changed))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<Stripped, FileFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    pub output: String,
    /// Whether anything was removed.
    pub changed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub message: String,
    /// 1-based line and column of the failure, when known.
    pub location: Option<(usize, usize)>,
}

/// Result of running a decomment command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Init(_) => ExitStatus::Success,
            CommandSummary::Strip(summary) => {
                if summary.failed_count() > 0 {
                    ExitStatus::Error
                } else if summary.action == StripAction::Check && summary.changed_count() > 0 {
                    ExitStatus::Failure
                } else {
                    ExitStatus::Success
                }
            }
        }
    }
}
