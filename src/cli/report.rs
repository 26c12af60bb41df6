//! Report formatting and printing utilities.
//!
//! Separate from core logic so decomment can be used as a library. Processed
//! text goes to stdout; diagnostics go to stderr.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, FileOutcome, InitSummary, StripAction, StripSummary,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    match &result.summary {
        CommandSummary::Init(summary) => print_init(summary, out),
        CommandSummary::Strip(summary) => {
            match summary.action {
                StripAction::Print => print_outputs(summary, out),
                StripAction::Check => print_check(summary, out),
                StripAction::Write => print_write(summary, verbose, out),
            }
            print_failures(summary, verbose, err);
            print_skipped(summary, verbose, err);
        }
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}

fn print_outputs<W: Write>(summary: &StripSummary, writer: &mut W) {
    let succeeded: Vec<&FileOutcome> = summary
        .outcomes
        .iter()
        .filter(|o| o.result.is_ok())
        .collect();
    let with_headers = succeeded.len() > 1;

    for (idx, outcome) in succeeded.iter().enumerate() {
        let Ok(stripped) = &outcome.result else {
            continue;
        };
        if with_headers {
            if idx > 0 {
                let _ = writeln!(writer);
            }
            let _ = writeln!(writer, "==> {} <==", outcome.path.display());
        }
        let _ = write!(writer, "{}", stripped.output);
    }
}

fn print_check<W: Write>(summary: &StripSummary, writer: &mut W) {
    for outcome in &summary.outcomes {
        if matches!(&outcome.result, Ok(s) if s.changed) {
            let _ = writeln!(
                writer,
                "{} {}",
                outcome.path.display().to_string().bold(),
                "contains comments".yellow()
            );
        }
    }

    let checked = summary.outcomes.len() - summary.failed_count();
    let changed = summary.changed_count();
    if changed == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Checked {} - no comments found", plural(checked, "file")).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} of {} contain comments", changed, plural(checked, "file")).red()
        );
    }
}

fn print_write<W: Write>(summary: &StripSummary, verbose: bool, writer: &mut W) {
    if verbose {
        for outcome in &summary.outcomes {
            if matches!(&outcome.result, Ok(s) if s.changed) {
                let _ = writeln!(writer, "  stripped {}", outcome.path.display());
            }
        }
    }

    let processed = summary.outcomes.len() - summary.failed_count();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Stripped comments from {} of {}",
            summary.changed_count(),
            plural(processed, "file")
        )
        .green()
    );
}

/// With a single input (or `--verbose`) every failure is spelled out;
/// otherwise only a count is printed.
fn print_failures<W: Write>(summary: &StripSummary, verbose: bool, writer: &mut W) {
    let failed = summary.failed_count();
    if failed == 0 {
        return;
    }

    if verbose || summary.outcomes.len() == 1 {
        for outcome in &summary.outcomes {
            let Err(failure) = &outcome.result else {
                continue;
            };
            let location = match failure.location {
                Some((line, col)) => format!("{}:{}:{}", outcome.path.display(), line, col),
                None => outcome.path.display().to_string(),
            };
            let _ = writeln!(
                writer,
                "{} {}: {}",
                "error:".bold().red(),
                location,
                failure.message
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} could not be processed (use {} for details)",
            "error:".bold().red(),
            plural(failed, "file"),
            "-v".cyan()
        );
    }
}

fn print_skipped<W: Write>(summary: &StripSummary, verbose: bool, writer: &mut W) {
    if summary.skipped_count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            plural(summary.skipped_count, "path"),
            "-v".cyan()
        );
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
