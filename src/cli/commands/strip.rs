//! The default command: strip comments from files or stdin.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::debug;

use super::{
    CommandResult, CommandSummary, FileFailure, FileOutcome, StripAction, StripSummary, Stripped,
};
use crate::cli::args::StripArgs;
use crate::config::{Config, load_config, load_config_file};
use crate::core::{Dialect, Mode, Options, SwcTokenizer, error::line_col, process_as};
use crate::files::scan_files;

/// Display name used for stdin input.
pub const STDIN_NAME: &str = "<stdin>";

pub fn strip(args: StripArgs) -> Result<CommandResult> {
    let config = resolve_config(&args)?;
    let mut options = config.options();
    options.safe |= args.safe;
    options.trim |= args.trim;
    let action = if args.write {
        StripAction::Write
    } else if args.check {
        StripAction::Check
    } else {
        StripAction::Print
    };
    debug!(?options, ?action, mode = ?args.mode, "resolved strip settings");

    if args.reads_stdin() {
        if action == StripAction::Write {
            anyhow::bail!("--write needs file paths; it cannot rewrite stdin");
        }
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;

        let outcome = FileOutcome {
            path: PathBuf::from(STDIN_NAME),
            result: strip_text(&text, args.mode, Dialect::default(), &options),
        };
        return Ok(CommandResult {
            summary: CommandSummary::Strip(StripSummary {
                action,
                outcomes: vec![outcome],
                skipped_count: 0,
            }),
        });
    }

    let scan = scan_files(&args.paths, &config.extensions, &config.ignores, args.verbose);
    debug!(files = scan.files.len(), skipped = scan.skipped_count, "scanned paths");

    // Calls share nothing, so files are processed fully in parallel.
    let outcomes: Vec<FileOutcome> = scan
        .files
        .par_iter()
        .map(|path| FileOutcome {
            path: path.clone(),
            result: strip_file(path, args.mode, &options, action),
        })
        .collect();

    Ok(CommandResult {
        summary: CommandSummary::Strip(StripSummary {
            action,
            outcomes,
            skipped_count: scan.skipped_count,
        }),
    })
}

fn resolve_config(args: &StripArgs) -> Result<Config> {
    if let Some(path) = &args.config {
        return load_config_file(path);
    }
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let loaded = load_config(&cwd)?;
    if let Some(path) = &loaded.path {
        debug!(path = %path.display(), "loaded config");
    }
    Ok(loaded.config)
}

/// Pick the processing mode and dialect for a file.
///
/// An explicit mode always wins. In auto mode, stylesheets and JSON are
/// scanned as plain C-style text and markup files are treated as markup;
/// everything else is classified by content with a dialect from the extension.
pub fn mode_for_path(path: &Path, requested: Mode) -> (Mode, Dialect) {
    let dialect = Dialect::from_path(path).unwrap_or_default();
    if requested != Mode::Auto {
        return (requested, dialect);
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("css" | "scss" | "less" | "json" | "jsonc") => (Mode::Text, dialect),
        Some("html" | "htm" | "xml" | "svg" | "vue") => (Mode::Markup, dialect),
        _ => (Mode::Auto, dialect),
    }
}

fn strip_file(
    path: &Path,
    requested: Mode,
    options: &Options,
    action: StripAction,
) -> Result<Stripped, FileFailure> {
    let text = fs::read_to_string(path).map_err(|e| FileFailure {
        message: format!("Failed to read file: {}", e),
        location: None,
    })?;

    let (mode, dialect) = mode_for_path(path, requested);
    let stripped = strip_text(&text, mode, dialect, options)?;

    if action == StripAction::Write && stripped.changed {
        fs::write(path, &stripped.output).map_err(|e| FileFailure {
            message: format!("Failed to write file: {}", e),
            location: None,
        })?;
    }

    Ok(stripped)
}

fn strip_text(
    text: &str,
    mode: Mode,
    dialect: Dialect,
    options: &Options,
) -> Result<Stripped, FileFailure> {
    match process_as(text, mode, options, &SwcTokenizer::new(dialect)) {
        Ok(output) => Ok(Stripped {
            changed: output != text,
            output,
        }),
        Err(err) => Err(FileFailure {
            location: err.offset().map(|offset| line_col(text, offset)),
            message: err.to_string(),
        }),
    }
}
