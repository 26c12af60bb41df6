//! CLI argument definitions using clap.
//!
//! `decomment [OPTIONS] [PATHS]...` strips comments from the given files and
//! directories, or from stdin when no path (or `-`) is given.
//!
//! ## Commands
//!
//! - `init`: Write a default `.decommentrc.json`

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::Mode;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about,
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub strip: StripArgs,
}

impl Arguments {
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Init) => false,
            None => self.strip.verbose,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct StripArgs {
    /// Files or directories to process (reads stdin when omitted or `-`)
    pub paths: Vec<PathBuf>,

    /// Keep /*! ... */ comments
    #[arg(long)]
    pub safe: bool,

    /// Also remove blank lines that follow a removed comment line
    #[arg(long)]
    pub trim: bool,

    /// How to treat input; `auto` picks from the file extension and content
    #[arg(long, value_enum, default_value_t = Mode::Auto)]
    pub mode: Mode,

    /// Rewrite files in place instead of printing them
    #[arg(short, long, conflicts_with = "check")]
    pub write: bool,

    /// Only report files that contain comments (exit 1 if any)
    #[arg(long)]
    pub check: bool,

    /// Config file to use instead of searching for .decommentrc.json
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl StripArgs {
    /// True when input should come from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.paths.is_empty() || (self.paths.len() == 1 && self.paths[0].as_os_str() == "-")
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .decommentrc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Arguments::command().debug_assert();
    }

    #[test]
    fn test_parse_paths_and_flags() {
        let args = Arguments::parse_from(["decomment", "--safe", "--mode", "text", "a.css", "src"]);
        assert!(args.command.is_none());
        assert!(args.strip.safe);
        assert!(!args.strip.trim);
        assert_eq!(args.strip.mode, Mode::Text);
        assert_eq!(
            args.strip.paths,
            vec![PathBuf::from("a.css"), PathBuf::from("src")]
        );
        assert!(!args.strip.reads_stdin());
    }

    #[test]
    fn test_parse_init() {
        let args = Arguments::parse_from(["decomment", "init"]);
        assert!(matches!(args.command, Some(Command::Init)));
        assert!(!args.verbose());
    }

    #[test]
    fn test_stdin_detection() {
        assert!(Arguments::parse_from(["decomment"]).strip.reads_stdin());
        assert!(Arguments::parse_from(["decomment", "-"]).strip.reads_stdin());
    }

    #[test]
    fn test_write_conflicts_with_check() {
        let result = Arguments::try_parse_from(["decomment", "--write", "--check", "x.js"]);
        assert!(result.is_err());
    }
}
