use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use decomment::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    decomment::logging::init_tracing();

    let args = Arguments::parse();

    match decomment::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{} {:#}", "error:".bold().red(), err);
            ExitStatus::Error.into()
        }
    }
}
