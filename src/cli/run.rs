use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, strip::strip},
};

/// Dispatch to the command handler for the parsed arguments.
pub fn run(Arguments { command, strip: strip_args }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Init) => init(),
        None => strip(strip_args),
    }
}
