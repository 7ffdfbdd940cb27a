//! Command-line interface layer.

use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
mod github;
mod json;
mod report;
mod run;

pub use args::{Arguments, Command, OutputFormat};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(command) = args.into_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(command)
}
