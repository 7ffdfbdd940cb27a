//! Dispatches a parsed command to its handler and maps the outcome to an
//! [`ExitStatus`].
//!
//! `check` fails only when an enabled rule reports at error level; warnings
//! and skipped files never fail the run.

use anyhow::Result;

use super::{
    args::Command,
    commands::{CommandResult, check::check, init::init},
    exit_status::ExitStatus,
    github, report,
};

pub fn run(command: Command) -> Result<ExitStatus> {
    match command {
        Command::Check(cmd) => {
            let result = check(&cmd)?;
            report::print(&result, cmd.args.format)?;
            github::export_outputs(&result)?;
            Ok(exit_status_from_result(&result))
        }
        Command::Init => init(),
    }
}

fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if result.error_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
