//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Lint locale files for invalid values and namespace conflicts
//! - `init`: Initialize keylint configuration file
//!
//! `check` also reads GitHub Actions inputs (`INPUT_PATH`, `INPUT_RULES`)
//! so the binary can run directly as an action step.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Return the command if one was provided, otherwise print help and return None.
    pub fn into_command_or_help(self) -> Option<Command> {
        if self.command.is_none() {
            Self::command().print_help().ok();
        }
        self.command
    }
}

/// Common arguments shared by commands that lint files.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Locale directory to lint (overrides config file)
    #[arg(env = "INPUT_PATH")]
    pub path: Option<PathBuf>,

    /// Rule levels as JSON, e.g. '{"namespace-conflict": "warning"}'
    #[arg(long, env = "INPUT_RULES")]
    pub rules: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Cargo-style human readable output
    #[default]
    Human,
    /// GitHub Actions workflow commands (annotations)
    Github,
    /// Machine-readable JSON
    Json,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human, env = "KEYLINT_FORMAT")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check locale files for non-string values and namespace conflicts
    Check(CheckCommand),
    /// Initialize a new .keylintrc.json configuration file
    Init,
}
