//! GitHub Actions output.
//!
//! Issues become workflow command annotations (`::error file=..,line=..::msg`)
//! so they show inline on pull requests. Independently of the output format,
//! the number of analyzed files is exported as the `total-files-analyzed`
//! step output when `GITHUB_OUTPUT` is set.

use std::{env, fs::OpenOptions, io::Write, path::Path};

use anyhow::{Context, Result};

use super::commands::CommandResult;
use crate::issues::{Issue, Report, Rule, Severity};

/// Escape the message part of a workflow command.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a `key=value` property of a workflow command.
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

fn title(rule: Rule) -> &'static str {
    match rule {
        Rule::NamespaceConflict => "Namespace conflict",
        Rule::InvalidValue => "Invalid value type",
        Rule::ParseError => "Skipped file",
    }
}

/// Format a single issue as a workflow command.
pub fn format_annotation(issue: &Issue) -> String {
    let command = match issue.severity() {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };

    let loc = issue.location();
    let mut properties = vec![format!("file={}", escape_property(loc.file_path))];
    if let Some(line) = loc.line {
        properties.push(format!("line={}", line));
    }
    properties.push(format!("title={}", escape_property(title(issue.rule()))));

    format!(
        "::{} {}::{}",
        command,
        properties.join(","),
        escape_data(&issue.description())
    )
}

/// Append `name=value` lines to the file named by `GITHUB_OUTPUT`.
pub fn write_outputs(path: &Path, outputs: &[(&str, String)]) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open GITHUB_OUTPUT file: {:?}", path))?;

    for (name, value) in outputs {
        writeln!(file, "{}={}", name, value)?;
    }

    Ok(())
}

pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) -> Result<()> {
    for issue in &result.issues {
        writeln!(writer, "{}", format_annotation(issue))?;
    }

    if result.error_count > 0 {
        writeln!(writer, "::error::{}", escape_data(&result.failure_message()))?;
    } else {
        writeln!(
            writer,
            "Checked {} locale file(s) in {}",
            result.locale_files_checked, result.summary.locale_dir
        )?;
    }

    Ok(())
}

/// Export step outputs when running inside GitHub Actions.
pub fn export_outputs(result: &CommandResult) -> Result<()> {
    match env::var_os("GITHUB_OUTPUT") {
        Some(path) => write_outputs(
            Path::new(&path),
            &[(
                "total-files-analyzed",
                result.locale_files_checked.to_string(),
            )],
        ),
        None => Ok(()),
    }
}
