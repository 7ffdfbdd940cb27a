//! Report formatting and printing utilities.
//!
//! Human output is cargo-style. GitHub and JSON output live in their own
//! modules; [`print`] dispatches on the requested format.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;

use super::{args::OutputFormat, commands::CommandResult, github, json};
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to a writer.
///
/// Issues are expected to be sorted already.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let max_line_width = calculate_max_line_width(issues);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(locale_files: usize, writer: &mut W) {
    let msg = format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} locale {} - no issues found",
            locale_files,
            if locale_files == 1 { "file" } else { "files" }
        )
        .green()
    );
    let _ = writeln!(writer, "{}", msg);
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity_str = match issue.severity() {
        Severity::Error => "error".red().bold(),
        Severity::Warning => "warning".yellow().bold(),
    };

    let message = match issue {
        Issue::ParseError(_) => issue.message(),
        _ => format!("\"{}\"", issue.message()),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        message,
        issue.rule().to_string().dimmed()
    );

    let loc = issue.location();
    let position = match loc.line {
        Some(line) => format!("{}:{}", loc.file_path, line),
        None => loc.file_path.to_string(),
    };
    let _ = writeln!(
        writer,
        "{:>width$}{} {}",
        "",
        "-->".blue(),
        position,
        width = max_line_width
    );

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    let _ = writeln!(
        writer,
        "{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        total_problems,
        if total_problems == 1 {
            "problem"
        } else {
            "problems"
        },
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| i.location().line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

/// Print the result of a check run in the requested format.
pub fn print(result: &CommandResult, format: OutputFormat) -> Result<()> {
    let stdout = &mut io::stdout().lock();

    match format {
        OutputFormat::Human => {
            if result.issues.is_empty() {
                print_success_to(result.locale_files_checked, stdout);
            } else {
                report_to(&result.issues, stdout);
            }
        }
        OutputFormat::Github => github::print_to(result, stdout)?,
        OutputFormat::Json => json::print_to(result, stdout)?,
    }

    Ok(())
}
