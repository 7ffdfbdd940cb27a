use super::{CheckSummary, CommandResult};
use crate::issues::{Issue, Severity};

pub fn finish(summary: CheckSummary, mut issues: Vec<Issue>) -> CommandResult {
    issues.sort();

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    let locale_files_checked = summary.analyses.len();

    CommandResult {
        summary,
        error_count,
        warning_count,
        issues,
        parse_error_count,
        locale_files_checked,
    }
}
