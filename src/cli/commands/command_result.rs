use crate::core::FileAnalysis;
use crate::issues::{Issue, Rule, Severity};

#[derive(Debug)]
pub struct CheckSummary {
    /// Directory that was linted.
    pub locale_dir: String,
    /// Per-file analysis results, in sorted file order.
    pub analyses: Vec<FileAnalysis>,
}

/// Result of running the check command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CheckSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found during the check, sorted.
    pub issues: Vec<Issue>,
    /// Number of files that were skipped because they could not be analyzed.
    pub parse_error_count: usize,
    /// Number of locale files (JSON) that were checked.
    pub locale_files_checked: usize,
}

impl CommandResult {
    pub fn count(&self, rule: Rule) -> usize {
        self.issues.iter().filter(|i| i.rule() == rule).count()
    }

    /// Issues of `rule` reported at error level.
    pub fn error_count_for(&self, rule: Rule) -> usize {
        self.issues
            .iter()
            .filter(|i| i.rule() == rule && i.severity() == Severity::Error)
            .count()
    }

    /// One-line description of the error-level findings that fail the run.
    pub fn failure_message(&self) -> String {
        format!(
            "Found {} namespace conflict(s) and {} invalid value(s) in {}",
            self.error_count_for(Rule::NamespaceConflict),
            self.error_count_for(Rule::InvalidValue),
            self.summary.locale_dir
        )
    }
}
