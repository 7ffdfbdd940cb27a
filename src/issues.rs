//! Issue types for locale lint results.
//!
//! Each issue is self-contained with all information needed by the
//! reporters (human, GitHub annotations, JSON).

use enum_dispatch::enum_dispatch;
use serde::Serialize;

use crate::config::RuleLevel;
use crate::core::{InvalidValue, NamespaceConflict};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Severity for a configured rule level, or `None` if the rule is off.
    pub fn from_level(level: RuleLevel) -> Option<Self> {
        match level {
            RuleLevel::Off => None,
            RuleLevel::Warning => Some(Severity::Warning),
            RuleLevel::Error => Some(Severity::Error),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    InvalidValue,
    NamespaceConflict,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::InvalidValue => write!(f, "invalid-value"),
            Rule::NamespaceConflict => write!(f, "namespace-conflict"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A key used both as a string value and as a namespace for another key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceConflictIssue {
    pub file_path: String,
    pub conflict: NamespaceConflict,
    pub severity: Severity,
}

impl NamespaceConflictIssue {
    pub fn rule() -> Rule {
        Rule::NamespaceConflict
    }
}

/// A locale entry whose value is not a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidValueIssue {
    pub file_path: String,
    pub invalid: InvalidValue,
    pub severity: Severity,
}

impl InvalidValueIssue {
    pub fn rule() -> Rule {
        Rule::InvalidValue
    }
}

/// File could not be analyzed and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A locale issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    NamespaceConflict(NamespaceConflictIssue),
    InvalidValue(InvalidValueIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location of an issue in a locale file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLocation<'a> {
    pub file_path: &'a str,
    /// 1-based line, when the key declaration could be located.
    pub line: Option<usize>,
}

/// Trait for types that can be reported.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key name or error).
    fn message(&self) -> String;

    /// Full sentence describing the issue, for annotations and JSON output.
    fn description(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

fn with_line(key: &str, line: Option<usize>) -> String {
    match line {
        Some(line) => format!("\"{}\" (line {})", key, line),
        None => format!("\"{}\"", key),
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for NamespaceConflictIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation {
            file_path: &self.file_path,
            line: self.conflict.leaf_key_line,
        }
    }

    fn message(&self) -> String {
        self.conflict.leaf_key.clone()
    }

    fn description(&self) -> String {
        format!(
            "Namespace conflict: \"{}\" is a string value but is also used as a namespace by {}",
            self.conflict.leaf_key,
            with_line(
                &self.conflict.conflicting_descendant_key,
                self.conflict.conflicting_descendant_key_line
            )
        )
    }

    fn report_severity(&self) -> Severity {
        self.severity
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "also used as a namespace by {}",
            with_line(
                &self.conflict.conflicting_descendant_key,
                self.conflict.conflicting_descendant_key_line
            )
        ))
    }
}

impl Report for InvalidValueIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation {
            file_path: &self.file_path,
            line: self.invalid.line,
        }
    }

    fn message(&self) -> String {
        self.invalid.key.clone()
    }

    fn description(&self) -> String {
        format!(
            "Invalid value type for \"{}\": expected string, got {}",
            self.invalid.key, self.invalid.actual_type
        )
    }

    fn report_severity(&self) -> Severity {
        self.severity
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "expected string, got {}",
            self.invalid.actual_type
        ))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation {
            file_path: &self.file_path,
            line: None,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn description(&self) -> String {
        format!("Skipping {}: {}", self.file_path, self.error)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let (a, b) = (self.location(), other.location());

        // Sort by: file_path, line (unknown first), rule, message
        a.file_path
            .cmp(b.file_path)
            .then_with(|| a.line.cmp(&b.line))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
