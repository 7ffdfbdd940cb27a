//! Invalid value rule.
//!
//! Reports locale entries whose value is not a string. Nested objects are
//! reported here too: flat-key files must not contain them.

use crate::{
    config::RuleLevel,
    core::{CheckContext, FileAnalysis, FileOutcome, InvalidValue},
    issues::{InvalidValueIssue, Severity},
};

pub fn check_invalid_value_issues(ctx: &CheckContext) -> Vec<InvalidValueIssue> {
    check_invalid_values(ctx.analyses(), ctx.rules.invalid_value)
}

pub fn check_invalid_values(analyses: &[FileAnalysis], level: RuleLevel) -> Vec<InvalidValueIssue> {
    let Some(severity) = Severity::from_level(level) else {
        return Vec::new();
    };

    analyses
        .iter()
        .flat_map(|analysis| {
            let invalid_values: &[InvalidValue] = match analysis.outcome() {
                FileOutcome::InvalidValues(invalid_values) => invalid_values,
                _ => &[],
            };
            invalid_values.iter().map(move |invalid| InvalidValueIssue {
                file_path: analysis.file_path.clone(),
                invalid: invalid.clone(),
                severity,
            })
        })
        .collect()
}
