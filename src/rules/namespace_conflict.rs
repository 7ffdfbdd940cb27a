//! Namespace conflict rule.
//!
//! Reports keys that hold a string value while also being a dotted prefix of
//! another key in the same file (`"expand"` and `"expand.all"`). Such files
//! cannot be converted to nested locale objects.

use crate::{
    config::RuleLevel,
    core::{CheckContext, FileAnalysis, FileOutcome, NamespaceConflict},
    issues::{NamespaceConflictIssue, Severity},
};

pub fn check_namespace_conflict_issues(ctx: &CheckContext) -> Vec<NamespaceConflictIssue> {
    check_namespace_conflicts(ctx.analyses(), ctx.rules.namespace_conflict)
}

/// One issue per conflict record, in file order. Empty when the rule is off.
pub fn check_namespace_conflicts(
    analyses: &[FileAnalysis],
    level: RuleLevel,
) -> Vec<NamespaceConflictIssue> {
    let Some(severity) = Severity::from_level(level) else {
        return Vec::new();
    };

    analyses
        .iter()
        .flat_map(|analysis| {
            let conflicts: &[NamespaceConflict] = match analysis.outcome() {
                FileOutcome::Conflicts(conflicts) => conflicts,
                _ => &[],
            };
            conflicts.iter().map(move |conflict| NamespaceConflictIssue {
                file_path: analysis.file_path.clone(),
                conflict: conflict.clone(),
                severity,
            })
        })
        .collect()
}
