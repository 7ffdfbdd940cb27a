use anyhow::{Result, bail};

use super::super::args::CheckCommand;
use super::{CheckSummary, CommandResult, helper::finish};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        invalid_value::check_invalid_value_issues,
        namespace_conflict::check_namespace_conflict_issues,
    },
};

pub fn check(cmd: &CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;

    if ctx.files.is_empty() {
        bail!("No JSON files found in '{}'", ctx.locale_dir.display());
    }

    let mut all_issues: Vec<Issue> = Vec::new();

    all_issues.extend(
        check_invalid_value_issues(&ctx)
            .into_iter()
            .map(Issue::InvalidValue),
    );
    all_issues.extend(
        check_namespace_conflict_issues(&ctx)
            .into_iter()
            .map(Issue::NamespaceConflict),
    );
    all_issues.extend(ctx.parse_errors().into_iter().map(Issue::ParseError));

    let summary = CheckSummary {
        locale_dir: ctx.locale_dir.display().to_string(),
        analyses: ctx.analyses().to_vec(),
    };

    Ok(finish(summary, all_issues))
}
