//! Machine-readable JSON output for `check --format json`.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use super::commands::CommandResult;
use crate::core::FileAnalysis;
use crate::issues::Rule;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    total_files_analyzed: usize,
    namespace_conflicts: usize,
    invalid_values: usize,
    skipped_files: usize,
    errors: usize,
    warnings: usize,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    files: &'a [FileAnalysis],
    summary: JsonSummary,
}

fn build_report(result: &CommandResult) -> JsonReport<'_> {
    JsonReport {
        files: &result.summary.analyses,
        summary: JsonSummary {
            total_files_analyzed: result.locale_files_checked,
            namespace_conflicts: result.count(Rule::NamespaceConflict),
            invalid_values: result.count(Rule::InvalidValue),
            skipped_files: result.parse_error_count,
            errors: result.error_count,
            warnings: result.warning_count,
        },
    }
}

pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &build_report(result))?;
    writeln!(writer)?;
    Ok(())
}
