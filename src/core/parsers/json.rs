use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;

use crate::core::{
    FileAnalysis, InvalidValue, NamespaceConflict,
    conflicts::detect_flat_key_namespace_conflicts,
    line_map::{KeyLineMap, build_key_line_map},
    validate::validate_locale_values,
};

/// Findings for a locale file that parsed as a non-empty JSON object.
#[derive(Debug, PartialEq, Eq)]
pub enum LocaleFindings {
    /// Non-string values were found; conflict detection did not run.
    InvalidValues(Vec<InvalidValue>),
    /// All values are strings; namespace conflicts (possibly none).
    Conflicts(Vec<NamespaceConflict>),
}

/// Reads, parses, and analyzes a single locale file.
///
/// Never fails: read errors, malformed JSON, and non-locale content are
/// captured in [`FileAnalysis::error`] so one bad file does not stop the run.
pub fn analyze_locale_file(path: impl AsRef<Path>) -> FileAnalysis {
    let path = path.as_ref();
    let file_path = path.to_string_lossy().to_string();

    let findings = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))
        .and_then(|content| analyze_locale_content(&content));

    match findings {
        Ok(LocaleFindings::InvalidValues(invalid_values)) => {
            FileAnalysis::with_invalid_values(file_path, invalid_values)
        }
        Ok(LocaleFindings::Conflicts(conflicts)) => {
            FileAnalysis::with_conflicts(file_path, conflicts)
        }
        Err(e) => FileAnalysis::failed(file_path, format!("{:#}", e)),
    }
}

/// Analyzes the raw text of a locale file.
///
/// Value validation runs first; namespace conflicts are only detected when
/// every value is a string.
///
/// Numbers outside the `f64` range and arbitrarily deep arrays or objects
/// are accepted, so they surface as invalid values. Strings containing an
/// unpaired UTF-16 surrogate escape (`"\ud83d"`) cannot be represented and
/// fail the parse; such files are reported as unreadable.
pub fn analyze_locale_content(content: &str) -> Result<LocaleFindings> {
    let json = parse_json(content).context("Failed to parse JSON")?;

    let Value::Object(object) = json else {
        bail!("File does not contain a JSON object");
    };

    if object.is_empty() {
        bail!("File contains no translation keys");
    }

    let line_map = build_key_line_map(content);

    // Phase one: value types. Conflict detection needs an all-string key set.
    let validated = validate_locale_values(&object)?;
    if !validated.invalid_values.is_empty() {
        let invalid_values = with_invalid_value_lines(validated.invalid_values, &line_map);
        return Ok(LocaleFindings::InvalidValues(invalid_values));
    }

    // Phase two: namespace conflicts.
    let conflicts = detect_flat_key_namespace_conflicts(&validated.valid_data)?;
    Ok(LocaleFindings::Conflicts(with_conflict_lines(
        conflicts, &line_map,
    )))
}

fn parse_json(content: &str) -> serde_json::Result<Value> {
    let mut deserializer = serde_json::Deserializer::from_str(content);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}

fn with_invalid_value_lines(
    invalid_values: Vec<InvalidValue>,
    line_map: &KeyLineMap,
) -> Vec<InvalidValue> {
    invalid_values
        .into_iter()
        .map(|mut invalid| {
            invalid.line = line_map.get(&invalid.key).copied();
            invalid
        })
        .collect()
}

fn with_conflict_lines(
    conflicts: Vec<NamespaceConflict>,
    line_map: &KeyLineMap,
) -> Vec<NamespaceConflict> {
    conflicts
        .into_iter()
        .map(|mut conflict| {
            conflict.leaf_key_line = line_map.get(&conflict.leaf_key).copied();
            conflict.conflicting_descendant_key_line = line_map
                .get(&conflict.conflicting_descendant_key)
                .copied();
            conflict
        })
        .collect()
}
