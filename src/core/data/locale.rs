use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Parsed flat-key locale object where dot-separated keys map to string values.
///
/// Keys keep the order in which they were inserted, so any enumeration (and
/// therefore conflict ordering) follows the source file.
pub type FlatLocaleData = IndexMap<String, String>;

/// Type tag of a JSON value found in a locale file.
///
/// `null` is tagged [`JsonType::Object`], matching how the values are
/// classified by JavaScript-based tooling that consumes these files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl JsonType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => JsonType::String,
            Value::Number(_) => JsonType::Number,
            Value::Bool(_) => JsonType::Boolean,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) | Value::Null => JsonType::Object,
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonType::String => write!(f, "string"),
            JsonType::Number => write!(f, "number"),
            JsonType::Boolean => write!(f, "boolean"),
            JsonType::Array => write!(f, "array"),
            JsonType::Object => write!(f, "object"),
        }
    }
}

/// A locale entry whose value is not a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidValue {
    pub key: String,
    pub actual_type: JsonType,
    /// Line of the key declaration (1-based), when it could be located.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl InvalidValue {
    pub fn new(key: impl Into<String>, actual_type: JsonType) -> Self {
        Self {
            key: key.into(),
            actual_type,
            line: None,
        }
    }
}

/// A key that is both a leaf value and a prefix of another key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceConflict {
    /// The shorter key holding a string value (e.g. `"expand"`).
    pub leaf_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaf_key_line: Option<usize>,
    /// The longer dotted key that treats the leaf as a namespace (e.g. `"expand.all"`).
    pub conflicting_descendant_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicting_descendant_key_line: Option<usize>,
}

impl NamespaceConflict {
    pub fn new(leaf_key: impl Into<String>, conflicting_descendant_key: impl Into<String>) -> Self {
        Self {
            leaf_key: leaf_key.into(),
            leaf_key_line: None,
            conflicting_descendant_key: conflicting_descendant_key.into(),
            conflicting_descendant_key_line: None,
        }
    }
}

/// Result of analyzing a single locale file.
///
/// At most one of `error` and `invalid_values` is set; when neither is,
/// `conflicts` holds the (possibly empty) namespace conflicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAnalysis {
    pub file_path: String,
    pub conflicts: Vec<NamespaceConflict>,
    /// Present when the file could not be read, parsed, or is not a locale object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_values: Option<Vec<InvalidValue>>,
}

/// The single active outcome of a [`FileAnalysis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome<'a> {
    Error(&'a str),
    InvalidValues(&'a [InvalidValue]),
    Conflicts(&'a [NamespaceConflict]),
}

impl FileAnalysis {
    pub fn failed(file_path: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            conflicts: Vec::new(),
            error: Some(error.into()),
            invalid_values: None,
        }
    }

    pub fn with_invalid_values(file_path: impl Into<String>, invalid_values: Vec<InvalidValue>) -> Self {
        Self {
            file_path: file_path.into(),
            conflicts: Vec::new(),
            error: None,
            invalid_values: Some(invalid_values),
        }
    }

    pub fn with_conflicts(file_path: impl Into<String>, conflicts: Vec<NamespaceConflict>) -> Self {
        Self {
            file_path: file_path.into(),
            conflicts,
            error: None,
            invalid_values: None,
        }
    }

    pub fn outcome(&self) -> FileOutcome<'_> {
        if let Some(error) = &self.error {
            return FileOutcome::Error(error);
        }
        match &self.invalid_values {
            Some(invalid) if !invalid.is_empty() => FileOutcome::InvalidValues(invalid),
            _ => FileOutcome::Conflicts(&self.conflicts),
        }
    }

    /// Number of findings (invalid values or conflicts) in this file.
    pub fn finding_count(&self) -> usize {
        match self.outcome() {
            FileOutcome::Error(_) => 0,
            FileOutcome::InvalidValues(invalid) => invalid.len(),
            FileOutcome::Conflicts(conflicts) => conflicts.len(),
        }
    }
}
