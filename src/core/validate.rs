//! Value type validation for flat-key locale objects.

use anyhow::{Result, bail};
use serde_json::{Map, Value};

use crate::core::{FlatLocaleData, InvalidValue, JsonType};

/// Locale entries partitioned by value type.
#[derive(Debug, Default)]
pub struct ValidatedLocaleValues {
    /// Entries whose value is a string, in source order.
    pub valid_data: FlatLocaleData,
    /// Entries whose value is anything else, in source order.
    pub invalid_values: Vec<InvalidValue>,
}

/// Validates that all values in a parsed locale object are strings.
///
/// Callers must not pass an empty object; that is reported as an error.
pub fn validate_locale_values(data: &Map<String, Value>) -> Result<ValidatedLocaleValues> {
    if data.is_empty() {
        bail!("Cannot validate an empty locale object");
    }

    let mut result = ValidatedLocaleValues::default();

    for (key, value) in data {
        match value {
            Value::String(s) => {
                result.valid_data.insert(key.clone(), s.clone());
            }
            other => result
                .invalid_values
                .push(InvalidValue::new(key.as_str(), JsonType::of(other))),
        }
    }

    Ok(result)
}
