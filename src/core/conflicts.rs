//! Namespace conflict detection for flat-key locale data.
//!
//! A conflict exists when a key holds a string value and is also a dotted
//! prefix of another key, e.g. `"expand"` and `"expand.all"`. Tools that
//! unflatten such files cannot represent `expand` as both a string and an
//! object.

use std::collections::HashSet;

use anyhow::{Result, bail};

use crate::core::{FlatLocaleData, NamespaceConflict};

/// Detects every (ancestor, descendant) pair where the ancestor is a declared key.
///
/// Every prefix depth is checked, not only the immediate parent: with `a`,
/// `a.b` and `a.b.c` declared this yields `(a, a.b)`, `(a, a.b.c)` and
/// `(a.b, a.b.c)`. Records are ordered by descendant key (source order), then
/// by increasing prefix depth. Line numbers are left unset.
pub fn detect_flat_key_namespace_conflicts(
    locale_data: &FlatLocaleData,
) -> Result<Vec<NamespaceConflict>> {
    if locale_data.is_empty() {
        bail!("Cannot detect conflicts in an empty locale object");
    }

    let declared: HashSet<&str> = locale_data.keys().map(String::as_str).collect();
    let mut conflicts = Vec::new();

    for key in locale_data.keys() {
        let segments: Vec<&str> = key.split('.').collect();

        for depth in 1..segments.len() {
            let prefix = segments[..depth].join(".");
            if declared.contains(prefix.as_str()) {
                conflicts.push(NamespaceConflict::new(prefix, key));
            }
        }
    }

    Ok(conflicts)
}
