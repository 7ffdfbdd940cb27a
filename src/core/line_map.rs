//! Key → line number recovery for locale files.
//!
//! This is a textual scan that runs independently of the JSON parse. It only
//! recognizes keys declared at the start of a line (`  "key": ...`), so it
//! cannot locate keys in minified files, keys split across lines, or keys
//! containing escaped quotes or other JSON escapes. When a key name appears
//! more than once, the last occurrence wins.

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

/// Matches a key declaration: optional whitespace, `"key"`, optional whitespace, `:`.
static KEY_DECLARATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*"([^"]+)"\s*:"#).unwrap());

/// Maps each declared key to its 1-based line number.
pub type KeyLineMap = HashMap<String, usize>;

pub fn build_key_line_map(content: &str) -> KeyLineMap {
    let mut line_map = KeyLineMap::new();

    for (index, line) in content.lines().enumerate() {
        if let Some(captures) = KEY_DECLARATION_REGEX.captures(line) {
            line_map.insert(captures[1].to_string(), index + 1);
        }
    }

    line_map
}
