//! Locale file parsers.
//!
//! - `json`: flat-key JSON locale file analysis

pub mod json;
