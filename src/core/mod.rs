//! Core analysis engine.
//!
//! Analysis runs per locale file and has no state shared between files:
//!
//! 1. **Line recovery** (`line_map`): textual key → line scan of the raw file
//! 2. **Value validation** (`validate`): partition entries into string / non-string
//! 3. **Conflict detection** (`conflicts`): keys that are also dotted namespaces,
//!    only run when every value is a string
//!
//! `parsers::json::analyze_locale_file` composes the three for one file;
//! `CheckContext` discovers files and analyzes them in parallel.

pub mod conflicts;
pub mod context;
pub mod data;
pub mod file_scanner;
pub mod line_map;
pub mod parsers;
pub mod validate;

pub use conflicts::detect_flat_key_namespace_conflicts;
pub use context::CheckContext;
pub use data::{
    FileAnalysis, FileOutcome, FlatLocaleData, InvalidValue, JsonType, NamespaceConflict,
};
pub use parsers::json::analyze_locale_file;
pub use validate::{ValidatedLocaleValues, validate_locale_values};
