//! Keylint - lint flat i18n locale files
//!
//! Keylint is a CLI tool and library for checking flat, dot-keyed JSON locale
//! files before they are converted to nested objects. It reports values that
//! are not strings and keys that are used both as a value and as a namespace
//! (`"expand"` next to `"expand.all"`), with the line of each offending key.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and output formats)
//! - `config`: Configuration file loading and parsing
//! - `core`: Analysis engine (line map, value validation, conflict detection)
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Rules turning file analyses into issues
//!
//! ## Library usage
//!
//! ```no_run
//! use keylint::core::{FileOutcome, analyze_locale_file};
//!
//! let analysis = analyze_locale_file("locales/en.json");
//! if let FileOutcome::Conflicts(conflicts) = analysis.outcome() {
//!     for conflict in conflicts {
//!         println!("{} conflicts with {}", conflict.leaf_key, conflict.conflicting_descendant_key);
//!     }
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
