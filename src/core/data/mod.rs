//! Core data types produced by locale file analysis.
//!
//! ## Module Structure
//!
//! - `locale`: Flat locale data and per-file findings (invalid values, namespace conflicts)

pub mod locale;

pub use locale::{
    FileAnalysis, FileOutcome, FlatLocaleData, InvalidValue, JsonType, NamespaceConflict,
};
