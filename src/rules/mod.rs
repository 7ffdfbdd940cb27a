//! Rule implementations for keylint.
//!
//! Each rule is a pure function over the per-file analysis results plus the
//! configured rule level, with a thin `check_*_issues` wrapper that pulls its
//! inputs from a `CheckContext`.
//!
//! ## Module Structure
//!
//! - `namespace_conflict`: Keys used both as a value and as a namespace
//! - `invalid_value`: Non-string values

pub mod invalid_value;
pub mod namespace_conflict;
