//! Best-effort syntax validation for docdiff.
//!
//! A pluggable boundary capability: `validate(content, language)` reports
//! `valid/invalid` plus an issue list and nothing else. It neither consumes
//! nor produces diff output, so swapping a heuristic check for a real parser
//! never touches the diff engine's contract.
//!
//! JSON, YAML, and XML use real parsers; the Python, Java, and JavaScript
//! checks are line-scan heuristics inherited from the system this replaces
//! and are documented as such.

mod language;
mod validate;

pub use language::Language;
pub use validate::{validate, validate_named, SyntaxIssue, Validation};
