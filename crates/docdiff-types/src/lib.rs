//! Foundation types for docdiff.
//!
//! This crate provides the severity, record, report, format, and structural
//! path types used throughout the docdiff system. Every other docdiff crate
//! depends on `docdiff-types`.
//!
//! # Key Types
//!
//! - [`Severity`] — Classification of a reported difference
//! - [`DiffRecord`] — One reported difference (location, severity, description)
//! - [`DiffReport`] — Top-level comparison output
//! - [`Format`] — Comparison format, resolved once per run
//! - [`Side`] — Side attribution for structural diff records
//! - [`TreePath`] — Slash/bracket-delimited address into a tree value

pub mod format;
pub mod path;
pub mod record;

pub use format::Format;
pub use path::{Side, TreePath};
pub use record::{sort_records, DiffRecord, DiffReport, Severity};
