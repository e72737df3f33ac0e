//! Diff orchestrator for docdiff.
//!
//! The single public entry point is [`compare`]: it resolves the effective
//! [`Format`] once, dispatches to the structural differ, the rich-text
//! extractor plus line differ, or the line differ directly, and folds every
//! failure into a well-formed [`DiffReport`]. The function never panics and
//! never raises; callers always receive the same result shape.
//!
//! The engine is synchronous and holds no cross-call state; concurrent
//! comparisons need no coordination.
//!
//! [`Format`]: docdiff_types::Format

mod compare;
mod error;

pub use compare::{compare, InputMode};
pub use error::{EngineError, EngineResult};

// Re-export the result types callers consume.
pub use docdiff_types::{DiffRecord, DiffReport, Format, Severity};
