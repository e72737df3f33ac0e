//! Error types for the orchestrator.

/// Errors that end a comparison at the failure boundary.
///
/// These never escape [`compare`](crate::compare); they are folded into the
/// report's `error` field.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// An input file could not be read.
    ///
    /// Surfaced as a distinct failure instead of the silent empty-content
    /// coercion this engine replaces, which understated differences.
    #[error("failed to read {path}: {source}")]
    ReadFailure {
        path: String,
        source: std::io::Error,
    },
}

/// Convenience alias for orchestrator results.
pub type EngineResult<T> = Result<T, EngineError>;
