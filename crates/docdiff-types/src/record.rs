//! Diff records and the top-level comparison report.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a reported difference.
///
/// - `Critical` — content differs, or content exists on only one side
/// - `Error` — content matches but indentation differs
/// - `Warning` — content matches except for trailing/internal whitespace
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Critical => "CRITICAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        };
        write!(f, "{s}")
    }
}

/// One reported difference between the two inputs.
///
/// `location` is one of `Line N` (paired lines, anchored on the left index),
/// `Left Line N` / `Right Line N` (content with no counterpart on the other
/// side), or a structural path such as `a/b[2]/c` when no line number could
/// be recovered. It is never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRecord {
    pub location: String,
    pub level: Severity,
    pub description: String,
}

impl DiffRecord {
    pub fn new(location: impl Into<String>, level: Severity, description: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            level,
            description: description.into(),
        }
    }

    /// The line number carried by this record's location, if any.
    ///
    /// Recognizes the `Line N`, `Left Line N`, and `Right Line N` forms;
    /// structural-path locations have no line number.
    pub fn location_line(&self) -> Option<usize> {
        let rest = self
            .location
            .strip_prefix("Left Line ")
            .or_else(|| self.location.strip_prefix("Right Line "))
            .or_else(|| self.location.strip_prefix("Line "))?;
        rest.parse().ok()
    }
}

impl fmt::Display for DiffRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.location, self.level, self.description)
    }
}

/// Sort records ascending by the line number extracted from their location.
///
/// Records without a recoverable line number sort as line 0. The sort is
/// stable, so discovery order is preserved among ties.
pub fn sort_records(records: &mut [DiffRecord]) {
    records.sort_by_key(|r| r.location_line().unwrap_or(0));
}

/// Top-level output of a comparison.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    /// `true` iff no difference was found under the chosen comparison mode.
    pub identical: bool,
    /// Reported differences, ordered by ascending recovered line number.
    pub diffs: Vec<DiffRecord>,
    /// Non-fatal observations (mismatched extensions, format fallbacks).
    pub warnings: Vec<String>,
    /// Set only when the comparison itself could not be completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DiffReport {
    /// A report for two inputs that compared equal.
    pub fn identical(warnings: Vec<String>) -> Self {
        Self {
            identical: true,
            diffs: Vec::new(),
            warnings,
            error: None,
        }
    }

    /// A report carrying the given differences, sorted by recovered line.
    pub fn with_diffs(mut diffs: Vec<DiffRecord>, warnings: Vec<String>) -> Self {
        sort_records(&mut diffs);
        Self {
            identical: diffs.is_empty(),
            diffs,
            warnings,
            error: None,
        }
    }

    /// A report for a comparison that could not be completed.
    ///
    /// The fault message is surfaced both as `error` and as a warning.
    pub fn from_error(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            identical: false,
            diffs: Vec::new(),
            warnings: vec![message.clone()],
            error: Some(message),
        }
    }
}
