//! Location resolution for structural records.

use docdiff_types::{sort_records, DiffRecord, Severity, Side};

use crate::locate::locate_line;
use crate::value_diff::StructRecord;

/// Resolve structural records into ordered [`DiffRecord`]s.
///
/// Each record's side tag selects which raw text the locator consults
/// (`Both` anchors on file1, matching how paired line records anchor on the
/// left index). A recovered line becomes `Line <n>`; otherwise the
/// structural path itself is the location. The result is stably sorted by
/// recovered line number, unrecoverable locations first.
pub fn resolve_records(
    records: Vec<StructRecord>,
    left_text: &str,
    right_text: &str,
) -> Vec<DiffRecord> {
    let mut resolved: Vec<DiffRecord> = records
        .into_iter()
        .map(|record| {
            let text = match record.side {
                Side::File2 => right_text,
                Side::File1 | Side::Both => left_text,
            };
            let location = match locate_line(text, &record.path) {
                Some(line) => format!("Line {line}"),
                None => record.path.to_string(),
            };
            DiffRecord::new(location, Severity::Critical, record.description)
        })
        .collect();

    sort_records(&mut resolved);
    resolved
}
