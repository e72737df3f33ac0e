//! The comparison pipeline: resolve, dispatch, normalize.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use docdiff_line::{diff_line_seqs, diff_lines};
use docdiff_richtext::extract_lines;
use docdiff_struct::{diff_values, resolve_records};
use docdiff_types::{DiffRecord, DiffReport, Format, Severity};

use crate::error::{EngineError, EngineResult};

/// How the two inputs are delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Inputs are file paths, read to completion.
    Path,
    /// Inputs are the contents themselves.
    Content,
}

/// Compare two inputs and report their differences.
///
/// The declared format wins over detection; otherwise the format derives
/// from the first input's extension (path mode) or a speculative JSON parse
/// of both contents (content mode), falling back to plain text. All failure
/// modes resolve to a well-formed [`DiffReport`]; this function never
/// returns an error and never panics.
pub fn compare(
    input1: &str,
    input2: &str,
    mode: InputMode,
    declared_format: Option<&str>,
) -> DiffReport {
    match run(input1, input2, mode, declared_format) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("comparison failed: {e}");
            DiffReport::from_error(e.to_string())
        }
    }
}

fn run(
    input1: &str,
    input2: &str,
    mode: InputMode,
    declared_format: Option<&str>,
) -> EngineResult<DiffReport> {
    match mode {
        InputMode::Path => run_paths(Path::new(input1), Path::new(input2), declared_format),
        InputMode::Content => Ok(run_contents(input1, input2, declared_format)),
    }
}

fn run_paths(path1: &Path, path2: &Path, declared_format: Option<&str>) -> EngineResult<DiffReport> {
    let mut warnings = Vec::new();
    if extension_of(path1) != extension_of(path2) {
        warnings.push("Files have different extensions".to_string());
    }

    let format = declared_format
        .map(Format::from_declared)
        .unwrap_or_else(|| Format::from_extension(path1));
    tracing::debug!(%format, "resolved comparison format");

    match format {
        Format::StyledDocument => Ok(compare_styled(path1, path2, warnings)),
        Format::Json => {
            let text1 = read_text(path1)?;
            let text2 = read_text(path2)?;
            Ok(compare_json_or_text(&text1, &text2, warnings))
        }
        Format::Text => {
            let text1 = read_text(path1)?;
            let text2 = read_text(path2)?;
            Ok(DiffReport::with_diffs(diff_lines(&text1, &text2), warnings))
        }
    }
}

fn run_contents(content1: &str, content2: &str, declared_format: Option<&str>) -> DiffReport {
    let format = declared_format
        .map(Format::from_declared)
        .unwrap_or_else(|| sniff_content_format(content1, content2));
    tracing::debug!(%format, "resolved comparison format");

    match format {
        Format::Json => compare_json_or_text(content1, content2, Vec::new()),
        Format::StyledDocument => {
            // A zipped container cannot round-trip through a UTF-8 string.
            tracing::debug!("styled-document format unavailable in content mode, comparing as text");
            DiffReport::with_diffs(diff_lines(content1, content2), Vec::new())
        }
        Format::Text => DiffReport::with_diffs(diff_lines(content1, content2), Vec::new()),
    }
}

/// Speculative format detection for content-mode inputs.
fn sniff_content_format(content1: &str, content2: &str) -> Format {
    let both_json = serde_json::from_str::<Value>(content1).is_ok()
        && serde_json::from_str::<Value>(content2).is_ok();
    if both_json {
        Format::Json
    } else {
        Format::Text
    }
}

/// Structural comparison, falling back to a line diff when either side does
/// not parse. The fallback is silent in the report; the transition is only
/// logged.
fn compare_json_or_text(text1: &str, text2: &str, warnings: Vec<String>) -> DiffReport {
    match (
        serde_json::from_str::<Value>(text1),
        serde_json::from_str::<Value>(text2),
    ) {
        (Ok(value1), Ok(value2)) => {
            let records = resolve_records(diff_values(&value1, &value2), text1, text2);
            DiffReport::with_diffs(records, warnings)
        }
        (first, _) => {
            let side = if first.is_err() { "file1" } else { "file2" };
            tracing::warn!("json parse failed on {side}, falling back to line comparison");
            DiffReport::with_diffs(diff_lines(text1, text2), warnings)
        }
    }
}

/// Extract both containers and line-diff the annotated streams.
///
/// An extraction failure on either side ends the comparison with a single
/// CRITICAL record; no line diff is attempted.
fn compare_styled(path1: &Path, path2: &Path, warnings: Vec<String>) -> DiffReport {
    let lines1 = match extract_lines(path1) {
        Ok(lines) => lines,
        Err(e) => return extraction_failure("file1", &e, warnings),
    };
    let lines2 = match extract_lines(path2) {
        Ok(lines) => lines,
        Err(e) => return extraction_failure("file2", &e, warnings),
    };

    let refs1: Vec<&str> = lines1.iter().map(String::as_str).collect();
    let refs2: Vec<&str> = lines2.iter().map(String::as_str).collect();
    DiffReport::with_diffs(diff_line_seqs(&refs1, &refs2), warnings)
}

fn extraction_failure(side: &str, error: &docdiff_richtext::RichTextError, warnings: Vec<String>) -> DiffReport {
    tracing::warn!("styled-document extraction failed on {side}: {error}");
    DiffReport::with_diffs(
        vec![DiffRecord::new(
            side,
            Severity::Critical,
            format!("extraction failed: {error}"),
        )],
        warnings,
    )
}

fn read_text(path: &Path) -> EngineResult<String> {
    fs::read_to_string(path).map_err(|source| EngineError::ReadFailure {
        path: path.display().to_string(),
        source,
    })
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    fn content_compare(a: &str, b: &str, format: Option<&str>) -> DiffReport {
        compare(a, b, InputMode::Content, format)
    }

    fn file_with(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn docx_with(xml: &str) -> NamedTempFile {
        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        let mut writer = zip::ZipWriter::new(file.reopen().unwrap());
        writer
            .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap();
        file
    }

    // ---- content mode ----

    #[test]
    fn identical_text_content() {
        let report = content_compare("a\nb\n", "a\nb\n", Some("text"));
        assert!(report.identical);
        assert!(report.diffs.is_empty());
        assert!(report.error.is_none());
    }

    #[test]
    fn single_line_content_difference() {
        let report = content_compare("a\nb\n", "a\nc\n", Some("text"));
        assert!(!report.identical);
        assert_eq!(report.diffs.len(), 1);
        assert_eq!(report.diffs[0].location, "Line 2");
        assert_eq!(report.diffs[0].level, Severity::Critical);
        assert!(report.diffs[0].description.contains("'b' vs 'c'"));
    }

    #[test]
    fn indentation_difference_is_error_level() {
        let report = content_compare("a\n  b\n", "a\nb\n", Some("text"));
        assert_eq!(report.diffs.len(), 1);
        assert_eq!(report.diffs[0].location, "Line 2");
        assert_eq!(report.diffs[0].level, Severity::Error);
        assert!(report.diffs[0].description.contains("2 vs 0"));
    }

    #[test]
    fn json_value_mismatch() {
        let report = content_compare(r#"{"x":1}"#, r#"{"x":2}"#, Some("json"));
        assert!(!report.identical);
        assert_eq!(report.diffs.len(), 1);
        assert_eq!(report.diffs[0].location, "x");
        assert_eq!(report.diffs[0].level, Severity::Critical);
    }

    #[test]
    fn json_missing_key() {
        let report = content_compare(r#"{"x":1}"#, r#"{"x":1,"y":2}"#, Some("json"));
        assert_eq!(report.diffs.len(), 1);
        assert_eq!(report.diffs[0].location, "y");
        assert_eq!(report.diffs[0].description, "missing in file1");
    }

    #[test]
    fn identical_json_with_different_layout() {
        // Whitespace layout differs; parsed values are equal.
        let report = content_compare("{\"x\": 1}", "{\n  \"x\": 1\n}", Some("json"));
        assert!(report.identical);
    }

    #[test]
    fn content_mode_sniffs_json() {
        let report = content_compare(r#"{"a":1}"#, r#"{"a":2}"#, None);
        assert_eq!(report.diffs.len(), 1);
        assert_eq!(report.diffs[0].location, "a");
    }

    #[test]
    fn content_mode_falls_back_to_text_when_not_json() {
        let report = content_compare("hello\n", "world\n", None);
        assert_eq!(report.diffs.len(), 1);
        assert_eq!(report.diffs[0].location, "Line 1");
    }

    #[test]
    fn declared_json_falls_back_silently_on_parse_failure() {
        let report = content_compare("hello\nworld\n", "hello\nthere\n", Some("json"));
        assert!(!report.identical);
        assert_eq!(report.diffs.len(), 1);
        assert_eq!(report.diffs[0].location, "Line 2");
        // The fallback is logged, not surfaced.
        assert!(report.warnings.is_empty());
        assert!(report.error.is_none());
    }

    #[test]
    fn json_diffs_are_sorted_by_recovered_line() {
        let left = "{\n  \"a\": 1,\n  \"b\": 2,\n  \"c\": 3\n}";
        let right = "{\n  \"a\": 9,\n  \"b\": 2,\n  \"c\": 9\n}";
        let report = content_compare(left, right, Some("json"));
        let locations: Vec<_> = report.diffs.iter().map(|d| d.location.clone()).collect();
        assert_eq!(locations, vec!["Line 2", "Line 4"]);
    }

    // ---- path mode ----

    #[test]
    fn path_mode_text_comparison() {
        let f1 = file_with(".txt", "a\nb\n");
        let f2 = file_with(".txt", "a\nc\n");
        let report = compare(
            f1.path().to_str().unwrap(),
            f2.path().to_str().unwrap(),
            InputMode::Path,
            None,
        );
        assert_eq!(report.diffs.len(), 1);
        assert_eq!(report.diffs[0].location, "Line 2");
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn mismatched_extensions_warn_but_continue() {
        let f1 = file_with(".txt", "same\n");
        let f2 = file_with(".log", "same\n");
        let report = compare(
            f1.path().to_str().unwrap(),
            f2.path().to_str().unwrap(),
            InputMode::Path,
            None,
        );
        assert!(report.identical);
        assert_eq!(report.warnings, vec!["Files have different extensions"]);
        assert!(report.error.is_none());
    }

    #[test]
    fn json_extension_dispatches_structurally() {
        let f1 = file_with(".json", "{\n  \"x\": 1\n}");
        let f2 = file_with(".json", "{\n  \"x\": 2\n}");
        let report = compare(
            f1.path().to_str().unwrap(),
            f2.path().to_str().unwrap(),
            InputMode::Path,
            None,
        );
        assert_eq!(report.diffs.len(), 1);
        assert_eq!(report.diffs[0].location, "Line 2");
        assert_eq!(report.diffs[0].description, "value mismatch: 1 vs 2");
    }

    #[test]
    fn unreadable_file_surfaces_read_failure() {
        let f2 = file_with(".txt", "content\n");
        let report = compare(
            "/nonexistent/input.txt",
            f2.path().to_str().unwrap(),
            InputMode::Path,
            None,
        );
        assert!(!report.identical);
        assert!(report.diffs.is_empty());
        let error = report.error.expect("read failure must be surfaced");
        assert!(error.contains("failed to read"), "got: {error}");
        assert_eq!(report.warnings.len(), 1);
    }

    // ---- styled documents ----

    #[test]
    fn identical_styled_documents() {
        let xml = r#"<w:document><w:body><w:p><w:r><w:t>Hello</w:t></w:r></w:p></w:body></w:document>"#;
        let f1 = docx_with(xml);
        let f2 = docx_with(xml);
        let report = compare(
            f1.path().to_str().unwrap(),
            f2.path().to_str().unwrap(),
            InputMode::Path,
            None,
        );
        assert!(report.identical);
    }

    #[test]
    fn bold_emphasis_surfaces_as_line_difference() {
        let plain = r#"<w:document><w:body><w:p><w:r><w:t>Hello world</w:t></w:r></w:p></w:body></w:document>"#;
        let bold = r#"<w:document><w:body><w:p><w:r><w:rPr><w:b/></w:rPr><w:t>Hello world</w:t></w:r></w:p></w:body></w:document>"#;
        let f1 = docx_with(plain);
        let f2 = docx_with(bold);
        let report = compare(
            f1.path().to_str().unwrap(),
            f2.path().to_str().unwrap(),
            InputMode::Path,
            None,
        );
        assert!(!report.identical);
        assert_eq!(report.diffs.len(), 1);
        assert_eq!(report.diffs[0].location, "Line 1");
        assert_eq!(report.diffs[0].level, Severity::Critical);
        assert!(report.diffs[0].description.contains("[bold]Hello world[/style]"));
    }

    #[test]
    fn extraction_failure_is_one_critical_record() {
        let not_zip = file_with(".docx", "not a container");
        let ok = docx_with(r#"<w:document><w:body><w:p><w:r><w:t>x</w:t></w:r></w:p></w:body></w:document>"#);
        let report = compare(
            not_zip.path().to_str().unwrap(),
            ok.path().to_str().unwrap(),
            InputMode::Path,
            None,
        );
        assert!(!report.identical);
        assert_eq!(report.diffs.len(), 1);
        assert_eq!(report.diffs[0].location, "file1");
        assert_eq!(report.diffs[0].level, Severity::Critical);
        assert!(report.diffs[0].description.starts_with("extraction failed:"));
        assert!(report.error.is_none());
    }

    #[test]
    fn image_only_difference_is_reported() {
        let with_image = r#"<w:document><w:body>
            <w:p><w:r><w:t>text</w:t></w:r></w:p>
            <w:p><w:r><w:drawing><wp:docPr name="Logo"/><a:graphicData uri="x/picture"/></w:drawing></w:r></w:p>
        </w:body></w:document>"#;
        let without = r#"<w:document><w:body><w:p><w:r><w:t>text</w:t></w:r></w:p></w:body></w:document>"#;
        let f1 = docx_with(with_image);
        let f2 = docx_with(without);
        let report = compare(
            f1.path().to_str().unwrap(),
            f2.path().to_str().unwrap(),
            InputMode::Path,
            None,
        );
        assert_eq!(report.diffs.len(), 1);
        assert_eq!(report.diffs[0].description, "extra content in file1: [Images: Logo]");
    }

    #[test]
    fn declared_format_overrides_extension() {
        // Files with .txt extensions but declared json still diff structurally.
        let f1 = file_with(".txt", r#"{"k": "a"}"#);
        let f2 = file_with(".txt", r#"{"k": "b"}"#);
        let report = compare(
            f1.path().to_str().unwrap(),
            f2.path().to_str().unwrap(),
            InputMode::Path,
            Some("json"),
        );
        assert_eq!(report.diffs.len(), 1);
        assert_eq!(report.diffs[0].location, "k");
        assert_eq!(report.diffs[0].description, "value mismatch: a vs b");
    }

    #[test]
    fn reflexivity_across_formats() {
        for (content, format) in [
            ("plain\ntext\n", Some("text")),
            (r#"{"a": [1, 2]}"#, Some("json")),
            ("anything", None),
        ] {
            let report = content_compare(content, content, format);
            assert!(report.identical, "not identical for {format:?}");
            assert!(report.diffs.is_empty());
        }
    }
}
