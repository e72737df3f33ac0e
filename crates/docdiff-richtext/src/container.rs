//! Opening the zipped container and the extraction fallback ladder.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::{RichTextError, RichTextResult};
use crate::linearize::linearize;
use crate::parse::{parse_document, plain_text_lines};

/// The container entry holding the main document part.
const DOCUMENT_PART: &str = "word/document.xml";

/// Read the main document part's markup out of a container file.
pub fn read_document_xml(path: &Path) -> RichTextResult<String> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;
    let mut part = match archive.by_name(DOCUMENT_PART) {
        Ok(part) => part,
        Err(ZipError::FileNotFound) => return Err(RichTextError::MissingDocumentPart),
        Err(e) => return Err(e.into()),
    };
    let mut content = String::new();
    part.read_to_string(&mut content)?;
    Ok(content)
}

/// Extract a container into its annotated line stream.
///
/// Degrades in two steps: a styled-parse failure falls back to plain
/// paragraph text, and a plain-parse failure yields zero extractable lines.
/// Neither degradation is an error; only an unopenable container is.
pub fn extract_lines(path: &Path) -> RichTextResult<Vec<String>> {
    let content = read_document_xml(path)?;

    match parse_document(&content) {
        Ok(doc) => Ok(linearize(&doc)),
        Err(e) => {
            tracing::warn!(path = %path.display(), "styled extraction failed, using plain text: {e}");
            match plain_text_lines(&content) {
                Ok(lines) => Ok(lines),
                Err(e) => {
                    tracing::warn!(path = %path.display(), "plain extraction failed, treating as empty: {e}");
                    Ok(Vec::new())
                }
            }
        }
    }
}
