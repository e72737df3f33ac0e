//! Comparison formats.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// The format a comparison runs under.
///
/// Resolved exactly once per comparison (declared format first, then file
/// extension or content sniffing) and never mixed within one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    #[default]
    Text,
    Json,
    StyledDocument,
}

impl Format {
    /// Resolve a caller-declared format name.
    ///
    /// Unknown names resolve to [`Format::Text`]; an ambiguous declaration is
    /// not an error.
    pub fn from_declared(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Format::Json,
            "docx" | "styled-document" => Format::StyledDocument,
            _ => Format::Text,
        }
    }

    /// Derive a format from a file path's extension.
    pub fn from_extension(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => Self::from_declared(ext),
            None => Format::Text,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Format::Text => "text",
            Format::Json => "json",
            Format::StyledDocument => "styled-document",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_json() {
        assert_eq!(Format::from_declared("json"), Format::Json);
        assert_eq!(Format::from_declared("JSON"), Format::Json);
    }

    #[test]
    fn declared_styled_document() {
        assert_eq!(Format::from_declared("docx"), Format::StyledDocument);
        assert_eq!(Format::from_declared("styled-document"), Format::StyledDocument);
    }

    #[test]
    fn unknown_declared_falls_back_to_text() {
        assert_eq!(Format::from_declared("pdf"), Format::Text);
        assert_eq!(Format::from_declared(""), Format::Text);
    }

    #[test]
    fn extension_resolution() {
        assert_eq!(Format::from_extension(Path::new("a/config.json")), Format::Json);
        assert_eq!(Format::from_extension(Path::new("report.docx")), Format::StyledDocument);
        assert_eq!(Format::from_extension(Path::new("notes.txt")), Format::Text);
        assert_eq!(Format::from_extension(Path::new("README")), Format::Text);
    }

    #[test]
    fn display_names() {
        assert_eq!(Format::Text.to_string(), "text");
        assert_eq!(Format::Json.to_string(), "json");
        assert_eq!(Format::StyledDocument.to_string(), "styled-document");
    }
}
