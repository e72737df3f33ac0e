//! Languages the validator knows about.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A language with a syntax check available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Json,
    Yaml,
    Xml,
    Python,
    Java,
    JavaScript,
}

impl Language {
    /// Resolve a language from a declared name or file extension.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Language::Json),
            "yaml" | "yml" => Some(Language::Yaml),
            "xml" => Some(Language::Xml),
            "python" | "py" => Some(Language::Python),
            "java" => Some(Language::Java),
            "javascript" | "js" => Some(Language::JavaScript),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Language::Json => "json",
            Language::Yaml => "yaml",
            Language::Xml => "xml",
            Language::Python => "python",
            Language::Java => "java",
            Language::JavaScript => "javascript",
        };
        write!(f, "{s}")
    }
}
