//! Per-language checks.

use std::sync::OnceLock;

use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::language::Language;

/// One problem found in the content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxIssue {
    /// 1-based line, or 0 when the parser gave no position.
    pub line: usize,
    /// 1-based column, or 0 when the parser gave no position.
    pub column: usize,
    pub message: String,
}

/// Outcome of a validation: valid/invalid plus the issues found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    pub issues: Vec<SyntaxIssue>,
}

impl Validation {
    pub fn valid() -> Self {
        Self {
            valid: true,
            issues: Vec::new(),
        }
    }

    pub fn invalid(issues: Vec<SyntaxIssue>) -> Self {
        Self {
            valid: false,
            issues,
        }
    }
}

/// Validate content against a language's syntax check.
pub fn validate(content: &str, language: Language) -> Validation {
    match language {
        Language::Json => check_json(content),
        Language::Yaml => check_yaml(content),
        Language::Xml => check_xml(content),
        Language::Python => check_python(content),
        Language::Java => check_java(content),
        Language::JavaScript => check_javascript(content),
    }
}

/// Validate against a declared language name; unknown names are assumed
/// valid (no check exists for them).
pub fn validate_named(content: &str, name: &str) -> Validation {
    match Language::from_name(name) {
        Some(language) => validate(content, language),
        None => Validation::valid(),
    }
}

fn check_json(content: &str) -> Validation {
    match serde_json::from_str::<serde_json::Value>(content) {
        Ok(_) => Validation::valid(),
        Err(e) => Validation::invalid(vec![SyntaxIssue {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }]),
    }
}

fn check_yaml(content: &str) -> Validation {
    match serde_yaml::from_str::<serde_yaml::Value>(content) {
        Ok(_) => Validation::valid(),
        Err(e) => {
            let (line, column) = e
                .location()
                .map(|loc| (loc.line(), loc.column()))
                .unwrap_or((0, 0));
            Validation::invalid(vec![SyntaxIssue {
                line,
                column,
                message: e.to_string(),
            }])
        }
    }
}

fn check_xml(content: &str) -> Validation {
    let mut reader = Reader::from_str(content);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => return Validation::valid(),
            Ok(_) => {}
            Err(e) => {
                let offset = reader.buffer_position().min(content.len());
                let (line, column) = offset_to_position(content, offset);
                return Validation::invalid(vec![SyntaxIssue {
                    line,
                    column,
                    message: e.to_string(),
                }]);
            }
        }
        buf.clear();
    }
}

fn offset_to_position(content: &str, offset: usize) -> (usize, usize) {
    let before = &content[..offset];
    let line = before.matches('\n').count() + 1;
    let column = offset - before.rfind('\n').map(|i| i + 1).unwrap_or(0) + 1;
    (line, column)
}

/// Heuristic: Python block statements must end with a colon.
fn check_python(content: &str) -> Validation {
    static BLOCK: OnceLock<Regex> = OnceLock::new();
    let block = BLOCK.get_or_init(|| {
        Regex::new(r"^(def|class|if|elif|else|for|while|try|except|finally|with)\b")
            .expect("static pattern")
    });

    let mut issues = Vec::new();
    for (i, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.starts_with('#') {
            continue;
        }
        // Strip a trailing comment before checking the statement end.
        let statement = line.split('#').next().unwrap_or("").trim_end();
        if block.is_match(statement) && !statement.ends_with(':') && !statement.ends_with('\\') {
            issues.push(SyntaxIssue {
                line: i + 1,
                column: statement.len(),
                message: "Possible missing colon on block statement".to_string(),
            });
        }
    }

    if issues.is_empty() {
        Validation::valid()
    } else {
        Validation::invalid(issues)
    }
}

/// Heuristic: Java statements without a block opener should end with `;`.
fn check_java(content: &str) -> Validation {
    static KEYWORD: OnceLock<Regex> = OnceLock::new();
    let keyword = KEYWORD.get_or_init(|| {
        Regex::new(r"\b(class|interface|public|private|protected|void|int|String|if|for|while)\b")
            .expect("static pattern")
    });
    statement_scan(content, keyword, "Possible missing semicolon or brace")
}

/// Heuristic: JavaScript statements without a block opener should end with `;`.
fn check_javascript(content: &str) -> Validation {
    static KEYWORD: OnceLock<Regex> = OnceLock::new();
    let keyword = KEYWORD.get_or_init(|| {
        Regex::new(r"\b(var|let|const|function|if|for|while|return)\b").expect("static pattern")
    });
    statement_scan(content, keyword, "Possible missing semicolon")
}

fn statement_scan(content: &str, keyword: &Regex, message: &str) -> Validation {
    let mut issues = Vec::new();
    for (i, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.starts_with("//") || line.starts_with("/*") || line.contains("*/") {
            continue;
        }
        if keyword.is_match(line)
            && !line.ends_with(';')
            && !line.contains('{')
            && !line.ends_with('}')
        {
            issues.push(SyntaxIssue {
                line: i + 1,
                column: line.len(),
                message: message.to_string(),
            });
        }
    }

    if issues.is_empty() {
        Validation::valid()
    } else {
        Validation::invalid(issues)
    }
}
