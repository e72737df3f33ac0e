//! Document model produced by the container parser.

/// A styled document: ordered paragraphs plus embedded object references.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledDocument {
    pub paragraphs: Vec<Paragraph>,
    /// Display names of inline pictures, in document order.
    pub images: Vec<String>,
    /// Display names of inline charts, in document order.
    pub charts: Vec<String>,
}

/// One paragraph: an optional named style, optional explicit alignment, and
/// an ordered list of text runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub style: Option<String>,
    pub alignment: Option<String>,
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// The paragraph's visible text with no formatting annotations.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A run of text with uniform formatting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// RGB hex string as written in the markup, e.g. `FF0000`.
    pub color: Option<String>,
    /// Font size in half-points, as written in the markup.
    pub size_half_points: Option<u32>,
    pub font: Option<String>,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Returns `true` if any formatting is set on this run.
    pub fn is_styled(&self) -> bool {
        self.bold
            || self.italic
            || self.underline
            || self.color.is_some()
            || self.size_half_points.is_some()
            || self.font.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_concatenates_runs() {
        let para = Paragraph {
            style: None,
            alignment: None,
            runs: vec![Run::plain("Hello, "), Run::plain("world")],
        };
        assert_eq!(para.plain_text(), "Hello, world");
    }

    #[test]
    fn plain_run_is_unstyled() {
        assert!(!Run::plain("x").is_styled());
    }

    #[test]
    fn any_attribute_marks_a_run_styled() {
        let run = Run {
            font: Some("Arial".into()),
            ..Run::plain("x")
        };
        assert!(run.is_styled());
    }
}
