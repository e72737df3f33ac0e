//! Rich-text linearization: styled paragraphs to an annotated line stream.

use crate::model::{Run, StyledDocument};

/// Linearize a styled document into newline-terminated lines.
///
/// Per paragraph: a `[StyleName]` prefix when the named style is not the
/// default, an `[align:value]` prefix when explicit alignment is set, then
/// each run either verbatim or wrapped as `[tag; tag]text[/style]`.
/// Paragraphs whose combined text is blank after trimming are skipped.
/// Embedded object references become trailing `[Images: ...]` /
/// `[Charts: ...]` summary lines so they are diffable content too.
pub fn linearize(doc: &StyledDocument) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in &doc.paragraphs {
        if paragraph.plain_text().trim().is_empty() {
            continue;
        }

        let mut line = String::new();
        if let Some(style) = &paragraph.style {
            if style != "Normal" {
                line.push_str(&format!("[{style}]"));
            }
        }
        if let Some(alignment) = &paragraph.alignment {
            line.push_str(&format!("[align:{alignment}]"));
        }
        for run in &paragraph.runs {
            let tags = style_tags(run);
            if tags.is_empty() {
                line.push_str(&run.text);
            } else {
                line.push_str(&format!("[{}]{}[/style]", tags.join("; "), run.text));
            }
        }
        line.push('\n');
        lines.push(line);
    }

    if !doc.images.is_empty() {
        lines.push(format!("[Images: {}]\n", doc.images.join(", ")));
    }
    if !doc.charts.is_empty() {
        lines.push(format!("[Charts: {}]\n", doc.charts.join(", ")));
    }

    lines
}

/// Active style tags for a run, in fixed order.
fn style_tags(run: &Run) -> Vec<String> {
    let mut tags = Vec::new();
    if run.bold {
        tags.push("bold".to_string());
    }
    if run.italic {
        tags.push("italic".to_string());
    }
    if run.underline {
        tags.push("underline".to_string());
    }
    if let Some(color) = &run.color {
        tags.push(format!("color:{color}"));
    }
    if let Some(half_points) = run.size_half_points {
        tags.push(format!("size:{}pt", half_points as f64 / 2.0));
    }
    if let Some(font) = &run.font {
        tags.push(format!("font:{font}"));
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;

    fn para(runs: Vec<Run>) -> Paragraph {
        Paragraph {
            style: None,
            alignment: None,
            runs,
        }
    }

    #[test]
    fn unstyled_run_is_emitted_verbatim() {
        let doc = StyledDocument {
            paragraphs: vec![para(vec![Run::plain("hello")])],
            ..Default::default()
        };
        assert_eq!(linearize(&doc), vec!["hello\n"]);
    }

    #[test]
    fn styled_run_is_wrapped() {
        let run = Run {
            bold: true,
            italic: true,
            ..Run::plain("hello")
        };
        let doc = StyledDocument {
            paragraphs: vec![para(vec![run])],
            ..Default::default()
        };
        assert_eq!(linearize(&doc), vec!["[bold; italic]hello[/style]\n"]);
    }

    #[test]
    fn tag_order_is_fixed() {
        let run = Run {
            bold: true,
            underline: true,
            color: Some("FF0000".into()),
            size_half_points: Some(24),
            font: Some("Arial".into()),
            ..Run::plain("x")
        };
        let doc = StyledDocument {
            paragraphs: vec![para(vec![run])],
            ..Default::default()
        };
        assert_eq!(
            linearize(&doc),
            vec!["[bold; underline; color:FF0000; size:12pt; font:Arial]x[/style]\n"]
        );
    }

    #[test]
    fn odd_half_point_sizes_keep_the_half() {
        let run = Run {
            size_half_points: Some(25),
            ..Run::plain("x")
        };
        let doc = StyledDocument {
            paragraphs: vec![para(vec![run])],
            ..Default::default()
        };
        assert_eq!(linearize(&doc), vec!["[size:12.5pt]x[/style]\n"]);
    }

    #[test]
    fn non_default_style_and_alignment_prefix_the_line() {
        let doc = StyledDocument {
            paragraphs: vec![Paragraph {
                style: Some("Heading1".into()),
                alignment: Some("center".into()),
                runs: vec![Run::plain("Title")],
            }],
            ..Default::default()
        };
        assert_eq!(linearize(&doc), vec!["[Heading1][align:center]Title\n"]);
    }

    #[test]
    fn default_style_gets_no_prefix() {
        let doc = StyledDocument {
            paragraphs: vec![Paragraph {
                style: Some("Normal".into()),
                alignment: None,
                runs: vec![Run::plain("body")],
            }],
            ..Default::default()
        };
        assert_eq!(linearize(&doc), vec!["body\n"]);
    }

    #[test]
    fn blank_paragraphs_are_skipped() {
        let doc = StyledDocument {
            paragraphs: vec![
                para(vec![Run::plain("   ")]),
                para(vec![]),
                para(vec![Run::plain("real")]),
            ],
            ..Default::default()
        };
        assert_eq!(linearize(&doc), vec!["real\n"]);
    }

    #[test]
    fn mixed_runs_concatenate_within_one_line() {
        let doc = StyledDocument {
            paragraphs: vec![para(vec![
                Run::plain("plain "),
                Run {
                    bold: true,
                    ..Run::plain("bold")
                },
            ])],
            ..Default::default()
        };
        assert_eq!(linearize(&doc), vec!["plain [bold]bold[/style]\n"]);
    }

    #[test]
    fn object_summaries_trail_the_text() {
        let doc = StyledDocument {
            paragraphs: vec![para(vec![Run::plain("text")])],
            images: vec!["Picture 1".into(), "Picture 2".into()],
            charts: vec!["Chart 1".into()],
        };
        assert_eq!(
            linearize(&doc),
            vec![
                "text\n",
                "[Images: Picture 1, Picture 2]\n",
                "[Charts: Chart 1]\n"
            ]
        );
    }

    #[test]
    fn empty_document_linearizes_to_nothing() {
        assert!(linearize(&StyledDocument::default()).is_empty());
    }
}
