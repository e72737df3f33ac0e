//! Event-based parsing of the main document part.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::RichTextResult;
use crate::model::{Paragraph, Run, StyledDocument};

/// Parse the full styled-document model from the main document part markup.
pub fn parse_document(content: &str) -> RichTextResult<StyledDocument> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(false);

    let mut doc = StyledDocument::default();
    let mut paragraph: Option<Paragraph> = None;
    let mut run: Option<Run> = None;
    let mut in_para_props = false;
    let mut in_run_props = false;
    let mut in_text = false;
    let mut in_drawing = false;
    let mut drawing_name: Option<String> = None;

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) => {
                match e.name().as_ref() {
                    b"w:p" => paragraph = Some(Paragraph::default()),
                    b"w:pPr" => in_para_props = true,
                    b"w:r" => run = Some(Run::default()),
                    b"w:rPr" => in_run_props = true,
                    b"w:t" => in_text = true,
                    b"w:pStyle" if in_para_props => {
                        if let Some(p) = paragraph.as_mut() {
                            p.style = attr_value(&e, b"w:val")?;
                        }
                    }
                    b"w:jc" if in_para_props => {
                        if let Some(p) = paragraph.as_mut() {
                            p.alignment = attr_value(&e, b"w:val")?;
                        }
                    }
                    b"w:b" if in_run_props => {
                        if let Some(r) = run.as_mut() {
                            r.bold = flag_value(&e)?;
                        }
                    }
                    b"w:i" if in_run_props => {
                        if let Some(r) = run.as_mut() {
                            r.italic = flag_value(&e)?;
                        }
                    }
                    b"w:u" if in_run_props => {
                        if let Some(r) = run.as_mut() {
                            r.underline =
                                attr_value(&e, b"w:val")?.as_deref() != Some("none");
                        }
                    }
                    b"w:color" if in_run_props => {
                        if let Some(r) = run.as_mut() {
                            r.color = attr_value(&e, b"w:val")?.filter(|v| v != "auto");
                        }
                    }
                    b"w:sz" if in_run_props => {
                        if let Some(r) = run.as_mut() {
                            r.size_half_points =
                                attr_value(&e, b"w:val")?.and_then(|v| v.parse().ok());
                        }
                    }
                    b"w:rFonts" if in_run_props => {
                        if let Some(r) = run.as_mut() {
                            r.font = attr_value(&e, b"w:ascii")?;
                        }
                    }
                    b"w:drawing" => {
                        in_drawing = true;
                        drawing_name = None;
                    }
                    b"wp:docPr" if in_drawing => {
                        drawing_name = attr_value(&e, b"name")?;
                    }
                    b"a:graphicData" if in_drawing => {
                        let uri = attr_value(&e, b"uri")?.unwrap_or_default();
                        let name = drawing_name
                            .clone()
                            .unwrap_or_else(|| "unnamed".to_string());
                        if uri.contains("picture") {
                            doc.images.push(name);
                        } else if uri.contains("chart") {
                            doc.charts.push(name);
                        }
                    }
                    _ => {}
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    if let Some(p) = paragraph.take() {
                        doc.paragraphs.push(p);
                    }
                }
                b"w:pPr" => in_para_props = false,
                b"w:r" => {
                    if let Some(r) = run.take() {
                        if !r.text.is_empty() {
                            if let Some(p) = paragraph.as_mut() {
                                p.runs.push(r);
                            }
                        }
                    }
                }
                b"w:rPr" => in_run_props = false,
                b"w:t" => in_text = false,
                b"w:drawing" => {
                    in_drawing = false;
                    drawing_name = None;
                }
                _ => {}
            },
            Event::Text(t) if in_text => {
                if let Some(r) = run.as_mut() {
                    r.text.push_str(&t.unescape()?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(doc)
}

/// Minimal fallback extraction: raw paragraph text, no style annotation.
///
/// Collects run text per paragraph, skipping paragraphs that are blank
/// after trimming. Each produced line carries a trailing newline.
pub fn plain_text_lines(content: &str) -> RichTextResult<Vec<String>> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(false);

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => current.clear(),
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    if !current.trim().is_empty() {
                        lines.push(format!("{current}\n"));
                    }
                    current.clear();
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Text(t) if in_text => current.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(lines)
}

fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> RichTextResult<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            return Ok(Some(String::from_utf8_lossy(&attr.value).into_owned()));
        }
    }
    Ok(None)
}

/// A toggle property is on unless its `w:val` says otherwise.
fn flag_value(e: &BytesStart<'_>) -> RichTextResult<bool> {
    Ok(!matches!(
        attr_value(e, b"w:val")?.as_deref(),
        Some("0") | Some("false") | Some("none")
    ))
}
