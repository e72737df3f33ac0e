//! Rich-text extractor for docdiff.
//!
//! Reads a zipped-XML styled-document container and linearizes its visible
//! text into newline-terminated lines annotated with paragraph style,
//! alignment, and run-level formatting, plus trailing summary lines for any
//! embedded image/chart references. The output feeds the generic line
//! differ, so style differences surface as ordinary line diffs.
//!
//! Extraction degrades gracefully: full styled extraction falls back to
//! plain paragraph text, and a document with nothing extractable yields an
//! empty line list. Only an unopenable container is an error.

mod container;
mod error;
mod linearize;
mod model;
mod parse;

pub use container::{extract_lines, read_document_xml};
pub use error::{RichTextError, RichTextResult};
pub use linearize::linearize;
pub use model::{Paragraph, Run, StyledDocument};
pub use parse::{parse_document, plain_text_lines};
