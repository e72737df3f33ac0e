//! Error types for the rich-text extractor.

/// Errors that can occur while opening a styled-document container.
///
/// Markup-level failures inside an opened container are not surfaced here;
/// they trigger the plain-text fallback instead.
#[derive(Debug, thiserror::Error)]
pub enum RichTextError {
    /// The container file could not be read.
    #[error("failed to open container: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a readable zip container.
    #[error("container error: {0}")]
    Container(#[from] zip::result::ZipError),

    /// The container has no main document part.
    #[error("container has no document part")]
    MissingDocumentPart,

    /// The document markup could not be parsed.
    #[error("document markup error: {0}")]
    Markup(#[from] quick_xml::Error),

    /// A malformed attribute in the document markup.
    #[error("document attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),
}

/// Convenience alias for extractor results.
pub type RichTextResult<T> = Result<T, RichTextError>;
