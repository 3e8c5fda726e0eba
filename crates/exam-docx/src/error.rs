//! Error types for DOCX package operations.

use thiserror::Error;

/// Errors that can occur when writing or reading a DOCX package.
#[derive(Debug, Error)]
pub enum DocxError {
    /// A document part could not be parsed.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The rendered document could not be packed.
    #[error("failed to pack document: {0}")]
    Pack(String),

    /// The ZIP container could not be read.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// I/O error while reading a part.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Part content was not valid UTF-8.
    #[error("invalid UTF-8 in document part: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// A required package part is absent.
    #[error("package part not found: {0}")]
    MissingPart(&'static str),

    /// Settings that cannot be expressed in WordprocessingML.
    #[error("invalid document settings: {0}")]
    InvalidSettings(String),
}

/// Result type alias for DOCX operations.
pub type Result<T> = std::result::Result<T, DocxError>;
