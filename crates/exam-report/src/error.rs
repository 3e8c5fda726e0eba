//! Error types for exam assembly and export.

use std::fmt;
use std::path::PathBuf;

use exam_docx::DocxError;
use exam_model::QuestionId;
use thiserror::Error;

/// Why a picture could not be embedded.
///
/// These never abort assembly; the picture is replaced by a placeholder line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageEmbedError {
    /// The blob holds no bytes.
    #[error("image is empty")]
    Empty,

    /// The bytes do not decode as any known picture format.
    #[error("could not decode image: {0}")]
    Decode(String),

    /// The bytes are a recognized format this build cannot embed.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
}

/// Where a failed picture was meant to appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    /// The school logo in the header.
    Logo,
    /// The picture attached to a question, with its 1-based number.
    Question { number: usize, id: QuestionId },
}

impl fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Logo => write!(f, "school logo"),
            Self::Question { number, .. } => write!(f, "question {number}"),
        }
    }
}

/// A non-fatal picture failure recorded during assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEmbedWarning {
    pub slot: ImageSlot,
    /// Original file name, or the placeholder name when unknown.
    pub filename: String,
    pub error: ImageEmbedError,
}

impl fmt::Display for ImageEmbedWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.slot, self.filename, self.error)
    }
}

/// Errors that abort assembly or export.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// The document package could not be produced.
    #[error("failed to build document package: {0}")]
    Package(#[from] DocxError),

    /// The artifact could not be written to disk.
    #[error("failed to {operation} {path}: {source}")]
    Save {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact file name would escape the target directory or is empty.
    #[error("invalid artifact file name: {0:?}")]
    InvalidFileName(String),
}

/// Result type alias for assembly operations.
pub type Result<T> = std::result::Result<T, AssemblyError>;
