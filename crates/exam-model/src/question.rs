//! Validated question records.

use std::fmt;
use std::path::Path;

use crate::enums::{OptionLabel, QuestionKind};
use crate::error::ValidationError;
use crate::ids::QuestionId;

/// File extensions accepted for uploaded pictures.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Raw picture bytes as uploaded, with the original file name when known.
///
/// The bytes are not decoded here; a blob that turns out to be unreadable is
/// only detected when the document is assembled.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageBlob {
    pub bytes: Vec<u8>,
    pub filename: Option<String>,
}

impl ImageBlob {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            filename: None,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Name used in messages and placeholders.
    pub fn display_name(&self) -> &str {
        self.filename.as_deref().unwrap_or("sem nome")
    }

    /// Lowercased extension of the attached file name, if any.
    pub fn extension(&self) -> Option<String> {
        self.filename
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
    }

    /// True when the file name carries one of [`SUPPORTED_IMAGE_EXTENSIONS`].
    pub fn has_supported_extension(&self) -> bool {
        self.extension()
            .is_some_and(|ext| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()))
    }
}

// Blobs can be megabytes; print the size instead of the bytes.
impl fmt::Debug for ImageBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageBlob")
            .field("len", &self.bytes.len())
            .field("filename", &self.filename)
            .finish()
    }
}

/// The four option texts of a multiple-choice question, indexed by label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choices([String; 4]);

impl Choices {
    /// Builds an option set, trimming every text.
    ///
    /// Fails with [`ValidationError::MissingOptions`] listing every label
    /// whose text is empty after trimming.
    pub fn new(options: [&str; 4]) -> Result<Self, ValidationError> {
        let trimmed = options.map(|text| text.trim().to_string());
        let missing: Vec<OptionLabel> = OptionLabel::ALL
            .into_iter()
            .filter(|label| trimmed[label.index()].is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingOptions { labels: missing });
        }
        Ok(Self(trimmed))
    }

    pub fn get(&self, label: OptionLabel) -> &str {
        &self.0[label.index()]
    }

    /// Options paired with their labels, in A..D order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionLabel, &str)> {
        OptionLabel::ALL
            .into_iter()
            .map(move |label| (label, self.get(label)))
    }
}

/// Variant-specific part of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionBody {
    Essay,
    MultipleChoice {
        options: Choices,
        correct_answer: Option<OptionLabel>,
    },
}

impl QuestionBody {
    pub fn kind(&self) -> QuestionKind {
        match self {
            QuestionBody::Essay => QuestionKind::Essay,
            QuestionBody::MultipleChoice { .. } => QuestionKind::MultipleChoice,
        }
    }
}

/// Everything a question holds except its identity.
///
/// Only produced by validation ([`crate::QuestionDraft::validate`]), so a
/// value of this type always satisfies the question invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionContent {
    text: String,
    body: QuestionBody,
    image: Option<ImageBlob>,
}

impl QuestionContent {
    pub(crate) fn new(text: String, body: QuestionBody, image: Option<ImageBlob>) -> Self {
        Self { text, body, image }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn body(&self) -> &QuestionBody {
        &self.body
    }

    pub fn image(&self) -> Option<&ImageBlob> {
        self.image.as_ref()
    }
}

/// A validated question owned by a question store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    content: QuestionContent,
}

impl Question {
    pub fn new(id: QuestionId, content: QuestionContent) -> Self {
        Self { id, content }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn text(&self) -> &str {
        self.content.text()
    }

    pub fn body(&self) -> &QuestionBody {
        self.content.body()
    }

    pub fn kind(&self) -> QuestionKind {
        self.content.body().kind()
    }

    pub fn image(&self) -> Option<&ImageBlob> {
        self.content.image()
    }

    pub fn content(&self) -> &QuestionContent {
        &self.content
    }

    /// Swaps in new content, keeping the identifier. Returns the old content.
    pub fn replace_content(&mut self, content: QuestionContent) -> QuestionContent {
        std::mem::replace(&mut self.content, content)
    }
}
