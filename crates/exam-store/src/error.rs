//! Error types for question store operations.

use thiserror::Error;

use exam_model::{QuestionId, ValidationError};

/// Errors from question store mutations.
///
/// Every error leaves the question list exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The candidate question did not pass validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A position outside the current list was referenced.
    #[error("question index {index} is out of bounds (list has {len} questions)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The identifier does not name a question in this store.
    #[error("question {0} does not exist")]
    UnknownQuestion(QuestionId),

    /// The question is open for editing and cannot be removed.
    #[error("question {0} is being edited")]
    EditInProgress(QuestionId),

    /// Another question is already open for editing.
    #[error("question {open} is already being edited")]
    EditAlreadyOpen { open: QuestionId },

    /// No edit is open.
    #[error("no question is being edited")]
    NoEditInProgress,

    /// The ticket does not belong to the edit that is currently open.
    #[error("edit ticket for question {0} is no longer current")]
    StaleEdit(QuestionId),
}

impl StoreError {
    /// True for errors caused by the question content rather than its target.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
