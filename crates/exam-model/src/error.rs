use thiserror::Error;

use crate::enums::OptionLabel;

/// A candidate question was rejected before reaching the question list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("question text must not be empty")]
    EmptyText,
    #[error("multiple-choice options {} must not be empty", join_labels(.labels))]
    MissingOptions { labels: Vec<OptionLabel> },
}

/// Failures parsing the fixed vocabularies of the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown grade level: {0}")]
    UnknownGradeLevel(String),
    #[error("unknown term: {0}")]
    UnknownTerm(String),
    #[error("unknown option label: {0}")]
    UnknownOptionLabel(String),
    #[error("unknown question kind: {0}")]
    UnknownQuestionKind(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

fn join_labels(labels: &[OptionLabel]) -> String {
    labels
        .iter()
        .map(OptionLabel::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
