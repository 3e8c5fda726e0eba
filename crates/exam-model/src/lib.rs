//! Data model for exam building.
//!
//! Questions enter as [`QuestionDraft`]s, the unvalidated form fields, and
//! become [`QuestionContent`] once [`QuestionDraft::validate`] accepts them.
//! A [`Question`] pairs that content with the stable [`QuestionId`] handed out
//! by the question store.

pub mod draft;
pub mod enums;
pub mod error;
pub mod ids;
pub mod metadata;
pub mod question;

pub use draft::QuestionDraft;
pub use enums::{GradeLevel, OptionLabel, QuestionKind, Term};
pub use error::{ModelError, Result, ValidationError};
pub use ids::QuestionId;
pub use metadata::ExamMetadata;
pub use question::{
    Choices, ImageBlob, Question, QuestionBody, QuestionContent, SUPPORTED_IMAGE_EXTENSIONS,
};
