//! Exam document assembly.
//!
//! [`assemble`] turns exam metadata and a question snapshot into a `.docx`
//! package: optional logo and school name, the title block, professor,
//! class and date lines, then each question numbered from 1 with its
//! picture, options or answer lines. [`save_artifact`] writes the result.

pub mod artifact;
pub mod assemble;
pub mod error;
pub mod images;
pub mod options;

pub use artifact::{DOCX_MIME_TYPE, export_file_name, save_artifact};
pub use assemble::{AssembledExam, assemble, image_placeholder, rule_line};
pub use error::{AssemblyError, ImageEmbedError, ImageEmbedWarning, ImageSlot, Result};
pub use images::prepare_picture;
pub use options::{
    AnswerKey, AssemblyOptions, DEFAULT_ESSAY_LINES, DEFAULT_IMAGE_WIDTH_CM,
    DEFAULT_LOGO_WIDTH_CM, MAX_ESSAY_LINES, RULE_WIDTH,
};
