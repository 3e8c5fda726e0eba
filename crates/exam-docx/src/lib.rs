//! WordprocessingML package support.
//!
//! Documents are built from a small block model: styled paragraphs made of
//! runs, and paragraphs holding one inline PNG picture. [`Document::to_bytes`]
//! renders the blocks with `docx-rs` on an A4 page with a default font and a
//! title style. All text passes through [`xml_safe`] on the way out.
//! [`read`] gives the plain-text view used to verify output.

pub mod document;
pub mod error;
pub mod picture;
pub mod read;
pub mod text;
mod writer;

pub use document::{
    Alignment, Block, Document, DocumentSettings, Paragraph, ParagraphStyle, Run,
};
pub use error::{DocxError, Result};
pub use picture::{EMU_PER_CM, EMU_PER_PIXEL, Picture};
pub use read::{PackageSummary, paragraph_texts, part_names, read_part, summarize};
pub use text::{is_xml_char, xml_safe};
