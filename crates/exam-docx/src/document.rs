//! In-memory document model.
//!
//! A [`Document`] is an ordered list of blocks (text paragraphs and picture
//! paragraphs) plus the [`DocumentSettings`] that become the package's
//! default style. Nothing is rendered until [`Document::to_bytes`] is called.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::picture::Picture;
use crate::writer;

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Paragraph styles defined in the package's style part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphStyle {
    #[default]
    Normal,
    Title,
}

impl ParagraphStyle {
    pub const fn style_id(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Title => "Title",
        }
    }
}

/// A run of uniformly formatted text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    /// Font size override in points.
    pub size_pt: Option<f32>,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    #[must_use]
    pub fn size(mut self, points: f32) -> Self {
        self.size_pt = Some(points);
        self
    }
}

/// A text paragraph.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub alignment: Option<Alignment>,
    pub style: ParagraphStyle,
    /// Keep this paragraph on the same page as the next one.
    pub keep_next: bool,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paragraph holding a single plain run.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new().run(Run::new(text))
    }

    #[must_use]
    pub fn run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    #[must_use]
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    #[must_use]
    pub fn style(mut self, style: ParagraphStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn keep_with_next(mut self) -> Self {
        self.keep_next = true;
        self
    }

    /// Concatenated text of all runs.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// Block-level content in body order.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    /// A paragraph holding one inline picture.
    Picture {
        picture: Picture,
        alignment: Alignment,
    },
}

/// Package-wide formatting and core properties.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSettings {
    pub font_family: String,
    pub font_size_pt: f32,
    /// Creation timestamp; the time of serialization when unset.
    pub created: Option<DateTime<Utc>>,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size_pt: 12.0,
            created: None,
        }
    }
}

impl DocumentSettings {
    #[must_use]
    pub fn with_font(mut self, family: impl Into<String>, size_pt: f32) -> Self {
        self.font_family = family.into();
        self.font_size_pt = size_pt;
        self
    }

    #[must_use]
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }
}

/// A document under construction.
#[derive(Debug, Clone, Default)]
pub struct Document {
    settings: DocumentSettings,
    blocks: Vec<Block>,
}

impl Document {
    pub fn new(settings: DocumentSettings) -> Self {
        Self {
            settings,
            blocks: Vec::new(),
        }
    }

    pub fn settings(&self) -> &DocumentSettings {
        &self.settings
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of picture blocks.
    pub fn picture_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|block| matches!(block, Block::Picture { .. }))
            .count()
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.blocks.push(Block::Paragraph(paragraph));
        self
    }

    /// Appends a plain, left-aligned paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.add_paragraph(Paragraph::text(text))
    }

    /// Appends an empty paragraph.
    pub fn add_blank(&mut self) -> &mut Self {
        self.add_paragraph(Paragraph::new())
    }

    /// Appends a paragraph holding `picture`.
    pub fn add_picture(&mut self, picture: Picture, alignment: Alignment) -> &mut Self {
        self.blocks.push(Block::Picture { picture, alignment });
        self
    }

    /// Renders the document as a `.docx` package.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        writer::write_package(self)
    }
}
