//! Rendering of a [`Document`] through `docx-rs`.

use std::io::Cursor;

use chrono::{SecondsFormat, Utc};
use docx_rs::{AlignmentType, BreakType, Docx, PageMargin, Pic, RunFonts, Style, StyleType};
use tracing::debug;

use crate::document::{Alignment, Block, Document, DocumentSettings, Paragraph, ParagraphStyle, Run};
use crate::error::{DocxError, Result};
use crate::picture::Picture;
use crate::text::xml_safe;

/// A4 portrait, in twentieths of a point.
const PAGE_WIDTH_TWIPS: u32 = 11_906;
const PAGE_HEIGHT_TWIPS: u32 = 16_838;

/// 2 cm on every side.
const PAGE_MARGIN_TWIPS: i32 = 1_134;

const MAX_FONT_SIZE_PT: f32 = 1638.0;

/// How much larger the title style is than body text.
const TITLE_EXTRA_PT: f32 = 4.0;

/// Renders `document` and packs it into a `.docx` byte buffer.
pub(crate) fn write_package(document: &Document) -> Result<Vec<u8>> {
    let settings = document.settings();
    validate_settings(settings)?;

    let docx = document
        .blocks()
        .iter()
        .fold(base_docx(settings), |docx, block| {
            docx.add_paragraph(render_block(block))
        });

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|error| DocxError::Pack(error.to_string()))?;
    let bytes = buffer.into_inner();
    debug!(
        blocks = document.blocks().len(),
        pictures = document.picture_count(),
        bytes = bytes.len(),
        "wrote docx package"
    );
    Ok(bytes)
}

fn validate_settings(settings: &DocumentSettings) -> Result<()> {
    if xml_safe(&settings.font_family).trim().is_empty() {
        return Err(DocxError::InvalidSettings(
            "font family must not be empty".to_string(),
        ));
    }
    if !settings.font_size_pt.is_finite()
        || settings.font_size_pt < 1.0
        || settings.font_size_pt > MAX_FONT_SIZE_PT
    {
        return Err(DocxError::InvalidSettings(format!(
            "font size {} pt is outside 1..={MAX_FONT_SIZE_PT}",
            settings.font_size_pt
        )));
    }
    Ok(())
}

/// Default fonts, the title style, an A4 section and the timestamps.
fn base_docx(settings: &DocumentSettings) -> Docx {
    let font = xml_safe(settings.font_family.trim()).into_owned();
    let created = settings
        .created
        .unwrap_or_else(Utc::now)
        .to_rfc3339_opts(SecondsFormat::Secs, true);
    let title = Style::new(ParagraphStyle::Title.style_id(), StyleType::Paragraph)
        .name("Title")
        .bold()
        .size(half_points(settings.font_size_pt + TITLE_EXTRA_PT));
    let margin = PageMargin::new()
        .top(PAGE_MARGIN_TWIPS)
        .bottom(PAGE_MARGIN_TWIPS)
        .left(PAGE_MARGIN_TWIPS)
        .right(PAGE_MARGIN_TWIPS);

    Docx::new()
        .default_fonts(
            RunFonts::new()
                .ascii(font.as_str())
                .hi_ansi(font.as_str())
                .east_asia(font.as_str())
                .cs(font.as_str()),
        )
        .default_size(half_points(settings.font_size_pt))
        .add_style(title)
        .page_size(PAGE_WIDTH_TWIPS, PAGE_HEIGHT_TWIPS)
        .page_margin(margin)
        .created_at(&created)
        .updated_at(&created)
}

fn render_block(block: &Block) -> docx_rs::Paragraph {
    match block {
        Block::Paragraph(paragraph) => render_paragraph(paragraph),
        Block::Picture { picture, alignment } => docx_rs::Paragraph::new()
            .add_run(docx_rs::Run::new().add_image(render_picture(picture)))
            .align(alignment_type(*alignment)),
    }
}

fn render_paragraph(paragraph: &Paragraph) -> docx_rs::Paragraph {
    let mut rendered = docx_rs::Paragraph::new();
    if paragraph.style != ParagraphStyle::Normal {
        rendered = rendered.style(paragraph.style.style_id());
    }
    if let Some(alignment) = paragraph.alignment {
        rendered = rendered.align(alignment_type(alignment));
    }
    if paragraph.keep_next {
        rendered = rendered.keep_next(true);
    }
    paragraph
        .runs
        .iter()
        .fold(rendered, |rendered, run| rendered.add_run(render_run(run)))
}

/// Line feeds in the text become line breaks inside the run.
fn render_run(run: &Run) -> docx_rs::Run {
    let text = xml_safe(&run.text);
    let mut rendered = docx_rs::Run::new();
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            rendered = rendered.add_break(BreakType::TextWrapping);
        }
        let line = line.strip_suffix('\r').unwrap_or(line);
        if !line.is_empty() {
            rendered = rendered.add_text(line);
        }
    }
    if run.bold {
        rendered = rendered.bold();
    }
    if run.italic {
        rendered = rendered.italic();
    }
    if let Some(size) = run.size_pt {
        rendered = rendered.size(half_points(size));
    }
    rendered
}

fn render_picture(picture: &Picture) -> Pic {
    Pic::new_with_dimensions(picture.png.clone(), picture.pixel_width, picture.pixel_height)
        .size(picture.width_emu, picture.height_emu)
}

fn alignment_type(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
        Alignment::Justify => AlignmentType::Both,
    }
}

/// Point size to the half-point units used by `w:sz`.
fn half_points(points: f32) -> usize {
    (points.clamp(1.0, MAX_FONT_SIZE_PT) * 2.0).round() as usize
}
