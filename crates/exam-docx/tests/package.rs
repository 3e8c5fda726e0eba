//! Tests for DOCX package writing and read-back.

use chrono::{TimeZone, Utc};
use insta::assert_snapshot;

use exam_docx::{
    Alignment, Document, DocumentSettings, DocxError, Paragraph, ParagraphStyle, Picture, Run,
    paragraph_texts, part_names, read_part, summarize,
};

fn settings() -> DocumentSettings {
    DocumentSettings::default().with_created(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap())
}

fn part_text(bytes: &[u8], name: &'static str) -> String {
    String::from_utf8(read_part(bytes, name).unwrap()).unwrap()
}

#[test]
fn package_holds_main_parts_and_png_media() {
    let mut document = Document::new(settings());
    document.add_text("Olá");
    document.add_picture(Picture::png(vec![1, 2, 3], 10, 10), Alignment::Center);
    document.add_picture(Picture::png(vec![4, 5], 10, 20), Alignment::Center);
    assert_eq!(document.picture_count(), 2);
    let bytes = document.to_bytes().unwrap();

    let names = part_names(&bytes).unwrap();
    for required in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "word/document.xml",
        "word/styles.xml",
        "word/_rels/document.xml.rels",
    ] {
        assert!(names.iter().any(|name| name == required), "{required} in {names:?}");
    }

    let summary = summarize(&bytes).unwrap();
    assert_eq!(summary.pictures, 2);
    assert_eq!(summary.media.len(), 2);
    assert!(summary.media.iter().all(|name| name.ends_with(".png")));
}

#[test]
fn paragraphs_read_back_in_order() {
    let mut document = Document::new(settings());
    document
        .add_paragraph(
            Paragraph::text("MATEMÁTICA - 1º BIMESTRE")
                .style(ParagraphStyle::Title)
                .align(Alignment::Center),
        )
        .add_text("Professor(a): Ana")
        .add_blank()
        .add_paragraph(
            Paragraph::new()
                .run(Run::new("1. ").bold())
                .run(Run::new("Quanto é 2+2?"))
                .keep_with_next(),
        )
        .add_text("linha um\nlinha dois");
    let bytes = document.to_bytes().unwrap();

    assert_snapshot!(paragraph_texts(&bytes).unwrap().join("\n---\n"), @r"
    MATEMÁTICA - 1º BIMESTRE
    ---
    Professor(a): Ana
    ---

    ---
    1. Quanto é 2+2?
    ---
    linha um
    linha dois
    ");
}

#[test]
fn markup_characters_survive_escaping() {
    let text = r#"Se a < b & b > c, então "a" ≠ 'c'"#;
    let mut document = Document::new(settings());
    document.add_text(text);
    let bytes = document.to_bytes().unwrap();

    assert_eq!(paragraph_texts(&bytes).unwrap(), vec![text]);
}

#[test]
fn leading_and_trailing_spaces_are_preserved() {
    let mut document = Document::new(settings());
    document.add_text("   recuado  ");
    let bytes = document.to_bytes().unwrap();

    assert!(part_text(&bytes, "word/document.xml").contains(r#"xml:space="preserve""#));
    assert_eq!(paragraph_texts(&bytes).unwrap(), vec!["   recuado  "]);
}

#[test]
fn control_characters_are_replaced_before_rendering() {
    let mut document = Document::new(settings().with_font("Arial\u{0B}", 12.0));
    document
        .add_text("Leia o texto\u{0C}e responda")
        .add_paragraph(Paragraph::new().run(Run::new("nulo\u{0}").bold()));
    let bytes = document.to_bytes().unwrap();

    for part in ["word/document.xml", "word/styles.xml"] {
        let xml = part_text(&bytes, part);
        if let Err(error) = roxmltree::Document::parse(&xml) {
            panic!("{part} is not well-formed: {error}");
        }
    }
    assert_eq!(
        paragraph_texts(&bytes).unwrap(),
        vec!["Leia o texto e responda", "nulo "]
    );
}

#[test]
fn default_style_carries_font_and_size() {
    let document = Document::new(settings().with_font("Calibri", 11.0));
    let bytes = document.to_bytes().unwrap();

    let styles = part_text(&bytes, "word/styles.xml");
    assert!(styles.contains(r#"w:ascii="Calibri""#));
    assert!(styles.contains(r#"w:val="22""#));
    assert!(styles.contains(r#"w:styleId="Title""#));

    let body = part_text(&bytes, "word/document.xml");
    assert!(body.contains(r#"w:w="11906""#));
    assert!(body.contains(r#"w:h="16838""#));
}

#[test]
fn core_properties_hold_the_timestamp() {
    let bytes = Document::new(settings()).to_bytes().unwrap();

    let core = part_text(&bytes, "docProps/core.xml");
    assert!(core.contains("2024-03-15T12:00:00Z"));

    let summary = summarize(&bytes).unwrap();
    assert!(summary.paragraphs.is_empty());
    assert_eq!(summary.pictures, 0);
}

#[test]
fn picture_extent_is_written_in_emu() {
    let picture = Picture::png(vec![0], 200, 100).fit_width_cm(4.0);
    let mut document = Document::new(settings());
    document.add_picture(picture, Alignment::Center);
    let bytes = document.to_bytes().unwrap();

    let body = part_text(&bytes, "word/document.xml");
    assert!(body.contains(r#"cx="1440000""#));
    assert!(body.contains(r#"cy="720000""#));

    let summary = summarize(&bytes).unwrap();
    assert_eq!(summary.pictures, 1);
    assert_eq!(summary.paragraphs, vec![""]);
}

#[test]
fn invalid_settings_are_rejected() {
    let error = Document::new(settings().with_font("  ", 12.0))
        .to_bytes()
        .unwrap_err();
    assert!(matches!(error, DocxError::InvalidSettings(_)));

    let error = Document::new(settings().with_font("Arial", 0.0))
        .to_bytes()
        .unwrap_err();
    assert!(matches!(error, DocxError::InvalidSettings(_)));

    let error = Document::new(settings().with_font("Arial", f32::NAN))
        .to_bytes()
        .unwrap_err();
    assert!(matches!(error, DocxError::InvalidSettings(_)));
}

#[test]
fn missing_part_is_reported() {
    let bytes = Document::new(settings()).to_bytes().unwrap();
    let error = read_part(&bytes, "word/vbaProject.bin").unwrap_err();
    assert!(matches!(error, DocxError::MissingPart("word/vbaProject.bin")));

    assert!(matches!(
        paragraph_texts(b"not a zip").unwrap_err(),
        DocxError::Zip(_)
    ));
}
