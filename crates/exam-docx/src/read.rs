//! Read-back of generated packages.
//!
//! Only what is needed to verify and summarize a package is supported:
//! part listing, the plain text of each body paragraph, and a count of
//! inline drawings.

use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{DocxError, Result};

/// Main document part.
pub const PART_DOCUMENT: &str = "word/document.xml";

/// Core properties part.
pub const PART_CORE: &str = "docProps/core.xml";

/// Plain-text view of a package.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageSummary {
    /// Text of each body paragraph in order; breaks appear as `\n`.
    pub paragraphs: Vec<String>,
    /// Number of inline drawings in the body.
    pub pictures: usize,
    /// Names of the parts under `word/media/`.
    pub media: Vec<String>,
    /// Non-blank `dc:title` from the core properties, if any.
    pub title: Option<String>,
}

fn open(bytes: &[u8]) -> Result<ZipArchive<Cursor<&[u8]>>> {
    Ok(ZipArchive::new(Cursor::new(bytes))?)
}

/// Names of all parts in the package, in archive order.
pub fn part_names(bytes: &[u8]) -> Result<Vec<String>> {
    let archive = open(bytes)?;
    Ok(archive.file_names().map(str::to_string).collect())
}

/// Raw content of one part.
pub fn read_part(bytes: &[u8], name: &'static str) -> Result<Vec<u8>> {
    let mut archive = open(bytes)?;
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Err(DocxError::MissingPart(name)),
        Err(error) => return Err(error.into()),
    };
    let mut content = Vec::new();
    file.read_to_end(&mut content)?;
    Ok(content)
}

/// Text of each paragraph in `word/document.xml`.
pub fn paragraph_texts(bytes: &[u8]) -> Result<Vec<String>> {
    let document = read_part(bytes, PART_DOCUMENT)?;
    let (paragraphs, _) = scan_body(std::str::from_utf8(&document)?)?;
    Ok(paragraphs)
}

/// Summarizes a package for display.
pub fn summarize(bytes: &[u8]) -> Result<PackageSummary> {
    let document = read_part(bytes, PART_DOCUMENT)?;
    let (paragraphs, pictures) = scan_body(std::str::from_utf8(&document)?)?;

    let mut media: Vec<String> = part_names(bytes)?
        .into_iter()
        .filter(|name| name.starts_with("word/media/"))
        .collect();
    media.sort();

    let title = match read_part(bytes, PART_CORE) {
        Ok(core) => element_text(std::str::from_utf8(&core)?, b"dc:title")?
            .filter(|title| !title.trim().is_empty()),
        Err(DocxError::MissingPart(_)) => None,
        Err(error) => return Err(error),
    };

    Ok(PackageSummary {
        paragraphs,
        pictures,
        media,
        title,
    })
}

fn scan_body(xml: &str) -> Result<(Vec<String>, usize)> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut in_text = false;
    let mut pictures = 0;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => current = Some(String::new()),
                b"w:t" => in_text = true,
                b"w:drawing" => pictures += 1,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(String::new()),
                b"w:br" | b"w:cr" => push_char(&mut current, '\n'),
                b"w:tab" => push_char(&mut current, '\t'),
                b"w:drawing" => pictures += 1,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    if let Some(text) = current.take() {
                        paragraphs.push(text);
                    }
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Text(t) if in_text => {
                if let Some(text) = current.as_mut() {
                    text.push_str(std::str::from_utf8(&t)?);
                }
            }
            Event::GeneralRef(r) if in_text => {
                if let Some(text) = current.as_mut() {
                    text.push(resolve_entity(std::str::from_utf8(&r)?));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok((paragraphs, pictures))
}

fn push_char(current: &mut Option<String>, ch: char) {
    if let Some(text) = current.as_mut() {
        text.push(ch);
    }
}

/// Text of the first element called `name`, entities resolved.
fn element_text(xml: &str, name: &[u8]) -> Result<Option<String>> {
    let mut reader = Reader::from_str(xml);
    let mut found: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == name => found = Some(String::new()),
            Event::Text(t) => {
                if let Some(text) = found.as_mut() {
                    text.push_str(std::str::from_utf8(&t)?);
                }
            }
            Event::GeneralRef(r) => {
                if let Some(text) = found.as_mut() {
                    text.push(resolve_entity(std::str::from_utf8(&r)?));
                }
            }
            Event::End(e) if e.name().as_ref() == name => return Ok(found),
            Event::Eof => return Ok(found),
            _ => {}
        }
    }
}

/// Resolves a predefined or numeric character reference.
///
/// Unknown references become U+FFFD.
fn resolve_entity(name: &str) -> char {
    match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x").or(name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()
            } else if let Some(decimal) = name.strip_prefix('#') {
                decimal.parse().ok()
            } else {
                None
            };
            code.and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        }
    }
}
