//! Character filtering for document text.

use std::borrow::Cow;

/// Whether `ch` may appear in XML 1.0 character data.
pub fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Replaces every character XML 1.0 forbids with a space.
///
/// Text pasted from PDFs and spreadsheets often carries form feeds and
/// vertical tabs; a single one makes the whole package unreadable.
pub fn xml_safe(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(
            text.chars()
                .map(|ch| if is_xml_char(ch) { ch } else { ' ' })
                .collect(),
        )
    }
}
