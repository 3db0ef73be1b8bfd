//! Citation marker removal.
//!
//! Numeric reference markers such as `[12]`, `[3,4]` or `[5–7]` are noise when
//! read aloud. This module strips them, together with the whitespace preceding
//! them, from finished paragraphs. Brackets holding anything other than digits,
//! commas and dashes (`[sic]`, `[Smith 2020]`, `[a]`) are left alone.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Characters allowed between the brackets of a citation marker.
///
/// ASCII digits are matched separately; these are the separators:
/// comma, EN DASH (U+2013) and HYPHEN-MINUS.
pub const CITATION_SEPARATORS: [char; 3] = [',', '\u{2013}', '-'];

/// Check whether a character may appear inside a citation marker.
#[inline]
pub fn is_citation_char(c: char) -> bool {
    c.is_ascii_digit() || CITATION_SEPARATORS.contains(&c)
}

static CITATION_MARKER_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn get_citation_marker_regex() -> Option<&'static Regex> {
    CITATION_MARKER_REGEX
        .get_or_init(|| {
            // Optional leading whitespace, then [digits , – -]
            Regex::new(r"\s*\[[0-9,\x{2013}\-]+\]").ok()
        })
        .as_ref()
}

/// Remove citation markers from a single paragraph.
///
/// Text without markers is returned borrowed.
///
/// # Examples
///
/// ```
/// use pdf_readaloud::pipeline::text_processing::strip_citation_markers;
///
/// assert_eq!(strip_citation_markers("Some claim [12]."), "Some claim.");
/// assert_eq!(strip_citation_markers("See [3,4] and [5–7]"), "See and");
/// assert_eq!(strip_citation_markers("He said [sic] so"), "He said [sic] so");
/// ```
pub fn strip_citation_markers(text: &str) -> Cow<'_, str> {
    match get_citation_marker_regex() {
        Some(regex) => regex.replace_all(text, ""),
        None => Cow::Borrowed(text),
    }
}

/// Remove citation markers from every paragraph.
///
/// Paragraphs are kept even if nothing remains of them.
pub fn strip_annotations(paragraphs: Vec<String>) -> Vec<String> {
    paragraphs
        .into_iter()
        .map(|paragraph| {
            let stripped = match strip_citation_markers(&paragraph) {
                Cow::Owned(stripped) => Some(stripped),
                Cow::Borrowed(_) => None,
            };
            stripped.unwrap_or(paragraph)
        })
        .collect()
}
