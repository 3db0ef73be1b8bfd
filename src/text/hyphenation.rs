//! Line-break hyphen handling for paragraph reflow.
//!
//! Justified PDF columns break long words at the right margin with a hyphen or
//! dash: "sen-" on one line, "tence." on the next. When lines are reflowed into
//! paragraphs for speech, that trailing dash is a typesetting artifact and must
//! disappear, with the two halves joined without a space.
//!
//! Compound words ("self-" + "regulation") are not told apart from broken
//! words: every dash at a line end is a joiner.

use std::borrow::Cow;

/// Characters treated as a line-break joiner when they end a line.
///
/// - U+002D HYPHEN-MINUS
/// - U+2013 EN DASH
/// - U+2014 EM DASH
pub const LINE_BREAK_DASHES: [char; 3] = ['-', '\u{2013}', '\u{2014}'];

/// Check whether a character is a line-break joiner.
#[inline]
pub fn is_line_break_dash(c: char) -> bool {
    LINE_BREAK_DASHES.contains(&c)
}

/// Check whether text ends with a line-break joiner.
///
/// No trimming is applied: `"word- "` does not end with a dash.
///
/// # Examples
///
/// ```
/// use pdf_readaloud::text::ends_with_line_break_dash;
///
/// assert!(ends_with_line_break_dash("sen-"));
/// assert!(ends_with_line_break_dash("1990\u{2013}"));
/// assert!(!ends_with_line_break_dash("sentence."));
/// ```
pub fn ends_with_line_break_dash(text: &str) -> bool {
    text.chars().next_back().is_some_and(is_line_break_dash)
}

/// Remove a single trailing line-break joiner in place.
///
/// Returns `true` if a character was removed.
pub fn strip_trailing_dash(text: &mut String) -> bool {
    if ends_with_line_break_dash(text) {
        text.pop();
        true
    } else {
        false
    }
}

/// Remove dash + line-break sequences embedded inside a single fragment.
///
/// Some producers emit a whole wrapped paragraph as one text run with literal
/// `"-\n"` or `"-\r\n"` inside it. Those sequences are dropped entirely so the
/// word halves join. Text without any such sequence is returned borrowed.
pub fn remove_embedded_breaks(text: &str) -> Cow<'_, str> {
    if !text.contains('\n') {
        return Cow::Borrowed(text);
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut changed = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if is_line_break_dash(c) {
            match (chars.get(i + 1), chars.get(i + 2)) {
                (Some('\n'), _) => {
                    i += 2;
                    changed = true;
                    continue;
                },
                (Some('\r'), Some('\n')) => {
                    i += 3;
                    changed = true;
                    continue;
                },
                _ => {},
            }
        }
        out.push(c);
        i += 1;
    }

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ends_with_line_break_dash() {
        assert!(ends_with_line_break_dash("Govern-"));
        assert!(ends_with_line_break_dash("pages 10\u{2013}"));
        assert!(ends_with_line_break_dash("thus\u{2014}"));
        assert!(!ends_with_line_break_dash("word- "));
        assert!(!ends_with_line_break_dash(""));
        assert!(!ends_with_line_break_dash("no dash"));
    }

    #[test]
    fn test_strip_trailing_dash() {
        let mut text = String::from("This is a sen-");
        assert!(strip_trailing_dash(&mut text));
        assert_eq!(text, "This is a sen");

        let mut em = String::from("and then\u{2014}");
        assert!(strip_trailing_dash(&mut em));
        assert_eq!(em, "and then");

        let mut plain = String::from("done.");
        assert!(!strip_trailing_dash(&mut plain));
        assert_eq!(plain, "done.");
    }

    #[test]
    fn test_strip_only_one_dash() {
        let mut text = String::from("dash--");
        assert!(strip_trailing_dash(&mut text));
        assert_eq!(text, "dash-");
    }

    #[test]
    fn test_remove_embedded_breaks() {
        assert_eq!(remove_embedded_breaks("Govern-\nment"), "Government");
        assert_eq!(remove_embedded_breaks("Govern-\r\nment"), "Government");
        assert_eq!(remove_embedded_breaks("a\u{2013}\nb\u{2014}\nc"), "abc");
    }

    #[test]
    fn test_remove_embedded_breaks_keeps_other_text() {
        assert!(matches!(remove_embedded_breaks("self-regulation"), Cow::Borrowed(_)));
        assert_eq!(remove_embedded_breaks("line\nbreak"), "line\nbreak");
        assert_eq!(remove_embedded_breaks("trailing-"), "trailing-");
    }
}
