//! Paragraph reflow for justified, line-wrapped text.
//!
//! Text in a PDF column is broken at the right margin, not at sentence or
//! paragraph boundaries. For speech, wrapped lines are joined back together:
//!
//! - a line ending in a dash continues the same word on the next line
//!   ("sen-" + "tence." → "sentence.")
//! - any other wrap becomes a single space
//! - a line ending in a sentence or clause terminator closes the paragraph
//! - a blank line always closes the paragraph

use crate::text::{remove_embedded_breaks, strip_trailing_dash};

/// Characters that mark a line as the end of a paragraph.
///
/// `. ! ? : )` plus straight and curly closing quotes (`" ' ’ ”`).
pub const PARAGRAPH_TERMINATORS: [char; 9] =
    ['.', '!', '?', ':', ')', '"', '\'', '\u{2019}', '\u{201D}'];

/// Check whether a character terminates a paragraph.
#[inline]
pub fn is_paragraph_terminator(c: char) -> bool {
    PARAGRAPH_TERMINATORS.contains(&c)
}

/// Check whether a line ends with a paragraph terminator.
pub fn ends_paragraph(line: &str) -> bool {
    line.chars().next_back().is_some_and(is_paragraph_terminator)
}

/// Merges lines into paragraphs.
#[derive(Debug, Clone, Default)]
pub struct ParagraphReflow {
    paragraphs: Vec<String>,
    current: String,
}

impl ParagraphReflow {
    /// Create an empty reflow buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line.
    pub fn push_line(&mut self, line: &str) {
        if line.is_empty() {
            self.flush();
            return;
        }

        if !self.current.is_empty() && !strip_trailing_dash(&mut self.current) {
            self.current.push(' ');
        }
        self.current.push_str(&remove_embedded_breaks(line));

        if ends_paragraph(line) {
            self.flush();
        }
    }

    /// Emit the buffered paragraph, if any.
    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.paragraphs.push(std::mem::take(&mut self.current));
        }
    }

    /// Finish reflow; unterminated trailing text is emitted as a paragraph.
    pub fn finish(mut self) -> Vec<String> {
        self.flush();
        self.paragraphs
    }
}

/// Merge trimmed lines into paragraphs.
///
/// Empty lines are paragraph breaks. No non-whitespace character is lost except
/// the single dash consumed by each hyphenated join.
///
/// # Examples
///
/// ```
/// use pdf_readaloud::pipeline::text_processing::reflow_paragraphs;
///
/// let lines = vec!["This is a sen-", "tence.", "", "Next para."];
/// assert_eq!(
///     reflow_paragraphs(&lines),
///     vec!["This is a sentence.", "Next para."]
/// );
/// ```
pub fn reflow_paragraphs<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut reflow = ParagraphReflow::new();
    for line in lines {
        reflow.push_line(line.as_ref());
    }
    reflow.finish()
}
