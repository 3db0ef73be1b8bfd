//! Positioned text fragments and page identities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One positioned run of text as produced by page content extraction.
///
/// Fragments arrive in layout order (left to right, top to bottom) from the
/// renderer. Only the vertical coordinate takes part in line grouping; the
/// horizontal position is carried for callers that want it.
///
/// The JSON form accepts pdf.js text-content items directly: the text may be
/// given as `"str"` instead of `"text"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    /// The fragment's text, exactly as extracted
    #[serde(alias = "str")]
    pub text: String,
    /// Horizontal position of the fragment origin
    #[serde(default)]
    pub x: f32,
    /// Vertical position of the fragment baseline
    #[serde(default)]
    pub y: f32,
}

impl TextFragment {
    /// Create a new fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_readaloud::layout::TextFragment;
    ///
    /// let fragment = TextFragment::new("Hello", 72.0, 700.0);
    /// assert_eq!(fragment.text, "Hello");
    /// assert_eq!(fragment.y, 700.0);
    /// ```
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

/// Stable identity of a page within one document (0-based page index).
///
/// Used by the header/footer trimmer to avoid comparing a page with itself and
/// to keep at most one history entry per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageKey(pub usize);

impl PageKey {
    /// Page index (0-based).
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for PageKey {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {}", self.0)
    }
}
