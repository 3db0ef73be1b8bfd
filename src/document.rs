//! Document sessions: page sources and per-document read-aloud state.
//!
//! A [`PageSource`] stands in for the renderer: it knows how many pages the
//! open document has and yields positioned fragments for a page. A
//! [`ReadAloudSession`] pairs a source with one [`ReadAloudPipeline`] and the
//! reader's current page, answering "give me the text of page N" requests.
//!
//! # Example
//!
//! ```
//! use pdf_readaloud::document::{MemoryPageSource, ReadAloudSession};
//! use pdf_readaloud::layout::TextFragment;
//!
//! # fn main() -> pdf_readaloud::Result<()> {
//! let source = MemoryPageSource::new(vec![
//!     vec![TextFragment::new("First page.", 0.0, 0.0)],
//!     vec![TextFragment::new("Second page.", 0.0, 0.0)],
//! ]);
//! let mut session = ReadAloudSession::new(source);
//!
//! assert_eq!(session.get_texts(1, false)?, Some(vec!["Second page.".to_string()]));
//! assert_eq!(session.current_index(), 1);
//! assert_eq!(session.get_texts(2, false)?, None);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::error::Result;
use crate::layout::{PageKey, TextFragment};
use crate::pipeline::{ReadAloudConfig, ReadAloudPipeline};

/// Supplier of positioned page text.
///
/// Implemented by whatever renders the document. Pages are indexed
/// `0..page_count()`; sessions never ask for an index outside that range.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Positioned text fragments of a page, in layout order.
    fn page_fragments(&self, index: usize) -> Result<Vec<TextFragment>>;
}

/// A page source holding every page's fragments in memory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryPageSource {
    pages: Vec<Vec<TextFragment>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PagesDocument {
    Wrapped { pages: Vec<Vec<TextFragment>> },
    Bare(Vec<Vec<TextFragment>>),
}

impl MemoryPageSource {
    /// Create a source from per-page fragment lists.
    pub fn new(pages: Vec<Vec<TextFragment>>) -> Self {
        Self { pages }
    }

    /// Parse a JSON page document.
    ///
    /// Accepts either `{"pages": [[fragment, ...], ...]}` or a bare array of
    /// pages. Fragments may use pdf.js `"str"` keys.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: PagesDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(document))
    }

    /// Read a JSON page document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: PagesDocument = serde_json::from_reader(reader)?;
        Ok(Self::from_document(document))
    }

    fn from_document(document: PagesDocument) -> Self {
        let pages = match document {
            PagesDocument::Wrapped { pages } => pages,
            PagesDocument::Bare(pages) => pages,
        };
        log::debug!("Loaded page document with {} pages", pages.len());
        Self { pages }
    }

    /// Append a page.
    pub fn push_page(&mut self, fragments: Vec<TextFragment>) {
        self.pages.push(fragments);
    }
}

impl PageSource for MemoryPageSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_fragments(&self, index: usize) -> Result<Vec<TextFragment>> {
        Ok(self.pages.get(index).cloned().unwrap_or_default())
    }
}

/// Read-aloud state for one open document.
pub struct ReadAloudSession<S: PageSource> {
    source: S,
    pipeline: ReadAloudPipeline,
    current_index: usize,
}

impl<S: PageSource> ReadAloudSession<S> {
    /// Open a session with the default pipeline configuration.
    pub fn new(source: S) -> Self {
        Self {
            source,
            pipeline: ReadAloudPipeline::new(),
            current_index: 0,
        }
    }

    /// Open a session with a custom pipeline configuration.
    pub fn with_config(source: S, config: ReadAloudConfig) -> Result<Self> {
        Ok(Self {
            source,
            pipeline: ReadAloudPipeline::with_config(config)?,
            current_index: 0,
        })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.source.page_count()
    }

    /// The page the reader is on (0-based).
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Move the reader to a page. Out-of-range indices are ignored.
    pub fn go_to_page(&mut self, index: usize) {
        if index < self.page_count() {
            self.current_index = index;
        }
    }

    /// Speakable paragraphs of a page.
    ///
    /// Returns `Ok(None)` when `index` is past the last page; that is the
    /// normal end-of-document signal. Unless `quietly` is set, the reader is
    /// moved to the page first.
    pub fn get_texts(&mut self, index: usize, quietly: bool) -> Result<Option<Vec<String>>> {
        if index >= self.page_count() {
            log::debug!("Page {} requested past end of document ({} pages)", index, self.page_count());
            return Ok(None);
        }

        if !quietly {
            self.current_index = index;
        }

        let fragments = self.source.page_fragments(index)?;
        Ok(Some(self.pipeline.extract_page_text(
            &fragments,
            PageKey(index),
            quietly,
        )))
    }

    /// Forget header/footer history, e.g. after the document changed.
    pub fn reset_history(&mut self) {
        self.pipeline.reset();
    }

    /// The session's pipeline.
    pub fn pipeline(&self) -> &ReadAloudPipeline {
        &self.pipeline
    }

    /// The underlying page source.
    pub fn source(&self) -> &S {
        &self.source
    }
}
