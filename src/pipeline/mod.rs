//! Read-aloud text pipeline.
//!
//! Turns the positioned text of one rendered page into speakable paragraphs:
//!
//! ```text
//! TextFragment[] (renderer output, layout order)
//!     ↓
//! [group_lines] (split on baseline changes)
//!     ↓
//! lines
//!     ↓
//! [HeaderFooterTrimmer] (drop lines repeated on recent pages)
//!     ↓
//! trimmed lines
//!     ↓
//! [reflow_paragraphs] (hyphen joins, terminators, blank lines)
//!     ↓
//! paragraphs
//!     ↓
//! [strip_annotations] (remove [12]-style markers)
//!     ↓
//! Vec<String>
//! ```
//!
//! Every stage is synchronous and infallible. The only state is the trimmer's
//! page history, owned by the pipeline instance; one pipeline serves one
//! document session.

pub mod config;
pub mod header_footer;
pub mod text_processing;

// Re-export main types
pub use config::{LogLevel, ReadAloudConfig, TrimmerConfig, HISTORY_CAPACITY, MAX_LINE_DISTANCE};
pub use header_footer::{HeaderFooterTrimmer, PageHistory, PageLines, TrimDecision};
pub use text_processing::{reflow_paragraphs, strip_annotations, strip_citation_markers};

use crate::error::Result;
use crate::layout::{group_lines, PageKey, TextFragment};

/// The read-aloud pipeline - orchestrates the full flow for one session.
#[derive(Debug, Clone)]
pub struct ReadAloudPipeline {
    config: ReadAloudConfig,
    trimmer: HeaderFooterTrimmer,
}

impl ReadAloudPipeline {
    /// Create a new pipeline with default configuration.
    pub fn new() -> Self {
        Self {
            trimmer: HeaderFooterTrimmer::new(),
            config: ReadAloudConfig::default(),
        }
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: ReadAloudConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            trimmer: HeaderFooterTrimmer::with_config(config.trimmer),
            config,
        })
    }

    /// Extract speakable paragraphs from one page.
    ///
    /// `page` identifies the page for header/footer history. `quiet` marks a
    /// background request (prefetching ahead of the reader); it does not change
    /// the result, and navigation is left to the caller.
    pub fn extract_page_text(
        &mut self,
        fragments: &[TextFragment],
        page: PageKey,
        quiet: bool,
    ) -> Vec<String> {
        let lines = group_lines(fragments);
        log::debug!(
            "Extracting {}{}: {} fragments, {} lines",
            page,
            if quiet { " (quiet)" } else { "" },
            fragments.len(),
            lines.len()
        );

        let lines = if self.config.trim_header_footer {
            self.trimmer.trim(lines, page)
        } else {
            lines
        };

        let paragraphs = if self.config.reflow_paragraphs {
            reflow_paragraphs(&lines)
        } else {
            lines.into_iter().filter(|line| !line.is_empty()).collect()
        };

        if self.config.strip_annotations {
            strip_annotations(paragraphs)
        } else {
            paragraphs
        }
    }

    /// Forget all remembered pages (e.g. when a new document is opened).
    pub fn reset(&mut self) {
        self.trimmer.clear();
    }

    /// The header/footer trimmer and its history.
    pub fn trimmer(&self) -> &HeaderFooterTrimmer {
        &self.trimmer
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ReadAloudConfig {
        &self.config
    }
}

impl Default for ReadAloudPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize paragraphs as a JSON array of strings.
pub fn paragraphs_to_json(paragraphs: &[String]) -> Result<String> {
    Ok(serde_json::to_string(paragraphs)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(lines: &[&str]) -> Vec<TextFragment> {
        lines
            .iter()
            .enumerate()
            .map(|(i, text)| TextFragment::new(*text, 72.0, 700.0 - i as f32 * 14.0))
            .collect()
    }

    #[test]
    fn test_single_page() {
        let mut pipeline = ReadAloudPipeline::new();
        let out = pipeline.extract_page_text(
            &page(&["This is a sen-", "tence [4].", "", "Next para."]),
            PageKey(0),
            false,
        );
        assert_eq!(out, vec!["This is a sentence.", "Next para."]);
    }

    #[test]
    fn test_empty_fragments() {
        let mut pipeline = ReadAloudPipeline::new();
        assert!(pipeline.extract_page_text(&[], PageKey(0), true).is_empty());
    }

    #[test]
    fn test_stages_can_be_disabled() {
        let config = ReadAloudConfig::new()
            .with_reflow_paragraphs(false)
            .with_strip_annotations(false);
        let mut pipeline = ReadAloudPipeline::with_config(config).unwrap();
        let out = pipeline.extract_page_text(&page(&["one [1]", "", "two"]), PageKey(0), false);
        assert_eq!(out, vec!["one [1]", "two"]);
    }

    #[test]
    fn test_trimming_disabled_keeps_history_empty() {
        let config = ReadAloudConfig::new().with_trim_header_footer(false);
        let mut pipeline = ReadAloudPipeline::with_config(config).unwrap();
        pipeline.extract_page_text(&page(&["Header", "Body."]), PageKey(0), false);
        let out = pipeline.extract_page_text(&page(&["Header", "Other."]), PageKey(1), false);
        assert_eq!(out, vec!["Header Other."]);
        assert!(pipeline.trimmer().history().is_empty());
    }

    #[test]
    fn test_reset_forgets_history() {
        let mut pipeline = ReadAloudPipeline::new();
        pipeline.extract_page_text(&page(&["Header.", "Body."]), PageKey(0), false);
        pipeline.reset();
        let out = pipeline.extract_page_text(&page(&["Header.", "Other."]), PageKey(1), false);
        assert_eq!(out, vec!["Header.", "Other."]);
    }

    #[test]
    fn test_paragraphs_to_json() {
        let json = paragraphs_to_json(&["a \"b\"".to_string(), "c".to_string()]).unwrap();
        assert_eq!(json, r#"["a \"b\"","c"]"#);
    }
}
