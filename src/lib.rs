// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # PDF Read-Aloud
//!
//! Speakable paragraph extraction for rendered PDF pages.
//!
//! A PDF viewer hands over the positioned text fragments of a page; this crate
//! turns them into clean paragraphs suitable for a text-to-speech engine.
//!
//! ## Core Features
//!
//! - **Line Grouping**: fragments sharing a baseline become one line
//! - **Header/Footer Removal**: lines repeated near-identically on recent pages
//!   (page numbers, running titles) are dropped, tolerant to extraction noise
//! - **Paragraph Reflow**: wrapped and hyphenated lines are rejoined into prose
//! - **Citation Stripping**: `[12]`, `[3,4]`, `[5–7]` markers are removed
//!
//! ## Architecture
//!
//! ```text
//! PageSource ──fragments──▶ ReadAloudPipeline ──paragraphs──▶ TTS / UI
//!                           (group → trim → reflow → strip)
//! ```
//!
//! The pipeline is synchronous and holds no external resources. Its only state,
//! the header/footer page history, belongs to the pipeline instance, so each
//! open document gets its own.
//!
//! ## Quick Start
//!
//! ```
//! use pdf_readaloud::layout::{PageKey, TextFragment};
//! use pdf_readaloud::pipeline::ReadAloudPipeline;
//!
//! let mut pipeline = ReadAloudPipeline::new();
//! let fragments = vec![
//!     TextFragment::new("Reflowed text is easier to lis-", 72.0, 700.0),
//!     TextFragment::new("ten to [3].", 72.0, 686.0),
//! ];
//! let paragraphs = pipeline.extract_page_text(&fragments, PageKey(0), false);
//! assert_eq!(paragraphs, vec!["Reflowed text is easier to listen to."]);
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Page input and line grouping
pub mod layout;

// String matching and hyphenation helpers
pub mod text;

// Pipeline architecture for read-aloud extraction
pub mod pipeline;

// Sessions and page sources
pub mod document;

// Re-exports
pub use document::{MemoryPageSource, PageSource, ReadAloudSession};
pub use error::{Error, Result};
pub use layout::{PageKey, TextFragment};
pub use pipeline::{ReadAloudConfig, ReadAloudPipeline};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
