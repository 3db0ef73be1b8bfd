//! Text post-processing stages that run after header/footer trimming.

pub mod citations;
pub mod paragraphs;

pub use citations::{strip_annotations, strip_citation_markers, CITATION_SEPARATORS};
pub use paragraphs::{reflow_paragraphs, ParagraphReflow, PARAGRAPH_TERMINATORS};
