//! Text-level helpers used by the read-aloud pipeline.
//!
//! - [`edit_distance`]: Levenshtein distance for near-duplicate line matching
//! - [`hyphenation`]: line-break dash detection and removal

pub mod edit_distance;
pub mod hyphenation;

pub use edit_distance::{edit_distance, within_distance};
pub use hyphenation::{
    ends_with_line_break_dash, is_line_break_dash, remove_embedded_breaks, strip_trailing_dash,
    LINE_BREAK_DASHES,
};
