//! Page layout input: positioned fragments and their grouping into lines.

pub mod fragment;
pub mod lines;

// Re-export main types
pub use fragment::{PageKey, TextFragment};
pub use lines::group_lines;
