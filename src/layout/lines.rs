//! Grouping of positioned fragments into visual lines.
//!
//! The renderer already delivers fragments in reading order, so no sorting is
//! done here. A line ends wherever the baseline moves: every fragment whose
//! vertical coordinate differs from its predecessor's starts a new line, and
//! fragments on the same baseline are concatenated as-is. Renderers emit
//! inter-word spaces as part of the fragment text, so no separator is added.

use super::TextFragment;

/// Group fragments into trimmed line strings.
///
/// Fragment order within a line and line order within the page are preserved.
/// Each finished line is trimmed of surrounding whitespace; lines consisting only
/// of whitespace become empty strings, which later act as paragraph breaks.
///
/// # Examples
///
/// ```
/// use pdf_readaloud::layout::{group_lines, TextFragment};
///
/// let fragments = vec![
///     TextFragment::new("Hello", 0.0, 0.0),
///     TextFragment::new(" World", 30.0, 0.0),
///     TextFragment::new("Next", 0.0, 10.0),
/// ];
/// assert_eq!(group_lines(&fragments), vec!["Hello World", "Next"]);
/// ```
pub fn group_lines(fragments: &[TextFragment]) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut previous_y: Option<f32> = None;

    for fragment in fragments {
        // Exact comparison: fragments of one line share the same baseline value.
        let starts_line = previous_y.map_or(true, |y| y != fragment.y);
        if starts_line {
            lines.push(String::new());
        }
        if let Some(current) = lines.last_mut() {
            current.push_str(&fragment.text);
        }
        previous_y = Some(fragment.y);
    }

    log::trace!("Grouped {} fragments into {} lines", fragments.len(), lines.len());

    lines
        .into_iter()
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.len() == line.len() {
                line
            } else {
                trimmed.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(text: &str, y: f32) -> TextFragment {
        TextFragment::new(text, 0.0, y)
    }

    #[test]
    fn test_groups_by_vertical_coordinate() {
        let fragments = vec![frag("Hello", 0.0), frag(" World", 0.0), frag("Next", 10.0)];
        assert_eq!(group_lines(&fragments), vec!["Hello World", "Next"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_lines(&[]).is_empty());
    }

    #[test]
    fn test_lines_are_trimmed() {
        let fragments = vec![frag("  padded ", 5.0), frag("   ", 6.0), frag("end", 7.0)];
        assert_eq!(group_lines(&fragments), vec!["padded", "", "end"]);
    }

    #[test]
    fn test_returning_to_earlier_baseline_starts_new_line() {
        // Only the immediately preceding fragment matters.
        let fragments = vec![frag("a", 0.0), frag("b", 10.0), frag("c", 0.0)];
        assert_eq!(group_lines(&fragments), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_no_separator_inserted() {
        let fragments = vec![frag("sen", 1.0), frag("tence", 1.0)];
        assert_eq!(group_lines(&fragments), vec!["sentence"]);
    }

    #[test]
    fn test_first_fragment_always_starts_line() {
        let fragments = vec![frag("only", f32::NAN)];
        assert_eq!(group_lines(&fragments), vec!["only"]);
    }
}
