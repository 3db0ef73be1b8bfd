//! Approximate string matching for near-duplicate line detection.
//!
//! Running headers and footers rarely extract byte-for-byte identical from page
//! to page: page numbers change, kerning splits a word differently, a ligature
//! decodes one way on page 3 and another on page 4. Lines are therefore
//! compared by Levenshtein distance rather than equality.
//!
//! # Performance
//!
//! The header/footer trimmer compares every leading and trailing line of a page
//! against up to three earlier pages on every page load, so this is the hot
//! path of the pipeline. The implementation:
//!
//! 1. Returns early on equal strings.
//! 2. Strips the common prefix and suffix, which for header lines is usually
//!    most of the string ("Chapter 3 · Page 1**2**").
//! 3. Runs the classic dynamic program over a single rolling row, so the cost
//!    is `O(m·n)` in the *remaining* lengths and `O(min(m, n))` in memory.

/// Compute the Levenshtein edit distance between two strings.
///
/// The distance is the minimum number of single-character insertions,
/// deletions and substitutions turning `a` into `b`. Characters are Unicode
/// scalar values, so "é" counts as one character regardless of its UTF-8 width.
///
/// # Examples
///
/// ```
/// use pdf_readaloud::text::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("", "abc"), 3);
/// assert_eq!(edit_distance("same", "same"), 0);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Iterate over the longer string, keep the row sized by the shorter one.
    let (mut short, mut long) = if a.len() <= b.len() {
        (&a[..], &b[..])
    } else {
        (&b[..], &a[..])
    };

    let prefix = short
        .iter()
        .zip(long.iter())
        .take_while(|(x, y)| x == y)
        .count();
    short = &short[prefix..];
    long = &long[prefix..];

    let suffix = short
        .iter()
        .rev()
        .zip(long.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    short = &short[..short.len() - suffix];
    long = &long[..long.len() - suffix];

    if short.is_empty() {
        return long.len();
    }

    // row[i] = distance between short[..i] and the processed prefix of long
    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (j, &lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = j + 1;

        for (i, &sc) in short.iter().enumerate() {
            let above = row[i + 1];
            let substitute = if sc == lc { diagonal } else { diagonal + 1 };
            row[i + 1] = substitute.min(above + 1).min(row[i] + 1);
            diagonal = above;
        }
    }

    row[short.len()]
}

/// Check whether two strings are within `max_distance` edits of each other.
///
/// Equivalent to `edit_distance(a, b) <= max_distance`, but skips the dynamic
/// program when the length difference alone already exceeds the bound.
pub fn within_distance(a: &str, b: &str, max_distance: usize) -> bool {
    if a == b {
        return true;
    }

    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a.abs_diff(len_b) > max_distance {
        return false;
    }

    edit_distance(a, b) <= max_distance
}
