//! Property tests for the approximate string matcher.

use pdf_readaloud::text::{edit_distance, within_distance};
use proptest::prelude::*;

/// Reference implementation: full matrix, no prefix/suffix stripping.
fn reference_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut matrix = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        matrix[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }
    matrix[a.len()][b.len()]
}

proptest! {
    #[test]
    fn prop_identity(s in "\\PC{0,40}") {
        prop_assert_eq!(edit_distance(&s, &s), 0);
    }

    #[test]
    fn prop_empty_is_length(s in "\\PC{0,40}") {
        prop_assert_eq!(edit_distance("", &s), s.chars().count());
        prop_assert_eq!(edit_distance(&s, ""), s.chars().count());
    }

    #[test]
    fn prop_symmetric(a in "[a-e ]{0,20}", b in "[a-e ]{0,20}") {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn prop_matches_reference(a in "[a-dé–]{0,16}", b in "[a-dé–]{0,16}") {
        prop_assert_eq!(edit_distance(&a, &b), reference_distance(&a, &b));
    }

    #[test]
    fn prop_zero_only_for_equal(a in "[ab]{0,8}", b in "[ab]{0,8}") {
        prop_assert_eq!(edit_distance(&a, &b) == 0, a == b);
    }

    #[test]
    fn prop_bounded_by_longer_length(a in "\\PC{0,30}", b in "\\PC{0,30}") {
        let longer = a.chars().count().max(b.chars().count());
        let diff = a.chars().count().abs_diff(b.chars().count());
        let d = edit_distance(&a, &b);
        prop_assert!(d <= longer);
        prop_assert!(d >= diff);
    }

    #[test]
    fn prop_within_distance_agrees(a in "[a-c]{0,10}", b in "[a-c]{0,10}", max in 0usize..6) {
        prop_assert_eq!(within_distance(&a, &b, max), edit_distance(&a, &b) <= max);
    }
}
