//! Running header and footer removal.
//!
//! Page numbers, journal names and chapter titles repeat at the top or bottom of
//! every page. Read aloud, they interrupt the text once per page. This module
//! detects them by comparing the current page's lines with the lines of a few
//! recently processed pages:
//!
//! ```text
//! page 4:  "Journal of Things · 2021"   ←─ dist ≤ 3 ─→  page 5:  "Journal of Things · 2021"
//!          "Vol. 12, p. 4"              ←─ dist ≤ 3 ─→           "Vol. 12, p. 5"
//!          "...body..."                 ←─ dist > 3 ─→           "...other body..."   (stop)
//!          ...                                                    ...
//!          "4"                          ←─ dist ≤ 3 ─→           "5"
//! ```
//!
//! Matching is approximate (Levenshtein distance) so that changing page numbers
//! and extraction noise do not defeat detection. The history is owned by the
//! trimmer instance, so independent viewer sessions never see each other's pages.

use std::collections::VecDeque;

use crate::layout::PageKey;
use crate::pipeline::config::TrimmerConfig;
use crate::text::within_distance;

/// The line sequence of one previously processed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLines {
    /// Untrimmed lines of the page
    pub lines: Vec<String>,
    /// Identity of the page the lines came from
    pub page: PageKey,
}

/// Number of lines to drop from the start and end of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrimDecision {
    /// Leading lines to drop
    pub head: usize,
    /// Trailing lines to drop
    pub tail: usize,
}

impl TrimDecision {
    /// Create a decision.
    pub fn new(head: usize, tail: usize) -> Self {
        Self { head, tail }
    }

    /// Total number of lines the decision removes (before overlap).
    pub fn total(&self) -> usize {
        self.head + self.tail
    }

    /// Whether the decision removes nothing.
    pub fn is_empty(&self) -> bool {
        self.head == 0 && self.tail == 0
    }

    /// Apply the decision to a line list.
    ///
    /// Head and tail runs can overlap when two pages are nearly identical; in
    /// that case nothing is left.
    pub fn apply(&self, lines: &[String]) -> Vec<String> {
        if self.head + self.tail >= lines.len() {
            return Vec::new();
        }
        lines[self.head..lines.len() - self.tail].to_vec()
    }
}

/// Bounded, insertion-ordered history of recently processed pages.
///
/// Holds at most one record per page; when full, the oldest record is evicted.
#[derive(Debug, Clone)]
pub struct PageHistory {
    records: VecDeque<PageLines>,
    capacity: usize,
}

impl PageHistory {
    /// Create an empty history holding up to `capacity` pages.
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Maximum number of remembered pages.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of remembered pages.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no page has been remembered yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a record for `page` is present.
    pub fn contains(&self, page: PageKey) -> bool {
        self.records.iter().any(|record| record.page == page)
    }

    /// Remember a page, evicting the oldest record when over capacity.
    ///
    /// Returns `false` (and leaves the history untouched) if the page is
    /// already present.
    pub fn push(&mut self, record: PageLines) -> bool {
        if self.contains(record.page) {
            return false;
        }
        self.records.push_back(record);
        while self.records.len() > self.capacity {
            if let Some(evicted) = self.records.pop_front() {
                log::trace!("Evicted {} from header/footer history", evicted.page);
            }
        }
        true
    }

    /// Records from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &PageLines> {
        self.records.iter()
    }

    /// Page identities from oldest to newest.
    pub fn pages(&self) -> Vec<PageKey> {
        self.records.iter().map(|record| record.page).collect()
    }

    /// Forget every page.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

/// Strips lines that repeat near-identically at the start or end of pages.
#[derive(Debug, Clone)]
pub struct HeaderFooterTrimmer {
    config: TrimmerConfig,
    history: PageHistory,
}

impl Default for HeaderFooterTrimmer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderFooterTrimmer {
    /// Create a trimmer with the default policy.
    pub fn new() -> Self {
        Self::with_config(TrimmerConfig::default())
    }

    /// Create a trimmer with a custom policy.
    pub fn with_config(config: TrimmerConfig) -> Self {
        Self {
            history: PageHistory::new(config.history_capacity),
            config,
        }
    }

    /// The trimmer policy.
    pub fn config(&self) -> &TrimmerConfig {
        &self.config
    }

    /// The pages currently remembered.
    pub fn history(&self) -> &PageHistory {
        &self.history
    }

    /// Forget every remembered page.
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Decide how many lines to strip from `lines` without touching history.
    ///
    /// Each remembered page other than `page` yields a candidate: the count of
    /// matching lines from the front and from the back. Candidates matching
    /// nothing are ignored; of the rest, the one removing the most lines wins,
    /// and on a tie the older record is kept.
    pub fn decide(&self, lines: &[String], page: PageKey) -> Option<TrimDecision> {
        let max = self.config.max_line_distance;
        let mut best: Option<TrimDecision> = None;

        for record in self.history.iter().filter(|record| record.page != page) {
            let head = lines
                .iter()
                .zip(record.lines.iter())
                .take_while(|(current, seen)| within_distance(current, seen, max))
                .count();
            let tail = lines
                .iter()
                .rev()
                .zip(record.lines.iter().rev())
                .take_while(|(current, seen)| within_distance(current, seen, max))
                .count();

            let candidate = TrimDecision::new(head, tail);
            if candidate.is_empty() {
                continue;
            }
            if best.map_or(true, |b| candidate.total() > b.total()) {
                best = Some(candidate);
            }
        }

        best
    }

    /// Strip repeated header/footer lines from a page and remember the page.
    ///
    /// The untrimmed lines are recorded, once per page identity, so later pages
    /// are compared against what the page really contained.
    pub fn trim(&mut self, lines: Vec<String>, page: PageKey) -> Vec<String> {
        let decision = self.decide(&lines, page);

        let trimmed = match decision {
            Some(decision) => {
                log::debug!(
                    "Trimming {}: {} header line(s), {} footer line(s) of {}",
                    page,
                    decision.head,
                    decision.tail,
                    lines.len()
                );
                decision.apply(&lines)
            },
            None => lines.clone(),
        };

        if !self.history.contains(page) {
            self.history.push(PageLines { lines, page });
        }

        trimmed
    }
}
