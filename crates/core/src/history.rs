use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// At most this many recent checks are kept.
pub const HISTORY_CAP: usize = 5;

/// One completed check, keyed by the exact text the user entered.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub text: String,
    pub is_palindrome: bool,
    pub checked_at: SystemTime,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub palindromes: usize,
    pub non_palindromes: usize,
}

/// Bounded, deduplicated log of recent checks, newest first.
///
/// Re-checking text that is already present moves it to the front instead of
/// duplicating it; once full, the oldest entry is evicted.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed check. Callers only invoke this for input whose
    /// normalized form is non-empty.
    pub fn record(&mut self, text: &str, is_palindrome: bool) {
        self.entries.retain(|e| e.text != text);
        self.entries.insert(
            0,
            HistoryEntry {
                text: text.to_string(),
                is_palindrome,
                checked_at: SystemTime::now(),
            },
        );
        self.entries.truncate(HISTORY_CAP);
        debug!(target: "core", "history: recorded, len={}", self.entries.len());
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fold over the current entries; recomputed on demand, never stored.
    pub fn stats(&self) -> Stats {
        self.entries.iter().fold(Stats::default(), |mut acc, e| {
            if e.is_palindrome {
                acc.palindromes += 1;
            } else {
                acc.non_palindromes += 1;
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_entry_is_first() {
        let mut h = History::new();
        h.record("aba", true);
        h.record("abc", false);
        assert_eq!(h.entries()[0].text, "abc");
        assert_eq!(h.entries()[1].text, "aba");
    }

    #[test]
    fn capped_at_five_entries_oldest_evicted() {
        let mut h = History::new();
        for s in ["one", "two", "three", "four", "five", "six"] {
            h.record(s, false);
        }
        assert_eq!(h.len(), HISTORY_CAP);
        assert!(h.entries().iter().all(|e| e.text != "one"));
        assert_eq!(h.entries()[0].text, "six");
    }

    #[test]
    fn rechecking_moves_entry_to_front_without_duplicating() {
        let mut h = History::new();
        h.record("abc", false);
        h.record("aba", true);
        h.record("abc", false);
        assert_eq!(h.len(), 2);
        assert_eq!(h.entries()[0].text, "abc");
        assert!(!h.entries()[0].is_palindrome);
        assert_eq!(h.entries()[1].text, "aba");
        assert!(h.entries()[1].is_palindrome);
    }

    #[test]
    fn texts_stay_unique_under_churn() {
        let mut h = History::new();
        for _ in 0..10 {
            h.record("same", true);
            h.record("other", false);
        }
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn stats_partition_the_history() {
        let mut h = History::new();
        h.record("aba", true);
        h.record("abc", false);
        h.record("12321", true);
        let s = h.stats();
        assert_eq!(s.palindromes, 2);
        assert_eq!(s.non_palindromes, 1);
        assert_eq!(s.palindromes + s.non_palindromes, h.len());
    }

    #[test]
    fn stats_sum_matches_length_after_eviction() {
        let mut h = History::new();
        for (i, s) in ["a", "bb", "ccc", "dddd", "eeeee", "ffffff", "ggggggg"]
            .iter()
            .enumerate()
        {
            h.record(s, i % 2 == 0);
        }
        let s = h.stats();
        assert_eq!(s.palindromes + s.non_palindromes, h.len());
        assert_eq!(h.len(), HISTORY_CAP);
    }
}
