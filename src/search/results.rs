//! Search results and the bounded top-K accumulator.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::vocab::{Entry, Symbol};

/// A scored entry. Higher scores are better.
///
/// Either [`glyph`](Self::glyph) or [`image_url`](Self::image_url) is
/// `Some`, never both.
#[derive(Debug, Clone)]
pub struct SearchResult {
    entry: Arc<Entry>,
    score: i32,
    sort_key: String,
}

impl SearchResult {
    pub(crate) fn new(entry: Arc<Entry>, score: i32) -> Self {
        let sort_key = entry.description().to_lowercase();
        Self { entry, score, sort_key }
    }

    pub fn entry(&self) -> &Arc<Entry> {
        &self.entry
    }

    pub fn glyph(&self) -> Option<&str> {
        self.entry.glyph()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.entry.image_url()
    }

    /// Shortcodes usable between colons.
    pub fn aliases(&self) -> &[String] {
        self.entry.aliases()
    }

    pub fn description(&self) -> &str {
        self.entry.description()
    }

    pub fn category(&self) -> Option<&str> {
        self.entry.category()
    }

    pub fn tags(&self) -> &[String] {
        self.entry.tags()
    }

    pub fn score(&self) -> i32 {
        self.score
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultView<'a> {
    #[serde(flatten)]
    symbol: &'a Symbol,
    description: &'a str,
    aliases: &'a [String],
    score: i32,
}

impl Serialize for SearchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SearchResultView {
            symbol: self.entry.symbol(),
            description: self.entry.description(),
            aliases: self.entry.aliases(),
            score: self.score,
        }
        .serialize(serializer)
    }
}

/// Ranking order: score descending, then description ascending
/// (case-insensitive).
pub(crate) fn rank(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.sort_key.cmp(&b.sort_key))
}

/// Keeps at most `max` results, best first once full.
///
/// An entry is recorded once: later offers for the same entry are ignored,
/// so the first (highest-priority) pass decides its score.
pub(crate) struct TopK {
    results: Vec<SearchResult>,
    max: usize,
}

impl TopK {
    pub(crate) fn new(max: usize) -> Self {
        Self {
            results: Vec::new(),
            max,
        }
    }

    fn contains(&self, entry: &Arc<Entry>) -> bool {
        self.results.iter().any(|r| Arc::ptr_eq(&r.entry, entry))
    }

    pub(crate) fn offer(&mut self, entry: &Arc<Entry>, score: i32) {
        if self.max == 0 || self.contains(entry) {
            return;
        }
        let result = SearchResult::new(Arc::clone(entry), score);

        if self.results.len() < self.max {
            self.results.push(result);
            if self.results.len() == self.max {
                self.results.sort_by(rank);
            }
            return;
        }

        // Full and sorted: insert before the first result that does not
        // outrank the candidate, evicting the last one.
        let pos = self
            .results
            .partition_point(|r| rank(r, &result) == Ordering::Less);
        if pos < self.results.len() {
            self.results.pop();
            self.results.insert(pos, result);
        }
    }

    pub(crate) fn into_sorted(mut self) -> Vec<SearchResult> {
        self.results.sort_by(rank);
        self.results
    }
}
