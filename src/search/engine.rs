//! Ranked vocabulary search for autocomplete
//!
//! Four passes run in fixed priority order, each scoring one facet:
//!
//! 1. Name: every key (glyph or alias, colons trimmed)
//! 2. Description
//! 3. Tag: scored on the tag name, inherited by every entry in the group
//! 4. Category: same grouping rule as tags
//!
//! Each pass visits local entries first, then base entries that no local
//! entry overrides. The first pass to record an entry fixes its score.

use std::sync::Arc;

use tracing::debug;

use super::results::{SearchResult, TopK};
use super::score::{match_score, CATEGORY_BONUS, DESCRIPTION_BONUS, NAME_BONUS, TAG_BONUS};
use crate::vocab::{Entry, Facet, Registry};

/// Search the shared built-in registry.
pub fn search(query: &str, max: usize) -> Vec<SearchResult> {
    Registry::shared().search(query, max)
}

impl Registry {
    /// Return up to `max` entries matching `query`, best first.
    ///
    /// The query is the text between the colon and the cursor. An empty
    /// query or a zero `max` yields no results.
    pub fn search(&self, query: &str, max: usize) -> Vec<SearchResult> {
        if query.is_empty() || max == 0 {
            return Vec::new();
        }

        let query = query.to_lowercase();
        let mut top = TopK::new(max);

        self.search_names(&mut top, &query);
        self.search_descriptions(&mut top, &query);
        self.search_facet(&mut top, &query, TAG_BONUS, self.local().tags(), self.base().vocabulary().tags());
        self.search_facet(
            &mut top,
            &query,
            CATEGORY_BONUS,
            self.local().categories(),
            self.base().vocabulary().categories(),
        );

        let results = top.into_sorted();
        debug!(query = %query, max, results = results.len(), "search");
        results
    }

    fn search_names(&self, top: &mut TopK, query: &str) {
        let local = self.local().keys();
        let base = self
            .base()
            .vocabulary()
            .keys()
            .filter(|(_, entry)| !self.overrides(entry));

        for (key, entry) in local.chain(base) {
            if let Some(score) = match_score(query, key.trim_matches(':'), NAME_BONUS) {
                top.offer(entry, score);
            }
        }
    }

    fn search_descriptions(&self, top: &mut TopK, query: &str) {
        let local = self.local().entries().iter();
        let base = self
            .base()
            .vocabulary()
            .entries()
            .iter()
            .filter(|entry| !self.overrides(entry));

        for entry in local.chain(base) {
            if let Some(score) = match_score(query, entry.description(), DESCRIPTION_BONUS) {
                top.offer(entry, score);
            }
        }
    }

    fn search_facet(&self, top: &mut TopK, query: &str, bonus: i32, local: &Facet, base: &Facet) {
        for (name, group) in local.groups() {
            if let Some(score) = match_score(query, name, bonus) {
                offer_group(top, group, score, |_| true);
            }
        }

        for (name, group) in base.groups() {
            if let Some(score) = match_score(query, name, bonus) {
                offer_group(top, group, score, |entry| !self.overrides(entry));
            }
        }
    }
}

fn offer_group(top: &mut TopK, group: &[Arc<Entry>], score: i32, keep: impl Fn(&Arc<Entry>) -> bool) {
    for entry in group {
        if keep(entry) {
            top.offer(entry, score);
        }
    }
}
