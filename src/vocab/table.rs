//! Vocabulary table: entries plus key and facet indexes.

use std::collections::HashMap;
use std::sync::Arc;

use super::entry::{normalize_key, Entry};
use super::facet::Facet;

/// Entries with their lookup indexes.
///
/// `keys` keeps registration order (and original spelling) so that search
/// passes are deterministic; `by_key` is the normalized lookup map.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: Vec<Arc<Entry>>,
    keys: Vec<(String, Arc<Entry>)>,
    by_key: HashMap<String, Arc<Entry>>,
    by_tag: Facet,
    by_category: Facet,
}

impl Vocabulary {
    /// Index an entry under all of its keys and facets. No validation:
    /// callers that need uniqueness check `contains_key` first.
    pub(crate) fn insert(&mut self, entry: Entry) -> Arc<Entry> {
        let entry = Arc::new(entry);
        self.entries.push(Arc::clone(&entry));

        for key in entry.keys() {
            self.by_key.insert(normalize_key(&key), Arc::clone(&entry));
            self.keys.push((key, Arc::clone(&entry)));
        }

        if let Some(category) = entry.category() {
            self.by_category.insert(category, Arc::clone(&entry));
        }
        for tag in entry.tags() {
            self.by_tag.insert(tag, Arc::clone(&entry));
        }

        entry
    }

    /// Case-insensitive key lookup (`"🎩"`, `":TopHat:"`).
    pub fn get(&self, key: &str) -> Option<&Arc<Entry>> {
        self.by_key.get(&normalize_key(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.by_key.contains_key(&normalize_key(key))
    }

    pub fn entries(&self) -> &[Arc<Entry>] {
        &self.entries
    }

    /// `(key, entry)` pairs in registration order.
    pub fn keys(&self) -> impl Iterator<Item = (&str, &Arc<Entry>)> {
        self.keys.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn tags(&self) -> &Facet {
        &self.by_tag
    }

    pub fn categories(&self) -> &Facet {
        &self.by_category
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
