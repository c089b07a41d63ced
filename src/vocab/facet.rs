//! Facet groups (tags, categories).
//!
//! Groups keep first-seen order. The first entry of a group is its
//! representative when the search engine scores the facet value.

use std::collections::HashMap;
use std::sync::Arc;

use super::entry::Entry;

#[derive(Debug, Clone, Default)]
pub struct Facet {
    names: Vec<String>,
    groups: Vec<Vec<Arc<Entry>>>,
    index: HashMap<String, usize>,
}

impl Facet {
    pub(crate) fn insert(&mut self, name: &str, entry: Arc<Entry>) {
        match self.index.get(name) {
            Some(&i) => self.groups[i].push(entry),
            None => {
                self.index.insert(name.to_string(), self.names.len());
                self.names.push(name.to_string());
                self.groups.push(vec![entry]);
            }
        }
    }

    /// Entries sharing `name`, representative first.
    pub fn get(&self, name: &str) -> Option<&[Arc<Entry>]> {
        self.index.get(name).map(|&i| self.groups[i].as_slice())
    }

    /// Groups in first-seen order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[Arc<Entry>])> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.groups.iter().map(Vec::as_slice))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::entry::Symbol;

    fn entry(glyph: &str) -> Arc<Entry> {
        Arc::new(Entry::new(Symbol::Glyph(glyph.into()), glyph, &[], None, &[]))
    }

    #[test]
    fn test_first_entry_is_representative() {
        let mut facet = Facet::default();
        facet.insert("food", entry("🍿"));
        facet.insert("plant", entry("🌽"));
        facet.insert("food", entry("🌽"));

        let food = facet.get("food").unwrap();
        assert_eq!(food.len(), 2);
        assert_eq!(food[0].glyph(), Some("🍿"));

        let names: Vec<&str> = facet.groups().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["food", "plant"]);
        assert_eq!(facet.len(), 2);
    }
}
