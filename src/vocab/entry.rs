//! Vocabulary entries.

use serde::{Deserialize, Serialize};

/// How an entry is rendered: a literal Unicode glyph or an external image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Glyph(String),
    Image(String),
}

/// One registrable symbol. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub(crate) symbol: Symbol,
    pub(crate) description: String,
    pub(crate) aliases: Vec<String>,
    pub(crate) category: Option<String>,
    pub(crate) tags: Vec<String>,
}

impl Entry {
    pub(crate) fn new(
        symbol: Symbol,
        description: &str,
        aliases: &[&str],
        category: Option<&str>,
        tags: &[&str],
    ) -> Self {
        Self {
            symbol,
            description: description.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            category: category.filter(|c| !c.is_empty()).map(str::to_string),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// The literal glyph, or `None` for image-backed entries.
    pub fn glyph(&self) -> Option<&str> {
        match &self.symbol {
            Symbol::Glyph(glyph) => Some(glyph),
            Symbol::Image(_) => None,
        }
    }

    /// The image reference, or `None` for glyph-backed entries.
    pub fn image_url(&self) -> Option<&str> {
        match &self.symbol {
            Symbol::Image(url) => Some(url),
            Symbol::Glyph(_) => None,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Every lookup key: the glyph (if any) followed by each `:alias:`.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.glyph()
            .map(str::to_string)
            .into_iter()
            .chain(self.aliases.iter().map(|a| alias_key(a)))
    }
}

/// Wrap an alias in delimiters: `tophat` -> `:tophat:`.
pub fn alias_key(alias: &str) -> String {
    format!(":{alias}:")
}

/// Lookup-key normalization shared by the key index and the automaton.
/// ASCII only, so a normalized key has the same byte length as the original.
pub(crate) fn normalize_key(key: &str) -> String {
    key.to_ascii_lowercase()
}

/// Entry definition for hydration from JSON.
///
/// Exactly one of `glyph` / `image` should be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryDef {
    #[serde(default)]
    pub glyph: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

// =============================================================================
// Tests
// =============================================================================
