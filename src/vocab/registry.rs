//! Registry - per-caller vocabulary layered over a shared base
//!
//! A [`RegistryBuilder`] validates and appends local entries, extending the
//! base automaton by path copying for every new key. [`RegistryBuilder::build`]
//! freezes the result into an immutable [`Registry`] that can be shared
//! across threads.
//!
//! A local entry whose glyph equals a base glyph *overrides* the base entry:
//! lookups check local keys first, and search skips the shadowed base entry.
//! The base trie terminal for that glyph is left in place; it resolves to the
//! local entry through the lookup order.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use tracing::{debug, trace};

use super::builtin::BaseVocabulary;
use super::entry::{alias_key, normalize_key, Entry, EntryDef, Symbol};
use super::table::Vocabulary;
use crate::error::{RegistryError, Result};
use crate::scanner::Automaton;

static SHARED: OnceLock<Registry> = OnceLock::new();

/// Collects local entries before freezing them into a [`Registry`].
pub struct RegistryBuilder {
    base: Arc<BaseVocabulary>,
    local: Vocabulary,
    automaton: Option<Automaton>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    /// Builder over the built-in base table.
    pub fn new() -> Self {
        Self::with_base(Arc::clone(BaseVocabulary::builtin()))
    }

    /// Builder over an explicit base, e.g. [`BaseVocabulary::empty`].
    pub fn with_base(base: Arc<BaseVocabulary>) -> Self {
        Self {
            base,
            local: Vocabulary::default(),
            automaton: None,
        }
    }

    /// Register a Unicode glyph entry.
    ///
    /// Nothing is registered if validation fails.
    pub fn add_glyph(
        &mut self,
        glyph: &str,
        description: &str,
        aliases: &[&str],
        category: Option<&str>,
        tags: &[&str],
    ) -> Result<&mut Self> {
        if glyph.is_empty() {
            return Err(RegistryError::EmptyGlyph);
        }
        if self.local.contains_key(glyph) {
            return Err(RegistryError::AlreadyDefined(glyph.to_string()));
        }
        self.validate_aliases(aliases)?;

        let entry = Entry::new(Symbol::Glyph(glyph.to_string()), description, aliases, category, tags);
        self.register(entry);
        Ok(self)
    }

    /// Register an image as a pseudo-emoji. At least one alias is required,
    /// since an image has no glyph to match on.
    pub fn add_image(
        &mut self,
        image_url: &str,
        description: &str,
        aliases: &[&str],
        category: Option<&str>,
        tags: &[&str],
    ) -> Result<&mut Self> {
        if aliases.is_empty() {
            return Err(RegistryError::ImageWithoutAlias);
        }
        if image_url.is_empty() {
            return Err(RegistryError::EmptyImage);
        }
        self.validate_aliases(aliases)?;

        let entry = Entry::new(Symbol::Image(image_url.to_string()), description, aliases, category, tags);
        self.register(entry);
        Ok(self)
    }

    /// Register a deserialized definition.
    pub fn add(&mut self, def: &EntryDef) -> Result<&mut Self> {
        let aliases: Vec<&str> = def.aliases.iter().map(String::as_str).collect();
        let tags: Vec<&str> = def.tags.iter().map(String::as_str).collect();
        let category = def.category.as_deref();

        match (def.glyph.as_deref(), def.image.as_deref()) {
            (Some(_), Some(_)) => Err(RegistryError::GlyphAndImage),
            (None, Some(url)) => self.add_image(url, &def.description, &aliases, category, &tags),
            (glyph, None) => self.add_glyph(glyph.unwrap_or(""), &def.description, &aliases, category, &tags),
        }
    }

    /// Register every definition of a JSON array, in order.
    ///
    /// Stops at the first invalid definition; entries before it stay
    /// registered.
    pub fn hydrate_json(&mut self, json: &str) -> Result<&mut Self> {
        let defs: Vec<EntryDef> = serde_json::from_str(json)?;
        for def in &defs {
            self.add(def)?;
        }
        Ok(self)
    }

    fn validate_aliases(&self, aliases: &[&str]) -> Result<()> {
        let mut seen = HashSet::new();
        for alias in aliases {
            if alias.is_empty() {
                return Err(RegistryError::EmptyAlias);
            }
            if alias.contains(':') {
                return Err(RegistryError::ColonInAlias);
            }
            let key = alias_key(alias);
            if self.local.contains_key(&key) || !seen.insert(normalize_key(&key)) {
                return Err(RegistryError::AlreadyDefined(key));
            }
        }
        Ok(())
    }

    fn register(&mut self, entry: Entry) {
        let mut automaton = self
            .automaton
            .take()
            .unwrap_or_else(|| self.base.automaton.clone());
        for key in entry.keys() {
            automaton = automaton.extend(&key);
        }
        self.automaton = Some(automaton);

        let entry = self.local.insert(entry);
        trace!(
            description = entry.description(),
            aliases = entry.aliases().len(),
            "registered entry"
        );
    }

    /// Freeze into an immutable registry.
    pub fn build(self) -> Registry {
        debug!(
            local_entries = self.local.len(),
            local_keys = self.local.key_count(),
            extended = self.automaton.is_some(),
            "registry built"
        );
        Registry {
            base: self.base,
            local: self.local,
            automaton: self.automaton,
        }
    }

    /// Freeze the local entries alone into a new base table, with its
    /// automaton rebuilt eagerly. Useful for hermetic bases in tests.
    pub fn build_base(self) -> Arc<BaseVocabulary> {
        Arc::new(BaseVocabulary::from_vocabulary(self.local))
    }
}

/// Immutable vocabulary: a shared base plus local additions and overrides.
#[derive(Debug)]
pub struct Registry {
    base: Arc<BaseVocabulary>,
    local: Vocabulary,
    /// `None` means the base automaton is used unmodified.
    automaton: Option<Automaton>,
}

impl Default for Registry {
    fn default() -> Self {
        RegistryBuilder::new().build()
    }
}

impl Registry {
    /// The process-wide registry over the built-in table, with no local
    /// entries.
    pub fn shared() -> &'static Registry {
        SHARED.get_or_init(Registry::default)
    }

    pub fn base(&self) -> &BaseVocabulary {
        &self.base
    }

    pub fn local(&self) -> &Vocabulary {
        &self.local
    }

    /// The extended automaton, or the base one when nothing was added.
    pub fn automaton(&self) -> &Automaton {
        self.automaton.as_ref().unwrap_or(&self.base.automaton)
    }

    pub fn is_extended(&self) -> bool {
        self.automaton.is_some()
    }

    /// Resolve a key, local entries first.
    pub fn lookup(&self, key: &str) -> Option<&Arc<Entry>> {
        self.local.get(key).or_else(|| self.base.vocab.get(key))
    }

    /// True if `entry` is shadowed by a local entry with the same glyph.
    pub fn overrides(&self, entry: &Entry) -> bool {
        entry.glyph().is_some_and(|glyph| self.local.contains_key(glyph))
    }

    /// Every reachable entry: local first, then base entries not overridden.
    pub fn entries(&self) -> impl Iterator<Item = &Arc<Entry>> {
        self.local.entries().iter().chain(
            self.base
                .vocab
                .entries()
                .iter()
                .filter(|entry| !self.overrides(entry)),
        )
    }

    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

// =============================================================================
// Tests
// =============================================================================
