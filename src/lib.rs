//! EmojiCore: Shortcode Scanner + Ranked Emoji Search
//!
//! Finds emoji and `:shortcode:` aliases in a document tree and wraps each
//! occurrence in an annotated substitute node. Also answers ranked,
//! partial-name lookups for autocomplete.
//!
//! # Architecture
//!
//! ## Vocabulary
//! - `vocab/entry.rs` - Entry: one glyph- or image-backed symbol
//! - `vocab/builtin.rs` - BaseVocabulary: the shared, built-once base table
//! - `vocab/registry.rs` - RegistryBuilder / Registry: per-caller extensions
//!
//! ## Scanner
//! - `scanner/automaton.rs` - Persistent 256-way trie, longest-match scan
//!
//! ## Search
//! - `search/score.rs` - Exact/prefix/substring scoring with facet bonuses
//! - `search/results.rs` - Bounded top-K accumulator
//! - `search/engine.rs` - Four-pass ranked search
//!
//! ## Rewrite
//! - `rewrite/node.rs` - Document tree (`Arc`-shared nodes)
//! - `rewrite/config.rs` - Substitute markup and opaque tags
//! - `rewrite/engine.rs` - Structure-preserving, idempotent replace pass
//!
//! ## Browser
//! - `wasm.rs` - EmojiIndex: search, suggestions and text rendering
//!
//! # Usage
//! ```
//! use emojicore::{text, RegistryBuilder};
//!
//! let mut builder = RegistryBuilder::new();
//! builder
//!     .add_image("/img/shipit.png", "ship it!", &["shipit"], Some("GitHub"), &[])
//!     .unwrap();
//! let registry = builder.build();
//!
//! let results = registry.search("ship", 5);
//! assert_eq!(results[0].description(), "ship it!");
//!
//! let out = registry.replace(&[text(":shipit: now")]);
//! assert_eq!(out.len(), 2);
//! ```

pub mod error;
pub mod rewrite;
pub mod scanner;
pub mod search;
pub mod vocab;
pub mod wasm;

pub use error::*;
pub use rewrite::{
    comment, doctype, element, render, replace, text, Attribute, Element, Node, NodeRef, RewriteConfig,
};
pub use scanner::*;
pub use search::{
    match_score, search, SearchResult, CATEGORY_BONUS, DESCRIPTION_BONUS, EXACT_SCORE, NAME_BONUS, TAG_BONUS,
};
pub use vocab::*;
pub use wasm::EmojiIndex;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Get version information
pub fn version() -> String {
    format!("emojicore v{}", env!("CARGO_PKG_VERSION"))
}
