//! Registration errors.
//!
//! Only registry construction can fail. Search and rewrite never return
//! errors: a query that matches nothing yields an empty result.

use thiserror::Error;

/// Why a vocabulary entry was rejected.
///
/// The messages are stable so callers and tests can assert on them.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("emoji: emoji cannot be empty string")]
    EmptyGlyph,

    #[error("emoji: image reference cannot be empty string")]
    EmptyImage,

    #[error("emoji: already defined in this registry: {0}")]
    AlreadyDefined(String),

    #[error("emoji: alias cannot be empty string")]
    EmptyAlias,

    #[error("emoji: alias cannot contain ':'")]
    ColonInAlias,

    #[error("emoji: image needs at least one alias")]
    ImageWithoutAlias,

    #[error("emoji: entry cannot have both a glyph and an image")]
    GlyphAndImage,

    #[error("emoji: invalid vocabulary definition: {0}")]
    InvalidDefinition(#[from] serde_json::Error),
}

pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
