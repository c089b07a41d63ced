use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Markup used by the replace pass.
///
/// Every field has a default, so a JSON object only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Class token put on every substitute. Elements already carrying it
    /// are left alone, which keeps the pass idempotent.
    pub marker_class: String,
    /// Attribute holding the description tooltip
    pub tooltip_attribute: String,
    /// Wrapper element for glyph-backed entries
    pub glyph_tag: String,
    /// Element for image-backed entries
    pub image_tag: String,
    /// Elements whose contents are never scanned (compared case-insensitively)
    pub opaque_tags: Vec<String>,
    /// Treat namespaced (SVG/MathML) elements as opaque
    pub skip_foreign_elements: bool,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            marker_class: "emoji".to_string(),
            tooltip_attribute: "title".to_string(),
            glyph_tag: "abbr".to_string(),
            image_tag: "img".to_string(),
            opaque_tags: ["abbr", "code", "kbd", "pre", "samp", "script", "style", "textarea"]
                .into_iter()
                .map(String::from)
                .collect(),
            skip_foreign_elements: true,
        }
    }
}

impl RewriteConfig {
    /// Parse a (possibly partial) JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The default configuration, built once.
    pub fn shared() -> &'static RewriteConfig {
        static DEFAULT: OnceLock<RewriteConfig> = OnceLock::new();
        DEFAULT.get_or_init(RewriteConfig::default)
    }

    pub fn is_opaque_tag(&self, tag: &str) -> bool {
        self.opaque_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
