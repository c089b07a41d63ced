//! Browser bindings.

use wasm_bindgen::prelude::*;

use crate::rewrite::{render, text};
use crate::vocab::{EntryDef, Registry, RegistryBuilder};

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Registry handle for autocomplete and rendering in the browser.
#[wasm_bindgen]
pub struct EmojiIndex {
    inner: Registry,
}

impl Default for EmojiIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl EmojiIndex {
    /// Index over the built-in table only
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        EmojiIndex {
            inner: Registry::default(),
        }
    }

    /// Built-in table extended with an array of
    /// `{ glyph?, image?, description, aliases?, category?, tags? }`.
    #[wasm_bindgen(js_name = withDefinitions)]
    pub fn with_definitions(defs: JsValue) -> Result<EmojiIndex, JsValue> {
        let defs: Vec<EntryDef> = serde_wasm_bindgen::from_value(defs)
            .map_err(|e| JsValue::from_str(&format!("Failed to read definitions: {}", e)))?;

        let mut builder = RegistryBuilder::new();
        for def in &defs {
            if let Err(e) = builder.add(def) {
                web_sys::console::error_1(&format!("[EmojiIndex] {}", e).into());
                return Err(JsValue::from_str(&e.to_string()));
            }
        }
        Ok(EmojiIndex { inner: builder.build() })
    }

    /// Same as `withDefinitions`, from a JSON string.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<EmojiIndex, JsValue> {
        let mut builder = RegistryBuilder::new();
        builder
            .hydrate_json(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(EmojiIndex { inner: builder.build() })
    }

    /// Ranked results as `{ glyph | image, description, aliases, score }[]`
    #[wasm_bindgen]
    pub fn search(&self, query: &str, max: usize) -> JsValue {
        let results = self.inner.search(query, max);
        match serde_wasm_bindgen::to_value(&results) {
            Ok(v) => v,
            Err(e) => {
                web_sys::console::error_1(&format!("[EmojiIndex] Serialization failed: {:?}", e).into());
                JsValue::NULL
            }
        }
    }

    /// Autocomplete lines: `"<glyph> <description>"`, or
    /// `":<alias>: <description>"` for image entries.
    #[wasm_bindgen]
    pub fn suggest(&self, query: &str, max: usize) -> js_sys::Array {
        self.suggestions(query, max)
            .into_iter()
            .map(|line| JsValue::from_str(&line))
            .collect()
    }

    /// Render a plain-text fragment as HTML with every symbol wrapped.
    #[wasm_bindgen(js_name = renderText)]
    pub fn render_text(&self, data: &str) -> String {
        render(&self.inner.replace(&[text(data)]))
    }

    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl EmojiIndex {
    pub fn registry(&self) -> &Registry {
        &self.inner
    }

    pub fn suggestions(&self, query: &str, max: usize) -> Vec<String> {
        self.inner
            .search(query, max)
            .iter()
            .map(|result| match (result.glyph(), result.aliases().first()) {
                (Some(glyph), _) => format!("{} {}", glyph, result.description()),
                (None, Some(alias)) => format!(":{}: {}", alias, result.description()),
                (None, None) => result.description().to_string(),
            })
            .collect()
    }
}
