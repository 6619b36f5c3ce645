//! Vidframe WASM - Embed Markup for Browser-Hosted Editors
//!
//! Exposes the markup generator to the page editor running in the browser:
//! - Embed rendering from the panel's config object
//! - Localized diagnostics from a plain key/text object
//! - Field visibility for the properties panel
//!
//! ## Integration
//!
//! ```javascript
//! import init, { renderEmbed, showDimensions } from '@vidframe/wasm';
//!
//! await init();
//! preview.innerHTML = renderEmbed(
//!   { service: 'vimeo', url: 'https://vimeo.com/76979871', dynamicSize: true },
//!   { urlMissing: 'URL fehlt' },
//! );
//! ```

use std::collections::HashMap;
use vidframe_core::{
    form, generate_markup, EmbedConfig, FieldVisibility, MessageCatalog, Service,
};
use wasm_bindgen::prelude::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"[Vidframe WASM] Initialized".into());
}

/// Library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Render embed markup for a panel config object
///
/// Never throws. A missing or unreadable config renders the `urlMissing`
/// message; a config with a mistyped field keeps its other fields.
#[wasm_bindgen(js_name = renderEmbed)]
pub fn render_embed(config: JsValue, messages: JsValue) -> String {
    let config = read_config(config);
    let catalog = read_messages(messages);
    generate_markup(config.as_ref(), &catalog)
}

/// Whether the width/height inputs should be shown
#[wasm_bindgen(js_name = showDimensions)]
pub fn show_dimensions(service: &str, dynamic_size: bool) -> bool {
    service
        .parse::<Service>()
        .map(|service| form::show_dimensions(service, dynamic_size))
        .unwrap_or(false)
}

/// Visibility of every provider-specific panel field
#[wasm_bindgen(js_name = fieldVisibility)]
pub fn field_visibility(config: JsValue) -> JsValue {
    let visibility = read_config(config)
        .map(|config| FieldVisibility::for_config(&config))
        .unwrap_or_default();
    serde_wasm_bindgen::to_value(&visibility).unwrap_or(JsValue::NULL)
}

fn read_config(value: JsValue) -> Option<EmbedConfig> {
    if value.is_undefined() || value.is_null() {
        return None;
    }

    let raw: serde_json::Value = match serde_wasm_bindgen::from_value(value) {
        Ok(raw) => raw,
        Err(e) => {
            warn(&format!("Unreadable config, rendering as empty: {}", e));
            return None;
        }
    };

    match serde_json::from_value(raw.clone()) {
        Ok(config) => Some(config),
        Err(e) => {
            // Keep the fields that are usable so the preview still shows the video
            warn(&format!("Invalid config field, using defaults for it: {}", e));
            Some(EmbedConfig::from_value_lossy(&raw))
        }
    }
}

fn read_messages(value: JsValue) -> MessageCatalog {
    let mut catalog = MessageCatalog::new();
    if value.is_undefined() || value.is_null() {
        return catalog;
    }

    let entries: HashMap<String, String> = match serde_wasm_bindgen::from_value(value) {
        Ok(entries) => entries,
        Err(e) => {
            warn(&format!("Invalid messages, using defaults: {}", e));
            return catalog;
        }
    };
    for (name, text) in entries {
        match name.parse() {
            Ok(key) => catalog.insert(key, text),
            Err(_) => warn(&format!("Ignoring unknown message key {:?}", name)),
        }
    }
    catalog
}

fn warn(message: &str) {
    web_sys::console::warn_1(&format!("[Vidframe WASM] {}", message).into());
}
