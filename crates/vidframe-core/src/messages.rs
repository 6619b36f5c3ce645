//! Localized diagnostic messages
//!
//! The generator never embeds message text itself. Every fallback is looked
//! up by [`MessageKey`] through a [`MessageResolver`] supplied by the caller.
//!
//! # Usage
//!
//! ```rust
//! use vidframe_core::messages::{MessageCatalog, MessageKey, MessageResolver};
//!
//! let catalog = MessageCatalog::from_json(r#"{"urlMissing": "URL fehlt"}"#).unwrap();
//! assert_eq!(catalog.resolve(MessageKey::UrlMissing), "URL fehlt");
//! ```

use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Symbolic key of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    ServiceNotFound,
    UrlMissing,
    NoFileExtension,
    NoYoutubeId,
    NoVimeoId,
    NoDailymotionId,
}

impl MessageKey {
    pub const ALL: [MessageKey; 6] = [
        MessageKey::ServiceNotFound,
        MessageKey::UrlMissing,
        MessageKey::NoFileExtension,
        MessageKey::NoYoutubeId,
        MessageKey::NoVimeoId,
        MessageKey::NoDailymotionId,
    ];

    /// Key name as used in string tables
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::ServiceNotFound => "serviceNotFound",
            MessageKey::UrlMissing => "urlMissing",
            MessageKey::NoFileExtension => "noFileExtension",
            MessageKey::NoYoutubeId => "noYoutubeId",
            MessageKey::NoVimeoId => "noVimeoId",
            MessageKey::NoDailymotionId => "noDailymotionId",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MessageKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::InvalidCatalog(format!("unknown message key {:?}", s)))
    }
}

/// Looks up the text shown for a diagnostic
pub trait MessageResolver {
    fn resolve(&self, key: MessageKey) -> String;
}

impl<F> MessageResolver for F
where
    F: Fn(MessageKey) -> String,
{
    fn resolve(&self, key: MessageKey) -> String {
        self(key)
    }
}

/// Built-in English messages
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl DefaultMessages {
    pub fn text(key: MessageKey) -> &'static str {
        match key {
            MessageKey::ServiceNotFound => "Video service not recognized.",
            MessageKey::UrlMissing => "URL missing. Please enter a video URL.",
            MessageKey::NoFileExtension => "No file extension found in the video URL.",
            MessageKey::NoYoutubeId => "No YouTube video ID found in the URL.",
            MessageKey::NoVimeoId => "No Vimeo video ID found in the URL.",
            MessageKey::NoDailymotionId => "No Dailymotion video ID found in the URL.",
        }
    }
}

impl MessageResolver for DefaultMessages {
    fn resolve(&self, key: MessageKey) -> String {
        Self::text(key).to_string()
    }
}

/// String table loaded from a localization file
///
/// Keys absent from the table resolve to [`DefaultMessages`].
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    entries: HashMap<MessageKey, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a flat `{"key": "text"}` JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, String> =
            serde_json::from_str(json).map_err(|e| Error::InvalidCatalog(e.to_string()))?;

        let mut catalog = Self::new();
        for (name, text) in raw {
            match name.parse::<MessageKey>() {
                Ok(key) => {
                    catalog.entries.insert(key, text);
                }
                Err(_) => warn!(key = %name, "Ignoring unknown message key"),
            }
        }
        Ok(catalog)
    }

    /// Override a single message
    pub fn insert(&mut self, key: MessageKey, text: impl Into<String>) {
        self.entries.insert(key, text.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MessageResolver for MessageCatalog {
    fn resolve(&self, key: MessageKey) -> String {
        self.entries
            .get(&key)
            .cloned()
            .unwrap_or_else(|| DefaultMessages.resolve(key))
    }
}
