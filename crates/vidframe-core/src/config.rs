//! Embed configuration supplied by the host properties panel

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Supported video providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    YouTube,
    Vimeo,
    Dailymotion,
    /// Raw video file served over HTTP
    File,
}

impl Service {
    /// Every provider, in panel order
    pub const ALL: [Service; 4] = [
        Service::YouTube,
        Service::Vimeo,
        Service::Dailymotion,
        Service::File,
    ];

    /// Token used by the host to select this provider
    pub fn token(&self) -> &'static str {
        match self {
            Service::YouTube => "youtube",
            Service::Vimeo => "vimeo",
            Service::Dailymotion => "dailymotion",
            Service::File => "file",
        }
    }

    /// Human-readable provider name
    pub fn label(&self) -> &'static str {
        match self {
            Service::YouTube => "YouTube",
            Service::Vimeo => "Vimeo",
            Service::Dailymotion => "Dailymotion",
            Service::File => "File",
        }
    }

    /// YouTube embeds are always rendered at a fixed size
    pub fn supports_dynamic_size(&self) -> bool {
        !matches!(self, Service::YouTube)
    }

    /// Dailymotion embeds cannot start at an offset
    pub fn supports_start_time(&self) -> bool {
        !matches!(self, Service::Dailymotion)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Service {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        Service::ALL
            .into_iter()
            .find(|service| service.token().eq_ignore_ascii_case(token))
            .ok_or_else(|| Error::UnrecognizedService(token.to_string()))
    }
}

/// Render configuration for a single embed
///
/// `service` holds the raw host token so that an unknown provider reaches the
/// generator and is reported as a diagnostic instead of failing to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbedConfig {
    /// Provider token (`youtube`, `vimeo`, `dailymotion`, `file`)
    pub service: String,
    /// Video page or file URL
    pub url: String,
    /// Fill the container instead of using `width`/`height`
    pub dynamic_size: bool,
    /// Fixed width in pixels
    pub width: u32,
    /// Fixed height in pixels
    pub height: u32,
    /// Ignore `starting_time` when set
    pub play_from_beginning: bool,
    /// Start offset in seconds
    pub starting_time: u32,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            service: Service::YouTube.token().to_string(),
            url: String::new(),
            dynamic_size: false,
            width: 640,
            height: 360,
            play_from_beginning: true,
            starting_time: 0,
        }
    }
}

impl EmbedConfig {
    /// Create a fixed-size config for a provider and URL
    pub fn new(service: Service, url: impl Into<String>) -> Self {
        Self {
            service: service.token().to_string(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Parse a host payload in its camelCase JSON shape
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a host payload field by field, keeping defaults for fields that
    /// are missing or have the wrong type
    ///
    /// A mistyped `width` must not hide a perfectly usable `url`.
    pub fn from_value_lossy(value: &Value) -> Self {
        let mut config = Self::default();
        let Some(fields) = value.as_object() else {
            return config;
        };

        let text = |name: &str| fields.get(name).and_then(Value::as_str).map(str::to_string);
        let flag = |name: &str| fields.get(name).and_then(Value::as_bool);
        let number = |name: &str| fields.get(name).and_then(whole_u32);

        if let Some(service) = text("service") {
            config.service = service;
        }
        if let Some(url) = text("url") {
            config.url = url;
        }
        if let Some(dynamic_size) = flag("dynamicSize") {
            config.dynamic_size = dynamic_size;
        }
        if let Some(width) = number("width") {
            config.width = width;
        }
        if let Some(height) = number("height") {
            config.height = height;
        }
        if let Some(play_from_beginning) = flag("playFromBeginning") {
            config.play_from_beginning = play_from_beginning;
        }
        if let Some(starting_time) = number("startingTime") {
            config.starting_time = starting_time;
        }
        config
    }

    /// Use fixed pixel dimensions
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.dynamic_size = false;
        self.width = width;
        self.height = height;
        self
    }

    /// Fill the container responsively
    pub fn dynamic(mut self) -> Self {
        self.dynamic_size = true;
        self
    }

    /// Start playback at `seconds`
    pub fn starting_at(mut self, seconds: u32) -> Self {
        self.play_from_beginning = false;
        self.starting_time = seconds;
        self
    }

    /// Resolve the provider token
    pub fn service(&self) -> Result<Service> {
        self.service.parse()
    }

    /// Start offset to render, if playback should not begin at zero
    pub fn start_offset(&self) -> Option<u32> {
        if self.play_from_beginning {
            None
        } else {
            Some(self.starting_time)
        }
    }
}

/// JS numbers arrive as floats; accept them when they are whole
fn whole_u32(value: &Value) -> Option<u32> {
    value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|n| *n >= 0.0 && n.fract() == 0.0)
                .map(|n| n as u64)
        })
        .and_then(|n| u32::try_from(n).ok())
}
