//! Vidframe Core - Embeddable Video Player Markup
//!
//! This crate turns an embed configuration into HTML a host page can inject:
//! - YouTube, Vimeo and Dailymotion iframe embeds
//! - Native `<video>` elements for raw file URLs
//! - Fixed-size or responsive (container-filling) layouts
//! - Start offsets where the provider supports them
//! - Localizable diagnostics instead of errors
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Vidframe Core                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌──────────────┐        ┌──────────────┐                       │
//! │  │ EmbedConfig  │───────▶│    Markup    │──────▶ HTML string    │
//! │  └──────────────┘        │  Generator   │                       │
//! │                          └──────┬───────┘                       │
//! │                                 │                               │
//! │         ┌───────────┬───────────┼───────────┬──────────┐        │
//! │         │  YouTube  │   Vimeo   │Dailymotion│   File   │        │
//! │         └─────┬─────┴─────┬─────┴─────┬─────┴────┬─────┘        │
//! │               └───────────┴─────┬─────┴──────────┘              │
//! │                          ┌──────┴───────┐  ┌──────────────┐     │
//! │                          │ URL Extract  │  │   Message    │     │
//! │                          └──────────────┘  │   Resolver   │     │
//! │                                            └──────────────┘     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use vidframe_core::{generate_markup, DefaultMessages, EmbedConfig, Service};
//!
//! let config = EmbedConfig::new(Service::Vimeo, "https://vimeo.com/76979871").starting_at(30);
//! let html = generate_markup(Some(&config), &DefaultMessages);
//! assert!(html.contains("https://player.vimeo.com/video/76979871#t=30s"));
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod form;
pub mod markup;
pub mod messages;

pub use config::{EmbedConfig, Service};
pub use error::{Error, Result};
pub use form::FieldVisibility;
pub use markup::{generate_markup, try_generate_markup};
pub use messages::{DefaultMessages, MessageCatalog, MessageKey, MessageResolver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
