//! Error types for Vidframe Core

use crate::config::Service;
use crate::messages::MessageKey;
use thiserror::Error;

/// Result type alias for markup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Markup error types
///
/// None of these ever escape [`crate::generate_markup`]; they are resolved to
/// a human-readable message through a [`crate::MessageResolver`] instead.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("URL missing")]
    MissingUrl,

    #[error("Service not recognized: {0:?}")]
    UnrecognizedService(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Invalid message catalog: {0}")]
    InvalidCatalog(String),

    // Extraction errors
    #[error("No {} video identifier found", .0.label())]
    IdentifierNotFound(Service),

    #[error("No file extension found")]
    ExtensionNotFound,
}

impl Error {
    /// Message key used to look up the localized diagnostic for this error
    pub fn message_key(&self) -> MessageKey {
        match self {
            // Nothing usable to embed
            Error::MissingUrl | Error::InvalidConfig(_) | Error::InvalidCatalog(_) => {
                MessageKey::UrlMissing
            }
            Error::UnrecognizedService(_) => MessageKey::ServiceNotFound,
            Error::IdentifierNotFound(Service::YouTube) => MessageKey::NoYoutubeId,
            Error::IdentifierNotFound(Service::Vimeo) => MessageKey::NoVimeoId,
            Error::IdentifierNotFound(Service::Dailymotion) => MessageKey::NoDailymotionId,
            // Raw files never look for an identifier
            Error::IdentifierNotFound(Service::File) | Error::ExtensionNotFound => {
                MessageKey::NoFileExtension
            }
        }
    }

    /// Returns the error code for logging
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::MissingUrl => "URL_MISSING",
            Error::UnrecognizedService(_) => "SERVICE_UNRECOGNIZED",
            Error::InvalidConfig(_) => "INVALID_CONFIG",
            Error::InvalidCatalog(_) => "INVALID_CATALOG",
            Error::IdentifierNotFound(_) => "ID_NOT_FOUND",
            Error::ExtensionNotFound => "EXTENSION_NOT_FOUND",
        }
    }
}
