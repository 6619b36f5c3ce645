//! Embed markup generation for YouTube, Vimeo, Dailymotion and raw files

mod dailymotion;
mod file;
mod vimeo;
mod youtube;

use crate::{EmbedConfig, Error, MessageResolver, Result, Service};
use tracing::debug;

/// Padding ratio of the responsive 16:9 wrapper
pub(crate) const ASPECT_PADDING: &str = "56.25%";

/// Render the embed markup for `config`
///
/// Never fails: a missing config, a blank URL or a URL the provider cannot
/// use all produce the matching diagnostic text from `messages`.
pub fn generate_markup(config: Option<&EmbedConfig>, messages: &dyn MessageResolver) -> String {
    let result = match config {
        Some(config) => try_generate_markup(config),
        None => Err(Error::MissingUrl),
    };

    match result {
        Ok(markup) => markup,
        Err(err) => {
            debug!(code = err.error_code(), error = %err, "Rendering diagnostic");
            messages.resolve(err.message_key())
        }
    }
}

/// Render the embed markup, reporting why nothing could be embedded
pub fn try_generate_markup(config: &EmbedConfig) -> Result<String> {
    // Pasted URLs often carry a trailing newline
    let url = config.url.trim();
    if url.is_empty() {
        return Err(Error::MissingUrl);
    }

    let service = config.service()?;
    debug!(service = %service, url = %url, dynamic = config.dynamic_size, "Generating markup");

    match service {
        Service::YouTube => youtube::render(config, url),
        Service::Vimeo => vimeo::render(config, url),
        Service::Dailymotion => dailymotion::render(config, url),
        Service::File => file::render(config, url),
    }
}

/// Escape a value for use inside a double-quoted HTML attribute
pub(crate) fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
