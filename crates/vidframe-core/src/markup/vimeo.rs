//! Vimeo iframe embeds
//!
//! The responsive form needs Vimeo's player API script next to the wrapper.

use super::{escape_attr, ASPECT_PADDING};
use crate::extract::path_id;
use crate::{EmbedConfig, Error, Result, Service};

const EMBED_BASE: &str = "https://player.vimeo.com/video/";
const PLAYER_API: &str = "https://player.vimeo.com/api/player.js";
const ALLOW: &str = "autoplay; fullscreen; picture-in-picture";

pub(super) fn render(config: &EmbedConfig, url: &str) -> Result<String> {
    let id = path_id(url).ok_or(Error::IdentifierNotFound(Service::Vimeo))?;

    let anchor = match config.start_offset() {
        Some(start) => format!("#t={}s", start),
        None => String::new(),
    };
    let src = format!("{}{}{}", EMBED_BASE, escape_attr(&id), anchor);

    if config.dynamic_size {
        Ok(format!(
            r#"<div style="padding:{} 0 0 0;position:relative;"><iframe src="{}" style="position:absolute;top:0;left:0;width:100%;height:100%;" frameborder="0" allow="{}" allowfullscreen></iframe></div><script src="{}"></script>"#,
            ASPECT_PADDING, src, ALLOW, PLAYER_API,
        ))
    } else {
        Ok(format!(
            r#"<iframe src="{}" width="{}" height="{}" frameborder="0" allow="{}" allowfullscreen></iframe>"#,
            src, config.width, config.height, ALLOW,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_with_start() {
        let config = EmbedConfig::new(Service::Vimeo, "https://vimeo.com/76979871")
            .with_size(640, 360)
            .starting_at(30);
        let html = render(&config, &config.url).unwrap();
        assert!(html.contains(r#"src="https://player.vimeo.com/video/76979871#t=30s""#));
        assert!(html.contains(r#"width="640" height="360""#));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_dynamic_includes_player_api() {
        let config = EmbedConfig::new(Service::Vimeo, "https://vimeo.com/76979871").dynamic();
        let html = render(&config, &config.url).unwrap();
        assert!(html.starts_with(r#"<div style="padding:56.25% 0 0 0;position:relative;">"#));
        assert!(html.contains("width:100%;height:100%;"));
        assert!(html.ends_with(r#"<script src="https://player.vimeo.com/api/player.js"></script>"#));
        assert!(html.contains(r#"src="https://player.vimeo.com/video/76979871""#));
    }

    #[test]
    fn test_query_is_ignored() {
        let config = EmbedConfig::new(Service::Vimeo, "https://vimeo.com/76979871?share=copy");
        let html = render(&config, &config.url).unwrap();
        assert!(html.contains(r#"src="https://player.vimeo.com/video/76979871""#));
    }

    #[test]
    fn test_bare_domain() {
        let config = EmbedConfig::new(Service::Vimeo, "https://vimeo.com");
        assert!(matches!(
            render(&config, &config.url),
            Err(Error::IdentifierNotFound(Service::Vimeo))
        ));
    }
}
