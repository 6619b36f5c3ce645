//! YouTube iframe embeds
//!
//! Always fixed-size; the dynamic size flag does not apply.

use super::escape_attr;
use crate::extract::youtube_id;
use crate::{EmbedConfig, Error, Result, Service};

const EMBED_BASE: &str = "https://www.youtube.com/embed/";
const ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

pub(super) fn render(config: &EmbedConfig, url: &str) -> Result<String> {
    let id = youtube_id(url).ok_or(Error::IdentifierNotFound(Service::YouTube))?;

    let mut src = format!("{}{}", EMBED_BASE, escape_attr(&id));
    if let Some(start) = config.start_offset() {
        src.push_str(&format!("?start={}", start));
    }

    Ok(format!(
        r#"<iframe width="{}" height="{}" src="{}" title="YouTube video player" frameborder="0" allow="{}" allowfullscreen></iframe>"#,
        config.width, config.height, src, ALLOW,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        let config = EmbedConfig::new(Service::YouTube, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        let html = render(&config, &config.url).unwrap();
        assert!(html.contains(r#"src="https://www.youtube.com/embed/dQw4w9WgXcQ""#));
        assert!(html.contains(r#"width="640" height="360""#));
        assert!(html.contains("allowfullscreen"));
    }

    #[test]
    fn test_start_time() {
        let config = EmbedConfig::new(Service::YouTube, "https://youtu.be/dQw4w9WgXcQ").starting_at(90);
        let html = render(&config, &config.url).unwrap();
        assert!(html.contains(r#"src="https://www.youtube.com/embed/dQw4w9WgXcQ?start=90""#));
    }

    #[test]
    fn test_dynamic_size_ignored() {
        let config = EmbedConfig::new(Service::YouTube, "https://youtu.be/dQw4w9WgXcQ")
            .with_size(800, 450)
            .dynamic();
        let html = render(&config, &config.url).unwrap();
        assert!(html.contains(r#"width="800" height="450""#));
        assert!(!html.contains("100%"));
    }

    #[test]
    fn test_no_identifier() {
        let config = EmbedConfig::new(Service::YouTube, "https://youtube.com");
        assert!(matches!(
            render(&config, &config.url),
            Err(Error::IdentifierNotFound(Service::YouTube))
        ));
    }
}
