//! Dailymotion iframe embeds. No start offset support.

use super::{escape_attr, ASPECT_PADDING};
use crate::extract::path_id;
use crate::{EmbedConfig, Error, Result, Service};

const EMBED_BASE: &str = "https://www.dailymotion.com/embed/video/";
const ALLOW: &str = "autoplay; fullscreen; picture-in-picture";

pub(super) fn render(config: &EmbedConfig, url: &str) -> Result<String> {
    let id = path_id(url).ok_or(Error::IdentifierNotFound(Service::Dailymotion))?;
    let src = format!("{}{}", EMBED_BASE, escape_attr(&id));

    if config.dynamic_size {
        Ok(format!(
            r#"<div style="position:relative;padding-bottom:{};height:0;overflow:hidden;"><iframe src="{}" style="width:100%;height:100%;position:absolute;left:0px;top:0px;overflow:hidden;" frameborder="0" type="text/html" allow="{}" allowfullscreen></iframe></div>"#,
            ASPECT_PADDING, src, ALLOW,
        ))
    } else {
        Ok(format!(
            r#"<iframe src="{}" width="{}" height="{}" frameborder="0" type="text/html" allow="{}" allowfullscreen></iframe>"#,
            src, config.width, config.height, ALLOW,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_ignores_start_time() {
        let config = EmbedConfig::new(Service::Dailymotion, "https://www.dailymotion.com/video/x7tgad0")
            .dynamic()
            .starting_at(45);
        let html = render(&config, &config.url).unwrap();
        assert!(html.contains("padding-bottom:56.25%"));
        assert!(html.contains(r#"src="https://www.dailymotion.com/embed/video/x7tgad0""#));
        assert!(!html.contains("#t="));
        assert!(!html.contains("start="));
    }

    #[test]
    fn test_fixed() {
        let config = EmbedConfig::new(Service::Dailymotion, "https://www.dailymotion.com/video/x7tgad0")
            .with_size(480, 270);
        let html = render(&config, &config.url).unwrap();
        assert!(html.starts_with("<iframe"));
        assert!(html.contains(r#"width="480" height="270""#));
    }
}
