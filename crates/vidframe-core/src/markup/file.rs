//! Native `<video>` element for raw file URLs

use super::escape_attr;
use crate::extract::file_extension;
use crate::{EmbedConfig, Error, Result};

pub(super) fn render(config: &EmbedConfig, url: &str) -> Result<String> {
    let extension = file_extension(url).ok_or(Error::ExtensionNotFound)?;

    // Media fragment, seconds without a unit suffix
    let anchor = match config.start_offset() {
        Some(start) => format!("#t={}", start),
        None => String::new(),
    };
    let source = format!(
        r#"<source src="{}{}" type="video/{}">"#,
        escape_attr(url),
        anchor,
        escape_attr(extension),
    );

    if config.dynamic_size {
        Ok(format!(r#"<video style="width:100%;" controls>{}</video>"#, source))
    } else {
        Ok(format!(
            r#"<video width="{}" height="{}" controls>{}</video>"#,
            config.width, config.height, source,
        ))
    }
}
