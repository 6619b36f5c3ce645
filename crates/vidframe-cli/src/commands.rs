//! CLI command implementations

use crate::output::{print_rows, OutputFormat};
use anyhow::Context;
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;
use tracing::{debug, info};
use vidframe_core::{
    extract, try_generate_markup, DefaultMessages, EmbedConfig, MessageCatalog, MessageResolver,
    Service,
};

/// Render options given on the command line
pub struct RenderArgs {
    pub service: String,
    pub url: String,
    pub dynamic: bool,
    pub width: u32,
    pub height: u32,
    pub start: Option<u32>,
}

impl RenderArgs {
    fn into_config(self) -> EmbedConfig {
        EmbedConfig {
            service: self.service,
            url: self.url,
            dynamic_size: self.dynamic,
            width: self.width,
            height: self.height,
            play_from_beginning: self.start.is_none(),
            starting_time: self.start.unwrap_or(0),
        }
    }
}

#[derive(Serialize)]
struct RenderReport {
    /// False when `output` is a diagnostic message
    embedded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
    output: String,
}

/// Render embed markup
pub fn render(
    config_path: Option<PathBuf>,
    args: RenderArgs,
    messages_path: Option<PathBuf>,
    format: &str,
) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path.display()))?;
            EmbedConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => args.into_config(),
    };

    let resolver: Box<dyn MessageResolver> = match messages_path {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading message catalog {}", path.display()))?;
            let catalog = MessageCatalog::from_json(&json)?;
            debug!(entries = catalog.len(), "Loaded message catalog");
            Box::new(catalog)
        }
        None => Box::new(DefaultMessages),
    };

    info!(service = %config.service, url = %config.url, "Rendering embed");
    let report = render_report(&config, resolver.as_ref());

    match OutputFormat::from(format) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text | OutputFormat::Table => println!("{}", report.output),
    }

    Ok(())
}

fn render_report(config: &EmbedConfig, messages: &dyn MessageResolver) -> RenderReport {
    match try_generate_markup(config) {
        Ok(output) => RenderReport { embedded: true, code: None, output },
        Err(err) => {
            debug!(code = err.error_code(), error = %err, "Rendering diagnostic");
            RenderReport {
                embedded: false,
                code: Some(err.error_code()),
                output: messages.resolve(err.message_key()),
            }
        }
    }
}

#[derive(Serialize, Tabled)]
struct InspectRow {
    service: &'static str,
    extracted: String,
}

/// Show what each provider extracts from a URL
pub fn inspect(url: &str, format: &str) -> anyhow::Result<()> {
    let none = || "-".to_string();
    let rows: Vec<InspectRow> = Service::ALL
        .into_iter()
        .map(|service| {
            let extracted = match service {
                Service::YouTube => extract::youtube_id(url),
                Service::Vimeo | Service::Dailymotion => extract::path_id(url),
                Service::File => extract::file_extension(url).map(|ext| format!(".{}", ext)),
            };
            InspectRow {
                service: service.label(),
                extracted: extracted.unwrap_or_else(none),
            }
        })
        .collect();

    if matches!(OutputFormat::from(format), OutputFormat::Text) {
        println!("Inspecting: {}", url);
        println!("  Path without query: {}", extract::strip_query(url));
    }
    print_rows(&rows, format)
}

#[derive(Serialize, Tabled)]
struct ServiceRow {
    token: &'static str,
    name: &'static str,
    dynamic_size: bool,
    start_time: bool,
}

/// List supported providers
pub fn services(format: &str) -> anyhow::Result<()> {
    let rows: Vec<ServiceRow> = Service::ALL
        .into_iter()
        .map(|service| ServiceRow {
            token: service.token(),
            name: service.label(),
            dynamic_size: service.supports_dynamic_size(),
            start_time: service.supports_start_time(),
        })
        .collect();

    print_rows(&rows, format)
}
