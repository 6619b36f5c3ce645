//! Vidframe CLI - Video Embed Renderer
//!
//! Features:
//! - Render embed markup from flags or a host JSON config
//! - Localized diagnostics from a message catalog
//! - URL inspection per provider
//! - Provider capability listing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod output;

/// Vidframe CLI - Video embed toolkit
#[derive(Parser, Debug)]
#[command(name = "vidframe")]
#[command(author = "Purple Squirrel Media")]
#[command(version)]
#[command(about = "Render embeddable video player markup", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json, table)
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render embed markup
    Render {
        /// Host config JSON file (overrides the flags below)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Service token (youtube, vimeo, dailymotion, file)
        #[arg(short, long, default_value = "youtube")]
        service: String,

        /// Video page or file URL
        #[arg(short, long, default_value = "")]
        url: String,

        /// Fill the container instead of using width/height
        #[arg(short, long)]
        dynamic: bool,

        /// Width in pixels
        #[arg(long, default_value = "640")]
        width: u32,

        /// Height in pixels
        #[arg(long, default_value = "360")]
        height: u32,

        /// Start playback at this many seconds
        #[arg(long)]
        start: Option<u32>,

        /// Message catalog JSON for localized diagnostics
        #[arg(short, long)]
        messages: Option<PathBuf>,
    },

    /// Show what each provider extracts from a URL
    Inspect {
        /// URL to inspect
        url: String,
    },

    /// List supported providers
    Services,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for markup
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render { config, service, url, dynamic, width, height, start, messages } => {
            let args = commands::RenderArgs { service, url, dynamic, width, height, start };
            commands::render(config, args, messages, &cli.format)?;
        }
        Commands::Inspect { url } => {
            commands::inspect(&url, &cli.format)?;
        }
        Commands::Services => {
            commands::services(&cli.format)?;
        }
    }

    Ok(())
}
