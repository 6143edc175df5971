//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod fetch;
mod render;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings_with_options, LoadOptions};

#[derive(Parser)]
#[command(name = "coinfall")]
#[command(about = "Decorative falling-coin background")]
#[command(version)]
pub struct Cli {
    /// Config file (default: discovered coinfall.{toml,yaml,json})
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Resolve relative config paths against the current directory
    #[arg(long, global = true)]
    cwd: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

/// Default log filter when `RUST_LOG` is unset. Fetch and render progress
/// is logged at debug, so `-v` has to reach that level.
pub fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "coinfall=debug"
    } else {
        "coinfall=warn"
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the development host (page, stylesheet, coin data, browser build)
    Serve {
        /// Address to bind: port, host, or host:port
        #[arg(env = "COINFALL_BIND")]
        bind: Option<String>,
    },

    /// Fetch coin descriptors and print them as JSON
    Fetch {
        /// Server base URL (default: configured server_url)
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Render coins into a page and print the resulting HTML
    Render {
        /// Server base URL (default: configured server_url)
        #[arg(short, long, conflicts_with = "offline")]
        url: Option<String>,
        /// HTML page containing the coin container (default: built-in index page)
        #[arg(short, long)]
        page: Option<PathBuf>,
        /// Generate coins locally instead of fetching them
        #[arg(long)]
        offline: bool,
        /// Write the HTML to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Parse arguments, load settings and run the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
        use_cwd: cli.cwd,
    };
    let (settings, _config) = load_settings_with_options(options).await;

    match cli.command {
        Commands::Serve { bind } => {
            serve::cmd_serve(&settings, bind.as_deref().unwrap_or(&settings.bind)).await
        }
        Commands::Fetch { url } => fetch::cmd_fetch(&settings, url.as_deref()).await,
        Commands::Render {
            url,
            page,
            offline,
            output,
        } => {
            render::cmd_render(
                &settings,
                url.as_deref(),
                page.as_deref(),
                offline,
                output.as_deref(),
            )
            .await
        }
    }
}
