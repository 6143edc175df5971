//! Development host for the coin background.
//!
//! Stands in for the page, stylesheet and data endpoint the browser build
//! expects:
//! - `/` serves a page with the `.coin-background` container
//! - `/coin-data` serves freshly generated coin descriptors
//! - `/static/coins.css` animates the coins
//! - `/pkg/*` serves the wasm-bindgen output

mod assets;
mod handlers;
mod routes;
mod template_structs;

pub use routes::create_router;
pub use template_structs::{index_page, PAGE_TITLE};

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Settings;
use crate::models::CoinGenerator;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<CoinGenerator>,
    pub pkg_dir: PathBuf,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            generator: Arc::new(CoinGenerator::new(settings.coins.clone())),
            pkg_dir: settings.pkg_dir.clone(),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(AppState::new(settings));

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
