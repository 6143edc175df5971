//! Coin data sources.
//!
//! A [`CoinSource`] performs the single fetch of the pipeline. The native
//! build talks HTTP through `reqwest`; the browser build goes through
//! `window.fetch`.

#[cfg(not(target_arch = "wasm32"))]
mod http_client;

#[cfg(not(target_arch = "wasm32"))]
pub use http_client::{HttpCoinSource, USER_AGENT};

use async_trait::async_trait;
use thiserror::Error;

use crate::models::CoinDescriptor;

/// Path of the endpoint serving coin descriptors.
pub const COIN_DATA_PATH: &str = "/coin-data";

/// Errors that can occur while fetching coin data.
#[derive(Debug, Error)]
pub enum FetchError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[cfg(target_arch = "wasm32")]
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Server returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Invalid coin data: {0}")]
    Parse(#[from] serde_json::Error),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Where the pipeline gets its descriptors from.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait CoinSource {
    /// Fetch the full list of descriptors, in server order.
    async fn fetch_coins(&self) -> Result<Vec<CoinDescriptor>, FetchError>;
}

/// A fixed list of descriptors, returned on every fetch.
#[derive(Debug, Clone, Default)]
pub struct StaticCoinSource {
    coins: Vec<CoinDescriptor>,
}

impl StaticCoinSource {
    pub fn new(coins: Vec<CoinDescriptor>) -> Self {
        Self { coins }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl CoinSource for StaticCoinSource {
    async fn fetch_coins(&self) -> Result<Vec<CoinDescriptor>, FetchError> {
        Ok(self.coins.clone())
    }
}
