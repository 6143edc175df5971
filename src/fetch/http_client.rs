//! HTTP coin source backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use url::Url;

use super::{CoinSource, FetchError, COIN_DATA_PATH};
use crate::config::Settings;
use crate::models::{parse_coin_data, CoinDescriptor};

pub const USER_AGENT: &str = concat!("coinfall/", env!("CARGO_PKG_VERSION"));

/// Fetches descriptors with a single GET to `<base>/coin-data`.
#[derive(Debug, Clone)]
pub struct HttpCoinSource {
    client: Client,
    url: Url,
}

impl HttpCoinSource {
    /// Create a source for the server at `base_url`.
    ///
    /// Only the scheme, host and port of `base_url` are kept; the endpoint
    /// path is always `/coin-data`. A zero `timeout` disables the timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        Self::with_user_agent(base_url, timeout, None)
    }

    /// Create a source with a custom user agent (`None` uses [`USER_AGENT`]).
    pub fn with_user_agent(
        base_url: &str,
        timeout: Duration,
        user_agent: Option<&str>,
    ) -> Result<Self, FetchError> {
        let url = Url::parse(base_url)?.join(COIN_DATA_PATH)?;

        let mut builder = Client::builder()
            .user_agent(user_agent.unwrap_or(USER_AGENT))
            .gzip(true)
            .brotli(true);
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url,
        })
    }

    /// Create a source from application settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        Self::with_user_agent(
            &settings.server_url,
            Duration::from_secs(settings.request_timeout),
            Some(&settings.user_agent),
        )
    }

    /// The endpoint this source fetches.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

#[async_trait]
impl CoinSource for HttpCoinSource {
    async fn fetch_coins(&self) -> Result<Vec<CoinDescriptor>, FetchError> {
        tracing::debug!("GET {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let coins = parse_coin_data(&body)?;
        tracing::debug!("Fetched {} coins from {}", coins.len(), self.url);
        Ok(coins)
    }
}
