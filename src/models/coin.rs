//! Coin descriptor model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One decorative coin as supplied by the `/coin-data` endpoint.
///
/// Descriptors are independent of each other and carry no identity; two
/// equal descriptors render two identical coins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoinDescriptor {
    /// Width and height in pixels.
    pub size: f64,
    /// Horizontal offset within the container, in percent.
    pub left: f64,
    /// Animation cycle length in seconds.
    pub duration: f64,
    /// Animation start offset in seconds.
    pub delay: f64,
}

impl CoinDescriptor {
    pub fn new(size: f64, left: f64, duration: f64, delay: f64) -> Self {
        Self {
            size,
            left,
            duration,
            delay,
        }
    }

    /// Inline style declaration for the rendered coin element.
    ///
    /// Every field maps to its declaration verbatim, so the same descriptor
    /// always yields the same string.
    pub fn inline_style(&self) -> String {
        InlineStyle(self).to_string()
    }
}

struct InlineStyle<'a>(&'a CoinDescriptor);

impl fmt::Display for InlineStyle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coin = self.0;
        write!(
            f,
            "width: {size}px; height: {size}px; left: {left}%; animation-duration: {duration}s; animation-delay: {delay}s;",
            size = coin.size,
            left = coin.left,
            duration = coin.duration,
            delay = coin.delay,
        )
    }
}

/// Parse a `/coin-data` response body.
///
/// The body must be a JSON array of descriptor objects. Anything else,
/// including a single object, is rejected.
pub fn parse_coin_data(body: &[u8]) -> Result<Vec<CoinDescriptor>, serde_json::Error> {
    serde_json::from_slice(body)
}
