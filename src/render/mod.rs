//! Coin rendering.
//!
//! Turns a sequence of coin descriptors into `div.coin` elements appended to
//! the page's `.coin-background` container. The page is abstracted behind
//! [`CoinHost`] so the same pass drives a parsed page natively (`dom`) and,
//! in the browser build, the live document.

#[cfg(not(target_arch = "wasm32"))]
pub mod dom;

use thiserror::Error;

use crate::models::CoinDescriptor;

/// Selector of the element hosting all coins.
pub const CONTAINER_SELECTOR: &str = ".coin-background";

/// Class name given to every coin element; the stylesheet animates it.
pub const COIN_CLASS: &str = "coin";

/// Tag of every coin element.
pub const COIN_TAG: &str = "div";

/// Errors that can occur while rendering coins into a page.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Container not found: {0}")]
    ContainerMissing(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// A page that may contain the coin container.
///
/// The lookup consumes the host so that implementations can hand out a
/// container borrowing from it for the rest of the pass.
pub trait CoinHost {
    type Container: CoinContainer;

    /// Find the first element matching `selector`.
    fn query_container(self, selector: &str) -> Result<Option<Self::Container>, RenderError>;
}

/// The element coins are appended to.
pub trait CoinContainer {
    /// Create one coin element and append it as the last child.
    fn append_coin(&mut self, coin: &CoinDescriptor) -> Result<(), RenderError>;
}

/// Append one coin element per descriptor, in order.
///
/// The container is looked up once up front but only required when the
/// first coin is appended, so an empty batch on a page without a container
/// completes without touching the page. Returns the number of coins
/// appended.
pub fn render_coins<H: CoinHost>(host: H, coins: &[CoinDescriptor]) -> Result<usize, RenderError> {
    let mut container = host.query_container(CONTAINER_SELECTOR)?;

    for coin in coins {
        let container = container
            .as_mut()
            .ok_or_else(|| RenderError::ContainerMissing(CONTAINER_SELECTOR.to_string()))?;
        container.append_coin(coin)?;
    }

    tracing::debug!("Rendered {} coins into {}", coins.len(), CONTAINER_SELECTOR);
    Ok(coins.len())
}
