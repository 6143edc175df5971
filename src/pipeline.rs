//! The fetch → parse → render pass run once per page load, and the page
//! state that decides when it starts.

use thiserror::Error;

use crate::fetch::{CoinSource, FetchError};
use crate::render::{render_coins, CoinHost, RenderError};

/// Any failure of the pipeline. Nothing is retried and no fallback coins
/// are rendered; callers only report it.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Fetch descriptors from `source` and render them into `host`.
///
/// Rendering starts only after the whole response has been parsed, so a
/// failed fetch leaves the page untouched. Returns the number of coins
/// appended.
pub async fn fetch_and_render<S, H>(source: &S, host: H) -> Result<usize, PipelineError>
where
    S: CoinSource + ?Sized,
    H: CoinHost,
{
    let coins = source.fetch_coins().await?;
    Ok(render_coins(host, &coins)?)
}

/// Loading state of the page hosting the coins, as `document.readyState`
/// reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Loading,
    Interactive,
    Complete,
}

/// When the pipeline starts relative to the page becoming ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The document is parsed; run right away.
    Now,
    /// Wait for `DOMContentLoaded`.
    OnContentLoaded,
}

impl Trigger {
    /// A script started after `DOMContentLoaded` has fired would never see
    /// the event, so only a still-loading page waits for it.
    pub fn for_state(state: PageState) -> Self {
        match state {
            PageState::Loading => Trigger::OnContentLoaded,
            PageState::Interactive | PageState::Complete => Trigger::Now,
        }
    }
}
