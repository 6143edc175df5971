//! coinfall - decorative falling-coin background.
//!
//! Fetches a list of coin descriptors from `/coin-data` and renders each one
//! as an animated `div.coin` inside the page's `.coin-background` container.
//! The same pipeline runs in the browser (wasm32, through `web-sys`) and
//! natively against an in-memory page, next to a small development host
//! that serves the page, stylesheet and coin data.

pub mod fetch;
pub mod models;
pub mod pipeline;
pub mod render;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;

#[cfg(target_arch = "wasm32")]
mod web;

pub use models::CoinDescriptor;
pub use pipeline::{fetch_and_render, PipelineError};
pub use render::{render_coins, CoinContainer, CoinHost, RenderError};
