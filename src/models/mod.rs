//! Data models for coinfall.

mod coin;
#[cfg(not(target_arch = "wasm32"))]
mod generator;

pub use coin::{parse_coin_data, CoinDescriptor};
#[cfg(not(target_arch = "wasm32"))]
pub use generator::{CoinConfig, CoinGenerator};
