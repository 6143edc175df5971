//! Static asset constants.

/// Stylesheet animating `.coin` elements inside `.coin-background`.
pub const CSS: &str = include_str!("coins.css");
