//! HTTP request handlers for the development host.

mod api;
mod coin_data;
mod pages;
mod static_files;

// Re-export handlers for use by the router
pub use api::health;
pub use coin_data::coin_data;
pub use pages::index;
pub use static_files::serve_css;
