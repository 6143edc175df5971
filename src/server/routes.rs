//! Router configuration for the development host.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let pkg = ServeDir::new(&state.pkg_dir);

    Router::new()
        .route("/", get(handlers::index))
        .route("/coin-data", get(handlers::coin_data))
        .route("/health", get(handlers::health))
        // Static assets
        .route("/static/coins.css", get(handlers::serve_css))
        // Browser build (wasm-bindgen output)
        .nest_service("/pkg", pkg)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
