//! Coin descriptor endpoint.

use axum::{extract::State, response::IntoResponse, Json};

use super::super::AppState;

/// Serve a freshly generated batch of coin descriptors.
pub async fn coin_data(State(state): State<AppState>) -> impl IntoResponse {
    let coins = state.generator.generate();
    tracing::debug!("Serving {} coins", coins.len());
    Json(coins)
}
