//! HTML page handlers.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::super::template_structs::{index_page, PAGE_TITLE};

/// Index page hosting the coin background.
pub async fn index() -> Response {
    match index_page(PAGE_TITLE) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render index page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}
