//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Error returned by the JSON API handlers.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// No document matches the requested slug.
    #[error("Page not found: {0}")]
    PageNotFound(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PageNotFound(slug) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Page not found", "slug": slug}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
