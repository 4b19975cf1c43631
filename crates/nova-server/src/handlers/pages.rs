//! HTML page endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use nova_docs::{DocError, Slug};

use crate::handlers::cached_html;
use crate::state::AppState;

/// Handle GET /.
pub(crate) async fn redirect_root() -> Redirect {
    Redirect::temporary("/docs")
}

/// Handle GET /docs (landing page).
pub(crate) async fn get_landing(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    cached_html(&state.version, &headers, state.site.landing_html())
}

/// Handle GET /docs/{*slug}.
///
/// Unknown slugs get the not-found page with a 404 status.
pub(crate) async fn get_page(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    let page = Slug::parse(&slug)
        .map_err(DocError::from)
        .and_then(|parsed| state.site.page_html(&parsed));

    match page {
        Ok(html) => cached_html(&state.version, &headers, html),
        Err(e) => {
            tracing::debug!(slug = %slug, error = %e, "Serving not-found page");
            (StatusCode::NOT_FOUND, Html(state.site.not_found_html())).into_response()
        }
    }
}
