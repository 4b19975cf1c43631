//! Documents API endpoint.
//!
//! Returns the rendered document (or directory listing) for a slug as JSON.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use nova_docs::RenderedDoc;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /api/docs/{*slug}.
pub(crate) async fn get_doc(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<RenderedDoc>, ServerError> {
    state
        .site
        .render_path(&slug)
        .map(Json)
        .map_err(|e| {
            tracing::debug!(slug = %slug, error = %e, "Document not found");
            ServerError::PageNotFound(slug.clone())
        })
}
