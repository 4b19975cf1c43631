//! Static params API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use nova_docs::Slug;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/params.
#[derive(Serialize)]
pub(crate) struct ParamsResponse {
    /// Every slug the static site pre-renders, as segment arrays.
    params: Vec<Slug>,
}

/// Handle GET /api/params.
pub(crate) async fn get_params(State(state): State<Arc<AppState>>) -> Json<ParamsResponse> {
    Json(ParamsResponse {
        params: state.site.static_params(),
    })
}
