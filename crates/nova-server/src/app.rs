//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/docs/{*slug}", get(handlers::docs::get_doc))
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route("/api/params", get(handlers::params::get_params));

    let page_routes = Router::new()
        .route("/", get(handlers::pages::redirect_root))
        .route("/docs", get(handlers::pages::get_landing))
        .route("/docs/{*slug}", get(handlers::pages::get_page));

    Router::new()
        .merge(api_routes)
        .merge(page_routes)
        .layer(
            ServiceBuilder::new()
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
