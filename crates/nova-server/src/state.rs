//! Application state.
//!
//! Shared state for all request handlers.

use nova_docs::DocSite;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Documentation site over the source directory.
    pub(crate) site: DocSite,
    /// Application version for `ETag` computation.
    pub(crate) version: String,
}
