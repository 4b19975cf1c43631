//! HTTP server for Supernova documentation.
//!
//! Serves the rendered documentation site with axum:
//! - HTML pages under `/docs` (landing page, documents, directory listings)
//! - JSON endpoints under `/api` for documents, navigation and static params
//!
//! Every request reads the documentation tree afresh, so edits show up on the
//! next page load without a restart.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use nova_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         source_dir: PathBuf::from("docs/nova-docs"),
//!         version: "1.0.0".to_owned(),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

use nova_docs::{DEFAULT_OVERVIEW_PATH, DocSite, SiteConfig};
use nova_storage::{FsStorage, Storage};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Documentation source directory.
    pub source_dir: PathBuf,
    /// Overview document, relative to `source_dir`.
    pub overview_path: String,
    /// Base URL for "Edit this page" links.
    pub edit_base_url: Option<String>,
    /// Application version (mixed into `ETag`s).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3000,
            source_dir: PathBuf::from("docs/nova-docs"),
            overview_path: DEFAULT_OVERVIEW_PATH.to_owned(),
            edit_base_url: None,
            version: String::new(),
        }
    }
}

impl ServerConfig {
    fn site_config(&self) -> SiteConfig {
        SiteConfig {
            overview_path: self.overview_path.clone(),
            edit_base_url: self.edit_base_url.clone(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the listener can't be bound or the server fails.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    if !config.source_dir.is_dir() {
        tracing::warn!(
            source_dir = %config.source_dir.display(),
            "Documentation directory does not exist"
        );
    }

    let storage: Arc<dyn Storage> = Arc::new(FsStorage::new(config.source_dir.clone()));
    let state = Arc::new(AppState {
        site: DocSite::new(storage, config.site_config()),
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from a loaded `nova.toml`.
#[must_use]
pub fn server_config_from_nova_config(config: &nova_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.docs_resolved.source_dir.clone(),
        overview_path: config.docs_resolved.overview.clone(),
        edit_base_url: config.docs_resolved.edit_base_url.clone(),
        version,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_server_config_from_nova_config() {
        let mut config = nova_config::Config::default();
        config.server.port = 8080;
        config.docs_resolved.edit_base_url = Some("https://example.com/edit".to_owned());

        let server = server_config_from_nova_config(&config, "1.2.3".to_owned());

        assert_eq!(server.port, 8080);
        assert_eq!(server.version, "1.2.3");
        assert_eq!(server.overview_path, "overview/introduction.md");
        assert_eq!(
            server.site_config().edit_base_url.as_deref(),
            Some("https://example.com/edit")
        );
    }
}
