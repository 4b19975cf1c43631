//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod params;
pub(crate) mod render;
pub(crate) mod serve;

pub(crate) use build::BuildArgs;
pub(crate) use params::ParamsArgs;
pub(crate) use render::RenderArgs;
pub(crate) use serve::ServeArgs;

use std::path::Path;
use std::sync::Arc;

use nova_config::Config;
use nova_docs::{DocSite, SiteConfig};
use nova_storage::{FsStorage, Storage};

/// Site settings from a loaded configuration.
pub(crate) fn site_config(config: &Config) -> SiteConfig {
    SiteConfig {
        overview_path: config.docs_resolved.overview.clone(),
        edit_base_url: config.docs_resolved.edit_base_url.clone(),
    }
}

/// Filesystem storage over the configured docs directory.
pub(crate) fn storage(source_dir: &Path) -> Arc<dyn Storage> {
    Arc::new(FsStorage::new(source_dir.to_path_buf()))
}

/// Documentation site over the configured docs directory.
pub(crate) fn doc_site(config: &Config) -> DocSite {
    DocSite::new(
        storage(&config.docs_resolved.source_dir),
        site_config(config),
    )
}
