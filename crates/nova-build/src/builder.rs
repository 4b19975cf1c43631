//! Static site builder.
//!
//! Pre-renders every slug from [`DocSite::static_params`] into
//! `docs/{slug}/index.html`, plus the landing page and a `404.html`.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use nova_docs::{DocSite, SiteConfig, Slug};
use nova_storage::Storage;

/// Configuration for static site building.
#[derive(Clone, Debug, Default)]
pub struct BuildConfig {
    /// Site configuration used to render every page.
    pub site: SiteConfig,
}

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a build.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Pages written, including the landing and not-found pages.
    pub pages_written: usize,
    /// Slugs that failed to render and were left out.
    pub skipped: Vec<Slug>,
}

/// Builds a static documentation site from a storage backend.
pub struct StaticSiteBuilder {
    site: DocSite,
}

impl StaticSiteBuilder {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, config: BuildConfig) -> Self {
        Self {
            site: DocSite::new(storage, config.site),
        }
    }

    /// Render the whole site into `output_dir`.
    ///
    /// A page that fails to render is logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Io`] if the output directory can't be written.
    pub fn build(&self, output_dir: &Path) -> Result<BuildReport, BuildError> {
        let mut report = BuildReport::default();
        let docs_dir = output_dir.join("docs");
        fs::create_dir_all(&docs_dir)?;

        write_page(&docs_dir.join("index.html"), &self.site.landing_html())?;
        write_page(&output_dir.join("404.html"), &self.site.not_found_html())?;
        report.pages_written += 2;

        // The landing page owns `docs/index.html`; a slug may be listed twice
        // when a directory also has an `index.md`.
        let mut seen = HashSet::new();
        for slug in self.site.static_params() {
            if slug.is_empty() || !seen.insert(slug.clone()) {
                continue;
            }
            match self.site.page_html(&slug) {
                Ok(html) => {
                    write_page(&page_path(&docs_dir, &slug), &html)?;
                    report.pages_written += 1;
                }
                Err(e) => {
                    tracing::warn!(slug = %slug, error = %e, "Skipping page that failed to render");
                    report.skipped.push(slug);
                }
            }
        }

        tracing::info!(
            pages = report.pages_written,
            skipped = report.skipped.len(),
            output = %output_dir.display(),
            "Static site built"
        );
        Ok(report)
    }
}

fn page_path(docs_dir: &Path, slug: &Slug) -> PathBuf {
    let mut path = docs_dir.to_path_buf();
    path.extend(slug.segments());
    path.join("index.html")
}

fn write_page(path: &Path, html: &str) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;
    Ok(())
}
