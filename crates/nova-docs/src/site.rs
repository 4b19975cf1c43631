//! Render-by-slug entry point.

use std::sync::Arc;

use nova_renderer::{MarkdownRenderer, TocEntry};
use nova_storage::Storage;
use serde::Serialize;

use crate::breadcrumb::{Breadcrumb, breadcrumbs};
use crate::categories::{Category, categories};
use crate::error::DocError;
use crate::listing::{DirectoryListing, DocEntry, list_directory};
use crate::locator::{DEFAULT_OVERVIEW_PATH, LocatedDoc, Locator};
use crate::navigation::{NavItem, navigation};
use crate::params::generate_static_params;
use crate::slug::{Slug, display_title};
use crate::template;

/// Configuration for [`DocSite`].
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Document served for `["overview"]`, relative to the docs root.
    pub overview_path: String,
    /// Base URL for "Edit this page" links; the source path is appended.
    ///
    /// If `None`, no edit link is rendered.
    pub edit_base_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            overview_path: DEFAULT_OVERVIEW_PATH.to_owned(),
            edit_base_url: None,
        }
    }
}

/// Content of a rendered page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocBody {
    /// A markdown document.
    Article {
        html: String,
        /// Source file relative to the docs root.
        source: String,
        toc: Vec<TocEntry>,
    },
    /// A directory without an index document.
    Listing { entries: Vec<DocEntry> },
}

/// A page ready for templating.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedDoc {
    pub title: String,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub body: DocBody,
}

/// Documentation site over a [`Storage`] root.
///
/// Every call reads the storage afresh; nothing is cached between requests.
pub struct DocSite {
    storage: Arc<dyn Storage>,
    locator: Locator,
    config: SiteConfig,
}

impl DocSite {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, config: SiteConfig) -> Self {
        let locator = Locator::new(config.overview_path.clone());
        Self {
            storage,
            locator,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Render the page for a request path such as `"governance/tokenomics"`.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::InvalidSlug`] if the path is not a valid slug, or
    /// [`DocError::NotFound`] as described for [`render`](Self::render).
    pub fn render_path(&self, path: &str) -> Result<RenderedDoc, DocError> {
        self.render(&Slug::parse(path)?)
    }

    /// Render the page for `slug`.
    ///
    /// Tries the Content Locator first, then a directory listing.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::NotFound`] if neither a document nor a listable
    /// directory matches.
    pub fn render(&self, slug: &Slug) -> Result<RenderedDoc, DocError> {
        let title = display_title(slug);
        let breadcrumbs = breadcrumbs(slug);

        let body = match self.locator.locate(self.storage.as_ref(), slug) {
            Ok(doc) => Self::render_article(doc),
            Err(DocError::NotFound { .. }) if !slug.is_empty() => self.render_listing(slug)?,
            Err(e) => return Err(e),
        };

        Ok(RenderedDoc {
            title,
            breadcrumbs,
            body,
        })
    }

    fn render_article(doc: LocatedDoc) -> DocBody {
        let base_dir = doc.source.rsplit_once('/').map_or("", |(dir, _)| dir);
        let result = MarkdownRenderer::new()
            .with_base_path(base_dir)
            .render_markdown(&doc.content);
        DocBody::Article {
            html: result.html,
            source: doc.source,
            toc: result.toc,
        }
    }

    fn render_listing(&self, slug: &Slug) -> Result<DocBody, DocError> {
        let DirectoryListing { entries, has_index } = list_directory(self.storage.as_ref(), slug)?;
        if has_index || entries.is_empty() {
            return Err(DocError::not_found(slug));
        }
        Ok(DocBody::Listing { entries })
    }

    /// Locate the markdown source for `slug` without rendering it.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::NotFound`] if no strategy finds a document.
    pub fn locate(&self, slug: &Slug) -> Result<LocatedDoc, DocError> {
        self.locator.locate(self.storage.as_ref(), slug)
    }

    /// Sidebar navigation tree.
    #[must_use]
    pub fn navigation(&self) -> Vec<NavItem> {
        navigation(self.storage.as_ref())
    }

    /// Landing page categories.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        categories(self.storage.as_ref())
    }

    /// Every slug the static site pre-renders.
    #[must_use]
    pub fn static_params(&self) -> Vec<Slug> {
        generate_static_params(self.storage.as_ref())
    }

    /// "Edit this page" URL for a source path, if an edit base URL is configured.
    #[must_use]
    pub fn edit_url(&self, source: &str) -> Option<String> {
        self.config
            .edit_base_url
            .as_deref()
            .map(|base| format!("{}/{source}", base.trim_end_matches('/')))
    }

    /// Full HTML page for `slug`.
    ///
    /// # Errors
    ///
    /// Same as [`render`](Self::render).
    pub fn page_html(&self, slug: &Slug) -> Result<String, DocError> {
        let doc = self.render(slug)?;
        let edit_url = match &doc.body {
            DocBody::Article { source, .. } => self.edit_url(source),
            DocBody::Listing { .. } => None,
        };
        Ok(template::document_page(
            &doc,
            &self.navigation(),
            edit_url.as_deref(),
        ))
    }

    /// Full HTML of the landing page.
    #[must_use]
    pub fn landing_html(&self) -> String {
        template::landing_page(&self.categories(), &self.navigation())
    }

    /// Full HTML of the not-found page.
    #[must_use]
    pub fn not_found_html(&self) -> String {
        template::not_found_page(&self.navigation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_renderer::TABLE_STYLES;
    use nova_storage::MockStorage;
    use pretty_assertions::assert_eq;

    fn site(storage: MockStorage) -> DocSite {
        DocSite::new(Arc::new(storage), SiteConfig::default())
    }

    fn slug(path: &str) -> Slug {
        Slug::parse(path).unwrap()
    }

    fn supernova_docs() -> MockStorage {
        MockStorage::new()
            .with_file(
                "overview/introduction.md",
                "# Introduction\n\nSee the [roadmap](./roadmap.md).",
            )
            .with_file("overview/roadmap.md", "# Roadmap")
            .with_file("overview.md", "# Stray overview")
            .with_file(
                "governance/tokenomics.md",
                "# Tokenomics\n\n## Supply\n\n| Year | Emission |\n|---|---|\n| 1 | 10% |",
            )
            .with_file("governance/foundation.md", "# Foundation")
            .with_file("technical-docs/a.md", "# A")
            .with_file("technical-docs/B.md", "# B")
            .with_dir("technical-docs/sub")
            .with_file("node-operation/index.md", "# Node Operation")
            .with_file("node-operation/installation-guide.md", "# Install")
    }

    #[test]
    fn test_overview_served_from_introduction() {
        let doc = site(supernova_docs()).render(&slug("overview")).unwrap();

        assert_eq!(doc.title, "Overview");
        let DocBody::Article { html, source, .. } = doc.body else {
            panic!("expected article");
        };
        assert_eq!(source, "overview/introduction.md");
        assert!(html.contains("Introduction"));
        assert!(html.contains(r#"href="/docs/overview/roadmap""#));
        assert!(!html.contains("Stray"));
    }

    #[test]
    fn test_direct_file_with_table() {
        let doc = site(supernova_docs())
            .render(&slug("governance/tokenomics"))
            .unwrap();

        assert_eq!(doc.title, "Governance - Tokenomics");
        assert_eq!(doc.breadcrumbs.len(), 3);
        assert_eq!(doc.breadcrumbs[2].path, "/docs/governance/tokenomics");
        let DocBody::Article { html, toc, .. } = doc.body else {
            panic!("expected article");
        };
        assert!(html.starts_with(TABLE_STYLES));
        assert!(html.contains(r#"<div class="markdown-table"><table>"#));
        assert_eq!(toc.len(), 1);
        assert_eq!(toc[0].id, "supply");
    }

    #[test]
    fn test_alias_resolves() {
        let doc = site(supernova_docs()).render(&slug("foundation")).unwrap();

        assert_eq!(doc.title, "Foundation");
        assert!(matches!(
            doc.body,
            DocBody::Article { ref source, .. } if source == "governance/foundation.md"
        ));
    }

    #[test]
    fn test_directory_listing() {
        let doc = site(supernova_docs())
            .render(&slug("technical-docs"))
            .unwrap();

        let DocBody::Listing { entries } = doc.body else {
            panic!("expected listing");
        };
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Sub", "A", "B"]);
    }

    #[test]
    fn test_directory_with_index_renders_index() {
        let doc = site(supernova_docs())
            .render(&slug("node-operation"))
            .unwrap();

        assert!(matches!(
            doc.body,
            DocBody::Article { ref source, .. } if source == "node-operation/index.md"
        ));
    }

    #[test]
    fn test_not_found() {
        let err = site(supernova_docs())
            .render(&slug("nonexistent-topic"))
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(err, DocError::NotFound { ref slug } if slug == "nonexistent-topic"));
    }

    #[test]
    fn test_empty_directory_not_found() {
        let storage = supernova_docs().with_dir("drafts");

        assert!(site(storage).render(&slug("drafts")).is_err());
    }

    #[test]
    fn test_root_is_not_a_document() {
        assert!(site(supernova_docs()).render(&Slug::default()).is_err());
    }

    #[test]
    fn test_render_path_rejects_traversal() {
        let err = site(supernova_docs())
            .render_path("../secrets")
            .unwrap_err();

        assert!(matches!(err, DocError::InvalidSlug(_)));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_breadcrumbs_match_slug_length() {
        let site = site(supernova_docs());
        for path in ["overview", "governance/tokenomics", "technical-docs"] {
            let slug = slug(path);
            let doc = site.render(&slug).unwrap();
            assert_eq!(doc.breadcrumbs.len(), slug.len() + 1);
        }
    }

    #[test]
    fn test_edit_url() {
        let site = DocSite::new(
            Arc::new(supernova_docs()),
            SiteConfig {
                edit_base_url: Some(
                    "https://github.com/mjohnson518/supernova/edit/main/docs/".to_owned(),
                ),
                ..SiteConfig::default()
            },
        );

        assert_eq!(
            site.edit_url("governance/tokenomics.md").as_deref(),
            Some("https://github.com/mjohnson518/supernova/edit/main/docs/governance/tokenomics.md")
        );
        let html = site.page_html(&slug("governance/tokenomics")).unwrap();
        assert!(html.contains("Edit this page on GitHub"));
    }

    #[test]
    fn test_no_edit_url_by_default() {
        let site = site(supernova_docs());

        assert_eq!(site.edit_url("a.md"), None);
        let html = site.page_html(&slug("governance/tokenomics")).unwrap();
        assert!(!html.contains("Edit this page"));
    }

    #[test]
    fn test_rendered_doc_json_shape() {
        let doc = site(supernova_docs())
            .render(&slug("technical-docs"))
            .unwrap();
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["title"], "Technical-docs");
        assert_eq!(json["body"]["type"], "listing");
        assert_eq!(json["body"]["entries"][0]["path"], "technical-docs/sub");
        assert_eq!(json["breadcrumbs"][1]["name"], "Technical-docs");
    }

    #[test]
    fn test_static_params_all_render() {
        let site = site(supernova_docs());

        for slug in site.static_params() {
            if slug.to_path() == "technical-docs/sub" {
                // Empty directories are enumerated but have nothing to show.
                continue;
            }
            assert!(site.render(&slug).is_ok(), "{slug} failed to render");
        }
    }
}
