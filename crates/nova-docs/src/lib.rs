//! Content resolution and page assembly for the Supernova documentation.
//!
//! Given a [`Slug`] (the URL path after `/docs/`), [`DocSite::render`]
//! locates the markdown document for it, renders it, and attaches a display
//! title and breadcrumb trail. Slugs naming a directory without an index
//! render as a listing of the directory's children.
//!
//! The pieces are usable on their own:
//! - [`Locator`]: ordered chain of [`LocateStrategy`] values
//! - [`list_directory`]: renderable children of a directory
//! - [`breadcrumbs`], [`display_title`], [`humanize`]: labels and trails
//! - [`generate_static_params`]: every slug to pre-render
//! - [`categories`] and [`navigation`]: landing page and sidebar data
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use nova_docs::{DocSite, SiteConfig, Slug};
//! use nova_storage::FsStorage;
//!
//! let storage = Arc::new(FsStorage::new(PathBuf::from("docs/nova-docs")));
//! let site = DocSite::new(storage, SiteConfig::default());
//!
//! let doc = site.render(&Slug::parse("governance/tokenomics")?)?;
//! println!("{}", doc.title);
//! # Ok(())
//! # }
//! ```

mod breadcrumb;
mod categories;
mod error;
mod listing;
mod locator;
mod navigation;
mod params;
mod site;
mod slug;
pub mod template;

pub use breadcrumb::{Breadcrumb, breadcrumbs};
pub use categories::{Category, categories};
pub use error::DocError;
pub use listing::{DirectoryListing, DocEntry, list_directory};
pub use locator::{
    ALIASES, AliasStrategy, DEFAULT_OVERVIEW_PATH, DirectFileStrategy, DirectoryIndexStrategy,
    LocateStrategy, LocatedDoc, Locator, OverviewStrategy, RecursiveSearchStrategy,
};
pub use navigation::{NavItem, navigation};
pub use params::generate_static_params;
pub use site::{DocBody, DocSite, RenderedDoc, SiteConfig};
pub use slug::{OVERVIEW_SEGMENT, Slug, SlugError, display_title, humanize};

pub use nova_renderer::TocEntry;
