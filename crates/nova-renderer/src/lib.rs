//! Markdown to HTML renderer for documentation pages.
//!
//! This crate provides [`MarkdownRenderer`], an event-driven renderer over
//! [`pulldown_cmark`] that produces the article body of a documentation page.
//!
//! On top of standard CommonMark + GFM output it:
//! - wraps every table in a `<div class="markdown-table">` container while the
//!   table events are emitted, and prepends [`TABLE_STYLES`] once when the
//!   document contains a table
//! - assigns slug ids to headings and collects a table of contents
//! - rewrites relative `.md` links to `/docs/...` URLs
//!
//! # Example
//!
//! ```
//! use nova_renderer::MarkdownRenderer;
//!
//! let result = MarkdownRenderer::new()
//!     .with_base_path("governance")
//!     .render_markdown("## Supply\n\n| Year | Emission |\n|---|---|\n| 1 | 10% |");
//!
//! assert!(result.html.contains(r#"<div class="markdown-table"><table>"#));
//! assert_eq!(result.toc[0].id, "supply");
//! ```

mod html;
mod renderer;
mod state;
mod table;

pub use html::{escape_html, resolve_link};
pub use renderer::{MarkdownRenderer, RenderResult};
pub use state::TocEntry;
pub use table::{TABLE_STYLES, TABLE_WRAPPER_CLASS};
