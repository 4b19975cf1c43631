//! HTML page template.
//!
//! Produces complete documents for the dark documentation theme: sidebar
//! navigation, breadcrumbs, article or listing body, and footer links.

use std::fmt::Write;

use nova_renderer::{TocEntry, escape_html as escape};

use crate::breadcrumb::Breadcrumb;
use crate::categories::Category;
use crate::listing::DocEntry;
use crate::navigation::NavItem;
use crate::site::{DocBody, RenderedDoc};

/// Suffix of every page `<title>`.
const SITE_TITLE: &str = "Supernova Documentation";

const PAGE_STYLES: &str = r"<style>
body { margin: 0; background: #111827; color: #F9FAFB; font-family: system-ui, sans-serif; }
a { color: #60A5FA; text-decoration: none; }
a:hover { color: #93C5FD; }
.layout { display: flex; min-height: 100vh; }
.sidebar { width: 18rem; padding: 1rem; border-right: 1px solid #1F2937; overflow-y: auto; }
.sidebar ul { list-style: none; padding-left: 0.75rem; margin: 0; }
.sidebar .section { font-weight: 600; color: #60A5FA; margin-top: 0.5rem; }
.content { flex: 1; padding: 2rem; max-width: 64rem; }
.breadcrumbs { color: #9CA3AF; margin-bottom: 1.5rem; }
.breadcrumbs span + span::before { content: '/'; margin: 0 0.5rem; }
.card { background: #1F2937; border: 1px solid #374151; border-radius: 0.5rem; padding: 1.5rem; }
.card.highlight { border-color: #1D4ED8; background: linear-gradient(135deg, #1F2937, #1E3A8A); }
.badge { display: inline-block; background: #2563EB; color: #FFF; font-size: 0.75rem; padding: 0.125rem 0.5rem; border-radius: 0.25rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1.5rem; }
.button { display: inline-block; background: #2563EB; color: #FFF; padding: 0.75rem 1.5rem; border-radius: 0.375rem; }
.page-footer { margin-top: 3rem; padding-top: 1rem; border-top: 1px solid #374151; display: flex; justify-content: space-between; }
</style>
";

/// Render a document or directory listing page.
#[must_use]
pub fn document_page(doc: &RenderedDoc, navigation: &[NavItem], edit_url: Option<&str>) -> String {
    let mut html = String::with_capacity(8192);
    open_document(&mut html, &format!("{} - {SITE_TITLE}", doc.title), navigation);

    render_breadcrumbs(&mut html, &doc.breadcrumbs);
    let _ = writeln!(html, "<h1>{}</h1>", escape(&doc.title));

    match &doc.body {
        DocBody::Article { html: body, toc, .. } => {
            render_toc(&mut html, toc);
            html.push_str("<article class=\"prose\">\n");
            html.push_str(body);
            html.push_str("\n</article>\n");
        }
        DocBody::Listing { entries } => render_listing(&mut html, &doc.title, entries),
    }

    html.push_str("<footer class=\"page-footer\">\n");
    html.push_str("<a href=\"/docs\">&larr; Back to Documentation</a>\n");
    if let Some(url) = edit_url {
        let _ = writeln!(
            html,
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Edit this page on GitHub</a>",
            escape(url)
        );
    }
    html.push_str("</footer>\n");

    close_document(&mut html);
    html
}

/// Render the documentation landing page.
#[must_use]
pub fn landing_page(categories: &[Category], navigation: &[NavItem]) -> String {
    let mut html = String::with_capacity(8192);
    open_document(&mut html, SITE_TITLE, navigation);

    html.push_str("<section class=\"card\">\n");
    let _ = writeln!(html, "<h1>{SITE_TITLE}</h1>");
    html.push_str(
        "<p>Welcome to the official Supernova documentation. This guide provides \
         comprehensive information about Supernova, a Proof of Work chain written in \
         Rust with a focus on quantum resistance and environmental sustainability.</p>\n",
    );
    html.push_str("<a class=\"button\" href=\"/docs/overview\">Get Started with Supernova</a>\n");
    html.push_str("</section>\n");

    html.push_str("<h2>Documentation Categories</h2>\n<div class=\"grid\">\n");
    for category in categories {
        let class = if category.highlight {
            "card highlight"
        } else {
            "card"
        };
        let _ = writeln!(html, "<div class=\"{class}\">");
        if category.highlight {
            html.push_str("<span class=\"badge\">New</span>\n");
        }
        let _ = writeln!(html, "<h3>{}</h3>", escape(&category.title));
        let _ = writeln!(html, "<p>{}</p>", escape(&category.description));
        let _ = writeln!(
            html,
            "<a href=\"{}\">Browse {} &rarr;</a>",
            escape(&category.link),
            escape(&category.title)
        );
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");

    close_document(&mut html);
    html
}

/// Render the page shown for unknown slugs.
#[must_use]
pub fn not_found_page(navigation: &[NavItem]) -> String {
    let mut html = String::with_capacity(4096);
    open_document(
        &mut html,
        &format!("Documentation Not Found - {SITE_TITLE}"),
        navigation,
    );

    html.push_str("<section class=\"card\">\n");
    html.push_str("<h1>Documentation Not Found</h1>\n");
    html.push_str(
        "<p>Sorry, the documentation page you were looking for doesn&#x27;t exist \
         or may have been moved.</p>\n",
    );
    html.push_str("<a class=\"button\" href=\"/docs\">Return to Documentation</a>\n");
    html.push_str("</section>\n");

    close_document(&mut html);
    html
}

fn open_document(html: &mut String, title: &str, navigation: &[NavItem]) {
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape(title));
    html.push_str(PAGE_STYLES);
    html.push_str("</head>\n<body>\n<div class=\"layout\">\n");
    render_sidebar(html, navigation);
    html.push_str("<main class=\"content\">\n");
}

fn close_document(html: &mut String) {
    html.push_str("</main>\n</div>\n</body>\n</html>");
}

fn render_sidebar(html: &mut String, items: &[NavItem]) {
    html.push_str("<aside class=\"sidebar\">\n");
    html.push_str("<a href=\"/docs\"><h2>Documentation</h2></a>\n");
    html.push_str("<nav>\n<ul>\n<li><a href=\"/docs\">Overview</a></li>\n");
    render_nav_items(html, items);
    html.push_str("</ul>\n</nav>\n</aside>\n");
}

fn render_nav_items(html: &mut String, items: &[NavItem]) {
    for item in items {
        if item.is_directory {
            let _ = writeln!(
                html,
                "<li><div class=\"section\">{}</div>",
                escape(&item.name)
            );
            if !item.children.is_empty() {
                html.push_str("<ul>\n");
                render_nav_items(html, &item.children);
                html.push_str("</ul>\n");
            }
            html.push_str("</li>\n");
        } else {
            let _ = writeln!(
                html,
                "<li><a href=\"/docs/{}\">{}</a></li>",
                escape(&item.path),
                escape(&item.name)
            );
        }
    }
}

fn render_breadcrumbs(html: &mut String, breadcrumbs: &[Breadcrumb]) {
    html.push_str("<nav class=\"breadcrumbs\">");
    let last = breadcrumbs.len().saturating_sub(1);
    for (i, crumb) in breadcrumbs.iter().enumerate() {
        if i == last {
            let _ = write!(html, "<span>{}</span>", escape(&crumb.name));
        } else {
            let _ = write!(
                html,
                "<span><a href=\"{}\">{}</a></span>",
                escape(&crumb.path),
                escape(&crumb.name)
            );
        }
    }
    html.push_str("</nav>\n");
}

fn render_toc(html: &mut String, toc: &[TocEntry]) {
    if toc.is_empty() {
        return;
    }
    html.push_str("<nav class=\"toc\">\n<ul>\n");
    for entry in toc {
        let _ = writeln!(
            html,
            "<li class=\"toc-level-{}\"><a href=\"#{}\">{}</a></li>",
            entry.level,
            escape(&entry.id),
            escape(&entry.title)
        );
    }
    html.push_str("</ul>\n</nav>\n");
}

fn render_listing(html: &mut String, title: &str, entries: &[DocEntry]) {
    let _ = writeln!(
        html,
        "<p>Browse documentation in the {} section:</p>",
        escape(title)
    );
    html.push_str("<div class=\"grid\">\n");
    for entry in entries {
        let icon = if entry.is_directory { "&#128193;" } else { "&#128196;" };
        let _ = writeln!(
            html,
            "<a class=\"card\" href=\"/docs/{}\">{icon} {}</a>",
            escape(&entry.path),
            escape(&entry.name)
        );
    }
    html.push_str("</div>\n");
}
