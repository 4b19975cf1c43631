//! Landing page categories.

use nova_storage::Storage;
use serde::Serialize;

use crate::listing::is_hidden;
use crate::slug::humanize;

/// Priority assigned to categories derived from top-level directories.
const FALLBACK_PRIORITY: u32 = 100;

/// A card on the documentation landing page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Category {
    pub title: String,
    pub description: String,
    /// Absolute URL the card links to.
    pub link: String,
    /// Lower sorts first.
    pub priority: u32,
    /// Rendered with a "New" badge.
    pub highlight: bool,
}

struct PrimaryCategory {
    title: &'static str,
    description: &'static str,
    link: &'static str,
    directory: &'static str,
    priority: u32,
    highlight: bool,
}

const PRIMARY_CATEGORIES: &[PrimaryCategory] = &[
    PrimaryCategory {
        title: "Project Overview",
        description: "Introduction to Supernova, its purpose, and architecture",
        link: "/docs/overview",
        directory: "overview",
        priority: 1,
        highlight: false,
    },
    PrimaryCategory {
        title: "Roadmap",
        description: "Our ambitious development timeline for security, scalability, and sustainability",
        link: "/docs/overview/roadmap",
        directory: "overview",
        priority: 2,
        highlight: true,
    },
    PrimaryCategory {
        title: "Technical Documentation",
        description: "Technical specifications and implementation details",
        link: "/docs/technical-docs",
        directory: "technical-docs",
        priority: 3,
        highlight: false,
    },
    PrimaryCategory {
        title: "Developer Guide",
        description: "Resources and guides for developers building on the Supernova platform",
        link: "/docs/developers",
        directory: "developers",
        priority: 4,
        highlight: false,
    },
    PrimaryCategory {
        title: "Node Operation",
        description: "Instructions for running and maintaining Supernova nodes",
        link: "/docs/node-operation",
        directory: "node-operation",
        priority: 5,
        highlight: false,
    },
    PrimaryCategory {
        title: "Environmental Features",
        description: "Documentation about Supernova's carbon-negative approach and environmental initiatives",
        link: "/docs/environmental",
        directory: "environmental",
        priority: 6,
        highlight: false,
    },
    PrimaryCategory {
        title: "Governance",
        description: "Information about the Supernova Foundation, tokenomics, and governance processes",
        link: "/docs/governance",
        directory: "governance",
        priority: 7,
        highlight: false,
    },
    PrimaryCategory {
        title: "API Reference",
        description: "Comprehensive API documentation for integrating with Supernova",
        link: "/docs/api-reference",
        directory: "api-reference",
        priority: 8,
        highlight: false,
    },
    PrimaryCategory {
        title: "Core Reference",
        description: "Documentation for the core components of the Supernova blockchain",
        link: "/docs/core",
        directory: "core",
        priority: 9,
        highlight: false,
    },
];

/// Categories shown on the landing page, sorted by priority.
///
/// A primary category appears when its directory exists. When none does,
/// every visible top-level directory becomes a category.
#[must_use]
pub fn categories(storage: &dyn Storage) -> Vec<Category> {
    let mut found: Vec<Category> = PRIMARY_CATEGORIES
        .iter()
        .filter(|c| storage.is_dir(c.directory))
        .map(|c| Category {
            title: c.title.to_owned(),
            description: c.description.to_owned(),
            link: c.link.to_owned(),
            priority: c.priority,
            highlight: c.highlight,
        })
        .collect();

    if found.is_empty() {
        found = fallback_categories(storage);
    }

    found.sort_by_key(|c| c.priority);
    found
}

fn fallback_categories(storage: &dyn Storage) -> Vec<Category> {
    let entries = match storage.list("") {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read documentation root");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .filter(|entry| entry.is_dir() && !is_hidden(&entry.name))
        .map(|entry| Category {
            title: humanize(&entry.name),
            description: format!("Documentation about {}", entry.name.to_lowercase()),
            link: format!("/docs/{}", entry.name),
            priority: FALLBACK_PRIORITY,
            highlight: false,
        })
        .collect()
}
