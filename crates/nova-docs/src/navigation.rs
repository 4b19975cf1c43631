//! Navigation tree for the documentation sidebar.

use nova_storage::{Storage, join_path};
use serde::Serialize;

use crate::listing::{is_hidden, is_page_file};
use crate::slug::humanize;

/// Node in the navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Humanized display name.
    pub name: String,
    /// Slug-form path.
    pub path: String,
    pub is_directory: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// Build the navigation tree of the whole documentation root.
///
/// Directories come before files; both are ordered by raw name.
#[must_use]
pub fn navigation(storage: &dyn Storage) -> Vec<NavItem> {
    build_level(storage, "")
}

fn build_level(storage: &dyn Storage, dir: &str) -> Vec<NavItem> {
    let entries = match storage.list(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir, error = %e, "Failed to read navigation directory");
            return Vec::new();
        }
    };

    let mut items: Vec<NavItem> = entries
        .into_iter()
        .filter(|entry| !is_hidden(&entry.name))
        .filter_map(|entry| {
            let path = join_path(dir, &entry.name);
            if entry.is_dir() {
                Some(NavItem {
                    name: humanize(&entry.name),
                    children: build_level(storage, &path),
                    path,
                    is_directory: true,
                })
            } else if is_page_file(&entry.name) {
                let path = path.strip_suffix(".md").unwrap_or(&path).to_owned();
                Some(NavItem {
                    name: humanize(&entry.name),
                    path,
                    is_directory: false,
                    children: Vec::new(),
                })
            } else {
                None
            }
        })
        .collect();

    // Stable sort keeps the storage's name order within each group.
    items.sort_by_key(|item| !item.is_directory);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use nova_storage::MockStorage;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_navigation_tree() {
        let storage = MockStorage::new()
            .with_file("faq.md", "# FAQ")
            .with_file("README.md", "readme")
            .with_file("governance/index.md", "# Governance")
            .with_file("governance/tokenomics.md", "# Tokenomics")
            .with_file("governance/charts/supply.png", "png")
            .with_file(".github/CONTRIBUTING.md", "hidden");

        let nav = navigation(&storage);

        assert_eq!(
            nav,
            vec![
                NavItem {
                    name: "Governance".to_owned(),
                    path: "governance".to_owned(),
                    is_directory: true,
                    children: vec![
                        NavItem {
                            name: "Charts".to_owned(),
                            path: "governance/charts".to_owned(),
                            is_directory: true,
                            children: Vec::new(),
                        },
                        NavItem {
                            name: "Tokenomics".to_owned(),
                            path: "governance/tokenomics".to_owned(),
                            is_directory: false,
                            children: Vec::new(),
                        },
                    ],
                },
                NavItem {
                    name: "Faq".to_owned(),
                    path: "faq".to_owned(),
                    is_directory: false,
                    children: Vec::new(),
                },
            ]
        );
    }

    #[test]
    fn test_serializes_without_empty_children() {
        let item = NavItem {
            name: "Faq".to_owned(),
            path: "faq".to_owned(),
            is_directory: false,
            children: Vec::new(),
        };

        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({"name": "Faq", "path": "faq", "is_directory": false})
        );
    }
}
