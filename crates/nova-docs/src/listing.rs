//! Directory Lister.

use std::cmp::Ordering;

use nova_storage::{DirEntry, Storage, join_path};
use serde::Serialize;

use crate::error::DocError;
use crate::slug::{Slug, humanize};

/// A child of a listed directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocEntry {
    /// Humanized display name.
    pub name: String,
    /// Slug-form path (`technical-docs/cryptography`, no `.md`).
    pub path: String,
    /// Whether the child is a directory.
    pub is_directory: bool,
}

/// Renderable children of a directory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryListing {
    /// Directories first, then files, each ordered by display name.
    pub entries: Vec<DocEntry>,
    /// Whether the directory has an `index.md`.
    pub has_index: bool,
}

/// Returns `true` for names that never appear in listings or navigation.
pub(crate) fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Returns `true` for markdown files that are pages in their own right.
#[allow(clippy::case_sensitive_file_extension_comparisons)]
pub(crate) fn is_page_file(name: &str) -> bool {
    name.ends_with(".md") && name != "README.md" && name != "index.md"
}

/// List the renderable children of the directory named by `slug`.
///
/// # Errors
///
/// Returns [`DocError::NotFound`] if the slug does not name a readable
/// directory, or the directory has neither children nor an index.
pub fn list_directory(storage: &dyn Storage, slug: &Slug) -> Result<DirectoryListing, DocError> {
    let dir = slug.to_path();
    if !storage.is_dir(&dir) {
        return Err(DocError::not_found(slug));
    }

    let children = storage.list(&dir).map_err(|e| {
        tracing::warn!(dir = %dir, error = %e, "Failed to list directory");
        DocError::not_found(slug)
    })?;

    let mut has_index = false;
    let mut kept: Vec<(DirEntry, String)> = Vec::new();
    for child in children {
        if is_hidden(&child.name) {
            continue;
        }
        if !child.is_dir() && child.name == "index.md" {
            has_index = true;
            continue;
        }
        if child.is_dir() || is_page_file(&child.name) {
            let display = humanize(&child.name);
            kept.push((child, display));
        }
    }

    if kept.is_empty() && !has_index {
        return Err(DocError::not_found(slug));
    }

    kept.sort_by(|(a, a_name), (b, b_name)| compare_entries(a, a_name, b, b_name));

    let entries = kept
        .into_iter()
        .map(|(child, name)| {
            let stem = if child.is_dir() {
                child.name.as_str()
            } else {
                child.name.strip_suffix(".md").unwrap_or(&child.name)
            };
            DocEntry {
                name,
                path: join_path(&dir, stem),
                is_directory: child.is_dir(),
            }
        })
        .collect();

    Ok(DirectoryListing { entries, has_index })
}

fn compare_entries(a: &DirEntry, a_name: &str, b: &DirEntry, b_name: &str) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| a_name.to_lowercase().cmp(&b_name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}
