//! Static Params Generator.
//!
//! Enumerates every slug the static site pre-renders.

use nova_storage::{Storage, join_path};

use crate::slug::Slug;

/// Enumerate every slug to pre-render.
///
/// Walks the tree depth-first in name order. Each directory yields its own
/// slug, each markdown file (except `README.md`) yields its path without
/// `.md`, and `index.md` yields its directory's slug. `["overview"]` is
/// always appended last. Unreadable subtrees are logged and skipped.
#[must_use]
pub fn generate_static_params(storage: &dyn Storage) -> Vec<Slug> {
    let mut params = Vec::new();
    if storage.is_dir("") {
        walk(storage, &Slug::default(), &mut params);
    } else {
        tracing::warn!("Documentation root does not exist");
    }
    params.push(Slug::overview());
    params
}

fn walk(storage: &dyn Storage, dir: &Slug, params: &mut Vec<Slug>) {
    let dir_path = dir.to_path();
    let entries = match storage.list(&dir_path) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir_path, error = %e, "Skipping unreadable directory");
            return;
        }
    };

    for entry in entries {
        if entry.is_dir() {
            match dir.child(&entry.name) {
                Ok(child) => {
                    params.push(child.clone());
                    walk(storage, &child, params);
                }
                Err(e) => {
                    tracing::warn!(path = %join_path(&dir_path, &entry.name), error = %e, "Skipping directory");
                }
            }
        } else if entry.name == "index.md" {
            params.push(dir.clone());
        } else if let Some(stem) = entry.name.strip_suffix(".md") {
            if entry.name == "README.md" {
                continue;
            }
            match dir.child(stem) {
                Ok(child) => params.push(child),
                Err(e) => {
                    tracing::warn!(path = %join_path(&dir_path, &entry.name), error = %e, "Skipping file");
                }
            }
        }
    }
}
