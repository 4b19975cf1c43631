//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::{BTreeMap, BTreeSet};

use crate::storage::{DirEntry, EntryKind, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// In-memory documentation tree.
///
/// Files are registered with their root-relative path; parent directories are
/// created implicitly. Use the builder methods to configure the mock with
/// test data.
///
/// # Example
///
/// ```ignore
/// use nova_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file("governance/tokenomics.md", "# Tokenomics")
///     .with_dir("empty");
///
/// assert!(storage.is_dir("governance"));
/// assert_eq!(storage.read("governance/tokenomics.md").unwrap(), "# Tokenomics");
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    files: BTreeMap<String, String>,
    dirs: BTreeSet<String>,
    unreadable: BTreeSet<String>,
}

impl MockStorage {
    /// Create an empty mock storage (root directory only).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with content, creating parent directories.
    #[must_use]
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.add_parents(path);
        self.files.insert(path.to_owned(), content.to_owned());
        self
    }

    /// Add an (empty) directory, creating parent directories.
    #[must_use]
    pub fn with_dir(mut self, path: &str) -> Self {
        self.add_parents(path);
        self.dirs.insert(path.to_owned());
        self
    }

    /// Add a file that exists but fails to read with `PermissionDenied`.
    #[must_use]
    pub fn with_unreadable_file(mut self, path: &str) -> Self {
        self = self.with_file(path, "");
        self.unreadable.insert(path.to_owned());
        self
    }

    fn add_parents(&mut self, path: &str) {
        let mut current = path;
        while let Some((parent, _)) = current.rsplit_once('/') {
            self.dirs.insert(parent.to_owned());
            current = parent;
        }
    }

    fn parent_of(path: &str) -> &str {
        path.rsplit_once('/').map_or("", |(parent, _)| parent)
    }

    fn name_of(path: &str) -> &str {
        path.rsplit_once('/').map_or(path, |(_, name)| name)
    }
}

impl Storage for MockStorage {
    fn read(&self, path: &str) -> Result<String, StorageError> {
        if self.unreadable.contains(path) {
            return Err(StorageError::new(StorageErrorKind::PermissionDenied)
                .with_path(path)
                .with_backend(BACKEND));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::not_found(path).with_backend(BACKEND))
    }

    fn kind(&self, path: &str) -> Option<EntryKind> {
        if path.is_empty() || self.dirs.contains(path) {
            Some(EntryKind::Directory)
        } else if self.files.contains_key(path) {
            Some(EntryKind::File)
        } else {
            None
        }
    }

    fn list(&self, path: &str) -> Result<Vec<DirEntry>, StorageError> {
        if self.kind(path) != Some(EntryKind::Directory) {
            return Err(StorageError::not_found(path).with_backend(BACKEND));
        }

        let files = self
            .files
            .keys()
            .filter(|p| Self::parent_of(p) == path)
            .map(|p| DirEntry::file(Self::name_of(p)));
        let dirs = self
            .dirs
            .iter()
            .filter(|p| !p.is_empty() && Self::parent_of(p) == path)
            .map(|p| DirEntry::directory(Self::name_of(p)));

        let mut entries: Vec<DirEntry> = files.chain(dirs).collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}
