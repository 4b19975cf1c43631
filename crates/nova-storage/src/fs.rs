//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for reading the documentation tree from a local
//! directory.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::storage::{DirEntry, EntryKind, Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage rooted at a documentation directory.
///
/// The root is fixed at construction; every path handed to the [`Storage`]
/// methods is resolved beneath it and may not escape it.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use nova_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new(PathBuf::from("docs/nova-docs"));
/// assert!(storage.is_dir("governance"));
/// ```
#[derive(Debug, Clone)]
pub struct FsStorage {
    /// Documentation root directory.
    root: PathBuf,
}

impl FsStorage {
    /// Create a new filesystem storage rooted at `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Documentation root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a root-relative path to a filesystem path.
    ///
    /// Rejects absolute paths and paths containing parent directory components
    /// (`..`) to prevent path traversal (e.g., `../../../etc/passwd`).
    fn resolve(&self, path: &str) -> Result<PathBuf, StorageError> {
        let rel = Path::new(path);
        let escapes = rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if escapes {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(path)
                .with_backend(BACKEND));
        }
        Ok(self.root.join(rel))
    }
}

impl Storage for FsStorage {
    fn read(&self, path: &str) -> Result<String, StorageError> {
        let full_path = self.resolve(path)?;
        if !full_path.is_file() {
            return Err(StorageError::not_found(path).with_backend(BACKEND));
        }
        fs::read_to_string(&full_path)
            .map_err(|e| StorageError::io(e, Some(PathBuf::from(path))).with_backend(BACKEND))
    }

    fn kind(&self, path: &str) -> Option<EntryKind> {
        let full_path = self.resolve(path).ok()?;
        // fs::metadata follows symlinks, so a linked directory lists like a real one.
        let meta = fs::metadata(full_path).ok()?;
        if meta.is_dir() {
            Some(EntryKind::Directory)
        } else if meta.is_file() {
            Some(EntryKind::File)
        } else {
            None
        }
    }

    fn list(&self, path: &str) -> Result<Vec<DirEntry>, StorageError> {
        let dir_path = self.resolve(path)?;
        let entries = fs::read_dir(&dir_path)
            .map_err(|e| StorageError::io(e, Some(PathBuf::from(path))).with_backend(BACKEND))?;

        let mut children = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            let Ok(meta) = fs::metadata(entry.path()) else {
                tracing::warn!(path = %path, name = %name, "Skipping entry without metadata");
                continue;
            };
            let kind = if meta.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            children.push(DirEntry { name, kind });
        }

        children.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_fs_storage_is_send_sync() {
        assert_send_sync::<FsStorage>();
    }

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_read_existing_file() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("guide.md"), "# Guide\n\nContent here.").unwrap();

        let storage = FsStorage::new(temp_dir.path().to_path_buf());
        let content = storage.read("guide.md").unwrap();

        assert_eq!(content, "# Guide\n\nContent here.");
    }

    #[test]
    fn test_read_nested_file() {
        let temp_dir = create_test_dir();
        let governance = temp_dir.path().join("governance");
        fs::create_dir(&governance).unwrap();
        fs::write(governance.join("tokenomics.md"), "# Tokenomics").unwrap();

        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        assert_eq!(
            storage.read("governance/tokenomics.md").unwrap(),
            "# Tokenomics"
        );
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = create_test_dir();

        let storage = FsStorage::new(temp_dir.path().to_path_buf());
        let err = storage.read("nonexistent.md").unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::NotFound);
        assert_eq!(err.backend, Some("Fs"));
    }

    #[test]
    fn test_read_directory_is_not_found() {
        let temp_dir = create_test_dir();
        fs::create_dir(temp_dir.path().join("sub.md")).unwrap();

        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        assert!(storage.read("sub.md").unwrap_err().is_not_found());
    }

    #[test]
    fn test_read_rejects_traversal() {
        let temp_dir = create_test_dir();

        let storage = FsStorage::new(temp_dir.path().to_path_buf());
        let err = storage.read("../../etc/passwd").unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::InvalidPath);
    }

    #[test]
    fn test_read_rejects_absolute_path() {
        let temp_dir = create_test_dir();

        let storage = FsStorage::new(temp_dir.path().to_path_buf());
        let err = storage.read("/etc/passwd").unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::InvalidPath);
    }

    #[test]
    fn test_kind() {
        let temp_dir = create_test_dir();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        fs::write(temp_dir.path().join("a.md"), "a").unwrap();

        let storage = FsStorage::new(temp_dir.path().to_path_buf());

        assert_eq!(storage.kind(""), Some(EntryKind::Directory));
        assert_eq!(storage.kind("sub"), Some(EntryKind::Directory));
        assert_eq!(storage.kind("a.md"), Some(EntryKind::File));
        assert_eq!(storage.kind("missing"), None);
        assert_eq!(storage.kind(".."), None);
        assert!(storage.is_dir("sub"));
        assert!(storage.is_file("a.md"));
    }

    #[test]
    fn test_list_sorted_by_name() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("b.md"), "b").unwrap();
        fs::write(temp_dir.path().join("B.md"), "B").unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        fs::write(temp_dir.path().join("a.md"), "a").unwrap();

        let storage = FsStorage::new(temp_dir.path().to_path_buf());
        let entries = storage.list("").unwrap();

        assert_eq!(
            entries,
            vec![
                DirEntry::file("B.md"),
                DirEntry::file("a.md"),
                DirEntry::file("b.md"),
                DirEntry::directory("sub"),
            ]
        );
    }

    #[test]
    fn test_list_missing_dir() {
        let storage = FsStorage::new(PathBuf::from("/nonexistent"));

        assert!(storage.list("").unwrap_err().is_not_found());
    }
}
