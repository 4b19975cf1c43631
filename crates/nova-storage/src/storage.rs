//! Storage trait and error types.
//!
//! Provides the core [`Storage`] trait for reading the documentation tree,
//! along with [`StorageError`] for unified error handling across backends.
//!
//! # Path Convention
//!
//! All path parameters are **root-relative file paths** using `/` as separator:
//! - `""` - the documentation root itself
//! - `"governance"` - a directory
//! - `"governance/tokenomics.md"` - a file
//!
//! Implementations map these onto their own layout.

use std::path::PathBuf;

/// Kind of a node in the documentation tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
}

/// A child entry returned by [`Storage::list`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    /// Raw file or directory name (e.g., `"tokenomics.md"`).
    pub name: String,
    /// Whether the entry is a file or a directory.
    pub kind: EntryKind,
}

impl DirEntry {
    /// Create a file entry.
    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    /// Create a directory entry.
    #[must_use]
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    /// Returns `true` if the entry is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid path (e.g., escapes the documentation root).
    InvalidPath,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_path(path)
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }

    /// Returns `true` for [`StorageErrorKind::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == StorageErrorKind::NotFound
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidPath => "Invalid path",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Read-only view of the documentation tree.
///
/// All paths are relative to the documentation root the implementation was
/// constructed with; see the [module docs](self) for the convention.
pub trait Storage: Send + Sync {
    /// Read a file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] with kind `NotFound` if no file exists at `path`,
    /// or another kind if the file exists but can't be read.
    fn read(&self, path: &str) -> Result<String, StorageError>;

    /// Return the kind of the node at `path`, or `None` if nothing exists there.
    fn kind(&self, path: &str) -> Option<EntryKind>;

    /// List the children of the directory at `path`.
    ///
    /// Entries are returned sorted by raw name (byte order), so callers see the
    /// same order regardless of how the backend enumerates them.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if `path` is not a directory or can't be read.
    fn list(&self, path: &str) -> Result<Vec<DirEntry>, StorageError>;

    /// Returns `true` if a regular file exists at `path`.
    fn is_file(&self, path: &str) -> bool {
        self.kind(path) == Some(EntryKind::File)
    }

    /// Returns `true` if a directory exists at `path`.
    fn is_dir(&self, path: &str) -> bool {
        self.kind(path) == Some(EntryKind::Directory)
    }
}

/// Join a parent path and a child name using the storage path convention.
///
/// # Examples
///
/// ```
/// use nova_storage::join_path;
///
/// assert_eq!(join_path("", "governance"), "governance");
/// assert_eq!(join_path("governance", "tokenomics.md"), "governance/tokenomics.md");
/// ```
#[must_use]
pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        format!("{parent}/{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_full() {
        let err = StorageError::not_found("guide.md").with_backend("Fs");
        assert_eq!(err.to_string(), "[Fs] Not found (path: guide.md)");
    }

    #[test]
    fn test_display_with_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StorageError::io(io, Some(PathBuf::from("secret.md")));
        assert_eq!(err.kind, StorageErrorKind::PermissionDenied);
        assert_eq!(err.to_string(), "Permission denied: denied (path: secret.md)");
    }

    #[test]
    fn test_io_not_found_maps_kind() {
        let io = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err = StorageError::io(io, None);
        assert!(err.is_not_found());
        assert!(err.path.is_none());
    }

    #[test]
    fn test_error_source_is_preserved() {
        use std::error::Error as _;

        let io = std::io::Error::other("boom");
        let err = StorageError::io(io, None);
        assert_eq!(err.kind, StorageErrorKind::Other);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("", "a.md"), "a.md");
        assert_eq!(join_path("a/b", "c"), "a/b/c");
    }

    #[test]
    fn test_dir_entry_constructors() {
        assert!(DirEntry::directory("sub").is_dir());
        assert!(!DirEntry::file("a.md").is_dir());
    }
}
