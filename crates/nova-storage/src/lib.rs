//! Read-only access to the documentation tree.
//!
//! This crate provides a [`Storage`] trait for abstracting file lookup and directory
//! listing over the documentation root. This enables:
//!
//! - **Unit testing** against in-memory fixtures instead of the real filesystem
//! - **Explicit roots**: the documentation root is a constructor argument, never
//!   derived from the process working directory
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `read()`, `kind()` and `list()` methods
//! - [`FsStorage`] implementation backed by a directory on disk
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use nova_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("docs/nova-docs"));
//! let markdown = storage.read("governance/tokenomics.md")?;
//! for entry in storage.list("technical-docs")? {
//!     println!("{} ({:?})", entry.name, entry.kind);
//! }
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{DirEntry, EntryKind, Storage, StorageError, StorageErrorKind, join_path};
