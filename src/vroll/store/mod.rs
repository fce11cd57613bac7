//! # Storage Layer
//!
//! The [`VersionStore`] trait is everything a roll needs from the directory it
//! runs in: list entries, create the archive store, archive a directory, remove
//! a directory and copy one.
//!
//! ## Implementations
//!
//! - [`fs::FsStore`]: the real filesystem under a root path
//!   - Archives are gzip-compressed tarballs written with `tar` + `flate2`
//!   - Copies walk the tree with `walkdir`; symlinks are recreated, not followed
//!
//! - [`memory::InMemoryStore`]: an in-memory tree for command tests
//!   - Can be told to fail a given operation, so error paths are testable
//!
//! ## Layout
//!
//! ```text
//! root/
//! ├── 0001/               # version directories (any all-digit name)
//! ├── 0002/
//! ├── notes.txt           # anything else is ignored
//! ├── .vroll.json         # optional config
//! └── saveit/             # archive store
//!     └── 0000.tar.gz
//! ```
//!
//! All names passed to a store are single path components relative to its root.

use crate::error::Result;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// One immediate entry of the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootEntry {
    pub name: String,
    pub is_dir: bool,
}

impl RootEntry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

pub trait VersionStore {
    /// The directory this store operates on
    fn root(&self) -> &Path;

    /// List the immediate entries of the root
    fn list_entries(&self) -> Result<Vec<RootEntry>>;

    /// Whether an entry with this name exists in the root
    fn exists(&self, name: &str) -> bool;

    /// Create the archive store directory if it is missing
    fn ensure_archive_store(&mut self, archive_dir: &str) -> Result<()>;

    /// Write `name` as a gzipped tarball to `archive_dir/archive_name`.
    /// Returns the path of the written archive.
    fn archive_version(&mut self, name: &str, archive_dir: &str, archive_name: &str)
        -> Result<PathBuf>;

    /// Recursively remove a directory
    fn remove_dir(&mut self, name: &str) -> Result<()>;

    /// Recursively copy directory `from` to a new directory `to`
    fn copy_dir(&mut self, from: &str, to: &str) -> Result<()>;
}
