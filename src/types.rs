//! Core metadata types.
//!
//! Kept serializable so an RPC surface can carry them as-is.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// File type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link.
    Symlink,
}

impl FileType {
    /// Returns true if this is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, FileType::File)
    }

    /// Returns true if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, FileType::Directory)
    }

    /// Returns true if this is a symbolic link.
    pub fn is_symlink(&self) -> bool {
        matches!(self, FileType::Symlink)
    }
}

/// Metadata for a file, a directory, or a directory entry.
///
/// Doubles as the element type of directory listings, so it carries the
/// entry name (final path segment, `"/"` for a filesystem root).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    /// Entry name, not a full path.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Entry type.
    pub kind: FileType,
    /// Last modification time. `None` is the zero time.
    pub mtime: Option<SystemTime>,
    /// Unix permission bits (e.g. `0o444`).
    pub perm: u32,
}

impl FileInfo {
    /// Metadata for a read-only regular file.
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            kind: FileType::File,
            mtime: None,
            perm: 0o444,
        }
    }

    /// Metadata for a read-only directory.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 0,
            kind: FileType::Directory,
            mtime: None,
            perm: 0o555,
        }
    }

    /// Returns true if this is a regular file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Returns true if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}
