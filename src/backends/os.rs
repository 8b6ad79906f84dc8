//! OS directory passthrough backend.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use crate::error::{VfsError, VfsResult};
use crate::fs::{FileHandle, FileSystem};
use crate::types::{FileInfo, FileType};

/// Read-only view of a directory on the host filesystem.
///
/// All operations are relative to `root`: with root `/home/amy/project`,
/// `stat("/src/main.rs")` inspects `/home/amy/project/src/main.rs`. The
/// root is canonicalized at construction to handle symlinks (e.g. macOS
/// `/tmp` → `/private/tmp`). Attempts to escape the root via `..` are
/// rejected.
#[derive(Debug, Clone)]
pub struct OsFs {
    root: PathBuf,
    label: String,
}

impl OsFs {
    /// Expose the OS directory `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root: PathBuf = root.into();
        let root = root.canonicalize().unwrap_or(root);
        let label = format!("os({})", root.display());
        Self { root, label }
    }

    /// The OS path this backend is rooted at.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a logical path under the root.
    fn resolve(&self, path: &Path) -> VfsResult<PathBuf> {
        let mut full = self.root.clone();
        for component in path.components() {
            match component {
                Component::Normal(seg) => full.push(seg),
                Component::ParentDir => {
                    if full == self.root || !full.pop() {
                        return Err(VfsError::other(format!(
                            "path escapes root: {}",
                            path.display()
                        )));
                    }
                }
                Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
            }
        }
        Ok(full)
    }

    fn metadata_to_info(name: &str, meta: &std::fs::Metadata) -> FileInfo {
        let kind = if meta.is_dir() {
            FileType::Directory
        } else if meta.file_type().is_symlink() {
            FileType::Symlink
        } else {
            FileType::File
        };
        FileInfo {
            name: name.to_string(),
            size: meta.len(),
            kind,
            mtime: meta.modified().ok(),
            perm: perm_bits(meta),
        }
    }
}

#[cfg(unix)]
fn perm_bits(meta: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn perm_bits(meta: &std::fs::Metadata) -> u32 {
    if meta.permissions().readonly() { 0o444 } else { 0o644 }
}

/// Final segment of a logical path, or `/` for the root.
fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "/".to_string())
}

#[async_trait]
impl FileSystem for OsFs {
    async fn open(&self, path: &Path) -> VfsResult<FileHandle> {
        let full = self.resolve(path)?;
        let meta = fs::metadata(&full).await?;
        if !meta.is_file() {
            return Err(VfsError::not_found(path.display().to_string()));
        }
        let file = fs::File::open(&full).await?;
        Ok(Box::new(file))
    }

    async fn lstat(&self, path: &Path) -> VfsResult<FileInfo> {
        let full = self.resolve(path)?;
        let meta = fs::symlink_metadata(&full).await?;
        Ok(Self::metadata_to_info(&entry_name(path), &meta))
    }

    async fn stat(&self, path: &Path) -> VfsResult<FileInfo> {
        let full = self.resolve(path)?;
        let meta = fs::metadata(&full).await?;
        Ok(Self::metadata_to_info(&entry_name(path), &meta))
    }

    async fn read_dir(&self, path: &Path) -> VfsResult<Vec<FileInfo>> {
        let full = self.resolve(path)?;
        let mut dir = fs::read_dir(&full).await?;
        let mut entries = Vec::new();

        while let Some(entry) = dir.next_entry().await? {
            let meta = entry.metadata().await?;
            let name = entry.file_name().to_string_lossy().into_owned();
            entries.push(Self::metadata_to_info(&name, &meta));
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn name(&self) -> &str {
        &self.label
    }
}
