//! Sentinel backend that gives a namespace a resolvable root.

use async_trait::async_trait;
use std::path::{Component, Path};

use crate::error::{VfsError, VfsResult};
use crate::fs::{FileHandle, FileSystem};
use crate::types::FileInfo;

/// Empty read-only filesystem.
///
/// Its root exists as an empty directory with the zero modification time;
/// nothing else does. [`Namespace::new`](crate::Namespace::new) binds one
/// at `/` so the root of a fresh namespace always resolves.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyFs;

fn is_root(path: &Path) -> bool {
    path.components().all(|c| matches!(c, Component::RootDir))
}

#[async_trait]
impl FileSystem for EmptyFs {
    async fn open(&self, path: &Path) -> VfsResult<FileHandle> {
        Err(VfsError::not_found(path.display().to_string()))
    }

    async fn lstat(&self, path: &Path) -> VfsResult<FileInfo> {
        if is_root(path) {
            Ok(FileInfo::directory("/"))
        } else {
            Err(VfsError::not_found(path.display().to_string()))
        }
    }

    async fn stat(&self, path: &Path) -> VfsResult<FileInfo> {
        self.lstat(path).await
    }

    async fn read_dir(&self, path: &Path) -> VfsResult<Vec<FileInfo>> {
        if is_root(path) {
            Ok(Vec::new())
        } else {
            Err(VfsError::not_found(path.display().to_string()))
        }
    }

    fn name(&self) -> &str {
        "empty(/)"
    }
}
