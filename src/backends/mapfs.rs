//! In-memory filesystem built from a name → string-content map.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use super::{base_name, list_flat_dir, map_key};
use crate::error::{VfsError, VfsResult};
use crate::fs::{FileHandle, FileSystem};
use crate::types::FileInfo;

/// Read-only filesystem over a flat `name → string content` map.
///
/// Map keys are slash-separated pathnames without a leading slash
/// (`"a/b/c.txt"`); lookups tolerate one. Parent directories are
/// synthesized on demand from the leaf keys, so `"a"` and `"a/b"` stat
/// and list as directories.
#[derive(Debug, Clone)]
pub struct MapFs {
    files: HashMap<String, String>,
}

impl MapFs {
    /// Build a filesystem from the provided map.
    pub fn new(files: HashMap<String, String>) -> Self {
        Self { files }
    }

    fn keys(&self) -> impl Iterator<Item = (&str, u64)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.len() as u64))
    }
}

#[async_trait]
impl FileSystem for MapFs {
    async fn open(&self, path: &Path) -> VfsResult<FileHandle> {
        match self.files.get(&map_key(path)) {
            Some(content) => Ok(Box::new(Cursor::new(content.clone().into_bytes()))),
            None => Err(VfsError::not_found(path.display().to_string())),
        }
    }

    async fn lstat(&self, path: &Path) -> VfsResult<FileInfo> {
        let key = map_key(path);
        if let Some(content) = self.files.get(&key) {
            return Ok(FileInfo::file(base_name(&key), content.len() as u64));
        }
        if !list_flat_dir(&key, self.keys()).is_empty() {
            return Ok(FileInfo::directory(base_name(&key)));
        }
        Err(VfsError::not_found(path.display().to_string()))
    }

    async fn stat(&self, path: &Path) -> VfsResult<FileInfo> {
        self.lstat(path).await
    }

    async fn read_dir(&self, path: &Path) -> VfsResult<Vec<FileInfo>> {
        let entries = list_flat_dir(&map_key(path), self.keys());
        if entries.is_empty() {
            return Err(VfsError::not_found(path.display().to_string()));
        }
        Ok(entries)
    }

    fn name(&self) -> &str {
        "mapfs"
    }
}
