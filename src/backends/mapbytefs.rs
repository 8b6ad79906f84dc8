//! In-memory filesystem built from a name → byte-content map.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use super::{base_name, list_flat_dir, map_key};
use crate::error::{VfsError, VfsResult};
use crate::fs::{FileHandle, FileSystem};
use crate::types::FileInfo;

/// Read-only filesystem over a flat `name → byte content` map.
///
/// Byte-slice sibling of [`MapFs`](super::MapFs), for content that is not
/// UTF-8. Same key conventions: slash-separated pathnames without a
/// leading slash, parent directories synthesized from the leaf keys.
#[derive(Debug, Clone)]
pub struct MapByteFs {
    files: HashMap<String, Vec<u8>>,
}

impl MapByteFs {
    /// Build a filesystem from the provided map.
    pub fn new(files: HashMap<String, Vec<u8>>) -> Self {
        Self { files }
    }

    fn keys(&self) -> impl Iterator<Item = (&str, u64)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.len() as u64))
    }
}

#[async_trait]
impl FileSystem for MapByteFs {
    async fn open(&self, path: &Path) -> VfsResult<FileHandle> {
        match self.files.get(&map_key(path)) {
            Some(content) => Ok(Box::new(Cursor::new(content.clone()))),
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
        "mapbytefs"
    }
}
