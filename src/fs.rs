//! The filesystem capability trait.
//!
//! Everything bindable into a [`Namespace`](crate::Namespace) implements
//! [`FileSystem`] — and so does the namespace itself, which is what lets
//! one namespace be mounted inside another without special cases.

use async_trait::async_trait;
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncSeek};

use crate::error::VfsResult;
use crate::types::FileInfo;

/// A readable, seekable stream. Closing happens on drop.
pub trait ReadSeek: AsyncRead + AsyncSeek + Send + Unpin {}

impl<T: AsyncRead + AsyncSeek + Send + Unpin> ReadSeek for T {}

/// Open handle returned by [`FileSystem::open`].
///
/// Owned exclusively by the caller; the filesystem keeps no reference to
/// it after returning.
pub type FileHandle = Box<dyn ReadSeek>;

/// Read-only filesystem capability surface.
///
/// All operations are path-based. Paths are slash-separated; a leading
/// slash is tolerated everywhere.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Open a regular file for sequential, seekable reading.
    ///
    /// Fails with NotFound when the path does not resolve to a regular
    /// file.
    async fn open(&self, path: &Path) -> VfsResult<FileHandle>;

    /// Get metadata without following a trailing symbolic link.
    async fn lstat(&self, path: &Path) -> VfsResult<FileInfo>;

    /// Get metadata.
    async fn stat(&self, path: &Path) -> VfsResult<FileInfo>;

    /// List a directory, sorted by name.
    ///
    /// Fails with NotFound when the path is neither a listable directory
    /// nor has any descendant entries.
    async fn read_dir(&self, path: &Path) -> VfsResult<Vec<FileInfo>>;

    /// Stable diagnostic label for this filesystem.
    fn name(&self) -> &str;
}

/// Read the entire contents of `path` from `fs`.
pub async fn read_file(fs: &dyn FileSystem, path: impl AsRef<Path>) -> VfsResult<Vec<u8>> {
    let mut handle = fs.open(path.as_ref()).await?;
    let mut buf = Vec::new();
    handle.read_to_end(&mut buf).await?;
    Ok(buf)
}
