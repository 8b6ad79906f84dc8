//! Mount namespace with longest-prefix resolution and union listings.
//!
//! A [`Namespace`] records which backend serves which logical subtree and
//! resolves every operation through that table. Mount points are matched
//! by longest segment-aligned prefix: with `/mnt` and `/mnt/project` both
//! bound, `/mnt/project/src/main.rs` routes to `/mnt/project`'s bindings.
//!
//! Several bindings can share one mount point. Their order is the
//! resolution priority: the first binding that can serve a request wins,
//! and in directory-listing merges the first binding to claim an entry
//! name keeps it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::backends::EmptyFs;
use crate::error::{VfsError, VfsResult};
use crate::fs::{FileHandle, FileSystem};
use crate::types::FileInfo;

/// How a new binding interacts with existing bindings at its mount point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BindMode {
    /// Discard all existing bindings; the new one becomes the sole entry.
    Replace,
    /// Insert ahead of all existing bindings: consulted first, wins name
    /// collisions in listing merges.
    Before,
    /// Append behind all existing bindings: consulted last.
    After,
}

/// Information about one mount point, for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MountInfo {
    /// Logical path of the mount point.
    pub path: PathBuf,
    /// `(backend label, backend root)` per binding, highest priority
    /// first.
    pub bindings: Vec<(String, PathBuf)>,
}

/// One mount binding: a backend plus the path inside it that is exposed
/// at the mount point.
struct MountBinding {
    fs: Arc<dyn FileSystem>,
    root: PathBuf,
}

impl fmt::Debug for MountBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountBinding")
            .field("fs", &self.fs.name())
            .field("root", &self.root)
            .finish()
    }
}

/// Logical directory tree assembled from mount bindings.
///
/// Built incrementally with [`bind`](Namespace::bind), then served
/// read-only: every operation is a pure function of the table, so a
/// finished namespace can be shared across tasks like any other backend
/// (wrap it in an `Arc`, or bind it into another namespace).
///
/// `Namespace::default()` is the bare table — nothing resolves until the
/// first bind. [`Namespace::new`] additionally guarantees that `/`
/// resolves.
#[derive(Debug, Default)]
pub struct Namespace {
    /// Bindings keyed by canonical mount point. A key's sequence is never
    /// empty; clearing it removes the key.
    mounts: BTreeMap<PathBuf, Vec<MountBinding>>,
}

impl Namespace {
    /// Create a namespace whose root always resolves.
    ///
    /// Seeds the table with [`EmptyFs`] bound at `/`, so `stat("/")`
    /// reports an empty read-only directory before any other binding
    /// exists.
    pub fn new() -> Self {
        let mut ns = Self::default();
        ns.bind("/", EmptyFs, "/", BindMode::Replace);
        ns
    }

    /// Expose `fs`'s subtree rooted at `root` under the logical path
    /// `mount_point`.
    ///
    /// Both paths are canonicalized before storage. Binding with
    /// [`BindMode::Before`] or [`BindMode::After`] onto a point that
    /// already has entries grows a union stack rather than overwriting
    /// it.
    pub fn bind(
        &mut self,
        mount_point: impl AsRef<Path>,
        fs: impl FileSystem + 'static,
        root: impl AsRef<Path>,
        mode: BindMode,
    ) {
        self.bind_arc(mount_point, Arc::new(fs), root, mode)
    }

    /// Bind an already-shared backend.
    ///
    /// Backends are referenced, never owned: one `Arc` may back several
    /// mount points or several namespaces.
    pub fn bind_arc(
        &mut self,
        mount_point: impl AsRef<Path>,
        fs: Arc<dyn FileSystem>,
        root: impl AsRef<Path>,
        mode: BindMode,
    ) {
        let point = clean(mount_point.as_ref());
        let root = clean(root.as_ref());
        tracing::debug!(
            mount_point = %point.display(),
            backend = fs.name(),
            root = %root.display(),
            ?mode,
            "bind"
        );

        let binding = MountBinding { fs, root };
        let stack = self.mounts.entry(point).or_default();
        match mode {
            BindMode::Replace => {
                stack.clear();
                stack.push(binding);
            }
            BindMode::Before => stack.insert(0, binding),
            BindMode::After => stack.push(binding),
        }
    }

    /// List all mount points with their bindings, for diagnostics.
    pub fn mounts(&self) -> Vec<MountInfo> {
        self.mounts
            .iter()
            .map(|(path, stack)| MountInfo {
                path: path.clone(),
                bindings: stack
                    .iter()
                    .map(|b| (b.fs.name().to_string(), b.root.clone()))
                    .collect(),
            })
            .collect()
    }

    /// Find the longest mount point that is a segment-aligned prefix of
    /// `path`.
    ///
    /// Returns that point's bindings paired with the backend-translated
    /// path, highest priority first. Empty when no mount point matches.
    fn resolve(&self, path: &Path) -> Vec<(&MountBinding, PathBuf)> {
        let mut probe = path.to_path_buf();
        loop {
            if let Some(stack) = self.mounts.get(&probe) {
                let suffix = path.strip_prefix(&probe).unwrap_or(Path::new(""));
                return stack
                    .iter()
                    .map(|b| (b, translate(&b.root, suffix)))
                    .collect();
            }
            if !probe.pop() {
                tracing::trace!(path = %path.display(), "no mount point matches");
                return Vec::new();
            }
        }
    }

    /// True if `path` sits strictly above at least one mount point.
    fn is_ancestor_of_mount(&self, path: &Path) -> bool {
        self.mounts
            .keys()
            .any(|key| key != path && key.starts_with(path))
    }
}

/// Canonicalize a logical path: absolute, `.`/`..` resolved, no trailing
/// slash except the root itself.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::from("/");
    for component in path.components() {
        match component {
            Component::Normal(seg) => out.push(seg),
            Component::ParentDir => {
                out.pop();
            }
            Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
        }
    }
    out
}

/// Join the logical suffix left over after prefix matching onto a
/// binding's backend root.
fn translate(root: &Path, suffix: &Path) -> PathBuf {
    if suffix.as_os_str().is_empty() {
        root.to_path_buf()
    } else {
        root.join(suffix)
    }
}

/// Fabricated metadata for a directory implied by deeper mount points.
/// Never touches a backend; identical on every query.
fn synthetic_dir(path: &Path) -> FileInfo {
    let name = match path.file_name() {
        Some(n) => n.to_string_lossy().into_owned(),
        None => "/".to_string(),
    };
    FileInfo::directory(name)
}

#[async_trait]
impl FileSystem for Namespace {
    async fn open(&self, path: &Path) -> VfsResult<FileHandle> {
        let path = clean(path);
        for (binding, translated) in self.resolve(&path) {
            match binding.fs.open(&translated).await {
                Ok(handle) => return Ok(handle),
                Err(err) => {
                    tracing::trace!(
                        path = %path.display(),
                        backend = binding.fs.name(),
                        %err,
                        "binding cannot serve open"
                    );
                }
            }
        }
        Err(VfsError::not_found(path.display().to_string()))
    }

    async fn lstat(&self, path: &Path) -> VfsResult<FileInfo> {
        let path = clean(path);
        for (binding, translated) in self.resolve(&path) {
            if let Ok(info) = binding.fs.lstat(&translated).await {
                return Ok(info);
            }
        }
        if self.is_ancestor_of_mount(&path) {
            return Ok(synthetic_dir(&path));
        }
        Err(VfsError::not_found(path.display().to_string()))
    }

    async fn stat(&self, path: &Path) -> VfsResult<FileInfo> {
        let path = clean(path);
        for (binding, translated) in self.resolve(&path) {
            if let Ok(info) = binding.fs.stat(&translated).await {
                return Ok(info);
            }
        }
        if self.is_ancestor_of_mount(&path) {
            return Ok(synthetic_dir(&path));
        }
        Err(VfsError::not_found(path.display().to_string()))
    }

    async fn read_dir(&self, path: &Path) -> VfsResult<Vec<FileInfo>> {
        let path = clean(path);
        let mut merged: BTreeMap<String, FileInfo> = BTreeMap::new();

        for (binding, translated) in self.resolve(&path) {
            match binding.fs.read_dir(&translated).await {
                Ok(entries) => {
                    for entry in entries {
                        // First binding to claim a name keeps it.
                        merged.entry(entry.name.clone()).or_insert(entry);
                    }
                }
                Err(err) => {
                    tracing::trace!(
                        path = %path.display(),
                        backend = binding.fs.name(),
                        %err,
                        "binding cannot serve read_dir"
                    );
                }
            }
        }

        // Directories implied by deeper mount points. Binding-derived
        // entries take precedence over synthesized ones.
        for key in self.mounts.keys() {
            if key == &path {
                continue;
            }
            if let Ok(rest) = key.strip_prefix(&path) {
                if let Some(Component::Normal(seg)) = rest.components().next() {
                    let name = seg.to_string_lossy().into_owned();
                    merged
                        .entry(name.clone())
                        .or_insert_with(|| FileInfo::directory(name));
                }
            }
        }

        if merged.is_empty() {
            return Err(VfsError::not_found(path.display().to_string()));
        }
        Ok(merged.into_values().collect())
    }

    fn name(&self) -> &str {
        "namespace"
    }
}
