//! # namefs
//!
//! Mountable read-only virtual filesystem with union directory semantics.
//!
//! Independent storage backends are combined into one logical directory
//! tree through explicit mount bindings. Callers talk to a single
//! capability surface — open, stat, list-directory — regardless of which
//! backend serves a given path. Key components:
//!
//! - [`FileSystem`] — capability trait every backend implements
//! - [`Namespace`] — mount table routing operations to backends by
//!   longest-prefix match, with union merges and bind modes
//! - [`MapFs`] / [`MapByteFs`] — in-memory flat-map backends
//! - [`OsFs`] — host directory passthrough
//! - [`EmptyFs`] — sentinel giving a fresh namespace a resolvable root
//!
//! `Namespace` implements `FileSystem` itself, so namespaces nest.
//!
//! ```
//! use namefs::{BindMode, MapFs, Namespace, read_file};
//! use std::collections::HashMap;
//!
//! # async fn demo() -> namefs::VfsResult<()> {
//! let mount = MapFs::new(HashMap::from([
//!     ("fs1file".to_string(), "abcdefgh".to_string()),
//! ]));
//!
//! let mut ns = Namespace::new();
//! ns.bind("/fs1", mount, "/", BindMode::Replace);
//!
//! let data = read_file(&ns, "/fs1/fs1file").await?;
//! assert_eq!(data, b"abcdefgh");
//! # Ok(())
//! # }
//! ```

pub mod backends;
mod error;
mod fs;
mod namespace;
mod types;

pub use backends::{EmptyFs, MapByteFs, MapFs, OsFs};
pub use error::{VfsError, VfsResult};
pub use fs::{FileHandle, FileSystem, ReadSeek, read_file};
pub use namespace::{BindMode, MountInfo, Namespace};
pub use types::{FileInfo, FileType};
