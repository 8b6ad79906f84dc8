//! Reference backends.
//!
//! Backends implement [`FileSystem`](crate::FileSystem) for different
//! storage types. Anything else satisfying the trait is equally bindable.

mod empty;
mod mapbytefs;
mod mapfs;
mod os;

pub use empty::EmptyFs;
pub use mapbytefs::MapByteFs;
pub use mapfs::MapFs;
pub use os::OsFs;

use std::collections::BTreeMap;
use std::path::Path;

use crate::types::FileInfo;

/// Normalize a lookup path to flat-map key form: slash-separated, no
/// leading or trailing slash. The root becomes the empty key.
pub(crate) fn map_key(path: &Path) -> String {
    path.to_string_lossy()
        .trim_start_matches('/')
        .trim_end_matches('/')
        .to_string()
}

/// Final segment of a key, or `/` for the empty (root) key.
pub(crate) fn base_name(key: &str) -> String {
    match key.rsplit('/').next() {
        Some(seg) if !seg.is_empty() => seg.to_string(),
        _ => "/".to_string(),
    }
}

/// Synthesize the listing of directory `dir` from flat `(key, size)`
/// pairs: keys directly inside `dir` become files, deeper keys contribute
/// one synthesized directory segment each. Sorted by name.
pub(crate) fn list_flat_dir<'a, I>(dir: &str, keys: I) -> Vec<FileInfo>
where
    I: Iterator<Item = (&'a str, u64)>,
{
    let mut entries: BTreeMap<String, FileInfo> = BTreeMap::new();
    for (key, size) in keys {
        let Some(rest) = child_suffix(dir, key) else {
            continue;
        };
        match rest.split_once('/') {
            None => {
                entries
                    .entry(rest.to_string())
                    .or_insert_with(|| FileInfo::file(rest, size));
            }
            Some((seg, _)) => {
                entries.insert(seg.to_string(), FileInfo::directory(seg));
            }
        }
    }
    entries.into_values().collect()
}

/// The remainder of `key` below directory `dir`, if `dir` is a
/// segment-aligned proper prefix of it.
fn child_suffix<'a>(dir: &str, key: &'a str) -> Option<&'a str> {
    if key.is_empty() {
        return None;
    }
    if dir.is_empty() {
        return Some(key);
    }
    key.strip_prefix(dir)?.strip_prefix('/')
}
