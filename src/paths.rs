//! Search-path resolution.
//!
//! Maps bare filenames to full paths by probing an ordered list of
//! directories. Resolutions are memoized for the life of the process: the
//! filesystem layout is assumed static during a run, which buys O(1) repeat
//! lookups in a loop that may request the same asset every frame.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use log::warn;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

// Internal data structure, protected by a lock.
#[derive(Default)]
struct PathsInner {
    dirs: VecDeque<PathBuf>,
    resolved: FxHashMap<String, PathBuf>,
}

/// Ordered directory search list with a memoized filename → path table.
///
/// Insertion order defines priority: [`prepend`](Self::prepend) is highest,
/// [`append`](Self::append) is lowest. Duplicates are not rejected;
/// [`contains`](Self::contains) lets callers avoid them.
#[derive(Default)]
pub struct SearchPaths {
    inner: RwLock<PathsInner>,
}

impl SearchPaths {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a directory with lowest priority.
    pub fn append(&self, dir: impl Into<PathBuf>) {
        self.inner.write().dirs.push_back(dir.into());
    }

    /// Prepends a directory with highest priority.
    pub fn prepend(&self, dir: impl Into<PathBuf>) {
        self.inner.write().dirs.push_front(dir.into());
    }

    /// Whether `dir` is already in the search list.
    #[must_use]
    pub fn contains(&self, dir: impl AsRef<Path>) -> bool {
        let dir = dir.as_ref();
        self.inner.read().dirs.iter().any(|d| d == dir)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().dirs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().dirs.is_empty()
    }

    /// Empties the directory list. Memoized resolutions stay valid.
    pub fn clear_paths(&self) {
        self.inner.write().dirs.clear();
    }

    /// Resolves a bare filename against the search list.
    ///
    /// The first resolution probes every directory in priority order; later
    /// calls for the same filename return the memoized path without touching
    /// the filesystem. When several directories contain the file, the first
    /// in search order wins and every candidate is logged.
    ///
    /// Returns `None` when no directory contains the file. That is not an
    /// error at this layer; callers report their own failure.
    #[must_use]
    pub fn find_file(&self, filename: &str) -> Option<PathBuf> {
        if let Some(path) = self.inner.read().resolved.get(filename) {
            return Some(path.clone());
        }

        let mut inner = self.inner.write();
        // Another caller may have resolved it while we waited for the lock.
        if let Some(path) = inner.resolved.get(filename) {
            return Some(path.clone());
        }

        let candidates: SmallVec<[PathBuf; 2]> = inner
            .dirs
            .iter()
            .map(|dir| dir.join(filename))
            .filter(|candidate| candidate.exists())
            .collect();

        let found = candidates.first()?.clone();
        if candidates.len() > 1 {
            warn!("Found more than one file matching the name given: {filename}");
            for candidate in &candidates {
                warn!("{}", candidate.display());
            }
        }
        inner.resolved.insert(filename.to_string(), found.clone());
        Some(found)
    }
}
