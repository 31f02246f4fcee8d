//! Build cache for include tries.
//!
//! Filesystem walks are expensive relative to a completion request, so built
//! tries are cached per indexing context and reused for the life of the
//! process. The policy trades staleness for responsiveness: a non-empty trie
//! is never rebuilt automatically, even if the filesystem has changed since
//! the build. Callers refresh with [`TrieCache::invalidate`] or
//! [`TrieCache::rebuild`].

use std::{collections::HashMap, path::PathBuf};

use crate::{Trie, collect};

/// Identifies one indexing context: a filetype together with its normalized
/// search roots and accepted extensions.
///
/// Roots are expected to be normalized (placeholders removed, deduplicated)
/// before the key is built; extensions are sorted on construction so that
/// two keys differing only in extension order compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContextKey {
    /// Filetype (language identifier) this trie serves.
    pub filetype: String,
    /// Search roots in priority order.
    pub roots: Vec<PathBuf>,
    /// Accepted extensions, without the leading dot; `""` means no
    /// extension.
    pub extensions: Vec<String>,
}

impl ContextKey {
    /// Creates a key, sorting the extension set.
    pub fn new(filetype: String, roots: Vec<PathBuf>, mut extensions: Vec<String>) -> Self {
        extensions.sort();
        extensions.dedup();
        Self {
            filetype,
            roots,
            extensions,
        }
    }
}

/// Caches built tries so each context's filesystem walk runs at most once.
///
/// The cache is owned by the host and accessed through `&mut self`, which is
/// the exclusive-build guard in the single-threaded reference design: one
/// request at a time, no overlapping builds.
#[derive(Debug, Default)]
pub struct TrieCache {
    /// Built tries keyed by indexing context.
    tries: HashMap<ContextKey, Trie>,
}

impl TrieCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the trie for `key`, building it first if missing or empty.
    ///
    /// When the cached trie already has content this is a no-op: the stale
    /// trie is returned as-is regardless of filesystem changes.
    pub fn ensure_built(&mut self, key: &ContextKey, ignore_dirs: &[String]) -> &Trie {
        let entry = self.tries.entry(key.clone()).or_default();
        if entry.is_empty() {
            *entry = build_trie(key, ignore_dirs);
        }
        entry
    }

    /// Returns the cached trie for `key` without building.
    pub fn get(&self, key: &ContextKey) -> Option<&Trie> {
        self.tries.get(key)
    }

    /// Drops the cached trie for `key`, forcing the next
    /// [`Self::ensure_built`] to walk the filesystem again.
    pub fn invalidate(&mut self, key: &ContextKey) {
        self.tries.remove(key);
    }

    /// Invalidates and immediately rebuilds the trie for `key`.
    pub fn rebuild(&mut self, key: &ContextKey, ignore_dirs: &[String]) -> &Trie {
        self.invalidate(key);
        self.ensure_built(key, ignore_dirs)
    }
}

/// Walks the key's roots and assembles a fresh trie.
pub fn build_trie(key: &ContextKey, ignore_dirs: &[String]) -> Trie {
    let mut trie = Trie::new();
    for file in collect(&key.roots, &key.extensions, ignore_dirs) {
        trie.insert(&file.segments);
    }
    trie
}
