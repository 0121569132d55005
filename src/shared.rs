//! Lock-wrapped prefix tree for use from several threads.
//!
//! [`PrefixTree`] itself assumes exclusive access. `SharedTrie` puts it
//! behind a reader-writer lock and memoizes `find_all` results in an LRU
//! cache that every mutation invalidates.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::{Mutex, RwLock};
use tracing::debug;

use crate::error::Result;
use crate::trie::{PrefixTree, TrieOptions};

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Cache key: raw text bytes and the length cap
type CacheKey = (Vec<u8>, usize);

/// Shared trie options.
#[derive(Debug, Clone, Copy)]
pub struct SharedOptions {
    /// LRU cache size for `find_all` results; 0 is treated as 1
    pub cache_size: usize,
    /// Options for the wrapped tree
    pub trie: TrieOptions,
}

impl Default for SharedOptions {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
            trie: TrieOptions::default(),
        }
    }
}

impl SharedOptions {
    /// Create new shared options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cache size.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }

    /// Set the wrapped tree's options.
    pub fn with_trie_options(mut self, trie: TrieOptions) -> Self {
        self.trie = trie;
        self
    }
}

/// A [`PrefixTree`] behind a `RwLock`, with cached match results.
pub struct SharedTrie {
    trie: RwLock<PrefixTree>,
    cache: Mutex<LruCache<CacheKey, Vec<String>>>,
}

impl Default for SharedTrie {
    fn default() -> Self {
        Self::new(SharedOptions::default())
    }
}

impl SharedTrie {
    pub fn new(options: SharedOptions) -> Self {
        Self::from_trie(PrefixTree::with_options(options.trie), options.cache_size)
    }

    /// Wrap an existing tree.
    pub fn from_trie(trie: PrefixTree, cache_size: usize) -> Self {
        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            trie: RwLock::new(trie),
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// See [`PrefixTree::insert`].
    pub fn insert(&self, pattern: impl AsRef<[u8]>) -> Result<bool> {
        let mut trie = self.trie.write();
        let replaced = trie.insert(pattern)?;
        self.clear_cache();
        Ok(replaced)
    }

    /// See [`PrefixTree::remove`]. The cache is cleared only when an entry
    /// was detached.
    pub fn remove(&self, pattern: impl AsRef<[u8]>) -> bool {
        let mut trie = self.trie.write();
        let removed = trie.remove(pattern);
        if removed {
            self.clear_cache();
        }
        removed
    }

    pub fn contains(&self, pattern: impl AsRef<[u8]>) -> bool {
        self.trie.read().contains(pattern)
    }

    /// See [`PrefixTree::find_all`]. Results are served from the cache when
    /// the same text and cap were queried since the last mutation.
    pub fn find_all(
        &self,
        text: impl AsRef<[u8]>,
        max_pattern_length: usize,
    ) -> Result<Vec<String>> {
        let key = (text.as_ref().to_vec(), max_pattern_length);

        // Writers clear the cache while holding the write lock, so the read
        // guard must outlive the `put` below.
        let trie = self.trie.read();

        if let Some(cached) = self.cache.lock().get(&key) {
            return Ok(cached.clone());
        }

        let found = trie.find_all(&key.0, max_pattern_length)?;
        self.cache.lock().put(key, found.clone());
        Ok(found)
    }

    /// See [`PrefixTree::find_all_default`].
    pub fn find_all_default(&self, text: impl AsRef<[u8]>) -> Result<Vec<String>> {
        let max = self.trie.read().options().max_pattern_length;
        self.find_all(text, max)
    }

    /// Drop every pattern.
    pub fn clear(&self) {
        self.trie.write().clear();
        self.clear_cache();
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock();
        if !cache.is_empty() {
            debug!(entries = cache.len(), "clearing match cache");
        }
        cache.clear();
    }

    /// Number of cached `find_all` results
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn len(&self) -> usize {
        self.trie.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.read().is_empty()
    }

    /// Stored patterns at the time of the call.
    pub fn snapshot_patterns(&self) -> Result<Vec<String>> {
        self.trie.read().patterns()
    }

    /// Unwrap the inner tree.
    pub fn into_inner(self) -> PrefixTree {
        self.trie.into_inner()
    }
}
