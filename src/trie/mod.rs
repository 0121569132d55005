//! Codepoint-indexed prefix tree.
//!
//! Patterns are decoded from UTF-8 and stored one codepoint per edge. Each
//! node may carry the [`DictEntry`] of the pattern that ends there.
//!
//! ## Example
//!
//! ```
//! use dict_trie::PrefixTree;
//!
//! let mut trie = PrefixTree::new();
//! for word in ["字典", "字典树", "节点"] {
//!     trie.insert(word).unwrap();
//! }
//!
//! let found = trie.find_all("字典树节点", 512).unwrap();
//! assert_eq!(found, vec!["字典", "字典树", "节点"]);
//!
//! trie.remove("字典");
//! assert!(!trie.contains("字典"));
//! assert!(trie.contains("字典树"));
//! ```

mod matcher;
mod node;

pub use matcher::Matches;

use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::codec::{decode, encode, encode_to_string};
use crate::error::Result;
use crate::types::{Codepoint, Codepoints, DictEntry, Match};
use node::{NodeArena, NodeId};

/// Default cap on matched pattern length, in codepoints
pub const DEFAULT_MAX_PATTERN_LENGTH: usize = 512;

/// Prefix tree options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrieOptions {
    /// Length cap used by [`PrefixTree::find_all_default`]
    pub max_pattern_length: usize,
}

impl Default for TrieOptions {
    fn default() -> Self {
        Self {
            max_pattern_length: DEFAULT_MAX_PATTERN_LENGTH,
        }
    }
}

impl TrieOptions {
    /// Create new trie options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default match length cap.
    pub fn with_max_pattern_length(mut self, len: usize) -> Self {
        self.max_pattern_length = len;
        self
    }
}

/// Dictionary of patterns supporting membership checks and
/// all-occurrences substring matching.
///
/// Single-owner and not synchronized; see [`crate::SharedTrie`] for a
/// lock-wrapped variant.
#[derive(Debug, Clone)]
pub struct PrefixTree {
    arena: NodeArena,
    entry_count: usize,
    options: TrieOptions,
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTree {
    /// Create an empty tree with default options
    pub fn new() -> Self {
        Self::with_options(TrieOptions::default())
    }

    pub fn with_options(options: TrieOptions) -> Self {
        Self {
            arena: NodeArena::new(),
            entry_count: 0,
            options,
        }
    }

    /// Build a tree from a list of patterns.
    ///
    /// Fails on the first pattern that is not valid UTF-8.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut trie = Self::new();
        trie.extend_patterns(patterns)?;
        Ok(trie)
    }

    pub fn options(&self) -> &TrieOptions {
        &self.options
    }

    /// Number of patterns currently stored
    pub fn len(&self) -> usize {
        self.entry_count
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// Number of nodes, root included. Removal never shrinks this.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Drop every node and entry.
    pub fn clear(&mut self) {
        self.arena = NodeArena::new();
        self.entry_count = 0;
    }

    /// Insert a UTF-8 pattern.
    ///
    /// Returns `true` if an entry for the same pattern was replaced. Invalid
    /// UTF-8 leaves the tree untouched; an empty pattern is a no-op.
    pub fn insert(&mut self, pattern: impl AsRef<[u8]>) -> Result<bool> {
        let word = decode(pattern)?;
        Ok(self.insert_codepoints(word))
    }

    /// Insert an already decoded pattern.
    pub fn insert_codepoints(&mut self, word: Codepoints) -> bool {
        if word.is_empty() {
            return false;
        }
        let id = word
            .iter()
            .fold(NodeId::ROOT, |id, &cp| self.arena.child_or_insert(id, cp));
        let len = word.len();
        let replaced = self
            .arena
            .get_mut(id)
            .replace_entry(DictEntry::new(word))
            .is_some();
        if !replaced {
            self.entry_count += 1;
        }
        debug!(len, replaced, "inserted pattern");
        replaced
    }

    /// Insert every pattern, or none if any of them is not valid UTF-8.
    pub fn extend_patterns<I, S>(&mut self, patterns: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let words = patterns
            .into_iter()
            .map(decode)
            .collect::<Result<Vec<_>>>()?;
        for word in words {
            self.insert_codepoints(word);
        }
        Ok(())
    }

    /// Remove a UTF-8 pattern.
    ///
    /// Returns whether an entry was detached. Absent patterns and invalid
    /// UTF-8 are silently ignored. Nodes along the path are kept.
    pub fn remove(&mut self, pattern: impl AsRef<[u8]>) -> bool {
        match decode(pattern) {
            Ok(word) => self.remove_codepoints(&word),
            Err(err) => {
                trace!(%err, "ignoring removal of undecodable pattern");
                false
            }
        }
    }

    pub fn remove_codepoints(&mut self, word: &[Codepoint]) -> bool {
        if word.is_empty() {
            return false;
        }
        let Some(id) = self.arena.walk(word) else {
            return false;
        };
        let removed = self.arena.get_mut(id).take_entry().is_some();
        if removed {
            self.entry_count -= 1;
        }
        debug!(len = word.len(), removed, "removed pattern");
        removed
    }

    /// True iff `pattern` is non-empty, valid UTF-8 and stored in the tree.
    pub fn contains(&self, pattern: impl AsRef<[u8]>) -> bool {
        decode(pattern).is_ok_and(|word| self.contains_codepoints(&word))
    }

    pub fn contains_codepoints(&self, word: &[Codepoint]) -> bool {
        self.get_codepoints(word).is_some()
    }

    /// Look up the entry stored for `pattern`.
    pub fn get(&self, pattern: impl AsRef<[u8]>) -> Option<&DictEntry> {
        let word = decode(pattern).ok()?;
        self.get_codepoints(&word)
    }

    pub fn get_codepoints(&self, word: &[Codepoint]) -> Option<&DictEntry> {
        if word.is_empty() {
            return None;
        }
        self.arena.get(self.arena.walk(word)?).entry()
    }

    /// Enumerate every stored pattern occurring in `text`.
    ///
    /// Yields `(start, entry)` ordered by start, then by length. Patterns
    /// longer than `max_pattern_length` codepoints are not reported.
    pub fn matches<'a>(
        &'a self,
        text: &'a [Codepoint],
        max_pattern_length: usize,
    ) -> Matches<'a> {
        Matches::new(&self.arena, text, max_pattern_length)
    }

    /// Every stored pattern occurring in `text`, as UTF-8, in discovery order.
    ///
    /// A pattern is reported once per occurrence. Invalid UTF-8 in `text`
    /// is an error; use [`find_all_or_empty`](Self::find_all_or_empty) for
    /// the lenient form. A matched pattern holding a surrogate or a value
    /// above U+10FFFF cannot become a `String` and fails with
    /// [`TrieError::NotScalar`](crate::TrieError::NotScalar);
    /// [`find_all_bytes`](Self::find_all_bytes) returns such patterns as bytes.
    pub fn find_all(
        &self,
        text: impl AsRef<[u8]>,
        max_pattern_length: usize,
    ) -> Result<Vec<String>> {
        let text = decode(text)?;
        let found = self
            .matches(&text, max_pattern_length)
            .map(|(_, entry)| encode_to_string(entry.word()))
            .collect::<Result<Vec<_>>>()?;
        trace!(text_len = text.len(), matches = found.len(), "find_all");
        Ok(found)
    }

    /// [`find_all`](Self::find_all) with the configured length cap.
    pub fn find_all_default(&self, text: impl AsRef<[u8]>) -> Result<Vec<String>> {
        self.find_all(text, self.options.max_pattern_length)
    }

    /// [`find_all`](Self::find_all), returning no matches on any error.
    pub fn find_all_or_empty(
        &self,
        text: impl AsRef<[u8]>,
        max_pattern_length: usize,
    ) -> Vec<String> {
        self.find_all(text, max_pattern_length)
            .unwrap_or_else(|err| {
                debug!(%err, "find_all failed, returning no matches");
                Vec::new()
            })
    }

    /// Like [`find_all`](Self::find_all), but returns raw UTF-8 bytes.
    ///
    /// Accepts every codepoint the permissive decoder can produce.
    pub fn find_all_bytes(
        &self,
        text: impl AsRef<[u8]>,
        max_pattern_length: usize,
    ) -> Result<Vec<Vec<u8>>> {
        let text = decode(text)?;
        self.matches(&text, max_pattern_length)
            .map(|(_, entry)| encode(entry.word()))
            .collect()
    }

    /// Like [`find_all`](Self::find_all), with codepoint positions.
    pub fn find_matches(
        &self,
        text: impl AsRef<[u8]>,
        max_pattern_length: usize,
    ) -> Result<Vec<Match>> {
        let text = decode(text)?;
        self.matches(&text, max_pattern_length)
            .map(|(start, entry)| {
                Ok(Match {
                    start,
                    len: entry.len(),
                    text: encode_to_string(entry.word())?,
                })
            })
            .collect()
    }

    /// Stored entries in lexicographic codepoint order.
    pub fn entries(&self) -> Vec<&DictEntry> {
        let mut out = Vec::with_capacity(self.entry_count);
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let node = self.arena.get(id);
            if let Some(entry) = node.entry() {
                out.push(entry);
            }
            // Reversed so the smallest codepoint is popped first.
            stack.extend(node.sorted_children().into_iter().rev().map(|(_, c)| c));
        }
        out
    }

    /// Stored patterns as UTF-8, in lexicographic codepoint order.
    pub fn patterns(&self) -> Result<Vec<String>> {
        self.entries()
            .into_iter()
            .map(|entry| encode_to_string(entry.word()))
            .collect()
    }
}
