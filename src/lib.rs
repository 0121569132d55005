//! Dict Trie - multi-pattern substring matching over UTF-8 text
//!
//! This library provides a dictionary trie keyed by Unicode codepoints with:
//! - Insertion, soft removal and membership checks of UTF-8 patterns
//! - All-occurrences matching: every stored pattern found at every start
//!   offset of a text, overlapping and nested matches included
//! - A permissive UTF-8 ⇄ codepoint codec with all-or-nothing error handling
//! - An optional lock-wrapped variant with an LRU cache of match results
//!
//! # Example
//!
//! ```rust
//! use dict_trie::PrefixTree;
//!
//! let mut trie = PrefixTree::new();
//! for word in ["字典", "节点", "定义", "字典树"] {
//!     trie.insert(word).unwrap();
//! }
//!
//! // Every occurrence, ordered by start offset then by length
//! let found = trie.find_all("字典树节点定义", 512).unwrap();
//! assert_eq!(found, vec!["字典", "字典树", "节点", "定义"]);
//!
//! // Positions are counted in codepoints
//! let matches = trie.find_matches("字典树节点定义", 512).unwrap();
//! assert_eq!((matches[2].start, matches[2].len), (3, 2));
//! ```
//!
//! # Matching semantics
//!
//! | Input | Behavior |
//! |-------|----------|
//! | Empty pattern | Never stored, never contained |
//! | Re-inserted pattern | Replaces the previous entry |
//! | Removed pattern | Entry detached, nodes kept |
//! | Invalid UTF-8 pattern | `insert` fails, `remove`/`contains` ignore it |
//! | Invalid UTF-8 text | `find_all` fails; `find_all_or_empty` returns nothing |
//! | `max_pattern_length` of 0 | No matches |

pub mod codec;
pub mod error;
#[cfg(feature = "shared")]
pub mod shared;
pub mod trie;
pub mod types;

// Re-export commonly used items
pub use codec::{decode, encode, encode_to_string, is_single_codepoint};
pub use error::{DecodeErrorKind, Result, TrieError};
pub use trie::{Matches, PrefixTree, TrieOptions, DEFAULT_MAX_PATTERN_LENGTH};
pub use types::{Codepoint, Codepoints, DictEntry, Match};

#[cfg(feature = "shared")]
pub use shared::{SharedOptions, SharedTrie, DEFAULT_CACHE_SIZE};
