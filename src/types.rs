use std::fmt;
use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One decoded Unicode scalar value.
pub type Codepoint = u32;

/// An ordered sequence of decoded codepoints
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codepoints(Vec<Codepoint>);

impl Codepoints {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create an empty sequence with room for `capacity` codepoints
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, cp: Codepoint) {
        self.0.push(cp);
    }

    pub fn into_inner(self) -> Vec<Codepoint> {
        self.0
    }
}

impl Deref for Codepoints {
    type Target = [Codepoint];

    fn deref(&self) -> &[Codepoint] {
        &self.0
    }
}

impl From<Vec<Codepoint>> for Codepoints {
    fn from(v: Vec<Codepoint>) -> Self {
        Self(v)
    }
}

impl From<&[Codepoint]> for Codepoints {
    fn from(v: &[Codepoint]) -> Self {
        Self(v.to_vec())
    }
}

impl FromIterator<Codepoint> for Codepoints {
    fn from_iter<I: IntoIterator<Item = Codepoint>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Lossy rendering for diagnostics; unrepresentable codepoints print as U+FFFD.
impl fmt::Display for Codepoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cp in &self.0 {
            let ch = char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER);
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

/// A dictionary entry attached to the node where its pattern terminates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    word: Codepoints,
}

impl DictEntry {
    pub fn new(word: Codepoints) -> Self {
        Self { word }
    }

    /// The pattern as codepoints
    pub fn word(&self) -> &Codepoints {
        &self.word
    }

    /// Pattern length in codepoints
    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// One occurrence reported by the match enumerator.
///
/// `start` and `len` count codepoints, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Match {
    /// Codepoint offset of the first matched codepoint
    pub start: usize,
    /// Matched length in codepoints
    pub len: usize,
    /// The matched pattern, re-encoded as UTF-8
    pub text: String,
}

impl Match {
    /// Exclusive codepoint offset after the match
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}
