//! All-occurrences match enumeration.
//!
//! For every start offset the walk descends from the root while the next
//! codepoint has a matching edge and the consumed length stays within the
//! cap, reporting each node that carries an entry. The start then advances
//! by exactly one, so overlapping and nested occurrences are all reported.

use super::node::{NodeArena, NodeId};
use crate::types::{Codepoint, DictEntry};

/// Iterator over `(start, entry)` pairs found in a codepoint sequence.
///
/// Ordered by start ascending, then by matched length ascending.
pub struct Matches<'a> {
    arena: &'a NodeArena,
    text: &'a [Codepoint],
    max_len: usize,
    start: usize,
    depth: usize,
    node: NodeId,
}

impl<'a> Matches<'a> {
    pub(crate) fn new(arena: &'a NodeArena, text: &'a [Codepoint], max_len: usize) -> Self {
        Self {
            arena,
            text,
            max_len,
            start: 0,
            depth: 0,
            node: NodeId::ROOT,
        }
    }

    /// Follow one more edge for the current start, if the walk may continue.
    #[inline]
    fn step(&self) -> Option<NodeId> {
        if self.depth >= self.max_len {
            return None;
        }
        let cp = *self.text.get(self.start + self.depth)?;
        self.arena.child(self.node, cp)
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = (usize, &'a DictEntry);

    fn next(&mut self) -> Option<Self::Item> {
        while self.start < self.text.len() {
            match self.step() {
                Some(child) => {
                    self.node = child;
                    self.depth += 1;
                    if let Some(entry) = self.arena.get(child).entry() {
                        return Some((self.start, entry));
                    }
                }
                None => {
                    self.start += 1;
                    self.depth = 0;
                    self.node = NodeId::ROOT;
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Codepoints;

    fn arena_with(words: &[&[Codepoint]]) -> NodeArena {
        let mut arena = NodeArena::new();
        for word in words {
            let id = word
                .iter()
                .fold(NodeId::ROOT, |id, &cp| arena.child_or_insert(id, cp));
            arena
                .get_mut(id)
                .replace_entry(DictEntry::new(Codepoints::from(*word)));
        }
        arena
    }

    fn collect(arena: &NodeArena, text: &[Codepoint], max_len: usize) -> Vec<(usize, usize)> {
        Matches::new(arena, text, max_len)
            .map(|(start, entry)| (start, entry.len()))
            .collect()
    }

    #[test]
    fn test_nested_and_overlapping() {
        let arena = arena_with(&[&[1], &[1, 2], &[2, 3], &[1, 2, 3]]);
        assert_eq!(
            collect(&arena, &[1, 2, 3], usize::MAX),
            vec![(0, 1), (0, 2), (0, 3), (1, 2)]
        );
    }

    #[test]
    fn test_length_cap() {
        let arena = arena_with(&[&[1], &[1, 2], &[1, 2, 3]]);
        assert_eq!(collect(&arena, &[1, 2, 3], 2), vec![(0, 1), (0, 2)]);
        assert!(collect(&arena, &[1, 2, 3], 0).is_empty());
    }

    #[test]
    fn test_repeated_occurrences() {
        let arena = arena_with(&[&[7, 7]]);
        assert_eq!(collect(&arena, &[7, 7, 7], usize::MAX), vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn test_empty_text_and_empty_tree() {
        let arena = arena_with(&[&[1]]);
        assert!(collect(&arena, &[], usize::MAX).is_empty());
        let empty = NodeArena::new();
        assert!(collect(&empty, &[1, 2], usize::MAX).is_empty());
    }
}
