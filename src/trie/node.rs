//! Index-addressed node storage for the prefix tree.
//!
//! Nodes live in a single `Vec` and refer to their children by [`NodeId`],
//! so dropping the arena releases every node and every attached entry at once.

use std::collections::HashMap;

use crate::types::{Codepoint, DictEntry};

/// Position of a node in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// The root node, representing the empty prefix
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0
    }
}

/// One prefix position in the tree.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrieNode {
    /// Child edges, allocated on first insertion below this node
    children: Option<HashMap<Codepoint, NodeId>>,
    /// Present iff some pattern terminates exactly here
    entry: Option<DictEntry>,
}

impl TrieNode {
    #[inline]
    pub fn child(&self, cp: Codepoint) -> Option<NodeId> {
        self.children.as_ref()?.get(&cp).copied()
    }

    pub fn entry(&self) -> Option<&DictEntry> {
        self.entry.as_ref()
    }

    /// Attach `entry`, handing back whatever was attached before.
    pub fn replace_entry(&mut self, entry: DictEntry) -> Option<DictEntry> {
        self.entry.replace(entry)
    }

    pub fn take_entry(&mut self) -> Option<DictEntry> {
        self.entry.take()
    }

    /// Children in ascending codepoint order
    pub fn sorted_children(&self) -> Vec<(Codepoint, NodeId)> {
        let mut children: Vec<_> = self
            .children
            .iter()
            .flatten()
            .map(|(&cp, &id)| (cp, id))
            .collect();
        children.sort_unstable_by_key(|&(cp, _)| cp);
        children
    }
}

/// Arena owning every node of one tree. Slot 0 is always the root.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena {
    nodes: Vec<TrieNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn child(&self, id: NodeId, cp: Codepoint) -> Option<NodeId> {
        self.get(id).child(cp)
    }

    /// Follow the edge labelled `cp`, creating the child if it is missing.
    pub fn child_or_insert(&mut self, id: NodeId, cp: Codepoint) -> NodeId {
        if let Some(existing) = self.child(id, cp) {
            return existing;
        }
        let child = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::default());
        self.get_mut(id)
            .children
            .get_or_insert_with(HashMap::new)
            .insert(cp, child);
        child
    }

    /// Walk from the root along `path`; `None` if any edge is missing.
    pub fn walk(&self, path: &[Codepoint]) -> Option<NodeId> {
        path.iter()
            .try_fold(NodeId::ROOT, |id, &cp| self.child(id, cp))
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Codepoints;

    #[test]
    fn test_new_arena_has_only_root() {
        let arena = NodeArena::new();
        assert_eq!(arena.len(), 1);
        assert!(arena.get(NodeId::ROOT).children.is_none());
        assert!(arena.get(NodeId::ROOT).entry().is_none());
    }

    #[test]
    fn test_child_or_insert_reuses_existing_edge() {
        let mut arena = NodeArena::new();
        let a = arena.child_or_insert(NodeId::ROOT, 0x61);
        let again = arena.child_or_insert(NodeId::ROOT, 0x61);
        assert_eq!(a, again);
        assert_eq!(arena.len(), 2);

        let b = arena.child_or_insert(a, 0x62);
        assert_eq!(arena.walk(&[0x61, 0x62]), Some(b));
        assert_eq!(arena.walk(&[0x61, 0x63]), None);
        assert_eq!(arena.walk(&[]), Some(NodeId::ROOT));
    }

    #[test]
    fn test_replace_entry_returns_previous() {
        let mut arena = NodeArena::new();
        let id = arena.child_or_insert(NodeId::ROOT, 0x61);
        let first = DictEntry::new(Codepoints::from(vec![0x61]));
        assert!(arena.get_mut(id).replace_entry(first.clone()).is_none());
        let previous = arena.get_mut(id).replace_entry(first.clone());
        assert_eq!(previous, Some(first));
        assert!(arena.get_mut(id).take_entry().is_some());
        assert!(arena.get(id).entry().is_none());
    }

    #[test]
    fn test_sorted_children() {
        let mut arena = NodeArena::new();
        for cp in [0x63, 0x61, 0x62] {
            arena.child_or_insert(NodeId::ROOT, cp);
        }
        let cps: Vec<_> = arena
            .get(NodeId::ROOT)
            .sorted_children()
            .into_iter()
            .map(|(cp, _)| cp)
            .collect();
        assert_eq!(cps, vec![0x61, 0x62, 0x63]);
    }
}
