//! Iterator over the keys of a crit-bit trie.

use safe_bump::Idx;

use crate::node::{self, Node};
use crate::store::TrieStore;

/// Iterator over references to the keys of a [`CritBitTree`](crate::CritBitTree),
/// in trie order.
pub struct Iter<'a, const N: usize> {
    keys: Vec<&'a [u8; N]>,
    pos: usize,
}

impl<'a, const N: usize> Iter<'a, N> {
    /// Creates an iterator by collecting all leaves via DFS.
    pub fn new<S: TrieStore<N>>(store: &'a S, root: Option<Idx<Node<N>>>) -> Self {
        let mut keys = Vec::new();
        if let Some(idx) = root {
            collect(store, idx, &mut keys);
        }
        Self { keys, pos: 0 }
    }
}

impl<'a, const N: usize> Iterator for Iter<'a, N> {
    type Item = &'a [u8; N];

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.keys.get(self.pos).copied()?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.keys.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<const N: usize> ExactSizeIterator for Iter<'_, N> {}

/// DFS collect every key in the subtree rooted at `node_idx`.
fn collect<'a, const N: usize, S: TrieStore<N>>(
    store: &'a S,
    node_idx: Idx<Node<N>>,
    out: &mut Vec<&'a [u8; N]>,
) {
    match *store.get_node(node_idx) {
        Node::Leaf { key, .. } => out.push(store.get_key(key)),
        Node::Branch { links, .. } => {
            collect(store, store.get_link(links), out);
            collect(store, store.get_link(node::offset(links, 1)), out);
        }
    }
}
