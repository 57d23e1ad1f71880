//! Prefix enumeration with visitor-driven early exit.

use safe_bump::Idx;

use crate::Walk;
use crate::node::{self, Node};
use crate::store::TrieStore;

/// Visits every stored key whose first `key_len` bytes equal those of
/// `prefix`, in trie order (0-side before 1-side).
///
/// Returns [`Walk::Stop`] if the visitor stopped the walk.
pub fn each_prefix<const N: usize, S, F>(
    store: &S,
    root: Idx<Node<N>>,
    prefix: &[u8; N],
    key_len: usize,
    visit: &mut F,
) -> Walk
where
    S: TrieStore<N>,
    F: FnMut(&[u8; N]) -> Walk,
{
    // Descend while branches test bits inside the prefix; everything below
    // the last such branch shares the tested bits.
    let mut top = root;
    let mut cur = root;
    let found = loop {
        match *store.get_node(cur) {
            Node::Leaf { key, .. } => break key,
            Node::Branch { byte, mask, links } => {
                let c = node::byte_at(prefix, key_len, byte);
                cur = store.get_link(node::offset(links, node::direction(c, mask)));
                if byte < key_len {
                    top = cur;
                }
            }
        }
    };

    // One representative leaf decides for the whole subtree.
    if store.get_key(found)[..key_len] != prefix[..key_len] {
        return Walk::Continue;
    }
    traverse(store, top, visit)
}

/// Depth-first visit of every leaf under `node_idx`.
pub fn traverse<const N: usize, S, F>(store: &S, node_idx: Idx<Node<N>>, visit: &mut F) -> Walk
where
    S: TrieStore<N>,
    F: FnMut(&[u8; N]) -> Walk,
{
    match *store.get_node(node_idx) {
        Node::Leaf { key, .. } => visit(store.get_key(key)),
        Node::Branch { links, .. } => {
            if traverse(store, store.get_link(links), visit) == Walk::Stop {
                return Walk::Stop;
            }
            traverse(store, store.get_link(node::offset(links, 1)), visit)
        }
    }
}
