//! Lookup operation — single-pass descent plus the confirming comparison.

use safe_bump::Idx;

use crate::node::{self, Node};
use crate::store::TrieStore;

/// Follows critical bits from `node_idx` down to a leaf.
///
/// Bytes at or past `key_len` read as zero. The leaf reached shares the
/// tested bits with `key`, not necessarily the whole key.
///
/// Returns the leaf's key index and significant length.
pub fn descend<const N: usize, S: TrieStore<N>>(
    store: &S,
    mut node_idx: Idx<Node<N>>,
    key: &[u8; N],
    key_len: usize,
) -> (Idx<[u8; N]>, usize) {
    loop {
        match *store.get_node(node_idx) {
            Node::Leaf { key, len } => return (key, len),
            Node::Branch { byte, mask, links } => {
                let c = node::byte_at(key, key_len, byte);
                node_idx = store.get_link(node::offset(links, node::direction(c, mask)));
            }
        }
    }
}

/// Returns `true` if a stored key equals `key` over its first `key_len` bytes.
pub fn lookup<const N: usize, S: TrieStore<N>>(
    store: &S,
    root: Idx<Node<N>>,
    key: &[u8; N],
    key_len: usize,
) -> bool {
    let (found, _) = descend(store, root, key, key_len);
    // The descent only tested critical bits; confirm every byte.
    store.get_key(found)[..key_len] == key[..key_len]
}
