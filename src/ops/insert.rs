//! Insertion operation — splices one branch and one leaf per new key.

use safe_bump::Idx;

use crate::node::{self, Node};
use crate::ops::lookup::descend;
use crate::store::TrieStore;

/// Where a subtree hangs: the tree root or a branch's link slot.
enum Slot<const N: usize> {
    Root,
    Link(Idx<Idx<Node<N>>>),
}

/// Outcome of an insert.
pub enum InsertOutcome<const N: usize> {
    /// The key was new. Carries the (possibly unchanged) root.
    Inserted(Idx<Node<N>>),
    /// An equal key is already stored; nothing was allocated.
    Duplicate,
}

/// Inserts `key` into the tree rooted at `root`, comparing over `key_len`
/// bytes.
///
/// A key equal to a stored key over the shorter of the two significant
/// lengths is a duplicate. Duplicates are detected before anything is
/// allocated.
pub fn insert<const N: usize, S: TrieStore<N>>(
    store: &mut S,
    root: Option<Idx<Node<N>>>,
    key: &[u8; N],
    key_len: usize,
) -> InsertOutcome<N> {
    let Some(root) = root else {
        return InsertOutcome::Inserted(alloc_leaf(store, key, key_len));
    };

    // Locate the first byte where the new key leaves the closest stored key.
    let (found, found_len) = descend(store, root, key, key_len);
    let stored = store.get_key(found);
    let cmp_len = key_len.min(found_len);
    let Some(new_byte) = (0..cmp_len).find(|&i| stored[i] != key[i]) else {
        return InsertOutcome::Duplicate;
    };
    let new_mask = node::crit_mask(stored[new_byte] ^ key[new_byte]);
    let new_dir = node::direction(key[new_byte], new_mask);
    let new_bit = node::bit_index(new_byte, new_mask);

    // Walk down again to the first subtree whose critical bit comes after
    // the new one; the new branch goes directly above it.
    let mut slot = Slot::Root;
    let mut cur = root;
    while let Node::Branch { byte, mask, links } = *store.get_node(cur) {
        if node::bit_index(byte, mask) > new_bit {
            break;
        }
        let c = node::byte_at(key, key_len, byte);
        let next = node::offset(links, node::direction(c, mask));
        slot = Slot::Link(next);
        cur = store.get_link(next);
    }

    let leaf = alloc_leaf(store, key, key_len);
    let mut children = [cur; 2];
    children[new_dir] = leaf;
    let links = store.alloc_links(children);
    let branch = store.alloc_node(Node::Branch {
        byte: new_byte,
        mask: new_mask,
        links,
    });

    match slot {
        Slot::Root => InsertOutcome::Inserted(branch),
        Slot::Link(at) => {
            store.set_link(at, branch);
            InsertOutcome::Inserted(root)
        }
    }
}

fn alloc_leaf<const N: usize, S: TrieStore<N>>(
    store: &mut S,
    key: &[u8; N],
    key_len: usize,
) -> Idx<Node<N>> {
    let key = store.alloc_key(*key);
    store.alloc_node(Node::Leaf { key, len: key_len })
}
