//! Shared-arena-backed storage (multi-threaded).

use safe_bump::{Arena, Idx, SharedArena};

use crate::node::Node;
use crate::store::TrieStore;

/// Thread-safe storage backend: [`SharedArena`]s for nodes and keys, an
/// [`Arena`] for the rewritable link slots.
///
/// Mutation still requires `&mut self`; the shared backend only makes a
/// finished tree `Send + Sync` so read-only queries can run in parallel.
pub struct TrieArenaSync<const N: usize> {
    nodes: SharedArena<Node<N>>,
    keys: SharedArena<[u8; N]>,
    links: Arena<Idx<Node<N>>>,
}

impl<const N: usize> TrieArenaSync<N> {
    /// Creates an empty store.
    pub const fn new() -> Self {
        Self {
            nodes: SharedArena::new(),
            keys: SharedArena::new(),
            links: Arena::new(),
        }
    }
}

impl<const N: usize> Default for TrieArenaSync<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TrieStore<N> for TrieArenaSync<N> {
    fn alloc_node(&mut self, node: Node<N>) -> Idx<Node<N>> {
        self.nodes.alloc(node)
    }

    fn get_node(&self, idx: Idx<Node<N>>) -> &Node<N> {
        self.nodes.get(idx)
    }

    fn alloc_key(&mut self, key: [u8; N]) -> Idx<[u8; N]> {
        self.keys.alloc(key)
    }

    fn get_key(&self, idx: Idx<[u8; N]>) -> &[u8; N] {
        self.keys.get(idx)
    }

    fn alloc_links(&mut self, children: [Idx<Node<N>>; 2]) -> Idx<Idx<Node<N>>> {
        self.links.alloc_extend(children).expect("two link slots")
    }

    fn get_link(&self, idx: Idx<Idx<Node<N>>>) -> Idx<Node<N>> {
        *self.links.get(idx)
    }

    fn set_link(&mut self, idx: Idx<Idx<Node<N>>>, node: Idx<Node<N>>) {
        *self.links.get_mut(idx) = node;
    }

    fn arena_len(&self) -> (usize, usize, usize) {
        (self.nodes.len(), self.keys.len(), self.links.len())
    }
}
