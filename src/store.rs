//! Storage abstraction for crit-bit trie operations.

use safe_bump::Idx;

use crate::node::Node;

/// Storage backend for crit-bit trie operations.
///
/// Abstracts over [`Arena`](safe_bump::Arena) (single-thread) and
/// [`SharedArena`](safe_bump::SharedArena) (multi-thread) backends. Nodes
/// and keys are never modified once allocated; only link slots are
/// rewritten, when a new branch is spliced above an existing subtree.
pub trait TrieStore<const N: usize> {
    /// Allocates a single node, returning its index.
    fn alloc_node(&mut self, node: Node<N>) -> Idx<Node<N>>;

    /// Returns a reference to the node at `idx`.
    fn get_node(&self, idx: Idx<Node<N>>) -> &Node<N>;

    /// Copies `key` into the keys arena, returning its index.
    fn alloc_key(&mut self, key: [u8; N]) -> Idx<[u8; N]>;

    /// Returns a reference to the key at `idx`.
    fn get_key(&self, idx: Idx<[u8; N]>) -> &[u8; N];

    /// Allocates a contiguous pair of link slots, returning the index of the
    /// 0-side slot; the 1-side slot follows it.
    fn alloc_links(&mut self, children: [Idx<Node<N>>; 2]) -> Idx<Idx<Node<N>>>;

    /// Returns the node referenced by the link slot at `idx`.
    fn get_link(&self, idx: Idx<Idx<Node<N>>>) -> Idx<Node<N>>;

    /// Redirects the link slot at `idx` to `node`.
    fn set_link(&mut self, idx: Idx<Idx<Node<N>>>, node: Idx<Node<N>>);

    /// Returns the total number of allocated items in each arena:
    /// `(nodes, keys, links)`.
    fn arena_len(&self) -> (usize, usize, usize);
}
