//! Generic crit-bit trie over fixed-width byte keys.

use std::fmt;

use safe_bump::Idx;

use crate::Walk;
use crate::arena::TrieArena;
use crate::iter::Iter;
use crate::node::Node;
use crate::ops::each::each_prefix;
use crate::ops::insert::{InsertOutcome, insert};
use crate::ops::lookup::lookup;
use crate::store::TrieStore;

/// Crit-bit (PATRICIA) trie over `N`-byte keys.
///
/// Every operation takes a comparison length `key_len <= N`: only the
/// first `key_len` bytes of a key take part, and bytes past it read as
/// zero while descending. Insert and lookup cost O(`key_len` · 8) node
/// visits regardless of how many keys are stored.
///
/// Keys cannot be removed. All storage is released at once by
/// [`clear`](Self::clear) or on drop.
pub struct CritBitTree<const N: usize, S = TrieArena<N>> {
    store: S,
    root: Option<Idx<Node<N>>>,
    size: usize,
}

// ---------------------------------------------------------------------------
// Construction & accessors
// ---------------------------------------------------------------------------

impl<const N: usize, S: TrieStore<N> + Default> CritBitTree<N, S> {
    /// Creates an empty tree. Nothing is allocated until the first insert.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: S::default(),
            root: None,
            size: 0,
        }
    }

    /// Releases every node and key in one step and leaves the tree empty.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl<const N: usize, S: TrieStore<N>> CritBitTree<N, S> {
    /// Returns the number of stored keys.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if no key is stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the total number of allocated items in each arena:
    /// `(nodes, keys, links)`.
    #[must_use]
    pub fn arena_len(&self) -> (usize, usize, usize) {
        self.store.arena_len()
    }

    /// Inserts `key`, significant over its first `key_len` bytes.
    ///
    /// Returns `false` if an equal key was already stored, in which case
    /// the tree is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `key_len > N`.
    pub fn insert(&mut self, key: &[u8; N], key_len: usize) -> bool {
        assert!(key_len <= N, "key_len {key_len} exceeds key width {N}");
        match insert(&mut self.store, self.root, key, key_len) {
            InsertOutcome::Inserted(root) => {
                self.root = Some(root);
                self.size += 1;
                true
            }
            InsertOutcome::Duplicate => false,
        }
    }

    /// Returns `true` if a stored key equals `key` over `key_len` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `key_len > N`.
    #[must_use]
    pub fn contains(&self, key: &[u8; N], key_len: usize) -> bool {
        assert!(key_len <= N, "key_len {key_len} exceeds key width {N}");
        self.root
            .is_some_and(|root| lookup(&self.store, root, key, key_len))
    }

    /// Calls `visit` for every stored key that starts with
    /// `prefix[..key_len]`, until it returns [`Walk::Stop`].
    ///
    /// The order is deterministic for a given set of keys but otherwise
    /// unspecified. Returns [`Walk::Stop`] if the visitor stopped the walk.
    ///
    /// # Panics
    ///
    /// Panics if `key_len > N`.
    pub fn each_prefix<F>(&self, prefix: &[u8; N], key_len: usize, mut visit: F) -> Walk
    where
        F: FnMut(&[u8; N]) -> Walk,
    {
        assert!(key_len <= N, "key_len {key_len} exceeds key width {N}");
        match self.root {
            Some(root) => each_prefix(&self.store, root, prefix, key_len, &mut visit),
            None => Walk::Continue,
        }
    }

    /// Returns an iterator over every stored key.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, N> {
        Iter::new(&self.store, self.root)
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<const N: usize, S: TrieStore<N> + Default> Default for CritBitTree<N, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, S: TrieStore<N>> fmt::Debug for CritBitTree<N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CritBitTree")
            .field("len", &self.size)
            .field("key_width", &N)
            .finish_non_exhaustive()
    }
}

impl<const N: usize, S: TrieStore<N>> Extend<[u8; N]> for CritBitTree<N, S> {
    fn extend<I: IntoIterator<Item = [u8; N]>>(&mut self, iter: I) {
        for key in iter {
            self.insert(&key, N);
        }
    }
}

impl<const N: usize, S: TrieStore<N> + Default> FromIterator<[u8; N]> for CritBitTree<N, S> {
    fn from_iter<I: IntoIterator<Item = [u8; N]>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, const N: usize, S: TrieStore<N>> IntoIterator for &'a CritBitTree<N, S> {
    type Item = &'a [u8; N];
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Iter<'a, N> {
        self.iter()
    }
}
