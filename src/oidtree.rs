//! Object-identifier index over the crit-bit trie.

use std::fmt;

use tracing::{debug, trace};

use crate::Walk;
use crate::arena::TrieArena;
use crate::arena_sync::TrieArenaSync;
use crate::error::{OidError, OidResult};
use crate::hash::{HashAlgo, HashConfig, KEY_LEN, MAX_RAWSZ, ObjectId};
use crate::prefix::OidPrefix;
use crate::store::TrieStore;
use crate::tree::CritBitTree;

/// Membership and abbreviation index for object identifiers.
///
/// Identifiers of different algorithms live in one trie: each is stored as
/// a zero-padded digest followed by its algorithm tag, so equal digest
/// bytes under different algorithms stay distinct entries.
pub struct OidTree<S = TrieArena<KEY_LEN>> {
    tree: CritBitTree<KEY_LEN, S>,
    config: HashConfig,
}

/// [`OidTree`] backed by shared arenas; `Send + Sync`, so a finished tree
/// can serve read-only queries from several threads.
pub type OidTreeSync = OidTree<TrieArenaSync<KEY_LEN>>;

// ---------------------------------------------------------------------------
// Construction & teardown
// ---------------------------------------------------------------------------

impl<S: TrieStore<KEY_LEN> + Default> OidTree<S> {
    /// Creates an empty index with the default configuration (SHA-1).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HashConfig::default())
    }

    /// Creates an empty index using `config` to interpret identifiers whose
    /// algorithm is unspecified.
    #[must_use]
    pub fn with_config(config: HashConfig) -> Self {
        Self {
            tree: CritBitTree::new(),
            config,
        }
    }

    /// Drops every stored identifier and releases the arena in one step.
    /// The configuration is kept.
    pub fn clear(&mut self) {
        debug!(len = self.tree.len(), "clearing object id tree");
        self.tree.clear();
    }
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

impl<S: TrieStore<KEY_LEN>> OidTree<S> {
    /// The hash configuration this index was built with.
    #[must_use]
    pub const fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Number of distinct identifiers stored.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Arena footprint: `(nodes, keys, links)`.
    #[must_use]
    pub fn arena_len(&self) -> (usize, usize, usize) {
        self.tree.arena_len()
    }

    /// Returns an iterator over every stored identifier.
    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.tree.iter().filter_map(ObjectId::from_key)
    }
}

// ---------------------------------------------------------------------------
// Insert & queries
// ---------------------------------------------------------------------------

impl<S: TrieStore<KEY_LEN>> OidTree<S> {
    /// Adds `oid` to the index.
    ///
    /// Returns `Ok(false)` if it was already present; a duplicate allocates
    /// nothing and leaves the index unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`OidError::UnspecifiedAlgorithm`] if `oid` has no concrete
    /// algorithm.
    pub fn insert(&mut self, oid: &ObjectId) -> OidResult<bool> {
        if !oid.algo().is_known() {
            return Err(OidError::UnspecifiedAlgorithm);
        }
        let inserted = self.tree.insert(&oid.to_key(), KEY_LEN);
        if inserted {
            trace!(%oid, algo = %oid.algo(), "inserted object id");
        } else {
            debug!(%oid, algo = %oid.algo(), "duplicate object id ignored");
        }
        Ok(inserted)
    }

    /// Returns `true` if `oid` is stored.
    ///
    /// With a concrete algorithm this is an exact match on `(algo, digest)`.
    ///
    /// With `HashAlgo::Unknown` only digest bytes are compared, truncated
    /// to the configured default algorithm's width and zero-padded. This is
    /// narrower than a search across every algorithm: it answers "is there
    /// an entry with these digest bytes", assuming the digest belongs to
    /// the default algorithm.
    #[must_use]
    pub fn contains(&self, oid: &ObjectId) -> bool {
        if oid.algo().is_known() {
            self.tree.contains(&oid.to_key(), KEY_LEN)
        } else {
            self.tree.contains(&oid.to_key_resolved(&self.config), MAX_RAWSZ)
        }
    }

    /// Calls `visit` for every stored identifier matching `prefix`, until
    /// it returns [`Walk::Stop`].
    ///
    /// The trie walk is bounded by the prefix's whole bytes; the trailing
    /// nibble and the algorithm filter are checked per candidate, and
    /// rejected candidates never reach `visit`. Order is unspecified.
    pub fn each_prefix<F>(&self, prefix: &OidPrefix, mut visit: F) -> Walk
    where
        F: FnMut(&ObjectId) -> Walk,
    {
        self.tree
            .each_prefix(prefix.key(), prefix.byte_len(), |key| {
                if !prefix.admits(key) {
                    return Walk::Continue;
                }
                match ObjectId::from_key(key) {
                    Some(oid) => visit(&oid),
                    None => Walk::Continue,
                }
            })
    }

    /// Parses `hex` as an abbreviation and walks its matches; see
    /// [`each_prefix`](Self::each_prefix).
    ///
    /// # Errors
    ///
    /// Returns the errors of [`OidPrefix::from_hex`]; `visit` is never
    /// called for a malformed prefix.
    pub fn find_by_prefix<F>(&self, hex: &str, algo: HashAlgo, visit: F) -> OidResult<Walk>
    where
        F: FnMut(&ObjectId) -> Walk,
    {
        let prefix = OidPrefix::from_hex(hex, algo)?;
        Ok(self.each_prefix(&prefix, visit))
    }

    /// Collects every identifier matching `hex` under `algo`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`OidPrefix::from_hex`].
    pub fn matches(&self, hex: &str, algo: HashAlgo) -> OidResult<Vec<ObjectId>> {
        let mut out = Vec::new();
        self.find_by_prefix(hex, algo, |oid| {
            out.push(*oid);
            Walk::Continue
        })?;
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<S: TrieStore<KEY_LEN> + Default> Default for OidTree<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TrieStore<KEY_LEN>> fmt::Debug for OidTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OidTree")
            .field("len", &self.tree.len())
            .field("default_algo", &self.config.default_algo())
            .finish_non_exhaustive()
    }
}
