//! Hash algorithms, the default-algorithm context, and tagged identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::{OidError, OidResult};

/// Widest digest of any supported algorithm, in bytes.
pub const MAX_RAWSZ: usize = 32;

/// Widest digest of any supported algorithm, in hex digits.
pub const MAX_HEXSZ: usize = MAX_RAWSZ * 2;

/// Width of a padded trie key: the zero-padded digest followed by the tag.
pub const KEY_LEN: usize = MAX_RAWSZ + 1;

/// Byte offset of the algorithm tag inside a padded key.
pub const TAG_OFFSET: usize = MAX_RAWSZ;

/// Hash algorithm that produced an identifier.
///
/// `Unknown` marks a query that does not care which algorithm produced the
/// digest. It is never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashAlgo {
    /// No algorithm specified.
    #[default]
    Unknown,
    /// SHA-1, 20-byte digests.
    Sha1,
    /// SHA-256, 32-byte digests.
    Sha256,
}

impl HashAlgo {
    /// Every concrete algorithm, in tag order.
    pub const KNOWN: [Self; 2] = [Self::Sha1, Self::Sha256];

    /// Digest width in bytes (0 for `Unknown`).
    #[must_use]
    pub const fn rawsz(self) -> usize {
        match self {
            Self::Unknown => 0,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
        }
    }

    /// Digest width in hex digits (0 for `Unknown`).
    #[must_use]
    pub const fn hexsz(self) -> usize {
        self.rawsz() * 2
    }

    /// Tag byte stored in padded keys.
    #[must_use]
    pub const fn tag(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Sha1 => 1,
            Self::Sha256 => 2,
        }
    }

    /// Inverse of [`tag`](Self::tag).
    #[must_use]
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Unknown),
            1 => Some(Self::Sha1),
            2 => Some(Self::Sha256),
            _ => None,
        }
    }

    /// Returns `true` for every algorithm except `Unknown`.
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgo {
    type Err = OidError;

    fn from_str(s: &str) -> OidResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            _ => Err(OidError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Default-algorithm context
// ---------------------------------------------------------------------------

/// Hash configuration consumed by an [`OidTree`](crate::OidTree).
///
/// Carries the active default algorithm, which decides how identifiers
/// with an `Unknown` algorithm are interpreted by containment checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashConfig {
    default_algo: HashAlgo,
}

impl HashConfig {
    /// Configuration whose default algorithm is SHA-1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_algo: HashAlgo::Sha1,
        }
    }

    /// Configuration with the given default algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`OidError::UnspecifiedAlgorithm`] for `Unknown`.
    pub fn with_default_algo(algo: HashAlgo) -> OidResult<Self> {
        if algo.is_known() {
            Ok(Self { default_algo: algo })
        } else {
            Err(OidError::UnspecifiedAlgorithm)
        }
    }

    /// The active default algorithm. Never `Unknown`.
    #[must_use]
    pub const fn default_algo(&self) -> HashAlgo {
        self.default_algo
    }

    /// Resolves `Unknown` to the default algorithm.
    #[must_use]
    pub const fn resolve(&self, algo: HashAlgo) -> HashAlgo {
        if algo.is_known() {
            algo
        } else {
            self.default_algo
        }
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// ObjectId
// ---------------------------------------------------------------------------

/// Tagged object identifier.
///
/// The digest is stored zero-padded to [`MAX_RAWSZ`]; bytes past the
/// algorithm's width are always zero, so derived equality is bytewise
/// equality over `(algo, digest)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    hash: [u8; MAX_RAWSZ],
    algo: HashAlgo,
}

impl ObjectId {
    /// Builds an identifier from raw digest bytes.
    ///
    /// For a concrete algorithm `digest` must be exactly its width. For
    /// `Unknown` any width up to [`MAX_RAWSZ`] is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`OidError::InvalidLength`] when a concrete algorithm's
    /// width is not matched exactly, and [`OidError::DigestTooLong`] when an
    /// `Unknown` digest is wider than [`MAX_RAWSZ`].
    pub fn from_digest(algo: HashAlgo, digest: &[u8]) -> OidResult<Self> {
        if algo.is_known() && digest.len() != algo.rawsz() {
            return Err(OidError::InvalidLength {
                expected: algo.rawsz(),
                actual: digest.len(),
            });
        }
        if digest.len() > MAX_RAWSZ {
            return Err(OidError::DigestTooLong {
                max: MAX_RAWSZ,
                actual: digest.len(),
            });
        }
        let mut hash = [0u8; MAX_RAWSZ];
        hash[..digest.len()].copy_from_slice(digest);
        Ok(Self { hash, algo })
    }

    /// Parses a full-length hex identifier.
    ///
    /// # Errors
    ///
    /// Returns [`OidError::InvalidHex`] for non-hex input and
    /// [`OidError::InvalidLength`] or [`OidError::DigestTooLong`] when the
    /// decoded width is wrong.
    pub fn from_hex(algo: HashAlgo, s: &str) -> OidResult<Self> {
        let bytes = hex::decode(s).map_err(|e| OidError::InvalidHex(e.to_string()))?;
        Self::from_digest(algo, &bytes)
    }

    /// The algorithm tag.
    #[must_use]
    pub const fn algo(&self) -> HashAlgo {
        self.algo
    }

    /// Digest bytes, trimmed to the algorithm's width.
    ///
    /// For `Unknown` the full padded buffer is returned.
    #[must_use]
    pub fn digest(&self) -> &[u8] {
        if self.algo.is_known() {
            &self.hash[..self.algo.rawsz()]
        } else {
            &self.hash
        }
    }

    /// Hex-encoded digest.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.digest())
    }

    /// Padded trie key: digest bytes, zero padding, then the tag byte.
    #[must_use]
    pub const fn to_key(&self) -> [u8; KEY_LEN] {
        let mut key = [0u8; KEY_LEN];
        let mut i = 0;
        while i < MAX_RAWSZ {
            key[i] = self.hash[i];
            i += 1;
        }
        key[TAG_OFFSET] = self.algo.tag();
        key
    }

    /// Padded key with the algorithm resolved against `config`.
    ///
    /// Digest bytes beyond the resolved algorithm's width are zeroed.
    #[must_use]
    pub fn to_key_resolved(&self, config: &HashConfig) -> [u8; KEY_LEN] {
        let algo = config.resolve(self.algo);
        let mut key = [0u8; KEY_LEN];
        let width = algo.rawsz();
        key[..width].copy_from_slice(&self.hash[..width]);
        key[TAG_OFFSET] = algo.tag();
        key
    }

    /// Rebuilds an identifier from a stored padded key.
    ///
    /// Returns `None` if the tag byte is not a known algorithm.
    #[must_use]
    pub fn from_key(key: &[u8; KEY_LEN]) -> Option<Self> {
        let algo = HashAlgo::from_tag(key[TAG_OFFSET])?;
        let mut hash = [0u8; MAX_RAWSZ];
        hash.copy_from_slice(&key[..MAX_RAWSZ]);
        Some(Self { hash, algo })
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({}:{})", self.algo, self.to_hex())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
