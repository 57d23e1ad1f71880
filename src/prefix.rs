//! Hex abbreviations translated into binary trie prefixes.

use std::fmt;

use crate::error::{OidError, OidResult};
use crate::hash::{HashAlgo, KEY_LEN, MAX_HEXSZ, MAX_RAWSZ};

/// A parsed hex abbreviation.
///
/// `n` hex digits become `n / 2` whole bytes that bound the trie walk, plus
/// a trailing high nibble when `n` is odd. The nibble and the algorithm
/// filter are applied per candidate, since the trie knows neither.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct OidPrefix {
    key: [u8; KEY_LEN],
    hex_len: usize,
    algo: HashAlgo,
}

impl OidPrefix {
    /// Parses `hex` as an abbreviation of an identifier of `algo`.
    ///
    /// `HashAlgo::Unknown` matches identifiers of every algorithm. An empty
    /// prefix matches everything.
    ///
    /// # Errors
    ///
    /// - [`OidError::InvalidHex`] if `hex` contains a non-hex character.
    /// - [`OidError::PrefixTooLong`] if `hex` is longer than the digest of
    ///   `algo` (or of the widest algorithm when `algo` is `Unknown`).
    pub fn from_hex(hex: &str, algo: HashAlgo) -> OidResult<Self> {
        if let Some((pos, c)) = hex.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
            return Err(OidError::InvalidHex(format!(
                "invalid character {c:?} at position {pos}"
            )));
        }

        let max = if algo.is_known() {
            algo.hexsz()
        } else {
            MAX_HEXSZ
        };
        if hex.len() > max {
            return Err(OidError::PrefixTooLong {
                max,
                actual: hex.len(),
            });
        }

        let whole = hex.len() / 2;
        let mut key = [0u8; KEY_LEN];
        hex::decode_to_slice(&hex[..whole * 2], &mut key[..whole])
            .map_err(|e| OidError::InvalidHex(e.to_string()))?;
        if hex.len() % 2 == 1 {
            // Pad the odd digit to a full byte so it lands in the high nibble.
            let last = [hex.as_bytes()[hex.len() - 1], b'0'];
            hex::decode_to_slice(last, &mut key[whole..=whole])
                .map_err(|e| OidError::InvalidHex(e.to_string()))?;
        }

        Ok(Self {
            key,
            hex_len: hex.len(),
            algo,
        })
    }

    /// Number of hex digits in the abbreviation.
    #[must_use]
    pub const fn hex_len(&self) -> usize {
        self.hex_len
    }

    /// Algorithm filter (`Unknown` means any).
    #[must_use]
    pub const fn algo(&self) -> HashAlgo {
        self.algo
    }

    /// Prefix bytes padded to key width; only the first
    /// [`byte_len`](Self::byte_len) bytes bound the trie walk.
    #[must_use]
    pub const fn key(&self) -> &[u8; KEY_LEN] {
        &self.key
    }

    /// Whole bytes covered by the abbreviation.
    #[must_use]
    pub const fn byte_len(&self) -> usize {
        self.hex_len / 2
    }

    /// Trailing half-byte constraint for odd-length abbreviations:
    /// `(byte offset, query byte)`, where only the high nibble of the
    /// query byte is significant.
    #[must_use]
    pub const fn last_nibble(&self) -> Option<(usize, u8)> {
        if self.hex_len % 2 == 1 {
            let at = self.hex_len / 2;
            Some((at, self.key[at]))
        } else {
            None
        }
    }

    /// Returns `true` if a stored padded key passes the nibble and
    /// algorithm filters. The whole-byte prefix is assumed to match.
    #[must_use]
    pub fn admits(&self, candidate: &[u8; KEY_LEN]) -> bool {
        if self.algo.is_known() && candidate[MAX_RAWSZ] != self.algo.tag() {
            return false;
        }
        match self.last_nibble() {
            Some((at, byte)) => (candidate[at] ^ byte) & 0xF0 == 0,
            None => true,
        }
    }
}

impl fmt::Debug for OidPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut hex = hex::encode(&self.key[..self.hex_len.div_ceil(2)]);
        hex.truncate(self.hex_len);
        f.debug_struct("OidPrefix")
            .field("hex", &hex)
            .field("algo", &self.algo)
            .finish()
    }
}
