//! Crit-bit trie node types and bit helpers.

use std::fmt;

use safe_bump::Idx;

/// Crit-bit trie node over `N`-byte keys.
///
/// Two variants:
/// - [`Branch`](Self::Branch) — records only where its two subtrees first differ
/// - [`Leaf`](Self::Leaf) — owns one stored key
pub enum Node<const N: usize> {
    /// Internal node.
    ///
    /// Invariant: every branch on a root-to-leaf path tests a strictly
    /// later bit than its ancestors.
    Branch {
        /// Byte offset of the critical bit.
        byte: usize,
        /// Single-bit mask selecting the critical bit within `byte`.
        mask: u8,
        /// First of two consecutive link slots in the links arena: `links`
        /// holds the 0-side child, the next slot the 1-side child.
        links: Idx<Idx<Self>>,
    },
    /// Stored key.
    Leaf {
        /// Index of the key bytes in the keys arena.
        key: Idx<[u8; N]>,
        /// Number of significant leading bytes.
        len: usize,
    },
}

// ---------------------------------------------------------------------------
// Bit helpers
// ---------------------------------------------------------------------------

/// Child direction taken at a branch whose critical bit is `mask`,
/// for a key whose byte at the branch offset is `c`.
#[inline]
#[must_use]
pub const fn direction(c: u8, mask: u8) -> usize {
    (c & mask != 0) as usize
}

/// Mask of the most significant set bit of `diff` (`diff != 0`).
#[inline]
#[must_use]
pub const fn crit_mask(diff: u8) -> u8 {
    0x80 >> diff.leading_zeros()
}

/// Absolute bit position of a critical bit, counting from the most
/// significant bit of byte 0.
#[inline]
#[must_use]
pub const fn bit_index(byte: usize, mask: u8) -> usize {
    byte * 8 + mask.leading_zeros() as usize
}

/// Offsets a base index by `n` positions.
#[inline]
#[must_use]
pub const fn offset<T>(base: Idx<T>, n: usize) -> Idx<T> {
    Idx::from_raw(base.into_raw() + n)
}

/// Byte of `key` at `byte`, or 0 past the comparison length.
#[inline]
#[must_use]
pub fn byte_at(key: &[u8], key_len: usize, byte: usize) -> u8 {
    if byte < key_len { key[byte] } else { 0 }
}

// ---------------------------------------------------------------------------
// Manual trait impls — Idx<T> is Copy for every T.
// ---------------------------------------------------------------------------

impl<const N: usize> Clone for Node<N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<const N: usize> Copy for Node<N> {}

impl<const N: usize> fmt::Debug for Node<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch { byte, mask, links } => f
                .debug_struct("Branch")
                .field("byte", byte)
                .field("mask", &format_args!("{mask:#010b}"))
                .field("links", &links.into_raw())
                .finish(),
            Self::Leaf { key, len } => f
                .debug_struct("Leaf")
                .field("key", &key.into_raw())
                .field("len", len)
                .finish(),
        }
    }
}
