//! Abbreviation and membership index for content-addressed object stores.
//!
//! A crit-bit (PATRICIA) trie over fixed-width binary keys answers two
//! questions about object identifiers:
//!
//! - does an object with this full identifier exist?
//! - which stored identifiers start with this hex abbreviation?
//!
//! Identifiers produced by different hash algorithms (SHA-1 and SHA-256)
//! coexist in one trie. Each is stored as its zero-padded digest followed
//! by an algorithm tag byte, so bitwise descent never has to special-case
//! digest width.
//!
//! # Key properties
//!
//! - **O(key length) insert and lookup**, independent of the entry count
//! - **Arena-backed**: nodes, keys and branch links live in `safe-bump`
//!   arenas and are released all at once; only link slots are ever rewritten
//! - **Insert-only**: there is no removal; [`OidTree::clear`] drops everything
//! - **Odd-length abbreviations**: a trailing nibble is matched on its high
//!   four bits
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! # References
//!
//! - Morrison, 1968 — "PATRICIA — Practical Algorithm To Retrieve
//!   Information Coded in Alphanumeric"
//! - Bernstein — "Crit-bit trees", <https://cr.yp.to/critbit.html>

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod hash;
pub mod iter;
pub mod node;
pub mod prefix;
pub mod store;

mod arena;
mod arena_sync;
mod oidtree;
mod ops;
mod tree;

#[cfg(test)]
mod tests;

pub use arena::TrieArena;
pub use arena_sync::TrieArenaSync;
pub use error::{OidError, OidResult};
pub use hash::{HashAlgo, HashConfig, ObjectId};
pub use oidtree::{OidTree, OidTreeSync};
pub use prefix::OidPrefix;
pub use tree::CritBitTree;

/// Visitor verdict for prefix walks.
///
/// A walk stops immediately after a visitor returns [`Walk::Stop`]; no
/// further candidate is examined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Walk {
    /// Keep visiting.
    Continue,
    /// Stop the walk now.
    Stop,
}
