mod hash;
mod proptests;
mod sync;

use crate::{HashAlgo, ObjectId};

/// SHA-1 identifier from a hex prefix, right-padded with zeros.
fn sha1(hex: &str) -> ObjectId {
    padded(HashAlgo::Sha1, hex)
}

/// SHA-256 identifier from a hex prefix, right-padded with zeros.
fn sha256(hex: &str) -> ObjectId {
    padded(HashAlgo::Sha256, hex)
}

fn padded(algo: HashAlgo, hex: &str) -> ObjectId {
    let mut s = hex.to_owned();
    while s.len() < algo.hexsz() {
        s.push('0');
    }
    ObjectId::from_hex(algo, &s).unwrap()
}

/// Deterministic high-entropy digest (splitmix64 stream).
fn digest(seed: u64, len: usize) -> Vec<u8> {
    let mut state = seed;
    let mut out = Vec::with_capacity(len);
    while out.len() < len {
        state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        out.extend_from_slice(&z.to_be_bytes());
    }
    out.truncate(len);
    out
}

/// `n` distinct pseudo-random identifiers of `algo`.
fn random_ids(algo: HashAlgo, n: u64) -> Vec<ObjectId> {
    (0..n)
        .map(|i| ObjectId::from_digest(algo, &digest(i, algo.rawsz())).unwrap())
        .collect()
}
