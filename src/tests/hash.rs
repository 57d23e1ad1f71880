use crate::hash::{KEY_LEN, MAX_RAWSZ, TAG_OFFSET};
use crate::{HashAlgo, HashConfig, ObjectId, OidError};

#[test]
fn algorithm_widths() {
    assert_eq!(HashAlgo::Sha1.rawsz(), 20);
    assert_eq!(HashAlgo::Sha1.hexsz(), 40);
    assert_eq!(HashAlgo::Sha256.rawsz(), 32);
    assert_eq!(HashAlgo::Sha256.hexsz(), 64);
    assert_eq!(HashAlgo::Unknown.rawsz(), 0);
}

#[test]
fn tag_roundtrip() {
    for algo in HashAlgo::KNOWN {
        assert_eq!(HashAlgo::from_tag(algo.tag()), Some(algo));
    }
    assert_eq!(HashAlgo::from_tag(0xFF), None);
}

#[test]
fn parse_algorithm_names() {
    assert_eq!("sha1".parse::<HashAlgo>(), Ok(HashAlgo::Sha1));
    assert_eq!("SHA256".parse::<HashAlgo>(), Ok(HashAlgo::Sha256));
    assert_eq!(
        "md5".parse::<HashAlgo>(),
        Err(OidError::UnknownAlgorithm("md5".to_owned()))
    );
}

#[test]
fn config_rejects_unknown_default() {
    assert_eq!(
        HashConfig::with_default_algo(HashAlgo::Unknown),
        Err(OidError::UnspecifiedAlgorithm)
    );
    let cfg = HashConfig::with_default_algo(HashAlgo::Sha256).unwrap();
    assert_eq!(cfg.default_algo(), HashAlgo::Sha256);
    assert_eq!(cfg.resolve(HashAlgo::Unknown), HashAlgo::Sha256);
    assert_eq!(cfg.resolve(HashAlgo::Sha1), HashAlgo::Sha1);
    assert_eq!(HashConfig::default().default_algo(), HashAlgo::Sha1);
}

#[test]
fn hex_roundtrip() {
    let hex = "0123456789abcdef0123456789abcdef01234567";
    let id = ObjectId::from_hex(HashAlgo::Sha1, hex).unwrap();
    assert_eq!(id.to_hex(), hex);
    assert_eq!(format!("{id}"), hex);
    assert_eq!(id.digest().len(), 20);
}

#[test]
fn wrong_width_rejected() {
    let err = ObjectId::from_digest(HashAlgo::Sha256, &[0; 20]).unwrap_err();
    assert_eq!(
        err,
        OidError::InvalidLength {
            expected: 32,
            actual: 20
        }
    );
    assert!(matches!(
        ObjectId::from_hex(HashAlgo::Sha1, "xyz"),
        Err(OidError::InvalidHex(_))
    ));
    assert!(ObjectId::from_digest(HashAlgo::Unknown, &[0; 7]).is_ok());
}

#[test]
fn unknown_digest_bounded_by_widest() {
    assert!(ObjectId::from_digest(HashAlgo::Unknown, &[0; MAX_RAWSZ]).is_ok());
    let err = ObjectId::from_digest(HashAlgo::Unknown, &[0; 33]).unwrap_err();
    assert_eq!(
        err,
        OidError::DigestTooLong {
            max: MAX_RAWSZ,
            actual: 33
        }
    );
    assert!(err.to_string().contains("at most 32"));
}

#[test]
fn padded_key_layout() {
    let id = ObjectId::from_digest(HashAlgo::Sha1, &[0xFF; 20]).unwrap();
    let key = id.to_key();
    assert_eq!(key.len(), KEY_LEN);
    assert_eq!(&key[..20], &[0xFF; 20]);
    assert_eq!(&key[20..TAG_OFFSET], &[0; 12]);
    assert_eq!(key[TAG_OFFSET], HashAlgo::Sha1.tag());
    assert_eq!(ObjectId::from_key(&key), Some(id));
}

#[test]
fn equal_digest_bytes_distinct_algorithms() {
    let mut bytes = [0u8; 32];
    bytes[..20].copy_from_slice(&[0xAB; 20]);
    let short = ObjectId::from_digest(HashAlgo::Sha1, &[0xAB; 20]).unwrap();
    let long = ObjectId::from_digest(HashAlgo::Sha256, &bytes).unwrap();
    assert_ne!(short, long);
    assert_ne!(short.to_key(), long.to_key());
    assert_eq!(short.to_key()[..TAG_OFFSET], long.to_key()[..TAG_OFFSET]);
}

#[test]
fn resolved_key_truncates_to_default_width() {
    let id = ObjectId::from_digest(HashAlgo::Unknown, &[0x11; 32]).unwrap();
    let key = id.to_key_resolved(&HashConfig::default());
    assert_eq!(&key[..20], &[0x11; 20]);
    assert_eq!(&key[20..TAG_OFFSET], &[0; 12]);
    assert_eq!(key[TAG_OFFSET], HashAlgo::Sha1.tag());
}

#[test]
fn debug_shows_algorithm() {
    let id = super::sha256("ab");
    let dbg = format!("{id:?}");
    assert!(dbg.starts_with("ObjectId(sha256:ab"));
}
