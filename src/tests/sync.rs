use std::thread;

use super::random_ids;
use crate::{HashAlgo, OidTreeSync, Walk};

#[test]
fn sync_empty() {
    let tree = OidTreeSync::new();
    assert!(tree.is_empty());
    assert_eq!(tree.arena_len(), (0, 0, 0));
}

#[test]
fn sync_insert_and_contains() {
    let mut tree = OidTreeSync::new();
    let id = super::sha1("abcdef");
    assert_eq!(tree.insert(&id), Ok(true));
    assert_eq!(tree.insert(&id), Ok(false));
    assert!(tree.contains(&id));
    assert_eq!(tree.len(), 1);
}

#[test]
fn sync_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<OidTreeSync>();
}

#[test]
fn sync_is_sync() {
    fn assert_sync<T: Sync>() {}
    assert_sync::<OidTreeSync>();
}

/// A finished tree serves lookups and prefix walks from several threads.
#[test]
fn sync_parallel_reads() {
    let ids = random_ids(HashAlgo::Sha256, 2_000);
    let mut tree = OidTreeSync::new();
    for id in &ids {
        tree.insert(id).unwrap();
    }

    let tree = &tree;
    thread::scope(|s| {
        for chunk in ids.chunks(500) {
            s.spawn(move || {
                for id in chunk {
                    assert!(tree.contains(id));
                    let mut hit = false;
                    tree.find_by_prefix(&id.to_hex()[..9], HashAlgo::Sha256, |found| {
                        hit |= found == id;
                        Walk::Continue
                    })
                    .unwrap();
                    assert!(hit, "{id:?} not found by its abbreviation");
                }
            });
        }
    });
}
