//! Property-based tests against a brute-force model.

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::{HashAlgo, ObjectId, OidTree, Walk};

fn arb_algo() -> impl Strategy<Value = HashAlgo> {
    prop_oneof![Just(HashAlgo::Sha1), Just(HashAlgo::Sha256)]
}

/// Identifiers drawn from a narrow byte alphabet so that prefixes collide
/// often and the trie grows deep branches.
fn arb_id() -> impl Strategy<Value = ObjectId> {
    (arb_algo(), prop::collection::vec(0_u8..4, 32)).prop_map(|(algo, mut bytes)| {
        bytes.truncate(algo.rawsz());
        ObjectId::from_digest(algo, &bytes).unwrap()
    })
}

fn arb_ids() -> impl Strategy<Value = Vec<ObjectId>> {
    prop::collection::vec(arb_id(), 0..64)
}

fn build(ids: &[ObjectId]) -> OidTree {
    let mut tree = OidTree::new();
    for id in ids {
        tree.insert(id).unwrap();
    }
    tree
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn inserted_ids_are_contained(ids in arb_ids()) {
        let tree = build(&ids);
        let distinct: BTreeSet<_> = ids.iter().copied().collect();
        prop_assert_eq!(tree.len(), distinct.len());
        for id in &ids {
            prop_assert!(tree.contains(id));
        }
    }

    #[test]
    fn absent_ids_are_not_contained(ids in arb_ids(), query in arb_id()) {
        let tree = build(&ids);
        prop_assert_eq!(tree.contains(&query), ids.contains(&query));
    }

    #[test]
    fn prefix_matches_agree_with_model(
        ids in arb_ids(),
        pick in any::<prop::sample::Index>(),
        len in 0_usize..=64,
        filter in prop_oneof![Just(HashAlgo::Unknown), arb_algo()],
    ) {
        prop_assume!(!ids.is_empty());
        let tree = build(&ids);
        let hex = pick.get(&ids).to_hex();
        let hex = &hex[..len.min(hex.len())];
        prop_assume!(!filter.is_known() || hex.len() <= filter.hexsz());

        let got: BTreeSet<_> = tree.matches(hex, filter).unwrap().into_iter().collect();
        let want: BTreeSet<_> = ids
            .iter()
            .filter(|id| !filter.is_known() || id.algo() == filter)
            .filter(|id| id.to_hex().starts_with(hex))
            .copied()
            .collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn every_prefix_length_finds_the_id(ids in arb_ids()) {
        let tree = build(&ids);
        for id in &ids {
            let hex = id.to_hex();
            for k in 1..=hex.len() {
                let mut found = false;
                tree.find_by_prefix(&hex[..k], id.algo(), |other| {
                    found |= other == id;
                    Walk::Continue
                }).unwrap();
                prop_assert!(found, "{:?} missing at length {}", id, k);
            }
        }
    }

    #[test]
    fn duplicates_change_nothing(ids in arb_ids()) {
        let once = build(&ids);
        let mut twice = build(&ids);
        for id in &ids {
            prop_assert_eq!(twice.insert(id), Ok(false));
        }
        prop_assert_eq!(once.arena_len(), twice.arena_len());
        prop_assert_eq!(
            once.iter().collect::<Vec<_>>(),
            twice.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn stop_visits_exactly_one(ids in arb_ids()) {
        let tree = build(&ids);
        let mut calls = 0;
        let walk = tree.find_by_prefix("", HashAlgo::Unknown, |_| {
            calls += 1;
            Walk::Stop
        }).unwrap();
        prop_assert_eq!(calls, usize::from(!ids.is_empty()));
        prop_assert_eq!(walk == Walk::Stop, !ids.is_empty());
    }
}
