#![cfg(feature = "slab")]

mod common;

use common::{collect_forward, tree_of};
use fallible_btree::Error;
use std::collections::BTreeSet;

/// Inserts and removes with strides that are not multiples of each other, to spread the
/// removals over as many rebalancing cases as possible.
fn remove_strided(rounds: usize) {
    const S1: usize = 3;
    const S2: usize = 511;
    let n_insertions = S1 * S2 * rounds;

    let mut tree = tree_of((0..S1).flat_map(|phase| (0..n_insertions / S1).map(move |r| S1 * r + phase + 1)));
    assert_eq!(tree.len(), n_insertions);
    tree.validate();

    for phase in 0..S2 {
        for r in 0..n_insertions / S2 {
            let value = S2 * r + phase + 1;
            let (removed, next) = tree.remove(&value).unwrap();
            assert_eq!(removed, value);
            assert_eq!(next, tree.lower_bound(&value));
        }

        if phase % 64 == 0 {
            tree.validate();
        }
    }

    assert_eq!(tree.len(), 0);
    assert!(tree.root_id().is_none());
    tree.validate();
}

#[test]
fn remove_cases() {
    remove_strided(8)
}

#[test]
#[ignore = "slow, run with --ignored"]
fn remove_cases_full() {
    remove_strided(450)
}

#[test]
fn remove_missing_leaves_tree_unchanged() {
    let mut tree = tree_of((1..=300).map(|i| i * 2));
    for key in (1..=601).step_by(2) {
        assert_eq!(tree.remove(&key).err(), Some(Error::NotFound));
    }

    assert_eq!(tree.len(), 300);
    tree.validate();
    assert_eq!(collect_forward(&tree), (1..=300).map(|i| i * 2).collect::<Vec<_>>());
}

#[test]
fn remove_from_root() {
    let mut tree = tree_of(1..=1000);
    let mut remaining: BTreeSet<usize> = (1..=1000).collect();
    while tree.height() > 1 {
        let root = tree.root_id().unwrap();
        let key = tree.store()[root].items()[0];
        let (removed, next) = tree.remove(&key).unwrap();
        assert_eq!(removed, key);
        assert!(remaining.remove(&key));

        // The predecessor moved up in its place may already be gone, so the successor is the
        // next remaining key rather than `key + 1`.
        assert_eq!(next, tree.lower_bound(&key));
        assert_eq!(tree.get(&next), remaining.range(key..).next());
        tree.validate();
    }

    assert!(tree.len() > 0);
    assert_eq!(collect_forward(&tree), remaining.into_iter().collect::<Vec<_>>());
}

#[test]
fn remove_last_yields_end() {
    let mut tree = tree_of(1..=50);
    let (removed, next) = tree.remove(&50).unwrap();
    assert_eq!(removed, 50);
    assert!(next.is_end());
    assert_eq!(next, tree.end());
}

#[test]
fn remove_everything_shrinks_height() {
    let mut tree = tree_of(1..=2000);
    let mut height = tree.height();
    for key in (1..=2000).rev() {
        let (_, next) = tree.remove(&key).unwrap();
        assert!(next.is_end());
        assert!(tree.height() <= height);
        height = tree.height();
    }

    assert_eq!(height, 0);
    assert!(tree.is_empty());
    assert!(tree.store().is_empty());
}

#[test]
fn remove_through_next_paths() {
    let mut tree = tree_of((1..=3000).map(|i| (i * 17) % 3001));
    // Remove every other item, walking the successor paths.
    let mut path = tree.begin();
    let mut kept = Vec::new();
    while let Some(&key) = tree.get(&path) {
        let (removed, next) = tree.remove(&key).unwrap();
        assert_eq!(removed, key);
        path = next;
        if let Some(&key) = tree.get(&path) {
            kept.push(key);
            tree.increment(&mut path).unwrap();
        }
    }

    tree.validate();
    assert_eq!(collect_forward(&tree), kept);
    assert_eq!(tree.len(), 1500);
}
