#![allow(dead_code)]

use fallible_btree::{BTree, Natural, Node, Path, SlabBTree, Store};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

pub type Tree = SlabBTree<usize>;

/// Insertion orders of the stress runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Increasing,
    Decreasing,
    Shuffled,
}

/// The distinct keys `1..=n` in the given order.
pub fn keys(order: Order, n: usize) -> Vec<usize> {
    match order {
        Order::Increasing => (1..=n).collect(),
        Order::Decreasing => (1..=n).rev().collect(),
        Order::Shuffled => {
            let mut keys: Vec<usize> = (1..=n).collect();
            keys.shuffle(&mut SmallRng::seed_from_u64(n as u64));
            keys
        }
    }
}

pub fn tree_of(keys: impl IntoIterator<Item = usize>) -> Tree {
    let mut tree = BTree::new(Natural);
    for key in keys {
        tree.insert(key).unwrap();
    }
    tree
}

/// Items in order, walking paths from `begin` to `end`.
pub fn collect_forward<S: Store<Node<usize, usize>, Index = usize>>(
    tree: &BTree<usize, Natural, usize, S>,
) -> Vec<usize> {
    let mut items = Vec::new();
    let mut path: Path<usize> = tree.begin();
    while !path.is_end() {
        items.push(*tree.get(&path).unwrap());
        tree.increment(&mut path).unwrap();
    }
    items
}

/// Items in reverse order, walking paths from `rbegin` to `rend`.
pub fn collect_backward<S: Store<Node<usize, usize>, Index = usize>>(
    tree: &BTree<usize, Natural, usize, S>,
) -> Vec<usize> {
    let mut items = Vec::new();
    let mut path: Path<usize> = tree.rbegin();
    while !path.is_rend() {
        items.push(*tree.get(&path).unwrap());
        tree.decrement(&mut path).unwrap();
    }
    items
}
