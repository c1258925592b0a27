use std::collections::BTreeSet as StdBTreeSet;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fallible_btree::{BTree, Failing, Natural, Node};
use rand::{Rng, rngs::SmallRng, SeedableRng};
use slab::Slab;

// region set abstraction
trait OrderedSet: Default {
    fn insert(&mut self, key: usize) -> bool;
    fn remove(&mut self, key: usize) -> bool;
    fn contains(&self, key: usize) -> bool;
    /// Smallest key not less than `key`
    fn lower_bound(&self, key: usize) -> Option<usize>;
    fn sum(&self) -> usize;
}

impl OrderedSet for StdBTreeSet<usize> {
    fn insert(&mut self, key: usize) -> bool {
        StdBTreeSet::insert(self, key)
    }

    fn remove(&mut self, key: usize) -> bool {
        StdBTreeSet::remove(self, &key)
    }

    fn contains(&self, key: usize) -> bool {
        StdBTreeSet::contains(self, &key)
    }

    fn lower_bound(&self, key: usize) -> Option<usize> {
        self.range(key..).next().copied()
    }

    fn sum(&self) -> usize {
        self.iter().sum()
    }
}

macro_rules! impl_ordered_set {
    ($Ty:ty) => {
        impl OrderedSet for $Ty {
            fn insert(&mut self, key: usize) -> bool {
                BTree::insert(self, key).is_ok()
            }

            fn remove(&mut self, key: usize) -> bool {
                BTree::remove(self, &key).is_ok()
            }

            fn contains(&self, key: usize) -> bool {
                BTree::contains(self, &key)
            }

            fn lower_bound(&self, key: usize) -> Option<usize> {
                self.get(&BTree::lower_bound(self, &key)).copied()
            }

            fn sum(&self) -> usize {
                self.iter().sum()
            }
        }
    };
}

type SlabTree = BTree<usize, Natural, usize, Slab<Node<usize, usize>>>;
type FailingTree = BTree<usize, Natural, usize, Failing<Slab<Node<usize, usize>>>>;

impl_ordered_set!(SlabTree);
impl_ordered_set!(FailingTree);
// endregion

fn run_operations<T: OrderedSet>(n_operations: usize) -> usize {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut set = T::default();
    let mut hits = 0;

    for _ in 0..n_operations {
        set.insert(rng.gen_range(0..n_operations * 2));
    }

    for _ in 0..n_operations {
        let key = rng.gen_range(0..n_operations * 2);
        hits += set.contains(key) as usize;
        hits += set.lower_bound(key).map_or(0, |found| found & 1);
    }

    hits += set.sum() & 0xff;

    for _ in 0..n_operations {
        hits += set.remove(rng.gen_range(0..n_operations * 2)) as usize;
    }

    hits
}

fn bench_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("operations");
    for n_operations in [30, 300, 3000, 30000] {
        group.bench_with_input(BenchmarkId::new("std", n_operations), &n_operations, |b, &n| {
            b.iter(|| black_box(run_operations::<StdBTreeSet<usize>>(n)))
        });
        group.bench_with_input(BenchmarkId::new("slab", n_operations), &n_operations, |b, &n| {
            b.iter(|| black_box(run_operations::<SlabTree>(n)))
        });
        group.bench_with_input(BenchmarkId::new("failing", n_operations), &n_operations, |b, &n| {
            b.iter(|| black_box(run_operations::<FailingTree>(n)))
        });
    }
    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let mut tree = SlabTree::default();
    for key in 0..100_000 {
        tree.insert(key).unwrap();
    }

    c.bench_function("paths", |b| {
        b.iter(|| {
            let mut path = tree.begin();
            let mut sum = 0usize;
            while let Some(&key) = tree.get(&path) {
                sum += key;
                tree.increment(&mut path).unwrap();
            }
            black_box(sum)
        })
    });

    c.bench_function("iter_rev", |b| b.iter(|| black_box(tree.iter().rev().sum::<usize>())));
}

fn sample_size() -> usize {
    std::env::var("SAMPLE_SIZE")
        .ok().filter(|s| !s.is_empty())
        .map_or(10, |s| s.parse().expect("SAMPLE_SIZE must be an integer or unset"))
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(sample_size());
    targets = bench_operations, bench_traversal
}
criterion_main!(benches);
