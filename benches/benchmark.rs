use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use spellset::{AvlSet, BstSet, HashFn, HashSet, Set, WordChecker};

const N: usize = 100_000;

fn fill<S: Set<i32>>(mut set: S, values: &[i32]) -> S {
    for value in values {
        set.add(*value);
    }
    set
}

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (1..=N).map(|_| rng.gen()).collect();

    c.bench_function("avl_add", |b| {
        b.iter(|| black_box(fill(AvlSet::new(), &values)))
    });

    c.bench_function("bst_add", |b| {
        b.iter(|| black_box(fill(BstSet::new(), &values)))
    });

    c.bench_function("hash_add", |b| {
        b.iter(|| black_box(fill(HashSet::<i32, HashFn<i32>>::default(), &values)))
    });

    let avl = fill(AvlSet::new(), &values);
    c.bench_function("avl_contains", |b| {
        b.iter(|| {
            for value in &values {
                black_box(avl.contains(value));
            }
        })
    });

    let bst = fill(BstSet::new(), &values);
    c.bench_function("bst_contains", |b| {
        b.iter(|| {
            for value in &values {
                black_box(bst.contains(value));
            }
        })
    });

    let hash = fill(HashSet::<i32, HashFn<i32>>::default(), &values);
    c.bench_function("hash_contains", |b| {
        b.iter(|| {
            for value in &values {
                black_box(hash.contains(value));
            }
        })
    });

    let mut words: AvlSet<String> = AvlSet::new();
    for _ in 0..N {
        let len = rng.gen_range(3..10);
        words.insert((0..len).map(|_| rng.gen_range('A'..='Z')).collect());
    }
    let checker = WordChecker::new(&words);
    c.bench_function("find_suggestions", |b| {
        b.iter(|| black_box(checker.find_suggestions("SPELLINGG")))
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
