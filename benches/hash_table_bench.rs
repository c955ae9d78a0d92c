use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use simple_collections::{HashTable, TableConfig};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn filled(seed: u64, n: usize) -> (HashTable<u64>, Vec<String>) {
    let mut t = HashTable::new();
    let keys: Vec<_> = lcg(seed).take(n).map(key).collect();
    for (i, k) in keys.iter().enumerate() {
        t.insert(k, i as u64).unwrap();
    }
    (t, keys)
}

fn bench_insert_fresh_100k(c: &mut Criterion) {
    let keys: Vec<_> = lcg(1).take(100_000).map(key).collect();
    c.bench_function("table::insert_fresh_100k", |b| {
        b.iter_batched(
            HashTable::<u64>::new,
            |mut t| {
                for (i, k) in keys.iter().enumerate() {
                    t.insert(k, i as u64).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_insert_reserved_100k(c: &mut Criterion) {
    let keys: Vec<_> = lcg(2).take(100_000).map(key).collect();
    c.bench_function("table::insert_reserved_100k", |b| {
        b.iter_batched(
            || {
                let mut t = HashTable::<u64>::new();
                t.reserve(keys.len()).unwrap();
                t
            },
            |mut t| {
                for (i, k) in keys.iter().enumerate() {
                    t.insert(k, i as u64).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_upsert_10k(c: &mut Criterion) {
    c.bench_function("table::upsert_10k_on_100k", |b| {
        b.iter_batched(
            || filled(3, 100_000),
            |(mut t, keys)| {
                for (i, k) in keys.iter().take(10_000).enumerate() {
                    t.insert(k, i as u64).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit_10k(c: &mut Criterion) {
    c.bench_function("table::get_hit_10k_on_100k", |b| {
        let (t, keys) = filled(7, 100_000);
        let n = keys.len();
        let mut s = 0x9e3779b97f4a7c15u64;
        let queries: Vec<String> = (0..10_000)
            .map(|_| {
                s = s.wrapping_mul(2862933555777941757).wrapping_add(3037000493);
                keys[(s as usize) % n].clone()
            })
            .collect();
        b.iter(|| {
            for k in &queries {
                black_box(t.get(k));
            }
        })
    });
}

fn bench_get_miss_10k(c: &mut Criterion) {
    c.bench_function("table::get_miss_10k_on_100k", |b| {
        let (t, _) = filled(11, 100_000);
        let misses: Vec<String> = lcg(0xdead_beef).take(10_000).map(key).collect();
        b.iter(|| {
            for k in &misses {
                black_box(t.get(k));
            }
        })
    });
}

fn bench_load_factors(c: &mut Criterion) {
    let keys: Vec<_> = lcg(13).take(50_000).map(key).collect();
    for lf in [0.5, 0.75, 0.9] {
        let config = TableConfig::new().load_factor(lf);
        c.bench_function(&format!("table::insert_50k_load_factor_{}", lf), |b| {
            b.iter_batched(
                || HashTable::<u64>::try_with_config(config).unwrap(),
                |mut t| {
                    for (i, k) in keys.iter().enumerate() {
                        t.insert(k, i as u64).unwrap();
                    }
                    black_box(t)
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_iter_100k(c: &mut Criterion) {
    c.bench_function("table::iter_all_100k", |b| {
        let (t, _) = filled(999, 100_000);
        b.iter(|| {
            let mut sum = 0u64;
            for (_k, v) in t.iter() {
                sum = sum.wrapping_add(*v);
            }
            black_box(sum)
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(12)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches_insert;
    config = bench_config();
    targets = bench_insert_fresh_100k, bench_insert_reserved_100k, bench_upsert_10k, bench_load_factors
}
criterion_group! {
    name = benches_lookup;
    config = bench_config();
    targets = bench_get_hit_10k, bench_get_miss_10k, bench_iter_100k
}
criterion_main!(benches_insert, benches_lookup);
