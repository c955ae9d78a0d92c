use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use simple_collections::{DynArray, LinkedList, StringBuilder};
use std::time::Duration;

fn bench_array_push_100k(c: &mut Criterion) {
    c.bench_function("array::push_100k", |b| {
        b.iter_batched(
            DynArray::<u64>::new,
            |mut a| {
                for i in 0..100_000u64 {
                    a.push(i).unwrap();
                }
                black_box(a)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_list_push_pop_100k(c: &mut Criterion) {
    c.bench_function("list::push_both_ends_then_drain_100k", |b| {
        b.iter_batched(
            LinkedList::<u64>::new,
            |mut l| {
                for i in 0..50_000u64 {
                    l.push_back(i);
                    l.push_front(i);
                }
                let mut sum = 0u64;
                while let Some(v) = l.pop_front() {
                    sum = sum.wrapping_add(v);
                    if let Some(w) = l.pop_back() {
                        sum = sum.wrapping_add(w);
                    }
                }
                black_box(sum)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_list_walk_100k(c: &mut Criterion) {
    c.bench_function("list::walk_forward_100k", |b| {
        let mut l = LinkedList::new();
        for i in 0..100_000u64 {
            l.push_back(i);
        }
        b.iter(|| {
            let mut sum = 0u64;
            let mut cur = l.head();
            while let Some(n) = cur {
                sum = sum.wrapping_add(*n.data());
                cur = n.next();
            }
            black_box(sum)
        })
    });
}

fn bench_builder_appendf_10k(c: &mut Criterion) {
    c.bench_function("builder::appendf_10k", |b| {
        b.iter_batched(
            StringBuilder::new,
            |mut sb| {
                for i in 0..10_000 {
                    sb.append_fmt(format_args!("{}:{:08x};", i, i * 31)).unwrap();
                }
                black_box(sb)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(12)
        .measurement_time(Duration::from_secs(3))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_array_push_100k, bench_list_push_pop_100k, bench_list_walk_100k, bench_builder_appendf_10k
}
criterion_main!(benches);
