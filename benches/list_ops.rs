//! Benchmarks for the core list operations.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sentinel_list::list::SentinelList;

const ELEMENTS: u64 = 1_000;

fn int_list() -> SentinelList<u64> {
    SentinelList::builder()
        .destroy_with(drop)
        .compare_with(|a: &u64, b: &u64| a.cmp(b))
        .build()
        .unwrap()
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    group.throughput(Throughput::Elements(ELEMENTS));

    group.bench_function("fresh", |b| {
        b.iter(|| {
            let mut list = int_list();
            for i in 0..ELEMENTS {
                list.add(black_box(i)).unwrap();
            }
            list
        });
    });

    // Slot reuse: the list is cleared once per iteration, so every add after
    // the first round pops a free slot instead of growing the storage.
    let mut list = int_list();
    group.bench_function("reused", |b| {
        b.iter(|| {
            for i in 0..ELEMENTS {
                list.add(black_box(i)).unwrap();
            }
            list.clear().unwrap();
        });
    });

    group.finish();
}

fn bench_remove_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_at");
    group.throughput(Throughput::Elements(ELEMENTS));

    let mut list = int_list();
    group.bench_function("front", |b| {
        b.iter(|| {
            for i in 0..ELEMENTS {
                list.add(i).unwrap();
            }
            for _ in 0..ELEMENTS {
                black_box(list.remove_at(0).unwrap());
            }
        });
    });

    group.finish();
}

fn bench_find_index(c: &mut Criterion) {
    let mut list = int_list();
    for i in 0..ELEMENTS {
        list.add(i).unwrap();
    }

    c.bench_function("find_index/miss", |b| {
        b.iter(|| black_box(list.find_index(&u64::MAX).unwrap()));
    });

    c.bench_function("find_index/last", |b| {
        b.iter(|| black_box(list.find_index(&0).unwrap()));
    });
}

criterion_group!(benches, bench_add, bench_remove_at, bench_find_index);
criterion_main!(benches);
