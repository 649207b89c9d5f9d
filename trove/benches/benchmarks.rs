// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: Apache-2.0

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use trove::Trove;

fn bench_sum(c: &mut Criterion) {
    let trove = Trove::new((0..10_000_i64).collect::<Vec<_>>());

    c.bench_function("sum_10k", |b| b.iter(|| black_box(trove.sum())));
}

fn bench_unique(c: &mut Criterion) {
    // Heavy duplication keeps the candidate set small but the scan honest
    let trove = Trove::new((0..2_000_i64).map(|n| n % 50).collect::<Vec<_>>());

    c.bench_function("unique_2k_50_classes", |b| {
        b.iter(|| black_box(trove.unique()))
    });
}

fn bench_sort(c: &mut Criterion) {
    let source: Vec<i64> = (0..10_000).rev().collect();

    c.bench_function("sort_10k_reversed", |b| {
        b.iter(|| {
            let mut trove = Trove::new(source.clone());
            trove.sort(|n| *n, false);
            black_box(trove.len())
        })
    });
}

criterion_group!(trove_benches, bench_sum, bench_unique, bench_sort);
criterion_main!(trove_benches);
