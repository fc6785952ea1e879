// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_selection_list::{SelectionList, SelectionOrigin};

fn filled(len: usize) -> SelectionList<u32> {
    (0..(len as u32)).collect()
}

fn bench_sequential_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection_list/push");

    // Hypothesis: fixed-increment growth keeps append amortized O(1).
    for len in [128usize, 2_048, 32_768] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("push", len), &len, |b, &len| {
            b.iter_batched(
                SelectionList::<u32>::new,
                |mut list| {
                    for i in 0..(len as u32) {
                        list.push(i);
                    }
                    black_box(list);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_insert_front_vs_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection_list/insert_front");

    // Single inserts at the front shift the whole tail each time; one bulk
    // insert shifts it once.
    for len in [128usize, 1_024, 8_192] {
        let block: Vec<u32> = (0..(len as u32)).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("insert", len), &block, |b, block| {
            b.iter_batched(
                || filled(len),
                |mut list| {
                    for &value in block {
                        list.insert(0, value);
                    }
                    black_box(list);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("insert_many", len), &block, |b, block| {
            b.iter_batched(
                || filled(len),
                |mut list| {
                    list.insert_many(0, block.iter().copied());
                    black_box(list);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_move_and_remove_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection_list/edit_selection");

    // Worst case for both: a block near one end travels to the other.
    for len in [1_024usize, 16_384, 131_072] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("move_selection", len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut list = filled(len);
                    list.set_selection_range(len - 16, len - 1, false, SelectionOrigin::Program);
                    list
                },
                |mut list| {
                    black_box(list.move_selection(0));
                    black_box(list);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(
            BenchmarkId::new("remove_selection", len),
            &len,
            |b, &len| {
                b.iter_batched(
                    || {
                        let mut list = filled(len);
                        list.set_selection_range(0, 15, false, SelectionOrigin::Program);
                        list
                    },
                    |mut list| {
                        black_box(list.remove_selection());
                        black_box(list);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_push,
    bench_insert_front_vs_bulk,
    bench_move_and_remove_selection
);
criterion_main!(benches);
