extern crate criterion;

use std::iter::FromIterator;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use fast_priority_queues::{HeapQueue, PriorityQueue, SortedVectorQueue, UnsortedVectorQueue};

use crate::generators::{gen_random_usizes, generate_median_push_data};

const SIZES: [usize; 5] = [20_000, 40_000, 60_000, 80_000, 100_000];

fn enqueue_extra<Q>(
    c: &mut Criterion,
    group_name: &str,
    base: &[(usize, usize)],
    extra: &[(usize, usize)],
) where
    Q: PriorityQueue<Key = usize, Priority = usize> + FromIterator<(usize, usize)> + Clone,
{
    let mut group = c.benchmark_group(group_name);
    for &size in SIZES.iter() {
        assert!(base.len() >= size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let base_queue: Q = base[..size].iter().cloned().collect();
            b.iter_batched(
                || base_queue.clone(),
                |mut queue| {
                    for &(k, v) in extra.iter() {
                        queue.enqueue(k, v);
                    }
                    queue
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

pub fn bench_enqueue(c: &mut Criterion) {
    let base_keys = gen_random_usizes(100_000, 0);
    let base_values = gen_random_usizes(100_000, 7);
    let base: Vec<_> = base_keys
        .into_iter()
        .zip(base_values.into_iter())
        .collect();

    let extra_keys = gen_random_usizes(1000, 8);
    let extra_values = gen_random_usizes(1000, 20);
    let extra: Vec<_> = extra_keys
        .into_iter()
        .zip(extra_values.into_iter())
        .collect();

    enqueue_extra::<HeapQueue<_, _>>(c, "enqueue_random_heap", &base, &extra);
    enqueue_extra::<SortedVectorQueue<_, _>>(c, "enqueue_random_sorted_vector", &base, &extra);
    enqueue_extra::<UnsortedVectorQueue<_, _>>(c, "enqueue_random_unsorted_vector", &base, &extra);

    let keys: Vec<usize> = (0..105_000).collect();
    let (base_values, extra_values) =
        generate_median_push_data(gen_random_usizes(105_000, 7), 5_000, 987987);
    let base: Vec<_> = keys[..100_000]
        .iter()
        .cloned()
        .zip(base_values.into_iter())
        .collect();
    let extra: Vec<_> = keys[100_000..]
        .iter()
        .cloned()
        .zip(extra_values.into_iter())
        .collect();

    enqueue_extra::<HeapQueue<_, _>>(c, "enqueue_median_heap", &base, &extra);
    enqueue_extra::<SortedVectorQueue<_, _>>(c, "enqueue_median_sorted_vector", &base, &extra);
    enqueue_extra::<UnsortedVectorQueue<_, _>>(c, "enqueue_median_unsorted_vector", &base, &extra);
}

criterion_group!(benches, bench_enqueue);
criterion_main!(benches);
