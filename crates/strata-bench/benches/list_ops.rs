//! Criterion micro-benchmarks for list append and traversal.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use strata_bench::{filled_list, PROFILE_LEN};
use strata_list::{traverse, LinkedList};

fn bench_append(c: &mut Criterion) {
    c.bench_function("list_append_10k", |b| {
        b.iter(|| {
            let mut list = LinkedList::new();
            for i in 0..PROFILE_LEN as u64 {
                list.append(black_box(i));
            }
            list
        })
    });
}

fn bench_traverse(c: &mut Criterion) {
    let list = filled_list(PROFILE_LEN);
    c.bench_function("list_traverse_10k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            if let Some(head) = list.head() {
                traverse(head, |node| sum += *node.value());
            }
            black_box(sum)
        })
    });
}

fn bench_iter(c: &mut Criterion) {
    let list = filled_list(PROFILE_LEN);
    c.bench_function("list_iter_sum_10k", |b| b.iter(|| black_box(&list).iter().sum::<u64>()));
}

criterion_group!(benches, bench_append, bench_traverse, bench_iter);
criterion_main!(benches);
