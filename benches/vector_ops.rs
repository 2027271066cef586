//! Criterion micro-benchmarks for push/pop, cloning and reverse sorting.

use std::hint::black_box;
use std::rc::Rc;

use criterion::{criterion_group, criterion_main, Criterion};
use static_vector::StaticVector;

const CAPACITY: usize = 256;

fn bench_push_pop(c: &mut Criterion) {
    c.bench_function("push_pop_fill_drain_u64", |b| {
        b.iter(|| {
            let mut v = StaticVector::<u64, CAPACITY>::new();
            for i in 0..CAPACITY as u64 {
                v.push(black_box(i));
            }
            let mut sum = 0;
            while let Some(x) = v.pop() {
                sum += x;
            }
            black_box(sum)
        })
    });

    c.bench_function("push_pop_fill_drain_rc", |b| {
        let handle = Rc::new(0u64);
        b.iter(|| {
            let mut v = StaticVector::<Rc<u64>, CAPACITY>::new();
            for _ in 0..CAPACITY {
                v.push(Rc::clone(&handle));
            }
            v.clear();
            black_box(v.len())
        })
    });
}

fn bench_clone_across_capacities(c: &mut Criterion) {
    let source: StaticVector<u32, CAPACITY> = (0..CAPACITY as u32).collect();

    c.bench_function("cloned_from_wider", |b| {
        b.iter(|| black_box(StaticVector::<u64, { CAPACITY * 2 }>::cloned_from(&source)))
    });
}

fn bench_reverse_sort(c: &mut Criterion) {
    let source: StaticVector<u32, CAPACITY> = (0..CAPACITY as u32)
        .map(|i| i.wrapping_mul(2_654_435_761))
        .collect();

    c.bench_function("rev_iter_mut_sort_unstable", |b| {
        b.iter(|| {
            let mut v = source.clone();
            v.rev_iter_mut().sort_unstable();
            black_box(v)
        })
    });
}

criterion_group!(
    benches,
    bench_push_pop,
    bench_clone_across_capacities,
    bench_reverse_sort
);
criterion_main!(benches);
