use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use slist::linked_list::{
    boxed::BoxedList,
    intrusive::{list::LinkedList, single::SingleNode, traits::NodeWithData},
};

const SIZES: [usize; 3] = [16, 128, 1024];

fn shuffled(len: usize) -> Vec<u64> {
    let mut values: Vec<u64> = (0..len as u64).collect();
    values.shuffle(&mut StdRng::seed_from_u64(len as u64));
    values
}

fn append_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    for len in SIZES {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::new("intrusive", len), |b| {
            b.iter_with_setup(
                || shuffled(len).into_iter().map(SingleNode::new).collect::<Vec<_>>(),
                |mut nodes| {
                    let mut list = LinkedList::new();
                    for node in nodes.iter_mut() {
                        list.append(node);
                    }
                    black_box(list.count());
                },
            );
        });

        group.bench_function(BenchmarkId::new("boxed", len), |b| {
            b.iter_with_setup(
                || shuffled(len),
                |values| {
                    let mut list = BoxedList::new();
                    for value in values {
                        list.append(Box::new(value));
                    }
                    black_box(list.count());
                },
            );
        });
    }
    group.finish();
}

fn fold_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold");
    for len in SIZES {
        let list: BoxedList<u64> = shuffled(len).into_iter().collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::new("sum", len), |b| {
            b.iter(|| black_box(list.fold(0u64, |acc, value| acc.wrapping_add(*value))));
        });
    }
    group.finish();
}

fn sort_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for len in SIZES {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::new("intrusive", len), |b| {
            b.iter_with_setup(
                || shuffled(len).into_iter().map(SingleNode::new).collect::<Vec<_>>(),
                |mut nodes| {
                    let mut list = LinkedList::new();
                    for node in nodes.iter_mut() {
                        list.push(node);
                    }
                    list.sort(|a, b| a.data() <= b.data());
                    black_box(list.head().map(|head| *head.data()));
                },
            );
        });

        group.bench_function(BenchmarkId::new("boxed", len), |b| {
            b.iter_with_setup(
                || shuffled(len).into_iter().collect::<BoxedList<u64>>(),
                |mut list| {
                    list.sort(|a, b| a <= b);
                    black_box(list.head().copied());
                },
            );
        });
    }
    group.finish();
}

criterion_group!(benches, append_benchmark, fold_benchmark, sort_benchmark);
criterion_main!(benches);
