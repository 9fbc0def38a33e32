use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rmq_trees::{LcaRmq, RangeMinimum, SegmentTreeRmq};

mod common;

fn bench_rmq(b: &mut Criterion) {
    let mut rng = rand::thread_rng();

    let mut group = b.benchmark_group("RMQ Benchmark: Randomized Input");
    group.plot_config(common::plot_config());

    for l in common::SIZES {
        let data = common::fill_random_vec(&mut rng, l);
        let seg = SegmentTreeRmq::from_slice(&data).unwrap();
        let lca = LcaRmq::from_slice(&data).unwrap();

        group.bench_with_input(BenchmarkId::new("naive", l), &l, |b, _| {
            b.iter_batched(
                || common::random_query(&mut rng, l),
                |e| black_box(data[e.0..=e.1].iter().min()),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("segment tree", l), &l, |b, _| {
            b.iter_batched(
                || common::random_query(&mut rng, l),
                |e| black_box(seg.range_min(e.0, e.1)),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("lca", l), &l, |b, _| {
            b.iter_batched(
                || common::random_query(&mut rng, l),
                |e| black_box(lca.range_min(e.0, e.1)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rmq);
criterion_main!(benches);
