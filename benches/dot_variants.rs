//! Criterion comparison of dot product strategies.
//!
//! Run: cargo bench --bench dot_variants

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dot_product_bench::utils::random_pair;
use dot_product_bench::{dot_with, Strategy};

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot_product");

    for size in [64usize, 1024, 16384] {
        let (a, b) = random_pair(size, 0x5eed);
        group.throughput(Throughput::Elements(size as u64));

        for s in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(s.name(), size), &size, |bench, _| {
                bench.iter(|| dot_with(s, black_box(&a), black_box(&b)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
