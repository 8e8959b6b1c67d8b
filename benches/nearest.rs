use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use pbench_kernels::nearest_point;
use pbench_kernels::workload::{QUERY_POINT, modular_points, random_points};

const INPUT_SIZES: &[(&str, usize)] = &[
    ("n1k", 1_000),
    ("n100k", 100_000),
    ("n1m", 1_000_000),
];

fn bench_nearest(c: &mut Criterion) {
    let (qx, qy) = QUERY_POINT;
    let mut group = c.benchmark_group("nearest_point");
    for &(label, n) in INPUT_SIZES {
        group.throughput(Throughput::Elements(n as u64));

        let modular = modular_points(n);
        group.bench_function(BenchmarkId::new("modular", label), |b| {
            b.iter(|| black_box(nearest_point(black_box(qx), black_box(qy), black_box(&modular))));
        });

        let random = random_points(n, 0xC0FF_EE42_1234_5678u64 ^ n as u64);
        group.bench_function(BenchmarkId::new("random", label), |b| {
            b.iter(|| black_box(nearest_point(black_box(qx), black_box(qy), black_box(&random))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nearest);
criterion_main!(benches);
