use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use pbench_kernels::k_nearest;
use pbench_kernels::workload::{QUERY_POINT, modular_points};

/// (label, points, neighbours)
const INPUT_SIZES: &[(&str, usize, usize)] = &[
    ("n310_k200", 310, 200),
    ("n3100_k2000", 3_100, 2_000),
    ("n3100_k10", 3_100, 10),
];

fn bench_k_nearest(c: &mut Criterion) {
    let (qx, qy) = QUERY_POINT;
    let mut group = c.benchmark_group("k_nearest");
    for &(label, n, k) in INPUT_SIZES {
        // Pass i scans n - i points.
        let scanned: u64 = (0..k).map(|i| (n - i) as u64).sum();
        group.throughput(Throughput::Elements(scanned));

        let points = modular_points(n);
        group.bench_function(BenchmarkId::new("modular", label), |b| {
            b.iter_batched(
                || points.clone(),
                |mut set| black_box(k_nearest(black_box(qx), black_box(qy), &mut set, k)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_k_nearest);
criterion_main!(benches);
