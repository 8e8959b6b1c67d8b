use std::hint::black_box;
use std::process;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use log::{error, info};

use pbench_kernels::workload::{
    QUERY_POINT, RANGE_BOUNDS, SPLIT_LINE, index_sum_matrix, modular_points, modular_values,
    random_matrix, random_points,
};
use pbench_kernels::{
    KernelError, MatmulFn, Matrix, Point, PointSet, half_plane_split, k_nearest, matmul,
    matmul_ikj, matmul_transposed, nearest_point, range_count, range_filter,
};

const DEFAULT_SEED: u64 = 0x1234_5678_9ABC_DEF0;
const DEFAULT_K: usize = 2_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
enum Bench {
    NearestPoint,
    KNearest,
    HalfPlaneSplit,
    RangeFilter,
    RangeCount,
    MatmulBaseline,
    MatmulTransposed,
    MatmulIkj,
}

impl Bench {
    fn default_len(self) -> usize {
        match self {
            Bench::NearestPoint | Bench::HalfPlaneSplit | Bench::RangeFilter | Bench::RangeCount => {
                100_000
            }
            Bench::KNearest => 3_100,
            Bench::MatmulBaseline | Bench::MatmulTransposed | Bench::MatmulIkj => 100,
        }
    }

    fn default_iters(self) -> usize {
        match self {
            Bench::NearestPoint | Bench::RangeFilter | Bench::RangeCount => 1_000,
            Bench::HalfPlaneSplit => 500,
            Bench::KNearest => 5,
            Bench::MatmulBaseline | Bench::MatmulTransposed | Bench::MatmulIkj => 50,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Bench::NearestPoint => "nearest_point",
            Bench::KNearest => "k_nearest",
            Bench::HalfPlaneSplit => "half_plane_split",
            Bench::RangeFilter => "range_filter",
            Bench::RangeCount => "range_count",
            Bench::MatmulBaseline => "matmul_baseline",
            Bench::MatmulTransposed => "matmul_transposed",
            Bench::MatmulIkj => "matmul_ikj",
        }
    }

    fn matmul_fn(self) -> Option<MatmulFn> {
        match self {
            Bench::MatmulBaseline => Some(matmul),
            Bench::MatmulTransposed => Some(matmul_transposed),
            Bench::MatmulIkj => Some(matmul_ikj),
            _ => None,
        }
    }
}

/// Runs one kernel in a tight loop so it can be profiled in isolation.
#[derive(Parser, Debug)]
#[command(name = "perf_harness", about, long_about = None)]
struct Cli {
    /// Benchmark to run (see --list)
    #[arg(long, value_enum, required_unless_present = "list")]
    bench: Option<Bench>,

    /// Input length (points, values, or square matrix side; bench-specific default)
    #[arg(long)]
    len: Option<usize>,

    /// Neighbours to select for k_nearest
    #[arg(long, default_value_t = DEFAULT_K)]
    k: usize,

    /// Iterations (bench-specific default)
    #[arg(long)]
    iters: Option<usize>,

    /// Seed for --random inputs
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Use seeded random inputs instead of the modular pbench inputs
    #[arg(long)]
    random: bool,

    /// Run a quick correctness check before benchmarking
    #[arg(long)]
    verify: bool,

    /// Print throughput summary after the run
    #[arg(long)]
    report: bool,

    /// Show available benches
    #[arg(long)]
    list: bool,
}

#[derive(Clone, Copy, Debug)]
struct Config {
    bench: Bench,
    len: usize,
    k: usize,
    iters: usize,
    seed: u64,
    random: bool,
    report: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if cli.list {
        list_benches();
        return;
    }
    let Some(bench) = cli.bench else {
        error!("missing --bench");
        process::exit(2);
    };

    let config = Config {
        bench,
        len: cli.len.unwrap_or_else(|| bench.default_len()),
        k: cli.k,
        iters: cli.iters.unwrap_or_else(|| bench.default_iters()),
        seed: cli.seed,
        random: cli.random,
        report: cli.report,
    };
    info!(
        "bench={} len={} iters={} random={} seed={:#x}",
        bench.name(),
        config.len,
        config.iters,
        config.random,
        config.seed
    );

    if cli.verify {
        if let Err(msg) = verify_bench(bench) {
            error!("verification failed for {}: {msg}", bench.name());
            process::exit(1);
        }
        info!("verification passed for {}", bench.name());
    }

    if let Err(err) = run_bench(config) {
        error!("{} rejected its input: {err}", bench.name());
        process::exit(1);
    }
}

fn list_benches() {
    for bench in Bench::value_variants() {
        println!("{}", bench.name());
    }
}

fn make_points(config: &Config) -> PointSet {
    if config.random {
        random_points(config.len, config.seed)
    } else {
        modular_points(config.len)
    }
}

fn make_values(config: &Config) -> Vec<f64> {
    if config.random {
        random_points(config.len, config.seed)
            .iter()
            .map(|p| p.x / 10.24)
            .collect()
    } else {
        modular_values(config.len)
    }
}

fn make_matrices(config: &Config) -> (Matrix, Matrix) {
    let n = config.len;
    if config.random {
        (
            random_matrix(n, n, config.seed),
            random_matrix(n, n, config.seed ^ 0x9E37_79B9_7F4A_7C15),
        )
    } else {
        (index_sum_matrix(n, n), index_sum_matrix(n, n))
    }
}

fn run_bench(config: Config) -> Result<(), KernelError> {
    let stats = bench_stats(&config);
    let start = Instant::now();
    match config.bench {
        Bench::NearestPoint => bench_nearest(config)?,
        Bench::KNearest => bench_k_nearest(config)?,
        Bench::HalfPlaneSplit => bench_split(config),
        Bench::RangeFilter => bench_range_filter(config),
        Bench::RangeCount => bench_range_count(config),
        Bench::MatmulBaseline | Bench::MatmulTransposed | Bench::MatmulIkj => {
            if let Some(func) = config.bench.matmul_fn() {
                bench_matmul(config, func)?;
            }
        }
    }
    let elapsed = start.elapsed();
    if config.report {
        match format_report(&config, &stats, elapsed) {
            Some(report) => println!("{report}"),
            None => info!("no work performed (len or iters is 0); skipping report"),
        }
    }
    Ok(())
}

struct BenchStats {
    work_items: u128,
    bytes: u128,
    unit: &'static str,
}

fn bench_stats(config: &Config) -> BenchStats {
    let iters = config.iters as u128;
    let work_items = (config.len as u128) * iters;
    match config.bench {
        Bench::NearestPoint | Bench::HalfPlaneSplit => BenchStats {
            work_items,
            bytes: work_items * 16,
            unit: "point",
        },
        Bench::KNearest => {
            let n = config.len as u128;
            let k = (config.k as u128).min(n);
            // Pass i scans n - i points.
            let scanned = (k * n - k * k.saturating_sub(1) / 2) * iters;
            BenchStats {
                work_items: scanned,
                bytes: scanned * 16,
                unit: "point",
            }
        }
        Bench::RangeFilter | Bench::RangeCount => BenchStats {
            work_items,
            bytes: work_items * 8,
            unit: "elem",
        },
        Bench::MatmulBaseline | Bench::MatmulTransposed | Bench::MatmulIkj => {
            let n = config.len as u128;
            BenchStats {
                work_items: n * n * n * iters,
                bytes: n * n * 24 * iters,
                unit: "mul",
            }
        }
    }
}

/// Throughput summary, or `None` when the run did no work to divide by.
fn format_report(config: &Config, stats: &BenchStats, elapsed: Duration) -> Option<String> {
    if stats.work_items == 0 {
        return None;
    }
    let elapsed_s = elapsed.as_secs_f64().max(f64::MIN_POSITIVE);
    let items_per_s = stats.work_items as f64 / elapsed_s;
    let bytes_per_s = stats.bytes as f64 / elapsed_s;
    let ns_per_item = (elapsed_s * 1.0e9) / stats.work_items as f64;

    let mut lines = Vec::with_capacity(5);
    lines.push(format!(
        "bench={} len={} iters={}",
        config.bench.name(),
        config.len,
        config.iters
    ));
    lines.push(format!(
        "elapsed_s={:.6} ns_per_item={:.3} throughput={}",
        elapsed_s,
        ns_per_item,
        format_rate(items_per_s, stats.unit)
    ));
    lines.push(format!(
        "work_items={} unit={}",
        stats.work_items, stats.unit
    ));
    lines.push(format!(
        "bytes={} byte_throughput={}",
        stats.bytes,
        format_rate(bytes_per_s, "B")
    ));
    if config.bench.matmul_fn().is_some() {
        lines.push(format!("gflops={}", format_rate(items_per_s * 2.0, "FLOP")));
    }

    Some(lines.join("\n"))
}

fn format_rate(rate: f64, unit: &str) -> String {
    let (value, prefix) = if rate >= 1.0e12 {
        (rate / 1.0e12, "T")
    } else if rate >= 1.0e9 {
        (rate / 1.0e9, "G")
    } else if rate >= 1.0e6 {
        (rate / 1.0e6, "M")
    } else if rate >= 1.0e3 {
        (rate / 1.0e3, "K")
    } else {
        (rate, "")
    };
    format!("{value:.3} {prefix}{unit}/s")
}

fn check<T: PartialEq + std::fmt::Debug>(actual: T, expected: T) -> Result<(), String> {
    if actual == expected {
        Ok(())
    } else {
        Err(format!("expected {expected:?}, got {actual:?}"))
    }
}

fn verify_bench(bench: Bench) -> Result<(), String> {
    let triangle = PointSet::from_coords(&[0.0, 10.0, 1.0], &[0.0, 10.0, 1.0])
        .map_err(|err| err.to_string())?;
    match bench {
        Bench::NearestPoint => {
            check(nearest_point(3.0, 4.0, &triangle), Ok(Point::new(1.0, 1.0)))?;
            check(
                nearest_point(3.0, 4.0, &PointSet::new()),
                Err(KernelError::EmptyInput),
            )
        }
        Bench::KNearest => {
            let mut set = triangle;
            check(
                k_nearest(3.0, 4.0, &mut set, 2),
                Ok(vec![Point::new(1.0, 1.0), Point::new(0.0, 0.0)]),
            )?;
            check(set.len(), 1)
        }
        Bench::HalfPlaneSplit => {
            let set: PointSet = vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 5.0),
                Point::new(4.0, 1.0),
                Point::new(1.0, 2.0),
            ]
            .into();
            let split = half_plane_split(&set, 1.0, 1.0);
            check(split.above, vec![Point::new(2.0, 5.0)])?;
            check(split.below, vec![Point::new(0.0, 0.0), Point::new(4.0, 1.0)])?;
            check(split.on_line, vec![Point::new(1.0, 2.0)])
        }
        Bench::RangeFilter => {
            let values = [25.0, 24.0, 70.0, 71.0, 50.0];
            check(range_filter(&values, 25.0, 70.0), vec![25.0, 70.0, 50.0])?;
            check(range_filter(&values, 70.0, 25.0), Vec::new())
        }
        Bench::RangeCount => {
            let values = [25.0, 24.0, 70.0, 71.0, 50.0];
            check(range_count(&values, 25.0, 70.0), 3)
        }
        Bench::MatmulBaseline | Bench::MatmulTransposed | Bench::MatmulIkj => {
            let Some(func) = bench.matmul_fn() else {
                return Ok(());
            };
            verify_matmul_variant(func)
        }
    }
}

fn verify_matmul_variant(func: MatmulFn) -> Result<(), String> {
    let a = Matrix::from_fn(5, 3, |i, j| ((i * 3 + j * 5) % 7) as f64);
    let b = Matrix::from_fn(3, 4, |i, j| ((i * 5 + j * 3) % 7) as f64);
    let expected = matmul(&a, &b).map_err(|err| err.to_string())?;
    check(func(&a, &b), Ok(expected))?;
    check(func(&a, &Matrix::identity(3)), Ok(a.clone()))?;
    check(
        func(&a, &a),
        Err(KernelError::DimensionMismatch {
            left_cols: 3,
            right_rows: 5,
        }),
    )
}

fn bench_nearest(config: Config) -> Result<(), KernelError> {
    let (qx, qy) = QUERY_POINT;
    let points = make_points(&config);
    let mut acc = 0.0f64;
    for _ in 0..config.iters {
        let p = nearest_point(black_box(qx), black_box(qy), black_box(&points))?;
        acc += p.x + p.y;
    }
    black_box(acc);
    Ok(())
}

fn bench_k_nearest(config: Config) -> Result<(), KernelError> {
    let (qx, qy) = QUERY_POINT;
    let points = make_points(&config);
    let mut acc = 0usize;
    for _ in 0..config.iters {
        let mut set = points.clone();
        let winners = k_nearest(black_box(qx), black_box(qy), black_box(&mut set), config.k)?;
        acc ^= winners.len();
    }
    black_box(acc);
    Ok(())
}

fn bench_split(config: Config) {
    let (a, b) = SPLIT_LINE;
    let points = make_points(&config);
    let mut acc = 0usize;
    for _ in 0..config.iters {
        let split = half_plane_split(black_box(&points), black_box(a), black_box(b));
        acc ^= split.above.len();
    }
    black_box(acc);
}

fn bench_range_filter(config: Config) {
    let (lower, upper) = RANGE_BOUNDS;
    let values = make_values(&config);
    let mut acc = 0usize;
    for _ in 0..config.iters {
        acc ^= range_filter(black_box(&values), lower, upper).len();
    }
    black_box(acc);
}

fn bench_range_count(config: Config) {
    let (lower, upper) = RANGE_BOUNDS;
    let values = make_values(&config);
    let mut acc = 0usize;
    for _ in 0..config.iters {
        acc ^= range_count(black_box(&values), lower, upper);
    }
    black_box(acc);
}

fn bench_matmul(config: Config, func: MatmulFn) -> Result<(), KernelError> {
    if config.len == 0 {
        return Ok(());
    }

    let n = config.len;
    let (a, b) = make_matrices(&config);
    let sample = (n / 2, n / 2);

    let mut acc = 0.0f64;
    for _ in 0..config.iters {
        let c = func(black_box(&a), black_box(&b))?;
        acc += c[sample];
    }
    black_box(acc);
    Ok(())
}
