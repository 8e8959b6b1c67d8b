//! Deterministic synthetic inputs for benchmarks and the perf harness.
//!
//! The `modular_*` and `index_sum_*` generators reproduce the classic pbench
//! inputs exactly. The `random_*` generators use a seeded xorshift64* stream
//! so runs are repeatable across machines.

use crate::matrix::Matrix;
use crate::point::{Point, PointSet};

/// Reference query point for the nearest-point and k-NN benches.
pub const QUERY_POINT: (f64, f64) = (3.0, 400.0);
/// Slope and intercept for the half-plane split bench.
pub const SPLIT_LINE: (f64, f64) = (5.0, 3.0);
/// Inclusive bounds for the range filter bench.
pub const RANGE_BOUNDS: (f64, f64) = (25.0, 70.0);

/// xorshift64* step.
#[inline]
pub fn next_u64(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    *state = x;
    x.wrapping_mul(0x2545_F491_4F6C_DD1D)
}

/// `n` points with `x = i mod 100` and `y = i mod 1000`.
pub fn modular_points(n: usize) -> PointSet {
    (0..n)
        .map(|i| Point::new((i % 100) as f64, (i % 1000) as f64))
        .collect()
}

/// `n` values with `v = i mod 100`.
pub fn modular_values(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i % 100) as f64).collect()
}

/// `rows x cols` matrix with entries `i + j`.
pub fn index_sum_matrix(rows: usize, cols: usize) -> Matrix {
    Matrix::from_fn(rows, cols, |i, j| (i + j) as f64)
}

/// `n` points with coordinates uniform in `[0, 1024)`, quantised to 1/64.
pub fn random_points(n: usize, seed: u64) -> PointSet {
    let mut state = seed | 1;
    let mut coord = move || (next_u64(&mut state) & 0xFFFF) as f64 / 64.0;
    (0..n).map(|_| Point::new(coord(), coord())).collect()
}

/// `rows x cols` matrix with entries uniform in `[0, 1]`.
pub fn random_matrix(rows: usize, cols: usize, seed: u64) -> Matrix {
    let mut state = seed | 1;
    Matrix::from_fn(rows, cols, |_, _| {
        (next_u64(&mut state) & 0xFF) as f64 / 255.0
    })
}
