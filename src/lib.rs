//! Point-set and dense matrix kernels from the pbench micro-benchmark suite.
//!
//! Each kernel is a plain function over caller-owned data. None keeps state
//! between calls; the only mutation is [`k_nearest`] removing its winners from
//! the [`PointSet`] it is given.
//!
//! # Kernels
//!
//! - **Nearest point** ([`nearest_point`], [`nearest_index`]) — linear scan for the closest point
//! - **k-NN** ([`k_nearest`]) — repeated nearest scan with swap-remove
//! - **Half-plane split** ([`half_plane_split`]) — classify points against `y = a·x + b`
//! - **Range filter** ([`range_filter`], [`range_count`]) — inclusive bounds, order preserved
//! - **Matmul** ([`matmul`], [`matmul_transposed`], [`matmul_ikj`]) — dense product
//!
//! Inputs for benchmarks come from [`workload`]. Rejected inputs are reported
//! as [`KernelError`].

mod error;
mod matmul;
mod matrix;
mod nearest;
mod point;
mod range;
mod split;
pub mod workload;

pub use error::*;
pub use matmul::*;
pub use matrix::*;
pub use nearest::*;
pub use point::*;
pub use range::*;
pub use split::*;
