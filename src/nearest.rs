//! Nearest-point and k-nearest-neighbour queries over a [`PointSet`].
//!
//! Both queries are linear scans. The k-NN query repeats the single scan `k`
//! times, removing each winner before the next pass, so pass `i` only looks at
//! the `n - i` points still live.
//!
//! | Function | Strategy | Cost |
//! |----------|----------|------|
//! | [`nearest_index`] | One scan, strict-less replacement | O(n) |
//! | [`nearest_point`] | [`nearest_index`] + lookup | O(n) |
//! | [`k_nearest`] | `k` scans with swap-remove | O(k·n) |
//!
//! # Ties
//!
//! The best-so-far is replaced only on a strictly smaller distance, so among
//! equidistant points the earliest one scanned wins. Distances are compared
//! squared; the square root never changes the winner for finite inputs.

use log::{debug, trace};

use crate::error::{KernelError, Result};
use crate::point::{Point, PointSet};

/// Index of the point in `points` closest to `(x, y)`, or `None` if empty.
#[inline]
pub fn nearest_index(x: f64, y: f64, points: &[Point]) -> Option<usize> {
    let (first, rest) = points.split_first()?;
    let mut best_idx = 0usize;
    let mut best_dist = first.distance_squared(x, y);

    for (offset, p) in rest.iter().enumerate() {
        let dist = p.distance_squared(x, y);
        if dist < best_dist {
            best_dist = dist;
            best_idx = offset + 1;
        }
    }

    Some(best_idx)
}

/// The point in `points` closest to `(x, y)`.
///
/// Fails with [`KernelError::EmptyInput`] when the set has no points.
pub fn nearest_point(x: f64, y: f64, points: &PointSet) -> Result<Point> {
    match nearest_index(x, y, points.as_slice()) {
        Some(idx) => Ok(points.as_slice()[idx]),
        None => {
            debug!("nearest_point on empty point set");
            Err(KernelError::EmptyInput)
        }
    }
}

/// The `k` points closest to `(x, y)`, in non-decreasing distance order.
///
/// Each winner is removed from `points`, so on success the set has shrunk by
/// exactly `k`. Pass a clone if the original population is needed afterwards.
/// Fails with [`KernelError::InsufficientPoints`] when `k > points.len()`, in
/// which case `points` is left untouched.
pub fn k_nearest(x: f64, y: f64, points: &mut PointSet, k: usize) -> Result<Vec<Point>> {
    let available = points.len();
    if k > available {
        debug!("k_nearest asked for {k} of {available} points");
        return Err(KernelError::InsufficientPoints {
            requested: k,
            available,
        });
    }

    let mut result = Vec::with_capacity(k);
    for pass in 0..k {
        let Some(idx) = nearest_index(x, y, points.as_slice()) else {
            unreachable!("point set emptied after {pass} of {k} passes");
        };
        result.push(points.take(idx));
    }
    debug_assert_eq!(result.len(), k);
    debug_assert_eq!(points.len(), available - k);

    trace!(
        "k_nearest selected {} of {available} points, {} remain",
        result.len(),
        points.len()
    );
    Ok(result)
}
