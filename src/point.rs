//! 2D points and the mutable point set the geometric kernels scan.
//!
//! A [`PointSet`] is a dense `Vec<Point>`; its length is always the number of
//! live points. Removal is [`PointSet::swap_remove`]: the last live point moves
//! into the vacated slot, so removal is O(1) and survivors may be reordered.

use log::debug;

use crate::error::{KernelError, Result};

/// A coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `(x, y)`.
    ///
    /// Ordering by this value matches ordering by true distance for finite
    /// inputs, without the square root.
    #[inline]
    pub fn distance_squared(self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `(x, y)`.
    #[inline]
    pub fn distance(self, x: f64, y: f64) -> f64 {
        self.distance_squared(x, y).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Ordered, mutable collection of points.
///
/// Duplicate coordinates are distinct elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Builds a set from parallel x and y slices.
    pub fn from_coords(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            debug!(
                "rejecting coordinates: {} x values vs {} y values",
                xs.len(),
                ys.len()
            );
            return Err(KernelError::CoordinateLengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        Ok(xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| Point::new(x, y))
            .collect())
    }

    #[inline]
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Removes the point at `index` in O(1), moving the last point into its slot.
    ///
    /// Returns `None` (and leaves the set untouched) when `index` is out of range.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Option<Point> {
        if index < self.points.len() {
            Some(self.points.swap_remove(index))
        } else {
            None
        }
    }

    /// Removes the live point at `index`, which the caller has bounds-checked.
    #[inline]
    pub(crate) fn take(&mut self, index: usize) -> Point {
        debug_assert!(index < self.points.len());
        self.points.swap_remove(index)
    }
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
