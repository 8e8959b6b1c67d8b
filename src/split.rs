//! Classifying points against the line `y = a·x + b`.
//!
//! A single forward pass evaluates the line at each point's `x` and sorts the
//! point into one of three buckets:
//!
//! - **above**: `y > a·x + b`
//! - **below**: `y < a·x + b`
//! - **on_line**: neither comparison holds (exactly on the line, or NaN)
//!
//! The on-line bucket is kept rather than discarded so the partition is always
//! complete: `above.len() + below.len() + on_line.len() == n`. Callers that
//! only want the strict halves use [`HalfPlaneSplit::into_parts`].
//!
//! Each bucket keeps the input order.

use log::trace;

use crate::point::{Point, PointSet};

/// Three-way partition produced by [`half_plane_split`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HalfPlaneSplit {
    pub above: Vec<Point>,
    pub below: Vec<Point>,
    pub on_line: Vec<Point>,
}

impl HalfPlaneSplit {
    /// Total number of points classified, including those on the line.
    pub fn len(&self) -> usize {
        self.above.len() + self.below.len() + self.on_line.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The strict halves, dropping the on-line points.
    pub fn into_parts(self) -> (Vec<Point>, Vec<Point>) {
        (self.above, self.below)
    }
}

/// Splits `points` by the line with slope `a` and intercept `b`.
///
/// An empty set yields three empty buckets.
pub fn half_plane_split(points: &PointSet, a: f64, b: f64) -> HalfPlaneSplit {
    let mut split = HalfPlaneSplit::default();

    for &p in points.iter() {
        let line_y = a * p.x + b;
        if p.y > line_y {
            split.above.push(p);
        } else if p.y < line_y {
            split.below.push(p);
        } else {
            split.on_line.push(p);
        }
    }

    trace!(
        "half_plane_split y = {a}x + {b}: {} above, {} below, {} on line",
        split.above.len(),
        split.below.len(),
        split.on_line.len()
    );
    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pts(coords: &[(f64, f64)]) -> PointSet {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn known_case() {
        // (0,0): 0 < 1 -> below. (2,5): 5 > 3 -> above. (4,1): 1 < 5 -> below.
        let set = pts(&[(0.0, 0.0), (2.0, 5.0), (4.0, 1.0)]);
        let split = half_plane_split(&set, 1.0, 1.0);
        assert_eq!(split.above, vec![Point::new(2.0, 5.0)]);
        assert_eq!(split.below, vec![Point::new(0.0, 0.0), Point::new(4.0, 1.0)]);
        assert!(split.on_line.is_empty());
    }

    #[test]
    fn points_on_the_line_go_to_neither_half() {
        let set = pts(&[(0.0, 1.0), (1.0, 2.0), (1.0, 3.0)]);
        let split = half_plane_split(&set, 1.0, 1.0);
        assert_eq!(split.on_line, vec![Point::new(0.0, 1.0), Point::new(1.0, 2.0)]);
        assert_eq!(split.len(), 3);

        let (above, below) = split.into_parts();
        assert_eq!(above, vec![Point::new(1.0, 3.0)]);
        assert!(below.is_empty());
    }

    #[test]
    fn empty_set() {
        let split = half_plane_split(&PointSet::new(), 5.0, 3.0);
        assert!(split.is_empty());
    }

    #[test]
    fn nan_is_unclassified() {
        let set = pts(&[(f64::NAN, 0.0)]);
        let split = half_plane_split(&set, 1.0, 0.0);
        assert_eq!(split.on_line.len(), 1);
        assert!(split.above.is_empty() && split.below.is_empty());
    }

    proptest! {
        /// Buckets cover the input, satisfy their inequality, and keep input order.
        #[test]
        fn split_is_complete_and_sound(
            coords in proptest::collection::vec((-200i32..200, -200i32..200), 0..=256),
            a in -5i32..=5,
            b in -50i32..=50,
        ) {
            let (a, b) = (a as f64, b as f64);
            let points: Vec<Point> = coords
                .iter()
                .map(|&(x, y)| Point::new(x as f64, y as f64))
                .collect();
            let split = half_plane_split(&PointSet::from(points.clone()), a, b);

            prop_assert_eq!(split.len(), points.len());
            for p in &split.above {
                prop_assert!(p.y > a * p.x + b);
            }
            for p in &split.below {
                prop_assert!(p.y < a * p.x + b);
            }
            for p in &split.on_line {
                prop_assert_eq!(p.y, a * p.x + b);
            }

            let expected_above: Vec<Point> =
                points.iter().copied().filter(|p| p.y > a * p.x + b).collect();
            let expected_below: Vec<Point> =
                points.iter().copied().filter(|p| p.y < a * p.x + b).collect();
            prop_assert_eq!(&split.above, &expected_above);
            prop_assert_eq!(&split.below, &expected_below);
        }
    }
}
