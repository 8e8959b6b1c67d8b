//! Inclusive range filtering over a slice of scalars.
//!
//! Selects every `v` with `lower <= v <= upper`, in input order. An inverted
//! range (`lower > upper`) selects nothing; that is a valid empty result, not
//! an error. Values that compare false against both bounds (NaN) are skipped.

/// Values within `[lower, upper]`, preserving input order.
pub fn range_filter<T: PartialOrd + Copy>(values: &[T], lower: T, upper: T) -> Vec<T> {
    let mut out = Vec::new();
    for &v in values {
        if lower <= v && v <= upper {
            out.push(v);
        }
    }
    out
}

/// Number of values within `[lower, upper]`, without allocating.
pub fn range_count<T: PartialOrd + Copy>(values: &[T], lower: T, upper: T) -> usize {
    values
        .iter()
        .filter(|&&v| lower <= v && v <= upper)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn filter_matches_reference(
            values in proptest::collection::vec(-1000i32..1000, 0..=1024),
            lower in -1100i32..1100,
            upper in -1100i32..1100,
        ) {
            let values: Vec<f64> = values.into_iter().map(f64::from).collect();
            let (lower, upper) = (lower as f64, upper as f64);
            let expected: Vec<f64> = values
                .iter()
                .copied()
                .filter(|v| (lower..=upper).contains(v))
                .collect();

            let actual = range_filter(&values, lower, upper);
            prop_assert_eq!(range_count(&values, lower, upper), actual.len());
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn inverted_bounds_select_nothing(
            values in proptest::collection::vec(any::<i64>(), 0..=256),
            lo in any::<i64>(),
            hi in any::<i64>(),
        ) {
            prop_assume!(lo < hi);
            prop_assert!(range_filter(&values, hi, lo).is_empty());
            prop_assert_eq!(range_count(&values, hi, lo), 0);
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let values = [25.0, 24.0, 70.0, 71.0, 50.0, 25.0];
        assert_eq!(range_filter(&values, 25.0, 70.0), vec![25.0, 70.0, 50.0, 25.0]);
    }

    #[test]
    fn nan_is_never_selected() {
        let values = [f64::NAN, 1.0];
        assert_eq!(range_filter(&values, f64::NEG_INFINITY, f64::INFINITY), vec![1.0]);
    }

    #[test]
    fn empty_input() {
        let empty: [f64; 0] = [];
        assert!(range_filter(&empty, 0.0, 1.0).is_empty());
    }
}
