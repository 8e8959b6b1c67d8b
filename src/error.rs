//! Error type shared by every kernel.

use thiserror::Error;

/// Reasons a kernel rejects its input.
///
/// Every check runs before any computation or mutation, so an error never
/// comes with a partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KernelError {
    /// The operation needs at least one element.
    #[error("input is empty")]
    EmptyInput,

    /// More neighbours were requested than the point set holds.
    #[error("requested {requested} nearest points but only {available} are available")]
    InsufficientPoints { requested: usize, available: usize },

    /// Left operand's column count differs from the right operand's row count.
    #[error("inner dimensions differ: left has {left_cols} columns, right has {right_rows} rows")]
    DimensionMismatch { left_cols: usize, right_rows: usize },

    /// Backing buffer length does not match the declared shape.
    #[error("buffer of length {len} cannot back a {rows}x{cols} matrix")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },

    /// Parallel coordinate slices have different lengths.
    #[error("coordinate slices differ in length: {xs} x values, {ys} y values")]
    CoordinateLengthMismatch { xs: usize, ys: usize },

    /// Caller-supplied output matrix has the wrong shape for the product.
    #[error("output must be {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    OutputShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, KernelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_sizes() {
        let err = KernelError::InsufficientPoints {
            requested: 5,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "requested 5 nearest points but only 3 are available"
        );

        let err = KernelError::DimensionMismatch {
            left_cols: 3,
            right_rows: 2,
        };
        assert_eq!(
            err.to_string(),
            "inner dimensions differ: left has 3 columns, right has 2 rows"
        );
    }
}
