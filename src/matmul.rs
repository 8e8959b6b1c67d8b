//! Dense matrix multiplication (C = A x B).
//!
//! `A` is `k x l`, `B` is `l x m`, and the product is `k x m` with
//! `C[i][j] = sum over t of A[i][t] * B[t][j]`.
//!
//! # Strategies
//!
//! | Function | Strategy | Best For |
//! |----------|----------|----------|
//! | [`matmul`] | Naive i-j-t loops | Reference, clarity |
//! | [`matmul_transposed`] | Transpose B for a contiguous inner loop | Moderate sizes |
//! | [`matmul_ikj`] | Loop reordering (i-t-j), accumulate into C's row | Better cache reuse |
//!
//! Every variant adds the terms of a cell in ascending `t`, starting from
//! `0.0`, with plain (uncompensated) summation. The three results are
//! therefore bit-identical, not merely close.
//!
//! Inner dimensions are checked before any arithmetic; a mismatch is reported
//! as [`KernelError::DimensionMismatch`].
//!
//! # References
//!
//! - [Matrix multiplication chapter](https://en.algorithmica.org/hpc/algorithms/matmul/)

use log::{debug, trace};

use crate::error::{KernelError, Result};
use crate::matrix::Matrix;

/// Signature shared by the allocating variants.
pub type MatmulFn = fn(&Matrix, &Matrix) -> Result<Matrix>;

#[inline]
fn check_dims(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.cols() != b.rows() {
        debug!(
            "rejecting {}x{} * {}x{} product",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols()
        );
        return Err(KernelError::DimensionMismatch {
            left_cols: a.cols(),
            right_rows: b.rows(),
        });
    }
    Ok(())
}

#[inline]
fn check_output(a: &Matrix, b: &Matrix, out: &Matrix) -> Result<()> {
    check_dims(a, b)?;
    if out.shape() != (a.rows(), b.cols()) {
        debug!(
            "rejecting {}x{} output for {}x{} product",
            out.rows(),
            out.cols(),
            a.rows(),
            b.cols()
        );
        return Err(KernelError::OutputShapeMismatch {
            expected_rows: a.rows(),
            expected_cols: b.cols(),
            rows: out.rows(),
            cols: out.cols(),
        });
    }
    Ok(())
}

/// Baseline i-j-t triple loop into a caller-supplied `k x m` output.
///
/// Every cell of `out` is overwritten.
pub fn matmul_into(a: &Matrix, b: &Matrix, out: &mut Matrix) -> Result<()> {
    check_output(a, b, out)?;
    let (k, l) = a.shape();
    let m = b.cols();
    let a_data = a.as_slice();
    let b_data = b.as_slice();
    let c = out.as_mut_slice();

    for i in 0..k {
        let a_row = i * l;
        let c_row = i * m;
        for j in 0..m {
            let mut sum = 0.0f64;
            for t in 0..l {
                sum += a_data[a_row + t] * b_data[t * m + j];
            }
            c[c_row + j] = sum;
        }
    }
    Ok(())
}

/// Baseline matrix multiplication (i-j-t order).
pub fn matmul(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_dims(a, b)?;
    let mut out = Matrix::zeros(a.rows(), b.cols());
    matmul_into(a, b, &mut out)?;
    trace!(
        "matmul {}x{} * {}x{}",
        a.rows(),
        a.cols(),
        b.rows(),
        b.cols()
    );
    Ok(out)
}

/// Multiply with B transposed to make the inner loop contiguous.
pub fn matmul_transposed(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_dims(a, b)?;
    let (k, l) = a.shape();
    let m = b.cols();
    let b_t = b.transpose();
    let a_data = a.as_slice();
    let bt_data = b_t.as_slice();

    let mut out = Matrix::zeros(k, m);
    let c = out.as_mut_slice();
    for i in 0..k {
        let a_row = &a_data[i * l..(i + 1) * l];
        for j in 0..m {
            let b_col = &bt_data[j * l..(j + 1) * l];
            let mut sum = 0.0f64;
            for (x, y) in a_row.iter().zip(b_col) {
                sum += x * y;
            }
            c[i * m + j] = sum;
        }
    }
    Ok(out)
}

/// Loop-reordered multiplication (i-t-j order) for better cache locality.
pub fn matmul_ikj(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_dims(a, b)?;
    let (k, l) = a.shape();
    let m = b.cols();
    let a_data = a.as_slice();
    let b_data = b.as_slice();

    let mut out = Matrix::zeros(k, m);
    let c = out.as_mut_slice();
    for i in 0..k {
        let c_row = &mut c[i * m..(i + 1) * m];
        for t in 0..l {
            let a_it = a_data[i * l + t];
            let b_row = &b_data[t * m..(t + 1) * m];
            for (dst, &b_tj) in c_row.iter_mut().zip(b_row) {
                *dst += a_it * b_tj;
            }
        }
    }
    Ok(out)
}
