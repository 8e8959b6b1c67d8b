//! Dense row-major matrix with fixed dimensions.

use std::ops::{Index, IndexMut};

use log::debug;

use crate::error::{KernelError, Result};

/// Dense `rows x cols` grid of `f64`, stored row-major.
///
/// Dimensions are set at construction and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Element count of a `rows x cols` grid, or `None` if it overflows `usize`.
#[inline]
fn element_count(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols)
}

#[inline]
fn element_count_or_panic(rows: usize, cols: usize) -> usize {
    match element_count(rows, cols) {
        Some(len) => len,
        None => panic!("{rows}x{cols} matrix overflows usize"),
    }
}

impl Matrix {
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; element_count_or_panic(rows, cols)],
        }
    }

    /// Wraps a row-major buffer. Fails when `data.len() != rows * cols`,
    /// including when that product overflows.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if element_count(rows, cols) != Some(data.len()) {
            debug!(
                "rejecting {}-element buffer for {rows}x{cols} matrix",
                data.len()
            );
            return Err(KernelError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a matrix from `f(i, j)`, filling row by row.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(element_count_or_panic(rows, cols));
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Row `i` as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn transpose(&self) -> Self {
        let mut out = vec![0.0; self.data.len()];
        for i in 0..self.rows {
            let row = i * self.cols;
            for j in 0..self.cols {
                out[j * self.rows + i] = self.data[row + j];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data: out,
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[i * self.cols + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_checks_length() {
        assert!(Matrix::from_vec(2, 3, vec![0.0; 6]).is_ok());
        assert_eq!(
            Matrix::from_vec(2, 3, vec![0.0; 5]),
            Err(KernelError::ShapeMismatch {
                rows: 2,
                cols: 3,
                len: 5
            })
        );
    }

    #[test]
    fn from_vec_rejects_overflowing_shape() {
        let side = 1usize << (usize::BITS / 2 + 1);
        assert_eq!(
            Matrix::from_vec(side, side, Vec::new()),
            Err(KernelError::ShapeMismatch {
                rows: side,
                cols: side,
                len: 0
            })
        );
        assert!(Matrix::from_vec(usize::MAX, 2, vec![0.0; 6]).is_err());
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn zeros_panics_on_overflowing_shape() {
        let _ = Matrix::zeros(usize::MAX, 2);
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn from_fn_panics_on_overflowing_shape() {
        let _ = Matrix::from_fn(usize::MAX, usize::MAX, |_, _| 0.0);
    }

    #[test]
    fn row_major_addressing() {
        let m = Matrix::from_fn(2, 3, |i, j| (i * 10 + j) as f64);
        assert_eq!(m.as_slice(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
        assert_eq!(m[(1, 2)], 12.0);
        assert_eq!(m.get(1, 0), Some(10.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
        assert_eq!(m.row(1), &[10.0, 11.0, 12.0]);
    }

    #[test]
    fn transpose_swaps_shape() {
        let m = Matrix::from_fn(2, 3, |i, j| (i * 10 + j) as f64);
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(t[(j, i)], m[(i, j)]);
            }
        }
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn index_mut_writes_in_place() {
        let mut m = Matrix::zeros(2, 2);
        m[(0, 1)] = 4.0;
        assert_eq!(m.as_slice(), &[0.0, 4.0, 0.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds_panics() {
        let m = Matrix::identity(2);
        let _ = m[(0, 2)];
    }
}
