use std::ops::Index;

use crate::error::MatrixError;
use crate::math::rounding::round2;

/// A dense `rows x cols` matrix of `f64` values stored row-major.
///
/// Every value is rounded to two decimal places when written, so equality
/// and the classification predicates compare rounded values exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a zero-filled matrix.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            rows >= 1 && cols >= 1,
            "matrix dimensions must be positive, got ({}, {})",
            rows,
            cols
        );
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Builds a matrix from row-major data, rounding every value.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self, MatrixError> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 || data.len() != rows * cols {
            return Err(MatrixError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self {
            data: data.into_iter().map(round2).collect(),
            rows,
            cols,
        })
    }

    /// Builds a matrix from a list of equally long rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let nrows = rows.len();
        let ncols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(MatrixError::InvalidShape {
                    rows: nrows,
                    cols: ncols,
                    len: data.len() + row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_shape_vec((nrows, ncols), data)
    }

    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    #[inline]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub(crate) fn check_index(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.offset(row, col))
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Returns the value at `(i, j)`, rounded to two decimals.
    pub fn get_val(&self, i: usize, j: usize) -> Result<f64, MatrixError> {
        let offset = self.check_index(i, j)?;
        Ok(round2(self.data[offset]))
    }

    /// Stores `val` rounded to two decimals at `(i, j)`.
    pub fn set_val(&mut self, i: usize, j: usize, val: f64) -> Result<(), MatrixError> {
        let offset = self.check_index(i, j)?;
        self.data[offset] = round2(val);
        Ok(())
    }

    pub fn max_val(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn min_val(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Deep, independent duplicate of this matrix.
    pub fn copy(&self) -> Matrix {
        self.clone()
    }

    /// Returns a new `cols x rows` matrix with entry `(j, i)` equal to `(i, j)`.
    pub fn transpose(&self) -> Matrix {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[self.offset(i, j)];
            }
        }
        Matrix::from_raw(self.cols, self.rows, data)
    }

    pub fn is_same_size(&self, other: &Matrix) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}
