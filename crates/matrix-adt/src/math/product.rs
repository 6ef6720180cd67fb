use rayon::prelude::*;

use crate::error::MatrixError;
use crate::math::rounding::round2;
use crate::math::{Matrix, Operand};

impl Matrix {
    /// Matrix product `self x multiplier`.
    ///
    /// Fails with [`MatrixError::TypeMismatch`] when given a scalar and with
    /// [`MatrixError::IncompatibleDimensions`] when `self.cols() !=
    /// multiplier.rows()`. Neither operand is modified.
    pub fn mat_mul<'a, M>(&self, multiplier: M) -> Result<Matrix, MatrixError>
    where
        M: Into<Operand<'a>>,
    {
        let multiplier: Operand<'a> = multiplier.into();
        let rhs = multiplier.as_matrix().ok_or(MatrixError::TypeMismatch)?;
        if self.cols() != rhs.rows() {
            return Err(MatrixError::IncompatibleDimensions {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        let (rows, inner, cols) = (self.rows(), self.cols(), rhs.cols());
        let lhs = self.as_slice();
        let rhs_data = rhs.as_slice();
        let mut data = vec![0.0; rows * cols];
        // each worker owns one output row
        data.par_chunks_mut(cols)
            .enumerate()
            .for_each(|(i, out_row)| {
                let lhs_row = &lhs[i * inner..(i + 1) * inner];
                for (j, cell) in out_row.iter_mut().enumerate() {
                    let mut sum = 0.0;
                    for (k, &a) in lhs_row.iter().enumerate() {
                        sum += a * rhs_data[k * cols + j];
                    }
                    *cell = round2(sum);
                }
            });

        Ok(Matrix::from_raw(rows, cols, data))
    }
}
