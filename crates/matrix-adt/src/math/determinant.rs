//! Cofactor expansion: determinant, minors, cofactors, adjoint and inverse.
//!
//! The determinant expands along row 0 and recurses through minors without
//! memoization, so the cost grows factorially with the matrix order. That is
//! fine for the small matrices this type targets; no pivoting or
//! decomposition-based path is provided.

use log::{debug, trace};

use crate::error::MatrixError;
use crate::math::rounding::round2;
use crate::math::Matrix;

impl Matrix {
    fn require_square(&self, op: &'static str) -> Result<usize, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                op,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(self.rows())
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// A 1x1 matrix `[[a]]` has determinant `a`, so it is invertible whenever
    /// `a != 0`. Implementations that expand a 1x1 through an empty minor
    /// report 0 here instead.
    pub fn det(&self) -> Result<f64, MatrixError> {
        let n = self.require_square("determinant")?;
        debug!("Computing determinant of {}x{} matrix", n, n);
        Ok(det_of(self.as_slice(), n))
    }

    /// Determinant of the submatrix left after deleting row `i` and column `j`.
    ///
    /// The receiver is untouched; the reduction happens on a private copy.
    pub fn minor(&self, i: usize, j: usize) -> Result<f64, MatrixError> {
        let n = self.require_square("minor")?;
        self.check_index(i, j)?;
        Ok(minor_of(self.as_slice(), n, i, j))
    }

    /// Signed minor: `minor(i, j) * (-1)^(i + j)`.
    pub fn cofactor(&self, i: usize, j: usize) -> Result<f64, MatrixError> {
        let n = self.require_square("cofactor")?;
        self.check_index(i, j)?;
        Ok(cofactor_of(self.as_slice(), n, i, j))
    }

    /// Sum of every entry of a square matrix.
    ///
    /// Note this adds all `(i, j)` pairs, not only the main diagonal; use
    /// [`Matrix::diagonal_sum`] for the trace in the usual sense.
    pub fn tr(&self) -> Result<f64, MatrixError> {
        self.require_square("trace")?;
        Ok(self.as_slice().iter().sum())
    }

    /// Sum of the main-diagonal entries of a square matrix.
    pub fn diagonal_sum(&self) -> Result<f64, MatrixError> {
        let n = self.require_square("trace")?;
        Ok((0..n).map(|i| self[(i, i)]).sum())
    }

    /// Adjugate: the transpose of the cofactor matrix.
    pub fn adjoint(&self) -> Result<Matrix, MatrixError> {
        let n = self.require_square("adjoint")?;
        let data = self.as_slice();

        if n == 2 {
            let adj = vec![
                round2(data[3]),
                round2(-data[1]),
                round2(-data[2]),
                round2(data[0]),
            ];
            return Ok(Matrix::from_raw(2, 2, adj));
        }

        let mut cofactors = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                cofactors.push(round2(cofactor_of(data, n, i, j)));
            }
        }
        Ok(Matrix::from_raw(n, n, cofactors).transpose())
    }

    /// Inverse via `adjoint() * (1 / det())`, each entry rounded.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        let n = self.require_square("inverse")?;
        let determinant = det_of(self.as_slice(), n);
        if determinant == 0.0 {
            return Err(MatrixError::NotInvertible);
        }
        debug!("Inverting {}x{} matrix with determinant {}", n, n, determinant);
        let mut adjoint = self.adjoint()?;
        Ok(adjoint.mul(1.0 / determinant))
    }
}

fn det_of(data: &[f64], n: usize) -> f64 {
    match n {
        // empty product, reached only as the minor of a 1x1 matrix
        0 => 1.0,
        1 => data[0],
        2 => data[0] * data[3] - data[1] * data[2],
        _ => (0..n)
            .map(|k| cofactor_of(data, n, 0, k) * data[k])
            .sum(),
    }
}

fn minor_of(data: &[f64], n: usize, i: usize, j: usize) -> f64 {
    trace!("Expanding minor ({}, {}) of order {}", i, j, n);
    let mut reduced = Vec::with_capacity((n - 1) * (n - 1));
    for (row, values) in data.chunks(n).enumerate() {
        if row == i {
            continue;
        }
        reduced.extend(
            values
                .iter()
                .enumerate()
                .filter(|&(col, _)| col != j)
                .map(|(_, &v)| v),
        );
    }
    det_of(&reduced, n - 1)
}

fn cofactor_of(data: &[f64], n: usize, i: usize, j: usize) -> f64 {
    let minor = minor_of(data, n, i, j);
    if (i + j) % 2 == 0 {
        minor
    } else {
        -minor
    }
}

#[cfg(test)]
mod tests {
    use crate::error::MatrixError;
    use crate::math::Matrix;

    #[test]
    fn det_of_one_by_one_is_the_entry() {
        let m = Matrix::from_rows(&[[4.5]]).unwrap();
        assert_eq!(m.det().unwrap(), 4.5);
        assert_eq!(m.adjoint().unwrap().as_slice(), &[1.0]);
        assert_eq!(m.inverse().unwrap().as_slice(), &[0.22]);
    }

    #[test]
    fn minor_and_cofactor_signs() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]).unwrap();
        // delete row 0, col 1: [[4, 6], [7, 10]] -> 40 - 42
        assert_eq!(m.minor(0, 1).unwrap(), -2.0);
        assert_eq!(m.cofactor(0, 1).unwrap(), 2.0);
        assert_eq!(m.cofactor(1, 1).unwrap(), m.minor(1, 1).unwrap());
        // receiver untouched
        assert_eq!(m.shape(), (3, 3));
    }

    #[test]
    fn minor_rejects_bad_input() {
        let m = Matrix::new(3, 3);
        assert!(matches!(
            m.minor(3, 0),
            Err(MatrixError::IndexOutOfBounds { .. })
        ));
        let rect = Matrix::new(2, 3);
        assert!(matches!(rect.cofactor(0, 0), Err(MatrixError::NotSquare { .. })));
    }

    #[test]
    fn tr_sums_every_entry() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(m.tr().unwrap(), 10.0);
        assert_eq!(m.diagonal_sum().unwrap(), 5.0);
    }
}
