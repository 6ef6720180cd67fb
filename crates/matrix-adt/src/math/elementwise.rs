use log::warn;

use crate::math::rounding::round2;
use crate::math::{Matrix, Operand};

impl Matrix {
    /// Applies `f` to every entry in place, rounding each result.
    ///
    /// Returns an independent copy of the updated matrix.
    pub fn map<F>(&mut self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        for v in self.as_mut_slice().iter_mut() {
            *v = round2(f(*v));
        }
        self.copy()
    }

    /// Adds a scalar to every entry, or another matrix of the same shape
    /// elementwise. Mutates in place and returns a copy of the result.
    ///
    /// A matrix addend of a different shape leaves the receiver unchanged.
    pub fn add<'a, A>(&mut self, addend: A) -> Matrix
    where
        A: Into<Operand<'a>>,
    {
        let addend: Operand<'a> = addend.into();
        match addend {
            Operand::Scalar(s) => self.map(|x| x + s),
            Operand::Matrix(other) => self.zip_apply(other, "add", |a, b| a + b),
        }
    }

    /// Multiplies every entry by a scalar, or by the matching entry of another
    /// matrix of the same shape (Hadamard product). Mutates in place and
    /// returns a copy of the result.
    ///
    /// A matrix multiplier of a different shape leaves the receiver unchanged.
    pub fn mul<'a, M>(&mut self, multiplier: M) -> Matrix
    where
        M: Into<Operand<'a>>,
    {
        let multiplier: Operand<'a> = multiplier.into();
        match multiplier {
            Operand::Scalar(s) => self.map(|x| x * s),
            Operand::Matrix(other) => self.zip_apply(other, "mul", |a, b| a * b),
        }
    }

    fn zip_apply<F>(&mut self, other: &Matrix, op: &str, f: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64,
    {
        if !self.is_same_size(other) {
            warn!(
                "{}: shape ({}, {}) does not match ({}, {}); matrix left unchanged",
                op,
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols()
            );
            return self.copy();
        }
        for (v, &o) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *v = round2(f(*v, o));
        }
        self.copy()
    }
}

#[cfg(test)]
mod tests {
    use crate::math::Matrix;

    fn sample() -> Matrix {
        Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap()
    }

    #[test]
    fn map_writes_through_and_returns_copy() {
        let mut a = sample();
        let mut out = a.map(|x| x / 3.0);
        assert_eq!(a.get_val(0, 0).unwrap(), 0.33);
        assert_eq!(out, a);

        // the returned copy does not alias the receiver
        out.set_val(0, 0, 9.0).unwrap();
        assert_eq!(a.get_val(0, 0).unwrap(), 0.33);
    }

    #[test]
    fn add_matrix_elementwise() {
        let mut a = sample();
        let b = sample();
        let sum = a.add(&b);
        assert_eq!(sum.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!(a, sum);
    }

    #[test]
    fn mul_hadamard() {
        let mut a = sample();
        let b = Matrix::from_rows(&[[0.5, 0.0], [-1.0, 2.0]]).unwrap();
        a.mul(&b);
        assert_eq!(a.as_slice(), &[0.5, 0.0, -3.0, 8.0]);
    }

    #[test]
    fn mismatched_shapes_are_a_no_op() {
        let mut a = sample();
        let b = Matrix::new(3, 2);
        let out = a.add(&b);
        assert_eq!(out, sample());
        let out = a.mul(&b);
        assert_eq!(out, sample());
        assert_eq!(a, sample());
    }
}
