use crate::math::Matrix;

impl Matrix {
    /// Square with a non-zero determinant.
    pub fn is_invertible(&self) -> bool {
        self.det().map(|d| d != 0.0).unwrap_or(false)
    }

    pub fn is_symmetric(&self) -> bool {
        *self == self.transpose()
    }

    /// The transpose equals the negated matrix.
    pub fn is_skew_symmetric(&self) -> bool {
        self.transpose() == self.copy().mul(-1.0)
    }

    /// No non-zero entries below the main diagonal.
    pub fn is_upper_triangular(&self) -> bool {
        (0..self.rows()).all(|i| (0..self.cols().min(i)).all(|j| self[(i, j)] == 0.0))
    }

    /// No non-zero entries above the main diagonal.
    pub fn is_lower_triangular(&self) -> bool {
        (0..self.rows()).all(|i| ((i + 1)..self.cols()).all(|j| self[(i, j)] == 0.0))
    }

    pub fn is_diagonal(&self) -> bool {
        self.is_upper_triangular() && self.is_lower_triangular()
    }
}

#[cfg(test)]
mod tests {
    use crate::math::Matrix;

    #[test]
    fn triangular_and_diagonal() {
        let upper = Matrix::from_rows(&[[1.0, 2.0], [0.0, 3.0]]).unwrap();
        assert!(upper.is_upper_triangular());
        assert!(!upper.is_lower_triangular());
        assert!(!upper.is_diagonal());

        let lower = upper.transpose();
        assert!(lower.is_lower_triangular());
        assert!(!lower.is_upper_triangular());

        assert!(Matrix::identity(4).is_diagonal());
    }

    #[test]
    fn rectangular_triangular() {
        let wide = Matrix::from_rows(&[[1.0, 2.0, 3.0], [0.0, 4.0, 5.0]]).unwrap();
        assert!(wide.is_upper_triangular());
        let tall = Matrix::from_rows(&[[1.0, 0.0], [2.0, 3.0], [4.0, 5.0]]).unwrap();
        assert!(tall.is_lower_triangular());
        assert!(!tall.is_upper_triangular());
    }

    #[test]
    fn symmetric_and_skew() {
        let sym = Matrix::from_rows(&[[1.0, 7.0], [7.0, 2.0]]).unwrap();
        assert!(sym.is_symmetric());
        assert!(!sym.is_skew_symmetric());

        let skew = Matrix::from_rows(&[[0.0, 2.5], [-2.5, 0.0]]).unwrap();
        assert!(skew.is_skew_symmetric());
        assert!(!skew.is_symmetric());
        // the check works on a copy
        assert_eq!(skew.get_val(0, 1).unwrap(), 2.5);

        assert!(!Matrix::new(2, 3).is_symmetric());
    }

    #[test]
    fn invertibility() {
        assert!(Matrix::identity(3).is_invertible());
        let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
        assert!(!singular.is_invertible());
        assert!(!Matrix::new(2, 3).is_invertible());
    }
}
