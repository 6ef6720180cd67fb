use crate::math::Matrix;

/// Right-hand side of `add`, `mul` and `mat_mul`: either a scalar or a
/// borrowed matrix.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Scalar(f64),
    Matrix(&'a Matrix),
}

impl<'a> Operand<'a> {
    pub fn as_matrix(&self) -> Option<&'a Matrix> {
        match *self {
            Operand::Matrix(m) => Some(m),
            Operand::Scalar(_) => None,
        }
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<'a> From<&'a Matrix> for Operand<'a> {
    fn from(value: &'a Matrix) -> Self {
        Operand::Matrix(value)
    }
}
