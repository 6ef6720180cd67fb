use std::error::Error;
use std::fmt;

/// Broad category of a [`MatrixError`].
///
/// `ShapeMismatch` is the value-error kind (bad dimensions, non-square or
/// singular input), `TypeMismatch` is raised when a scalar is passed where a
/// matrix is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ShapeMismatch,
    TypeMismatch,
    IndexOutOfBounds,
    InvalidArgument,
}

/// Errors raised by matrix operations whose preconditions are violated.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Inner dimensions disagree for matrix multiplication.
    IncompatibleDimensions {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    NotSquare {
        op: &'static str,
        rows: usize,
        cols: usize,
    },
    NotInvertible,
    /// A scalar was given where a matrix operand is required.
    TypeMismatch,
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    InvalidShape {
        rows: usize,
        cols: usize,
        len: usize,
    },
    /// The half-open range `[min, max)` contains no integer.
    EmptyRange { min: i64, max: i64 },
}

impl MatrixError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatrixError::IncompatibleDimensions { .. }
            | MatrixError::NotSquare { .. }
            | MatrixError::NotInvertible => ErrorKind::ShapeMismatch,
            MatrixError::TypeMismatch => ErrorKind::TypeMismatch,
            MatrixError::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
            MatrixError::InvalidShape { .. } | MatrixError::EmptyRange { .. } => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::IncompatibleDimensions { lhs, rhs } => write!(
                f,
                "Multiplier has incorrect dimensions for matrix multiplication: ({}, {}) x ({}, {})",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            MatrixError::NotSquare { op, rows, cols } => write!(
                f,
                "Cannot get {} of non-square matrix ({}, {})",
                op, rows, cols
            ),
            MatrixError::NotInvertible => write!(f, "Matrix is not invertible"),
            MatrixError::TypeMismatch => write!(f, "Multiplier must be a Matrix"),
            MatrixError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "index ({}, {}) out of bounds for matrix of shape ({}, {})",
                row, col, rows, cols
            ),
            MatrixError::InvalidShape { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            MatrixError::EmptyRange { min, max } => {
                write!(f, "empty range [{}, {}) for random values", min, max)
            }
        }
    }
}

impl Error for MatrixError {}
