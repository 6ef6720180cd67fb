//! matrix-adt: a dense, arbitrary-size matrix abstract data type.
//!
//! The crate provides a single [`Matrix`] type over `f64` values with
//! construction, elementwise map/add/multiply, matrix multiplication,
//! transpose, cofactor-expansion determinant, adjoint and inverse, plus the
//! usual classification predicates. Every stored value is rounded to two
//! decimal places on write.
//!
//! Mutating operations (`map`, `add`, `mul`) write through to the receiver
//! and hand back an independent copy of the result; derivations (`copy`,
//! `transpose`, `adjoint`, `inverse`, `mat_mul`) always allocate a new matrix.
pub mod config;
pub mod error;
pub mod math;

pub use config::{load_random_config, RandomConfig};
pub use error::{ErrorKind, MatrixError};
pub use math::{Matrix, Operand};
