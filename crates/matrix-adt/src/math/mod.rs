//! The `Matrix` type and its operation set.
//!
//! `matrix` holds the storage and accessors; the remaining modules add
//! `impl Matrix` blocks grouped by concern (elementwise ops, products,
//! predicates, cofactor expansion, factories and formatting).
pub mod matrix;
pub mod operand;

mod classify;
mod determinant;
mod elementwise;
mod factory;
mod format;
mod product;
pub(crate) mod rounding;

pub use matrix::Matrix;
pub use operand::Operand;
