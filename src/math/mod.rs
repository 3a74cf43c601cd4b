//! Dense matrix type used throughout the crate.
//!
//! `Matrix` is a row-major `f64` grid with checked construction, extraction,
//! arithmetic and a Gauss-Jordan inverse. It carries no external numeric
//! dependency so the regression models stay easy to test.
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod ops;

pub use error::MatrixError;
pub use matrix::{row_permutation, Matrix};
