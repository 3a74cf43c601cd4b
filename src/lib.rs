//! redeem-regression: dense matrices and least-squares linear regression.
//!
//! This crate provides a small row-major `Matrix` type with checked
//! arithmetic, transpose and inversion, a numeric CSV reader, a seeded
//! train/test splitter, and two linear regression estimators (normal
//! equation and batch gradient descent) sharing the `Regressor` trait.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod pipeline;
pub mod stats;

pub use error::RegressionError;
pub use math::{Matrix, MatrixError};
