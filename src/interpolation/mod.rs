//! Lagrange interpolation over the field
//!
//! Given values `y_i` at known points `x_i`, the value at `wanted` is
//! `Σ c_i * y_i`. The coefficients depend only on the points, so they are
//! solved once and expanded into multiplication tables that every block
//! evaluation reuses.

mod coefficients;
mod matrix;

pub use matrix::{MulMatrix, MulRow};
