//! Dense matrix and vector value types.
//!
//! `Matrix` is an immutable row-major grid of `f64`; `Vector` wraps a
//! one-column `Matrix`. Structural and arithmetic operations are split into
//! their own modules but all surface as inherent methods on `Matrix`.
pub mod arithmetic;
pub mod interop;
pub mod matrix;
pub mod structural;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
