//! redeem-linalg: dense matrix and vector algebra.
//!
//! This crate provides an immutable `Matrix` value type with structural and
//! arithmetic operations, Gaussian / Gauss-Jordan row reduction with partial
//! pivoting, determinants (cofactor expansion and pivot products), inversion
//! through an augmented identity block, and a `Vector` type for length, dot
//! product, orthogonality and projection.
//!
//! Every operation returns a freshly allocated value; inputs are never
//! mutated. Failures are reported through the flat [`LinalgError`] type.
//! Seedable random fixtures and delimited-text IO live at the edges in
//! [`fixtures`] and [`io`].
pub mod config;
pub mod determinant;
pub mod error;
pub mod fixtures;
pub mod inverse;
pub mod io;
pub mod math;
pub mod reduction;

pub use config::{DeterminantStrategy, EngineConfig, DEFAULT_EPSILON};
pub use error::{Axis, ErrorKind, LinalgError, Result};
pub use math::{Matrix, Vector};
pub use reduction::{EchelonForm, Pivot, Reduction};
