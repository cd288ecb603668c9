use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_EPSILON;
use crate::error::{LinalgError, Result};
use crate::math::matrix::Matrix;

/// Column vector: a single-column `Matrix` with vector-only operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    inner: Matrix,
}

impl Vector {
    /// Vector with the given entries, top to bottom.
    pub fn new(entries: Vec<f64>) -> Result<Self> {
        if entries.is_empty() {
            return Err(LinalgError::construction("vector must have at least one entry"));
        }
        let height = entries.len();
        Ok(Self {
            inner: Matrix::from_parts(height, 1, entries, None),
        })
    }

    pub fn from_slice(entries: &[f64]) -> Result<Self> {
        Self::new(entries.to_vec())
    }

    /// Zero vector of the given height.
    pub fn zeros(height: usize) -> Result<Self> {
        Ok(Self {
            inner: Matrix::zeros(height, 1)?,
        })
    }

    pub fn height(&self) -> usize {
        self.inner.nrows()
    }

    pub fn entry(&self, index: usize) -> Result<f64> {
        self.inner.entry(index, 0)
    }

    pub fn as_slice(&self) -> &[f64] {
        self.inner.as_slice()
    }

    /// Entries top to bottom.
    pub fn as_array(&self) -> Vec<f64> {
        self.inner.as_slice().to_vec()
    }

    pub fn as_matrix(&self) -> &Matrix {
        &self.inner
    }

    pub fn into_matrix(self) -> Matrix {
        self.inner
    }

    pub fn length_squared(&self) -> f64 {
        self.as_slice().iter().map(|v| v * v).sum()
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    fn check_height(&self, other: &Vector, operation: &'static str) -> Result<()> {
        if self.height() != other.height() {
            return Err(LinalgError::DimensionMismatch {
                operation,
                left: self.inner.dimensions(),
                right: other.inner.dimensions(),
            });
        }
        Ok(())
    }

    pub fn dot_product(&self, other: &Vector) -> Result<f64> {
        self.check_height(other, "take the dot product of")?;
        Ok(self
            .as_slice()
            .iter()
            .zip(other.as_slice().iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Dot product computed as the 1×1 product `selfᵀ × other`.
    pub fn dot_product_via_transpose(&self, other: &Vector) -> Result<f64> {
        self.check_height(other, "take the dot product of")?;
        let product = self.inner.transpose().multiply(&other.inner)?;
        Ok(product[(0, 0)])
    }

    pub fn is_orthogonal_to(&self, other: &Vector) -> Result<bool> {
        self.is_orthogonal_to_within(other, DEFAULT_EPSILON)
    }

    /// True when `|self · other| <= epsilon * |self| * |other|`. A zero vector
    /// is orthogonal to everything.
    pub fn is_orthogonal_to_within(&self, other: &Vector, epsilon: f64) -> Result<bool> {
        let dot = self.dot_product(other)?;
        Ok(dot.abs() <= epsilon * self.length() * other.length())
    }

    /// Component of this vector along `onto`.
    pub fn projection_onto(&self, onto: &Vector) -> Result<Vector> {
        self.check_height(onto, "project")?;
        let denominator = onto.dot_product(onto)?;
        if denominator == 0.0 {
            return Err(LinalgError::SingularProjection {
                height: onto.height(),
            });
        }
        let factor = self.dot_product(onto)? / denominator;
        Ok(onto.scaled_by(factor))
    }

    pub fn plus(&self, other: &Vector) -> Result<Vector> {
        self.check_height(other, "add")?;
        Ok(Vector {
            inner: self.inner.plus(&other.inner)?,
        })
    }

    pub fn minus(&self, other: &Vector) -> Result<Vector> {
        self.check_height(other, "subtract")?;
        Ok(Vector {
            inner: self.inner.minus(&other.inner)?,
        })
    }

    pub fn scaled_by(&self, scalar: f64) -> Vector {
        Vector {
            inner: self.inner.scaled_by(scalar),
        }
    }
}

impl TryFrom<Matrix> for Vector {
    type Error = LinalgError;

    fn try_from(matrix: Matrix) -> Result<Self> {
        if matrix.ncols() != 1 {
            return Err(LinalgError::construction(format!(
                "a vector must have exactly one column, got {}",
                matrix.dimensions_label()
            )));
        }
        Ok(Vector {
            inner: matrix.with_augment_index(None),
        })
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = LinalgError;

    fn try_from(entries: Vec<f64>) -> Result<Self> {
        Vector::new(entries)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(vector: Vector) -> Self {
        vector.as_array()
    }
}

impl From<Vector> for Matrix {
    fn from(vector: Vector) -> Self {
        vector.inner
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[(index, 0)]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
