//! Determinants by cofactor expansion and by pivot products.
//!
//! The cofactor path is the definitional algorithm and runs in O(n!) time,
//! which is impractical past roughly 10–12 rows. `determinant_by_pivots`
//! runs in O(n³) and is what `DeterminantStrategy::Auto` falls back to for
//! larger inputs.
use crate::config::{DeterminantStrategy, EngineConfig, DEFAULT_EPSILON};
use crate::error::{LinalgError, Result};
use crate::math::Matrix;
use crate::reduction::EchelonForm;

impl Matrix {
    fn require_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(LinalgError::NonSquareMatrix {
                operation: "determinant",
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        Ok(())
    }

    /// Laplace expansion along the first row.
    pub fn determinant(&self) -> Result<f64> {
        self.require_square()?;
        Ok(cofactor_expansion(self))
    }

    /// `(-1)^swaps` times the product of the row-echelon pivots, or 0 when
    /// the matrix is rank deficient.
    pub fn determinant_by_pivots(&self) -> Result<f64> {
        self.determinant_by_pivots_within(DEFAULT_EPSILON)
    }

    fn determinant_by_pivots_within(&self, epsilon: f64) -> Result<f64> {
        self.require_square()?;
        let reduction = self.row_reduce(EchelonForm::RowEchelon, epsilon);
        if reduction.rank() < self.nrows() {
            return Ok(0.0);
        }
        Ok(reduction.signed_pivot_product())
    }

    pub fn determinant_with(&self, config: &EngineConfig) -> Result<f64> {
        self.require_square()?;
        match config.determinant {
            DeterminantStrategy::Cofactor => Ok(cofactor_expansion(self)),
            DeterminantStrategy::PivotProduct => self.determinant_by_pivots_within(config.epsilon),
            DeterminantStrategy::Auto { cofactor_limit } if self.nrows() <= cofactor_limit => {
                Ok(cofactor_expansion(self))
            }
            DeterminantStrategy::Auto { .. } => self.determinant_by_pivots_within(config.epsilon),
        }
    }
}

/// Expects a square matrix.
fn cofactor_expansion(m: &Matrix) -> f64 {
    match m.nrows() {
        1 => m[(0, 0)],
        2 => m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
        n => {
            let mut sum = 0.0;
            for col in 0..n {
                let entry = m[(0, col)];
                if entry == 0.0 {
                    continue;
                }
                let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
                let minor = m.without_row_and_column(0, col);
                sum += sign * entry * cofactor_expansion(&minor);
            }
            sum
        }
    }
}
