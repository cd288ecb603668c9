//! Gaussian and Gauss-Jordan elimination with partial pivoting.
//!
//! For each column, left to right, the row at or below the current pivot row
//! with the largest magnitude in that column becomes the pivot (the topmost
//! one on ties). Columns whose candidates are all within the zero threshold
//! are skipped. The pivot row is swapped into place, every other row has that
//! column cleared (only rows below for row-echelon form), and in reduced form
//! the pivot row is divided by its pivot. Rows without a pivot end up at the
//! bottom and are snapped to exact zeros.
//!
//! `epsilon` is relative: the zero threshold is
//! `epsilon * max|a_ij| * max(rows, cols)`, taken over the coefficient block
//! (the columns left of the augment index, or every column when the matrix
//! is unaugmented).
//!
//! Elimination works on a private scratch buffer; the returned matrix owns a
//! fresh copy.
use crate::config::{EngineConfig, DEFAULT_EPSILON};
use crate::error::{LinalgError, Result};
use crate::math::arithmetic::{add_row_multiple_in, swap_rows_in};
use crate::math::{Matrix, Vector};

/// Target form of a reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchelonForm {
    /// Zeros below each pivot; pivots keep their values.
    RowEchelon,
    /// Pivots equal 1 and are the only nonzero entry in their column.
    ReducedRowEchelon,
}

/// A pivot chosen during elimination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot {
    pub row: usize,
    pub column: usize,
    /// Pivot value at selection time, before any normalization.
    pub value: f64,
}

/// Result of a row reduction.
#[derive(Debug, Clone)]
pub struct Reduction {
    matrix: Matrix,
    pivots: Vec<Pivot>,
    row_swaps: usize,
}

impl Reduction {
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    pub fn pivots(&self) -> &[Pivot] {
        &self.pivots
    }

    /// Number of pivots, i.e. the rank of the reduced matrix.
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    /// Number of row exchanges performed. Swapping a row with itself is not
    /// counted.
    pub fn row_swaps(&self) -> usize {
        self.row_swaps
    }

    /// Number of pivots that lie in the first `column` columns.
    pub fn pivots_before(&self, column: usize) -> usize {
        self.pivots.iter().filter(|p| p.column < column).count()
    }

    /// Product of the pivot values, negated once per row swap.
    pub fn signed_pivot_product(&self) -> f64 {
        let product: f64 = self.pivots.iter().map(|p| p.value).product();
        if self.row_swaps % 2 == 0 {
            product
        } else {
            -product
        }
    }
}

impl Matrix {
    /// Reduce to `form`, treating magnitudes at or below the zero threshold
    /// for the relative tolerance `epsilon` as zero. The augmentation marker
    /// is carried through.
    pub fn row_reduce(&self, form: EchelonForm, epsilon: f64) -> Reduction {
        let (rows, cols) = self.dimensions();
        let threshold = self.zero_threshold(epsilon);
        let mut data = self.as_slice().to_vec();
        let mut pivots = Vec::with_capacity(rows.min(cols));
        let mut row_swaps = 0;
        let mut pivot_row = 0;

        for col in 0..cols {
            if pivot_row == rows {
                break;
            }

            let (best, magnitude) = (pivot_row..rows)
                .map(|r| (r, data[r * cols + col].abs()))
                .fold((pivot_row, -1.0), |acc, cand| if cand.1 > acc.1 { cand } else { acc });
            if magnitude <= threshold {
                continue;
            }

            if best != pivot_row {
                swap_rows_in(&mut data, cols, best, pivot_row);
                row_swaps += 1;
            }

            let value = data[pivot_row * cols + col];
            let first_target = match form {
                EchelonForm::RowEchelon => pivot_row + 1,
                EchelonForm::ReducedRowEchelon => 0,
            };
            for r in (first_target..rows).filter(|&r| r != pivot_row) {
                let entry = data[r * cols + col];
                if entry != 0.0 {
                    add_row_multiple_in(&mut data, cols, r, pivot_row, -(entry / value));
                    data[r * cols + col] = 0.0;
                }
            }

            if form == EchelonForm::ReducedRowEchelon {
                for v in &mut data[pivot_row * cols..(pivot_row + 1) * cols] {
                    *v /= value;
                }
                data[pivot_row * cols + col] = 1.0;
            }

            pivots.push(Pivot {
                row: pivot_row,
                column: col,
                value,
            });
            pivot_row += 1;
        }

        for v in &mut data[pivot_row * cols..] {
            if v.abs() <= threshold {
                *v = 0.0;
            }
        }

        Reduction {
            matrix: Matrix::from_parts(rows, cols, data, self.augment_index()),
            pivots,
            row_swaps,
        }
    }

    /// Absolute cutoff below which entries count as zero during reduction.
    fn zero_threshold(&self, epsilon: f64) -> f64 {
        let coefficient_cols = match self.augment_index() {
            Some(idx) if idx > 0 => idx,
            _ => self.ncols(),
        };
        let largest = (0..self.nrows())
            .flat_map(|r| self.row_slice(r)[..coefficient_cols].iter())
            .fold(0.0_f64, |acc, v| acc.max(v.abs()));
        epsilon * largest * self.nrows().max(coefficient_cols) as f64
    }

    pub fn row_echelon(&self) -> Matrix {
        self.row_reduce(EchelonForm::RowEchelon, DEFAULT_EPSILON)
            .into_matrix()
    }

    pub fn reduced_row_echelon(&self) -> Matrix {
        self.row_reduce(EchelonForm::ReducedRowEchelon, DEFAULT_EPSILON)
            .into_matrix()
    }

    pub fn rank(&self) -> usize {
        self.row_reduce(EchelonForm::RowEchelon, DEFAULT_EPSILON)
            .rank()
    }

    /// Solve `self · x = rhs` for a square, non-singular `self`.
    pub fn solve(&self, rhs: &Vector) -> Result<Vector> {
        self.solve_with(rhs, &EngineConfig::default())
    }

    pub fn solve_with(&self, rhs: &Vector, config: &EngineConfig) -> Result<Vector> {
        if !self.is_square() {
            return Err(LinalgError::NonSquareMatrix {
                operation: "solution",
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        if rhs.height() != self.nrows() {
            return Err(LinalgError::DimensionMismatch {
                operation: "solve",
                left: self.dimensions(),
                right: rhs.as_matrix().dimensions(),
            });
        }

        let n = self.nrows();
        let reduction = self
            .augmented_with(rhs.as_matrix())?
            .row_reduce(EchelonForm::ReducedRowEchelon, config.epsilon);
        let rank = reduction.pivots_before(n);
        if rank < n {
            return Err(LinalgError::SingularMatrix { dimension: n, rank });
        }
        Vector::try_from(reduction.matrix().augmentation()?)
    }
}
