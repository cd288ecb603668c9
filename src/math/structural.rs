//! Shape-changing operations: transpose, submatrices, minors and augmentation.
use crate::error::{LinalgError, Result};
use crate::math::matrix::Matrix;

impl Matrix {
    /// Matrix whose rows are this matrix's columns. The result is unaugmented.
    pub fn transpose(&self) -> Matrix {
        let (rows, cols) = self.dimensions();
        let mut data = Vec::with_capacity(rows * cols);
        for col in 0..cols {
            for row in 0..rows {
                data.push(self[(row, col)]);
            }
        }
        Matrix::from_parts(cols, rows, data, None)
    }

    pub fn is_symmetric(&self) -> bool {
        self.is_square() && self.equals(&self.transpose())
    }

    /// Extract rows `row_start..row_end` and columns `col_start..col_end`.
    pub fn submatrix(
        &self,
        row_start: usize,
        col_start: usize,
        row_end: usize,
        col_end: usize,
    ) -> Result<Matrix> {
        if row_end < row_start {
            return Err(LinalgError::construction(format!(
                "row end {} cannot be less than row start {}",
                row_end, row_start
            )));
        }
        if col_end < col_start {
            return Err(LinalgError::construction(format!(
                "column end {} cannot be less than column start {}",
                col_end, col_start
            )));
        }
        if row_end > self.nrows() || col_end > self.ncols() {
            return Err(LinalgError::construction(format!(
                "range [{}, {}) × [{}, {}) exceeds {} matrix",
                row_start,
                row_end,
                col_start,
                col_end,
                self.dimensions_label()
            )));
        }

        let new_rows = row_end - row_start;
        let new_cols = col_end - col_start;
        if new_rows == 0 || new_cols == 0 {
            return Err(LinalgError::construction(format!(
                "submatrix would be empty ({}×{})",
                new_rows, new_cols
            )));
        }

        let mut data = Vec::with_capacity(new_rows * new_cols);
        for row in row_start..row_end {
            data.extend_from_slice(&self.row_slice(row)[col_start..col_end]);
        }
        Ok(Matrix::from_parts(new_rows, new_cols, data, None))
    }

    /// Submatrix from (`row_start`, `col_start`) to the bottom-right corner.
    pub fn submatrix_from(&self, row_start: usize, col_start: usize) -> Result<Matrix> {
        self.submatrix(row_start, col_start, self.nrows(), self.ncols())
    }

    /// The matrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        self.check_row(row)?;
        self.check_column(col)?;
        let (rows, cols) = self.dimensions();
        if rows < 2 || cols < 2 {
            return Err(LinalgError::construction(format!(
                "cannot take a minor of a {} matrix",
                self.dimensions_label()
            )));
        }

        Ok(self.without_row_and_column(row, col))
    }

    /// Minor without bounds checks. The caller guarantees `row` and `col` are
    /// in range and that both dimensions are at least 2.
    pub(crate) fn without_row_and_column(&self, row: usize, col: usize) -> Matrix {
        let (rows, cols) = self.dimensions();
        debug_assert!(row < rows && col < cols && rows >= 2 && cols >= 2);
        let mut data = Vec::with_capacity((rows - 1) * (cols - 1));
        for r in (0..rows).filter(|&r| r != row) {
            let source = self.row_slice(r);
            data.extend_from_slice(&source[..col]);
            data.extend_from_slice(&source[col + 1..]);
        }
        Matrix::from_parts(rows - 1, cols - 1, data, None)
    }

    /// Append `augmentation`'s columns after this matrix's columns. The
    /// result's augment index is this matrix's column count.
    pub fn augmented_with(&self, augmentation: &Matrix) -> Result<Matrix> {
        if self.nrows() != augmentation.nrows() {
            return Err(LinalgError::DimensionMismatch {
                operation: "augment",
                left: self.dimensions(),
                right: augmentation.dimensions(),
            });
        }

        let rows = self.nrows();
        let cols = self.ncols() + augmentation.ncols();
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            data.extend_from_slice(self.row_slice(row));
            data.extend_from_slice(augmentation.row_slice(row));
        }
        Ok(Matrix::from_parts(rows, cols, data, Some(self.ncols())))
    }

    /// The augmented block, from the augment index to the last column.
    pub fn augmentation(&self) -> Result<Matrix> {
        let idx = self.augment_index().ok_or(LinalgError::InvalidState {
            reason: "matrix is not augmented",
        })?;
        self.submatrix(0, idx, self.nrows(), self.ncols())
    }

    /// The block to the left of the augment index.
    pub fn without_augmentation(&self) -> Result<Matrix> {
        let idx = self.augment_index().ok_or(LinalgError::InvalidState {
            reason: "matrix is not augmented",
        })?;
        self.submatrix(0, 0, self.nrows(), idx)
    }
}
