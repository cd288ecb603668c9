use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::{Axis, LinalgError, Result};
use crate::math::vector::Vector;

/// Immutable rectangular grid of real numbers.
///
/// Entries are stored row-major in one buffer. A matrix always has at least
/// one row and one column. The optional augment index marks the column where
/// an appended block (for example an identity block during inversion) begins.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "MatrixRepr", into = "MatrixRepr")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
    augment_index: Option<usize>,
}

impl Matrix {
    /// Assemble a matrix from parts the caller has already validated.
    pub(crate) fn from_parts(
        rows: usize,
        cols: usize,
        data: Vec<f64>,
        augment_index: Option<usize>,
    ) -> Self {
        debug_assert!(rows >= 1 && cols >= 1);
        debug_assert_eq!(data.len(), rows * cols);
        debug_assert!(augment_index.map_or(true, |idx| idx <= cols));
        Self {
            data,
            rows,
            cols,
            augment_index,
        }
    }

    /// All-zero matrix with the given dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::check_dimensions(rows, cols)?;
        Ok(Self::from_parts(rows, cols, vec![0.0; rows * cols], None))
    }

    /// All-zero matrix whose augmented block starts at `augment_index`.
    pub fn zeros_augmented(rows: usize, cols: usize, augment_index: usize) -> Result<Self> {
        Self::check_dimensions(rows, cols)?;
        if augment_index > cols {
            return Err(LinalgError::construction(format!(
                "augment index {} exceeds column count {}",
                augment_index, cols
            )));
        }
        Ok(Self::from_parts(
            rows,
            cols,
            vec![0.0; rows * cols],
            Some(augment_index),
        ))
    }

    /// Build a matrix from a row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        Self::check_dimensions(rows, cols)?;
        if data.len() != rows * cols {
            return Err(LinalgError::construction(format!(
                "invalid shape ({}, {}) for buffer of length {}",
                rows,
                cols,
                data.len()
            )));
        }
        Ok(Self::from_parts(rows, cols, data, None))
    }

    /// Build a matrix from a grid of rows, rejecting empty or jagged input.
    pub fn from_rows<R: AsRef<[f64]>>(grid: &[R]) -> Result<Self> {
        let first = grid
            .first()
            .ok_or_else(|| LinalgError::construction("matrix cannot be empty"))?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(LinalgError::construction("matrix rows cannot be empty"));
        }

        let mut data = Vec::with_capacity(grid.len() * cols);
        for (idx, row) in grid.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(LinalgError::construction(format!(
                    "row {} has {} entries, expected {}",
                    idx,
                    row.len(),
                    cols
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self::from_parts(grid.len(), cols, data, None))
    }

    /// Compose a matrix whose columns are the given vectors, left to right.
    pub fn from_vectors(vectors: &[Vector]) -> Result<Self> {
        let first = vectors
            .first()
            .ok_or_else(|| LinalgError::construction("at least one vector is required"))?;
        let rows = first.height();
        if let Some(bad) = vectors.iter().position(|v| v.height() != rows) {
            return Err(LinalgError::construction(format!(
                "all vectors must have the same height: vector {} has height {}, expected {}",
                bad,
                vectors[bad].height(),
                rows
            )));
        }

        let cols = vectors.len();
        let mut data = vec![0.0; rows * cols];
        for (c, vector) in vectors.iter().enumerate() {
            for (r, value) in vector.as_slice().iter().enumerate() {
                data[r * cols + c] = *value;
            }
        }
        Ok(Self::from_parts(rows, cols, data, None))
    }

    /// Independent copy of `other`, augmentation marker included.
    pub fn copy_of(other: &Matrix) -> Self {
        other.clone()
    }

    /// `n`×`n` matrix with ones on the main diagonal.
    pub fn identity(n: usize) -> Result<Self> {
        Self::check_dimensions(n, n)?;
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Ok(Self::from_parts(n, n, data, None))
    }

    /// Square matrix with `entries` on the main diagonal, top-left first.
    pub fn diagonal(entries: &[f64]) -> Result<Self> {
        let n = entries.len();
        Self::check_dimensions(n, n)?;
        let mut data = vec![0.0; n * n];
        for (i, value) in entries.iter().enumerate() {
            data[i * n + i] = *value;
        }
        Ok(Self::from_parts(n, n, data, None))
    }

    pub fn diagonal_from_vector(vector: &Vector) -> Result<Self> {
        Self::diagonal(vector.as_slice())
    }

    fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
        if rows < 1 || cols < 1 {
            return Err(LinalgError::construction(format!(
                "matrix must have positive, nonzero dimensions, got {}×{}",
                rows, cols
            )));
        }
        Ok(())
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Dimensions written as `rows×cols`.
    pub fn dimensions_label(&self) -> String {
        format!("{}×{}", self.rows, self.cols)
    }

    pub fn is_augmented(&self) -> bool {
        self.augment_index.is_some()
    }

    pub fn augment_index(&self) -> Option<usize> {
        self.augment_index
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub(crate) fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows {
            return Err(LinalgError::IndexOutOfRange {
                axis: Axis::Row,
                index: row,
                bound: self.rows,
            });
        }
        Ok(())
    }

    pub(crate) fn check_column(&self, col: usize) -> Result<()> {
        if col >= self.cols {
            return Err(LinalgError::IndexOutOfRange {
                axis: Axis::Column,
                index: col,
                bound: self.cols,
            });
        }
        Ok(())
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn entry(&self, row: usize, col: usize) -> Result<f64> {
        self.check_row(row)?;
        self.check_column(col)?;
        Ok(self.data[self.offset(row, col)])
    }

    pub fn row(&self, row: usize) -> Result<Vec<f64>> {
        self.check_row(row)?;
        Ok(self.row_slice(row).to_vec())
    }

    pub fn column(&self, col: usize) -> Result<Vec<f64>> {
        self.check_column(col)?;
        Ok((0..self.rows).map(|r| self.data[self.offset(r, col)]).collect())
    }

    pub fn column_vector(&self, col: usize) -> Result<Vector> {
        Vector::new(self.column(col)?)
    }

    /// Borrow a row. Panics if `row` is out of range.
    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Row-major view of every entry.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(|row| row.to_vec()).collect()
    }

    /// Apply `f` to every entry. The augmentation marker is kept.
    pub fn mapv<F>(&self, f: F) -> Matrix
    where
        F: FnMut(&f64) -> f64,
    {
        Matrix::from_parts(
            self.rows,
            self.cols,
            self.data.iter().map(f).collect(),
            self.augment_index,
        )
    }

    pub(crate) fn with_augment_index(mut self, augment_index: Option<usize>) -> Matrix {
        debug_assert!(augment_index.map_or(true, |idx| idx <= self.cols));
        self.augment_index = augment_index;
        self
    }

    /// Exact comparison of dimensions and entries.
    pub fn equals(&self, other: &Matrix) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }

    /// Like [`Matrix::equals`] but entries may differ by up to `epsilon`.
    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index ({}, {}) out of bounds for {}",
            index.0,
            index.1,
            self.dimensions_label()
        );
        &self.data[self.offset(index.0, index.1)]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, value) in self.row_slice(row).iter().enumerate() {
                if self.augment_index == Some(col) {
                    write!(f, "|")?;
                } else if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}

/// Serialized form: nested rows plus the optional augmentation marker.
#[derive(Serialize, Deserialize)]
struct MatrixRepr {
    rows: Vec<Vec<f64>>,
    #[serde(default)]
    augment_index: Option<usize>,
}

impl TryFrom<MatrixRepr> for Matrix {
    type Error = LinalgError;

    fn try_from(repr: MatrixRepr) -> Result<Self> {
        let matrix = Matrix::from_rows(&repr.rows)?;
        match repr.augment_index {
            Some(idx) if idx > matrix.cols => Err(LinalgError::construction(format!(
                "augment index {} exceeds column count {}",
                idx, matrix.cols
            ))),
            idx => Ok(matrix.with_augment_index(idx)),
        }
    }
}

impl From<Matrix> for MatrixRepr {
    fn from(matrix: Matrix) -> Self {
        MatrixRepr {
            rows: matrix.to_rows(),
            augment_index: matrix.augment_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn display_marks_augmentation_boundary() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])
            .unwrap()
            .with_augment_index(Some(1));
        assert_eq!(m.to_string(), "1|2\n3|4");

        let plain = Matrix::from_rows(&[[1.5, -2.0, 3.0]]).unwrap();
        assert_eq!(plain.to_string(), "1.5 -2 3");
    }

    #[test]
    fn display_with_boundary_at_first_column() {
        let m = Matrix::zeros_augmented(1, 2, 0).unwrap();
        assert_eq!(m.to_string(), "|0 0");
    }

    #[test]
    fn augment_index_past_columns_is_rejected() {
        let err = Matrix::zeros_augmented(2, 2, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConstruction);
        assert!(Matrix::zeros_augmented(2, 2, 2).is_ok());
    }

    #[test]
    fn equality_ignores_augmentation_marker() {
        let a = Matrix::identity(2).unwrap();
        let b = a.clone().with_augment_index(Some(1));
        assert_eq!(a, b);
        assert!(b.is_augmented());
    }
}
