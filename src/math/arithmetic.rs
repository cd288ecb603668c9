use crate::error::{LinalgError, Result};
use crate::math::matrix::Matrix;

impl Matrix {
    pub fn plus(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    pub fn minus(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    fn zip_with<F>(&self, other: &Matrix, operation: &'static str, f: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.dimensions() != other.dimensions() {
            return Err(LinalgError::DimensionMismatch {
                operation,
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }
        let data = self
            .as_slice()
            .iter()
            .zip(other.as_slice().iter())
            .map(|(a, b)| f(*a, *b))
            .collect();
        Ok(Matrix::from_parts(
            self.nrows(),
            self.ncols(),
            data,
            self.augment_index(),
        ))
    }

    pub fn scaled_by(&self, scalar: f64) -> Matrix {
        self.mapv(|v| v * scalar)
    }

    /// Matrix product `self × other`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.ncols() != other.nrows() {
            return Err(LinalgError::DimensionMismatch {
                operation: "multiply",
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }

        let (rows, inner) = self.dimensions();
        let cols = other.ncols();
        let mut data = vec![0.0; rows * cols];
        for i in 0..rows {
            let lhs = self.row_slice(i);
            let out = &mut data[i * cols..(i + 1) * cols];
            for t in 0..inner {
                let a = lhs[t];
                for (acc, b) in out.iter_mut().zip(other.row_slice(t).iter()) {
                    *acc += a * b;
                }
            }
        }
        Ok(Matrix::from_parts(rows, cols, data, None))
    }

    /// Copy of this matrix with rows `first` and `second` exchanged.
    pub fn swap_rows(&self, first: usize, second: usize) -> Result<Matrix> {
        self.check_row(first)?;
        self.check_row(second)?;
        let mut data = self.as_slice().to_vec();
        swap_rows_in(&mut data, self.ncols(), first, second);
        Ok(Matrix::from_parts(
            self.nrows(),
            self.ncols(),
            data,
            self.augment_index(),
        ))
    }

    /// Copy of this matrix with row `row` multiplied by `factor`.
    pub fn scale_row(&self, row: usize, factor: f64) -> Result<Matrix> {
        self.check_row(row)?;
        let cols = self.ncols();
        let mut data = self.as_slice().to_vec();
        for v in &mut data[row * cols..(row + 1) * cols] {
            *v *= factor;
        }
        Ok(Matrix::from_parts(
            self.nrows(),
            cols,
            data,
            self.augment_index(),
        ))
    }

    /// Copy of this matrix with `factor` × row `source` added to row `target`.
    pub fn add_row_multiple(&self, target: usize, source: usize, factor: f64) -> Result<Matrix> {
        self.check_row(target)?;
        self.check_row(source)?;
        let cols = self.ncols();
        let mut data = self.as_slice().to_vec();
        add_row_multiple_in(&mut data, cols, target, source, factor);
        Ok(Matrix::from_parts(
            self.nrows(),
            cols,
            data,
            self.augment_index(),
        ))
    }
}

/// Swap two rows of a row-major scratch buffer.
pub(crate) fn swap_rows_in(data: &mut [f64], cols: usize, first: usize, second: usize) {
    if first == second {
        return;
    }
    for k in 0..cols {
        data.swap(first * cols + k, second * cols + k);
    }
}

/// `row[target] += factor * row[source]` on a row-major scratch buffer.
pub(crate) fn add_row_multiple_in(
    data: &mut [f64],
    cols: usize,
    target: usize,
    source: usize,
    factor: f64,
) {
    for k in 0..cols {
        let v = data[source * cols + k];
        data[target * cols + k] += factor * v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_operations() {
        let m = Matrix::identity(3).unwrap();

        let m = m.swap_rows(0, 1).unwrap();
        assert_eq!(m.row_slice(0), &[0.0, 1.0, 0.0]);
        assert_eq!(m.row_slice(1), &[1.0, 0.0, 0.0]);

        let m = m.scale_row(0, 2.0).unwrap();
        assert_eq!(m.row_slice(0), &[0.0, 2.0, 0.0]);

        let m = m.add_row_multiple(0, 1, 3.0).unwrap();
        assert_eq!(m.row_slice(0), &[3.0, 2.0, 0.0]);
    }

    #[test]
    fn test_matrix_matrix_mul() {
        let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
        let b = Matrix::from_rows(&[[9.0, 8.0, 7.0], [6.0, 5.0, 4.0], [3.0, 2.0, 1.0]]).unwrap();

        let c = a.multiply(&b).unwrap();

        assert_eq!(c.row_slice(0), &[30.0, 24.0, 18.0]);
        assert_eq!(c.row_slice(1), &[84.0, 69.0, 54.0]);
        assert_eq!(c.row_slice(2), &[138.0, 114.0, 90.0]);
    }

    #[test]
    fn row_ops_keep_augmentation_marker() {
        let m = Matrix::identity(2)
            .unwrap()
            .augmented_with(&Matrix::identity(2).unwrap())
            .unwrap();
        assert_eq!(m.swap_rows(0, 1).unwrap().augment_index(), Some(2));
        assert_eq!(m.scale_row(1, 0.0).unwrap().augment_index(), Some(2));
        assert_eq!(m.scaled_by(3.0).augment_index(), Some(2));
    }
}
