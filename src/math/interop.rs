//! Conversions between `Matrix` and `ndarray::Array2<f64>`.
use ndarray::Array2;

use crate::error::{LinalgError, Result};
use crate::math::matrix::Matrix;

impl From<&Matrix> for Array2<f64> {
    fn from(matrix: &Matrix) -> Self {
        Array2::from_shape_fn(matrix.dimensions(), |(r, c)| matrix[(r, c)])
    }
}

impl TryFrom<&Array2<f64>> for Matrix {
    type Error = LinalgError;

    fn try_from(array: &Array2<f64>) -> Result<Self> {
        // `iter` walks in logical row-major order regardless of memory layout.
        Matrix::from_shape_vec((array.nrows(), array.ncols()), array.iter().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn converts_both_ways() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let m = Matrix::try_from(&a).unwrap();
        assert_eq!(m.dimensions(), (2, 3));
        assert_eq!(m[(1, 0)], 4.0);

        let back: Array2<f64> = (&m).into();
        assert_eq!(back, a);
    }

    #[test]
    fn transposed_view_keeps_logical_order() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let t = a.t().to_owned();
        let m = Matrix::try_from(&t).unwrap();
        assert_eq!(m.row_slice(0), &[1.0, 3.0]);
    }

    #[test]
    fn empty_array_is_rejected() {
        let a = Array2::<f64>::zeros((0, 3));
        assert!(Matrix::try_from(&a).is_err());
    }
}
