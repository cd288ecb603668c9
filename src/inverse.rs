use crate::config::EngineConfig;
use crate::error::{LinalgError, Result};
use crate::math::Matrix;
use crate::reduction::EchelonForm;

impl Matrix {
    /// Inverse through Gauss-Jordan reduction of `[self | I]`.
    pub fn inverse(&self) -> Result<Matrix> {
        self.inverse_with(&EngineConfig::default())
    }

    pub fn inverse_with(&self, config: &EngineConfig) -> Result<Matrix> {
        if !self.is_square() {
            return Err(LinalgError::NonSquareMatrix {
                operation: "inverse",
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }

        let n = self.nrows();
        let reduction = self
            .augmented_with(&Matrix::identity(n)?)?
            .row_reduce(EchelonForm::ReducedRowEchelon, config.epsilon);

        // Pivots that land in the identity block do not count towards rank.
        let rank = reduction.pivots_before(n);
        if rank < n {
            return Err(LinalgError::SingularMatrix { dimension: n, rank });
        }
        reduction.matrix().augmentation()
    }
}
