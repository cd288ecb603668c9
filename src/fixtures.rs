//! Random matrices for tests and experiments.
//!
//! Every generator owns its RNG, so a generator built with
//! [`FixtureGenerator::seeded`] reproduces the same sequence of matrices.
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{LinalgError, Result};
use crate::math::{Matrix, Vector};

pub struct FixtureGenerator<R: Rng = StdRng> {
    rng: R,
}

impl FixtureGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        log::debug!("Creating fixture generator with seed {}", seed);
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> FixtureGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Matrix of whole numbers drawn uniformly from `range`.
    pub fn integer_matrix(
        &mut self,
        rows: usize,
        cols: usize,
        range: RangeInclusive<i64>,
    ) -> Result<Matrix> {
        check_range(range.start() <= range.end(), &range)?;
        let data = (0..rows * cols)
            .map(|_| self.rng.gen_range(range.clone()) as f64)
            .collect();
        log::trace!("Generated {}×{} integer fixture in {:?}", rows, cols, range);
        Matrix::from_shape_vec((rows, cols), data)
    }

    /// Matrix of reals drawn uniformly from `range`.
    pub fn float_matrix(
        &mut self,
        rows: usize,
        cols: usize,
        range: RangeInclusive<f64>,
    ) -> Result<Matrix> {
        check_range(range.start() <= range.end(), &range)?;
        let data = (0..rows * cols)
            .map(|_| self.rng.gen_range(range.clone()))
            .collect();
        log::trace!("Generated {}×{} float fixture in {:?}", rows, cols, range);
        Matrix::from_shape_vec((rows, cols), data)
    }

    pub fn integer_vector(&mut self, height: usize, range: RangeInclusive<i64>) -> Result<Vector> {
        let column = self.integer_matrix(height, 1, range)?;
        Vector::try_from(column)
    }

    /// Strictly diagonally dominant `n`×`n` integer matrix, which is always
    /// invertible. Off-diagonal entries come from `range`; each diagonal
    /// entry is one more than its row's off-diagonal magnitude sum, with a
    /// random sign.
    pub fn invertible_matrix(&mut self, n: usize, range: RangeInclusive<i64>) -> Result<Matrix> {
        let base = self.integer_matrix(n, n, range)?;
        let mut rows = base.to_rows();
        for (i, row) in rows.iter_mut().enumerate() {
            let off_diagonal: f64 = row
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, v)| v.abs())
                .sum();
            let sign = if self.rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            row[i] = sign * (off_diagonal + 1.0);
        }
        Matrix::from_rows(&rows)
    }
}

fn check_range<T: std::fmt::Debug>(ordered: bool, range: &RangeInclusive<T>) -> Result<()> {
    if !ordered {
        return Err(LinalgError::construction(format!(
            "fixture range {:?} is empty",
            range
        )));
    }
    Ok(())
}
