use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Relative tolerance used for pivot selection and orthogonality checks when
/// no explicit configuration is supplied.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Central numeric configuration for the engine.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Relative zero tolerance. During row reduction an entry counts as zero
    /// when its magnitude is at most `epsilon * max|a_ij| * max(rows, cols)`.
    pub epsilon: f64,

    #[serde(default)]
    pub determinant: DeterminantStrategy,
}

/// How `Matrix::determinant_with` computes its result.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeterminantStrategy {
    /// Laplace expansion along the first row. O(n!).
    Cofactor,
    /// Signed product of the row-echelon pivots. O(n³).
    PivotProduct,
    /// Cofactor expansion up to `cofactor_limit` rows, pivot product above.
    Auto { cofactor_limit: usize },
}

impl Default for DeterminantStrategy {
    fn default() -> Self {
        DeterminantStrategy::Auto { cofactor_limit: 8 }
    }
}

impl FromStr for DeterminantStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cofactor" | "laplace" => Ok(DeterminantStrategy::Cofactor),
            "pivot" | "pivot_product" | "pivots" => Ok(DeterminantStrategy::PivotProduct),
            "auto" => Ok(DeterminantStrategy::default()),
            _ => Err(format!(
                "Unknown determinant strategy: {}. Expected one of `cofactor`, `pivot_product` or `auto`",
                s
            )),
        }
    }
}

impl EngineConfig {
    pub fn new(epsilon: f64, determinant: DeterminantStrategy) -> Self {
        Self {
            epsilon,
            determinant,
        }
    }

    pub fn with_epsilon(epsilon: f64) -> Self {
        Self {
            epsilon,
            ..Self::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            determinant: DeterminantStrategy::default(),
        }
    }
}
