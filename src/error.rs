use std::error::Error;
use std::fmt;

/// Which axis an out-of-range index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Flat discriminant of [`LinalgError`], for callers that branch on the
/// failure category rather than on its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidConstruction,
    IndexOutOfRange,
    DimensionMismatch,
    NonSquareMatrix,
    SingularMatrix,
    SingularProjection,
    InvalidState,
}

/// Error returned by every fallible matrix and vector operation.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Empty or jagged grid, non-positive dimensions, bad augment index,
    /// mismatched vector heights, or an empty slice range.
    InvalidConstruction { reason: String },
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        bound: usize,
    },
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    NonSquareMatrix {
        operation: &'static str,
        rows: usize,
        cols: usize,
    },
    /// Row reduction found fewer pivots than the matrix dimension.
    SingularMatrix { dimension: usize, rank: usize },
    /// Projection onto a zero vector.
    SingularProjection { height: usize },
    InvalidState { reason: &'static str },
}

impl LinalgError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinalgError::InvalidConstruction { .. } => ErrorKind::InvalidConstruction,
            LinalgError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            LinalgError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            LinalgError::NonSquareMatrix { .. } => ErrorKind::NonSquareMatrix,
            LinalgError::SingularMatrix { .. } => ErrorKind::SingularMatrix,
            LinalgError::SingularProjection { .. } => ErrorKind::SingularProjection,
            LinalgError::InvalidState { .. } => ErrorKind::InvalidState,
        }
    }

    pub(crate) fn construction(reason: impl Into<String>) -> Self {
        LinalgError::InvalidConstruction {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinalgError::InvalidConstruction { reason } => {
                write!(f, "invalid matrix construction: {}", reason)
            }
            LinalgError::IndexOutOfRange { axis, index, bound } => write!(
                f,
                "{} index {} is out of range for {} {}s",
                axis, index, bound, axis
            ),
            LinalgError::DimensionMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "cannot {} a {}×{} matrix with a {}×{} matrix",
                operation, left.0, left.1, right.0, right.1
            ),
            LinalgError::NonSquareMatrix {
                operation,
                rows,
                cols,
            } => write!(
                f,
                "cannot compute the {} of a non-square {}×{} matrix",
                operation, rows, cols
            ),
            LinalgError::SingularMatrix { dimension, rank } => write!(
                f,
                "matrix is singular: rank {} is below dimension {}",
                rank, dimension
            ),
            LinalgError::SingularProjection { height } => write!(
                f,
                "cannot project onto the zero vector of height {}",
                height
            ),
            LinalgError::InvalidState { reason } => write!(f, "invalid state: {}", reason),
        }
    }
}

impl Error for LinalgError {}

pub type Result<T> = std::result::Result<T, LinalgError>;
