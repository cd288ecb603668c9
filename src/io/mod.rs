//! Delimited-text import and export of matrices.
pub mod delimited;

pub use delimited::{read_matrix, read_matrix_csv, read_matrix_tsv, write_matrix};
