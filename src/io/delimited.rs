//! CSV / TSV reader and writer for `Matrix`.
//!
//! Files have no header row; each record is one matrix row and every record
//! must have the same number of fields.
use std::path::Path;

use anyhow::{Context, Result};

use crate::math::Matrix;

/// Read a comma-separated matrix.
pub fn read_matrix_csv<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    read_matrix(path, b',')
}

/// Read a tab-separated matrix.
pub fn read_matrix_tsv<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    read_matrix(path, b'\t')
}

/// Read a matrix from a delimited text file.
pub fn read_matrix<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Matrix> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open matrix file: {}", path.display()))?;

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("Failed to read row {} of {}", row_idx + 1, path.display()))?;
        let mut row = Vec::with_capacity(record.len());
        for (col_idx, field) in record.iter().enumerate() {
            let value: f64 = field.parse().with_context(|| {
                format!(
                    "Invalid number '{}' at row {}, column {}",
                    field,
                    row_idx + 1,
                    col_idx + 1
                )
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    let matrix = Matrix::from_rows(&rows)
        .with_context(|| format!("Malformed matrix in {}", path.display()))?;
    log::info!(
        "Loaded {} matrix from {}",
        matrix.dimensions_label(),
        path.display()
    );
    Ok(matrix)
}

/// Write a matrix as delimited text, one record per row.
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &Matrix, delimiter: u8) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to create matrix file: {}", path.display()))?;

    for row in 0..matrix.nrows() {
        let record: Vec<String> = matrix.row_slice(row).iter().map(|v| v.to_string()).collect();
        writer
            .write_record(&record)
            .with_context(|| format!("Failed to write row {} of {}", row + 1, path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    log::debug!(
        "Wrote {} matrix to {}",
        matrix.dimensions_label(),
        path.display()
    );
    Ok(())
}
