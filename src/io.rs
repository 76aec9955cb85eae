//! Reading point sets and printing matrices.

use crate::error::SymNmfError;
use csv::{ReaderBuilder, Trim};
use ndarray::{Array2, ArrayView2};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Load a point set from a comma-separated file without a header row.
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Array2<f64>, SymNmfError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let points = read_points(BufReader::new(file))?;

    debug!(
        path = %path.display(),
        n = points.nrows(),
        d = points.ncols(),
        "loaded points"
    );
    Ok(points)
}

/// Parse comma-separated points, one per line.
///
/// Every line must have the same number of fields and every field must be a
/// finite real number. Blank lines are skipped.
pub fn read_points<R: Read>(reader: R) -> Result<Array2<f64>, SymNmfError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut values: Vec<f64> = Vec::new();
    let mut width = None;
    let mut n_rows = 0;

    for (line, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| SymNmfError::MalformedInput(e.to_string()))?;

        if let Some(expected) = width {
            if expected != record.len() {
                return Err(SymNmfError::MalformedInput(format!(
                    "line {}: expected {} fields, found {}",
                    line + 1,
                    expected,
                    record.len()
                )));
            }
        } else {
            width = Some(record.len());
        }

        for field in record.iter() {
            let value: f64 = field.parse().map_err(|_| {
                SymNmfError::MalformedInput(format!(
                    "line {}: '{}' is not a number",
                    line + 1,
                    field
                ))
            })?;
            if !value.is_finite() {
                return Err(SymNmfError::MalformedInput(format!(
                    "line {}: '{}' is not finite",
                    line + 1,
                    field
                )));
            }
            values.push(value);
        }
        n_rows += 1;
    }

    let Some(dim) = width else {
        return Err(SymNmfError::MalformedInput(
            "input contains no points".to_string(),
        ));
    };

    Array2::from_shape_vec((n_rows, dim), values)
        .map_err(|e| SymNmfError::MalformedInput(e.to_string()))
}

/// Render a matrix one row per line, values with 4 decimals, comma-separated.
pub fn format_matrix(matrix: &ArrayView2<f64>) -> String {
    let mut out = String::new();
    for row in matrix.outer_iter() {
        for (j, value) in row.iter().enumerate() {
            if j > 0 {
                out.push(',');
            }
            let _ = write!(out, "{:.4}", value);
        }
        out.push('\n');
    }
    out
}
