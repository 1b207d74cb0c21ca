use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ndarray::Array2;

use crate::data::ExpressionMatrix;
use crate::error::{ExpressionError, Result};

fn io_error(path: &Path, source: std::io::Error) -> ExpressionError {
    ExpressionError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_error(path: &Path, source: csv::Error) -> ExpressionError {
    ExpressionError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

/// Read a numeric expression matrix.
///
/// The first line is a header and is skipped. Every following record is one row of
/// comma-separated numbers, quoted or not. Rows whose values sum to exactly zero are
/// treated as unmeasured and left out; their positions are kept on the returned matrix.
pub fn read_expression_matrix(path: &Path) -> Result<ExpressionMatrix> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let mut flat: Vec<f64> = Vec::new();
    let mut ncols: Option<usize> = None;
    let mut nrows = 0usize;
    let mut dropped_rows = Vec::new();
    let mut row = Vec::new();

    for (raw_index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let line = record.position().map_or(0, |p| p.line());

        row.clear();
        for (column, field) in record.iter().enumerate() {
            let value = field
                .parse::<f64>()
                .map_err(|_| ExpressionError::ParseField {
                    path: path.to_path_buf(),
                    line,
                    column,
                    value: field.to_string(),
                })?;
            row.push(value);
        }

        let expected = *ncols.get_or_insert(row.len());
        if row.len() != expected {
            return Err(ExpressionError::RaggedRow {
                path: path.to_path_buf(),
                line,
                expected,
                found: row.len(),
            });
        }

        if row.iter().sum::<f64>() == 0.0 {
            log::debug!("{}: dropping all-zero row at line {}", path.display(), line);
            dropped_rows.push(raw_index);
            continue;
        }

        flat.extend_from_slice(&row);
        nrows += 1;
    }

    let ncols = if nrows == 0 { 0 } else { ncols.unwrap_or(0) };
    let values = Array2::from_shape_vec((nrows, ncols), flat)?;

    log::debug!(
        "{}: loaded {} x {} matrix, {} all-zero rows dropped",
        path.display(),
        nrows,
        ncols,
        dropped_rows.len()
    );

    Ok(ExpressionMatrix::new(values, dropped_rows))
}

/// Read row identifiers from a headerless file, one per record (first field).
///
/// A blank line between identifiers is an error rather than a skipped record.
pub fn read_identifiers(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let mut identifiers = Vec::new();
    let mut previous_line = 0u64;
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let line = record.position().map_or(previous_line + 1, |p| p.line());

        // csv silently skips blank lines; a gap would shift every later identifier
        if line > previous_line + 1 {
            return Err(ExpressionError::MissingIdentifier {
                path: path.to_path_buf(),
                line: previous_line + 1,
            });
        }
        previous_line = line;

        let id = record
            .get(0)
            .ok_or_else(|| ExpressionError::MissingIdentifier {
                path: path.to_path_buf(),
                line,
            })?;
        identifiers.push(id.to_string());
    }

    log::debug!("{}: read {} identifiers", path.display(), identifiers.len());
    Ok(identifiers)
}

/// Read the group labels from the first line of an expression file.
///
/// The line is split on commas; each label loses surrounding whitespace and quotes.
pub fn read_header(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let mut line = String::new();
    let read = BufReader::new(file)
        .read_line(&mut line)
        .map_err(|e| io_error(path, e))?;

    if read == 0 {
        return Err(ExpressionError::EmptyHeader {
            path: path.to_path_buf(),
        });
    }

    let header: Vec<String> = line
        .trim_start_matches('\u{feff}')
        .trim()
        .split(',')
        .map(|label| {
            label
                .trim_matches(|c: char| c == '"' || c.is_whitespace())
                .to_string()
        })
        .collect();

    log::debug!("{}: header has {} labels", path.display(), header.len());
    Ok(header)
}
