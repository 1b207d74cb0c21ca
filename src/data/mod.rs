//! In-memory representation of an expression dataset.
//!
//! A loaded matrix is paired with its row identifiers and its column group labels in an
//! [`ExpressionSet`], which is the unit the statistical tests operate on. Building the set
//! checks that the three inputs line up, so downstream code can index them positionally.

use crate::error::{ExpressionError, Result};
use ndarray::{Array2, ArrayView1};

/// Numeric expression values as read from disk, after all-zero rows were removed.
#[derive(Debug, Clone)]
pub struct ExpressionMatrix {
    /// Retained rows × sample columns
    pub values: Array2<f64>,
    /// Positions (among the raw data rows) of the rows that summed to zero
    pub dropped_rows: Vec<usize>,
}

impl ExpressionMatrix {
    pub fn new(values: Array2<f64>, dropped_rows: Vec<usize>) -> Self {
        ExpressionMatrix {
            values,
            dropped_rows,
        }
    }

    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }
}

/// Expression values with one identifier per row and one group label per column.
#[derive(Debug, Clone)]
pub struct ExpressionSet {
    identifiers: Vec<String>,
    values: Array2<f64>,
    header: Vec<String>,
}

impl ExpressionSet {
    /// Pair a matrix with its identifiers and header.
    ///
    /// Identifiers may list either the retained rows only, or every raw data row of the
    /// matrix file. In the latter case the identifiers of dropped rows are discarded so
    /// each remaining identifier stays attached to its own row.
    pub fn new(
        matrix: ExpressionMatrix,
        identifiers: Vec<String>,
        header: Vec<String>,
    ) -> Result<Self> {
        let ExpressionMatrix {
            values,
            dropped_rows,
        } = matrix;
        let retained = values.nrows();

        let identifiers = if identifiers.len() == retained {
            identifiers
        } else if !dropped_rows.is_empty() && identifiers.len() == retained + dropped_rows.len()
        {
            let mut dropped = dropped_rows.iter().peekable();
            identifiers
                .into_iter()
                .enumerate()
                .filter_map(|(i, id)| {
                    if dropped.peek() == Some(&&i) {
                        dropped.next();
                        None
                    } else {
                        Some(id)
                    }
                })
                .collect()
        } else {
            return Err(ExpressionError::IdentifierCountMismatch {
                identifiers: identifiers.len(),
                retained,
                dropped: dropped_rows.len(),
            });
        };

        if retained > 0 && header.len() != values.ncols() {
            return Err(ExpressionError::HeaderWidthMismatch {
                header: header.len(),
                columns: values.ncols(),
            });
        }

        Ok(ExpressionSet {
            identifiers,
            values,
            header,
        })
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    pub fn row(&self, index: usize) -> ArrayView1<'_, f64> {
        self.values.row(index)
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}
