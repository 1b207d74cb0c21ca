use std::path::PathBuf;

/// Errors raised while loading expression data or assembling it for testing.
#[derive(Debug, thiserror::Error)]
pub enum ExpressionError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path}, line {line}, column {column}: cannot parse {value:?} as a number")]
    ParseField {
        path: PathBuf,
        line: u64,
        column: usize,
        value: String,
    },

    #[error("{path}, line {line}: expected {expected} fields, found {found}")]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{path}, line {line}: record has no identifier field")]
    MissingIdentifier { path: PathBuf, line: u64 },

    #[error("{path}: file is empty, no header line")]
    EmptyHeader { path: PathBuf },

    #[error(
        "{identifiers} identifiers do not line up with {retained} retained rows ({dropped} all-zero rows dropped)"
    )]
    IdentifierCountMismatch {
        identifiers: usize,
        retained: usize,
        dropped: usize,
    },

    #[error("header has {header} labels but the matrix has {columns} columns")]
    HeaderWidthMismatch { header: usize, columns: usize },

    #[error("no columns carry the group label {label:?}")]
    EmptyGroup { label: String },

    #[error("group column index {index} is outside a matrix with {columns} columns")]
    GroupIndexOutOfBounds { index: usize, columns: usize },

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, ExpressionError>;
