//! Reading expression inputs and writing result lists.
//!
//! ```text
//!  matrix.csv ──► read_expression_matrix ─┐
//!  rownames.csv ─► read_identifiers ──────┼─► ExpressionSet
//!  header.csv ───► read_header ───────────┘
//!
//!  accepted identifiers ─► write_identifiers ─► out.txt
//! ```

pub mod loader;
pub mod writer;

pub use loader::{read_expression_matrix, read_header, read_identifiers};
pub use writer::write_identifiers;
