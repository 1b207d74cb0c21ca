use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ExpressionError, Result};

/// Write identifiers one per line, replacing any existing file.
pub fn write_identifiers<S: AsRef<str>>(path: &Path, identifiers: &[S]) -> Result<()> {
    let to_error = |source: std::io::Error| ExpressionError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut out = BufWriter::new(file);
    for id in identifiers {
        writeln!(out, "{}", id.as_ref()).map_err(to_error)?;
    }
    out.flush().map_err(to_error)?;

    log::debug!("{}: wrote {} identifiers", path.display(), identifiers.len());
    Ok(())
}
