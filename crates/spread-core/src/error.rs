//! Typed errors for loading the mapping file and writing the CSV.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading the mapping file.
#[derive(Debug, Error)]
pub enum MappingError {
    /// The file could not be opened or read.
    #[error("read mapping file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A line has no identifier field (fewer than two `:`-separated fields).
    /// Only returned in strict mode; otherwise such lines are skipped.
    #[error("malformed mapping line {line_no}: {line:?} (expected `ordinal:identifier[:name]`)")]
    MalformedLine { line_no: usize, line: String },
}

/// Failure while writing the resolution CSV.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("write csv {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
