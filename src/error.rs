//! Error types for gdp-reconcile

use plotters::drawing::DrawingAreaErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading data or emitting charts.
///
/// Bad cells and unmatched country names are not errors; they are reported
/// through the returned series and snapshots.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open the source file
    #[error("failed to read file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source could not be read as delimited text
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The header does not name the requested key field
    #[error("'{path}' has no '{field}' column")]
    MissingField { path: PathBuf, field: String },

    /// Two rows share a key and the configuration rejects duplicates
    #[error("duplicate key '{key}' in '{path}'")]
    DuplicateKey { path: PathBuf, key: String },

    /// The configuration record is unusable
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Failed to write a chart file
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The drawing backend rejected an operation
    #[error("failed to render chart: {0}")]
    Render(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for Error
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Error::Render(err.to_string())
    }
}
