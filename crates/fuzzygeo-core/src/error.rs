// crates/fuzzygeo-core/src/error.rs
use thiserror::Error;

/// Errors produced while building a gazetteer index, loading gazetteer
/// files, or validating a query.
///
/// "No match" is never an error: an address that resolves to nothing (or a
/// country filter that matches no record) yields an empty
/// [`MatchResult`](crate::MatchResult).
#[derive(Debug, Error)]
pub enum GeoError {
    /// A gazetteer row is missing a required field or carries a value that
    /// cannot be indexed. Fatal to index construction.
    #[error("invalid record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// The similarity threshold is not a finite number in `[0, 1]`.
    #[error("invalid threshold {0}: expected a value in [0, 1]")]
    InvalidThreshold(f64),

    /// The index configuration cannot be turned into a working index.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unsupported gazetteer format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GeoError {
    pub(crate) fn invalid_record(index: usize, reason: impl Into<String>) -> Self {
        GeoError::InvalidRecord {
            index,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
