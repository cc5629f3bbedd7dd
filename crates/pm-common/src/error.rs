//! Error types for Poisson mixture parameter bundles.

use thiserror::Error;

/// Result type alias for Poisson mixture operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Poisson mixture parameter bundles.
#[derive(Error, Debug)]
pub enum Error {
    // Construction errors (10-19)
    #[error("{field} length {actual} does not match num_cluster {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{field} must be a positive integer")]
    ZeroCount { field: &'static str },

    // Parameter errors (20-29)
    #[error("distribution parameter out of domain: {0}")]
    Domain(#[from] statrs::StatsError),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    pub fn code(&self) -> u32 {
        match self {
            Error::LengthMismatch { .. } => 10,
            Error::ZeroCount { .. } => 11,
            Error::Domain(_) => 20,
            Error::InvalidParameter(_) => 21,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }
}
