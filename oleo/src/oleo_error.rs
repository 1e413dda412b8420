//! Error types for the oil-paint pipeline

use thiserror::Error;

/// Errors raised while configuring or running the pipeline
#[derive(Debug, Error)]
pub enum OleoError {
    /// Rejected configuration value
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Mode filter error
    #[error(transparent)]
    Filter(#[from] oleo_filter::FilterError),

    /// Decoding, encoding or file error
    #[error(transparent)]
    Io(#[from] oleo_io::IoError),
}

impl From<oleo_core::Error> for OleoError {
    fn from(e: oleo_core::Error) -> Self {
        OleoError::Filter(e.into())
    }
}

/// Result type for pipeline operations
pub type OleoResult<T> = Result<T, OleoError>;
