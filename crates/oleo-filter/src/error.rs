//! Error types for oleo-filter
//!
//! Every failure is reported before any output is produced; there is no
//! partial result to clean up.

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] oleo_core::Error),

    /// Invalid parameters (window size zero, negative or even)
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The input grid has no samples
    #[error("empty input: {width}x{height} grid")]
    EmptyInput {
        /// Grid width
        width: u32,
        /// Grid height
        height: u32,
    },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
