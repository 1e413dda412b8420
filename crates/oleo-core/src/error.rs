//! Error types for oleo-core
//!
//! Provides a unified error type for grid construction, pixel access and
//! color conversion. Each variant captures enough context for diagnostics
//! without exposing the storage layout.

use thiserror::Error;

/// oleo-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Index out of bounds
    #[error("index out of bounds: ({x}, {y}) outside {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Sample buffer length does not match the declared dimensions
    #[error("dimension mismatch: {width}x{height} needs {expected} samples, got {actual}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for oleo-core operations
pub type Result<T> = std::result::Result<T, Error>;
