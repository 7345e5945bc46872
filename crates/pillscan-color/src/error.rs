//! Error types for pillscan-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pillscan_core::Error),

    /// Region processing error
    #[error("region error: {0}")]
    Region(#[from] pillscan_region::RegionError),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
