//! Error types for pillscan-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pillscan_core::Error),

    /// Element index outside the disjoint set
    #[error("element index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Grid and disjoint set describe different images
    #[error("size mismatch: grid has {grid} pixels, disjoint set has {set} elements")]
    SizeMismatch { grid: usize, set: usize },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
