//! Error types for pillscan-core
//!
//! Provides a unified error type for the grid, color and selection types.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// pillscan-core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Coordinate outside the grid
    #[error("coordinate ({x}, {y}) outside {width}x{height} grid")]
    CoordinateOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for pillscan-core operations
pub type Result<T> = std::result::Result<T, Error>;
