//! pillscan Core - Basic data structures for pill segmentation
//!
//! This crate provides the fundamental data structures used throughout
//! the pillscan pipeline:
//!
//! - [`Grid`] - Row-major per-pixel storage, with the [`Mask`],
//!   [`ClassGrid`] and [`RgbImage`] aliases
//! - [`PixelSource`] - Read access to an image supplied by the caller
//! - [`Rgb`] / [`Hsb`] - Normalized colors
//! - [`Bounds`] - Inclusive pixel rectangles
//! - [`Selection`] / [`SelectionList`] - Named color targets
//!
//! # Example
//!
//! ```
//! use pillscan_core::{Grid, Mask};
//!
//! let mut mask: Mask = Grid::new(4, 3, false).unwrap();
//! mask.set(1, 2, true).unwrap();
//! assert_eq!(mask.index(1, 2), 9);
//! assert_eq!(mask.count_white(), 1);
//! ```

pub mod bounds;
pub mod color;
pub mod error;
pub mod grid;
pub mod scale;
pub mod selection;

pub use bounds::Bounds;
pub use color::{Hsb, Rgb};
pub use error::{Error, Result};
pub use grid::{ClassGrid, Grid, Mask, PixelSource, RgbImage};
pub use scale::fit_dimensions;
pub use selection::{Selection, SelectionList};
