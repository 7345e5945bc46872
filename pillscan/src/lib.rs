//! pillscan - Color-based pill and capsule segmentation
//!
//! Locates roughly circular objects in an image by color similarity,
//! groups matching pixels into connected blobs, measures and names each
//! blob, and keeps the blobs whose size falls in an expected range.
//!
//! # Overview
//!
//! - Color classification against an ordered list of named selections
//! - Binary masks and left/right boundary pixels
//! - Union-find connected component labeling (4-connectivity)
//! - Per-component bounds, sizes, size filtering and rectangle labels
//! - Colorized views by selection or by component
//!
//! # Example
//!
//! ```
//! use pillscan::{PipelineOptions, Rgb, RgbImage, Selection, run_pipeline};
//!
//! let mut img = RgbImage::new(8, 8, Rgb::BLACK).unwrap();
//! for y in 2..5 {
//!     for x in 2..5 {
//!         img.set(x, y, Rgb::new(1.0, 0.0, 0.0)).unwrap();
//!     }
//! }
//!
//! let red = Selection::new("Red", Rgb::new(1.0, 0.0, 0.0), 0.2, 1, 100).unwrap();
//! let out = run_pipeline(&img, &[red], &PipelineOptions::default()).unwrap();
//! assert_eq!(out.labels.len(), 1);
//! assert_eq!(out.labels[0].caption(), "1: Red");
//! ```

pub mod pipeline;

// Re-export core types (primary data structures used everywhere)
pub use pillscan_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pillscan_color as color;
pub use pillscan_region as region;

pub use pipeline::{PipelineError, PipelineOptions, PipelineOutput, PipelineResult, run_pipeline};
