//! pillscan-color - Color processing for pill segmentation
//!
//! This crate provides the color half of the pipeline:
//!
//! - **Adjustment** ([`adjust`]): Hue shift, saturation and brightness factors
//! - **Classification** ([`classify`]): Nearest selection by L1 color distance
//! - **Masks** ([`mask`]): Classified / unmatched as white / black
//! - **Coloring** ([`coloring`]): Paint by selection color or per component
//!
//! # Examples
//!
//! ```
//! use pillscan_color::{binary_mask, classify_image};
//! use pillscan_core::{Rgb, RgbImage, Selection};
//!
//! let mut img = RgbImage::new(4, 4, Rgb::BLACK).unwrap();
//! img.set(1, 1, Rgb::new(0.9, 0.1, 0.1)).unwrap();
//!
//! let red = Selection::new("red", Rgb::new(1.0, 0.0, 0.0), 0.3, 1, 50).unwrap();
//! let classes = classify_image(&img, &[red]).unwrap();
//! let mask = binary_mask(&classes);
//! assert_eq!(mask.count_white(), 1);
//! ```

pub mod adjust;
pub mod classify;
pub mod coloring;
pub mod error;
pub mod mask;

// Re-export core types
pub use pillscan_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

pub use adjust::{HsbAdjustment, adjust_image};
pub use classify::{classify, classify_image, color_distance};
pub use coloring::{colorize_by_selection, colorize_random, colorize_random_seeded};
pub use mask::binary_mask;
