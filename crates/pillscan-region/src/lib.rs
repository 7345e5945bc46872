//! pillscan-region - Region processing for pill segmentation
//!
//! This crate provides the connectivity half of the pipeline:
//!
//! - **Disjoint sets** - Union-find over linear pixel indices
//! - **Boundary extraction** - White pixels with a black horizontal neighbor
//! - **Connected component labeling** - 4-connected white components
//! - **Aggregation** - Per-component bounds, sizes and dominant class
//! - **Size selection** - Keep-set and refined mask
//! - **Rectangles** - Numbered, named rectangles for display
//!
//! # Examples
//!
//! ```
//! use pillscan_core::{Grid, Mask};
//! use pillscan_region::{aggregate_components, label_components, set_boundary};
//!
//! // A 5x5 mask with a 3x3 white square in the middle
//! let mask: Mask = Grid::from_fn(5, 5, |x, y| (1..4).contains(&x) && (1..4).contains(&y)).unwrap();
//!
//! let mut ds = label_components(&mask).unwrap();
//! let boundary = set_boundary(&mask);
//! let components = aggregate_components(&boundary, &mut ds).unwrap();
//! assert_eq!(components.len(), 1);
//! ```

pub mod aggregate;
pub mod boundary;
pub mod conncomp;
pub mod error;
pub mod rectangle;
pub mod select;
pub mod unionfind;

// Re-export core types
pub use pillscan_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use unionfind::DisjointSet;

pub use boundary::{BoundaryGrid, is_boundary_pixel, set_boundary};

pub use conncomp::{count_components, label_components};

pub use aggregate::{
    ComponentAggregate, ComponentMap, aggregate_components, dominant_class, max_component_size,
};

pub use select::{KeptSet, refine_mask, select_by_size, size_in_range};

pub use rectangle::{
    ComponentLabel, DisplayRect, DisplayScale, UNKNOWN_NAME, VISUALIZATION_DIVISOR,
    filter_labels_by_name, generate_labels, visualization_threshold,
};
