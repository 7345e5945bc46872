//! Rectangle and label generation
//!
//! Turns aggregated components into the numbered, named rectangles a viewer
//! draws over the original image. Only kept components whose size exceeds a
//! fifth of the largest component size are drawn; this visualization cutoff
//! is independent of the size filter.

use crate::aggregate::{ComponentAggregate, ComponentMap, dominant_class, max_component_size};
use crate::select::KeptSet;
use pillscan_core::{Bounds, ClassGrid, Selection};

/// Divisor applied to the largest component size for the drawing cutoff
pub const VISUALIZATION_DIVISOR: u32 = 5;

/// Name used when no pixel inside a rectangle is classified
pub const UNKNOWN_NAME: &str = "Unknown";

/// One drawable component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentLabel {
    /// 1-based number in top-to-bottom order
    pub ordinal: usize,
    /// Disjoint-set root of the component
    pub root: usize,
    /// Bounding box in image coordinates
    pub bounds: Bounds,
    /// Aggregated (boundary-pixel) size
    pub size: u32,
    /// Name of the dominant selection, or [`UNKNOWN_NAME`]
    pub name: String,
}

impl ComponentLabel {
    /// Text drawn next to the rectangle, e.g. `"3: Aspirin"`
    pub fn caption(&self) -> String {
        format!("{}: {}", self.ordinal, self.name)
    }

    /// Text shown when the rectangle is inspected
    pub fn tooltip(&self) -> String {
        format!(
            "Pill/Capsule Name: {}\nPill/Capsule Number: {}\nEstimated Size (pixel units): {}",
            self.name, self.ordinal, self.size
        )
    }

    /// Rectangle in display coordinates
    ///
    /// Width and height are the coordinate spans `max - min`, scaled.
    pub fn display_rect(&self, scale: DisplayScale) -> DisplayRect {
        DisplayRect {
            x: self.bounds.min_x as f64 * scale.x,
            y: self.bounds.min_y as f64 * scale.y,
            w: self.bounds.span_x() as f64 * scale.x,
            h: self.bounds.span_y() as f64 * scale.y,
        }
    }
}

/// Image-to-display scale factors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayScale {
    pub x: f64,
    pub y: f64,
}

impl DisplayScale {
    /// Scale that maps an `image_w x image_h` image onto `display_w x display_h`
    pub fn new(image_w: u32, image_h: u32, display_w: f64, display_h: f64) -> Self {
        Self {
            x: display_w / image_w.max(1) as f64,
            y: display_h / image_h.max(1) as f64,
        }
    }
}

impl Default for DisplayScale {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

/// Rectangle in display coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Minimum size (exclusive) a component needs to be drawn
pub fn visualization_threshold(components: &ComponentMap) -> u32 {
    max_component_size(components) / VISUALIZATION_DIVISOR
}

/// Build the rectangle list for kept components
///
/// Components are ordered by the top edge of their bounds (ties by root),
/// filtered by the keep-set and the visualization threshold, then numbered
/// from 1.
pub fn generate_labels(
    components: &ComponentMap,
    kept: &KeptSet,
    classes: &ClassGrid,
    selections: &[Selection],
) -> Vec<ComponentLabel> {
    let threshold = visualization_threshold(components);

    let mut ordered: Vec<(usize, &ComponentAggregate)> =
        components.iter().map(|(&root, c)| (root, c)).collect();
    ordered.sort_by_key(|(root, c)| (c.bounds.min_y, *root));

    let labels: Vec<ComponentLabel> = ordered
        .into_iter()
        .filter(|(root, c)| kept.contains(root) && c.size > threshold)
        .enumerate()
        .map(|(i, (root, c))| {
            let name = dominant_class(classes, &c.bounds)
                .and_then(|class| selections.get(class))
                .map_or_else(|| UNKNOWN_NAME.to_string(), |s| s.name().to_string());
            ComponentLabel {
                ordinal: i + 1,
                root,
                bounds: c.bounds,
                size: c.size,
                name,
            }
        })
        .collect();

    log::debug!(
        "generated {} labels (threshold {})",
        labels.len(),
        threshold
    );
    labels
}

/// Labels named `name`, renumbered from 1
///
/// An empty `name` keeps every label.
pub fn filter_labels_by_name(labels: &[ComponentLabel], name: &str) -> Vec<ComponentLabel> {
    labels
        .iter()
        .filter(|l| name.is_empty() || l.name == name)
        .enumerate()
        .map(|(i, l)| ComponentLabel {
            ordinal: i + 1,
            ..l.clone()
        })
        .collect()
}
