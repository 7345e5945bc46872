//! Full segmentation pipeline
//!
//! [`run_pipeline`] is the single entry point a viewer calls whenever the
//! image or the selection list changes. Every stage receives what it needs
//! as arguments and the run returns all intermediate results, so nothing is
//! shared between runs.

use pillscan_color::{
    ColorError, HsbAdjustment, adjust_image, binary_mask, classify_image, colorize_by_selection,
    colorize_random_seeded,
};
use pillscan_core::{ClassGrid, Mask, PixelSource, RgbImage, Selection};
use pillscan_region::{
    BoundaryGrid, ComponentLabel, ComponentMap, DisjointSet, KeptSet, RegionError,
    aggregate_components, filter_labels_by_name, generate_labels, label_components, refine_mask,
    select_by_size, set_boundary,
};
use thiserror::Error;

/// Errors from any pipeline stage
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PipelineError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pillscan_core::Error),

    /// Region processing error
    #[error("region error: {0}")]
    Region(#[from] RegionError),

    /// Color processing error
    #[error("color error: {0}")]
    Color(#[from] ColorError),
}

/// Result type for pipeline runs
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Options for a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PipelineOptions {
    /// Adjustment applied to the source before classification
    pub adjustment: HsbAdjustment,
}

/// Everything computed by one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Source after HSB adjustment
    pub adjusted: RgbImage,
    /// Per-pixel selection index
    pub classes: ClassGrid,
    /// Classified pixels as white
    pub mask: Mask,
    /// White pixels with a black horizontal neighbor
    pub boundary: BoundaryGrid,
    /// 4-connected components of the mask
    pub disjoint_set: DisjointSet,
    /// Bounds and boundary-pixel counts per component root
    pub components: ComponentMap,
    /// Roots that pass the size filter
    pub kept: KeptSet,
    /// Mask restricted to kept components
    pub refined: Mask,
    /// Rectangles for kept components above the visualization threshold
    pub labels: Vec<ComponentLabel>,
    /// Pixels painted with their selection's color
    pub colorized: RgbImage,
}

impl PipelineOutput {
    /// Mask components painted with one random color each
    pub fn colorize_random(&self, seed: u64) -> PipelineResult<RgbImage> {
        Ok(colorize_random_seeded(&self.mask, seed)?)
    }

    /// Labels for one pill name, renumbered from 1 (all labels if empty)
    pub fn labels_named(&self, name: &str) -> Vec<ComponentLabel> {
        filter_labels_by_name(&self.labels, name)
    }

    /// Number of labeled pills per selection name, in label order
    pub fn counts_by_name(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for label in &self.labels {
            match counts.iter_mut().find(|(name, _)| *name == label.name) {
                Some((_, n)) => *n += 1,
                None => counts.push((label.name.clone(), 1)),
            }
        }
        counts
    }
}

/// Run every stage over `source` with the given selections
///
/// # Errors
///
/// Returns an error if the source has a zero dimension or the adjustment
/// options are invalid. An empty selection list is not an error: nothing
/// is classified and nothing is kept.
pub fn run_pipeline<S: PixelSource + ?Sized>(
    source: &S,
    selections: &[Selection],
    options: &PipelineOptions,
) -> PipelineResult<PipelineOutput> {
    log::debug!(
        "pipeline: {}x{} image, {} selections",
        source.width(),
        source.height(),
        selections.len()
    );

    let adjusted = adjust_image(source, &options.adjustment)?;
    let classes = classify_image(&adjusted, selections)?;
    let mask = binary_mask(&classes);
    let boundary = set_boundary(&mask);
    log::debug!(
        "pipeline: {} white pixels, {} boundary pixels",
        mask.count_white(),
        boundary.count_white()
    );

    let mut disjoint_set = label_components(&mask)?;
    let components = aggregate_components(&boundary, &mut disjoint_set)?;
    let kept = select_by_size(&components, selections);
    let refined = refine_mask(&mask, &mut disjoint_set, &kept)?;
    let labels = generate_labels(&components, &kept, &classes, selections);
    let colorized = colorize_by_selection(&classes, selections);

    log::debug!(
        "pipeline: {} components, {} kept, {} labels",
        components.len(),
        kept.len(),
        labels.len()
    );

    Ok(PipelineOutput {
        adjusted,
        classes,
        mask,
        boundary,
        disjoint_set,
        components,
        kept,
        refined,
        labels,
        colorized,
    })
}
