//! Per-component aggregation
//!
//! Bounding boxes and sizes are gathered from boundary pixels only, keyed by
//! the disjoint-set root of each pixel. A component's `size` is therefore
//! the number of its boundary pixels, not its area.

use crate::boundary::BoundaryGrid;
use crate::error::{RegionError, RegionResult};
use crate::unionfind::DisjointSet;
use pillscan_core::{Bounds, ClassGrid};
use std::collections::BTreeMap;

/// Extent and boundary-pixel count of one component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentAggregate {
    /// Bounding box of the component's boundary pixels
    pub bounds: Bounds,
    /// Number of boundary pixels
    pub size: u32,
}

/// Aggregates keyed by disjoint-set root, in ascending root order
pub type ComponentMap = BTreeMap<usize, ComponentAggregate>;

/// Aggregate every boundary pixel into its component
///
/// # Errors
///
/// Returns [`RegionError::SizeMismatch`] if the disjoint set was not built
/// for an image of the boundary grid's size.
pub fn aggregate_components(
    boundary: &BoundaryGrid,
    ds: &mut DisjointSet,
) -> RegionResult<ComponentMap> {
    check_set_size(boundary.len(), ds)?;

    let mut components = ComponentMap::new();
    for (p, _) in boundary.data().iter().enumerate().filter(|(_, b)| **b) {
        let (x, y) = boundary.coords(p);
        let root = ds.find_root(p);
        components
            .entry(root)
            .and_modify(|c| {
                c.bounds.expand(x, y);
                c.size += 1;
            })
            .or_insert(ComponentAggregate {
                bounds: Bounds::from_point(x, y),
                size: 1,
            });
    }

    log::trace!("aggregated {} components", components.len());
    Ok(components)
}

/// Largest aggregated size, or 0 when there are no components
pub fn max_component_size(components: &ComponentMap) -> u32 {
    components.values().map(|c| c.size).max().unwrap_or(0)
}

/// Most frequent classification inside `bounds`
///
/// Every pixel of the box is scanned, top to bottom and left to right. On a
/// tie the class that appeared first in the scan wins. Returns `None` if no
/// pixel inside the box is classified.
pub fn dominant_class(classes: &ClassGrid, bounds: &Bounds) -> Option<usize> {
    let clipped = bounds.clip(classes.width(), classes.height())?;

    // (class, count) in order of first appearance
    let mut tally: Vec<(usize, u32)> = Vec::new();
    for y in clipped.min_y..=clipped.max_y {
        let row = classes.row(y);
        for class in row[clipped.min_x as usize..=clipped.max_x as usize]
            .iter()
            .flatten()
        {
            match tally.iter_mut().find(|(c, _)| c == class) {
                Some((_, n)) => *n += 1,
                None => tally.push((*class, 1)),
            }
        }
    }

    let mut best: Option<(usize, u32)> = None;
    for &(class, count) in &tally {
        if best.is_none_or(|(_, n)| count > n) {
            best = Some((class, count));
        }
    }
    best.map(|(class, _)| class)
}

pub(crate) fn check_set_size(grid_len: usize, ds: &DisjointSet) -> RegionResult<()> {
    if grid_len != ds.len() {
        return Err(RegionError::SizeMismatch {
            grid: grid_len,
            set: ds.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pillscan_test::mask_from_rows;
    use crate::boundary::set_boundary;
    use crate::conncomp::label_components;
    use pillscan_core::{Grid, Mask};

    fn aggregate(mask: &Mask) -> (DisjointSet, ComponentMap) {
        let mut ds = label_components(mask).unwrap();
        let boundary = set_boundary(mask);
        let components = aggregate_components(&boundary, &mut ds).unwrap();
        (ds, components)
    }

    #[test]
    fn test_square_counts_boundary_only() {
        let mask = mask_from_rows(&[".....", ".###.", ".###.", ".###.", "....."]).unwrap();
        let (mut ds, components) = aggregate(&mask);
        assert_eq!(components.len(), 1);
        let root = ds.find(mask.index(2, 2)).unwrap();
        let c = components[&root];
        // left and right columns of the square: 6 pixels, not 9
        assert_eq!(c.size, 6);
        assert_eq!(c.bounds, Bounds::from_corners(1, 1, 3, 3));
    }

    #[test]
    fn test_two_components() {
        let mask = mask_from_rows(&["##..#", "##..#", "....."]).unwrap();
        let (_, components) = aggregate(&mask);
        assert_eq!(components.len(), 2);
        let sizes: Vec<u32> = components.values().map(|c| c.size).collect();
        // root order: left block first
        assert_eq!(sizes, vec![2, 2]);
        assert_eq!(max_component_size(&components), 2);
        let bounds: Vec<Bounds> = components.values().map(|c| c.bounds).collect();
        assert_eq!(bounds[0], Bounds::from_corners(1, 0, 1, 1));
        assert_eq!(bounds[1], Bounds::from_corners(4, 0, 4, 1));
    }

    #[test]
    fn test_component_without_boundary_is_absent() {
        let mask = mask_from_rows(&["###", "###"]).unwrap();
        let (_, components) = aggregate(&mask);
        assert!(components.is_empty());
        assert_eq!(max_component_size(&components), 0);
    }

    #[test]
    fn test_size_mismatch() {
        let mask = mask_from_rows(&["#.#"]).unwrap();
        let boundary = set_boundary(&mask);
        let mut ds = DisjointSet::new(4).unwrap();
        assert_eq!(
            aggregate_components(&boundary, &mut ds),
            Err(RegionError::SizeMismatch { grid: 3, set: 4 })
        );
    }

    #[test]
    fn test_dominant_class() {
        let classes: ClassGrid =
            Grid::from_vec(3, 2, vec![None, Some(1), Some(0), Some(0), Some(1), None]).unwrap();
        let all = Bounds::from_corners(0, 0, 2, 1);
        // 2 vs 2: class 1 appears first in the scan
        assert_eq!(dominant_class(&classes, &all), Some(1));
        assert_eq!(
            dominant_class(&classes, &Bounds::from_corners(0, 1, 2, 1)),
            Some(0)
        );
        assert_eq!(dominant_class(&classes, &Bounds::from_point(0, 0)), None);
        assert_eq!(dominant_class(&classes, &Bounds::from_point(5, 5)), None);
    }

    #[test]
    fn test_dominant_class_majority() {
        let mut classes: ClassGrid =
            Grid::from_vec(4, 1, vec![Some(2), Some(0), Some(0), Some(2)]).unwrap();
        classes.set(3, 0, Some(0)).unwrap();
        assert_eq!(
            dominant_class(&classes, &Bounds::from_corners(0, 0, 3, 0)),
            Some(0)
        );
    }
}
