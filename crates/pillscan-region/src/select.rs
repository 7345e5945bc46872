//! Component selection by size
//!
//! A component is kept when its aggregated size lies in the size range of at
//! least one selection. The selection that accepts it does not have to be
//! the one its pixels were classified against.

use crate::aggregate::{ComponentMap, check_set_size};
use crate::error::RegionResult;
use crate::unionfind::DisjointSet;
use pillscan_core::{Mask, Selection};
use std::collections::BTreeSet;

/// Roots of the components that pass the size filter
pub type KeptSet = BTreeSet<usize>;

/// Check whether any selection accepts `size`
///
/// Always `false` for an empty selection list.
pub fn size_in_range(size: u32, selections: &[Selection]) -> bool {
    selections.iter().any(|s| s.accepts_size(size))
}

/// Select the components whose size some selection accepts
pub fn select_by_size(components: &ComponentMap, selections: &[Selection]) -> KeptSet {
    let kept: KeptSet = components
        .iter()
        .filter(|(_, c)| size_in_range(c.size, selections))
        .map(|(&root, _)| root)
        .collect();

    log::debug!(
        "size filter kept {} of {} components",
        kept.len(),
        components.len()
    );
    kept
}

/// Mask containing only the white pixels of kept components
///
/// # Errors
///
/// Returns [`crate::RegionError::SizeMismatch`] if `ds` was built for a
/// different image size.
pub fn refine_mask(mask: &Mask, ds: &mut DisjointSet, kept: &KeptSet) -> RegionResult<Mask> {
    check_set_size(mask.len(), ds)?;

    let mut refined = mask.map(|_| false);
    for (p, out) in refined.data_mut().iter_mut().enumerate() {
        *out = mask.data()[p] && kept.contains(&ds.find_root(p));
    }
    Ok(refined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::ComponentAggregate;
    use pillscan_core::{Bounds, Grid, Rgb};

    fn selection(min: u32, max: u32) -> Selection {
        Selection::new("s", Rgb::WHITE, 0.1, min, max).unwrap()
    }

    fn components(sizes: &[u32]) -> ComponentMap {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                (
                    i * 10,
                    ComponentAggregate {
                        bounds: Bounds::from_point(i as u32, 0),
                        size,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_range_is_inclusive() {
        let sels = [selection(10, 20)];
        assert!(!size_in_range(9, &sels));
        assert!(size_in_range(10, &sels));
        assert!(size_in_range(20, &sels));
        assert!(!size_in_range(21, &sels));
    }

    #[test]
    fn test_any_selection_accepts() {
        let sels = [selection(1, 2), selection(50, 60)];
        let kept = select_by_size(&components(&[1, 5, 55, 61]), &sels);
        assert_eq!(kept.into_iter().collect::<Vec<_>>(), vec![0, 20]);
    }

    #[test]
    fn test_empty_selection_list_keeps_nothing() {
        assert!(select_by_size(&components(&[1, 2, 3]), &[]).is_empty());
    }

    #[test]
    fn test_refine_mask() {
        let mask: Mask =
            Grid::from_vec(5, 1, vec![true, true, false, true, false]).unwrap();
        let mut ds = crate::conncomp::label_components(&mask).unwrap();
        let keep_right: KeptSet = [ds.find(3).unwrap()].into_iter().collect();
        let refined = refine_mask(&mask, &mut ds, &keep_right).unwrap();
        assert_eq!(refined.data(), &[false, false, false, true, false]);

        let none = refine_mask(&mask, &mut ds, &KeptSet::new()).unwrap();
        assert_eq!(none.count_white(), 0);
    }
}
