//! Connected component labeling
//!
//! White mask pixels are merged with their 4-connected white neighbors in a
//! [`DisjointSet`] sized to the whole image. Black pixels stay singletons.

use crate::error::RegionResult;
use crate::unionfind::DisjointSet;
use pillscan_core::Mask;

/// Neighbor offsets visited for each white pixel: right, below, left, above
const NEIGHBORS: [(i64, i64); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Label the 4-connected white components of `mask`
///
/// Returns a fresh disjoint set over `width * height` pixel indices in
/// which two white pixels share a root iff a 4-connected white path joins
/// them.
pub fn label_components(mask: &Mask) -> RegionResult<DisjointSet> {
    let mut ds = DisjointSet::new(mask.len())?;
    let width = mask.width() as i64;
    let height = mask.height() as i64;

    for y in 0..height {
        for x in 0..width {
            if !mask.is_white(x as u32, y as u32) {
                continue;
            }
            let p = (y * width + x) as usize;

            for (dx, dy) in NEIGHBORS {
                let nx = x + dx;
                let ny = y + dy;
                if nx < 0 || nx >= width || ny < 0 || ny >= height {
                    continue;
                }
                if mask.is_white(nx as u32, ny as u32) {
                    ds.union_roots(p, (ny * width + nx) as usize);
                }
            }
        }
    }

    log::trace!(
        "labeled {}x{} mask: {} sets",
        mask.width(),
        mask.height(),
        ds.components()
    );
    Ok(ds)
}

/// Count the white components of `mask`
pub fn count_components(mask: &Mask) -> RegionResult<usize> {
    let black = mask.len() - mask.count_white();
    Ok(label_components(mask)?.components() - black)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pillscan_test::mask_from_rows;

    #[test]
    fn test_single_square() {
        let mask = mask_from_rows(&[".....", ".###.", ".###.", ".###.", "....."]).unwrap();
        let mut ds = label_components(&mask).unwrap();
        assert_eq!(count_components(&mask).unwrap(), 1);
        let root = ds.find(mask.index(1, 1)).unwrap();
        for y in 1..4 {
            for x in 1..4 {
                assert_eq!(ds.find(mask.index(x, y)).unwrap(), root);
            }
        }
        assert_eq!(ds.component_size(root).unwrap(), 9);
    }

    #[test]
    fn test_separated_by_black_column() {
        let mask = mask_from_rows(&["##.##", "##.##"]).unwrap();
        let mut ds = label_components(&mask).unwrap();
        assert!(!ds.connected(0, 3).unwrap());
        assert!(ds.connected(0, 6).unwrap());
        assert_eq!(count_components(&mask).unwrap(), 2);
    }

    #[test]
    fn test_separated_by_black_row() {
        let mask = mask_from_rows(&["###", "...", "###"]).unwrap();
        let mut ds = label_components(&mask).unwrap();
        assert!(!ds.connected(0, 6).unwrap());
        assert_eq!(count_components(&mask).unwrap(), 2);
    }

    #[test]
    fn test_no_diagonal_connectivity() {
        let mask = mask_from_rows(&["#.", ".#"]).unwrap();
        let mut ds = label_components(&mask).unwrap();
        assert!(!ds.connected(0, 3).unwrap());
        assert_eq!(count_components(&mask).unwrap(), 2);
    }

    #[test]
    fn test_black_pixels_stay_singletons() {
        let mask = mask_from_rows(&["#..", "##."]).unwrap();
        let mut ds = label_components(&mask).unwrap();
        assert_eq!(ds.components(), 4);
        assert_eq!(ds.component_size(1).unwrap(), 1);
        assert_eq!(ds.component_size(2).unwrap(), 1);
        assert_eq!(ds.component_size(0).unwrap(), 3);
    }

    #[test]
    fn test_empty_mask() {
        let mask = mask_from_rows(&["...", "..."]).unwrap();
        assert_eq!(count_components(&mask).unwrap(), 0);
    }

    #[test]
    fn test_u_shape_merges() {
        let mask = mask_from_rows(&["#.#", "#.#", "###"]).unwrap();
        let mut ds = label_components(&mask).unwrap();
        assert!(ds.connected(0, 2).unwrap());
        assert_eq!(count_components(&mask).unwrap(), 1);
    }
}
