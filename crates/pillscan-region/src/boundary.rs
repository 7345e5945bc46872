//! Boundary pixel extraction
//!
//! A boundary pixel is a white mask pixel with a black pixel directly to its
//! left or right. Vertical neighbors are not inspected, so the top and
//! bottom rows of a blob are only flagged where they also touch black
//! horizontally.

use pillscan_core::{Grid, Mask};

/// Per-pixel boundary flags
pub type BoundaryGrid = Grid<bool>;

/// Check whether `(x, y)` is a boundary pixel of `mask`
///
/// Returns `false` for black pixels and for coordinates outside the mask.
pub fn is_boundary_pixel(mask: &Mask, x: u32, y: u32) -> bool {
    if !mask.is_white(x, y) {
        return false;
    }
    let left_black = x > 0 && !mask.is_white(x - 1, y);
    let right_black = x + 1 < mask.width() && !mask.is_white(x + 1, y);
    left_black || right_black
}

/// Flag every boundary pixel of `mask`
pub fn set_boundary(mask: &Mask) -> BoundaryGrid {
    let width = mask.width();
    let data = mask.data();
    let mut boundary = mask.map(|_| false);
    let out = boundary.data_mut();

    for (y, row) in data.chunks_exact(width as usize).enumerate() {
        let base = y * width as usize;
        for (x, &white) in row.iter().enumerate() {
            if !white {
                continue;
            }
            let left_black = x > 0 && !row[x - 1];
            let right_black = x + 1 < row.len() && !row[x + 1];
            out[base + x] = left_black || right_black;
        }
    }

    boundary
}

#[cfg(test)]
mod tests {
    use super::*;
    use pillscan_test::mask_from_rows;

    fn render(grid: &BoundaryGrid) -> Vec<String> {
        (0..grid.height())
            .map(|y| {
                grid.row(y)
                    .iter()
                    .map(|&b| if b { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_square_edges() {
        let mask = mask_from_rows(&[".....", ".###.", ".###.", ".###.", "....."]).unwrap();
        let boundary = set_boundary(&mask);
        assert_eq!(
            render(&boundary),
            vec![".....", ".#.#.", ".#.#.", ".#.#.", "....."]
        );
    }

    #[test]
    fn test_vertical_edges_ignored() {
        // A full-width band touches black only above and below.
        let mask = mask_from_rows(&["....", "####", "...."]).unwrap();
        let boundary = set_boundary(&mask);
        assert_eq!(boundary.count_white(), 0);
        assert!(!is_boundary_pixel(&mask, 0, 1));
    }

    #[test]
    fn test_image_edge_is_not_black() {
        let mask = mask_from_rows(&["##.", "###"]).unwrap();
        assert!(!is_boundary_pixel(&mask, 0, 0));
        assert!(is_boundary_pixel(&mask, 1, 0));
        assert!(!is_boundary_pixel(&mask, 2, 0));
        assert!(!is_boundary_pixel(&mask, 2, 1));
    }

    #[test]
    fn test_predicate_matches_grid() {
        let mask = mask_from_rows(&["#.##.#", ".##..#", "######"]).unwrap();
        let boundary = set_boundary(&mask);
        for y in 0..mask.height() {
            for x in 0..mask.width() {
                assert_eq!(
                    boundary.get(x, y).copied(),
                    Some(is_boundary_pixel(&mask, x, y)),
                    "({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_single_column() {
        let mask = mask_from_rows(&["#", "#"]).unwrap();
        assert_eq!(set_boundary(&mask).count_white(), 0);
    }
}
