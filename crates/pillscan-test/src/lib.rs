//! pillscan-test - Regression test framework for pillscan
//!
//! This crate provides a small regression harness plus synthetic fixtures.
//! Tests draw their own images (discs and rectangles of flat color on a
//! background) instead of loading files, so every expected count can be
//! worked out by hand.
//!
//! # Usage
//!
//! ```ignore
//! use pillscan_test::{RegParams, PillScene};
//!
//! let mut rp = RegParams::new("conncomp");
//! let img = PillScene::new(40, 40).disc(10, 10, 4, RED).build()?;
//! rp.compare_values(1.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use pillscan_core::{Grid, Mask, Rgb, RgbImage};

/// Flat red used by fixtures
pub const RED: Rgb = Rgb::new(0.9, 0.1, 0.1);
/// Flat blue used by fixtures
pub const BLUE: Rgb = Rgb::new(0.1, 0.2, 0.9);
/// Flat yellow used by fixtures
pub const YELLOW: Rgb = Rgb::new(0.95, 0.85, 0.1);
/// Dark tray background used by fixtures
pub const TRAY: Rgb = Rgb::new(0.05, 0.05, 0.05);

enum Shape {
    Disc { cx: i64, cy: i64, r: i64 },
    Rect { x0: u32, y0: u32, x1: u32, y1: u32 },
}

/// Builder for synthetic pill images
///
/// Shapes are painted in the order they were added.
pub struct PillScene {
    width: u32,
    height: u32,
    shapes: Vec<(Shape, Rgb)>,
}

impl PillScene {
    /// New scene on the [`TRAY`] background
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
        }
    }

    /// Add a filled disc: every pixel with `(x-cx)^2 + (y-cy)^2 <= r^2`
    pub fn disc(mut self, cx: u32, cy: u32, r: u32, color: Rgb) -> Self {
        self.shapes.push((
            Shape::Disc {
                cx: cx as i64,
                cy: cy as i64,
                r: r as i64,
            },
            color,
        ));
        self
    }

    /// Add a filled rectangle with inclusive corners
    pub fn rect(mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb) -> Self {
        self.shapes.push((Shape::Rect { x0, y0, x1, y1 }, color));
        self
    }

    /// Render the scene
    pub fn build(&self) -> TestResult<RgbImage> {
        let image = Grid::from_fn(self.width, self.height, |x, y| {
            let mut color = TRAY;
            for (shape, c) in &self.shapes {
                if shape_contains(shape, x, y) {
                    color = *c;
                }
            }
            color
        })?;
        Ok(image)
    }
}

fn shape_contains(shape: &Shape, x: u32, y: u32) -> bool {
    match *shape {
        Shape::Disc { cx, cy, r } => {
            let dx = x as i64 - cx;
            let dy = y as i64 - cy;
            dx * dx + dy * dy <= r * r
        }
        Shape::Rect { x0, y0, x1, y1 } => x >= x0 && x <= x1 && y >= y0 && y <= y1,
    }
}

/// Build a mask from text rows, `#` for white and anything else for black
pub fn mask_from_rows(rows: &[&str]) -> TestResult<Mask> {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    if rows.iter().any(|r| r.len() as u32 != width) {
        return Err(TestError::InvalidFixture(
            "mask rows have different lengths".to_string(),
        ));
    }
    Ok(Grid::from_fn(width, height, |x, y| {
        rows[y as usize].as_bytes()[x as usize] == b'#'
    })?)
}

/// Number of pixels inside a disc of radius `r`
pub fn disc_area(r: u32) -> usize {
    let r = r as i64;
    (-r..=r)
        .flat_map(|dy| (-r..=r).map(move |dx| (dx, dy)))
        .filter(|(dx, dy)| dx * dx + dy * dy <= r * r)
        .count()
}

/// Number of boundary pixels (left or right edge) of a disc of radius `r`
/// that does not touch the image border
///
/// Every row of a disc is one horizontal run; a run of length 1 contributes
/// one pixel, longer runs contribute two.
pub fn disc_boundary_size(r: u32) -> u32 {
    let r = r as i64;
    (-r..=r)
        .map(|dy| {
            let half = (0..=r).filter(|dx| dx * dx + dy * dy <= r * r).count() as i64 - 1;
            if half == 0 { 1 } else { 2 }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disc_counts() {
        assert_eq!(disc_area(1), 5);
        assert_eq!(disc_area(2), 13);
        // single-pixel top and bottom rows, two edge pixels elsewhere
        assert_eq!(disc_boundary_size(1), 4);
        assert_eq!(disc_boundary_size(5), 20);
        assert_eq!(disc_boundary_size(6), 24);
        assert_eq!(disc_boundary_size(7), 28);
    }

    #[test]
    fn test_scene_paints_disc() {
        let img = PillScene::new(7, 7).disc(3, 3, 2, RED).build().unwrap();
        let red = img.data().iter().filter(|&&c| c == RED).count();
        assert_eq!(red, disc_area(2));
        assert_eq!(img.get(0, 0), Some(&TRAY));
    }

    #[test]
    fn test_mask_rows() {
        let mask = mask_from_rows(&["#.", ".#"]).unwrap();
        assert_eq!(mask.count_white(), 2);
        assert!(mask.is_white(1, 1));
        assert!(matches!(
            mask_from_rows(&["##", "#"]),
            Err(TestError::InvalidFixture(_))
        ));
    }
}
