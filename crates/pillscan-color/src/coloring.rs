//! Colorization of classified images
//!
//! Two views are produced for display:
//!
//! 1. **By selection** ([`colorize_by_selection`]): every classified pixel is
//!    painted with its selection's reference color
//!
//! 2. **Random per component** ([`colorize_random`]): connectivity is
//!    recomputed over the whole mask and each component gets its own random
//!    color, which makes touching pills easy to tell apart
//!
//! Unmatched (black) pixels stay black in both views.
//!
//! # Examples
//!
//! ```
//! use pillscan_color::colorize_random_seeded;
//! use pillscan_core::{Grid, Mask, Rgb};
//!
//! let mask: Mask = Grid::from_vec(3, 1, vec![true, false, true]).unwrap();
//! let colored = colorize_random_seeded(&mask, 7).unwrap();
//! assert_eq!(colored.data()[1], Rgb::BLACK);
//! ```

use crate::ColorResult;
use pillscan_core::{ClassGrid, Mask, Rgb, RgbImage, Selection};
use pillscan_region::label_components;
use rand::{Rng, RngExt, SeedableRng, rngs::StdRng};
use std::collections::HashMap;

/// Paint each classified pixel with its selection's color
///
/// Pixels that are unmatched, or whose class index is not in `selections`,
/// are black.
pub fn colorize_by_selection(classes: &ClassGrid, selections: &[Selection]) -> RgbImage {
    classes.map(|class| {
        class
            .and_then(|i| selections.get(i))
            .map_or(Rgb::BLACK, Selection::color)
    })
}

/// Paint each white component of `mask` with one random color
///
/// Components are labeled afresh with 4-connectivity. Colors are drawn from
/// `rng` the first time a component is met in raster order, so a seeded
/// generator gives reproducible output.
pub fn colorize_random<R: Rng + ?Sized>(mask: &Mask, rng: &mut R) -> ColorResult<RgbImage> {
    let mut ds = label_components(mask)?;
    let mut root_colors: HashMap<usize, Rgb> = HashMap::new();

    let mut colored = mask.map(|_| Rgb::BLACK);
    for (p, out) in colored.data_mut().iter_mut().enumerate() {
        if !mask.data()[p] {
            continue;
        }
        let root = ds.find(p)?;
        *out = *root_colors
            .entry(root)
            .or_insert_with(|| random_color(rng));
    }

    log::debug!("painted {} components", root_colors.len());
    Ok(colored)
}

/// [`colorize_random`] with a generator seeded from `seed`
pub fn colorize_random_seeded(mask: &Mask, seed: u64) -> ColorResult<RgbImage> {
    let mut rng = StdRng::seed_from_u64(seed);
    colorize_random(mask, &mut rng)
}

fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(rng.random::<f64>(), rng.random::<f64>(), rng.random::<f64>())
}
