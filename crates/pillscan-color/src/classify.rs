//! Nearest-selection color classification
//!
//! Each pixel is assigned to the selection whose reference color is closest
//! in L1 distance, provided that distance is within that selection's own
//! threshold. Absence of a match is a normal outcome, not an error.

use pillscan_core::{ClassGrid, Grid, PixelSource, Rgb, Selection};

/// L1 distance between two normalized colors
///
/// `|r1 - r2| + |g1 - g2| + |b1 - b2|`, in the range [0.0, 3.0].
#[inline]
pub fn color_distance(c1: Rgb, c2: Rgb) -> f64 {
    c1.l1_distance(c2)
}

/// Index of the selection matching `color`, or `None`
///
/// The nearest selection is found first; ties go to the earliest one in the
/// list. The match is then accepted only if its distance is within that
/// selection's threshold. A farther selection with a looser threshold is
/// never considered.
pub fn classify(color: Rgb, selections: &[Selection]) -> Option<usize> {
    let mut nearest: Option<(usize, f64)> = None;
    for (i, selection) in selections.iter().enumerate() {
        let d = color_distance(color, selection.color());
        if nearest.is_none_or(|(_, best)| d < best) {
            nearest = Some((i, d));
        }
    }

    nearest
        .filter(|&(i, d)| d <= selections[i].color_threshold())
        .map(|(i, _)| i)
}

/// Classify every pixel of `source`
///
/// # Errors
///
/// Returns an error only if the source has a zero dimension.
pub fn classify_image<S: PixelSource + ?Sized>(
    source: &S,
    selections: &[Selection],
) -> pillscan_core::Result<ClassGrid> {
    let classes = Grid::from_fn(source.width(), source.height(), |x, y| {
        classify(source.color_at(x, y), selections)
    })?;

    log::debug!(
        "classified {}x{} pixels against {} selections",
        classes.width(),
        classes.height(),
        selections.len()
    );
    Ok(classes)
}
