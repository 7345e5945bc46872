//! Rescaling helpers
//!
//! The presentation layer shows images at a size of its choosing. These
//! helpers compute aspect-preserving target sizes and resample an image
//! with nearest-neighbor lookup.

use crate::error::{Error, Result};
use crate::grid::RgbImage;

/// Largest size that fits `max_w x max_h` and preserves the aspect ratio
///
/// The result is never smaller than 1x1.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] if any dimension is zero.
pub fn fit_dimensions(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> Result<(u32, u32)> {
    if src_w == 0 || src_h == 0 {
        return Err(Error::InvalidDimension {
            width: src_w,
            height: src_h,
        });
    }
    if max_w == 0 || max_h == 0 {
        return Err(Error::InvalidDimension {
            width: max_w,
            height: max_h,
        });
    }

    let sx = max_w as f64 / src_w as f64;
    let sy = max_h as f64 / src_h as f64;
    let s = sx.min(sy);

    let w = ((src_w as f64 * s).round() as u32).clamp(1, max_w);
    let h = ((src_h as f64 * s).round() as u32).clamp(1, max_h);
    Ok((w, h))
}

impl RgbImage {
    /// Resample to `width x height` with nearest-neighbor lookup
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either target dimension is zero.
    pub fn resize_nearest(&self, width: u32, height: u32) -> Result<RgbImage> {
        let (src_w, src_h) = self.dimensions();
        let sx = src_w as f64 / width.max(1) as f64;
        let sy = src_h as f64 / height.max(1) as f64;

        RgbImage::from_fn(width, height, |x, y| {
            let u = (((x as f64 + 0.5) * sx) as u32).min(src_w - 1);
            let v = (((y as f64 + 0.5) * sy) as u32).min(src_h - 1);
            self.data()[self.index(u, v)]
        })
    }
}
