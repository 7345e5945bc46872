//! Hue, saturation and brightness adjustment
//!
//! Applied to the source image before classification so that washed-out or
//! dim photographs can be pushed toward the reference colors.

use crate::{ColorError, ColorResult};
use pillscan_core::{PixelSource, RgbImage};

/// Per-pixel HSB adjustment
///
/// The default is the identity adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsbAdjustment {
    /// Degrees added to the hue, wrapped into [0, 360)
    pub hue_shift: f64,
    /// Multiplier for saturation, result clamped to [0, 1]
    pub saturation_factor: f64,
    /// Multiplier for brightness, result clamped to [0, 1]
    pub brightness_factor: f64,
}

impl Default for HsbAdjustment {
    fn default() -> Self {
        Self {
            hue_shift: 0.0,
            saturation_factor: 1.0,
            brightness_factor: 1.0,
        }
    }
}

impl HsbAdjustment {
    /// Check whether this adjustment leaves every color unchanged
    pub fn is_identity(&self) -> bool {
        self.hue_shift.rem_euclid(360.0) == 0.0
            && self.saturation_factor == 1.0
            && self.brightness_factor == 1.0
    }

    fn validate(&self) -> ColorResult<()> {
        let fields = [
            ("hue shift", self.hue_shift),
            ("saturation factor", self.saturation_factor),
            ("brightness factor", self.brightness_factor),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ColorError::InvalidParameters(format!(
                    "{} must be finite: {}",
                    name, value
                )));
            }
        }
        if self.saturation_factor < 0.0 || self.brightness_factor < 0.0 {
            return Err(ColorError::InvalidParameters(format!(
                "factors must be non-negative: saturation={}, brightness={}",
                self.saturation_factor, self.brightness_factor
            )));
        }
        Ok(())
    }
}

/// Apply `adjustment` to every pixel of `source`
///
/// The identity adjustment returns an exact copy.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] for non-finite values or
/// negative factors.
pub fn adjust_image<S: PixelSource + ?Sized>(
    source: &S,
    adjustment: &HsbAdjustment,
) -> ColorResult<RgbImage> {
    adjustment.validate()?;

    if adjustment.is_identity() {
        return Ok(RgbImage::from_source(source)?);
    }

    let image = RgbImage::from_fn(source.width(), source.height(), |x, y| {
        let mut hsb = source.color_at(x, y).to_hsb();
        hsb.h = (hsb.h + adjustment.hue_shift).rem_euclid(360.0);
        hsb.s = (hsb.s * adjustment.saturation_factor).clamp(0.0, 1.0);
        hsb.b = (hsb.b * adjustment.brightness_factor).clamp(0.0, 1.0);
        hsb.to_rgb()
    })?;
    Ok(image)
}
