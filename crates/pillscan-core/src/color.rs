//! Normalized colors
//!
//! Colors travel through the pipeline as normalized RGB triples. HSB is
//! provided for the brightness/saturation/hue adjustment stage.

use std::fmt;

/// Normalized RGB color
///
/// Each channel is in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Pure black
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    /// Pure white
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    /// Create a new color
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Convert to 8-bit channels, rounding to nearest
    pub fn to_u8(self) -> (u8, u8, u8) {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }

    /// Sum of absolute channel differences (L1 distance)
    #[inline]
    pub fn l1_distance(self, other: Rgb) -> f64 {
        (self.r - other.r).abs() + (self.g - other.g).abs() + (self.b - other.b).abs()
    }

    /// Check whether every channel is in [0.0, 1.0]
    pub fn is_normalized(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// Convert to HSB
    pub fn to_hsb(self) -> Hsb {
        let cmax = self.r.max(self.g).max(self.b);
        let cmin = self.r.min(self.g).min(self.b);
        let brightness = cmax;
        let saturation = if cmax > 0.0 { (cmax - cmin) / cmax } else { 0.0 };

        let hue = if saturation == 0.0 {
            0.0
        } else {
            let span = cmax - cmin;
            let rc = (cmax - self.r) / span;
            let gc = (cmax - self.g) / span;
            let bc = (cmax - self.b) / span;
            let mut h = if self.r == cmax {
                bc - gc
            } else if self.g == cmax {
                2.0 + rc - bc
            } else {
                4.0 + gc - rc
            };
            h /= 6.0;
            if h < 0.0 {
                h += 1.0;
            }
            h * 360.0
        };

        Hsb::new(hue, saturation, brightness)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.to_u8();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// HSB (hue, saturation, brightness) color
///
/// - `h`: Hue in degrees, [0.0, 360.0)
/// - `s`: Saturation in [0.0, 1.0]
/// - `b`: Brightness in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub h: f64,
    pub s: f64,
    pub b: f64,
}

impl Hsb {
    /// Create a new HSB color
    pub fn new(h: f64, s: f64, b: f64) -> Self {
        Self { h, s, b }
    }

    /// Convert to RGB
    ///
    /// Hue is wrapped into [0, 360); saturation and brightness are clamped.
    pub fn to_rgb(self) -> Rgb {
        let hue = self.h.rem_euclid(360.0) / 360.0;
        let s = self.s.clamp(0.0, 1.0);
        let v = self.b.clamp(0.0, 1.0);

        if s == 0.0 {
            return Rgb::new(v, v, v);
        }

        let h = (hue - hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match h as u32 {
            0 => Rgb::new(v, t, p),
            1 => Rgb::new(q, v, p),
            2 => Rgb::new(p, v, t),
            3 => Rgb::new(p, q, v),
            4 => Rgb::new(t, p, v),
            _ => Rgb::new(v, p, q),
        }
    }
}
