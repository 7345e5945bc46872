//! Bounds - Inclusive pixel rectangles
//!
//! Component extents are tracked as inclusive min/max coordinates and grown
//! one pixel at a time.

/// An inclusive pixel rectangle
///
/// Unlike a width/height box, both `max_x` and `max_y` are pixels inside the
/// rectangle, so a single pixel has `min_x == max_x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min_x: u32,
    pub max_x: u32,
    pub min_y: u32,
    pub max_y: u32,
}

impl Bounds {
    /// Bounds covering exactly one pixel
    pub const fn from_point(x: u32, y: u32) -> Self {
        Self {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        }
    }

    /// Bounds from two corner points, in any order
    pub fn from_corners(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self {
            min_x: x1.min(x2),
            max_x: x1.max(x2),
            min_y: y1.min(y2),
            max_y: y1.max(y2),
        }
    }

    /// Grow to include `(x, y)`
    #[inline]
    pub fn expand(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    /// Horizontal extent `max_x - min_x`
    #[inline]
    pub fn span_x(&self) -> u32 {
        self.max_x - self.min_x
    }

    /// Vertical extent `max_y - min_y`
    #[inline]
    pub fn span_y(&self) -> u32 {
        self.max_y - self.min_y
    }

    /// Clip to a `width x height` grid, or `None` if fully outside
    pub fn clip(&self, width: u32, height: u32) -> Option<Bounds> {
        if width == 0 || height == 0 || self.min_x >= width || self.min_y >= height {
            return None;
        }
        Some(Bounds {
            min_x: self.min_x,
            max_x: self.max_x.min(width - 1),
            min_y: self.min_y,
            max_y: self.max_y.min(height - 1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand() {
        let mut b = Bounds::from_point(5, 5);
        b.expand(3, 7);
        b.expand(6, 4);
        assert_eq!(b, Bounds::from_corners(3, 4, 6, 7));
        assert_eq!(b.span_x(), 3);
        assert_eq!(b.span_y(), 3);
    }

    #[test]
    fn test_clip() {
        let b = Bounds::from_corners(2, 2, 10, 10);
        assert_eq!(b.clip(5, 4), Some(Bounds::from_corners(2, 2, 4, 3)));
        assert_eq!(b.clip(2, 10), None);
    }
}
