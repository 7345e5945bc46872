//! Grid - Row-major per-pixel storage
//!
//! Every per-pixel structure in the pipeline (images, classification,
//! masks, boundaries) is a [`Grid`]. Pixels are addressed either by
//! coordinate or by the linear index `y * width + x`.

use crate::color::Rgb;
use crate::error::{Error, Result};

/// A width x height grid of values stored row by row
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

/// Binary mask: `true` is white (foreground), `false` is black
pub type Mask = Grid<bool>;

/// Per-pixel index into a selection slice, `None` for unmatched pixels
pub type ClassGrid = Grid<Option<usize>>;

/// Normalized RGB image
pub type RgbImage = Grid<Rgb>;

impl<T: Clone> Grid<T> {
    /// Create a grid filled with `value`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is zero.
    pub fn new(width: u32, height: u32, value: T) -> Result<Self> {
        check_dimensions(width, height)?;
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }
}

impl<T> Grid<T> {
    /// Create a grid by evaluating `f(x, y)` for every pixel in raster order
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> T) -> Result<Self> {
        check_dimensions(width, height)?;
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap existing row-major data
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are zero or `data.len()` differs
    /// from `width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        check_dimensions(width, height)?;
        let len = width as usize * height as usize;
        if data.len() != len {
            return Err(Error::InvalidParameter(format!(
                "data length {} does not match {}x{} grid",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Grid width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (`width * height`)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: grids have at least one pixel
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Linear index of `(x, y)`; the caller guarantees the coordinate is in bounds
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Coordinate of a linear index
    #[inline]
    pub fn coords(&self, index: usize) -> (u32, u32) {
        let w = self.width as usize;
        ((index % w) as u32, (index / w) as u32)
    }

    /// Check whether `(x, y)` lies inside the grid
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Value at `(x, y)`, or `None` outside the grid
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<&T> {
        if self.contains(x, y) {
            self.data.get(self.index(x, y))
        } else {
            None
        }
    }

    /// Overwrite the value at `(x, y)`
    pub fn set(&mut self, x: u32, y: u32, value: T) -> Result<()> {
        if !self.contains(x, y) {
            return Err(Error::CoordinateOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = value;
        Ok(())
    }

    /// Raw row-major data
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable raw row-major data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// One row of the grid
    pub fn row(&self, y: u32) -> &[T] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Map every value into a new grid of the same dimensions
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl Grid<bool> {
    /// Number of white pixels
    pub fn count_white(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// White test that treats out-of-bounds as black
    #[inline]
    pub fn is_white(&self, x: u32, y: u32) -> bool {
        self.get(x, y).copied().unwrap_or(false)
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    Ok(())
}

/// A width x height source of normalized colors
///
/// This is the boundary between the segmentation core and whatever decodes
/// or displays images.
pub trait PixelSource {
    /// Image width
    fn width(&self) -> u32;

    /// Image height
    fn height(&self) -> u32;

    /// Color at `(x, y)`; the caller guarantees the coordinate is in bounds
    fn color_at(&self, x: u32, y: u32) -> Rgb;
}

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        Grid::width(self)
    }

    fn height(&self) -> u32 {
        Grid::height(self)
    }

    fn color_at(&self, x: u32, y: u32) -> Rgb {
        self.data[self.index(x, y)]
    }
}

impl RgbImage {
    /// Copy any pixel source into an owned image
    pub fn from_source<S: PixelSource + ?Sized>(source: &S) -> Result<Self> {
        Self::from_fn(source.width(), source.height(), |x, y| source.color_at(x, y))
    }
}
