//! Selection, SelectionList - Named color targets
//!
//! A [`Selection`] describes one kind of pill: the reference color to match,
//! how far a pixel may stray from it, and the accepted component size range.
//! Selections are kept in an ordered [`SelectionList`]; order matters because
//! classification ties go to the earliest selection.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::grid::PixelSource;
use std::fmt;

/// A named color target with a distance threshold and a size range
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    name: String,
    color: Rgb,
    color_threshold: f64,
    min_size: u32,
    max_size: u32,
}

impl Selection {
    /// Create a new selection
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the threshold is negative or
    /// not finite, if `max_size < min_size`, or if the color is outside
    /// [0, 1].
    pub fn new(
        name: impl Into<String>,
        color: Rgb,
        color_threshold: f64,
        min_size: u32,
        max_size: u32,
    ) -> Result<Self> {
        if !color_threshold.is_finite() || color_threshold < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "color threshold must be a non-negative number: {}",
                color_threshold
            )));
        }
        if max_size < min_size {
            return Err(Error::InvalidParameter(format!(
                "max size {} is smaller than min size {}",
                max_size, min_size
            )));
        }
        if !color.is_normalized() {
            return Err(Error::InvalidParameter(format!(
                "reference color out of range: {:?}",
                color
            )));
        }
        Ok(Self {
            name: name.into(),
            color,
            color_threshold,
            min_size,
            max_size,
        })
    }

    /// Create a selection whose reference color is sampled from `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordinateOutOfBounds`] if the point is outside the
    /// source, or any error of [`Selection::new`].
    pub fn from_sample<S: PixelSource + ?Sized>(
        source: &S,
        x: u32,
        y: u32,
        name: impl Into<String>,
        color_threshold: f64,
        min_size: u32,
        max_size: u32,
    ) -> Result<Self> {
        if x >= source.width() || y >= source.height() {
            return Err(Error::CoordinateOutOfBounds {
                x,
                y,
                width: source.width(),
                height: source.height(),
            });
        }
        Self::new(
            name,
            source.color_at(x, y),
            color_threshold,
            min_size,
            max_size,
        )
    }

    /// Pill name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference color
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Maximum accepted L1 distance from the reference color
    pub fn color_threshold(&self) -> f64 {
        self.color_threshold
    }

    /// Smallest accepted component size
    pub fn min_size(&self) -> u32 {
        self.min_size
    }

    /// Largest accepted component size
    pub fn max_size(&self) -> u32 {
        self.max_size
    }

    /// Check whether `size` lies in `[min_size, max_size]`
    #[inline]
    pub fn accepts_size(&self, size: u32) -> bool {
        size >= self.min_size && size <= self.max_size
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pill Name: {}, Color Threshold: {}, Size Range: {}-{}",
            self.name, self.color_threshold, self.min_size, self.max_size
        )
    }
}

/// Ordered, append-only list of selections with undo and clear
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionList {
    selections: Vec<Selection>,
}

impl SelectionList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a selection
    pub fn push(&mut self, selection: Selection) {
        self.selections.push(selection);
    }

    /// Remove and return the most recent selection
    pub fn undo_last(&mut self) -> Option<Selection> {
        self.selections.pop()
    }

    /// Remove all selections
    pub fn clear(&mut self) {
        self.selections.clear();
    }

    /// Number of selections
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Selection at `index`
    pub fn get(&self, index: usize) -> Option<&Selection> {
        self.selections.get(index)
    }

    /// Selections in insertion order
    pub fn as_slice(&self) -> &[Selection] {
        &self.selections
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Selection> {
        self.selections.iter()
    }
}

impl From<Vec<Selection>> for SelectionList {
    fn from(selections: Vec<Selection>) -> Self {
        Self { selections }
    }
}

impl<'a> IntoIterator for &'a SelectionList {
    type Item = &'a Selection;
    type IntoIter = std::slice::Iter<'a, Selection>;

    fn into_iter(self) -> Self::IntoIter {
        self.selections.iter()
    }
}
