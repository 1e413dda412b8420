//! Sample grid - the single-channel image container
//!
//! `SampleGrid` holds one 8-bit intensity sample per pixel, addressed by
//! `(x, y)` with `0 <= x < width` and `0 <= y < height`.
//!
//! # Sample layout
//!
//! - Samples are stored row-major, one byte per sample
//! - Rows are tightly packed (no padding), so row `y` starts at `y * width`
//!
//! # Ownership model
//!
//! `SampleGrid` uses `Arc` for cheap cloning (shared, read-only ownership).
//! To modify samples, convert to `SampleGridMut` via [`SampleGrid::try_into_mut`]
//! or [`SampleGrid::to_mut`], then convert back with `Into<SampleGrid>`.
//! A grid that has been shared is therefore never mutated in place.

mod access;
pub mod convert;
mod histogram;

pub use histogram::GrayHistogram;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal grid data
#[derive(Debug, PartialEq, Eq)]
struct GridData {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl GridData {
    fn area(width: u32, height: u32) -> usize {
        (width as usize) * (height as usize)
    }
}

/// Immutable 8-bit sample grid
///
/// # Examples
///
/// ```
/// use oleo_core::SampleGrid;
///
/// let grid = SampleGrid::new(640, 480).unwrap();
/// assert_eq!(grid.width(), 640);
/// assert_eq!(grid.height(), 480);
/// assert_eq!(grid.get_sample(0, 0), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleGrid {
    inner: Arc<GridData>,
}

impl SampleGrid {
    /// Create a new grid with the specified dimensions.
    ///
    /// All samples are initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self::from_parts(
            width,
            height,
            vec![0u8; GridData::area(width, height)],
        ))
    }

    /// Wrap a row-major sample buffer.
    ///
    /// Unlike [`SampleGrid::new`], a zero-area grid is accepted here; it is
    /// the filters that refuse to process one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `samples.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, samples: Vec<u8>) -> Result<Self> {
        let expected = GridData::area(width, height);
        if samples.len() != expected {
            return Err(Error::DimensionMismatch {
                width,
                height,
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self::from_parts(width, height, samples))
    }

    /// Create a grid whose sample at `(x, y)` is `f(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> u8,
    {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let mut samples = Vec::with_capacity(GridData::area(width, height));
        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }
        Ok(Self::from_parts(width, height, samples))
    }

    fn from_parts(width: u32, height: u32, samples: Vec<u8>) -> Self {
        SampleGrid {
            inner: Arc::new(GridData {
                width,
                height,
                samples,
            }),
        }
    }

    /// Get the grid width in samples.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the grid height in samples.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Whether the grid has zero width or zero height.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.width == 0 || self.inner.height == 0
    }

    /// Get raw access to the row-major samples.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.inner.samples
    }

    /// Get the samples of one row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.samples[start..start + w]
    }

    /// Get the number of strong references to this grid.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two grids have the same width and height.
    pub fn sizes_equal(&self, other: &SampleGrid) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a zero-filled grid with the same dimensions.
    pub fn create_template(&self) -> Self {
        Self::from_parts(
            self.inner.width,
            self.inner.height,
            vec![0u8; self.inner.samples.len()],
        )
    }

    /// Create a deep copy of this grid.
    ///
    /// Unlike `clone()` which shares samples via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Self::from_parts(
            self.inner.width,
            self.inner.height,
            self.inner.samples.clone(),
        )
    }

    /// Try to get mutable access to the samples.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<SampleGridMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(SampleGridMut { inner: data }),
            Err(arc) => Err(SampleGrid { inner: arc }),
        }
    }

    /// Create a mutable copy of this grid.
    pub fn to_mut(&self) -> SampleGridMut {
        SampleGridMut {
            inner: GridData {
                width: self.inner.width,
                height: self.inner.height,
                samples: self.inner.samples.clone(),
            },
        }
    }
}

/// Mutable sample grid
///
/// Allows modification of samples. Convert back to an immutable
/// [`SampleGrid`] using `Into<SampleGrid>`.
#[derive(Debug)]
pub struct SampleGridMut {
    inner: GridData,
}

impl SampleGridMut {
    /// Get the grid width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the grid height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the samples.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.inner.samples
    }

    /// Get mutable access to the samples.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.inner.samples
    }

    /// Get mutable access to a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &mut self.inner.samples[start..start + w]
    }

    /// Set every sample to `val`.
    pub fn set_all(&mut self, val: u8) {
        self.inner.samples.fill(val);
    }
}

impl From<SampleGridMut> for SampleGrid {
    fn from(grid: SampleGridMut) -> Self {
        SampleGrid {
            inner: Arc::new(grid.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = SampleGrid::new(100, 200).unwrap();
        assert_eq!(grid.width(), 100);
        assert_eq!(grid.height(), 200);
        assert_eq!(grid.samples().len(), 20_000);
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_grid_creation_invalid() {
        assert!(SampleGrid::new(0, 100).is_err());
        assert!(SampleGrid::new(100, 0).is_err());
        assert!(SampleGrid::from_fn(0, 3, |_, _| 0).is_err());
    }

    #[test]
    fn test_from_vec_length_checked() {
        assert!(SampleGrid::from_vec(3, 3, vec![0; 9]).is_ok());
        let err = SampleGrid::from_vec(3, 3, vec![0; 8]).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 9,
                actual: 8,
                ..
            }
        ));
    }

    #[test]
    fn test_from_vec_allows_empty() {
        let grid = SampleGrid::from_vec(0, 5, Vec::new()).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.height(), 5);
    }

    #[test]
    fn test_from_fn_row_major() {
        let grid = SampleGrid::from_fn(3, 2, |x, y| (y * 10 + x) as u8).unwrap();
        assert_eq!(grid.samples(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(grid.row(1), &[10, 11, 12]);
    }

    #[test]
    fn test_clone_shares_data() {
        let grid1 = SampleGrid::new(10, 10).unwrap();
        let grid2 = grid1.clone();

        assert_eq!(grid1.ref_count(), 2);
        assert_eq!(grid1.samples().as_ptr(), grid2.samples().as_ptr());
    }

    #[test]
    fn test_deep_clone() {
        let grid1 = SampleGrid::new(10, 10).unwrap();
        let grid2 = grid1.deep_clone();

        assert_eq!(grid1.ref_count(), 1);
        assert_ne!(grid1.samples().as_ptr(), grid2.samples().as_ptr());
        assert_eq!(grid1, grid2);
    }

    #[test]
    fn test_try_into_mut_requires_unique() {
        let grid = SampleGrid::new(4, 4).unwrap();
        let shared = grid.clone();
        let grid = grid.try_into_mut().unwrap_err();
        drop(shared);
        let mut grid_mut = grid.try_into_mut().unwrap();
        grid_mut.set_all(9);
        grid_mut.row_mut(2)[1] = 3;

        let grid: SampleGrid = grid_mut.into();
        assert_eq!(grid.get_sample(0, 0), Some(9));
        assert_eq!(grid.get_sample(1, 2), Some(3));
    }

    #[test]
    fn test_to_mut_leaves_source_untouched() {
        let grid = SampleGrid::from_fn(2, 2, |_, _| 5).unwrap();
        let mut copy = grid.to_mut();
        copy.set_all(0);
        assert_eq!(grid.samples(), &[5, 5, 5, 5]);
    }

    #[test]
    fn test_create_template() {
        let src = SampleGrid::from_fn(7, 3, |_, _| 200).unwrap();
        let tmpl = src.create_template();
        assert!(tmpl.sizes_equal(&src));
        assert!(tmpl.samples().iter().all(|&s| s == 0));
    }
}
