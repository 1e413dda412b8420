//! Sample access functions
//!
//! Low-level functions for getting and setting individual samples.

use super::{SampleGrid, SampleGridMut};
use crate::error::{Error, Result};

impl SampleGrid {
    /// Get a sample at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_sample(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_sample_unchecked(x, y))
    }

    /// Get a sample without bounds checking against the declared dimensions.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is past the end of the buffer.
    #[inline]
    pub fn get_sample_unchecked(&self, x: u32, y: u32) -> u8 {
        self.samples()[y as usize * self.width() as usize + x as usize]
    }
}

impl SampleGridMut {
    /// Get a sample at (x, y).
    pub fn get_sample(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_sample_unchecked(x, y))
    }

    /// Get a sample without bounds checking against the declared dimensions.
    #[inline]
    pub fn get_sample_unchecked(&self, x: u32, y: u32) -> u8 {
        self.samples()[y as usize * self.width() as usize + x as usize]
    }

    /// Set a sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_sample(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        self.set_sample_unchecked(x, y, val);
        Ok(())
    }

    /// Set a sample without bounds checking against the declared dimensions.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is past the end of the buffer.
    #[inline]
    pub fn set_sample_unchecked(&mut self, x: u32, y: u32, val: u8) {
        let idx = y as usize * self.width() as usize + x as usize;
        self.samples_mut()[idx] = val;
    }
}
