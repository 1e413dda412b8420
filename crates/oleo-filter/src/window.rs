//! Square filter windows
//!
//! A window of odd side `size` extends `offset = (size - 1) / 2` samples in
//! each direction from its center. Near the image border the window is
//! clipped to the samples that exist; nothing is padded or wrapped.

use crate::{FilterError, FilterResult};

/// A validated square window with an odd, positive side length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    size: u32,
}

impl Window {
    /// Validate a window size.
    ///
    /// Any positive odd size is accepted, including sizes larger than the
    /// image.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameter`] if `size` is zero, negative
    /// or even.
    pub fn new(size: i32) -> FilterResult<Self> {
        if size <= 0 || size % 2 == 0 {
            return Err(FilterError::InvalidParameter(format!(
                "window size must be a positive odd integer, got {size}"
            )));
        }
        Ok(Window { size: size as u32 })
    }

    /// Side length in samples.
    #[inline]
    pub fn size(self) -> u32 {
        self.size
    }

    /// Samples the window extends on each side of its center.
    #[inline]
    pub fn offset(self) -> u32 {
        self.size / 2
    }

    /// Clipped extent along one axis: inclusive `(lo, hi)` around `center`.
    ///
    /// `len` must be non-zero.
    #[inline]
    pub fn clip_axis(self, center: u32, len: u32) -> (u32, u32) {
        let off = self.offset();
        let lo = center.saturating_sub(off);
        let hi = center.saturating_add(off).min(len - 1);
        (lo, hi)
    }

    /// Clipped neighborhood of `(x, y)` as inclusive `(x0, x1, y0, y1)`.
    ///
    /// `width` and `height` must be non-zero.
    pub fn clip(self, x: u32, y: u32, width: u32, height: u32) -> (u32, u32, u32, u32) {
        let (x0, x1) = self.clip_axis(x, width);
        let (y0, y1) = self.clip_axis(y, height);
        (x0, x1, y0, y1)
    }

    /// Whether every clipped neighborhood of a `width x height` image is the
    /// whole image.
    pub fn covers(self, width: u32, height: u32) -> bool {
        self.offset() >= width.max(height).saturating_sub(1)
    }
}

impl TryFrom<i32> for Window {
    type Error = FilterError;

    fn try_from(size: i32) -> FilterResult<Self> {
        Window::new(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_sizes() {
        for size in [1, 3, 5, 7, 11, 99] {
            let w = Window::new(size).unwrap();
            assert_eq!(w.size(), size as u32);
            assert_eq!(w.offset(), (size as u32 - 1) / 2);
        }
    }

    #[test]
    fn test_rejected_sizes() {
        for size in [0, 2, 4, 10, -1, -3, i32::MIN] {
            assert!(
                matches!(Window::new(size), Err(FilterError::InvalidParameter(_))),
                "size {size} should be rejected"
            );
        }
    }

    #[test]
    fn test_try_from() {
        assert!(Window::try_from(7).is_ok());
        assert!(Window::try_from(8).is_err());
    }

    #[test]
    fn test_clip_interior() {
        let w = Window::new(3).unwrap();
        assert_eq!(w.clip(5, 5, 10, 10), (4, 6, 4, 6));
    }

    #[test]
    fn test_clip_corners() {
        let w = Window::new(3).unwrap();
        assert_eq!(w.clip(0, 0, 3, 3), (0, 1, 0, 1));
        assert_eq!(w.clip(2, 2, 3, 3), (1, 2, 1, 2));
    }

    #[test]
    fn test_clip_huge_window() {
        let w = Window::new(i32::MAX).unwrap();
        assert_eq!(w.clip(2, 1, 5, 4), (0, 4, 0, 3));
        assert!(w.covers(5, 4));
    }

    #[test]
    fn test_covers() {
        let w = Window::new(5).unwrap();
        assert!(w.covers(3, 3));
        assert!(w.covers(1, 3));
        assert!(!w.covers(4, 2));
        assert!(Window::new(1).unwrap().covers(1, 1));
    }
}
