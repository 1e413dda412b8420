//! Packed RGB(A) image container
//!
//! `RgbImage` is the color counterpart of [`SampleGrid`](crate::SampleGrid):
//! one 32-bit word per pixel in `0xRRGGBBAA` order (see [`crate::color`]).
//! It only exists at the edges of the pipeline, between the decoder and the
//! grayscale conversion and again between the filter and the encoder.

use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
struct RgbData {
    width: u32,
    height: u32,
    has_alpha: bool,
    pixels: Vec<u32>,
}

/// Immutable packed RGBA image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    inner: Arc<RgbData>,
}

impl RgbImage {
    /// Create an opaque black image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let black = color::compose_rgb(0, 0, 0);
        Self::from_pixels(
            width,
            height,
            vec![black; (width as usize) * (height as usize)],
        )
    }

    /// Wrap a row-major buffer of packed pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(Error::DimensionMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(RgbImage {
            inner: Arc::new(RgbData {
                width,
                height,
                has_alpha: false,
                pixels,
            }),
        })
    }

    /// Create an image whose pixel at `(x, y)` is `f(x, y)` as `(r, g, b)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> (u8, u8, u8),
    {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                let (r, g, b) = f(x, y);
                pixels.push(color::compose_rgb(r, g, b));
            }
        }
        Self::from_pixels(width, height, pixels)
    }

    /// Mark whether the alpha byte carries real transparency.
    pub fn with_alpha(self, has_alpha: bool) -> Self {
        match Arc::try_unwrap(self.inner) {
            Ok(mut data) => {
                data.has_alpha = has_alpha;
                RgbImage {
                    inner: Arc::new(data),
                }
            }
            Err(arc) => RgbImage {
                inner: Arc::new(RgbData {
                    width: arc.width,
                    height: arc.height,
                    has_alpha,
                    pixels: arc.pixels.clone(),
                }),
            },
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Whether the alpha byte carries real transparency.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.inner.has_alpha
    }

    /// Get raw access to the packed pixels.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.inner.pixels
    }

    /// Get the packed pixel at (x, y), or `None` out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.pixels[y as usize * self.inner.width as usize + x as usize])
    }

    /// Get the RGB components at (x, y), or `None` out of bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgb)
    }
}
