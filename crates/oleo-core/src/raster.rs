//! Decoded image of either kind
//!
//! Decoders return a [`Raster`]; callers that only care about intensity
//! take [`Raster::to_gray`], encoders accept either variant.

use crate::error::Result;
use crate::grid::SampleGrid;
use crate::rgb::RgbImage;

/// A decoded image: one gray channel or packed RGB(A).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Raster {
    /// Single-channel 8-bit image
    Gray(SampleGrid),
    /// Packed 32-bit color image
    Rgb(RgbImage),
}

impl Raster {
    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        match self {
            Raster::Gray(g) => g.width(),
            Raster::Rgb(c) => c.width(),
        }
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        match self {
            Raster::Gray(g) => g.height(),
            Raster::Rgb(c) => c.height(),
        }
    }

    /// Whether this raster holds a single gray channel.
    pub fn is_gray(&self) -> bool {
        matches!(self, Raster::Gray(_))
    }

    /// The gray channel, converting color with ITU-R 601-2 luma.
    ///
    /// A gray raster is returned as a shared clone, without copying samples.
    pub fn to_gray(&self) -> SampleGrid {
        match self {
            Raster::Gray(g) => g.clone(),
            Raster::Rgb(c) => c.to_luminance(),
        }
    }

    /// The image as packed RGB, replicating a gray channel if needed.
    pub fn to_rgb(&self) -> Result<RgbImage> {
        match self {
            Raster::Gray(g) => g.to_rgb(),
            Raster::Rgb(c) => Ok(c.clone()),
        }
    }
}

impl From<SampleGrid> for Raster {
    fn from(grid: SampleGrid) -> Self {
        Raster::Gray(grid)
    }
}

impl From<RgbImage> for Raster {
    fn from(img: RgbImage) -> Self {
        Raster::Rgb(img)
    }
}
