//! Conversions between RGB images and sample grids
//!
//! The filter only ever sees one channel. These functions derive that
//! channel from a color image and expand a filtered grid back to a
//! displayable RGB image.

use super::SampleGrid;
use crate::color;
use crate::error::{Error, Result};
use crate::rgb::RgbImage;

/// ITU-R 601-2 luma weights in 16-bit fixed point (they sum to 65536).
const LUMA_RED: u32 = 19595;
const LUMA_GREEN: u32 = 38470;
const LUMA_BLUE: u32 = 7471;
const LUMA_ROUND: u32 = 1 << 15;

/// The same weights as floats, used when the caller asks for defaults.
const RED_WEIGHT: f32 = 0.299;
const GREEN_WEIGHT: f32 = 0.587;
const BLUE_WEIGHT: f32 = 0.114;

/// Luma of one RGB triple, rounded to nearest.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((LUMA_RED * r as u32 + LUMA_GREEN * g as u32 + LUMA_BLUE * b as u32 + LUMA_ROUND) >> 16) as u8
}

impl RgbImage {
    /// Convert to an 8-bit grid using ITU-R 601-2 luma.
    ///
    /// `L = (19595 R + 38470 G + 7471 B + 32768) >> 16`, computed in integer
    /// arithmetic so the result is identical on every platform. This is the
    /// conversion common image libraries apply for an RGB to "L" conversion.
    /// Alpha is ignored.
    pub fn to_luminance(&self) -> SampleGrid {
        let samples = self
            .pixels()
            .iter()
            .map(|&p| {
                let (r, g, b) = color::extract_rgb(p);
                luminance(r, g, b)
            })
            .collect();
        SampleGrid::from_parts(self.width(), self.height(), samples)
    }

    /// Convert to an 8-bit grid with custom channel weights.
    ///
    /// If all weights are 0.0 the luma weights are used. Weights are
    /// normalized to sum to 1.0 if they don't already.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if any weight is negative.
    pub fn to_gray_weighted(&self, rwt: f32, gwt: f32, bwt: f32) -> Result<SampleGrid> {
        if rwt < 0.0 || gwt < 0.0 || bwt < 0.0 {
            return Err(Error::InvalidParameter("weights must all be >= 0.0".into()));
        }

        let (rwt, gwt, bwt) = if rwt == 0.0 && gwt == 0.0 && bwt == 0.0 {
            (RED_WEIGHT, GREEN_WEIGHT, BLUE_WEIGHT)
        } else {
            let sum = rwt + gwt + bwt;
            if (sum - 1.0).abs() > 0.0001 {
                (rwt / sum, gwt / sum, bwt / sum)
            } else {
                (rwt, gwt, bwt)
            }
        };

        let samples = self
            .pixels()
            .iter()
            .map(|&p| {
                let (r, g, b) = color::extract_rgb(p);
                let gray = (rwt * r as f32 + gwt * g as f32 + bwt * b as f32 + 0.5) as u32;
                gray.min(255) as u8
            })
            .collect();
        Ok(SampleGrid::from_parts(self.width(), self.height(), samples))
    }
}

impl SampleGrid {
    /// Replicate every sample into R, G and B of an opaque RGB image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero-area grid.
    pub fn to_rgb(&self) -> Result<RgbImage> {
        if self.is_empty() {
            return Err(Error::InvalidDimension {
                width: self.width(),
                height: self.height(),
            });
        }
        let pixels = self
            .samples()
            .iter()
            .map(|&s| color::compose_rgb(s, s, s))
            .collect();
        RgbImage::from_pixels(self.width(), self.height(), pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(255, 255, 255), 255);
        assert_eq!(luminance(128, 128, 128), 128);
    }

    #[test]
    fn test_luminance_primaries() {
        // 0.299 * 255, 0.587 * 255, 0.114 * 255, rounded
        assert_eq!(luminance(255, 0, 0), 76);
        assert_eq!(luminance(0, 255, 0), 150);
        assert_eq!(luminance(0, 0, 255), 29);
    }

    #[test]
    fn test_to_luminance_shape() {
        let img = RgbImage::from_fn(5, 3, |x, _| (x as u8 * 50, 0, 0)).unwrap();
        let gray = img.to_luminance();
        assert_eq!((gray.width(), gray.height()), (5, 3));
        assert_eq!(gray.get_sample(0, 0), Some(0));
        assert_eq!(gray.get_sample(4, 2), Some(luminance(200, 0, 0)));
    }

    #[test]
    fn test_to_gray_weighted() {
        let img = RgbImage::from_fn(1, 1, |_, _| (100, 200, 50)).unwrap();
        let green_only = img.to_gray_weighted(0.0, 2.0, 0.0).unwrap();
        assert_eq!(green_only.get_sample(0, 0), Some(200));

        let defaults = img.to_gray_weighted(0.0, 0.0, 0.0).unwrap();
        let luma = img.to_luminance();
        let diff = defaults.get_sample(0, 0).unwrap() as i32 - luma.get_sample(0, 0).unwrap() as i32;
        assert!(diff.abs() <= 1);

        assert!(img.to_gray_weighted(-1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_to_rgb_replicates() {
        let grid = SampleGrid::from_vec(2, 1, vec![17, 240]).unwrap();
        let rgb = grid.to_rgb().unwrap();
        assert_eq!(rgb.get_rgb(0, 0), Some((17, 17, 17)));
        assert_eq!(rgb.get_rgb(1, 0), Some((240, 240, 240)));
        assert_eq!(rgb.to_luminance(), grid);
    }

    #[test]
    fn test_to_rgb_empty_rejected() {
        let grid = SampleGrid::from_vec(0, 0, Vec::new()).unwrap();
        assert!(grid.to_rgb().is_err());
    }
}
