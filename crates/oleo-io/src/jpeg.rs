//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. Grayscale JPEGs decode to a gray raster; RGB and CMYK
//! JPEGs decode to an RGB raster.

use crate::{IoError, IoResult};
use jpeg_decoder::PixelFormat;
use jpeg_encoder::{ColorType, Encoder};
use oleo_core::{Raster, RgbImage, SampleGrid, color};
use std::io::{Read, Write};
use tracing::{trace, warn};

/// Quality used when encoding.
pub const DEFAULT_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Raster> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    trace!(width, height, format = ?info.pixel_format, "decoded JPEG");

    match info.pixel_format {
        PixelFormat::L8 => Ok(Raster::Gray(SampleGrid::from_vec(width, height, data)?)),
        PixelFormat::L16 => {
            // Big-endian 16-bit samples; keep the high byte.
            let samples = data.chunks_exact(2).map(|s| s[0]).collect();
            Ok(Raster::Gray(SampleGrid::from_vec(width, height, samples)?))
        }
        PixelFormat::RGB24 => {
            let pixels = data
                .chunks_exact(3)
                .map(|p| color::compose_rgb(p[0], p[1], p[2]))
                .collect();
            Ok(Raster::Rgb(RgbImage::from_pixels(width, height, pixels)?))
        }
        PixelFormat::CMYK32 => {
            // Adobe CMYK is stored inverted, so R = C' * K' / 255.
            let pixels = data
                .chunks_exact(4)
                .map(|p| {
                    let k = p[3] as u32;
                    let ch = |v: u8| ((v as u32 * k + 127) / 255) as u8;
                    color::compose_rgb(ch(p[0]), ch(p[1]), ch(p[2]))
                })
                .collect();
            Ok(Raster::Rgb(RgbImage::from_pixels(width, height, pixels)?))
        }
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "unsupported JPEG pixel format: {:?}",
            other
        ))),
    }
}

/// Write a JPEG image to a writer.
///
/// Alpha, if present, is dropped.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if a dimension exceeds the 65535 limit
/// of the JPEG format.
pub fn write_jpeg<W: Write>(raster: &Raster, writer: W, quality: u8) -> IoResult<()> {
    let (Ok(width), Ok(height)) = (u16::try_from(raster.width()), u16::try_from(raster.height()))
    else {
        return Err(IoError::InvalidData(format!(
            "JPEG dimensions limited to 65535, got {}x{}",
            raster.width(),
            raster.height()
        )));
    };

    let (color_type, data) = match raster {
        Raster::Gray(grid) => (ColorType::Luma, grid.samples().to_vec()),
        Raster::Rgb(img) => {
            if img.has_alpha() {
                warn!("JPEG has no alpha channel; dropping alpha");
            }
            let mut data = Vec::with_capacity(img.pixels().len() * 3);
            for &p in img.pixels() {
                let (r, g, b) = color::extract_rgb(p);
                data.extend_from_slice(&[r, g, b]);
            }
            (ColorType::Rgb, data)
        }
    };

    let encoder = Encoder::new(writer, quality);
    encoder
        .encode(&data, width, height, color_type)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}
