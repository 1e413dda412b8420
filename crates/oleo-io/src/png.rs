//! PNG image format support
//!
//! Palette and sub-byte images are expanded by the decoder; 16-bit
//! samples keep their most significant byte.

use crate::{IoError, IoResult};
use oleo_core::{Raster, RgbImage, SampleGrid, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};
use tracing::trace;

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let (color_type, bit_depth) = reader.output_color_type();

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;
    trace!(width, height, ?color_type, ?bit_depth, "decoded PNG frame");

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    // Stride between samples; 16-bit samples are read by their high byte.
    let step = if bit_depth == BitDepth::Sixteen { 2 } else { 1 };
    let rows = data.chunks(bytes_per_row).take(height as usize);

    match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::Eight | BitDepth::Sixteen) => {
            let mut samples = Vec::with_capacity((width as usize) * (height as usize));
            for row in rows {
                samples.extend(row.iter().step_by(step).take(width as usize));
            }
            Ok(Raster::Gray(SampleGrid::from_vec(width, height, samples)?))
        }
        (ColorType::GrayscaleAlpha | ColorType::Rgb | ColorType::Rgba, _) => {
            let channels = match color_type {
                ColorType::GrayscaleAlpha => 2,
                ColorType::Rgb => 3,
                _ => 4,
            };
            let stride = channels * step;
            let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
            for row in rows {
                for px in row.chunks(stride).take(width as usize) {
                    let sample = |c: usize| px[c * step];
                    let pixel = match channels {
                        2 => {
                            let g = sample(0);
                            color::compose_rgba(g, g, g, sample(1))
                        }
                        3 => color::compose_rgb(sample(0), sample(1), sample(2)),
                        _ => color::compose_rgba(sample(0), sample(1), sample(2), sample(3)),
                    };
                    pixels.push(pixel);
                }
            }
            let has_alpha = channels == 2 || channels == 4;
            Ok(Raster::Rgb(
                RgbImage::from_pixels(width, height, pixels)?.with_alpha(has_alpha),
            ))
        }
        _ => Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG format: {:?} {:?}",
            color_type, bit_depth
        ))),
    }
}

/// Write a PNG image
///
/// Gray rasters are written as 8-bit grayscale, color rasters as 8-bit RGB,
/// or RGBA when the image carries alpha.
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let width = raster.width();
    let height = raster.height();

    let (color_type, data) = match raster {
        Raster::Gray(grid) => (ColorType::Grayscale, grid.samples().to_vec()),
        Raster::Rgb(img) if img.has_alpha() => {
            let mut data = Vec::with_capacity(img.pixels().len() * 4);
            for &p in img.pixels() {
                let (r, g, b, a) = color::extract_rgba(p);
                data.extend_from_slice(&[r, g, b, a]);
            }
            (ColorType::Rgba, data)
        }
        Raster::Rgb(img) => {
            let mut data = Vec::with_capacity(img.pixels().len() * 3);
            for &p in img.pixels() {
                let (r, g, b) = color::extract_rgb(p);
                data.extend_from_slice(&[r, g, b]);
            }
            (ColorType::Rgb, data)
        }
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
