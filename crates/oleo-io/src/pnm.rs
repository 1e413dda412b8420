//! PNM (Portable Any Map) format support
//!
//! Reads and writes PGM (P5 binary) and PPM (P6 binary). Maxval must be
//! at most 255; ASCII variants and PAM are not supported. Headers
//! describing more than [`MAX_PNM_BYTES`] of pixel data are rejected.

use crate::{IoError, IoResult};
use oleo_core::{Raster, RgbImage, SampleGrid, color};
use std::io::{BufRead, Read, Write};
use tracing::warn;

/// Largest pixel payload accepted from a PNM header, in bytes.
pub const MAX_PNM_BYTES: usize = 1 << 30;

/// Read one whitespace-delimited header token, skipping `#` comments.
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut in_comment = false;
    loop {
        let mut byte = [0u8; 1];
        if reader.read(&mut byte)? == 0 {
            break;
        }
        let c = byte[0];
        if in_comment {
            in_comment = c != b'\n' && c != b'\r';
            continue;
        }
        if c == b'#' {
            in_comment = true;
        } else if c.is_ascii_whitespace() {
            if !token.is_empty() {
                // The single whitespace after maxval is consumed here.
                break;
            }
        } else {
            token.push(c as char);
        }
    }
    if token.is_empty() {
        return Err(IoError::InvalidData("truncated PNM header".to_string()));
    }
    Ok(token)
}

fn read_number<R: BufRead>(reader: &mut R, what: &str) -> IoResult<u32> {
    let token = read_token(reader)?;
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("invalid PNM {what}: {token:?}")))
}

/// Read a binary PNM image (P5/P6) from a reader.
///
/// # Returns
/// A gray raster for PGM, an RGB raster for PPM.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Raster> {
    let magic = read_token(&mut reader)?;
    let channels = match magic.as_str() {
        "P5" => 1,
        "P6" => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM variant {other}"
            )));
        }
    };
    let width = read_number(&mut reader, "width")?;
    let height = read_number(&mut reader, "height")?;
    let maxval = read_number(&mut reader, "maxval")?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM maxval {maxval} not supported"
        )));
    }

    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels))
        .filter(|&n| n <= MAX_PNM_BYTES)
        .ok_or_else(|| {
            IoError::InvalidData(format!("PNM dimensions {width}x{height} too large"))
        })?;

    // Grow the buffer with the data actually present, not the header's claim.
    let mut data = Vec::new();
    reader
        .take(len as u64)
        .read_to_end(&mut data)
        .map_err(|e| IoError::DecodeError(format!("PNM pixel data: {e}")))?;
    if data.len() != len {
        return Err(IoError::DecodeError(format!(
            "PNM pixel data: expected {len} bytes, got {}",
            data.len()
        )));
    }
    if maxval != 255 {
        for v in &mut data {
            *v = (((*v as u32).min(maxval) * 255 + maxval / 2) / maxval) as u8;
        }
    }

    if channels == 1 {
        return Ok(Raster::Gray(SampleGrid::from_vec(width, height, data)?));
    }
    let pixels = data
        .chunks_exact(3)
        .map(|p| color::compose_rgb(p[0], p[1], p[2]))
        .collect();
    Ok(Raster::Rgb(RgbImage::from_pixels(width, height, pixels)?))
}

/// Write a raster as binary PNM: P5 for gray, P6 for color.
pub fn write_pnm<W: Write>(raster: &Raster, mut writer: W) -> IoResult<()> {
    match raster {
        Raster::Gray(grid) => {
            write!(writer, "P5\n{} {}\n255\n", grid.width(), grid.height())?;
            writer.write_all(grid.samples())?;
        }
        Raster::Rgb(img) => {
            if img.has_alpha() {
                warn!("PPM has no alpha channel; dropping alpha");
            }
            write!(writer, "P6\n{} {}\n255\n", img.width(), img.height())?;
            let mut data = Vec::with_capacity(img.pixels().len() * 3);
            for &p in img.pixels() {
                let (r, g, b) = color::extract_rgb(p);
                data.extend_from_slice(&[r, g, b]);
            }
            writer.write_all(&data)?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_pgm_roundtrip() {
        let grid = SampleGrid::from_fn(7, 3, |x, y| (x * 30 + y) as u8).unwrap();
        let raster = Raster::Gray(grid);
        let mut buffer = Vec::new();
        write_pnm(&raster, &mut buffer).unwrap();
        assert!(buffer.starts_with(b"P5\n7 3\n255\n"));
        assert_eq!(read_pnm(Cursor::new(buffer)).unwrap(), raster);
    }

    #[test]
    fn test_ppm_roundtrip() {
        let img = RgbImage::from_fn(2, 2, |x, y| (x as u8, y as u8, 77)).unwrap();
        let raster = Raster::Rgb(img);
        let mut buffer = Vec::new();
        write_pnm(&raster, &mut buffer).unwrap();
        assert_eq!(read_pnm(Cursor::new(buffer)).unwrap(), raster);
    }

    #[test]
    fn test_header_comments_and_maxval() {
        let mut data = b"P5 # comment\n2 1\n# another\n15\n".to_vec();
        data.extend_from_slice(&[0, 15]);
        let Raster::Gray(grid) = read_pnm(Cursor::new(data)).unwrap() else {
            panic!("expected a gray raster");
        };
        assert_eq!(grid.samples(), &[0, 255]);
    }

    #[test]
    fn test_truncated_data() {
        let data = b"P5\n4 4\n255\n\x01\x02".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::DecodeError(_))
        ));
    }

    #[test]
    fn test_maxval_rescale_rounds() {
        let mut data = b"P5\n3 1\n7\n".to_vec();
        data.extend_from_slice(&[0, 4, 7]);
        let Raster::Gray(grid) = read_pnm(Cursor::new(data)).unwrap() else {
            panic!("expected a gray raster");
        };
        // 4 * 255 / 7 = 145.7
        assert_eq!(grid.samples(), &[0, 146, 255]);
    }

    #[test]
    fn test_oversized_header_rejected() {
        let data = b"P6\n4000000000 4000000000\n255\n\x00".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::InvalidData(_))
        ));

        // Within the limit but far more than the data present.
        let data = b"P5\n30000 30000\n255\n\x00\x01".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::DecodeError(_))
        ));
    }

    #[test]
    fn test_ascii_variant_rejected() {
        let data = b"P2\n1 1\n255\n0\n".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
