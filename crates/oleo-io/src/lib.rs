//! oleo-io - Image decoding and encoding
//!
//! Turns encoded files into [`Raster`]s and back. Supported formats are
//! selected with cargo features:
//!
//! | Feature      | Format          | Read | Write |
//! |--------------|-----------------|------|-------|
//! | `png-format` | PNG             | yes  | yes   |
//! | `jpeg`       | JPEG            | yes  | yes   |
//! | `pnm`        | PGM / PPM (P5/P6) | yes | yes  |

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use oleo_core::Raster;
use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;
use tracing::debug;

/// Read an image from a file path, detecting the format from its contents.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    debug!(path = %path.display(), bytes = data.len(), "reading image");
    read_image_mem(&data)
}

/// Decode an image held in memory, detecting the format from its contents.
pub fn read_image_mem(data: &[u8]) -> IoResult<Raster> {
    let format = detect_format_from_bytes(data)?;
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(Cursor::new(data)),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(Cursor::new(data)),
        other => Err(IoError::UnsupportedFormat(format!(
            "{other:?} support is not enabled"
        ))),
    }
}

/// Encode an image to a writer in the given format.
pub fn write_image_to<W: Write>(raster: &Raster, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(raster, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(raster, writer, jpeg::DEFAULT_QUALITY),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(raster, writer),
        other => Err(IoError::UnsupportedFormat(format!(
            "cannot write {other:?}"
        ))),
    }
}

/// Write an image to a file path in the given format.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), ?format, "writing image");
    let mut writer = BufWriter::new(File::create(path)?);
    write_image_to(raster, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into an in-memory buffer.
pub fn write_image_mem(raster: &Raster, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_to(raster, &mut buffer, format)?;
    Ok(buffer)
}
