//! Oil-paint pipeline
//!
//! Decode, convert to luma, mode filter, replicate to RGB, encode. Each
//! call is independent and leaves its input untouched.

use crate::{OilPaintConfig, OleoResult};
use oleo_core::{Raster, RgbImage};
use oleo_filter::mode_filter_with;
use oleo_io::ImageFormat;
use std::path::Path;
use tracing::{debug, info};

/// Apply the oil-paint effect to a decoded image.
///
/// Color input is reduced to ITU-R 601-2 luma first; the filtered gray
/// channel is replicated into R, G and B of an opaque image.
///
/// # Errors
///
/// Returns [`OleoError::Filter`](crate::OleoError::Filter) for an even or
/// non-positive window, or a zero-area image.
///
/// # Examples
///
/// ```
/// use oleo::{OilPaintConfig, Raster, SampleGrid, oil_paint};
///
/// let grid = SampleGrid::from_vec(3, 1, vec![4, 4, 9]).unwrap();
/// let out = oil_paint(&Raster::Gray(grid), &OilPaintConfig::unchecked(3)).unwrap();
/// assert_eq!(out.get_rgb(2, 0), Some((4, 4, 4)));
/// ```
pub fn oil_paint(raster: &Raster, config: &OilPaintConfig) -> OleoResult<RgbImage> {
    let gray = raster.to_gray();
    let painted = mode_filter_with(&gray, config.window_size, &config.options)?;
    Ok(painted.to_rgb()?)
}

/// Apply the oil-paint effect to an encoded image and return PNG bytes.
///
/// The input may be any format enabled in `oleo-io`.
pub fn oil_paint_bytes(data: &[u8], config: &OilPaintConfig) -> OleoResult<Vec<u8>> {
    let raster = oleo_io::read_image_mem(data)?;
    debug!(
        width = raster.width(),
        height = raster.height(),
        gray = raster.is_gray(),
        "decoded input"
    );
    let painted = oil_paint(&raster, config)?;
    Ok(oleo_io::write_image_mem(
        &Raster::Rgb(painted),
        ImageFormat::Png,
    )?)
}

/// Apply the oil-paint effect from one file to another.
///
/// The output format follows the extension of `output`; PNG is used when
/// the extension is missing or unknown.
pub fn oil_paint_file<P, Q>(input: P, output: Q, config: &OilPaintConfig) -> OleoResult<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (input, output) = (input.as_ref(), output.as_ref());
    let raster = oleo_io::read_image(input)?;
    let painted = oil_paint(&raster, config)?;

    let format = match ImageFormat::from_path(output) {
        ImageFormat::Unknown => ImageFormat::Png,
        format => format,
    };
    oleo_io::write_image(&Raster::Rgb(painted), output, format)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        window = config.window_size,
        "oil paint written"
    );
    Ok(())
}

/// Default output path: `<stem>_oleo.png` beside the input.
pub fn default_output_path(input: &Path) -> std::path::PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{stem}_oleo.png"))
}
