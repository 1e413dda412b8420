//! oleo - Digital oil-paint effect
//!
//! Replaces every pixel with the most frequent gray value of its square
//! neighborhood, which flattens an image into patches of constant tone.
//!
//! The work is split across crates:
//!
//! - [`oleo_core`] (re-exported at the root): sample grids, RGB images, luma
//! - [`filter`]: the mode filter engine
//! - [`io`]: PNG, JPEG and PNM decoding and encoding
//!
//! # Example
//!
//! ```
//! use oleo::{OilPaintConfig, Raster, SampleGrid, oil_paint};
//!
//! let grid = SampleGrid::from_fn(8, 8, |x, _| if x < 4 { 10 } else { 200 }).unwrap();
//! let painted = oil_paint(&Raster::Gray(grid), &OilPaintConfig::default()).unwrap();
//! assert_eq!(painted.width(), 8);
//! ```

mod config;
mod oleo_error;
mod pipeline;

// Re-export core types (primary data structures used everywhere)
pub use oleo_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use oleo_filter as filter;
pub use oleo_io as io;

pub use config::{MAX_WINDOW, MIN_WINDOW, OilPaintConfig};
pub use oleo_error::{OleoError, OleoResult};
pub use pipeline::{default_output_path, oil_paint, oil_paint_bytes, oil_paint_file};
