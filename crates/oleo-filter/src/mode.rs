//! Mode filtering (digital oil paint)
//!
//! Each output sample is the most frequent input value in the clipped
//! square neighborhood of the same position. Among equally frequent values
//! the smallest one is chosen, so the result never depends on traversal
//! order or thread scheduling.
//!
//! Two strategies produce bit-identical output:
//!
//! - [`ModeStrategy::Reference`] rebuilds a 256-bin histogram for every
//!   pixel, `O(w * h * size^2)`.
//! - [`ModeStrategy::Sliding`] keeps one histogram per output row and, as
//!   the window moves right, removes the column that leaves and adds the
//!   column that enters, `O(w * h * size)`.
//!
//! Output rows are independent, so they are optionally computed in
//! parallel; each worker owns a disjoint row of the output buffer and only
//! reads the shared input grid.

use crate::window::Window;
use crate::{FilterError, FilterResult};
use oleo_core::{GrayHistogram, SampleGrid};
use rayon::prelude::*;
use tracing::debug;

/// Default window size of the oil-paint effect.
pub const DEFAULT_WINDOW_SIZE: i32 = 7;

/// How neighborhood histograms are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeStrategy {
    /// Rebuild the full histogram for every output pixel
    Reference,
    /// Update a running histogram column by column along each row
    #[default]
    Sliding,
}

/// Options for [`mode_filter_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeFilterOptions {
    /// Histogram strategy
    pub strategy: ModeStrategy,
    /// Compute output rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for ModeFilterOptions {
    fn default() -> Self {
        Self {
            strategy: ModeStrategy::Sliding,
            parallel: true,
        }
    }
}

impl ModeFilterOptions {
    /// Single-threaded options with the given strategy.
    pub fn sequential(strategy: ModeStrategy) -> Self {
        Self {
            strategy,
            parallel: false,
        }
    }
}

/// Apply the mode filter with the default options.
///
/// # Arguments
/// * `grid` - Input 8-bit grid, never modified
/// * `window_size` - Side of the square window; any positive odd value
///
/// # Errors
///
/// - [`FilterError::InvalidParameter`] if `window_size` is zero, negative or even
/// - [`FilterError::EmptyInput`] if the grid has zero width or height
///
/// # Examples
///
/// ```
/// use oleo_core::SampleGrid;
/// use oleo_filter::mode_filter;
///
/// let grid = SampleGrid::from_vec(3, 1, vec![4, 4, 9]).unwrap();
/// let out = mode_filter(&grid, 3).unwrap();
/// assert_eq!(out.samples(), &[4, 4, 4]);
/// ```
pub fn mode_filter(grid: &SampleGrid, window_size: i32) -> FilterResult<SampleGrid> {
    mode_filter_with(grid, window_size, &ModeFilterOptions::default())
}

/// Apply the mode filter by rebuilding every neighborhood histogram.
///
/// Slow, single-threaded and straightforward; other strategies are checked
/// against it.
pub fn mode_filter_reference(grid: &SampleGrid, window_size: i32) -> FilterResult<SampleGrid> {
    mode_filter_with(
        grid,
        window_size,
        &ModeFilterOptions::sequential(ModeStrategy::Reference),
    )
}

/// Apply the mode filter with explicit options.
///
/// The window size is validated first, then the grid; nothing is computed
/// unless both are valid.
pub fn mode_filter_with(
    grid: &SampleGrid,
    window_size: i32,
    options: &ModeFilterOptions,
) -> FilterResult<SampleGrid> {
    let window = Window::new(window_size)?;
    let (w, h) = (grid.width(), grid.height());
    if grid.is_empty() {
        return Err(FilterError::EmptyInput {
            width: w,
            height: h,
        });
    }

    debug!(
        width = w,
        height = h,
        window = window.size(),
        strategy = ?options.strategy,
        parallel = options.parallel,
        "mode filter"
    );

    if options.strategy == ModeStrategy::Sliding && window.covers(w, h) {
        // Every neighborhood is the whole image.
        let Some(global) = grid.gray_histogram().mode() else {
            return Err(FilterError::EmptyInput {
                width: w,
                height: h,
            });
        };
        debug!(mode = global, "window covers image; output is the global mode");
        return Ok(SampleGrid::from_vec(w, h, vec![global; grid.samples().len()])?);
    }

    let mut out = vec![0u8; grid.samples().len()];
    let fill_row = |(y, row): (usize, &mut [u8])| match options.strategy {
        ModeStrategy::Reference => reference_row(grid, window, y as u32, row),
        ModeStrategy::Sliding => sliding_row(grid, window, y as u32, row),
    };
    if options.parallel {
        out.par_chunks_mut(w as usize).enumerate().for_each(fill_row);
    } else {
        out.chunks_mut(w as usize).enumerate().for_each(fill_row);
    }

    Ok(SampleGrid::from_vec(w, h, out)?)
}

/// Mode of the clipped neighborhood centered on `(x, y)`.
///
/// Returns `None` if `(x, y)` lies outside the grid.
pub fn neighborhood_mode(grid: &SampleGrid, x: u32, y: u32, window: Window) -> Option<u8> {
    if x >= grid.width() || y >= grid.height() {
        return None;
    }
    let mut hist = GrayHistogram::new();
    accumulate(grid, window, x, y, &mut hist);
    hist.mode()
}

/// Count the clipped neighborhood of `(x, y)` into `hist`.
fn accumulate(grid: &SampleGrid, window: Window, x: u32, y: u32, hist: &mut GrayHistogram) {
    let (x0, x1, y0, y1) = window.clip(x, y, grid.width(), grid.height());
    for ny in y0..=y1 {
        hist.add_all(&grid.row(ny)[x0 as usize..=x1 as usize]);
    }
}

/// Most frequent value of a histogram known to be non-empty.
#[inline]
fn mode_of(hist: &GrayHistogram) -> u8 {
    debug_assert!(!hist.is_empty(), "neighborhood always holds its center");
    hist.mode().unwrap_or_default()
}

fn reference_row(grid: &SampleGrid, window: Window, y: u32, row: &mut [u8]) {
    let mut hist = GrayHistogram::new();
    for (x, out) in row.iter_mut().enumerate() {
        hist.clear();
        accumulate(grid, window, x as u32, y, &mut hist);
        *out = mode_of(&hist);
    }
}

fn sliding_row(grid: &SampleGrid, window: Window, y: u32, row: &mut [u8]) {
    let w = grid.width();
    let off = window.offset();
    let (y0, y1) = window.clip_axis(y, grid.height());

    let mut hist = GrayHistogram::new();
    accumulate(grid, window, 0, y, &mut hist);
    row[0] = mode_of(&hist);

    for x in 1..w {
        // Column x - 1 - off leaves the window.
        if x > off {
            let cx = x - 1 - off;
            for ny in y0..=y1 {
                hist.remove(grid.get_sample_unchecked(cx, ny));
            }
        }
        // Column x + off enters it.
        if let Some(cx) = x.checked_add(off).filter(|&cx| cx < w) {
            for ny in y0..=y1 {
                hist.add(grid.get_sample_unchecked(cx, ny));
            }
        }
        row[x as usize] = mode_of(&hist);
    }
}
