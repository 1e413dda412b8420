//! oleo-filter - Mode (oil-paint) filtering
//!
//! Replaces every sample by the most frequent value of the square,
//! border-clipped neighborhood around it:
//!
//! - [`Window`] - validated odd window size and neighborhood clipping
//! - [`mode_filter`] - sliding-histogram, row-parallel implementation
//! - [`mode_filter_reference`] - per-pixel histogram rebuild
//! - [`neighborhood_mode`] - mode of a single neighborhood
//!
//! Ties between equally frequent values always resolve to the smallest
//! value, whatever strategy or thread count is used.

mod error;
pub mod mode;
pub mod window;

pub use error::{FilterError, FilterResult};
pub use window::Window;

pub use mode::{
    DEFAULT_WINDOW_SIZE, ModeFilterOptions, ModeStrategy, mode_filter, mode_filter_reference,
    mode_filter_with, neighborhood_mode,
};
