//! Oil-paint effect settings

use crate::{OleoError, OleoResult};
use oleo_filter::{DEFAULT_WINDOW_SIZE, ModeFilterOptions};

/// Smallest window offered to users.
pub const MIN_WINDOW: i32 = 3;
/// Largest window offered to users.
pub const MAX_WINDOW: i32 = 11;

/// Settings for [`oil_paint`](crate::oil_paint).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OilPaintConfig {
    /// Side of the square neighborhood
    pub window_size: i32,
    /// Histogram strategy and threading
    pub options: ModeFilterOptions,
}

impl Default for OilPaintConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            options: ModeFilterOptions::default(),
        }
    }
}

impl OilPaintConfig {
    /// Create a config with an odd window in `MIN_WINDOW..=MAX_WINDOW`.
    ///
    /// # Errors
    ///
    /// Returns [`OleoError::Config`] if the size is even or out of range.
    pub fn new(window_size: i32) -> OleoResult<Self> {
        let config = Self::unchecked(window_size);
        config.validate()?;
        Ok(config)
    }

    /// Create a config without the range check.
    ///
    /// The filter still rejects even and non-positive sizes.
    pub fn unchecked(window_size: i32) -> Self {
        Self {
            window_size,
            ..Self::default()
        }
    }

    /// Replace the filter options.
    pub fn with_options(mut self, options: ModeFilterOptions) -> Self {
        self.options = options;
        self
    }

    /// Check the window against the interactive range.
    pub fn validate(&self) -> OleoResult<()> {
        let size = self.window_size;
        if !(MIN_WINDOW..=MAX_WINDOW).contains(&size) {
            return Err(OleoError::Config(format!(
                "window size {size} outside {MIN_WINDOW}..={MAX_WINDOW}"
            )));
        }
        if size % 2 == 0 {
            return Err(OleoError::Config(format!("window size {size} must be odd")));
        }
        Ok(())
    }
}
