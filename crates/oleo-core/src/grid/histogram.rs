//! Gray-level histograms
//!
//! A fixed 256-bin occurrence count over 8-bit intensities, used both for
//! whole-grid statistics and as the running neighborhood count inside the
//! mode filter.

use super::SampleGrid;

/// Number of distinct 8-bit intensities.
const NUM_LEVELS: usize = 256;

/// Occurrence count of each intensity value 0..=255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayHistogram {
    counts: [u32; NUM_LEVELS],
    total: u32,
}

impl Default for GrayHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl GrayHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        GrayHistogram {
            counts: [0; NUM_LEVELS],
            total: 0,
        }
    }

    /// Count one occurrence of `val`.
    #[inline]
    pub fn add(&mut self, val: u8) {
        self.counts[val as usize] += 1;
        self.total += 1;
    }

    /// Count every sample of a slice.
    #[inline]
    pub fn add_all(&mut self, vals: &[u8]) {
        for &v in vals {
            self.add(v);
        }
    }

    /// Remove one occurrence of `val`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `val` has no occurrence to remove.
    #[inline]
    pub fn remove(&mut self, val: u8) {
        debug_assert!(self.counts[val as usize] > 0, "removing absent value {val}");
        self.counts[val as usize] -= 1;
        self.total -= 1;
    }

    /// Occurrences of `val`.
    #[inline]
    pub fn count(&self, val: u8) -> u32 {
        self.counts[val as usize]
    }

    /// Total number of counted samples.
    #[inline]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Whether nothing has been counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Reset every bin to zero.
    pub fn clear(&mut self) {
        self.counts = [0; NUM_LEVELS];
        self.total = 0;
    }

    /// Raw bin counts, indexed by intensity.
    pub fn counts(&self) -> &[u32; NUM_LEVELS] {
        &self.counts
    }

    /// The most frequent intensity.
    ///
    /// Bins are scanned in ascending order and only a strictly larger count
    /// replaces the current best, so among tied values the smallest wins.
    /// Returns `None` when the histogram is empty.
    pub fn mode(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        let mut best = 0usize;
        let mut best_count = 0u32;
        for (val, &count) in self.counts.iter().enumerate() {
            if count > best_count {
                best = val;
                best_count = count;
            }
        }
        Some(best as u8)
    }
}

impl SampleGrid {
    /// Histogram of every sample in the grid.
    pub fn gray_histogram(&self) -> GrayHistogram {
        let mut hist = GrayHistogram::new();
        hist.add_all(self.samples());
        hist
    }
}
