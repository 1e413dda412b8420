//! Synthetic test images
//!
//! Builders for the small deterministic grids and color images used by the
//! regression tests. Panics on invalid sizes, which is what a test wants.

use oleo_core::{RgbImage, SampleGrid};

/// Grid with every sample set to `value`.
pub fn make_uniform(value: u8, width: u32, height: u32) -> SampleGrid {
    SampleGrid::from_fn(width, height, |_, _| value).expect("valid test dimensions")
}

/// Horizontal ramp from 0 at the left edge to 255 at the right edge.
pub fn make_gradient(width: u32, height: u32) -> SampleGrid {
    let span = width.saturating_sub(1).max(1);
    SampleGrid::from_fn(width, height, |x, _| (x * 255 / span) as u8)
        .expect("valid test dimensions")
}

/// Checkerboard of `cell`-sized squares alternating `dark` and `light`.
pub fn make_checkerboard(width: u32, height: u32, cell: u32, dark: u8, light: u8) -> SampleGrid {
    let cell = cell.max(1);
    SampleGrid::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            dark
        } else {
            light
        }
    })
    .expect("valid test dimensions")
}

/// Grid of pseudo-random samples in `0..levels`, reproducible from `seed`.
///
/// A small number of levels produces many ties, which is what the mode
/// tie-break tests need.
pub fn make_random(width: u32, height: u32, levels: u16, seed: u64) -> SampleGrid {
    let levels = levels.clamp(1, 256) as u64;
    let mut rng = XorShift::new(seed);
    SampleGrid::from_fn(width, height, |_, _| (rng.next() % levels) as u8)
        .expect("valid test dimensions")
}

/// Color image with pseudo-random channels, reproducible from `seed`.
pub fn make_random_rgb(width: u32, height: u32, seed: u64) -> RgbImage {
    let mut rng = XorShift::new(seed);
    RgbImage::from_fn(width, height, |_, _| {
        let v = rng.next();
        (v as u8, (v >> 8) as u8, (v >> 16) as u8)
    })
    .expect("valid test dimensions")
}

/// Grid from literal rows, top to bottom.
pub fn grid_from_rows(rows: &[&[u8]]) -> SampleGrid {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    assert!(
        rows.iter().all(|r| r.len() as u32 == width),
        "rows must have equal length"
    );
    SampleGrid::from_vec(width, height, rows.concat()).expect("rows match dimensions")
}

/// xorshift64* generator; deterministic across platforms.
struct XorShift(u64);

impl XorShift {
    fn new(seed: u64) -> Self {
        // Zero is a fixed point of xorshift.
        Self(seed ^ 0x9E37_79B9_7F4A_7C15)
    }

    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}
