//! Mode filter regression test
//!
//! Tests the oil-paint mode filter: output shape, membership of every
//! output value in its clipped neighborhood, tie-breaking toward the
//! smallest value, border clipping, parameter validation, and agreement
//! between the sliding and reference strategies.

use oleo_core::{Raster, SampleGrid};
use oleo_filter::{
    FilterError, ModeFilterOptions, ModeStrategy, mode_filter, mode_filter_reference,
    mode_filter_with,
};
use oleo_io::ImageFormat;
use oleo_test::{RegParams, synth};

/// Window sizes exercised on every random grid.
const WINDOWS: [i32; 6] = [1, 3, 5, 7, 9, 11];

/// Values present in the clipped neighborhood of `(x, y)`.
fn neighborhood_values(grid: &SampleGrid, x: u32, y: u32, size: i32) -> Vec<u8> {
    let off = (size - 1) / 2;
    let mut values = Vec::new();
    for dy in -off..=off {
        for dx in -off..=off {
            let nx = x as i64 + dx as i64;
            let ny = y as i64 + dy as i64;
            if nx >= 0 && ny >= 0 && nx < grid.width() as i64 && ny < grid.height() as i64 {
                values.push(grid.get_sample_unchecked(nx as u32, ny as u32));
            }
        }
    }
    values
}

#[test]
fn mode_reg_shape_and_membership() {
    let mut rp = RegParams::new("mode_membership");

    for (i, &(w, h)) in [(1, 1), (1, 9), (9, 1), (13, 8), (32, 21)].iter().enumerate() {
        let grid = synth::make_random(w, h, 6, 100 + i as u64);
        for size in WINDOWS {
            let out = mode_filter(&grid, size).expect("mode_filter");
            rp.compare_values(w as f64, out.width() as f64, 0.0);
            rp.compare_values(h as f64, out.height() as f64, 0.0);

            let mut outside = 0;
            for y in 0..h {
                for x in 0..w {
                    let v = out.get_sample_unchecked(x, y);
                    if !neighborhood_values(&grid, x, y, size).contains(&v) {
                        outside += 1;
                    }
                }
            }
            rp.compare_values(0.0, outside as f64, 0.0);
        }
    }

    assert!(rp.cleanup(), "mode_membership regression test failed");
}

#[test]
fn mode_reg_determinism() {
    let mut rp = RegParams::new("mode_determinism");

    let grid = synth::make_random(40, 30, 8, 7);
    let first = mode_filter(&grid, 5).expect("first run");
    for _ in 0..3 {
        let again = mode_filter(&grid, 5).expect("repeat run");
        rp.compare_grids(&first, &again);
    }

    assert!(rp.cleanup(), "mode_determinism regression test failed");
}

#[test]
fn mode_reg_uniform_and_single_pixel() {
    let mut rp = RegParams::new("mode_uniform");

    let uniform = synth::make_uniform(123, 17, 11);
    for size in [1, 3, 7, 11, 25] {
        let out = mode_filter(&uniform, size).expect("uniform");
        rp.compare_grids(&uniform, &out);
    }

    for value in [0u8, 77, 255] {
        let pixel = synth::make_uniform(value, 1, 1);
        for size in [1, 3, 11, 101] {
            let out = mode_filter(&pixel, size).expect("single pixel");
            rp.compare_grids(&pixel, &out);
        }
    }

    assert!(rp.cleanup(), "mode_uniform regression test failed");
}

#[test]
fn mode_reg_tie_break() {
    let mut rp = RegParams::new("mode_tie_break");

    // Full neighborhood of the center: 5 x4, 10 x3, 20 x2.
    let grid = synth::grid_from_rows(&[&[10, 10, 20], &[20, 5, 5], &[5, 5, 10]]);
    let out = mode_filter(&grid, 3).expect("mode_filter");
    rp.compare_values(5.0, out.get_sample_unchecked(1, 1) as f64, 0.0);

    // 10, 20 and 30 appear twice each; the smallest wins.
    let grid = synth::grid_from_rows(&[&[30, 10, 30], &[10, 20, 20], &[0, 40, 50]]);
    for strategy in [ModeStrategy::Reference, ModeStrategy::Sliding] {
        let out = mode_filter_with(&grid, 3, &ModeFilterOptions::sequential(strategy))
            .expect("mode_filter_with");
        rp.compare_values(10.0, out.get_sample_unchecked(1, 1) as f64, 0.0);
    }

    // Checkerboard of single cells: every clipped border neighborhood is an
    // even split, so the darker value wins; interior pixels keep their own.
    let board = synth::make_checkerboard(4, 4, 1, 10, 200);
    let out = mode_filter(&board, 3).expect("checkerboard");
    let expected = synth::grid_from_rows(&[
        &[10, 10, 10, 10],
        &[10, 10, 200, 10],
        &[10, 200, 10, 10],
        &[10, 10, 10, 10],
    ]);
    rp.compare_grids(&expected, &out);

    assert!(rp.cleanup(), "mode_tie_break regression test failed");
}

#[test]
fn mode_reg_border_clipping() {
    let mut rp = RegParams::new("mode_clipping");

    // Corner neighborhood is {9, 7, 7, 7}, not padded with zeros.
    let grid = synth::grid_from_rows(&[&[9, 7, 7], &[7, 7, 7], &[7, 7, 7]]);
    let out = mode_filter(&grid, 3).expect("mode_filter");
    rp.compare_values(7.0, out.get_sample_unchecked(0, 0) as f64, 0.0);
    rp.compare_grids(&synth::make_uniform(7, 3, 3), &out);

    // Zero padding would turn the corner into 0; clipping keeps 1.
    let grid = synth::grid_from_rows(&[&[1, 1, 0], &[1, 0, 0], &[0, 0, 0]]);
    let out = mode_filter(&grid, 3).expect("mode_filter");
    rp.compare_values(1.0, out.get_sample_unchecked(0, 0) as f64, 0.0);

    assert!(rp.cleanup(), "mode_clipping regression test failed");
}

#[test]
fn mode_reg_parameter_rejection() {
    let grid = synth::make_uniform(1, 4, 4);
    for size in [4, -1, 0, 2, -3, 12] {
        assert!(
            matches!(mode_filter(&grid, size), Err(FilterError::InvalidParameter(_))),
            "window {size} should be rejected"
        );
    }

    let empty = SampleGrid::from_vec(0, 5, Vec::new()).expect("zero-area grid");
    assert!(matches!(
        mode_filter(&empty, 3),
        Err(FilterError::EmptyInput { width: 0, height: 5 })
    ));
    let empty = SampleGrid::from_vec(5, 0, Vec::new()).expect("zero-area grid");
    assert!(matches!(
        mode_filter_reference(&empty, 3),
        Err(FilterError::EmptyInput { width: 5, height: 0 })
    ));

    // The window is validated before the grid.
    assert!(matches!(
        mode_filter(&empty, 4),
        Err(FilterError::InvalidParameter(_))
    ));
}

#[test]
fn mode_reg_large_window() {
    let mut rp = RegParams::new("mode_large_window");

    let grid = synth::make_random(6, 4, 5, 99);
    let global = grid.gray_histogram().mode().expect("non-empty grid");
    let expected = synth::make_uniform(global, 6, 4);

    for size in [11, 13, 101] {
        rp.compare_grids(&expected, &mode_filter(&grid, size).expect("sliding"));
        rp.compare_grids(&expected, &mode_filter_reference(&grid, size).expect("reference"));
    }

    assert!(rp.cleanup(), "mode_large_window regression test failed");
}

#[test]
fn mode_reg_strategies_agree() {
    let mut rp = RegParams::new("mode_strategies");

    let sliding_par = ModeFilterOptions::default();
    let sliding_seq = ModeFilterOptions::sequential(ModeStrategy::Sliding);
    let reference_par = ModeFilterOptions {
        strategy: ModeStrategy::Reference,
        parallel: true,
    };

    for (i, &(w, h, levels)) in [(23, 17, 3), (50, 9, 2), (7, 40, 256), (64, 48, 12)]
        .iter()
        .enumerate()
    {
        let grid = synth::make_random(w, h, levels, 1000 + i as u64);
        for size in WINDOWS {
            let reference = mode_filter_reference(&grid, size).expect("reference");
            for options in [&sliding_par, &sliding_seq, &reference_par] {
                let out = mode_filter_with(&grid, size, options).expect("mode_filter_with");
                rp.compare_grids(&reference, &out);
            }
        }
    }

    assert!(rp.cleanup(), "mode_strategies regression test failed");
}

#[test]
fn mode_reg_smoothing_output() {
    let mut rp = RegParams::new("mode_smoothing");

    let gradient = synth::make_gradient(64, 32);
    let out = mode_filter(&gradient, 7).expect("gradient");
    // A ramp with distinct columns has no repeats within a row; every
    // neighborhood ties, so the darkest (leftmost) column wins.
    for x in 0..64u32 {
        let left = x.saturating_sub(3);
        rp.compare_values(
            gradient.get_sample_unchecked(left, 0) as f64,
            out.get_sample_unchecked(x, 16) as f64,
            0.0,
        );
    }
    rp.write_raster_and_check(&Raster::Gray(out), ImageFormat::Png)
        .expect("write gradient result");

    let photo = synth::make_random_rgb(48, 32, 5);
    let gray = photo.to_luminance();
    let painted = mode_filter(&gray, 5).expect("painted");
    rp.write_raster_and_check(&Raster::Gray(painted), ImageFormat::Png)
        .expect("write painted result");

    assert!(rp.cleanup(), "mode_smoothing regression test failed");
}
