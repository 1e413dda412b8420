//! oleo-test - Regression test framework for oleo
//!
//! Supports three modes, chosen with the `REGTEST_MODE` environment variable:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files (default)
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use oleo_test::{RegParams, synth};
//!
//! let mut rp = RegParams::new("mode");
//! let grid = synth::make_uniform(7, 10, 10);
//! rp.compare_values(7.0, grid.get_sample(0, 0).unwrap() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! Test images are synthesized in-process by [`synth`], so no binary
//! fixtures are checked in.

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // oleo-test is at crates/oleo-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
