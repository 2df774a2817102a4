// SPDX-License-Identifier: MPL-2.0
//! Test helpers for comparing coordinates.
//!
//! Projections round-trip through `f64` math, so positions are compared with
//! a tolerance rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for longitudes and latitudes, in degrees.
pub const DEGREE_EPSILON: f64 = 1e-6;

/// Asserts that two `(longitude, latitude)` pairs are within
/// [`DEGREE_EPSILON`] of each other.
#[track_caller]
pub fn assert_lonlat_near(got: (f64, f64), want: (f64, f64)) {
    assert!(
        (got.0 - want.0).abs() <= DEGREE_EPSILON && (got.1 - want.1).abs() <= DEGREE_EPSILON,
        "expected ({}, {}), got ({}, {})",
        want.0,
        want.1,
        got.0,
        got.1
    );
}
