// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Camera**: Initial view and zoom bounds
//! - **Interaction**: Wheel, keyboard and click tolerances
//! - **Fly-to**: Animated camera moves
//! - **Data**: Remote endpoints, caching and timeouts

// ==========================================================================
// Camera Defaults
// ==========================================================================

/// Initial map center as `(longitude, latitude)`.
pub const DEFAULT_CENTER: (f64, f64) = (0.0, 20.0);

/// Initial zoom level.
pub const DEFAULT_ZOOM: f64 = 2.0;

/// Default lower zoom bound.
pub const DEFAULT_MIN_ZOOM: f64 = 2.0;

/// Default upper zoom bound.
pub const DEFAULT_MAX_ZOOM: f64 = 12.0;

/// Smallest zoom accepted from the config file.
pub const LIMIT_MIN_ZOOM: f64 = 0.0;

/// Largest zoom accepted from the config file.
pub const LIMIT_MAX_ZOOM: f64 = 19.0;

// ==========================================================================
// Interaction Defaults
// ==========================================================================

/// Zoom levels per mouse wheel line.
pub const DEFAULT_WHEEL_ZOOM_STEP: f64 = 0.5;

/// Minimum wheel zoom step.
pub const MIN_WHEEL_ZOOM_STEP: f64 = 0.1;

/// Maximum wheel zoom step.
pub const MAX_WHEEL_ZOOM_STEP: f64 = 2.0;

/// Pixels the map moves per arrow key press.
pub const KEYBOARD_PAN_STEP: f64 = 100.0;

/// A press and release closer than this (in pixels) is a click, not a drag.
pub const CLICK_TOLERANCE: f32 = 4.0;

// ==========================================================================
// Fly-to Defaults
// ==========================================================================

/// Zoom reached when flying to a wonder.
pub const FLY_TO_ZOOM: f64 = 8.0;

/// Duration of a fly-to animation in milliseconds.
pub const FLY_TO_DURATION_MS: u64 = 1500;

/// Padding around a country when zooming to its bounds, in pixels.
pub const FIT_BOUNDS_PADDING: f64 = 20.0;

// ==========================================================================
// Data Defaults
// ==========================================================================

/// Base URL of the REST Countries API.
pub const DEFAULT_REST_COUNTRIES_URL: &str = "https://restcountries.com/v3.1";

/// Hours a cached statistics download stays fresh.
pub const DEFAULT_STATS_CACHE_HOURS: u32 = 24;

/// Maximum cache age accepted from the config file (30 days).
pub const MAX_STATS_CACHE_HOURS: u32 = 24 * 30;

/// HTTP request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Minimum HTTP request timeout in seconds.
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum HTTP request timeout in seconds.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_defaults_are_consistent() {
        assert!(LIMIT_MIN_ZOOM <= DEFAULT_MIN_ZOOM);
        assert!(DEFAULT_MIN_ZOOM <= DEFAULT_ZOOM);
        assert!(DEFAULT_ZOOM <= DEFAULT_MAX_ZOOM);
        assert!(DEFAULT_MAX_ZOOM <= LIMIT_MAX_ZOOM);
        assert!(FLY_TO_ZOOM <= DEFAULT_MAX_ZOOM);
    }

    #[test]
    fn wheel_step_defaults_are_consistent() {
        assert!(MIN_WHEEL_ZOOM_STEP <= DEFAULT_WHEEL_ZOOM_STEP);
        assert!(DEFAULT_WHEEL_ZOOM_STEP <= MAX_WHEEL_ZOOM_STEP);
    }

    #[test]
    fn timeout_defaults_are_consistent() {
        assert!(MIN_REQUEST_TIMEOUT_SECS <= DEFAULT_REQUEST_TIMEOUT_SECS);
        assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
        assert!(DEFAULT_STATS_CACHE_HOURS <= MAX_STATS_CACHE_HOURS);
    }
}
