// SPDX-License-Identifier: MPL-2.0
//! Metric scale bar.

use super::camera::Camera;
use super::projection::meters_per_pixel;

/// Maximum width of the bar in pixels.
pub const SCALE_BAR_MAX_WIDTH: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBar {
    /// Bar width in pixels.
    pub width: f64,
    /// Ground distance covered by the bar.
    pub meters: f64,
    pub label: String,
}

/// Largest `1`, `2` or `5 × 10ⁿ` not above `value`.
pub fn nice_round(value: f64) -> f64 {
    if value <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let pow10 = 10f64.powi(value.log10().floor() as i32);
    let d = value / pow10;
    let step = if d >= 5.0 {
        5.0
    } else if d >= 2.0 {
        2.0
    } else {
        1.0
    };
    step * pow10
}

fn label(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{} km", meters / 1000.0)
    } else {
        format!("{meters} m")
    }
}

/// Computes the bar for the camera's center latitude.
pub fn scale_bar(camera: &Camera, max_width: f64) -> Option<ScaleBar> {
    let resolution = meters_per_pixel(camera.center().1, camera.zoom());
    let max_meters = resolution * max_width;
    let meters = nice_round(max_meters);
    if meters <= 0.0 {
        return None;
    }
    Some(ScaleBar {
        width: max_width * meters / max_meters,
        meters,
        label: label(meters),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::camera::ZoomRange;

    #[test]
    fn rounds_down_to_nice_values() {
        assert_eq!(nice_round(7_300.0), 5_000.0);
        assert_eq!(nice_round(3_900.0), 2_000.0);
        assert_eq!(nice_round(1_999.0), 1_000.0);
        assert_eq!(nice_round(0.0), 0.0);
    }

    #[test]
    fn labels_switch_to_kilometres() {
        assert_eq!(label(500.0), "500 m");
        assert_eq!(label(2_000.0), "2 km");
    }

    #[test]
    fn bar_fits_the_maximum_width() {
        let mut camera = Camera::new(ZoomRange::new(2.0, 12.0));
        camera.set_viewport(800.0, 600.0);
        camera.set_view((0.0, 0.0), 2.0);
        let bar = scale_bar(&camera, SCALE_BAR_MAX_WIDTH).expect("bar");
        // ~39 km/px at z2 on the equator: 100 px is ~3900 km.
        assert_eq!(bar.label, "2000 km");
        assert!(bar.width <= SCALE_BAR_MAX_WIDTH && bar.width > 50.0);
    }
}
