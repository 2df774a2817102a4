// SPDX-License-Identifier: MPL-2.0
//! Map camera: center, fractional zoom and viewport size, plus the animated
//! fly-to transition.
//!
//! All screen coordinates are relative to the top-left corner of the map
//! canvas. The camera never shows anything outside the Mercator square.

use super::projection::{project, unproject, world_size};
use crate::app::config::{DEFAULT_CENTER, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_ZOOM};
use geo::Rect;
use std::time::{Duration, Instant};

/// Zoom bounds, guaranteed ordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomRange {
    min: f64,
    max: f64,
}

impl ZoomRange {
    /// Creates a range, swapping the bounds if they are reversed.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    #[must_use]
    pub fn clamp(self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }

    pub fn min(self) -> f64 {
        self.min
    }

    pub fn max(self) -> f64 {
        self.max
    }
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM)
    }
}

/// In-progress fly-to animation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Flight {
    from: ((f64, f64), f64),
    to: ((f64, f64), f64),
    started_at: Instant,
    duration: Duration,
}

impl Flight {
    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

/// Cubic ease-in-out on `[0, 1]`.
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// `(lon, lat)` at the center of the viewport.
    center: (f64, f64),
    zoom: f64,
    range: ZoomRange,
    /// Viewport `(width, height)` in pixels; zero until the first layout.
    viewport: (f64, f64),
    flight: Option<Flight>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(ZoomRange::default())
    }
}

impl Camera {
    pub fn new(range: ZoomRange) -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: range.clamp(DEFAULT_ZOOM),
            range,
            viewport: (0.0, 0.0),
            flight: None,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn range(&self) -> ZoomRange {
        self.range
    }

    pub fn viewport(&self) -> (f64, f64) {
        self.viewport
    }

    pub fn is_flying(&self) -> bool {
        self.flight.is_some()
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < self.range.max()
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > self.range.min()
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = (width.max(0.0), height.max(0.0));
        self.clamp_center();
    }

    /// Jumps to `center` at `zoom`, cancelling any flight.
    pub fn set_view(&mut self, center: (f64, f64), zoom: f64) {
        self.flight = None;
        self.center = center;
        self.zoom = self.range.clamp(zoom);
        self.clamp_center();
    }

    /// Center in world pixels at the current zoom.
    fn center_px(&self) -> (f64, f64) {
        project(self.center.0, self.center.1, self.zoom)
    }

    /// Top-left corner of the viewport in world pixels.
    pub fn origin_px(&self) -> (f64, f64) {
        let (cx, cy) = self.center_px();
        (cx - self.viewport.0 / 2.0, cy - self.viewport.1 / 2.0)
    }

    pub fn lonlat_to_screen(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (x, y) = project(lon, lat, self.zoom);
        let (ox, oy) = self.origin_px();
        (x - ox, y - oy)
    }

    pub fn screen_to_lonlat(&self, x: f64, y: f64) -> (f64, f64) {
        let (ox, oy) = self.origin_px();
        unproject(ox + x, oy + y, self.zoom)
    }

    /// Moves the map content by `(dx, dy)` screen pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.flight = None;
        let (cx, cy) = self.center_px();
        self.center = unproject(cx - dx, cy - dy, self.zoom);
        self.clamp_center();
    }

    /// Changes the zoom by `delta` levels keeping the geographic point under
    /// `anchor` (screen pixels) fixed.
    pub fn zoom_at(&mut self, delta: f64, anchor: (f64, f64)) {
        self.flight = None;
        let new_zoom = self.range.clamp(self.zoom + delta);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }

        let (lon, lat) = self.screen_to_lonlat(anchor.0, anchor.1);
        let (px, py) = project(lon, lat, new_zoom);
        let center_px = (
            px - anchor.0 + self.viewport.0 / 2.0,
            py - anchor.1 + self.viewport.1 / 2.0,
        );
        self.zoom = new_zoom;
        self.center = unproject(center_px.0, center_px.1, new_zoom);
        self.clamp_center();
    }

    /// Zooms by `delta` levels around the viewport center.
    pub fn zoom_by(&mut self, delta: f64) {
        let anchor = (self.viewport.0 / 2.0, self.viewport.1 / 2.0);
        self.zoom_at(delta, anchor);
    }

    /// One zoom level in, around the viewport center.
    pub fn zoom_in(&mut self) {
        self.zoom_by(1.0);
    }

    /// One zoom level out, around the viewport center.
    pub fn zoom_out(&mut self) {
        self.zoom_by(-1.0);
    }

    /// Starts an eased transition to `target` at `zoom`.
    pub fn fly_to(&mut self, target: (f64, f64), zoom: f64, duration: Duration, now: Instant) {
        self.flight = Some(Flight {
            from: (self.center, self.zoom),
            to: (target, self.range.clamp(zoom)),
            started_at: now,
            duration,
        });
    }

    /// Advances the flight. Returns `true` on the tick that lands.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(flight) = self.flight else {
            return false;
        };

        let t = flight.progress(now);
        let eased = ease_in_out(t);
        let ((from_lon, from_lat), from_zoom) = flight.from;
        let ((to_lon, to_lat), to_zoom) = flight.to;

        self.center = (lerp(from_lon, to_lon, eased), lerp(from_lat, to_lat, eased));
        self.zoom = self.range.clamp(lerp(from_zoom, to_zoom, eased));
        self.clamp_center();

        if t >= 1.0 {
            self.flight = None;
            return true;
        }
        false
    }

    /// Fits `bounds` (lon/lat degrees) into the viewport with `padding`
    /// pixels on each side. The zoom snaps down to a whole level.
    pub fn fit_bounds(&mut self, bounds: &Rect<f64>, padding: f64) {
        self.flight = None;
        let (min, max) = (bounds.min(), bounds.max());
        let (x0, y0) = project(min.x, max.y, 0.0);
        let (x1, y1) = project(max.x, min.y, 0.0);
        let (span_x, span_y) = ((x1 - x0).abs(), (y1 - y0).abs());

        let avail_w = (self.viewport.0 - 2.0 * padding).max(1.0);
        let avail_h = (self.viewport.1 - 2.0 * padding).max(1.0);

        let zoom = if span_x <= f64::EPSILON && span_y <= f64::EPSILON {
            self.range.max()
        } else {
            let scale_x = if span_x > f64::EPSILON { avail_w / span_x } else { f64::INFINITY };
            let scale_y = if span_y > f64::EPSILON { avail_h / span_y } else { f64::INFINITY };
            scale_x.min(scale_y).log2().floor()
        };

        let zoom = self.range.clamp(zoom);
        let mid = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
        self.center = unproject(mid.0, mid.1, 0.0);
        self.zoom = zoom;
        self.clamp_center();
    }

    /// Keeps the viewport inside the world square. When the world is smaller
    /// than the viewport along an axis it is centered on that axis.
    fn clamp_center(&mut self) {
        let (w, h) = self.viewport;
        if w <= 0.0 || h <= 0.0 {
            return;
        }

        let size = world_size(self.zoom);
        let (cx, cy) = self.center_px();
        let clamp_axis = |value: f64, extent: f64| {
            if extent >= size {
                size / 2.0
            } else {
                value.clamp(extent / 2.0, size - extent / 2.0)
            }
        };

        self.center = unproject(clamp_axis(cx, w), clamp_axis(cy, h), self.zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, assert_lonlat_near};

    fn camera() -> Camera {
        let mut camera = Camera::new(ZoomRange::new(2.0, 12.0));
        camera.set_viewport(800.0, 600.0);
        camera
    }

    #[test]
    fn zoom_range_orders_bounds() {
        let range = ZoomRange::new(12.0, 2.0);
        assert_eq!((range.min(), range.max()), (2.0, 12.0));
        assert_eq!(range.clamp(20.0), 12.0);
    }

    #[test]
    fn screen_round_trip() {
        let mut camera = camera();
        camera.set_view((10.0, 45.0), 5.0);
        let (x, y) = camera.lonlat_to_screen(12.0, 44.0);
        assert_lonlat_near(camera.screen_to_lonlat(x, y), (12.0, 44.0));

        let (cx, cy) = camera.lonlat_to_screen(10.0, 45.0);
        assert_abs_diff_eq!(cx, 400.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cy, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn pan_moves_content_with_the_cursor() {
        let mut camera = camera();
        camera.set_view((0.0, 0.0), 5.0);
        camera.pan_by(100.0, 0.0);
        // Content moved right, so the center is now further west.
        assert!(camera.center().0 < 0.0);
        assert_abs_diff_eq!(camera.center().1, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn zoom_at_keeps_anchor_fixed() {
        let mut camera = camera();
        camera.set_view((10.0, 45.0), 5.0);
        let anchor = (600.0, 150.0);
        let before = camera.screen_to_lonlat(anchor.0, anchor.1);

        camera.zoom_at(1.0, anchor);

        assert_abs_diff_eq!(camera.zoom(), 6.0);
        let after = camera.screen_to_lonlat(anchor.0, anchor.1);
        assert_abs_diff_eq!(before.0, after.0, epsilon = 1e-6);
        assert_abs_diff_eq!(before.1, after.1, epsilon = 1e-6);
    }

    #[test]
    fn zoom_is_clamped_to_range() {
        let mut camera = camera();
        camera.zoom_by(-5.0);
        assert_eq!(camera.zoom(), 2.0);
        assert!(!camera.can_zoom_out());
        camera.zoom_by(50.0);
        assert_eq!(camera.zoom(), 12.0);
        assert!(!camera.can_zoom_in());
    }

    #[test]
    fn view_never_leaves_the_world() {
        let mut camera = camera();
        camera.set_view((179.0, 84.0), 4.0);
        let (ox, oy) = camera.origin_px();
        let size = world_size(camera.zoom());
        assert!(ox >= -1e-6 && oy >= -1e-6);
        assert!(ox + 800.0 <= size + 1e-6);
        assert!(oy + 600.0 <= size + 1e-6);
    }

    #[test]
    fn world_smaller_than_viewport_is_centered() {
        let mut camera = Camera::new(ZoomRange::new(2.0, 12.0));
        camera.set_viewport(2000.0, 1500.0);
        camera.set_view((100.0, 60.0), 2.0);
        assert_abs_diff_eq!(camera.center().0, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(camera.center().1, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn flight_lands_on_target() {
        let mut camera = camera();
        camera.set_view((0.0, 20.0), 2.0);
        let start = Instant::now();
        camera.fly_to((2.2945, 48.8584), 8.0, Duration::from_millis(1500), start);
        assert!(camera.is_flying());

        assert!(!camera.tick(start + Duration::from_millis(750)));
        let midway = camera.zoom();
        assert!(midway > 2.0 && midway < 8.0);

        assert!(camera.tick(start + Duration::from_millis(1500)));
        assert!(!camera.is_flying());
        assert_abs_diff_eq!(camera.zoom(), 8.0);
        assert_lonlat_near(camera.center(), (2.2945, 48.8584));
    }

    #[test]
    fn manual_pan_cancels_flight() {
        let mut camera = camera();
        camera.fly_to((50.0, 10.0), 6.0, Duration::from_secs(1), Instant::now());
        camera.pan_by(10.0, 10.0);
        assert!(!camera.is_flying());
        assert!(!camera.tick(Instant::now()));
    }

    #[test]
    fn fit_bounds_shows_the_whole_box() {
        let mut camera = camera();
        let france = Rect::new(geo::coord! { x: -4.7, y: 42.4 }, geo::coord! { x: 8.2, y: 51.1 });
        camera.fit_bounds(&france, 20.0);

        assert_eq!(camera.zoom().fract(), 0.0);
        for (lon, lat) in [(-4.7, 42.4), (8.2, 51.1)] {
            let (x, y) = camera.lonlat_to_screen(lon, lat);
            assert!((0.0..=800.0).contains(&x), "x = {x}");
            assert!((0.0..=600.0).contains(&y), "y = {y}");
        }
    }

    #[test]
    fn ease_is_monotonic_with_fixed_ends() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        let mut previous = 0.0;
        for i in 1..=10 {
            let value = ease_in_out(f64::from(i) / 10.0);
            assert!(value >= previous);
            previous = value;
        }
    }
}
