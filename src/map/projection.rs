// SPDX-License-Identifier: MPL-2.0
//! Spherical Web Mercator in pixel space.
//!
//! At zoom `z` the whole world is a square of `TILE_SIZE · 2^z` pixels with
//! the origin at the north-west corner (180°W, 85.05°N).

use std::f64::consts::PI;

/// Edge length of one raster tile in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Latitude at which the Mercator square ends.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Equatorial circumference in metres at zoom 0 divided by the tile size.
pub const METERS_PER_PIXEL_AT_ZOOM_0: f64 = 156_543.033_92;

/// Width (and height) of the world in pixels at `zoom`.
pub fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * zoom.exp2()
}

/// Projects `(lon, lat)` degrees to world pixels at `zoom`.
///
/// Longitudes outside ±180° are not wrapped, so shifted rings project past
/// the edge of the world square.
pub fn project(lon: f64, lat: f64, zoom: f64) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (lon + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

/// Inverse of [`project`].
pub fn unproject(x: f64, y: f64, zoom: f64) -> (f64, f64) {
    let size = world_size(zoom);
    let lon = x / size * 360.0 - 180.0;
    let n = PI - 2.0 * PI * y / size;
    let lat = n.sinh().atan().to_degrees();
    (lon, lat)
}

/// Ground resolution in metres per pixel at `lat` and `zoom`.
pub fn meters_per_pixel(lat: f64, zoom: f64) -> f64 {
    METERS_PER_PIXEL_AT_ZOOM_0 * lat.to_radians().cos() / zoom.exp2()
}
