// SPDX-License-Identifier: MPL-2.0
//! Raster base map styles and visible tile enumeration.

use super::camera::Camera;
use super::projection::TILE_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A base map style the user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TileStyle {
    Terrain,
    Standard,
    Dark,
    #[default]
    Light,
    Satellite,
    Toner,
    Comic,
    /// Vector layers only.
    None,
}

/// Address of one tile in the XYZ scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl TileId {
    /// Top-left corner of the tile in world pixels at the tile's own zoom.
    pub fn world_origin(self) -> (f64, f64) {
        (f64::from(self.x) * TILE_SIZE, f64::from(self.y) * TILE_SIZE)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

impl TileStyle {
    pub const ALL: [TileStyle; 8] = [
        TileStyle::Terrain,
        TileStyle::Standard,
        TileStyle::Dark,
        TileStyle::Light,
        TileStyle::Satellite,
        TileStyle::Toner,
        TileStyle::Comic,
        TileStyle::None,
    ];

    pub fn i18n_key(self) -> &'static str {
        match self {
            TileStyle::Terrain => "map-style-terrain",
            TileStyle::Standard => "map-style-standard",
            TileStyle::Dark => "map-style-dark",
            TileStyle::Light => "map-style-light",
            TileStyle::Satellite => "map-style-satellite",
            TileStyle::Toner => "map-style-toner",
            TileStyle::Comic => "map-style-comic",
            TileStyle::None => "map-style-none",
        }
    }

    /// URL template with `{s}`, `{z}`, `{x}`, `{y}` and `{r}` placeholders.
    pub fn url_template(self) -> Option<&'static str> {
        match self {
            TileStyle::Terrain => Some("https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png"),
            TileStyle::Standard => {
                Some("https://{s}.basemaps.cartocdn.com/rastertiles/voyager/{z}/{x}/{y}{r}.png")
            }
            TileStyle::Dark => Some("https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png"),
            TileStyle::Light => {
                Some("https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png")
            }
            TileStyle::Satellite => Some(
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
            ),
            TileStyle::Toner => {
                Some("https://tiles.stadiamaps.com/tiles/stamen_toner/{z}/{x}/{y}{r}.png")
            }
            TileStyle::Comic => Some("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"),
            TileStyle::None => None,
        }
    }

    pub fn subdomains(self) -> &'static [&'static str] {
        match self {
            TileStyle::Terrain | TileStyle::Comic => &["a", "b", "c"],
            TileStyle::Standard | TileStyle::Dark | TileStyle::Light => &["a", "b", "c", "d"],
            TileStyle::Satellite | TileStyle::Toner | TileStyle::None => &[],
        }
    }

    pub fn max_zoom(self) -> u8 {
        match self {
            TileStyle::Terrain => 17,
            TileStyle::Satellite => 18,
            TileStyle::Comic => 19,
            TileStyle::Standard
            | TileStyle::Dark
            | TileStyle::Light
            | TileStyle::Toner
            | TileStyle::None => 20,
        }
    }

    pub fn attribution(self) -> &'static str {
        match self {
            TileStyle::Terrain => "© OpenStreetMap contributors, SRTM | © OpenTopoMap (CC-BY-SA)",
            TileStyle::Standard | TileStyle::Dark | TileStyle::Light => {
                "© OpenStreetMap contributors © CARTO"
            }
            TileStyle::Satellite => {
                "Tiles © Esri, Maxar, Earthstar Geographics, and the GIS User Community"
            }
            TileStyle::Toner => "© Stadia Maps © Stamen Design © OpenMapTiles © OpenStreetMap",
            TileStyle::Comic => "© OpenStreetMap contributors",
            TileStyle::None => "",
        }
    }

    /// Concrete URL for `tile`, or `None` for the vector-only style.
    pub fn tile_url(self, tile: TileId) -> Option<String> {
        let template = self.url_template()?;
        let subdomains = self.subdomains();
        let subdomain = if subdomains.is_empty() {
            ""
        } else {
            subdomains[(tile.x as usize + tile.y as usize) % subdomains.len()]
        };

        Some(
            template
                .replace("{s}", subdomain)
                .replace("{z}", &tile.z.to_string())
                .replace("{x}", &tile.x.to_string())
                .replace("{y}", &tile.y.to_string())
                .replace("{r}", ""),
        )
    }
}

/// Integer zoom at which tiles are fetched for the camera's zoom.
pub fn tile_zoom(zoom: f64, style: TileStyle) -> u8 {
    let z = zoom.floor().clamp(0.0, f64::from(style.max_zoom()));
    z as u8
}

/// Tiles covering the viewport, row-major from the top-left.
///
/// The world is not repeated horizontally; tiles outside `0..2^z` are
/// skipped.
pub fn visible_tiles(camera: &Camera, style: TileStyle) -> Vec<TileId> {
    if style.url_template().is_none() {
        return Vec::new();
    }
    let (width, height) = camera.viewport();
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }

    let z = tile_zoom(camera.zoom(), style);
    let scale = (camera.zoom() - f64::from(z)).exp2();
    let (ox, oy) = camera.origin_px();
    let tile_px = TILE_SIZE * scale;
    let count = 1_i64 << z;

    let first_x = ((ox / tile_px).floor() as i64).max(0);
    let first_y = ((oy / tile_px).floor() as i64).max(0);
    let last_x = (((ox + width) / tile_px).ceil() as i64 - 1).min(count - 1);
    let last_y = (((oy + height) / tile_px).ceil() as i64 - 1).min(count - 1);

    let mut tiles = Vec::new();
    for y in first_y..=last_y {
        for x in first_x..=last_x {
            tiles.push(TileId {
                z,
                x: x as u32,
                y: y as u32,
            });
        }
    }
    tiles
}

/// Screen rectangle `(x, y, size)` of `tile` under `camera`.
pub fn tile_screen_rect(camera: &Camera, tile: TileId) -> (f64, f64, f64) {
    let scale = (camera.zoom() - f64::from(tile.z)).exp2();
    let (ox, oy) = camera.origin_px();
    let (wx, wy) = tile.world_origin();
    (wx * scale - ox, wy * scale - oy, TILE_SIZE * scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::camera::ZoomRange;

    #[test]
    fn url_substitutes_placeholders() {
        let tile = TileId { z: 3, x: 4, y: 2 };
        assert_eq!(
            TileStyle::Light.tile_url(tile).as_deref(),
            Some("https://c.basemaps.cartocdn.com/light_all/3/4/2.png")
        );
        assert_eq!(
            TileStyle::Satellite.tile_url(tile).as_deref(),
            Some("https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/3/2/4")
        );
        assert_eq!(TileStyle::None.tile_url(tile), None);
    }

    #[test]
    fn subdomain_rotates_with_position() {
        let a = TileStyle::Comic.tile_url(TileId { z: 1, x: 0, y: 0 });
        let b = TileStyle::Comic.tile_url(TileId { z: 1, x: 1, y: 0 });
        assert!(a.is_some_and(|url| url.starts_with("https://a.")));
        assert!(b.is_some_and(|url| url.starts_with("https://b.")));
    }

    #[test]
    fn tile_zoom_respects_style_maximum() {
        assert_eq!(tile_zoom(2.7, TileStyle::Light), 2);
        assert_eq!(tile_zoom(19.5, TileStyle::Terrain), 17);
    }

    #[test]
    fn whole_world_at_zoom_two() {
        let mut camera = Camera::new(ZoomRange::new(2.0, 12.0));
        camera.set_viewport(1024.0, 1024.0);
        camera.set_view((0.0, 0.0), 2.0);
        let tiles = visible_tiles(&camera, TileStyle::Light);
        assert_eq!(tiles.len(), 16);
        assert_eq!(tiles[0], TileId { z: 2, x: 0, y: 0 });
        assert_eq!(tiles[15], TileId { z: 2, x: 3, y: 3 });
    }

    #[test]
    fn no_tiles_without_raster_style() {
        let mut camera = Camera::default();
        camera.set_viewport(800.0, 600.0);
        assert!(visible_tiles(&camera, TileStyle::None).is_empty());
    }

    #[test]
    fn tiles_are_scaled_between_levels() {
        let mut camera = Camera::new(ZoomRange::new(2.0, 12.0));
        camera.set_viewport(800.0, 600.0);
        camera.set_view((0.0, 0.0), 4.5);
        let tiles = visible_tiles(&camera, TileStyle::Dark);
        assert!(tiles.iter().all(|t| t.z == 4));
        let (_, _, size) = tile_screen_rect(&camera, tiles[0]);
        assert!((size - 256.0 * 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn style_round_trips_through_kebab_case() {
        let json = serde_json::to_string(&TileStyle::Satellite).expect("serialize");
        assert_eq!(json, "\"satellite\"");
    }
}
