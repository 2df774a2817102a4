// SPDX-License-Identifier: MPL-2.0
//! Slippy-map model: projection, camera, raster tiles and the scale bar.

pub mod camera;
pub mod projection;
mod scale_bar;
mod tile_cache;
mod tiles;

pub use camera::{Camera, ZoomRange};
pub use scale_bar::{nice_round, scale_bar, ScaleBar, SCALE_BAR_MAX_WIDTH};
pub use tile_cache::{
    disk_name, download, fetch_tile, TileCache, TileCacheStats, TileRequest, DEFAULT_MAX_TILES,
    TILE_DIR,
};
pub use tiles::{tile_screen_rect, tile_zoom, visible_tiles, TileId, TileStyle};
