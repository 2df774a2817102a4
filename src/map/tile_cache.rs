// SPDX-License-Identifier: MPL-2.0
//! Raster tile cache.
//!
//! Decoded handles live in a bounded LRU keyed by tile id. Raw bytes are
//! also kept on disk under `<data dir>/tiles/`, named after the blake3 hash
//! of the tile URL, so tiles survive restarts.
//!
//! The cache belongs to one style at a time. Switching style drops every
//! entry and forgets failures, which is the only way a failed tile is
//! retried.

use super::tiles::{TileId, TileStyle};
use crate::error::{Error, Result};
use iced::widget::image;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Default number of decoded tiles kept in memory.
pub const DEFAULT_MAX_TILES: usize = 256;

/// Subdirectory of the data directory holding raw tile bytes.
pub const TILE_DIR: &str = "tiles";

/// One tile download to perform in the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileRequest {
    pub style: TileStyle,
    pub tile: TileId,
    pub url: String,
    pub disk_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub failures: u64,
}

pub struct TileCache {
    style: TileStyle,
    memory: LruCache<TileId, image::Handle>,
    pending: HashSet<TileId>,
    failed: HashSet<TileId>,
    disk_dir: Option<PathBuf>,
    stats: TileCacheStats,
}

impl std::fmt::Debug for TileCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileCache")
            .field("style", &self.style)
            .field("cached", &self.memory.len())
            .field("pending", &self.pending.len())
            .field("failed", &self.failed.len())
            .finish()
    }
}

impl Default for TileCache {
    fn default() -> Self {
        Self::new(TileStyle::default(), None, DEFAULT_MAX_TILES)
    }
}

impl TileCache {
    /// Creates a cache for `style`. `data_dir` enables the on-disk layer.
    #[must_use]
    pub fn new(style: TileStyle, data_dir: Option<&Path>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            style,
            memory: LruCache::new(capacity),
            pending: HashSet::new(),
            failed: HashSet::new(),
            disk_dir: data_dir.map(|dir| dir.join(TILE_DIR)),
            stats: TileCacheStats::default(),
        }
    }

    pub fn style(&self) -> TileStyle {
        self.style
    }

    pub fn stats(&self) -> TileCacheStats {
        self.stats
    }

    /// Switches style, dropping decoded tiles, pending requests and failures.
    pub fn set_style(&mut self, style: TileStyle) {
        if style == self.style {
            return;
        }
        tracing::debug!(?style, "switching base map style");
        self.style = style;
        self.memory.clear();
        self.pending.clear();
        self.failed.clear();
    }

    /// Looks up a decoded tile without touching the LRU order.
    pub fn peek(&self, tile: &TileId) -> Option<&image::Handle> {
        self.memory.peek(tile)
    }

    pub fn is_pending(&self, tile: &TileId) -> bool {
        self.pending.contains(tile)
    }

    pub fn has_failed(&self, tile: &TileId) -> bool {
        self.failed.contains(tile)
    }

    /// Returns requests for the tiles among `visible` that are neither
    /// cached, in flight, nor known to fail. Returned tiles become pending.
    pub fn request_missing(&mut self, visible: &[TileId]) -> Vec<TileRequest> {
        let mut requests = Vec::new();
        for tile in visible {
            if self.memory.get(tile).is_some() {
                self.stats.hits += 1;
                continue;
            }
            if self.pending.contains(tile) || self.failed.contains(tile) {
                continue;
            }
            let Some(url) = self.style.tile_url(*tile) else {
                continue;
            };
            self.stats.misses += 1;
            self.pending.insert(*tile);
            let disk_path = self.disk_dir.as_ref().map(|dir| dir.join(disk_name(&url)));
            requests.push(TileRequest {
                style: self.style,
                tile: *tile,
                url,
                disk_path,
            });
        }
        requests
    }

    /// Stores a downloaded tile. Results for a previous style are dropped.
    pub fn insert(&mut self, style: TileStyle, tile: TileId, bytes: Vec<u8>) {
        if style != self.style {
            return;
        }
        self.pending.remove(&tile);
        self.memory.put(tile, image::Handle::from_bytes(bytes));
    }

    /// Records a failed download so it is not retried for this style.
    pub fn mark_failed(&mut self, style: TileStyle, tile: TileId) {
        if style != self.style {
            return;
        }
        self.pending.remove(&tile);
        self.failed.insert(tile);
        self.stats.failures += 1;
    }

    pub fn len(&self) -> usize {
        self.memory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }
}

/// File name of a tile on disk.
pub fn disk_name(url: &str) -> String {
    blake3::hash(url.as_bytes()).to_hex().to_string()
}

/// GETs `url` and returns the body bytes.
pub async fn download(http: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let response = http.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Http {
            status: status.as_u16(),
        });
    }
    Ok(response.bytes().await?.to_vec())
}

/// Resolves a tile from disk, downloading and storing it when absent.
pub async fn fetch_tile(http: reqwest::Client, request: TileRequest) -> Result<Vec<u8>> {
    if let Some(path) = &request.disk_path {
        if let Ok(bytes) = tokio::fs::read(path).await {
            if !bytes.is_empty() {
                return Ok(bytes);
            }
        }
    }

    let bytes = download(&http, &request.url).await?;

    if let Some(path) = &request.disk_path {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        if let Err(err) = tokio::fs::write(path, &bytes).await {
            tracing::warn!(path = %path.display(), %err, "failed to store tile on disk");
        }
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn tile(x: u32, y: u32) -> TileId {
        TileId { z: 2, x, y }
    }

    #[test]
    fn missing_tiles_become_pending_once() {
        let mut cache = TileCache::default();
        let visible = [tile(0, 0), tile(1, 0)];

        let first = cache.request_missing(&visible);
        assert_eq!(first.len(), 2);
        assert!(cache.is_pending(&tile(0, 0)));

        let second = cache.request_missing(&visible);
        assert!(second.is_empty());
    }

    #[test]
    fn inserted_tiles_are_served_from_memory() {
        let mut cache = TileCache::default();
        cache.request_missing(&[tile(0, 0)]);
        cache.insert(TileStyle::Light, tile(0, 0), vec![1, 2, 3]);

        assert!(cache.peek(&tile(0, 0)).is_some());
        assert!(!cache.is_pending(&tile(0, 0)));
        assert!(cache.request_missing(&[tile(0, 0)]).is_empty());
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn failures_are_retried_only_after_style_change() {
        let mut cache = TileCache::default();
        cache.request_missing(&[tile(3, 3)]);
        cache.mark_failed(TileStyle::Light, tile(3, 3));
        assert!(cache.has_failed(&tile(3, 3)));
        assert!(cache.request_missing(&[tile(3, 3)]).is_empty());

        cache.set_style(TileStyle::Dark);
        let retry = cache.request_missing(&[tile(3, 3)]);
        assert_eq!(retry.len(), 1);
        assert_eq!(retry[0].style, TileStyle::Dark);
    }

    #[test]
    fn late_results_for_old_style_are_dropped() {
        let mut cache = TileCache::default();
        cache.request_missing(&[tile(0, 0)]);
        cache.set_style(TileStyle::Terrain);
        cache.insert(TileStyle::Light, tile(0, 0), vec![0]);
        assert!(cache.is_empty());
    }

    #[test]
    fn vector_style_requests_nothing() {
        let mut cache = TileCache::new(TileStyle::None, None, 8);
        assert!(cache.request_missing(&[tile(0, 0)]).is_empty());
    }

    #[test]
    fn disk_path_is_hash_of_url() {
        let dir = tempdir().expect("tempdir");
        let mut cache = TileCache::new(TileStyle::Comic, Some(dir.path()), 8);
        let requests = cache.request_missing(&[tile(1, 2)]);
        let expected = dir
            .path()
            .join(TILE_DIR)
            .join(disk_name("https://a.tile.openstreetmap.org/2/1/2.png"));
        assert_eq!(requests[0].disk_path.as_deref(), Some(expected.as_path()));
        assert_eq!(disk_name("x").len(), 64);
    }

    #[tokio::test]
    async fn fetch_prefers_disk_copy() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("tile");
        std::fs::write(&path, b"cached").expect("write tile");

        let request = TileRequest {
            style: TileStyle::Light,
            tile: tile(0, 0),
            // Unroutable: the disk copy must be used.
            url: "http://127.0.0.1:9/never".to_string(),
            disk_path: Some(path),
        };
        let bytes = fetch_tile(reqwest::Client::new(), request)
            .await
            .expect("disk hit");
        assert_eq!(bytes, b"cached");
    }
}
