// SPDX-License-Identifier: MPL-2.0
//! Map state persisted across sessions in CBOR.
//!
//! Unlike `settings.toml`, this file is not meant to be edited: it remembers
//! where the user left the camera and which country was selected. Load and
//! save report failures as i18n keys so the caller can show a notification.

use super::config::{DEFAULT_CENTER, DEFAULT_ZOOM};
use super::paths;
use crate::map::Camera;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// `(longitude, latitude)` of the camera center.
    #[serde(default = "default_center")]
    pub center: (f64, f64),

    #[serde(default = "default_zoom")]
    pub zoom: f64,

    /// Name of the selected country, as found in the GeoJSON layer.
    #[serde(default)]
    pub selected_country: Option<String>,
}

fn default_center() -> (f64, f64) {
    DEFAULT_CENTER
}

fn default_zoom() -> f64 {
    DEFAULT_ZOOM
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            selected_country: None,
        }
    }
}

impl AppState {
    /// Snapshot of the camera and the current selection.
    pub fn capture(camera: &Camera, selected_country: Option<&str>) -> Self {
        Self {
            center: camera.center(),
            zoom: camera.zoom(),
            selected_country: selected_country.map(str::to_string),
        }
    }

    /// Whether the stored values can be applied to a camera.
    pub fn is_valid(&self) -> bool {
        let (lon, lat) = self.center;
        lon.is_finite()
            && lat.is_finite()
            && self.zoom.is_finite()
            && (-180.0..=180.0).contains(&lon)
            && (-90.0..=90.0).contains(&lat)
    }

    /// Moves `camera` to the stored view. Invalid values are ignored.
    pub fn restore_camera(&self, camera: &mut Camera) {
        if self.is_valid() {
            camera.set_view(self.center, self.zoom);
        } else {
            tracing::warn!(center = ?self.center, zoom = self.zoom, "ignoring invalid persisted camera");
        }
    }

    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning).
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from `base_dir`, or the default data directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "corrupt state file");
                    (
                        Self::default(),
                        Some("notification-state-parse-error".to_string()),
                    )
                }
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot read state file");
                (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                )
            }
        }
    }

    /// Saves application state to the default location.
    ///
    /// Returns an optional warning key if saving failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state to `base_dir`, or the default data directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if ciborium::into_writer(self, BufWriter::new(file)).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::ZoomRange;
    use tempfile::tempdir;

    #[test]
    fn default_state_matches_initial_view() {
        let state = AppState::default();
        assert_eq!(state.center, (0.0, 20.0));
        assert_eq!(state.zoom, 2.0);
        assert!(state.selected_country.is_none());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let state = AppState {
            center: (2.35, 48.85),
            zoom: 6.5,
            selected_country: Some("France".to_string()),
        };

        assert!(state.save_to(Some(base_dir.clone())).is_none());
        let (loaded, warning) = AppState::load_from(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded, state);
    }

    #[test]
    fn load_from_missing_file_returns_default_without_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(state, AppState::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_from_corrupt_file_warns() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), b"\xff\x00not cbor").expect("write");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(state, AppState::default());
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
    }

    #[test]
    fn save_creates_nested_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested = temp_dir.path().join("a").join("b");
        assert!(AppState::default().save_to(Some(nested.clone())).is_none());
        assert!(nested.join(STATE_FILE).exists());
    }

    #[test]
    fn capture_and_restore_camera() {
        let mut camera = Camera::new(ZoomRange::new(2.0, 12.0));
        camera.set_viewport(800.0, 600.0);
        camera.set_view((12.5, 41.9), 7.0);

        let state = AppState::capture(&camera, Some("Italy"));
        assert_eq!(state.selected_country.as_deref(), Some("Italy"));

        let mut restored = Camera::new(ZoomRange::new(2.0, 12.0));
        restored.set_viewport(800.0, 600.0);
        state.restore_camera(&mut restored);
        assert_eq!(restored.zoom(), 7.0);
        assert!((restored.center().0 - 12.5).abs() < 1e-9);
    }

    #[test]
    fn invalid_center_is_not_restored() {
        let state = AppState {
            center: (f64::NAN, 0.0),
            ..AppState::default()
        };
        let mut camera = Camera::default();
        let before = camera.clone();
        state.restore_camera(&mut camera);
        assert_eq!(camera, before);
    }
}
