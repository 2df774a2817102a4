// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::{Wonder, WonderKey};
use crate::error::Error;
use crate::geography::CountryLayer;
use crate::map::{TileId, TileStyle};
use crate::restcountries::{CountryDetails, CountrySummary};
use crate::ui::{country_panel, header, map_controls, map_view, notifications, popup, sidebar};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Map(map_view::Message),
    MapControls(map_controls::Message),
    Sidebar(sidebar::Message),
    CountryPanel(country_panel::Message),
    Popup(popup::Message),
    Header(header::Message),
    Notification(notifications::NotificationMessage),
    /// Keyboard shortcut not consumed by a focused widget.
    Shortcut(Shortcut),
    /// Animation and notification clock.
    Tick(Instant),
    WondersLoaded(Result<Vec<Wonder>, Error>),
    CountriesLoaded(Result<CountryLayer, Error>),
    StatisticsLoaded(Result<Vec<CountrySummary>, Error>),
    DetailsLoaded {
        country: String,
        result: Result<CountryDetails, Error>,
    },
    TileLoaded {
        style: TileStyle,
        tile: TileId,
        result: Result<Vec<u8>, Error>,
    },
    ImageLoaded {
        wonder: WonderKey,
        result: Result<Vec<u8>, Error>,
    },
    /// Window close was requested; state is saved before closing.
    WindowCloseRequested(iced::window::Id),
}

/// Map keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shortcut {
    /// Pan one step; components are -1, 0 or 1.
    Pan { x: f64, y: f64 },
    ZoomIn,
    ZoomOut,
    /// Close the popup, or clear the country selection.
    Escape,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (state, caches, wonder catalog).
    /// Takes precedence over `WONDER_ATLAS_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `WONDER_ATLAS_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
