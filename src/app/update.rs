// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component `update` functions report [`Event`](map_view::Event)s; the
//! handlers here turn those into side effects: camera moves, tile and detail
//! requests, popups and preference saves.

use super::atlas::{Choropleth, WonderCatalog};
use super::config::{Config, FIT_BOUNDS_PADDING, FLY_TO_DURATION_MS, FLY_TO_ZOOM};
use super::message::Shortcut;
use super::persistence::{self, PreferencesContext};
use super::{Message, Services};
use crate::catalog::{Wonder, WonderKey};
use crate::error::Error;
use crate::geography::CountryLayer;
use crate::i18n::fluent::I18n;
use crate::map::{download, fetch_tile, visible_tiles, TileCache, TileId, TileStyle};
use crate::restcountries::{load_statistics, CountryDetails, CountrySummary};
use crate::ui::country_panel::{self, Event as CountryPanelEvent};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::map_controls::{self, Event as MapControlsEvent};
use crate::ui::map_view::{self, Event as MapEvent, Scene};
use crate::ui::notifications::{self, Notification};
use crate::ui::popup::{self, Event as PopupEvent};
use crate::ui::sidebar::{self, Event as SidebarEvent};
use crate::ui::theming::ThemeMode;
use iced::widget::image;
use iced::{window, Task};
use std::time::{Duration, Instant};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub theme_mode: &'a mut ThemeMode,
    pub map: &'a mut map_view::State,
    pub tiles: &'a mut TileCache,
    pub base_style: &'a mut TileStyle,
    pub countries: &'a mut CountryLayer,
    pub catalog: &'a mut WonderCatalog,
    pub choropleth: &'a mut Choropleth,
    pub country_panel: &'a mut country_panel::State,
    pub popup: &'a mut Option<popup::State>,
    /// Wonder whose popup opens when the current flight lands.
    pub pending_popup: &'a mut Option<WonderKey>,
    /// Country selected in the previous session, re-selected once the
    /// country layer is loaded.
    pub restore_selection: &'a mut Option<String>,
    pub services: &'a Services,
    pub notifications: &'a mut notifications::Manager,
}

// ==========================================================================
// Component messages
// ==========================================================================

pub fn handle_map_message(ctx: &mut UpdateContext<'_>, message: map_view::Message) -> Task<Message> {
    let scene = Scene {
        countries: &*ctx.countries,
        wonders: ctx.catalog.markers(),
    };
    match ctx.map.update(message, scene) {
        MapEvent::None => Task::none(),
        MapEvent::CameraMoved => request_tiles(ctx),
        MapEvent::WonderClicked(key) => {
            *ctx.pending_popup = None;
            open_popup(ctx, key)
        }
        MapEvent::CountryClicked(name) => {
            ctx.country_panel.select(name.clone());
            focus_country(ctx, name)
        }
        MapEvent::BackgroundClicked => {
            close_popup(ctx);
            Task::none()
        }
    }
}

pub fn handle_map_controls_message(
    ctx: &mut UpdateContext<'_>,
    message: map_controls::Message,
) -> Task<Message> {
    match map_controls::update(message, ctx.base_style) {
        MapControlsEvent::None => Task::none(),
        MapControlsEvent::ZoomIn => {
            ctx.map.zoom_in();
            request_tiles(ctx)
        }
        MapControlsEvent::ZoomOut => {
            ctx.map.zoom_out();
            request_tiles(ctx)
        }
        MapControlsEvent::StyleChanged(style) => {
            tracing::info!(?style, "base map style changed");
            ctx.tiles.set_style(style);
            ctx.map.invalidate();
            persist_preferences(ctx);
            request_tiles(ctx)
        }
    }
}

pub fn handle_sidebar_message(
    ctx: &mut UpdateContext<'_>,
    message: sidebar::Message,
) -> Task<Message> {
    let catalog = &mut *ctx.catalog;
    match sidebar::update(message, &mut catalog.filter, &mut catalog.show_markers) {
        SidebarEvent::None => Task::none(),
        SidebarEvent::SearchChanged => {
            ctx.catalog.refilter();
            request_marker_icons(ctx)
        }
        SidebarEvent::KindsChanged => {
            ctx.catalog.refilter();
            persist_preferences(ctx);
            request_marker_icons(ctx)
        }
        SidebarEvent::ShowWondersChanged => {
            persist_preferences(ctx);
            request_marker_icons(ctx)
        }
        SidebarEvent::WonderChosen(key) => fly_to_wonder(ctx, key),
    }
}

pub fn handle_country_panel_message(
    ctx: &mut UpdateContext<'_>,
    message: country_panel::Message,
) -> Task<Message> {
    let mut attribute = ctx.choropleth.attribute();
    match country_panel::update(ctx.country_panel, message, &mut attribute) {
        CountryPanelEvent::None | CountryPanelEvent::Cleared => Task::none(),
        CountryPanelEvent::CountrySelected(name) => focus_country(ctx, name),
        CountryPanelEvent::AttributeChanged(attribute) => {
            ctx.choropleth.set_attribute(attribute);
            ctx.map.invalidate();
            persist_preferences(ctx);
            Task::none()
        }
    }
}

pub fn handle_popup_message(ctx: &mut UpdateContext<'_>, message: popup::Message) -> Task<Message> {
    let Some(wonder) = ctx
        .popup
        .as_ref()
        .and_then(|state| ctx.catalog.find(state.wonder()))
    else {
        return Task::none();
    };

    match popup::update(message, wonder) {
        PopupEvent::Closed => close_popup(ctx),
        PopupEvent::OpenUrl(url) => open_url(ctx.notifications, &url),
    }
    Task::none()
}

pub fn handle_header_message(ctx: &mut UpdateContext<'_>, message: header::Message) -> Task<Message> {
    match header::update(message, ctx.theme_mode, ctx.i18n) {
        HeaderEvent::None => {}
        HeaderEvent::ThemeChanged(mode) => {
            tracing::debug!(?mode, "theme mode changed");
            persist_preferences(ctx);
        }
        HeaderEvent::LanguageChanged(locale) => {
            tracing::info!(%locale, "language changed");
            persist_preferences(ctx);
        }
    }
    Task::none()
}

pub fn handle_shortcut(ctx: &mut UpdateContext<'_>, shortcut: Shortcut) -> Task<Message> {
    match shortcut {
        Shortcut::Pan { x, y } => {
            ctx.map.pan_step(x, y);
            request_tiles(ctx)
        }
        Shortcut::ZoomIn => {
            ctx.map.zoom_in();
            request_tiles(ctx)
        }
        Shortcut::ZoomOut => {
            ctx.map.zoom_out();
            request_tiles(ctx)
        }
        Shortcut::Escape => {
            if ctx.popup.is_some() || ctx.pending_popup.is_some() {
                close_popup(ctx);
            } else {
                ctx.country_panel.clear();
            }
            Task::none()
        }
    }
}

/// Advances the fly-to animation and notification timers.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick();

    if !ctx.map.camera.is_flying() {
        return Task::none();
    }

    let landed = ctx.map.camera.tick(now);
    ctx.map.invalidate();
    let tiles = request_tiles(ctx);
    if !landed {
        return tiles;
    }

    match ctx.pending_popup.take() {
        Some(key) => Task::batch([tiles, open_popup(ctx, key)]),
        None => tiles,
    }
}

// ==========================================================================
// Async results
// ==========================================================================

pub fn handle_wonders_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<Wonder>, Error>,
) -> Task<Message> {
    match result {
        Ok(wonders) => {
            ctx.catalog.set_wonders(wonders);
            request_marker_icons(ctx)
        }
        Err(error) => {
            tracing::error!(%error, "failed to load wonder catalog");
            ctx.catalog.load_failed();
            ctx.notifications
                .push(Notification::failure("notification-wonders-error", &error));
            Task::none()
        }
    }
}

pub fn handle_countries_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<CountryLayer, Error>,
) -> Task<Message> {
    match result {
        Ok(layer) => {
            tracing::info!(count = layer.len(), "country layer ready");
            ctx.country_panel.set_countries(layer.names());
            *ctx.countries = layer;
            ctx.map.invalidate();

            let Some(name) = ctx.restore_selection.take() else {
                return Task::none();
            };
            if ctx.countries.find(&name).is_none() {
                tracing::debug!(country = %name, "persisted selection no longer exists");
                return Task::none();
            }
            ctx.country_panel.select(name.clone());
            fetch_details(ctx, name)
        }
        Err(error) => {
            tracing::error!(%error, "failed to load country shapes");
            ctx.notifications
                .push(Notification::failure("notification-countries-error", &error));
            Task::none()
        }
    }
}

pub fn handle_statistics_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<CountrySummary>, Error>,
) -> Task<Message> {
    match result {
        Ok(statistics) => {
            ctx.choropleth.set_statistics(statistics);
            ctx.map.invalidate();
        }
        Err(error) => {
            tracing::error!(%error, "failed to load country statistics");
            ctx.notifications
                .push(Notification::failure("notification-statistics-error", &error));
        }
    }
    Task::none()
}

pub fn handle_details_loaded(
    ctx: &mut UpdateContext<'_>,
    country: String,
    result: Result<CountryDetails, Error>,
) -> Task<Message> {
    let error = result.as_ref().err().cloned();
    if !ctx.country_panel.details_loaded(&country, result) {
        return Task::none();
    }
    match error {
        Some(error) => {
            tracing::warn!(%country, %error, "country details unavailable");
            ctx.notifications.push(
                Notification::failure("notification-details-error", &error)
                    .with_arg("country", country),
            );
        }
        None => ctx.notifications.dismiss_key("notification-details-error"),
    }
    Task::none()
}

pub fn handle_tile_loaded(
    ctx: &mut UpdateContext<'_>,
    style: TileStyle,
    tile: TileId,
    result: Result<Vec<u8>, Error>,
) -> Task<Message> {
    match result {
        Ok(bytes) => {
            ctx.tiles.insert(style, tile, bytes);
            ctx.map.invalidate();
        }
        Err(error) => {
            tracing::debug!(%tile, %error, "tile download failed");
            ctx.tiles.mark_failed(style, tile);
        }
    }
    Task::none()
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    wonder: WonderKey,
    result: Result<Vec<u8>, Error>,
) -> Task<Message> {
    let picture = result.map(image::Handle::from_bytes);
    if let Some(popup) = ctx.popup.as_mut() {
        popup.picture_loaded(wonder, picture.clone());
    }
    ctx.map.icons_mut().loaded(wonder, picture);
    Task::none()
}

/// Saves preferences and map state, then closes the window.
pub fn handle_close_requested(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    persistence::persist_map_state(
        &ctx.map.camera,
        ctx.country_panel.selected(),
        ctx.notifications,
    );
    persist_preferences(ctx);
    window::close(id)
}

// ==========================================================================
// Startup
// ==========================================================================

/// Starts the background loads: wonders, country shapes and statistics.
pub fn startup_tasks(config: &Config, services: &Services) -> Task<Message> {
    let catalog = crate::catalog::CatalogSource::from_override(config.data.wonders_dir.clone());
    let wonders = Task::perform(
        crate::catalog::load_wonders_async(catalog),
        Message::WondersLoaded,
    );

    let countries = Task::perform(
        crate::geography::load_countries_async(config.data.countries_geojson.clone()),
        Message::CountriesLoaded,
    );

    let statistics = match services.rest.clone() {
        Some(client) => {
            let cache = services.stats_cache.clone();
            Task::perform(
                async move { load_statistics(&client, cache.as_ref()).await },
                Message::StatisticsLoaded,
            )
        }
        None => Task::none(),
    };

    Task::batch([wonders, countries, statistics])
}

// ==========================================================================
// Effects
// ==========================================================================

/// Requests every visible tile that is neither cached nor in flight.
fn request_tiles(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let visible = visible_tiles(&ctx.map.camera, ctx.tiles.style());
    let requests = ctx.tiles.request_missing(&visible);
    if requests.is_empty() {
        return Task::none();
    }

    tracing::debug!(count = requests.len(), "requesting tiles");
    let http = ctx.services.http.clone();
    Task::batch(requests.into_iter().map(|request| {
        let (style, tile) = (request.style, request.tile);
        Task::perform(fetch_tile(http.clone(), request), move |result| {
            Message::TileLoaded { style, tile, result }
        })
    }))
}

/// Zooms to a selected country and fetches its details.
fn focus_country(ctx: &mut UpdateContext<'_>, name: String) -> Task<Message> {
    // Fitting the bounds cancels any flight, and with it the queued popup.
    *ctx.pending_popup = None;
    let tiles = match ctx.countries.find(&name) {
        Some(country) => {
            ctx.map.camera.fit_bounds(&country.bounds, FIT_BOUNDS_PADDING);
            ctx.map.invalidate();
            request_tiles(ctx)
        }
        None => Task::none(),
    };
    Task::batch([tiles, fetch_details(ctx, name)])
}

fn fetch_details(ctx: &mut UpdateContext<'_>, name: String) -> Task<Message> {
    let Some(client) = ctx.services.rest.clone() else {
        ctx.country_panel.details_loaded(
            &name,
            Err(Error::Config("REST Countries client unavailable".to_string())),
        );
        return Task::none();
    };

    let country = name.clone();
    Task::perform(
        async move { client.fetch_by_name(&name).await },
        move |result| Message::DetailsLoaded {
            country: country.clone(),
            result,
        },
    )
}

/// Flies to a wonder; its popup opens when the flight lands.
fn fly_to_wonder(ctx: &mut UpdateContext<'_>, key: WonderKey) -> Task<Message> {
    let Some(wonder) = ctx.catalog.find(key) else {
        return Task::none();
    };

    tracing::debug!(wonder = %wonder.name, "flying to wonder");
    ctx.map.camera.fly_to(
        wonder.coordinates,
        FLY_TO_ZOOM,
        Duration::from_millis(FLY_TO_DURATION_MS),
        Instant::now(),
    );
    *ctx.popup = None;
    *ctx.pending_popup = Some(key);
    Task::none()
}

fn open_popup(ctx: &mut UpdateContext<'_>, key: WonderKey) -> Task<Message> {
    let Some(wonder) = ctx.catalog.find(key) else {
        return Task::none();
    };

    let (mut state, image_url) = popup::State::open(wonder);
    let task = match image_url {
        Some(_) if ctx.map.icons().is_pending(key) => Task::none(),
        Some(url) => match ctx.map.icons().handle(key) {
            Some(handle) => {
                state.picture_loaded(key, Ok(handle.clone()));
                Task::none()
            }
            None => fetch_image(ctx.services.http.clone(), key, url),
        },
        None => Task::none(),
    };
    *ctx.popup = Some(state);
    task
}

/// Downloads marker pictures for the markers shown, each at most once.
fn request_marker_icons(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let requests = ctx.map.icons_mut().request_missing(ctx.catalog.markers());
    if requests.is_empty() {
        return Task::none();
    }

    tracing::debug!(count = requests.len(), "requesting marker icons");
    let http = ctx.services.http.clone();
    Task::batch(
        requests
            .into_iter()
            .map(|(wonder, url)| fetch_image(http.clone(), wonder, url)),
    )
}

/// Wonder picture download shared by popups and marker icons.
fn fetch_image(http: reqwest::Client, wonder: WonderKey, url: String) -> Task<Message> {
    Task::perform(
        async move { download(&http, &url).await },
        move |result| Message::ImageLoaded { wonder, result },
    )
}

fn close_popup(ctx: &mut UpdateContext<'_>) {
    *ctx.popup = None;
    *ctx.pending_popup = None;
}

/// Opens `url` in the system browser.
fn open_url(notifications: &mut notifications::Manager, url: &str) {
    if cfg!(test) {
        return;
    }

    if let Err(error) = open::that_detached(url) {
        tracing::warn!(%url, %error, "failed to open browser");
        notifications.push(Notification::error("notification-browser-error"));
    }
}

fn persist_preferences(ctx: &mut UpdateContext<'_>) {
    persistence::persist_preferences(PreferencesContext {
        config: &mut *ctx.config,
        theme_mode: *ctx.theme_mode,
        locale: ctx.i18n.current_locale(),
        base_style: *ctx.base_style,
        attribute: ctx.choropleth.attribute(),
        filter: &ctx.catalog.filter,
        show_wonders: ctx.catalog.show_markers,
        notifications: &mut *ctx.notifications,
    });
}
