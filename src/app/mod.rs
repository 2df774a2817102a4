// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the map and its panels.
//!
//! The `App` struct wires together the domains (map, wonder catalog, country
//! statistics, localization) and translates messages into side effects like
//! tile downloads, REST Countries requests or config persistence.

mod atlas;
pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod subscription;
mod update;
mod view;

pub use atlas::{Choropleth, WonderCatalog};
pub use message::{Flags, Message, Shortcut};

use crate::catalog::WonderKey;
use crate::geography::CountryLayer;
use crate::i18n::fluent::I18n;
use crate::map::{Camera, TileCache, TileStyle, DEFAULT_MAX_TILES};
use crate::restcountries::{RestCountriesClient, StatsCache, USER_AGENT};
use crate::ui::theming::ThemeMode;
use crate::ui::{country_panel, map_view, notifications, popup};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Network clients shared by every request the app makes.
#[derive(Debug, Clone)]
pub struct Services {
    /// Client for tiles and wonder pictures.
    pub http: reqwest::Client,
    /// `None` when the configured endpoint is not a valid URL.
    pub rest: Option<RestCountriesClient>,
    /// `None` when the platform has no data directory.
    pub stats_cache: Option<StatsCache>,
}

impl Services {
    pub fn from_config(config: &config::Config) -> Self {
        let timeout = config.request_timeout();

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|error| {
                tracing::warn!(%error, "falling back to default HTTP client");
                reqwest::Client::default()
            });

        let rest = match RestCountriesClient::new(config.rest_countries_url(), timeout) {
            Ok(client) => Some(client),
            Err(error) => {
                tracing::error!(%error, url = config.rest_countries_url(), "invalid REST Countries endpoint");
                None
            }
        };

        let stats_cache = paths::get_app_data_dir()
            .map(|dir| StatsCache::in_dir(&dir, config.stats_cache_hours()));

        Self {
            http,
            rest,
            stats_cache,
        }
    }
}

/// Root Iced application state that bridges the map, its panels,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: config::Config,
    theme_mode: ThemeMode,
    map: map_view::State,
    tiles: TileCache,
    base_style: TileStyle,
    countries: CountryLayer,
    catalog: WonderCatalog,
    choropleth: Choropleth,
    country_panel: country_panel::State,
    popup: Option<popup::State>,
    /// Wonder whose popup opens when the camera lands.
    pending_popup: Option<WonderKey>,
    /// Selection from the previous session, applied once countries load.
    restore_selection: Option<String>,
    services: Services,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("camera", &self.map.camera)
            .field("base_style", &self.base_style)
            .field("countries", &self.countries.len())
            .field("selected_country", &self.country_panel.selected())
            .field("popup_open", &self.popup.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 900;

/// Builds the window settings. Close requests are handled by the app so the
/// map state can be saved first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_else(|| {
            tracing::warn!("boot called more than once, starting with default flags");
            Flags::default()
        });
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the config and persisted state, and
    /// starts loading wonders, country shapes and statistics.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut camera = Camera::new(config.zoom_range());
        let (app_state, state_warning) = persisted_state::AppState::load();
        app_state.restore_camera(&mut camera);

        let base_style = config.base_style();
        let data_dir = paths::get_app_data_dir();
        let services = Services::from_config(&config);

        let mut notifications = notifications::Manager::new();
        for key in [config_warning, state_warning].into_iter().flatten() {
            notifications.push(notifications::Notification::warning(&key));
        }

        let task = update::startup_tasks(&config, &services);
        tracing::info!(
            locale = %i18n.current_locale(),
            style = ?base_style,
            "starting WonderAtlas"
        );

        let app = App {
            theme_mode: config.general.theme_mode,
            map: map_view::State::new(camera, config.wheel_zoom_step()),
            tiles: TileCache::new(base_style, data_dir.as_deref(), DEFAULT_MAX_TILES),
            base_style,
            countries: CountryLayer::default(),
            catalog: WonderCatalog::new(config.wonder_filter(), config.show_wonders()),
            choropleth: Choropleth::new(config.attribute()),
            country_panel: country_panel::State::default(),
            popup: None,
            pending_popup: None,
            restore_selection: app_state.selected_country,
            services,
            notifications,
            i18n,
            config,
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.country_panel.selected() {
            Some(country) => format!("{country} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.map.camera.is_flying(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            theme_mode: &mut self.theme_mode,
            map: &mut self.map,
            tiles: &mut self.tiles,
            base_style: &mut self.base_style,
            countries: &mut self.countries,
            catalog: &mut self.catalog,
            choropleth: &mut self.choropleth,
            country_panel: &mut self.country_panel,
            popup: &mut self.popup,
            pending_popup: &mut self.pending_popup,
            restore_selection: &mut self.restore_selection,
            services: &self.services,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Map(map_message) => update::handle_map_message(&mut ctx, map_message),
            Message::MapControls(controls_message) => {
                update::handle_map_controls_message(&mut ctx, controls_message)
            }
            Message::Sidebar(sidebar_message) => {
                update::handle_sidebar_message(&mut ctx, sidebar_message)
            }
            Message::CountryPanel(panel_message) => {
                update::handle_country_panel_message(&mut ctx, panel_message)
            }
            Message::Popup(popup_message) => update::handle_popup_message(&mut ctx, popup_message),
            Message::Header(header_message) => {
                update::handle_header_message(&mut ctx, header_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Shortcut(shortcut) => update::handle_shortcut(&mut ctx, shortcut),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::WondersLoaded(result) => update::handle_wonders_loaded(&mut ctx, result),
            Message::CountriesLoaded(result) => update::handle_countries_loaded(&mut ctx, result),
            Message::StatisticsLoaded(result) => {
                update::handle_statistics_loaded(&mut ctx, result)
            }
            Message::DetailsLoaded { country, result } => {
                update::handle_details_loaded(&mut ctx, country, result)
            }
            Message::TileLoaded {
                style,
                tile,
                result,
            } => update::handle_tile_loaded(&mut ctx, style, tile, result),
            Message::ImageLoaded { wonder, result } => {
                update::handle_image_loaded(&mut ctx, wonder, result)
            }
            Message::WindowCloseRequested(id) => update::handle_close_requested(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme_mode: self.theme_mode,
            map: &self.map,
            tiles: &self.tiles,
            countries: &self.countries,
            catalog: &self.catalog,
            choropleth: &self.choropleth,
            country_panel: &self.country_panel,
            popup: self.popup.as_ref(),
            notifications: &self.notifications,
        })
    }
}
