// SPDX-License-Identifier: MPL-2.0
//! Interactive map: camera state, hover tracking and click resolution.
//!
//! The canvas in [`canvas`] turns raw mouse input into [`Message`]s; this
//! module applies them to the camera and resolves what lies under the
//! cursor. A click picks the wonder marker under the cursor first, then the
//! country, and otherwise reports the background.
//!
//! A marker is a circle, or the wonder's picture once [`MarkerIcons`] holds
//! it. Pictures hang above their anchor point, so their hit box does too.

mod canvas;
mod icons;

pub use canvas::MapCanvas;
pub use icons::MarkerIcons;

use crate::app::config::{DEFAULT_WHEEL_ZOOM_STEP, KEYBOARD_PAN_STEP};
use crate::catalog::{Wonder, WonderKey};
use crate::choropleth::CountryFills;
use crate::geography::CountryLayer;
use crate::map::{Camera, TileCache};
use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{Cache, Canvas};
use iced::{Element, Length, Point, Rectangle, Size};

#[derive(Debug, Clone)]
pub enum Message {
    /// Drag by a screen delta.
    Panned { dx: f32, dy: f32 },
    /// Wheel input in lines (positive zooms in) around `at`.
    Zoomed { lines: f32, at: Point },
    Hovered(Point),
    CursorLeft,
    Clicked(Point),
    Resized(Size),
}

/// What the parent needs to react to after [`State::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The camera moved; visible tiles may have changed.
    CameraMoved,
    WonderClicked(WonderKey),
    CountryClicked(String),
    /// A click that hit neither a marker nor a country.
    BackgroundClicked,
}

/// Data the map shows and hit-tests against, owned by the application.
#[derive(Clone, Copy)]
pub struct Scene<'a> {
    pub countries: &'a CountryLayer,
    /// Markers currently drawn; empty when markers are hidden.
    pub wonders: &'a [Wonder],
}

pub struct State {
    pub camera: Camera,
    wheel_zoom_step: f64,
    hovered_country: Option<String>,
    hovered_wonder: Option<WonderKey>,
    icons: MarkerIcons,
    /// Base layer (tiles, country fills and borders); cleared whenever what
    /// it shows changes.
    base_layer: Cache,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("camera", &self.camera)
            .field("wheel_zoom_step", &self.wheel_zoom_step)
            .field("hovered_country", &self.hovered_country)
            .field("hovered_wonder", &self.hovered_wonder)
            .field("icons", &self.icons.len())
            .finish_non_exhaustive()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Camera::default(), DEFAULT_WHEEL_ZOOM_STEP)
    }
}

impl State {
    pub fn new(camera: Camera, wheel_zoom_step: f64) -> Self {
        Self {
            camera,
            wheel_zoom_step,
            hovered_country: None,
            hovered_wonder: None,
            icons: MarkerIcons::default(),
            base_layer: Cache::new(),
        }
    }

    pub fn hovered_country(&self) -> Option<&str> {
        self.hovered_country.as_deref()
    }

    pub fn hovered_wonder(&self) -> Option<WonderKey> {
        self.hovered_wonder
    }

    pub fn icons(&self) -> &MarkerIcons {
        &self.icons
    }

    pub fn icons_mut(&mut self) -> &mut MarkerIcons {
        &mut self.icons
    }

    /// Forces the base layer to be redrawn on the next frame.
    pub fn invalidate(&self) {
        self.base_layer.clear();
    }

    pub fn update(&mut self, message: Message, scene: Scene<'_>) -> Event {
        match message {
            Message::Panned { dx, dy } => {
                self.camera.pan_by(f64::from(dx), f64::from(dy));
                self.camera_moved()
            }
            Message::Zoomed { lines, at } => {
                let delta = f64::from(lines) * self.wheel_zoom_step;
                self.camera
                    .zoom_at(delta, (f64::from(at.x), f64::from(at.y)));
                self.camera_moved()
            }
            Message::Resized(size) => {
                self.camera
                    .set_viewport(f64::from(size.width), f64::from(size.height));
                self.camera_moved()
            }
            Message::Hovered(point) => {
                self.hovered_wonder = wonder_at(&self.camera, &self.icons, scene.wonders, point)
                    .map(Wonder::key);
                self.hovered_country = if self.hovered_wonder.is_some() {
                    None
                } else {
                    country_at(&self.camera, scene.countries, point)
                };
                Event::None
            }
            Message::CursorLeft => {
                self.hovered_wonder = None;
                self.hovered_country = None;
                Event::None
            }
            Message::Clicked(point) => {
                if let Some(wonder) = wonder_at(&self.camera, &self.icons, scene.wonders, point) {
                    return Event::WonderClicked(wonder.key());
                }
                match country_at(&self.camera, scene.countries, point) {
                    Some(name) => Event::CountryClicked(name),
                    None => Event::BackgroundClicked,
                }
            }
        }
    }

    /// Pans one keyboard step; `(x, y)` are -1, 0 or 1.
    pub fn pan_step(&mut self, x: f64, y: f64) -> Event {
        self.camera
            .pan_by(-x * KEYBOARD_PAN_STEP, -y * KEYBOARD_PAN_STEP);
        self.camera_moved()
    }

    pub fn zoom_in(&mut self) -> Event {
        self.camera.zoom_in();
        self.camera_moved()
    }

    pub fn zoom_out(&mut self) -> Event {
        self.camera.zoom_out();
        self.camera_moved()
    }

    fn camera_moved(&mut self) -> Event {
        self.invalidate();
        Event::CameraMoved
    }
}

/// Context required to render the map.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub scene: Scene<'a>,
    pub tiles: &'a TileCache,
    pub fills: &'a CountryFills,
    pub selected_country: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Canvas::new(MapCanvas {
        state: ctx.state,
        scene: ctx.scene,
        tiles: ctx.tiles,
        fills: ctx.fills,
        selected_country: ctx.selected_country,
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Topmost marker whose circle or picture contains `point`.
pub fn wonder_at<'w>(
    camera: &Camera,
    icons: &MarkerIcons,
    wonders: &'w [Wonder],
    point: Point,
) -> Option<&'w Wonder> {
    let radius = f64::from(sizing::MARKER_RADIUS);
    let (px, py) = (f64::from(point.x), f64::from(point.y));

    // Later markers are drawn on top.
    wonders.iter().rev().find(|wonder| {
        let (x, y) = camera.lonlat_to_screen(wonder.longitude(), wonder.latitude());
        if icons.handle(wonder.key()).is_some() {
            icon_bounds(Point::new(x as f32, y as f32)).contains(point)
        } else {
            (x - px).hypot(y - py) <= radius
        }
    })
}

/// Screen box of a marker picture: centred horizontally on its anchor,
/// with the anchor on the bottom edge.
pub fn icon_bounds(anchor: Point) -> Rectangle {
    let size = sizing::MARKER_ICON;
    Rectangle::new(
        Point::new(anchor.x - size / 2.0, anchor.y - size),
        Size::new(size, size),
    )
}

/// Name of the country under `point`, if any.
pub fn country_at(camera: &Camera, countries: &CountryLayer, point: Point) -> Option<String> {
    let (lon, lat) = camera.screen_to_lonlat(f64::from(point.x), f64::from(point.y));
    countries.hit_test(lon, lat).map(|country| country.name.clone())
}
