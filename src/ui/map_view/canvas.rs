// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the map and translating mouse input.

use super::{icon_bounds, Message, Scene, State};
use crate::app::config::CLICK_TOLERANCE;
use crate::catalog::{Wonder, WonderKind};
use crate::choropleth::CountryFills;
use crate::geography::CountryShape;
use crate::map::{tile_screen_rect, visible_tiles, Camera, TileCache};
use crate::ui::design_tokens::{border, opacity, palette, sizing, spacing, typography};
use geo::LineString;
use iced::widget::canvas::{self, fill, path, Fill, Frame, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, window, Color, Event, Pixels, Point, Rectangle, Size, Theme};

/// Pixels of trackpad scrolling counted as one wheel line.
const PIXELS_PER_LINE: f32 = 40.0;

/// Offset of the tooltip from the cursor.
const TOOLTIP_OFFSET: f32 = 14.0;

/// Mouse gesture in progress, kept by the canvas between events.
#[derive(Debug, Default)]
pub struct Gesture {
    press: Option<Point>,
    last: Option<Point>,
    dragging: bool,
    inside: bool,
    size: Size,
}

pub struct MapCanvas<'a> {
    pub state: &'a State,
    pub scene: Scene<'a>,
    pub tiles: &'a TileCache,
    pub fills: &'a CountryFills,
    pub selected_country: Option<&'a str>,
}

impl MapCanvas<'_> {
    fn camera(&self) -> &Camera {
        &self.state.camera
    }

    fn screen_point(&self, lon: f64, lat: f64) -> Point {
        let (x, y) = self.camera().lonlat_to_screen(lon, lat);
        Point::new(x as f32, y as f32)
    }

    fn is_on_screen(&self, country: &CountryShape, size: Size) -> bool {
        let (min, max) = (country.bounds.min(), country.bounds.max());
        let top_left = self.screen_point(min.x, max.y);
        let bottom_right = self.screen_point(max.x, min.y);
        bottom_right.x >= 0.0
            && bottom_right.y >= 0.0
            && top_left.x <= size.width
            && top_left.y <= size.height
    }

    fn country_path(&self, country: &CountryShape) -> Path {
        Path::new(|builder| {
            for polygon in &country.shape.0 {
                self.trace_ring(builder, polygon.exterior());
                for interior in polygon.interiors() {
                    self.trace_ring(builder, interior);
                }
            }
        })
    }

    fn trace_ring(&self, builder: &mut path::Builder, ring: &LineString<f64>) {
        let mut points = ring.coords().map(|c| self.screen_point(c.x, c.y));
        let Some(first) = points.next() else {
            return;
        };
        builder.move_to(first);
        for point in points {
            builder.line_to(point);
        }
        builder.close();
    }

    fn draw_tiles(&self, frame: &mut Frame) {
        for tile in visible_tiles(self.camera(), self.tiles.style()) {
            let Some(handle) = self.tiles.peek(&tile) else {
                continue;
            };
            let (x, y, size) = tile_screen_rect(self.camera(), tile);
            // Half a pixel of overlap hides seams between neighbours.
            let bounds = Rectangle::new(
                Point::new(x as f32, y as f32),
                Size::new(size as f32 + 0.5, size as f32 + 0.5),
            );
            frame.draw_image(bounds, canvas::Image::new(handle.clone()));
        }
    }

    fn draw_countries(&self, frame: &mut Frame) {
        let border_stroke = Stroke::default()
            .with_width(border::WIDTH_SM)
            .with_color(palette::COUNTRY_BORDER);

        for country in self.scene.countries.iter() {
            if !self.is_on_screen(country, frame.size()) {
                continue;
            }
            let base = self
                .fills
                .lookup(&country.name, country.id.as_deref())
                .map_or(palette::COUNTRY_FILL, Color::from);
            let path = self.country_path(country);
            frame.fill(
                &path,
                Fill {
                    style: canvas::Style::Solid(Color {
                        a: opacity::COUNTRY_FILL,
                        ..base
                    }),
                    rule: fill::Rule::EvenOdd,
                },
            );
            frame.stroke(&path, border_stroke);
        }
    }

    fn outline(&self, frame: &mut Frame, name: &str, width: f32, color: Color) {
        if let Some(country) = self.scene.countries.find(name) {
            frame.stroke(
                &self.country_path(country),
                Stroke::default().with_width(width).with_color(color),
            );
        }
    }

    fn draw_markers(&self, frame: &mut Frame) {
        let outline = Stroke::default()
            .with_width(border::WIDTH_SM)
            .with_color(palette::BLACK);

        for wonder in self.scene.wonders {
            let center = self.screen_point(wonder.longitude(), wonder.latitude());
            if let Some(handle) = self.state.icons().handle(wonder.key()) {
                let bounds = icon_bounds(center);
                frame.draw_image(bounds, canvas::Image::new(handle.clone()));
                frame.stroke(
                    &Path::rectangle(bounds.position(), bounds.size()),
                    Stroke::default()
                        .with_width(border::WIDTH_MD)
                        .with_color(marker_color(wonder.kind)),
                );
                continue;
            }
            let marker = Path::circle(center, sizing::MARKER_RADIUS);
            frame.fill(
                &marker,
                Color {
                    a: opacity::MARKER,
                    ..marker_color(wonder.kind)
                },
            );
            frame.stroke(&marker, outline);
        }
    }

    fn tooltip_label(&self) -> Option<&str> {
        if let Some(key) = self.state.hovered_wonder() {
            return self
                .scene
                .wonders
                .iter()
                .find(|w| w.key() == key)
                .map(|w: &Wonder| w.name.as_str());
        }
        self.state.hovered_country()
    }

    fn draw_tooltip(&self, frame: &mut Frame, cursor: Point) {
        let Some(label) = self.tooltip_label() else {
            return;
        };

        // Rough width; the canvas cannot measure text before drawing it.
        let width = label.chars().count() as f32 * typography::CAPTION * 0.6 + 2.0 * spacing::XS;
        let height = typography::CAPTION + 2.0 * spacing::XXS;
        let mut origin = Point::new(cursor.x + TOOLTIP_OFFSET, cursor.y - TOOLTIP_OFFSET - height);
        if origin.x + width > frame.width() {
            origin.x = cursor.x - TOOLTIP_OFFSET - width;
        }
        origin.y = origin.y.max(0.0);

        frame.fill_rectangle(
            origin,
            Size::new(width, height),
            Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },
        );
        frame.fill_text(canvas::Text {
            content: label.to_string(),
            position: Point::new(origin.x + spacing::XS, origin.y + spacing::XXS),
            color: palette::GRAY_900,
            size: Pixels(typography::CAPTION),
            ..canvas::Text::default()
        });
    }
}

fn marker_color(kind: WonderKind) -> Color {
    match kind {
        WonderKind::Wonder => palette::WONDER_MARKER,
        WonderKind::NaturalWonder => palette::NATURAL_WONDER_MARKER,
    }
}

impl canvas::Program<Message> for MapCanvas<'_> {
    type State = Gesture;

    fn update(
        &self,
        gesture: &mut Gesture,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let mouse_event = match event {
            Event::Mouse(mouse_event) => mouse_event,
            Event::Window(window::Event::Resized(_) | window::Event::RedrawRequested(_)) => {
                if gesture.size == bounds.size() {
                    return None;
                }
                gesture.size = bounds.size();
                return Some(Action::publish(Message::Resized(bounds.size())));
            }
            _ => return None,
        };
        // Relative to the canvas even when a drag leaves it.
        let local = cursor
            .position()
            .map(|p| Point::new(p.x - bounds.x, p.y - bounds.y));

        match mouse_event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let position = cursor.position_in(bounds)?;
                gesture.press = Some(position);
                gesture.last = Some(position);
                gesture.dragging = false;
                Some(Action::capture())
            }
            mouse::Event::CursorMoved { .. } => {
                let local = local?;
                if let (Some(press), Some(last)) = (gesture.press, gesture.last) {
                    if !gesture.dragging && press.distance(local) >= CLICK_TOLERANCE {
                        gesture.dragging = true;
                    }
                    if gesture.dragging {
                        gesture.last = Some(local);
                        return Some(
                            Action::publish(Message::Panned {
                                dx: local.x - last.x,
                                dy: local.y - last.y,
                            })
                            .and_capture(),
                        );
                    }
                    return None;
                }

                if cursor.is_over(bounds) {
                    gesture.inside = true;
                    Some(Action::publish(Message::Hovered(local)))
                } else if gesture.inside {
                    gesture.inside = false;
                    Some(Action::publish(Message::CursorLeft))
                } else {
                    None
                }
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                let press = gesture.press.take()?;
                let was_dragging = std::mem::take(&mut gesture.dragging);
                gesture.last = None;
                if was_dragging {
                    return Some(Action::capture());
                }
                Some(Action::publish(Message::Clicked(press)).and_capture())
            }
            mouse::Event::WheelScrolled { delta } => {
                let at = cursor.position_in(bounds)?;
                let lines = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => *y,
                    mouse::ScrollDelta::Pixels { y, .. } => *y / PIXELS_PER_LINE,
                };
                Some(Action::publish(Message::Zoomed { lines, at }).and_capture())
            }
            mouse::Event::CursorLeft => {
                gesture.inside = false;
                gesture.press = None;
                gesture.last = None;
                gesture.dragging = false;
                Some(Action::publish(Message::CursorLeft))
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _gesture: &Gesture,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let base = self.state.base_layer.draw(renderer, bounds.size(), |frame| {
            frame.fill_rectangle(Point::ORIGIN, frame.size(), palette::OCEAN);
            self.draw_tiles(frame);
            self.draw_countries(frame);
        });

        let mut overlay = Frame::new(renderer, bounds.size());
        if let Some(name) = self.state.hovered_country() {
            self.outline(&mut overlay, name, border::WIDTH_MD, palette::COUNTRY_HOVER);
        }
        if let Some(name) = self.selected_country {
            self.outline(&mut overlay, name, border::WIDTH_LG, palette::COUNTRY_SELECTED);
        }
        self.draw_markers(&mut overlay);
        if let Some(position) = cursor.position_in(bounds) {
            self.draw_tooltip(&mut overlay, position);
        }

        vec![base, overlay.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        gesture: &Gesture,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if gesture.dragging {
            mouse::Interaction::Grabbing
        } else if !cursor.is_over(bounds) {
            mouse::Interaction::default()
        } else if self.state.hovered_wonder().is_some() || self.state.hovered_country().is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::Grab
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geography::CountryLayer;
    use iced::widget::canvas::Program;

    #[test]
    fn marker_colors_differ_by_kind() {
        assert_eq!(marker_color(WonderKind::Wonder), palette::WONDER_MARKER);
        assert_eq!(
            marker_color(WonderKind::NaturalWonder),
            palette::NATURAL_WONDER_MARKER
        );
    }

    fn map_canvas<'a>(
        state: &'a State,
        countries: &'a CountryLayer,
        tiles: &'a TileCache,
        fills: &'a CountryFills,
    ) -> MapCanvas<'a> {
        MapCanvas {
            state,
            scene: Scene {
                countries,
                wonders: &[],
            },
            tiles,
            fills,
            selected_country: None,
        }
    }

    #[test]
    fn first_mouse_event_is_not_swallowed_by_resize() {
        let (state, countries) = (State::default(), CountryLayer::default());
        let (tiles, fills) = (TileCache::default(), CountryFills::default());
        let program = map_canvas(&state, &countries, &tiles, &fills);
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(800.0, 600.0));
        let cursor = mouse::Cursor::Available(Point::new(120.0, 80.0));
        let mut gesture = Gesture::default();

        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(program.update(&mut gesture, &press, bounds, cursor).is_some());
        assert_eq!(gesture.press, Some(Point::new(120.0, 80.0)));
        assert_eq!(gesture.size, Size::ZERO);

        let resized = Event::Window(window::Event::Resized(Size::new(800.0, 600.0)));
        assert!(program.update(&mut gesture, &resized, bounds, cursor).is_some());
        assert_eq!(gesture.size, bounds.size());
        assert!(program.update(&mut gesture, &resized, bounds, cursor).is_none());
        assert_eq!(gesture.press, Some(Point::new(120.0, 80.0)));
    }

    #[test]
    fn gesture_starts_idle() {
        let gesture = Gesture::default();
        assert!(gesture.press.is_none());
        assert!(!gesture.dragging);
        assert_eq!(gesture.size, Size::ZERO);
    }
}
