// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The header spans the window; below it the wonder sidebar, the map and the
//! country panel sit side by side. Map chrome, the wonder popup and toasts are
//! stacked over the map.

use super::atlas::{Choropleth, WonderCatalog};
use super::Message;
use crate::geography::CountryLayer;
use crate::i18n::fluent::I18n;
use crate::map::TileCache;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::ThemeMode;
use crate::ui::{country_panel, header, map_controls, map_view, popup, sidebar};
use iced::widget::{Column, Container, Row, Stack};
use iced::{alignment, Element, Length, Padding};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub map: &'a map_view::State,
    pub tiles: &'a TileCache,
    pub countries: &'a CountryLayer,
    pub catalog: &'a WonderCatalog,
    pub choropleth: &'a Choropleth,
    pub country_panel: &'a country_panel::State,
    pub popup: Option<&'a popup::State>,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = header::view(header::ViewContext {
        i18n: ctx.i18n,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Header);

    let sidebar = sidebar::view(sidebar::ViewContext {
        i18n: ctx.i18n,
        filter: &ctx.catalog.filter,
        show_wonders: ctx.catalog.show_markers,
        results: ctx.catalog.results(),
        loading: ctx.catalog.is_loading(),
    })
    .map(Message::Sidebar);

    let panel = country_panel::view(country_panel::ViewContext {
        i18n: ctx.i18n,
        state: ctx.country_panel,
        attribute: ctx.choropleth.attribute(),
        has_statistics: ctx.choropleth.has_statistics(),
    })
    .map(Message::CountryPanel);

    let body = Row::new()
        .push(sidebar)
        .push(view_map(&ctx))
        .push(panel)
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(Column::new().push(header).push(body))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_map<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let canvas = map_view::view(map_view::ViewContext {
        state: ctx.map,
        scene: map_view::Scene {
            countries: ctx.countries,
            wonders: ctx.catalog.markers(),
        },
        tiles: ctx.tiles,
        fills: ctx.choropleth.fills(),
        selected_country: ctx.country_panel.selected(),
    })
    .map(Message::Map);

    let chrome = map_controls::view(map_controls::ViewContext {
        i18n: ctx.i18n,
        camera: &ctx.map.camera,
        style: ctx.tiles.style(),
        legend: ctx.choropleth.legend(),
    })
    .map(Message::MapControls);

    let mut stack = Stack::new().push(canvas).push(chrome);

    let open_popup = ctx
        .popup
        .and_then(|state| ctx.catalog.find(state.wonder()).map(|wonder| (state, wonder)));
    if let Some((state, wonder)) = open_popup {
        let card = popup::view(popup::ViewContext {
            i18n: ctx.i18n,
            state,
            wonder,
        })
        .map(Message::Popup);

        // Offset below the style picker in the top-right corner.
        stack = stack.push(
            Container::new(card)
                .padding(Padding {
                    top: sizing::BUTTON_HEIGHT + spacing::LG,
                    right: spacing::MD,
                    bottom: spacing::MD,
                    left: spacing::MD,
                })
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top),
        );
    }

    if ctx.notifications.has_notifications() {
        stack = stack.push(
            Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification),
        );
    }

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
