// SPDX-License-Identifier: MPL-2.0
//! Map chrome drawn over the canvas: legend (top-left), base style picker
//! (top-right), scale bar (bottom-left), zoom buttons and attribution
//! (bottom-right).

use crate::choropleth::Legend;
use crate::i18n::fluent::I18n;
use crate::map::{scale_bar, Camera, TileStyle, SCALE_BAR_MAX_WIDTH};
use crate::ui::choice::{choices, Choice};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, pick_list, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    ZoomIn,
    ZoomOut,
    StylePicked(Choice<TileStyle>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    ZoomIn,
    ZoomOut,
    /// The base style changed; tiles must be refetched and the preference saved.
    StyleChanged(TileStyle),
}

pub fn update(message: Message, style: &mut TileStyle) -> Event {
    match message {
        Message::ZoomIn => Event::ZoomIn,
        Message::ZoomOut => Event::ZoomOut,
        Message::StylePicked(choice) => {
            if *style == choice.value {
                return Event::None;
            }
            *style = choice.value;
            Event::StyleChanged(choice.value)
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub camera: &'a Camera,
    pub style: TileStyle,
    /// Hidden while no statistics are available.
    pub legend: Option<&'a Legend>,
}

/// Builds the chrome layer; it fills the map area and leaves the middle free.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(corner(style_picker(ctx.i18n, ctx.style), Horizontal::Right, Vertical::Top))
        .push(corner(scale_view(ctx.camera), Horizontal::Left, Vertical::Bottom))
        .push(corner(
            bottom_right(ctx.camera, ctx.style),
            Horizontal::Right,
            Vertical::Bottom,
        ));

    if let Some(legend) = ctx.legend {
        layers = layers.push(corner(legend_view(legend, ctx.i18n), Horizontal::Left, Vertical::Top));
    }

    layers.into()
}

fn corner<'a>(
    content: Element<'a, Message>,
    x: Horizontal,
    y: Vertical,
) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(x)
        .align_y(y)
        .padding(spacing::SM)
        .into()
}

fn style_picker(i18n: &I18n, style: TileStyle) -> Element<'_, Message> {
    let (options, selected) = choices(&TileStyle::ALL, style, |s| i18n.tr(s.i18n_key()));
    Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(i18n.tr("map-style-label")).size(typography::BODY_SM))
            .push(pick_list(options, selected, Message::StylePicked).text_size(typography::BODY_SM)),
    )
    .padding(spacing::XXS)
    .style(styles::container::map_chrome)
    .into()
}

fn bottom_right<'a>(camera: &Camera, style: TileStyle) -> Element<'a, Message> {
    let zoom_button = |label: &'static str, message: Message, enabled: bool| {
        button(
            Text::new(label)
                .size(typography::TITLE_SM)
                .center(),
        )
        .on_press_maybe(enabled.then_some(message))
        .width(Length::Fixed(sizing::ZOOM_BUTTON))
        .height(Length::Fixed(sizing::ZOOM_BUTTON))
        .style(styles::button::map_control)
    };

    let zoom = Column::new()
        .spacing(spacing::XXS)
        .push(zoom_button("+", Message::ZoomIn, camera.can_zoom_in()))
        .push(zoom_button("−", Message::ZoomOut, camera.can_zoom_out()));

    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Right)
        .push(zoom);

    let attribution = style.attribution();
    if !attribution.is_empty() {
        column = column.push(
            Container::new(Text::new(attribution).size(typography::CAPTION))
                .padding([0.0, spacing::XXS])
                .style(styles::container::map_chrome),
        );
    }
    column.into()
}

fn scale_view<'a>(camera: &Camera) -> Element<'a, Message> {
    let Some(bar) = scale_bar(camera, SCALE_BAR_MAX_WIDTH) else {
        return Column::new().into();
    };

    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(bar.label).size(typography::CAPTION))
            .push(
                Container::new(Column::new())
                    .width(Length::Fixed(bar.width as f32))
                    .height(Length::Fixed(3.0))
                    .style(styles::container::scale_line),
            ),
    )
    .padding(spacing::XXS)
    .style(styles::container::map_chrome)
    .into()
}

/// Legend box: title and one swatch row per entry.
pub fn legend_view<'a>(legend: &'a Legend, i18n: &I18n) -> Element<'a, Message> {
    let rows = legend.entries.iter().fold(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(i18n.tr(legend.title_key())).size(typography::BODY_SM)),
        |column, entry| {
            column.push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(
                        Container::new(Column::new())
                            .width(Length::Fixed(sizing::LEGEND_SWATCH))
                            .height(Length::Fixed(sizing::LEGEND_SWATCH))
                            .style(styles::container::swatch(entry.color)),
                    )
                    .push(Text::new(entry.label.as_str()).size(typography::CAPTION)),
            )
        },
    );

    Container::new(rows)
        .padding(spacing::XS)
        .style(styles::container::map_chrome)
        .into()
}
