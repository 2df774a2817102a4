// SPDX-License-Identifier: MPL-2.0
//! Wonder detail popup.
//!
//! The popup opens without waiting for its picture: the image is fetched in
//! the background and swapped in once it arrives. A response for a wonder
//! other than the one shown is dropped.

use crate::catalog::{Wonder, WonderKey};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::widget::{button, image, scrollable, Column, Container, Row, Text};
use iced::{alignment::Vertical, ContentFit, Element, Length};

#[derive(Debug, Clone, Default)]
pub enum Picture {
    /// The wonder has no image.
    #[default]
    Absent,
    Loading,
    Loaded(image::Handle),
    Failed,
}

#[derive(Debug, Clone)]
pub struct State {
    wonder: WonderKey,
    picture: Picture,
}

impl State {
    /// Opens the popup for `wonder`; returns the image URL to fetch, if any.
    pub fn open(wonder: &Wonder) -> (Self, Option<String>) {
        let url = wonder.image.clone();
        let picture = if url.is_some() {
            Picture::Loading
        } else {
            Picture::Absent
        };
        (
            Self {
                wonder: wonder.key(),
                picture,
            },
            url,
        )
    }

    pub fn wonder(&self) -> WonderKey {
        self.wonder
    }

    pub fn picture(&self) -> &Picture {
        &self.picture
    }

    /// Applies an image download result. Returns false when the popup has
    /// since moved to another wonder.
    pub fn picture_loaded(
        &mut self,
        wonder: WonderKey,
        result: Result<image::Handle, Error>,
    ) -> bool {
        if wonder != self.wonder {
            return false;
        }
        self.picture = match result {
            Ok(handle) => Picture::Loaded(handle),
            Err(error) => {
                tracing::warn!(?wonder, %error, "wonder image unavailable");
                Picture::Failed
            }
        };
        true
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    ReadMore,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Closed,
    /// Open the link in the system browser.
    OpenUrl(String),
}

pub fn update(message: Message, wonder: &Wonder) -> Event {
    match message {
        Message::Close => Event::Closed,
        Message::ReadMore => Event::OpenUrl(wonder.wikipedia.clone()),
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub wonder: &'a Wonder,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let wonder = ctx.wonder;

    let close = button(Text::new("✕").size(typography::BODY))
        .on_press(Message::Close)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::unselected);

    let heading = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::XS)
        .push(
            Column::new()
                .push(Text::new(wonder.name.as_str()).size(typography::TITLE_SM))
                .push(Text::new(i18n.tr(wonder.kind.i18n_key())).size(typography::CAPTION))
                .width(Length::Fill),
        )
        .push(close);

    let mut content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(heading);

    if let Some(picture) = picture_view(&ctx.state.picture, i18n) {
        content = content.push(picture);
    }

    let description = wonder
        .description
        .clone()
        .unwrap_or_else(|| i18n.tr("popup-unknown"));
    content = content
        .push(Text::new(i18n.tr("popup-description")).size(typography::BODY_SM))
        .push(Text::new(description).size(typography::BODY));

    if let Some((quote, author)) = quote_lines(wonder, i18n) {
        content = content
            .push(Text::new(i18n.tr("popup-quote")).size(typography::BODY_SM))
            .push(Text::new(quote).size(typography::BODY))
            .push(Text::new(author).size(typography::CAPTION));
    }

    let read_more = button(Text::new(i18n.tr("popup-read-more")).size(typography::BODY))
        .on_press(Message::ReadMore)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::primary);
    content = content.push(read_more);

    Container::new(scrollable(content))
        .width(Length::Fixed(sizing::POPUP_WIDTH))
        .max_height(sizing::POPUP_MAX_HEIGHT)
        .style(styles::container::card)
        .into()
}

fn picture_view<'a>(picture: &'a Picture, i18n: &I18n) -> Option<Element<'a, Message>> {
    let placeholder = |key: &str| -> Element<'a, Message> {
        Container::new(Text::new(i18n.tr(key)).size(typography::CAPTION))
            .center(Length::Fill)
            .height(Length::Fixed(sizing::POPUP_IMAGE_HEIGHT))
            .into()
    };
    match picture {
        Picture::Absent => None,
        Picture::Loading => Some(placeholder("popup-image-loading")),
        Picture::Failed => Some(placeholder("popup-image-unavailable")),
        Picture::Loaded(handle) => Some(
            image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::POPUP_IMAGE_HEIGHT))
                .content_fit(ContentFit::Cover)
                .into(),
        ),
    }
}

/// Quote text and attribution line. Wonders without a quote show neither;
/// a quote without an author is attributed to "unknown".
fn quote_lines(wonder: &Wonder, i18n: &I18n) -> Option<(String, String)> {
    let quote = wonder.quote.as_ref()?;
    let author = wonder
        .quote_author
        .clone()
        .unwrap_or_else(|| i18n.tr("popup-unknown"));
    let author = i18n.tr_with_args("popup-quote-author", &[("author", FluentValue::from(author))]);
    Some((format!("“{quote}”"), author))
}
