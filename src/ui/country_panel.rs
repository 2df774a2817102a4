// SPDX-License-Identifier: MPL-2.0
//! Country panel: country search, choropleth attribute and the info card.

use crate::choropleth::{format_grouped, Attribute};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::restcountries::CountryDetails;
use crate::ui::choice::{choices, Choice};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, combo_box, pick_list, rule, scrollable, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Details card content for the selected country.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Details {
    #[default]
    Idle,
    Loading,
    Loaded(Box<CountryDetails>),
    Failed,
}

pub struct State {
    search: combo_box::State<String>,
    selected: Option<String>,
    details: Details,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("selected", &self.selected)
            .field("details", &self.details)
            .finish_non_exhaustive()
    }
}

impl Default for State {
    fn default() -> Self {
        Self {
            search: combo_box::State::new(Vec::new()),
            selected: None,
            details: Details::Idle,
        }
    }
}

impl State {
    /// Replaces the picker options, e.g. once the GeoJSON layer is loaded.
    pub fn set_countries(&mut self, names: Vec<String>) {
        self.search = combo_box::State::new(names);
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn details(&self) -> &Details {
        &self.details
    }

    /// Selects `name` and marks its details as loading.
    pub fn select(&mut self, name: String) {
        self.selected = Some(name);
        self.details = Details::Loading;
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.details = Details::Idle;
    }

    /// Stores a details response. Responses for a country that is no longer
    /// selected are ignored; returns whether the response was applied.
    pub fn details_loaded(
        &mut self,
        name: &str,
        result: Result<CountryDetails, Error>,
    ) -> bool {
        if self.selected.as_deref() != Some(name) {
            tracing::debug!(country = name, "dropping details for deselected country");
            return false;
        }
        self.details = match result {
            Ok(details) => Details::Loaded(Box::new(details)),
            Err(_) => Details::Failed,
        };
        true
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    CountryPicked(String),
    AttributePicked(Choice<Attribute>),
    Clear,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// A country was chosen; the map zooms to it and details are fetched.
    CountrySelected(String),
    AttributeChanged(Attribute),
    Cleared,
}

pub fn update(state: &mut State, message: Message, attribute: &mut Attribute) -> Event {
    match message {
        Message::CountryPicked(name) => {
            state.select(name.clone());
            Event::CountrySelected(name)
        }
        Message::AttributePicked(choice) => {
            if *attribute == choice.value {
                return Event::None;
            }
            *attribute = choice.value;
            Event::AttributeChanged(choice.value)
        }
        Message::Clear => {
            if state.selected.is_none() {
                return Event::None;
            }
            state.clear();
            Event::Cleared
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub attribute: Attribute,
    /// Whether country statistics are available for coloring.
    pub has_statistics: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let title = Text::new(i18n.tr("country-panel-title")).size(typography::TITLE_SM);

    let search = combo_box(
        &ctx.state.search,
        &i18n.tr("country-panel-search-placeholder"),
        ctx.state.selected.as_ref(),
        Message::CountryPicked,
    )
    .size(typography::BODY)
    .padding(spacing::XS);

    let (options, selected) = choices(&Attribute::ALL, ctx.attribute, |a| i18n.tr(a.i18n_key()));
    let attribute = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("country-panel-attribute")).size(typography::BODY_SM))
        .push(
            pick_list(options, selected, Message::AttributePicked)
                .text_size(typography::BODY)
                .width(Length::Fill),
        );

    let mut content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(title)
        .push(search)
        .push(attribute);

    if !ctx.has_statistics {
        content = content.push(
            Text::new(i18n.tr("country-panel-no-statistics")).size(typography::CAPTION),
        );
    }

    if let Some(name) = ctx.state.selected() {
        content = content
            .push(rule::horizontal(1))
            .push(info_card(name, &ctx.state.details, i18n));
    }

    Container::new(scrollable(content))
        .width(Length::Fixed(sizing::COUNTRY_PANEL_WIDTH))
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn info_card<'a>(name: &'a str, details: &'a Details, i18n: &'a I18n) -> Element<'a, Message> {
    let clear = button(Text::new(i18n.tr("country-panel-clear")).size(typography::BODY_SM))
        .on_press(Message::Clear)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::unselected);

    let mut card = Column::new().spacing(spacing::XS);

    match details {
        Details::Idle | Details::Loading => {
            card = card
                .push(Text::new(name).size(typography::BODY_LG))
                .push(Text::new(i18n.tr("country-panel-loading")).size(typography::BODY_SM));
        }
        Details::Failed => {
            card = card
                .push(Text::new(name).size(typography::BODY_LG))
                .push(Text::new(i18n.tr("country-panel-details-unavailable")).size(typography::BODY_SM));
        }
        Details::Loaded(details) => {
            let heading = match &details.flag {
                Some(flag) => format!("{flag} {}", details.name.common),
                None => details.name.common.clone(),
            };
            card = card.push(Text::new(heading).size(typography::TITLE_SM));
            for (key, value) in info_rows(details) {
                card = card.push(info_row(i18n.tr(key), value, i18n));
            }
        }
    }

    card.push(clear).into()
}

/// Label key and display value of each info card row, in display order.
fn info_rows(details: &CountryDetails) -> Vec<(&'static str, Option<String>)> {
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
    vec![
        ("country-panel-official-name", non_empty(&details.name.official)),
        ("country-panel-capital", details.capitals()),
        ("country-panel-region", details.region.clone()),
        ("country-panel-subregion", details.subregion.clone()),
        (
            "country-panel-population",
            details.population.map(|p| format_grouped(p as f64)),
        ),
        (
            "country-panel-area",
            details.area.map(|a| format!("{} km²", format_grouped(a))),
        ),
        (
            "country-panel-currency",
            details.currency().map(|c| match &c.symbol {
                Some(symbol) => format!("{} ({symbol})", c.name),
                None => c.name.clone(),
            }),
        ),
        ("country-panel-language", details.language().map(str::to_string)),
    ]
}

fn info_row<'a>(label: String, value: Option<String>, i18n: &I18n) -> Element<'a, Message> {
    let value = value.unwrap_or_else(|| i18n.tr("popup-unknown"));
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Top)
        .push(
            Text::new(label)
                .size(typography::BODY_SM)
                .width(Length::FillPortion(2)),
        )
        .push(
            Text::new(value)
                .size(typography::BODY_SM)
                .width(Length::FillPortion(3)),
        )
        .into()
}
