// SPDX-License-Identifier: MPL-2.0
//! Wonder sidebar: search, kind toggles, marker visibility and the result list.

use crate::catalog::{Wonder, WonderFilter, WonderKey, WonderKind};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, text_input, toggler, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub filter: &'a WonderFilter,
    pub show_wonders: bool,
    /// Filtered and sorted wonders.
    pub results: &'a [Wonder],
    /// Whether the catalog is still loading.
    pub loading: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    ToggleKind(WonderKind),
    ShowWondersToggled(bool),
    Select(WonderKey),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Search text changed; results must be recomputed.
    SearchChanged,
    /// Enabled kinds changed; results must be recomputed and saved.
    KindsChanged,
    ShowWondersChanged,
    WonderChosen(WonderKey),
}

pub fn update(message: Message, filter: &mut WonderFilter, show_wonders: &mut bool) -> Event {
    match message {
        Message::SearchChanged(search) => {
            filter.set_search(search);
            Event::SearchChanged
        }
        Message::ToggleKind(kind) => {
            filter.toggle_kind(kind);
            Event::KindsChanged
        }
        Message::ShowWondersToggled(show) => {
            *show_wonders = show;
            Event::ShowWondersChanged
        }
        Message::Select(key) => Event::WonderChosen(key),
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let title = Text::new(i18n.tr("sidebar-title")).size(typography::TITLE_SM);

    let search = text_input(&i18n.tr("sidebar-search-placeholder"), ctx.filter.search())
        .on_input(Message::SearchChanged)
        .padding(spacing::XS)
        .size(typography::BODY);

    let kinds = WonderKind::ALL.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, kind| {
            let style = if ctx.filter.includes(*kind) {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(
                button(Text::new(i18n.tr(kind.i18n_key())).size(typography::BODY_SM))
                    .on_press(Message::ToggleKind(*kind))
                    .padding([spacing::XXS, spacing::XS])
                    .style(style),
            )
        },
    );

    let show = toggler(ctx.show_wonders)
        .label(i18n.tr("sidebar-show-wonders"))
        .on_toggle(Message::ShowWondersToggled)
        .text_size(typography::BODY_SM);

    let count = Text::new(if ctx.loading {
        i18n.tr("sidebar-loading")
    } else {
        i18n.tr_with_args("sidebar-result-count", &[("count", ctx.results.len().into())])
    })
    .size(typography::CAPTION);

    let list: Element<'_, Message> = if ctx.results.is_empty() && !ctx.loading {
        Text::new(i18n.tr("sidebar-empty"))
            .size(typography::BODY_SM)
            .into()
    } else {
        let entries = ctx
            .results
            .iter()
            .fold(Column::new().spacing(spacing::XXS), |column, wonder| {
                column.push(entry(wonder, i18n))
            });
        scrollable(entries).height(Length::Fill).into()
    };

    let content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(title)
        .push(search)
        .push(kinds)
        .push(show)
        .push(count)
        .push(list);

    Container::new(content)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn entry<'a>(wonder: &'a Wonder, i18n: &'a I18n) -> Element<'a, Message> {
    let label = Column::new()
        .push(Text::new(wonder.name.as_str()).size(typography::BODY))
        .push(Text::new(i18n.tr(wonder.kind.i18n_key())).size(typography::CAPTION));

    button(
        Row::new()
            .align_y(Vertical::Center)
            .push(label)
            .width(Length::Fill),
    )
    .on_press(Message::Select(wonder.key()))
    .padding(spacing::XS)
    .width(Length::Fill)
    .style(styles::button::list_entry)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_updates_filter() {
        let mut filter = WonderFilter::default();
        let mut show = true;
        let event = update(Message::SearchChanged("reef".into()), &mut filter, &mut show);
        assert_eq!(event, Event::SearchChanged);
        assert_eq!(filter.search(), "reef");
    }

    #[test]
    fn toggling_kind_twice_restores_filter() {
        let mut filter = WonderFilter::default();
        let mut show = true;

        update(Message::ToggleKind(WonderKind::Wonder), &mut filter, &mut show);
        assert!(!filter.includes(WonderKind::Wonder));

        let event = update(Message::ToggleKind(WonderKind::Wonder), &mut filter, &mut show);
        assert_eq!(event, Event::KindsChanged);
        assert!(filter.includes(WonderKind::Wonder));
    }

    #[test]
    fn show_toggle_and_selection_are_forwarded() {
        let mut filter = WonderFilter::default();
        let mut show = true;

        let event = update(Message::ShowWondersToggled(false), &mut filter, &mut show);
        assert_eq!(event, Event::ShowWondersChanged);
        assert!(!show);

        let key = WonderKey {
            kind: WonderKind::NaturalWonder,
            id: 4,
        };
        assert_eq!(
            update(Message::Select(key), &mut filter, &mut show),
            Event::WonderChosen(key)
        );
    }
}
