// SPDX-License-Identifier: MPL-2.0
//! Header bar with the app name, theme mode picker and language picker.

use crate::i18n::fluent::I18n;
use crate::ui::choice::{choices, Choice};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::alignment::Vertical;
use iced::widget::{pick_list, Container, Row, Space, Text};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone)]
pub enum Message {
    ThemePicked(Choice<ThemeMode>),
    LanguagePicked(Choice<LanguageIdentifier>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    ThemeChanged(ThemeMode),
    LanguageChanged(LanguageIdentifier),
}

pub fn update(message: Message, theme_mode: &mut ThemeMode, i18n: &mut I18n) -> Event {
    match message {
        Message::ThemePicked(choice) => {
            if *theme_mode == choice.value {
                return Event::None;
            }
            *theme_mode = choice.value;
            Event::ThemeChanged(choice.value)
        }
        Message::LanguagePicked(choice) => {
            if i18n.current_locale() == &choice.value {
                return Event::None;
            }
            i18n.set_locale(choice.value.clone());
            Event::LanguageChanged(choice.value)
        }
    }
}

/// Display name of a locale, e.g. "Français (fr)".
pub fn language_label(i18n: &I18n, locale: &LanguageIdentifier) -> String {
    let name = i18n.tr(&format!("language-name-{locale}"));
    if name.starts_with("MISSING:") {
        locale.to_string()
    } else {
        format!("{name} ({locale})")
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let (themes, theme) = choices(&ThemeMode::ALL, ctx.theme_mode, |m| i18n.tr(m.i18n_key()));

    let languages: Vec<Choice<LanguageIdentifier>> = i18n
        .available_locales
        .iter()
        .map(|locale| Choice::new(locale.clone(), language_label(i18n, locale)))
        .collect();
    let language = languages
        .iter()
        .find(|c| &c.value == i18n.current_locale())
        .cloned();

    let bar = Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(Text::new(i18n.tr("window-title")).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(i18n.tr("header-theme")).size(typography::BODY_SM))
        .push(pick_list(themes, theme, Message::ThemePicked).text_size(typography::BODY_SM))
        .push(Text::new(i18n.tr("header-language")).size(typography::BODY_SM))
        .push(pick_list(languages, language, Message::LanguagePicked).text_size(typography::BODY_SM));

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .style(styles::container::header)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use unic_langid::langid;

    #[test]
    fn theme_change_is_reported() {
        let mut mode = ThemeMode::System;
        let mut i18n = I18n::default();
        let event = update(
            Message::ThemePicked(Choice::new(ThemeMode::Dark, "Dark")),
            &mut mode,
            &mut i18n,
        );
        assert_eq!(event, Event::ThemeChanged(ThemeMode::Dark));
        assert_eq!(mode, ThemeMode::Dark);
    }

    #[test]
    fn language_change_switches_locale() {
        let mut mode = ThemeMode::System;
        let mut i18n = I18n::default();
        i18n.set_locale(langid!("en-US"));

        let event = update(
            Message::LanguagePicked(Choice::new(langid!("fr"), "fr")),
            &mut mode,
            &mut i18n,
        );
        assert_eq!(event, Event::LanguageChanged(langid!("fr")));
        assert_eq!(i18n.current_locale(), &langid!("fr"));

        let again = update(
            Message::LanguagePicked(Choice::new(langid!("fr"), "fr")),
            &mut mode,
            &mut i18n,
        );
        assert_eq!(again, Event::None);
    }

    #[test]
    fn language_label_includes_code() {
        let mut i18n = I18n::default();
        i18n.set_locale(langid!("en-US"));
        assert_eq!(language_label(&i18n, &langid!("fr")), "French (fr)");
    }
}
