// SPDX-License-Identifier: MPL-2.0
//! Preference and map state persistence.
//!
//! Preferences (style, attribute, filters, marker visibility, theme and
//! language) go to `settings.toml`; the camera and the selected country go to
//! the persisted state file.

use super::config::{self, Config};
use super::persisted_state::AppState;
use crate::catalog::WonderFilter;
use crate::choropleth::Attribute;
use crate::map::{Camera, TileStyle};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use unic_langid::LanguageIdentifier;

/// Everything persisted to `settings.toml` from the running app.
pub struct PreferencesContext<'a> {
    pub config: &'a mut Config,
    pub theme_mode: ThemeMode,
    pub locale: &'a LanguageIdentifier,
    pub base_style: TileStyle,
    pub attribute: Attribute,
    pub filter: &'a WonderFilter,
    pub show_wonders: bool,
    pub notifications: &'a mut notifications::Manager,
}

/// Copies the current preferences into `config`.
pub fn apply_preferences(ctx: &mut PreferencesContext<'_>) {
    let config = &mut *ctx.config;
    config.general.theme_mode = ctx.theme_mode;
    config.general.language = Some(ctx.locale.to_string());
    config.map.base_style = Some(ctx.base_style);
    config.map.attribute = Some(ctx.attribute);
    config.wonders.show = Some(ctx.show_wonders);
    config.wonders.kinds = Some(ctx.filter.kinds().to_vec());
}

/// Persists the current preferences to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise
/// [`apply_preferences`] directly.
pub fn persist_preferences(mut ctx: PreferencesContext<'_>) {
    apply_preferences(&mut ctx);

    if cfg!(test) {
        return;
    }

    if let Err(error) = config::save(ctx.config) {
        tracing::warn!(%error, "failed to save preferences");
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}

/// Writes the camera and selection to the state file.
pub fn persist_map_state(
    camera: &Camera,
    selected_country: Option<&str>,
    notifications: &mut notifications::Manager,
) {
    if cfg!(test) {
        return;
    }

    let state = AppState::capture(camera, selected_country);
    if let Some(key) = state.save() {
        notifications.push(Notification::warning(&key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WonderKind;
    use unic_langid::langid;

    #[test]
    fn preferences_are_copied_into_config() {
        let mut config = Config::default();
        let mut notifications = notifications::Manager::new();
        let filter = WonderFilter::new([WonderKind::NaturalWonder], "");
        let locale = langid!("fr");

        apply_preferences(&mut PreferencesContext {
            config: &mut config,
            theme_mode: ThemeMode::Dark,
            locale: &locale,
            base_style: TileStyle::Satellite,
            attribute: Attribute::Density,
            filter: &filter,
            show_wonders: false,
            notifications: &mut notifications,
        });

        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.base_style(), TileStyle::Satellite);
        assert_eq!(config.attribute(), Attribute::Density);
        assert!(!config.show_wonders());
        assert_eq!(config.wonder_filter().kinds(), &[WonderKind::NaturalWonder]);
    }
}
