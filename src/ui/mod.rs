// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `ViewContext`, a `Message`, an `Event` reported to the
//! application, and `update`/`view` functions.
//!
//! # Components
//!
//! - [`map_view`] - Map canvas with pan, zoom, hover and click handling
//! - [`map_controls`] - Legend, style picker, scale bar, zoom buttons, attribution
//! - [`sidebar`] - Wonder search, kind toggles and result list
//! - [`country_panel`] - Country picker, choropleth attribute and info card
//! - [`popup`] - Wonder detail popup
//! - [`header`] - Theme and language pickers
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`choice`] - Translated pick-list options

pub mod choice;
pub mod country_panel;
pub mod design_tokens;
pub mod header;
pub mod map_controls;
pub mod map_view;
pub mod notifications;
pub mod popup;
pub mod sidebar;
pub mod styles;
pub mod theming;
