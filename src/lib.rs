// SPDX-License-Identifier: MPL-2.0
//! `wonder_atlas` is an interactive world map built with the Iced GUI framework.
//!
//! It colors countries by population, area, density or continent using data
//! from the REST Countries API, places the wonders of the world and of nature
//! on a raster base map, and demonstrates internationalization with Fluent and
//! persisted user preferences.

#![doc(html_root_url = "https://docs.rs/wonder_atlas/0.1.0")]

pub mod app;
pub mod assets;
pub mod catalog;
pub mod choropleth;
pub mod error;
pub mod geography;
pub mod i18n;
pub mod logging;
pub mod map;
pub mod restcountries;
pub mod ui;

#[cfg(test)]
mod test_utils;
