// SPDX-License-Identifier: MPL-2.0
//! Choropleth coloring of countries by a demographic attribute.
//!
//! Numeric attributes use threshold scales over nine-step sequential schemes;
//! continents use a fixed categorical palette.

mod attribute;
mod legend;
pub mod scale;

pub use attribute::{
    Attribute, AttributeValue, CountryFills, Scale, AREA_SCALE, CONTINENT_SCALE, DENSITY_SCALE,
    POPULATION_SCALE,
};
pub use legend::{format_grouped, format_legend_value, legend, Legend, LegendEntry};
pub use scale::{OrdinalScale, Rgb, ThresholdScale};
