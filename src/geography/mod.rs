// SPDX-License-Identifier: MPL-2.0
//! Country geometry: GeoJSON loading, antimeridian fix-up and hit testing.

pub mod antimeridian;
mod countries;

pub use antimeridian::{crosses_antimeridian, fix_feature_collection, fix_ring};
pub use countries::{
    bounds_center, load_countries, load_countries_async, parse_countries, CountryLayer,
    CountryShape, WORLD_GEOJSON_FILE,
};
