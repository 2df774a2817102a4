// SPDX-License-Identifier: MPL-2.0
//! Country statistics and details from the REST Countries API.

mod cache;
mod client;
mod model;

pub use cache::{load_statistics, CachedStats, StatsCache, STATS_CACHE_FILE};
pub use client::{RestCountriesClient, USER_AGENT};
pub use model::{CountryDetails, CountryName, CountrySummary, Currency, SUMMARY_FIELDS};
