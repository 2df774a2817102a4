// SPDX-License-Identifier: MPL-2.0
//! Response models for the REST Countries v3.1 API.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Fields requested from `/all`.
pub const SUMMARY_FIELDS: &str = "name,cca3,population,area,continents";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// Statistics used to color the map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CountrySummary {
    pub name: CountryName,
    #[serde(default)]
    pub cca3: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    /// Square kilometres.
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub continents: Vec<String>,
}

impl CountrySummary {
    /// Inhabitants per km², undefined when the area is missing or zero.
    pub fn density(&self) -> Option<f64> {
        let population = self.population? as f64;
        let area = self.area.filter(|a| *a > 0.0)?;
        Some(population / area)
    }

    /// The first listed continent, used for the categorical map.
    pub fn primary_continent(&self) -> Option<&str> {
        self.continents.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Full record from `/name/{name}?fullText=true`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CountryDetails {
    pub name: CountryName,
    #[serde(default)]
    pub cca3: Option<String>,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub continents: Vec<String>,
    /// Currency code to currency, in response order.
    #[serde(default, deserialize_with = "ordered_entries")]
    pub currencies: Vec<(String, Currency)>,
    /// Language code to language name, in response order.
    #[serde(default, deserialize_with = "ordered_entries")]
    pub languages: Vec<(String, String)>,
    #[serde(default)]
    pub flag: Option<String>,
}

impl CountryDetails {
    /// The first currency listed for the country.
    pub fn currency(&self) -> Option<&Currency> {
        self.currencies.first().map(|(_, currency)| currency)
    }

    /// The first language listed for the country.
    pub fn language(&self) -> Option<&str> {
        self.languages.first().map(|(_, language)| language.as_str())
    }

    /// Capitals joined for display.
    pub fn capitals(&self) -> Option<String> {
        (!self.capital.is_empty()).then(|| self.capital.join(", "))
    }
}

/// Deserializes a JSON object into `(key, value)` pairs, keeping the order of
/// the document.
fn ordered_entries<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    use serde::de::Error;

    let map = Option::<serde_json::Map<String, serde_json::Value>>::deserialize(deserializer)?;
    map.unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            serde_json::from_value(value)
                .map(|v| (key, v))
                .map_err(D::Error::custom)
        })
        .collect()
}
