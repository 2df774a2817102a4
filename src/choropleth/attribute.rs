// SPDX-License-Identifier: MPL-2.0
//! Demographic attributes the map can be colored by.

use super::scale::{OrdinalScale, Rgb, ThresholdScale, BLUES, GREENS, ORANGES};
use crate::restcountries::CountrySummary;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const POPULATION_THRESHOLDS: [f64; 8] = [
    100_000.0,
    1_000_000.0,
    5_000_000.0,
    10_000_000.0,
    30_000_000.0,
    60_000_000.0,
    100_000_000.0,
    500_000_000.0,
];

const AREA_THRESHOLDS: [f64; 8] = [
    50_000.0,
    100_000.0,
    200_000.0,
    500_000.0,
    1_000_000.0,
    2_000_000.0,
    5_000_000.0,
    10_000_000.0,
];

const DENSITY_THRESHOLDS: [f64; 8] = [5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0, 1000.0];

const CONTINENT_COLORS: [(&str, Rgb); 6] = [
    ("Europe", Rgb::hex(0xF1C232)),
    ("Africa", Rgb::hex(0x6AA84F)),
    ("North America", Rgb::hex(0x45818e)),
    ("South America", Rgb::hex(0x3C78D8)),
    ("Asia", Rgb::hex(0xA61C00)),
    ("Oceania", Rgb::hex(0x741b47)),
];

pub const POPULATION_SCALE: ThresholdScale = ThresholdScale::new(&POPULATION_THRESHOLDS, &BLUES);
pub const AREA_SCALE: ThresholdScale = ThresholdScale::new(&AREA_THRESHOLDS, &GREENS);
pub const DENSITY_SCALE: ThresholdScale = ThresholdScale::new(&DENSITY_THRESHOLDS, &ORANGES);
pub const CONTINENT_SCALE: OrdinalScale = OrdinalScale::new(&CONTINENT_COLORS);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Attribute {
    #[default]
    Population,
    Area,
    Density,
    Continents,
}

/// The value a country takes for an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue<'a> {
    Number(f64),
    Category(&'a str),
}

/// Either kind of scale, depending on the attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    Threshold(ThresholdScale),
    Ordinal(OrdinalScale),
}

impl Scale {
    pub fn color(&self, value: &AttributeValue<'_>) -> Option<Rgb> {
        match (self, value) {
            (Scale::Threshold(scale), AttributeValue::Number(n)) => scale.color(*n),
            (Scale::Ordinal(scale), AttributeValue::Category(c)) => scale.color(c),
            _ => None,
        }
    }
}

impl Attribute {
    pub const ALL: [Attribute; 4] = [
        Attribute::Population,
        Attribute::Area,
        Attribute::Density,
        Attribute::Continents,
    ];

    /// i18n key of the legend title and picker label.
    pub fn i18n_key(self) -> &'static str {
        match self {
            Attribute::Population => "attribute-population",
            Attribute::Area => "attribute-area",
            Attribute::Density => "attribute-density",
            Attribute::Continents => "attribute-continents",
        }
    }

    pub fn scale(self) -> Scale {
        match self {
            Attribute::Population => Scale::Threshold(POPULATION_SCALE),
            Attribute::Area => Scale::Threshold(AREA_SCALE),
            Attribute::Density => Scale::Threshold(DENSITY_SCALE),
            Attribute::Continents => Scale::Ordinal(CONTINENT_SCALE),
        }
    }

    pub fn value_of(self, country: &CountrySummary) -> Option<AttributeValue<'_>> {
        match self {
            Attribute::Population => country
                .population
                .map(|p| AttributeValue::Number(p as f64)),
            Attribute::Area => country.area.map(AttributeValue::Number),
            Attribute::Density => country.density().map(AttributeValue::Number),
            Attribute::Continents => country.primary_continent().map(AttributeValue::Category),
        }
    }

    pub fn color_of(self, country: &CountrySummary) -> Option<Rgb> {
        let value = self.value_of(country)?;
        self.scale().color(&value)
    }
}

/// Fill colors keyed by both common name and alpha-3 code.
///
/// GeoJSON features are matched by name first, then by id. Countries with no
/// value for the attribute, or a continent outside the palette, get no entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryFills {
    by_key: HashMap<String, Rgb>,
}

impl CountryFills {
    pub fn build(countries: &[CountrySummary], attribute: Attribute) -> Self {
        let mut by_key = HashMap::with_capacity(countries.len() * 2);
        for country in countries {
            let Some(color) = attribute.color_of(country) else {
                continue;
            };
            by_key.insert(country.name.common.clone(), color);
            if let Some(code) = &country.cca3 {
                by_key.insert(code.clone(), color);
            }
        }
        Self { by_key }
    }

    pub fn lookup(&self, name: &str, id: Option<&str>) -> Option<Rgb> {
        self.by_key
            .get(name)
            .or_else(|| id.and_then(|id| self.by_key.get(id)))
            .copied()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restcountries::CountryName;

    fn country(name: &str, code: &str, population: u64, area: f64, continent: &str) -> CountrySummary {
        CountrySummary {
            name: CountryName {
                common: name.to_string(),
                official: String::new(),
            },
            cca3: Some(code.to_string()),
            population: Some(population),
            area: Some(area),
            continents: vec![continent.to_string()],
        }
    }

    #[test]
    fn population_uses_blues_thresholds() {
        let france = country("France", "FRA", 67_000_000, 551_695.0, "Europe");
        // 60M <= 67M < 100M: seventh bin.
        assert_eq!(Attribute::Population.color_of(&france), Some(BLUES[6]));
    }

    #[test]
    fn density_divides_population_by_area() {
        let c = country("Dense", "DNS", 1_000_000, 1_000.0, "Asia");
        // 1000 per km² is on the last threshold, so it falls in the last bin.
        assert_eq!(Attribute::Density.color_of(&c), Some(ORANGES[8]));
    }

    #[test]
    fn continents_use_first_entry() {
        let mut c = country("Turkey", "TUR", 1, 1.0, "Asia");
        c.continents.push("Europe".to_string());
        assert_eq!(Attribute::Continents.color_of(&c), Some(Rgb::hex(0xA61C00)));
    }

    #[test]
    fn unknown_continent_has_no_fill() {
        let c = country("Antarctica", "ATA", 1_000, 14_000_000.0, "Antarctica");
        assert!(Attribute::Continents.color_of(&c).is_none());
    }

    #[test]
    fn fills_are_keyed_by_name_and_code() {
        let fills = CountryFills::build(
            &[country("Peru", "PER", 33_000_000, 1_285_216.0, "South America")],
            Attribute::Area,
        );
        let expected = Some(GREENS[5]);
        assert_eq!(fills.lookup("Peru", None), expected);
        assert_eq!(fills.lookup("Republic of Peru", Some("PER")), expected);
        assert_eq!(fills.lookup("Chile", Some("CHL")), None);
    }

    #[test]
    fn countries_without_value_are_skipped() {
        let mut c = country("Nowhere", "NWH", 0, 0.0, "Europe");
        c.area = None;
        let fills = CountryFills::build(&[c], Attribute::Density);
        assert!(fills.is_empty());
    }

    #[test]
    fn attribute_round_trips_through_kebab_case() {
        let json = serde_json::to_string(&Attribute::Continents).expect("serialize");
        assert_eq!(json, "\"continents\"");
    }
}
