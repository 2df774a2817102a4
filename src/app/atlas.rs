// SPDX-License-Identifier: MPL-2.0
//! Loaded data and the views derived from it.
//!
//! The wonder catalog keeps the sidebar results in sync with the filter; the
//! choropleth keeps fills and legend in sync with the statistics and the
//! selected attribute.

use crate::catalog::{Wonder, WonderFilter, WonderKey};
use crate::choropleth::{legend, Attribute, CountryFills, Legend};
use crate::restcountries::CountrySummary;

#[derive(Debug, Default)]
pub struct WonderCatalog {
    wonders: Vec<Wonder>,
    pub filter: WonderFilter,
    pub show_markers: bool,
    results: Vec<Wonder>,
    loading: bool,
}

impl WonderCatalog {
    pub fn new(filter: WonderFilter, show_markers: bool) -> Self {
        Self {
            wonders: Vec::new(),
            filter,
            show_markers,
            results: Vec::new(),
            loading: true,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_wonders(&mut self, wonders: Vec<Wonder>) {
        self.wonders = wonders;
        self.loading = false;
        self.refilter();
    }

    /// Marks loading as finished without data.
    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    /// Recomputes the results after a filter change.
    pub fn refilter(&mut self) {
        self.results = self.filter.apply(&self.wonders);
    }

    /// Filtered wonders, sorted by name.
    pub fn results(&self) -> &[Wonder] {
        &self.results
    }

    /// Wonders drawn on the map: the results, or nothing when hidden.
    pub fn markers(&self) -> &[Wonder] {
        if self.show_markers {
            &self.results
        } else {
            &[]
        }
    }

    /// Looks a wonder up in the full catalog, regardless of the filter.
    pub fn find(&self, key: WonderKey) -> Option<&Wonder> {
        self.wonders.iter().find(|w| w.key() == key)
    }
}

#[derive(Debug)]
pub struct Choropleth {
    statistics: Vec<CountrySummary>,
    attribute: Attribute,
    fills: CountryFills,
    legend: Legend,
}

impl Default for Choropleth {
    fn default() -> Self {
        Self::new(Attribute::default())
    }
}

impl Choropleth {
    pub fn new(attribute: Attribute) -> Self {
        Self {
            statistics: Vec::new(),
            attribute,
            fills: CountryFills::default(),
            legend: legend(attribute),
        }
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    pub fn fills(&self) -> &CountryFills {
        &self.fills
    }

    pub fn has_statistics(&self) -> bool {
        !self.statistics.is_empty()
    }

    /// Legend for the map chrome; hidden until statistics are available.
    pub fn legend(&self) -> Option<&Legend> {
        self.has_statistics().then_some(&self.legend)
    }

    pub fn set_statistics(&mut self, statistics: Vec<CountrySummary>) {
        self.statistics = statistics;
        self.fills = CountryFills::build(&self.statistics, self.attribute);
    }

    pub fn set_attribute(&mut self, attribute: Attribute) {
        self.attribute = attribute;
        self.fills = CountryFills::build(&self.statistics, attribute);
        self.legend = legend(attribute);
    }
}
