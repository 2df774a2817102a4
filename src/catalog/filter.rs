// SPDX-License-Identifier: MPL-2.0
//! Kind and name filtering over the wonder catalog.

use super::wonder::{Wonder, WonderKind};
use std::cmp::Ordering;

/// Current sidebar filter: enabled kinds plus a free-text name search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WonderFilter {
    kinds: Vec<WonderKind>,
    search: String,
}

impl Default for WonderFilter {
    fn default() -> Self {
        Self {
            kinds: WonderKind::ALL.to_vec(),
            search: String::new(),
        }
    }
}

impl WonderFilter {
    pub fn new(kinds: impl IntoIterator<Item = WonderKind>, search: impl Into<String>) -> Self {
        let mut filter = Self {
            kinds: Vec::new(),
            search: search.into(),
        };
        for kind in kinds {
            filter.set_kind(kind, true);
        }
        filter
    }

    pub fn kinds(&self) -> &[WonderKind] {
        &self.kinds
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn includes(&self, kind: WonderKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Enables or disables a kind. Enabling an already enabled kind is a no-op.
    pub fn set_kind(&mut self, kind: WonderKind, enabled: bool) {
        if enabled {
            if !self.kinds.contains(&kind) {
                self.kinds.push(kind);
            }
        } else {
            self.kinds.retain(|k| *k != kind);
        }
    }

    /// Adds `kind` if absent, removes it otherwise.
    pub fn toggle_kind(&mut self, kind: WonderKind) {
        let enabled = self.includes(kind);
        self.set_kind(kind, !enabled);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn apply(&self, wonders: &[Wonder]) -> Vec<Wonder> {
        filter_wonders(wonders, &self.kinds, &self.search)
    }
}

/// Keeps wonders of the given kinds whose name contains `search`
/// (case-insensitive), sorted alphabetically by name.
///
/// Surrounding whitespace in `search` is ignored; an empty search keeps every
/// wonder of the selected kinds.
pub fn filter_wonders(wonders: &[Wonder], kinds: &[WonderKind], search: &str) -> Vec<Wonder> {
    let needle = search.trim().to_lowercase();

    let mut filtered: Vec<Wonder> = wonders
        .iter()
        .filter(|w| kinds.contains(&w.kind))
        .filter(|w| needle.is_empty() || w.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    filtered.sort_by(compare_names);
    filtered
}

/// Alphabetical order ignoring case; ties fall back to the raw name and then
/// the key so the order is total.
fn compare_names(a: &Wonder, b: &Wonder) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.key().cmp(&b.key()))
}
