// SPDX-License-Identifier: MPL-2.0
//! The wonder record and its shape validation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a wonder, serialized with the literal strings used by the
/// catalog files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WonderKind {
    #[serde(rename = "Wonder")]
    Wonder,
    #[serde(rename = "Natural Wonder")]
    NaturalWonder,
}

impl WonderKind {
    pub const ALL: [WonderKind; 2] = [WonderKind::Wonder, WonderKind::NaturalWonder];

    /// Returns the i18n key for the kind label.
    pub fn i18n_key(self) -> &'static str {
        match self {
            WonderKind::Wonder => "wonder-kind-wonder",
            WonderKind::NaturalWonder => "wonder-kind-natural",
        }
    }

    /// The literal used in the catalog files and in `settings.toml`.
    pub fn as_str(self) -> &'static str {
        match self {
            WonderKind::Wonder => "Wonder",
            WonderKind::NaturalWonder => "Natural Wonder",
        }
    }
}

impl fmt::Display for WonderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies a wonder across both catalog files. Ids restart in each file,
/// so the kind is part of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WonderKey {
    pub kind: WonderKind,
    pub id: u32,
}

/// A point of interest shown as a map marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wonder {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WonderKind,
    /// `(longitude, latitude)` in degrees.
    pub coordinates: (f64, f64),
    pub wikipedia: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Wonder {
    pub fn key(&self) -> WonderKey {
        WonderKey {
            kind: self.kind,
            id: self.id,
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates.0
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates.1
    }

    /// Checks the shape invariants a record must satisfy to be displayed.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidData(format!("wonder {} has an empty name", self.id)));
        }

        let (lon, lat) = self.coordinates;
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(Error::InvalidData(format!(
                "{}: longitude {lon} out of range",
                self.name
            )));
        }
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(Error::InvalidData(format!(
                "{}: latitude {lat} out of range",
                self.name
            )));
        }

        validate_http_url(&self.wikipedia)
            .map_err(|reason| Error::InvalidData(format!("{}: wikipedia {reason}", self.name)))?;
        if let Some(image) = &self.image {
            validate_http_url(image)
                .map_err(|reason| Error::InvalidData(format!("{}: image {reason}", self.name)))?;
        }

        Ok(())
    }
}

fn validate_http_url(raw: &str) -> std::result::Result<(), String> {
    let parsed = url::Url::parse(raw).map_err(|e| e.to_string())?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("has unsupported scheme '{other}'")),
    }
}

#[cfg(test)]
pub(crate) fn sample(id: u32, name: &str, kind: WonderKind) -> Wonder {
    Wonder {
        id,
        name: name.to_string(),
        kind,
        coordinates: (0.0, 0.0),
        wikipedia: format!("https://en.wikipedia.org/wiki/{}", name.replace(' ', "_")),
        description: None,
        quote: None,
        quote_author: None,
        image: None,
    }
}
