// SPDX-License-Identifier: MPL-2.0
//! Country outlines loaded from GeoJSON and queried by the map canvas.

use super::antimeridian::fix_feature_collection;
use crate::assets;
use crate::error::{Error, Result};
use geo::{BoundingRect, Contains, Coord, Geometry, MultiPolygon, Point, Rect};
use geojson::{feature::Id, GeoJson};
use std::path::PathBuf;

/// Embedded outline file, replaced by `[data] countries_geojson` when set.
pub const WORLD_GEOJSON_FILE: &str = "world-geo.json";

/// One country outline after antimeridian fix-up.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryShape {
    /// `properties.name` of the feature.
    pub name: String,
    /// Feature id, usually the ISO 3166 alpha-3 code.
    pub id: Option<String>,
    pub shape: MultiPolygon<f64>,
    pub bounds: Rect<f64>,
}

impl CountryShape {
    /// Hit test in degrees. Shifted rings may extend past ±180°, so the point
    /// is also tried one world east and west.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        [0.0, 360.0, -360.0]
            .iter()
            .any(|shift| self.shape.contains(&Point::new(lon + shift, lat)))
    }
}

/// All country outlines, in file order.
#[derive(Debug, Clone, Default)]
pub struct CountryLayer {
    countries: Vec<CountryShape>,
}

impl CountryLayer {
    pub fn new(countries: Vec<CountryShape>) -> Self {
        Self { countries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryShape> {
        self.countries.iter()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// First country containing the point, if any.
    pub fn hit_test(&self, lon: f64, lat: f64) -> Option<&CountryShape> {
        self.countries.iter().find(|c| c.contains(lon, lat))
    }

    pub fn find(&self, name: &str) -> Option<&CountryShape> {
        self.countries.iter().find(|c| c.name == name)
    }

    /// Country names sorted alphabetically, used as picker options.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.countries.iter().map(|c| c.name.clone()).collect();
        names.sort_by_key(|name| name.to_lowercase());
        names.dedup();
        names
    }
}

/// Parses a GeoJSON FeatureCollection into a [`CountryLayer`].
///
/// Features without a name, without geometry, or with a non-areal geometry
/// are skipped.
pub fn parse_countries(text: &str) -> Result<CountryLayer> {
    let GeoJson::FeatureCollection(collection) = text.parse::<GeoJson>()? else {
        return Err(Error::GeoJson("expected a FeatureCollection".into()));
    };

    let fixed = fix_feature_collection(&collection);
    let mut countries = Vec::with_capacity(fixed.features.len());

    for feature in fixed.features {
        let Some(name) = feature
            .property("name")
            .and_then(|value| value.as_str())
            .map(str::to_owned)
        else {
            tracing::debug!("skipping unnamed feature");
            continue;
        };

        let Some(geometry) = feature.geometry else {
            tracing::debug!(%name, "skipping feature without geometry");
            continue;
        };

        let shape = match Geometry::<f64>::try_from(geometry.value) {
            Ok(Geometry::Polygon(polygon)) => MultiPolygon::new(vec![polygon]),
            Ok(Geometry::MultiPolygon(multi)) => multi,
            Ok(_) => {
                tracing::debug!(%name, "skipping non-areal feature");
                continue;
            }
            Err(err) => {
                tracing::warn!(%name, %err, "skipping feature with unreadable geometry");
                continue;
            }
        };

        let Some(bounds) = shape.bounding_rect() else {
            continue;
        };

        let id = feature.id.map(|id| match id {
            Id::String(s) => s,
            Id::Number(n) => n.to_string(),
        });

        countries.push(CountryShape {
            name,
            id,
            shape,
            bounds,
        });
    }

    tracing::info!(count = countries.len(), "country outlines ready");
    Ok(CountryLayer::new(countries))
}

/// Loads the outlines from `path`, or from the embedded file when `None`.
pub fn load_countries(path: Option<&std::path::Path>) -> Result<CountryLayer> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {e}", path.display())))?,
        None => assets::data_text(WORLD_GEOJSON_FILE)?,
    };
    parse_countries(&text)
}

/// Async wrapper used by the application at startup.
pub async fn load_countries_async(path: Option<PathBuf>) -> Result<CountryLayer> {
    tokio::task::spawn_blocking(move || load_countries(path.as_deref()))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

/// Center of a bounding box as `(lon, lat)`.
pub fn bounds_center(bounds: &Rect<f64>) -> (f64, f64) {
    let Coord { x, y } = bounds.center();
    (x, y)
}
