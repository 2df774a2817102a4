// SPDX-License-Identifier: MPL-2.0
//! Rewrites polygon rings that jump across the ±180° meridian so they render
//! as one contiguous shape instead of a band spanning the whole map.

use geojson::{FeatureCollection, Value};

/// Countries whose rings are moved wholesale east of the antimeridian when
/// they cross it.
pub const WHOLE_RING_SHIFT_COUNTRIES: [&str; 5] =
    ["Russia", "Fiji", "New Zealand", "United States", "Kiribati"];

/// A consecutive longitude jump larger than this is treated as a crossing.
const CROSSING_THRESHOLD: f64 = 180.0;

/// Returns true when two consecutive positions of `ring` are more than 180°
/// of longitude apart.
pub fn crosses_antimeridian(ring: &[Vec<f64>]) -> bool {
    ring.windows(2)
        .any(|pair| (lon(&pair[0]) - lon(&pair[1])).abs() > CROSSING_THRESHOLD)
}

/// Fixes one ring (list of `[lon, lat, ...]` positions) for the named country.
///
/// Rings with fewer than two positions are returned unchanged. For the
/// countries in [`WHOLE_RING_SHIFT_COUNTRIES`] a crossing ring has 360° added
/// to every negative longitude. Any other ring is walked pair by pair: where
/// a jump exceeds 180°, the first position of the pair moves by +360° if it
/// is west of Greenwich and by −360° otherwise. Latitudes never change.
pub fn fix_ring(ring: &[Vec<f64>], country_name: Option<&str>) -> Vec<Vec<f64>> {
    let mut fixed = ring.to_vec();
    if fixed.len() < 2 {
        return fixed;
    }

    let shift_whole_ring =
        country_name.is_some_and(|name| WHOLE_RING_SHIFT_COUNTRIES.contains(&name));

    if shift_whole_ring && crosses_antimeridian(ring) {
        for position in &mut fixed {
            let current = lon(position);
            if current < 0.0 {
                set_lon(position, current + 360.0);
            }
        }
        return fixed;
    }

    for i in 0..fixed.len() - 1 {
        let current = lon(&fixed[i]);
        let next = lon(&fixed[i + 1]);
        if (current - next).abs() > CROSSING_THRESHOLD {
            let shifted = if current < 0.0 {
                current + 360.0
            } else {
                current - 360.0
            };
            set_lon(&mut fixed[i], shifted);
        }
    }

    fixed
}

/// Returns a copy of `collection` with every Polygon and MultiPolygon ring
/// fixed. Other geometry types pass through untouched.
pub fn fix_feature_collection(collection: &FeatureCollection) -> FeatureCollection {
    let mut fixed = collection.clone();

    for feature in &mut fixed.features {
        let name = feature
            .property("name")
            .and_then(|value| value.as_str())
            .map(str::to_owned);
        let Some(geometry) = feature.geometry.as_mut() else {
            continue;
        };

        match &mut geometry.value {
            Value::Polygon(rings) => fix_polygon(rings, name.as_deref()),
            Value::MultiPolygon(polygons) => {
                for rings in polygons.iter_mut() {
                    fix_polygon(rings, name.as_deref());
                }
            }
            _ => {}
        }
    }

    fixed
}

fn fix_polygon(rings: &mut [Vec<Vec<f64>>], name: Option<&str>) {
    for ring in rings.iter_mut() {
        *ring = fix_ring(ring, name);
    }
}

fn lon(position: &[f64]) -> f64 {
    position.first().copied().unwrap_or(0.0)
}

fn set_lon(position: &mut [f64], value: f64) {
    if let Some(first) = position.first_mut() {
        *first = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use geojson::GeoJson;

    fn ring(lons: &[f64]) -> Vec<Vec<f64>> {
        lons.iter().map(|lon| vec![*lon, 10.0]).collect()
    }

    fn lons(ring: &[Vec<f64>]) -> Vec<f64> {
        ring.iter().map(|p| p[0]).collect()
    }

    #[test]
    fn short_rings_are_unchanged() {
        assert!(fix_ring(&[], Some("Fiji")).is_empty());
        assert_eq!(fix_ring(&ring(&[179.0]), None), ring(&[179.0]));
    }

    #[test]
    fn ring_without_crossing_is_unchanged() {
        let input = ring(&[10.0, 20.0, 30.0, 10.0]);
        assert_eq!(fix_ring(&input, Some("France")), input);
        assert_eq!(fix_ring(&input, Some("Russia")), input);
    }

    #[test]
    fn listed_country_shifts_every_negative_longitude() {
        let input = ring(&[178.0, 179.9, -179.9, -178.0, 178.0]);
        let fixed = fix_ring(&input, Some("Fiji"));
        let expected = [178.0, 179.9, 180.1, 182.0, 178.0];
        for (got, want) in lons(&fixed).iter().zip(expected) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-9);
        }
    }

    #[test]
    fn other_country_shifts_the_first_position_of_each_jump() {
        let input = ring(&[170.0, -170.0, -160.0]);
        let fixed = fix_ring(&input, Some("Somewhere"));
        assert_eq!(lons(&fixed), vec![-190.0, -170.0, -160.0]);
    }

    #[test]
    fn each_jump_is_fixed_on_its_own() {
        let input = ring(&[175.0, -175.0, 170.0]);
        let fixed = fix_ring(&input, None);
        assert_eq!(lons(&fixed), vec![-185.0, 185.0, 170.0]);
    }

    #[test]
    fn negative_start_is_moved_east() {
        let input = ring(&[-179.0, 179.0, 178.0]);
        let fixed = fix_ring(&input, None);
        assert_eq!(lons(&fixed), vec![181.0, 179.0, 178.0]);
    }

    #[test]
    fn latitudes_never_change() {
        let input = vec![vec![179.0, -16.0], vec![-179.0, -17.0], vec![179.0, -18.0]];
        let fixed = fix_ring(&input, Some("Fiji"));
        let lats: Vec<f64> = fixed.iter().map(|p| p[1]).collect();
        assert_eq!(lats, vec![-16.0, -17.0, -18.0]);
    }

    #[test]
    fn collection_fix_covers_polygons_and_multipolygons() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"name": "Fiji"},
                 "geometry": {"type": "MultiPolygon", "coordinates": [
                    [[[179.0, -16.0], [-179.0, -16.0], [-179.0, -17.0], [179.0, -16.0]]]
                 ]}},
                {"type": "Feature", "properties": {"name": "Pointland"},
                 "geometry": {"type": "Point", "coordinates": [-179.0, 0.0]}}
            ]
        }"#;
        let GeoJson::FeatureCollection(collection) = text.parse::<GeoJson>().expect("geojson")
        else {
            panic!("expected a feature collection");
        };

        let fixed = fix_feature_collection(&collection);

        let geometry = fixed.features[0].geometry.as_ref().expect("geometry");
        let Value::MultiPolygon(polygons) = &geometry.value else {
            panic!("expected multipolygon");
        };
        assert_eq!(lons(&polygons[0][0]), vec![179.0, 181.0, 181.0, 179.0]);

        let point = fixed.features[1].geometry.as_ref().expect("geometry");
        assert_eq!(point.value, Value::Point(vec![-179.0, 0.0]));

        // Input left untouched.
        let original = collection.features[0].geometry.as_ref().expect("geometry");
        let Value::MultiPolygon(original) = &original.value else {
            panic!("expected multipolygon");
        };
        assert_eq!(original[0][0][1][0], -179.0);
    }
}
