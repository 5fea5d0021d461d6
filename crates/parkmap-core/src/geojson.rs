// crates/parkmap-core/src/geojson.rs

//! GeoJSON output model.
//!
//! Only the shapes this crate emits are modelled: a `FeatureCollection` of
//! `Feature`s, each carrying a `LineString` and the zone properties.

use crate::zone::ZoneType;
use serde::{Deserialize, Serialize};

/// A (longitude, latitude) pair, serialized as `[lng, lat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self { lng, lat }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.lng, c.lat]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString { coordinates: Vec<Coordinate> },
}

impl Geometry {
    pub fn coordinates(&self) -> &[Coordinate] {
        match self {
            Geometry::LineString { coordinates } => coordinates,
        }
    }
}

/// Properties attached to every feature.
///
/// Absent CSV values stay `None` and serialize as `null`. `color` is always
/// derived from `zone_type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneProperties {
    pub parking_zone: Option<String>,
    pub zone_type: Option<String>,
    pub stall_type: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
    pub price_zone: Option<String>,
    pub enforceable_time: Option<String>,
    pub max_time: Option<String>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub properties: ZoneProperties,
    pub geometry: Geometry,
}

impl Feature {
    pub fn line(coordinates: Vec<Coordinate>, properties: ZoneProperties) -> Self {
        Self {
            properties,
            geometry: Geometry::LineString { coordinates },
        }
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        self.geometry.coordinates()
    }

    /// The enumerated zone type, if the label is one of the known nine.
    pub fn zone_type(&self) -> Option<ZoneType> {
        self.properties
            .zone_type
            .as_deref()
            .and_then(ZoneType::from_label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Feature> {
        self.features.get(index)
    }

    /// Total number of vertices over all features.
    pub fn coordinate_count(&self) -> usize {
        self.features.iter().map(|f| f.coordinates().len()).sum()
    }

    #[cfg(feature = "json")]
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    #[cfg(feature = "json")]
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> FeatureCollection {
        let props = ZoneProperties {
            parking_zone: Some("1001".into()),
            zone_type: Some("Taxi Zone".into()),
            color: "#00ff00".into(),
            ..Default::default()
        };
        FeatureCollection::new(vec![Feature::line(
            vec![Coordinate::new(-114.08, 51.05), Coordinate::new(-114.07, 51.06)],
            props,
        )])
    }

    #[test]
    fn serializes_as_geojson() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        let feature = &value["features"][0];
        assert_eq!(feature["type"], "Feature");
        assert_eq!(feature["geometry"]["type"], "LineString");
        assert_eq!(
            feature["geometry"]["coordinates"],
            json!([[-114.08, 51.05], [-114.07, 51.06]])
        );
        assert_eq!(feature["properties"]["parkingZone"], "1001");
        assert_eq!(feature["properties"]["zoneType"], "Taxi Zone");
        assert_eq!(feature["properties"]["color"], "#00ff00");
        assert!(feature["properties"]["address"].is_null());
    }

    #[test]
    fn counts_and_zone_type() {
        let fc = sample();
        assert_eq!(fc.len(), 1);
        assert_eq!(fc.coordinate_count(), 2);
        assert_eq!(fc.features[0].zone_type(), Some(ZoneType::Taxi));
    }
}
