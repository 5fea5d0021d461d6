// crates/parkmap-core/src/search.rs

//! Queries over a loaded collection: stats, address search, zone filter.

use crate::geojson::{Feature, FeatureCollection};
use crate::zone::{ZoneType, ZONE_TABLE};
use serde::Serialize;

/// Convert a string into a folded key for accent- and case-insensitive
/// comparison (`"Rue Sainte-Thérèse"` -> `"rue sainte-therese"`).
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Simple aggregate statistics for a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayStats {
    pub features: usize,
    pub coordinates: usize,
    /// Feature count per zone type, in legend order.
    pub by_zone_type: Vec<(ZoneType, usize)>,
    /// Features whose zone type is missing or not in the table.
    pub other: usize,
}

impl FeatureCollection {
    pub fn stats(&self) -> OverlayStats {
        let mut counts = vec![0usize; ZONE_TABLE.len()];
        let mut other = 0;
        for feature in self {
            match feature.zone_type() {
                Some(z) => counts[z as usize] += 1,
                None => other += 1,
            }
        }
        OverlayStats {
            features: self.len(),
            coordinates: self.coordinate_count(),
            by_zone_type: ZoneType::all().zip(counts).collect(),
            other,
        }
    }

    /// Features whose address contains `query`, ignoring case and accents.
    pub fn find_by_address(&self, query: &str) -> Vec<&Feature> {
        let q = fold_key(query.trim());
        if q.is_empty() {
            return Vec::new();
        }
        self.iter()
            .filter(|f| {
                f.properties
                    .address
                    .as_deref()
                    .is_some_and(|a| fold_key(a).contains(&q))
            })
            .collect()
    }

    pub fn features_of_type(&self, zone: ZoneType) -> impl Iterator<Item = &Feature> {
        self.iter().filter(move |f| f.zone_type() == Some(zone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geojson::{Coordinate, ZoneProperties};

    fn feature(zone: Option<&str>, address: Option<&str>) -> Feature {
        Feature::line(
            vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)],
            ZoneProperties {
                zone_type: zone.map(str::to_string),
                address: address.map(str::to_string),
                ..Default::default()
            },
        )
    }

    fn sample() -> FeatureCollection {
        FeatureCollection::new(vec![
            feature(Some("Taxi Zone"), Some("200 Rue Thérèse SW")),
            feature(Some("Taxi Zone"), Some("9 Ave SE")),
            feature(Some("Loading Zone"), None),
            feature(Some("Bus Zone"), Some("1 St")),
            feature(None, Some("2 St")),
        ])
    }

    #[test]
    fn stats_group_by_zone() {
        let s = sample().stats();
        assert_eq!(s.features, 5);
        assert_eq!(s.coordinates, 10);
        assert_eq!(s.by_zone_type[0], (ZoneType::Parking, 0));
        assert_eq!(s.by_zone_type[1], (ZoneType::Loading, 1));
        assert_eq!(s.by_zone_type[2], (ZoneType::Taxi, 2));
        assert_eq!(s.other, 2);
    }

    #[test]
    fn stats_cover_every_table_entry() {
        let s = FeatureCollection::default().stats();
        assert_eq!(s.by_zone_type.len(), ZONE_TABLE.len());
        assert!(s.by_zone_type.iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn address_search_folds_accents_and_case() {
        let fc = sample();
        assert_eq!(fc.find_by_address("therese").len(), 1);
        assert_eq!(fc.find_by_address("  ST ").len(), 2);
        assert!(fc.find_by_address("").is_empty());
    }

    #[test]
    fn filter_by_type() {
        assert_eq!(sample().features_of_type(ZoneType::Taxi).count(), 2);
        assert_eq!(sample().features_of_type(ZoneType::Vip).count(), 0);
    }
}
