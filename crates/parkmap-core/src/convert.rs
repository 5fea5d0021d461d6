// crates/parkmap-core/src/convert.rs

//! Rows -> feature collection.
//!
//! Conversion never fails as a whole. Every row either becomes a feature, is
//! dropped as blank (no geometry text), or is dropped with a [`SkippedRow`]
//! entry that is also logged at `error`.

use crate::error::{GeometryError, TokenError};
use crate::geojson::{Feature, FeatureCollection, ZoneProperties};
use crate::record::ParkingRecord;
use crate::wkt::parse_multilinestring;
use crate::zone::{zone_color, ZoneType};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, error, info};

/// Result of converting a batch of rows.
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    pub collection: FeatureCollection,
    pub report: ConversionReport,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionReport {
    /// Data rows seen, including dropped ones.
    pub rows: usize,
    /// Rows without geometry text. Dropped silently.
    pub blank: usize,
    pub skipped: Vec<SkippedRow>,
    /// Coordinate tokens dropped from rows that still produced a feature.
    pub rejected_tokens: usize,
    /// Non-empty `ZONE_TYPE` labels outside the zone table, with counts.
    pub unknown_zone_types: BTreeMap<String, usize>,
}

/// A row that produced no feature.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based data row number (header excluded).
    pub row: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    Geometry(GeometryError),
    /// The CSV reader could not produce a record for this row.
    Record(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Geometry(e) => write!(f, "geometry: {e}"),
            SkipReason::Record(e) => write!(f, "record: {e}"),
        }
    }
}

impl fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.reason)
    }
}

/// What became of a single record.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Feature {
        feature: Feature,
        rejected: Vec<TokenError>,
    },
    Blank,
    Invalid(GeometryError),
}

/// Properties for a record, color derived from the zone table.
pub fn properties_of(record: &ParkingRecord) -> ZoneProperties {
    ZoneProperties {
        parking_zone: record.parking_zone.clone(),
        zone_type: record.zone_type.clone(),
        stall_type: record.stall_type.clone(),
        address: record.address_desc.clone(),
        status: record.status.clone(),
        price_zone: record.price_zone.clone(),
        enforceable_time: record.enforceable_time.clone(),
        max_time: record.max_time.clone(),
        color: zone_color(record.zone_type.as_deref()).to_string(),
    }
}

pub fn convert_record(record: &ParkingRecord) -> RowOutcome {
    let Some(text) = record.geometry_text() else {
        return RowOutcome::Blank;
    };
    match parse_multilinestring(text).and_then(|parsed| parsed.into_line()) {
        Ok((coordinates, rejected)) => RowOutcome::Feature {
            feature: Feature::line(coordinates, properties_of(record)),
            rejected,
        },
        Err(e) => RowOutcome::Invalid(e),
    }
}

/// Incremental converter; rows are pushed in input order.
#[derive(Debug, Default)]
pub struct Converter {
    features: Vec<Feature>,
    report: ConversionReport,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: &ParkingRecord) {
        self.report.rows += 1;
        let row = self.report.rows;
        match convert_record(record) {
            RowOutcome::Feature { feature, rejected } => {
                for token in &rejected {
                    debug!(row, %token, "dropped coordinate token");
                }
                self.report.rejected_tokens += rejected.len();
                self.note_zone_type(record.zone_type.as_deref());
                self.features.push(feature);
            }
            RowOutcome::Blank => {
                self.report.blank += 1;
            }
            RowOutcome::Invalid(e) => {
                error!(row, error = %e, zone = ?record.parking_zone, "Error processing row");
                self.report.skipped.push(SkippedRow {
                    row,
                    reason: SkipReason::Geometry(e),
                });
            }
        }
    }

    /// Record a row the CSV layer could not decode.
    pub fn push_error(&mut self, error: impl fmt::Display) {
        self.report.rows += 1;
        let row = self.report.rows;
        error!(row, error = %error, "Error reading CSV record");
        self.report.skipped.push(SkippedRow {
            row,
            reason: SkipReason::Record(error.to_string()),
        });
    }

    fn note_zone_type(&mut self, zone_type: Option<&str>) {
        let Some(label) = zone_type.filter(|s| !s.is_empty()) else {
            return;
        };
        if ZoneType::from_label(label).is_some() {
            return;
        }
        let count = self
            .report
            .unknown_zone_types
            .entry(label.to_string())
            .or_insert(0);
        if *count == 0 {
            debug!(label, "zone type not in table, using fallback color");
        }
        *count += 1;
    }

    pub fn finish(self) -> Conversion {
        info!(
            features = self.features.len(),
            skipped = self.report.skipped.len(),
            blank = self.report.blank,
            "Processed {} features",
            self.features.len()
        );
        Conversion {
            collection: FeatureCollection::new(self.features),
            report: self.report,
        }
    }
}

/// Convert already-decoded records.
pub fn convert_records<'a, I>(records: I) -> Conversion
where
    I: IntoIterator<Item = &'a ParkingRecord>,
{
    let mut converter = Converter::new();
    for record in records {
        converter.push(record);
    }
    converter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str, zone_type: &str) -> ParkingRecord {
        ParkingRecord {
            line: Some(line.into()),
            parking_zone: Some("1".into()),
            zone_type: Some(zone_type.into()),
            ..Default::default()
        }
    }

    #[test]
    fn valid_row_becomes_one_feature_with_all_pairs() {
        let r = record(
            "MULTILINESTRING ((-114.08 51.05, -114.07 51.06, -114.06 51.07))",
            "Taxi Zone",
        );
        match convert_record(&r) {
            RowOutcome::Feature { feature, rejected } => {
                assert_eq!(feature.coordinates().len(), 3);
                assert!(rejected.is_empty());
                assert_eq!(feature.properties.color, "#00ff00");
                assert_eq!(feature.properties.parking_zone.as_deref(), Some("1"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn short_or_garbage_rows_produce_nothing() {
        for line in [
            "MULTILINESTRING (())",
            "MULTILINESTRING ((1 2))",
            "MULTILINESTRING ((x y, z w))",
            "not a geometry",
        ] {
            assert!(
                matches!(convert_record(&record(line, "Taxi Zone")), RowOutcome::Invalid(_)),
                "{line}"
            );
        }
    }

    #[test]
    fn missing_geometry_is_blank() {
        let r = ParkingRecord::default();
        assert_eq!(convert_record(&r), RowOutcome::Blank);
    }

    #[test]
    fn report_counts_each_kind() {
        let rows = vec![
            record("MULTILINESTRING ((1 2, 3 4))", "Taxi Zone"),
            record("MULTILINESTRING ((1 2, bad, 3 4))", "Mystery Zone"),
            record("MULTILINESTRING ((1 2, 3 4))", "Mystery Zone"),
            record("MULTILINESTRING ((1 2))", "Loading Zone"),
            ParkingRecord::default(),
        ];
        let Conversion { collection, report } = convert_records(&rows);
        assert_eq!(collection.len(), 3);
        assert_eq!(report.rows, 5);
        assert_eq!(report.blank, 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].row, 4);
        assert_eq!(report.rejected_tokens, 1);
        assert_eq!(report.unknown_zone_types.get("Mystery Zone"), Some(&2));
        assert_eq!(collection.features[1].properties.color, "#000000");
    }
}
