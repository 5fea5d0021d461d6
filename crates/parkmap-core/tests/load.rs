use parkmap_core::prelude::*;
use parkmap_core::{SkipReason, ZONE_TABLE};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

const HEADER: &str = "PARKING_ZONE,ZONE_TYPE,STALL_TYPE,ADDRESS_DESC,STATUS,PRICE_ZONE,ENFORCEABLE_TIME,MAX_TIME,line\n";

fn three_valid_one_malformed() -> String {
    let mut s = String::from(HEADER);
    s.push_str("1,Taxi Zone,Parallel,1 ST SW,Active,1,Anytime,30,\"MULTILINESTRING ((-114.08 51.05, -114.07 51.06))\"\n");
    s.push_str("2,Loading Zone,Parallel,2 ST SW,Active,1,Anytime,15,\"MULTILINESTRING ((-114.08 51.05, -114.07 51.06, -114.06 51.07))\"\n");
    s.push_str("3,Unknown Zone,Parallel,3 ST SW,Active,1,Anytime,,\"MULTILINESTRING ((1 2, 3 4, 5 6, 7 8))\"\n");
    s.push_str("4,Taxi Zone,Parallel,4 ST SW,Active,1,Anytime,,\"MULTILINESTRING ((oops))\"\n");
    s
}

#[test]
fn three_valid_rows_and_one_malformed() {
    let conv = Conversion::from_csv_str(&three_valid_one_malformed()).unwrap();
    assert_eq!(conv.collection.len(), 3);
    assert_eq!(conv.report.skipped.len(), 1);
    assert_eq!(conv.report.skipped[0].row, 4);
    assert!(matches!(conv.report.skipped[0].reason, SkipReason::Geometry(_)));

    let counts: Vec<_> = conv.collection.iter().map(|f| f.coordinates().len()).collect();
    assert_eq!(counts, vec![2, 3, 4]);

    let colors: Vec<_> = conv
        .collection
        .iter()
        .map(|f| f.properties.color.as_str())
        .collect();
    assert_eq!(colors, vec!["#00ff00", "#0000ff", "#000000"]);
}

/// Counts events per level.
#[derive(Clone, Default)]
struct LevelCounter(Arc<Mutex<Vec<Level>>>);

impl LevelCounter {
    fn count(&self, level: Level) -> usize {
        self.0.lock().unwrap().iter().filter(|l| **l == level).count()
    }
}

impl<S: Subscriber> Layer<S> for LevelCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(*event.metadata().level());
    }
}

#[test]
fn malformed_row_logs_exactly_one_error() {
    let counter = LevelCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let conv = tracing::subscriber::with_default(subscriber, || {
        Conversion::from_csv_str(&three_valid_one_malformed()).unwrap()
    });
    assert_eq!(conv.collection.len(), 3);
    assert_eq!(counter.count(Level::ERROR), 1);
    assert_eq!(counter.count(Level::WARN), 0);
}

#[test]
fn example_line_coordinates() {
    let coords = line_coordinates("MULTILINESTRING ((-114.08 51.05, -114.07 51.06))").unwrap();
    let pairs: Vec<[f64; 2]> = coords.into_iter().map(Into::into).collect();
    assert_eq!(pairs, vec![[-114.08, 51.05], [-114.07, 51.06]]);
}

#[test]
fn bundled_dataset_loads() {
    let conv = Conversion::load_from_path(Conversion::default_dataset_path()).unwrap();
    assert_eq!(conv.report.rows, 12);
    assert_eq!(conv.collection.len(), 10);
    assert_eq!(conv.report.skipped.len(), 1);
    assert_eq!(conv.report.blank, 1);
    assert_eq!(conv.report.unknown_zone_types.get("Commercial Zone"), Some(&1));

    // one feature per table entry, plus the unknown one
    let stats = conv.collection.stats();
    for (zone, count) in &stats.by_zone_type {
        assert_eq!(*count, 1, "{zone:?}");
    }
    assert_eq!(stats.other, 1);
    assert_eq!(stats.by_zone_type.len(), ZONE_TABLE.len());
}

#[test]
fn file_source_through_map_state() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(three_valid_one_malformed().as_bytes()).unwrap();

    let state = MapState::new(MapView::default());
    let fc = state.load(&Source::Path(file.path().to_path_buf())).unwrap();
    assert_eq!(fc.len(), 3);
    assert!(state.visible_overlay().is_some());
}

#[test]
fn columns_may_come_in_any_order_or_be_missing() {
    let csv = "ZONE_TYPE,line,EXTRA\nVIP Zone,\"MULTILINESTRING ((1 2, 3 4))\",zzz\n";
    let conv = Conversion::from_csv_str(csv).unwrap();
    assert_eq!(conv.collection.len(), 1);
    let props = &conv.collection.features[0].properties;
    assert_eq!(props.color, "#8B8C7A");
    assert_eq!(props.parking_zone, None);
    assert_eq!(props.address, None);
}

#[test]
fn short_records_do_not_abort() {
    let csv = "line,ZONE_TYPE,ADDRESS_DESC\n\"MULTILINESTRING ((1 2, 3 4))\"\n\"MULTILINESTRING ((5 6, 7 8))\",Taxi Zone,x\n";
    let conv = Conversion::from_csv_str(csv).unwrap();
    assert_eq!(conv.collection.len(), 2);
    assert_eq!(conv.collection.features[0].properties.zone_type, None);
}

#[test]
fn invalid_utf8_row_is_skipped_not_fatal() {
    let mut bytes = b"line,ZONE_TYPE\n\"MULTILINESTRING ((1 2, 3 4))\",Taxi Zone\n".to_vec();
    bytes.extend_from_slice(b"\"MULTILINESTRING ((1 2, 3 4))\",\xff\xfe\n");
    let conv = Conversion::from_reader(&bytes[..]).unwrap();
    assert_eq!(conv.collection.len(), 1);
    assert_eq!(conv.report.skipped.len(), 1);
    assert!(matches!(conv.report.skipped[0].reason, SkipReason::Record(_)));
}

#[cfg(feature = "compact")]
#[test]
fn gzip_input() {
    use flate2::{write::GzEncoder, Compression};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("parking.csv.gz");
    let mut enc = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
    enc.write_all(three_valid_one_malformed().as_bytes()).unwrap();
    enc.finish().unwrap();

    let conv = Conversion::load(&Source::Path(path)).unwrap();
    assert_eq!(conv.collection.len(), 3);
}

#[cfg(feature = "json")]
#[test]
fn geojson_output_shape() {
    let conv = Conversion::from_csv_str(&three_valid_one_malformed()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&conv.collection.to_json().unwrap()).unwrap();
    assert_eq!(value["type"], "FeatureCollection");
    assert_eq!(value["features"].as_array().unwrap().len(), 3);
    assert_eq!(value["features"][0]["geometry"]["type"], "LineString");
    assert_eq!(value["features"][0]["properties"]["maxTime"], "30");
    assert!(value["features"][2]["properties"]["maxTime"].is_null());

    let back: FeatureCollection = serde_json::from_value(value).unwrap();
    assert_eq!(back, conv.collection);
}
