// crates/parkmap-core/src/record.rs
use serde::Deserialize;

/// One row of the parking-zone CSV.
///
/// Columns are matched by header name; extra columns are ignored. A missing
/// column or an empty cell is `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ParkingRecord {
    /// `MULTILINESTRING ((lng lat, ...))`
    #[serde(default)]
    pub line: Option<String>,
    #[serde(rename = "PARKING_ZONE", default)]
    pub parking_zone: Option<String>,
    #[serde(rename = "ZONE_TYPE", default)]
    pub zone_type: Option<String>,
    #[serde(rename = "STALL_TYPE", default)]
    pub stall_type: Option<String>,
    #[serde(rename = "ADDRESS_DESC", default)]
    pub address_desc: Option<String>,
    #[serde(rename = "STATUS", default)]
    pub status: Option<String>,
    #[serde(rename = "PRICE_ZONE", default)]
    pub price_zone: Option<String>,
    #[serde(rename = "ENFORCEABLE_TIME", default)]
    pub enforceable_time: Option<String>,
    #[serde(rename = "MAX_TIME", default)]
    pub max_time: Option<String>,
}

/// Header names the converter reads.
pub const COLUMNS: [&str; 9] = [
    "line",
    "PARKING_ZONE",
    "ZONE_TYPE",
    "STALL_TYPE",
    "ADDRESS_DESC",
    "STATUS",
    "PRICE_ZONE",
    "ENFORCEABLE_TIME",
    "MAX_TIME",
];

impl ParkingRecord {
    /// The geometry text, or `None` when the cell is absent or blank.
    pub fn geometry_text(&self) -> Option<&str> {
        self.line.as_deref().filter(|s| !s.trim().is_empty())
    }
}
