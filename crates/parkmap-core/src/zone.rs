// crates/parkmap-core/src/zone.rs

//! Zone types and their display colors.
//!
//! [`ZONE_TABLE`] is the only place a zone-type label is paired with a color.
//! The converter reads it through [`zone_color`], the legend iterates it in
//! order.

use serde::{Deserialize, Serialize};

/// Color used for a missing or unrecognized zone type.
pub const FALLBACK_COLOR: &str = "#000000";

/// The nine zone types known to the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneType {
    Parking,
    Loading,
    Taxi,
    Handicapped,
    AccessCalgaryLoading,
    Motorcycle,
    RegisteredLoading,
    Vip,
    ValetParking,
}

/// One row of the zone table: label as it appears in `ZONE_TYPE`, and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneStyle {
    #[serde(skip)]
    pub zone: ZoneType,
    #[serde(rename = "type")]
    pub label: &'static str,
    pub color: &'static str,
}

pub static ZONE_TABLE: [ZoneStyle; 9] = [
    ZoneStyle { zone: ZoneType::Parking, label: "Parking Zone", color: "#ff0000" },
    ZoneStyle { zone: ZoneType::Loading, label: "Loading Zone", color: "#0000ff" },
    ZoneStyle { zone: ZoneType::Taxi, label: "Taxi Zone", color: "#00ff00" },
    ZoneStyle { zone: ZoneType::Handicapped, label: "Handicapped Zone", color: "#8673A1" },
    ZoneStyle {
        zone: ZoneType::AccessCalgaryLoading,
        label: "Access Calgary Loading Zone",
        color: "#3D642D",
    },
    ZoneStyle { zone: ZoneType::Motorcycle, label: "Motorcycle Zone", color: "#EFA94A" },
    ZoneStyle {
        zone: ZoneType::RegisteredLoading,
        label: "Registered Loading Zone",
        color: "#7FB5B5",
    },
    ZoneStyle { zone: ZoneType::Vip, label: "VIP Zone", color: "#8B8C7A" },
    ZoneStyle { zone: ZoneType::ValetParking, label: "Valet Parking Zone", color: "#6C3B2A" },
];

impl ZoneType {
    /// Exact, case-sensitive match against the table labels.
    pub fn from_label(label: &str) -> Option<Self> {
        ZONE_TABLE.iter().find(|s| s.label == label).map(|s| s.zone)
    }

    fn style(self) -> &'static ZoneStyle {
        // The table holds every variant in declaration order.
        &ZONE_TABLE[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.style().label
    }

    pub fn color(self) -> &'static str {
        self.style().color
    }

    pub fn all() -> impl Iterator<Item = ZoneType> {
        ZONE_TABLE.iter().map(|s| s.zone)
    }
}

/// Display color for a raw `ZONE_TYPE` value.
///
/// ```rust
/// use parkmap_core::zone::zone_color;
///
/// assert_eq!(zone_color(Some("Taxi Zone")), "#00ff00");
/// assert_eq!(zone_color(Some("Unknown Zone")), "#000000");
/// assert_eq!(zone_color(None), "#000000");
/// ```
pub fn zone_color(zone_type: Option<&str>) -> &'static str {
    zone_type
        .and_then(ZoneType::from_label)
        .map_or(FALLBACK_COLOR, ZoneType::color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_enumerated_type_has_its_color() {
        let expected = [
            ("Parking Zone", "#ff0000"),
            ("Loading Zone", "#0000ff"),
            ("Taxi Zone", "#00ff00"),
            ("Handicapped Zone", "#8673A1"),
            ("Access Calgary Loading Zone", "#3D642D"),
            ("Motorcycle Zone", "#EFA94A"),
            ("Registered Loading Zone", "#7FB5B5"),
            ("VIP Zone", "#8B8C7A"),
            ("Valet Parking Zone", "#6C3B2A"),
        ];
        for (label, color) in expected {
            assert_eq!(zone_color(Some(label)), color, "{label}");
        }
    }

    #[test]
    fn unknown_or_missing_falls_back_to_black() {
        assert_eq!(zone_color(Some("Unknown Zone")), FALLBACK_COLOR);
        assert_eq!(zone_color(Some("")), FALLBACK_COLOR);
        assert_eq!(zone_color(Some("taxi zone")), FALLBACK_COLOR);
        assert_eq!(zone_color(None), FALLBACK_COLOR);
    }

    #[test]
    fn table_order_matches_variant_order() {
        for (i, style) in ZONE_TABLE.iter().enumerate() {
            assert_eq!(style.zone as usize, i);
            assert_eq!(style.zone.label(), style.label);
        }
        assert_eq!(ZoneType::all().count(), 9);
    }
}
