// crates/parkmap-core/src/lib.rs

//! parkmap-core
//! ============
//!
//! Turns a municipal parking-zone CSV into a GeoJSON `FeatureCollection`
//! ready for a web map, plus everything the map needs around it: per-zone
//! colors, legend, popups and the initial view.
//!
//! ```rust
//! use parkmap_core::prelude::*;
//!
//! let csv = "line,PARKING_ZONE,ZONE_TYPE\n\
//!            \"MULTILINESTRING ((-114.08 51.05, -114.07 51.06))\",4021,Taxi Zone\n\
//!            \"MULTILINESTRING (())\",4022,Taxi Zone\n";
//! let conv = Conversion::from_csv_str(csv)?;
//! assert_eq!(conv.collection.len(), 1);
//! assert_eq!(conv.report.skipped.len(), 1);
//! assert_eq!(conv.collection.features[0].properties.color, "#00ff00");
//! # Ok::<(), parkmap_core::ParkError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod convert;
pub mod error;
pub mod geojson;
pub mod legend;
pub mod loader;
#[cfg(feature = "json")]
pub mod page;
pub mod popup;
pub mod record;
pub mod search;
pub mod view;
pub mod wkt;
pub mod zone;

// Re-exports
pub use crate::convert::{Conversion, ConversionReport, Converter, SkipReason, SkippedRow};
pub use crate::error::{GeometryError, ParkError, Result, TokenError, TokenFault};
pub use crate::geojson::{Coordinate, Feature, FeatureCollection, Geometry, ZoneProperties};
pub use crate::loader::Source;
pub use crate::record::ParkingRecord;
pub use crate::search::{fold_key, OverlayStats};
pub use crate::view::{LineStyle, MapState, MapView};
pub use crate::zone::{zone_color, ZoneStyle, ZoneType, FALLBACK_COLOR, ZONE_TABLE};

pub mod prelude {
    //! Common types and functions in one import.
    pub use crate::convert::{Conversion, ConversionReport, SkippedRow};
    pub use crate::error::{ParkError, Result};
    pub use crate::geojson::{Coordinate, Feature, FeatureCollection, ZoneProperties};
    pub use crate::legend::{legend, legend_html};
    pub use crate::loader::Source;
    #[cfg(feature = "json")]
    pub use crate::page::render_page;
    pub use crate::popup::popup_html;
    pub use crate::view::{MapState, MapView};
    pub use crate::wkt::{line_coordinates, parse_multilinestring};
    pub use crate::zone::{zone_color, ZoneType};
}
