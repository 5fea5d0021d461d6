// crates/parkmap-core/src/view.rs

//! Map view configuration and the write-once overlay state.

use crate::convert::Conversion;
use crate::error::{ParkError, Result};
use crate::geojson::FeatureCollection;
use crate::loader::Source;
use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing::{error, info, warn};

pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Stroke applied to every line; color comes from the feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyle {
    pub weight: f64,
    pub opacity: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            weight: 3.0,
            opacity: 1.0,
        }
    }
}

/// Initial map view handed to the mapping widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    /// `[lat, lng]`, the order Leaflet expects.
    pub center: [f64; 2],
    pub zoom: u8,
    pub scroll_wheel_zoom: bool,
    pub tile_url: String,
    pub attribution: String,
    pub line_style: LineStyle,
}

impl Default for MapView {
    /// Downtown Calgary at zoom 13.
    fn default() -> Self {
        Self {
            center: [51.0447, -114.0719],
            zoom: 13,
            scroll_wheel_zoom: true,
            tile_url: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            line_style: LineStyle::default(),
        }
    }
}

/// View state: a map view plus an overlay that is committed at most once.
#[derive(Debug, Default)]
pub struct MapState {
    view: MapView,
    overlay: OnceCell<FeatureCollection>,
}

impl MapState {
    pub fn new(view: MapView) -> Self {
        Self {
            view,
            overlay: OnceCell::new(),
        }
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    /// Freeze `collection` as the overlay. A second commit is rejected.
    pub fn commit(&self, collection: FeatureCollection) -> Result<&FeatureCollection> {
        self.overlay
            .set(collection)
            .map_err(|_| ParkError::AlreadyLoaded)?;
        self.overlay.get().ok_or(ParkError::AlreadyLoaded)
    }

    /// The committed overlay, if any.
    pub fn overlay(&self) -> Option<&FeatureCollection> {
        self.overlay.get()
    }

    /// The overlay only if it has something to draw.
    pub fn visible_overlay(&self) -> Option<&FeatureCollection> {
        self.overlay().filter(|fc| !fc.is_empty())
    }

    /// Load `source` and commit the result.
    ///
    /// Load errors are logged and leave the overlay unset; the map still
    /// renders, just without lines. Calling this after a commit is a no-op.
    pub fn load(&self, source: &Source) -> Option<&FeatureCollection> {
        if let Some(existing) = self.overlay() {
            warn!(%source, "overlay already loaded, ignoring");
            return Some(existing);
        }
        match Conversion::load(source) {
            Ok(conv) => {
                info!(
                    features = conv.collection.len(),
                    skipped = conv.report.skipped.len(),
                    "overlay ready"
                );
                self.commit(conv.collection).ok()
            }
            Err(e) => {
                error!(%source, error = %e, "failed to load parking CSV");
                None
            }
        }
    }
}
