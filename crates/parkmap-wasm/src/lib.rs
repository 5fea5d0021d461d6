//! parkmap-wasm — WebAssembly bindings for parkmap-core
//!
//! The host page fetches the parking CSV, hands the text to [`load_csv`] once,
//! and then feeds the results to its mapping widget (Leaflet, MapLibre, ...).
//!
//! What it provides
//! ----------------
//! - Panic hook and console logging on module load (`#[wasm_bindgen(start)]`)
//! - `load_csv(text)`: convert and freeze the overlay; returns the feature count
//! - `feature_collection()`: the GeoJSON `FeatureCollection` (or `null`)
//! - `zone_color(type)`, `legend()`: the shared color table
//! - `popup_html(index)`: popup markup for the feature at `index`
//! - `map_view()`: initial center, zoom, tiles and line style
//! - `get_stats()`: counts per zone type
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { load_csv, feature_collection, map_view, popup_html } from 'parkmap-wasm';
//!
//! async function main() {
//!   await init();
//!   const view = map_view();
//!   const map = L.map('map', { center: view.center, zoom: view.zoom });
//!   L.tileLayer(view.tileUrl, { attribution: view.attribution }).addTo(map);
//!   try {
//!     const text = await (await fetch('/parking.csv')).text();
//!     load_csv(text);
//!   } catch (err) {
//!     console.error('Error loading CSV:', err); // map stays without overlay
//!   }
//!   const data = feature_collection();
//!   if (data && data.features.length > 0) {
//!     let i = 0;
//!     L.geoJSON(data, {
//!       style: (f) => ({ color: f.properties.color, ...view.lineStyle }),
//!       onEachFeature: (f, layer) => layer.bindPopup(popup_html(i++)),
//!     }).addTo(map);
//!   }
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The overlay is write-once; a second `load_csv` throws.
//! - Values are returned JSON-compatible: absent properties are `null`.

use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

use parkmap_core::legend::legend as zone_legend;
use parkmap_core::popup::popup_html as core_popup_html;
use parkmap_core::{zone_color as core_zone_color, Conversion, MapState, ParkError};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;

// Static Instance
static STATE: OnceLock<MapState> = OnceLock::new();

fn state() -> &'static MapState {
    STATE.get_or_init(MapState::default)
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    Ok(value.serialize(&Serializer::json_compatible())?)
}

#[cfg(target_arch = "wasm32")]
fn console_log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
fn console_error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn console_log(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
fn console_error(_msg: &str) {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log("Initializing parkmap WASM module...");
}

/* --------------------------------------------------------------------------
   Loading
-------------------------------------------------------------------------- */

/// Convert CSV text and freeze the overlay. Returns the number of features.
#[wasm_bindgen]
pub fn load_csv(text: &str) -> Result<usize, JsValue> {
    let state = state();
    if state.overlay().is_some() {
        return Err(JsValue::from_str(&ParkError::AlreadyLoaded.to_string()));
    }

    let conv = Conversion::from_csv_str(text).map_err(|e| {
        console_error(&format!("Error parsing CSV: {e}"));
        JsValue::from_str(&e.to_string())
    })?;

    for skipped in &conv.report.skipped {
        console_error(&format!("Error processing {skipped}"));
    }
    console_log(&format!("Processed {} features", conv.collection.len()));

    let fc = state
        .commit(conv.collection)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(fc.len())
}

/* --------------------------------------------------------------------------
   Overlay
-------------------------------------------------------------------------- */

/// The committed collection, or `null` before a successful load.
#[wasm_bindgen]
pub fn feature_collection() -> Result<JsValue, JsValue> {
    match state().overlay() {
        Some(fc) => to_js(fc),
        None => Ok(JsValue::NULL),
    }
}

#[wasm_bindgen]
pub fn feature_count() -> usize {
    state().overlay().map_or(0, |fc| fc.len())
}

#[wasm_bindgen]
pub fn popup_html(index: usize) -> Option<String> {
    state()
        .overlay()
        .and_then(|fc| fc.get(index))
        .map(|f| core_popup_html(&f.properties))
}

/* --------------------------------------------------------------------------
   Colors, legend, view
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn zone_color(zone_type: Option<String>) -> String {
    core_zone_color(zone_type.as_deref()).to_string()
}

/// `[{ type, color }, ...]` in table order.
#[wasm_bindgen]
pub fn legend() -> Result<JsValue, JsValue> {
    to_js(zone_legend())
}

#[wasm_bindgen]
pub fn map_view() -> Result<JsValue, JsValue> {
    to_js(state().view())
}

#[derive(Serialize)]
struct ZoneCount {
    #[serde(rename = "type")]
    label: &'static str,
    color: &'static str,
    count: usize,
}

#[derive(Serialize)]
struct StatsView {
    features: usize,
    coordinates: usize,
    zones: Vec<ZoneCount>,
    other: usize,
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    let stats = state().overlay().map(|fc| fc.stats());
    let view = match stats {
        Some(s) => StatsView {
            features: s.features,
            coordinates: s.coordinates,
            zones: s
                .by_zone_type
                .iter()
                .map(|(zone, count)| ZoneCount {
                    label: zone.label(),
                    color: zone.color(),
                    count: *count,
                })
                .collect(),
            other: s.other,
        },
        None => StatsView {
            features: 0,
            coordinates: 0,
            zones: Vec::new(),
            other: 0,
        },
    };
    to_js(&view)
}
