// crates/parkmap-core/src/page.rs

//! Standalone Leaflet page.
//!
//! The page pulls Leaflet from a CDN. Everything else (view, collection,
//! popups, legend) is embedded, so the file can be opened straight from disk.
#![cfg(feature = "json")]

use crate::error::Result;
use crate::geojson::FeatureCollection;
use crate::legend::legend_html;
use crate::popup::popup_html;
use crate::view::MapView;
use serde::Serialize;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

const STYLE: &str = r#"
    html, body { margin: 0; padding: 0; height: 100%; }
    #map { height: 100vh; width: 100%; }
    .legend {
      position: fixed; bottom: 24px; right: 12px; z-index: 1000;
      background: #fff; padding: 8px 12px; border-radius: 4px;
      box-shadow: 0 1px 4px rgba(0, 0, 0, 0.3); font: 13px/1.4 sans-serif;
    }
    .legend h4 { margin: 0 0 6px; }
    .legend-item { display: flex; align-items: center; margin: 2px 0; }
    .legend-color { width: 18px; height: 4px; margin-right: 8px; display: inline-block; }
    .popup-content { font: 13px/1.5 sans-serif; }
"#;

const SCRIPT: &str = r#"
    const map = L.map('map', {
      center: VIEW.center,
      zoom: VIEW.zoom,
      scrollWheelZoom: VIEW.scrollWheelZoom,
    });
    L.tileLayer(VIEW.tileUrl, { attribution: VIEW.attribution }).addTo(map);
    if (DATA && DATA.features.length > 0) {
      let i = 0;
      L.geoJSON(DATA, {
        style: (feature) => ({
          color: feature.properties.color,
          weight: VIEW.lineStyle.weight,
          opacity: VIEW.lineStyle.opacity,
        }),
        onEachFeature: (feature, layer) => {
          layer.bindPopup(POPUPS[i++]);
        },
      }).addTo(map);
    }
"#;

/// Serialize for a `<script>` block. `<` only occurs inside JSON strings,
/// so it is written as `\u003c` and no tag or comment can open.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}

/// Render the full HTML document. `None` draws the base map only.
pub fn render_page(overlay: Option<&FeatureCollection>, view: &MapView) -> Result<String> {
    let view_json = script_json(view)?;
    let (data_json, popups_json) = match overlay {
        Some(fc) => {
            let popups: Vec<String> = fc.iter().map(|f| popup_html(&f.properties)).collect();
            (script_json(fc)?, script_json(&popups)?)
        }
        None => ("null".to_string(), "[]".to_string()),
    };

    Ok(format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Parking Zones</title>
  <link rel="stylesheet" href="{LEAFLET_CSS}" />
  <script src="{LEAFLET_JS}"></script>
  <style>{STYLE}  </style>
</head>
<body>
  <div id="map"></div>
  {legend}
  <script>
    const VIEW = {view_json};
    const DATA = {data_json};
    const POPUPS = {popups_json};
{SCRIPT}  </script>
</body>
</html>
"#,
        legend = legend_html(),
    ))
}
