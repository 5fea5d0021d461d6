// crates/parkmap-core/src/popup.rs
use crate::geojson::ZoneProperties;
use std::fmt::Write;

/// Shown for a property the CSV did not provide.
pub const MISSING: &str = "N/A";

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Popup markup shown when a line is clicked.
pub fn popup_html(props: &ZoneProperties) -> String {
    let rows: [(&str, &Option<String>); 6] = [
        ("Zone", &props.parking_zone),
        ("Address", &props.address),
        ("Type", &props.zone_type),
        ("Status", &props.status),
        ("Max Time", &props.max_time),
        ("Enforceable Time", &props.enforceable_time),
    ];

    let mut out = String::from("<div class=\"popup-content\">");
    for (i, (label, value)) in rows.iter().enumerate() {
        if i > 0 {
            out.push_str("<br>");
        }
        let value = value.as_deref().map_or_else(|| MISSING.to_string(), escape_html);
        let _ = write!(out, "<strong>{label}:</strong> {value}");
    }
    out.push_str("</div>");
    out
}
