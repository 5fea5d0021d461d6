// crates/parkmap-core/src/legend.rs
use crate::popup::escape_html;
use crate::zone::{ZoneStyle, ZONE_TABLE};
use std::fmt::Write;

pub const LEGEND_TITLE: &str = "Zone Types";

/// Legend entries, straight from the zone table.
pub fn legend() -> &'static [ZoneStyle] {
    &ZONE_TABLE
}

/// The legend as an HTML fragment (`div.legend` with one `div.legend-item` per type).
pub fn legend_html() -> String {
    let mut out = String::from("<div class=\"legend\">");
    let _ = write!(out, "<h4>{LEGEND_TITLE}</h4>");
    for entry in legend() {
        let _ = write!(
            out,
            "<div class=\"legend-item\"><span class=\"legend-color\" style=\"background-color: {}\"></span><span class=\"legend-text\">{}</span></div>",
            entry.color,
            escape_html(entry.label)
        );
    }
    out.push_str("</div>");
    out
}
