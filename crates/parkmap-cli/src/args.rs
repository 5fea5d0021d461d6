use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for parkmap
#[derive(Debug, Parser)]
#[command(
    name = "parkmap",
    version,
    about = "Convert a parking-zone CSV to GeoJSON, render it on a map, or inspect it"
)]
pub struct CliArgs {
    /// CSV path (`.csv` or `.csv.gz`) or http(s) URL (default: bundled data/parking.csv)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the GeoJSON FeatureCollection
    Convert {
        /// Output file (default: stdout)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Write a standalone Leaflet HTML page with the lines, popups and legend
    Render {
        /// Output file
        #[arg(short = 'o', long = "output", default_value = "parking-map.html")]
        output: PathBuf,
    },

    /// Show feature, skipped-row and per-zone-type counts
    Stats,

    /// Print the zone-type color key
    Legend,

    /// Print the display color for a zone type
    Color {
        /// Zone type label, e.g. "Taxi Zone"
        zone_type: String,
    },

    /// Search features by address (case- and accent-insensitive)
    Search {
        /// Substring to search
        query: String,
    },
}
