//! parkmap — Command-line interface for parkmap-core
//!
//! Loads a parking-zone CSV (local file, gzip file or URL), converts its
//! `MULTILINESTRING` geometries into GeoJSON lines colored by zone type, and
//! either writes the result out or prints a summary.
//!
//! Usage examples
//! --------------
//!
//! - Convert to GeoJSON on stdout
//!   $ parkmap -i parking.csv convert
//!
//! - Standalone map page
//!   $ parkmap -i parking.csv render -o map.html
//!
//! - Counts per zone type, skipped rows
//!   $ parkmap stats
//!
//! - Color key
//!   $ parkmap legend
//!   $ parkmap color "Taxi Zone"
//!
//! - Address search
//!   $ parkmap search "stephen av"
//!
//! Logs go to stderr; `-v`/`-vv` raise the level, `RUST_LOG` overrides it.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use parkmap_core::legend::{legend, LEGEND_TITLE};
use parkmap_core::{zone_color, Conversion, MapState, MapView, Source, ZoneType};
use std::io::Write;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    // Determine input (default CSV inside parkmap-core)
    let source = match args.input.as_deref() {
        Some(input) => Source::parse(input),
        None => Source::Path(Conversion::default_dataset_path()),
    };

    match args.command {
        Commands::Legend => {
            println!("{LEGEND_TITLE}:");
            for entry in legend() {
                println!("  {}  {}", entry.color, entry.label);
            }
        }

        Commands::Color { zone_type } => {
            let color = zone_color(Some(&zone_type));
            if ZoneType::from_label(&zone_type).is_none() {
                eprintln!("Unknown zone type {zone_type:?}, using fallback color");
            }
            println!("{color}");
        }

        #[cfg(feature = "json")]
        Commands::Convert { output, pretty } => {
            let conv = load(&source)?;
            let json = if pretty {
                conv.collection.to_json_pretty()?
            } else {
                conv.collection.to_json()?
            };
            match output {
                Some(path) => std::fs::write(&path, json)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => {
                    let mut out = std::io::stdout().lock();
                    out.write_all(json.as_bytes())?;
                    out.write_all(b"\n")?;
                }
            }
        }

        #[cfg(feature = "json")]
        Commands::Render { output } => {
            // A failed load still yields a page, just without lines.
            let state = MapState::new(MapView::default());
            state.load(&source);
            let html = parkmap_core::page::render_page(state.visible_overlay(), state.view())?;
            std::fs::write(&output, html)
                .with_context(|| format!("writing {}", output.display()))?;
            println!("Wrote {}", output.display());
        }

        #[cfg(not(feature = "json"))]
        Commands::Convert { .. } | Commands::Render { .. } => {
            anyhow::bail!("this build has no JSON support; enable the 'json' feature");
        }

        Commands::Stats => {
            let conv = load(&source)?;
            let stats = conv.collection.stats();
            let report = &conv.report;
            println!("Dataset statistics:");
            println!("  Rows: {}", report.rows);
            println!("  Features: {}", stats.features);
            println!("  Coordinates: {}", stats.coordinates);
            println!("  Skipped rows: {}", report.skipped.len());
            println!("  Rows without geometry: {}", report.blank);
            println!("  Dropped coordinate tokens: {}", report.rejected_tokens);
            println!("By zone type:");
            for (zone, count) in &stats.by_zone_type {
                println!("  {:<28} {count}", zone.label());
            }
            println!("  {:<28} {}", "Other", stats.other);
            if !report.unknown_zone_types.is_empty() {
                println!("Zone types not in the color table:");
                for (label, count) in &report.unknown_zone_types {
                    println!("  {label:<28} {count}");
                }
            }
            for skipped in &report.skipped {
                eprintln!("skipped {skipped}");
            }
        }

        Commands::Search { query } => {
            let conv = load(&source)?;
            let matches = conv.collection.find_by_address(&query);
            if matches.is_empty() {
                println!("No zones found matching: {query}");
            } else {
                for f in matches {
                    let p = &f.properties;
                    println!(
                        "{} — {} ({}, {})",
                        p.parking_zone.as_deref().unwrap_or("?"),
                        p.address.as_deref().unwrap_or("?"),
                        p.zone_type.as_deref().unwrap_or("?"),
                        p.color
                    );
                }
            }
        }
    }

    Ok(())
}

fn load(source: &Source) -> anyhow::Result<Conversion> {
    Conversion::load(source).with_context(|| format!("loading {source}"))
}
