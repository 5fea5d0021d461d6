//! Basic usage example for parkmap-rs
//!
//! This example demonstrates how to:
//! - Load the bundled parking CSV
//! - Inspect the resulting feature collection
//! - Look up zone colors and the legend
//! - Search by address

use parkmap_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== parkmap Basic Usage Example ===\n");

    // Load the dataset
    println!("Loading parking CSV...");
    let conv = Conversion::load_from_path(Conversion::default_dataset_path())?;
    println!("✓ Loaded {} features\n", conv.collection.len());

    // Example 1: First few features
    println!("--- Example 1: Features ---");
    for (i, f) in conv.collection.iter().take(5).enumerate() {
        println!(
            "{}. {} {} ({} points, {})",
            i + 1,
            f.properties.parking_zone.as_deref().unwrap_or("?"),
            f.properties.address.as_deref().unwrap_or("?"),
            f.coordinates().len(),
            f.properties.color
        );
    }
    println!();

    // Example 2: Rows that were dropped
    println!("--- Example 2: Conversion report ---");
    println!("Rows: {}", conv.report.rows);
    println!("Blank geometry: {}", conv.report.blank);
    for skipped in &conv.report.skipped {
        println!("Skipped {skipped}");
    }
    println!();

    // Example 3: Colors
    println!("--- Example 3: Zone colors ---");
    for zone in ["Taxi Zone", "VIP Zone", "Unknown Zone"] {
        println!("{zone}: {}", zone_color(Some(zone)));
    }
    println!();

    // Example 4: Legend
    println!("--- Example 4: Legend ---");
    for entry in legend() {
        println!("{}  {}", entry.color, entry.label);
    }
    println!();

    // Example 5: Address search
    println!("--- Example 5: Address search ---");
    for f in conv.collection.find_by_address("av sw") {
        println!("{}", popup_html(&f.properties));
    }

    Ok(())
}
