//! Error handling example for parkmap-rs
//!
//! Shows how load errors, malformed rows and bad geometry strings surface.

use parkmap_core::prelude::*;

fn main() -> Result<()> {
    println!("=== parkmap Error Handling Example ===\n");

    // Example 1: Missing file
    println!("--- Example 1: Loading a file that does not exist ---");
    match Conversion::load_from_path("does/not/exist.csv") {
        Ok(conv) => println!("  Unexpectedly loaded {} features", conv.collection.len()),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 2: The view keeps working without an overlay
    println!("--- Example 2: Failed load leaves the map empty ---");
    let state = MapState::new(MapView::default());
    state.load(&Source::Path("does/not/exist.csv".into()));
    println!("  Overlay present: {}", state.overlay().is_some());
    println!();

    // Example 3: Malformed rows are skipped, not fatal
    println!("--- Example 3: Malformed rows ---");
    let csv = "line,ZONE_TYPE\n\
               \"MULTILINESTRING ((-114.08 51.05, -114.07 51.06))\",Taxi Zone\n\
               \"MULTILINESTRING ((-114.08 51.05))\",Taxi Zone\n\
               \"LINESTRING (1 2, 3 4)\",Taxi Zone\n";
    let conv = Conversion::from_csv_str(csv)?;
    println!("  Features: {}", conv.collection.len());
    for skipped in &conv.report.skipped {
        println!("  Skipped {skipped}");
    }
    println!();

    // Example 4: Geometry strings on their own
    println!("--- Example 4: Parsing geometry text ---");
    for text in [
        "MULTILINESTRING ((1 2, 3 4))",
        "MULTILINESTRING ((1 2, x y, 3 4))",
        "MULTILINESTRING (())",
        "MULTILINESTRING ((1 2, 3 4)",
    ] {
        match parse_multilinestring(text) {
            Ok(parsed) => {
                println!("  {text}: {} coordinate(s)", parsed.coordinates.len());
                for token in &parsed.rejected {
                    println!("    dropped {token}");
                }
            }
            Err(e) => println!("  {text}: ✗ {e}"),
        }
    }

    // Example 5: Committing twice
    println!("\n--- Example 5: Overlay is write-once ---");
    let state = MapState::default();
    state.commit(FeatureCollection::default())?;
    if let Err(e) = state.commit(FeatureCollection::default()) {
        println!("  ✗ {e}");
    }

    Ok(())
}
