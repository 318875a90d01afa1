//! Error handling example for fuzzygeo-rs
//!
//! This example demonstrates proper error handling and edge cases

use fuzzygeo_core::prelude::*;

fn main() -> Result<()> {
    println!("=== fuzzygeo-rs Error Handling Example ===\n");

    // Example 1: invalid records fail the whole build
    println!("--- Example 1: Building from an invalid record ---");
    let bad = vec![
        CityRecord::new("chicago", "us", Some("il"), 2_700_000, 41.88, -87.63),
        CityRecord::new("gary", "us", Some("in"), 76_000, f64::NAN, -87.34),
    ];
    match GazetteerIndex::build(bad) {
        Ok(_) => println!("  unexpectedly built"),
        Err(e @ GeoError::InvalidRecord { .. }) => println!("✗ Rejected: {e}"),
        Err(e) => return Err(e),
    }
    println!();

    let index = GazetteerIndex::build(vec![
        CityRecord::new("chicago", "us", Some("il"), 2_700_000, 41.88, -87.63),
        CityRecord::new("helsinki", "fi", None, 650_000, 60.17, 24.94),
    ])?;

    // Example 2: thresholds outside [0, 1] are errors, not misses
    println!("--- Example 2: Invalid thresholds ---");
    for threshold in [-0.5, 1.5, f64::NAN] {
        match index.match_address("chicago", Some("us"), threshold) {
            Ok(r) => println!("  {threshold}: {:?}", r.city_name()),
            Err(e) => println!("  {threshold}: {e}"),
        }
    }
    println!();

    // Example 3: countries missing from the gazetteer give an empty result
    println!("--- Example 3: Unknown countries ---");
    for country in ["br", "xx", ""] {
        let result = index.match_address("2342 rio de janero", Some(country), 0.5)?;
        println!("  {country:?}: matched = {}", result.is_match());
    }
    println!();

    // Example 4: nothing usable left after normalization
    println!("--- Example 4: Degenerate addresses ---");
    for address in ["", "   ", "60601", "il"] {
        let result = index.match_address(address, Some("us"), DEFAULT_THRESHOLD)?;
        println!("  {address:?}: {:?}", result.as_triple());
    }
    println!();

    // Example 5: loading a file that is not there
    println!("--- Example 5: Missing gazetteer file ---");
    match GazetteerIndex::load_from_path("does/not/exist.csv", IndexConfig::default()) {
        Ok(_) => println!("  unexpectedly loaded"),
        Err(e) => println!("✗ {e}"),
    }

    Ok(())
}
