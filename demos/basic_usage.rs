//! Basic usage example for fuzzygeo-rs
//!
//! This example demonstrates how to:
//! - Build a gazetteer index from city records
//! - Match free-text addresses with and without a country
//! - Read the matched name and coordinates

use fuzzygeo_core::prelude::*;

fn gazetteer() -> Vec<CityRecord> {
    vec![
        CityRecord::new("chicago", "us", Some("il"), 2_700_000, 41.88, -87.63),
        CityRecord::new("springfield", "us", Some("il"), 114_000, 39.80, -89.65),
        CityRecord::new("springfield", "us", Some("ma"), 155_000, 42.10, -72.59),
        CityRecord::new("new york", "us", Some("ny"), 8_300_000, 40.71, -74.00),
        CityRecord::new("helsinki", "fi", None, 650_000, 60.17, 24.94),
        CityRecord::new("espoo", "fi", None, 300_000, 60.21, 24.66),
    ]
}

fn main() -> Result<()> {
    println!("=== fuzzygeo-rs Basic Usage Example ===\n");

    println!("Building gazetteer index...");
    let index = GazetteerIndex::build(gazetteer())?;
    let stats = index.stats();
    println!(
        "✓ Index built: {} cities in {} countries\n",
        stats.cities, stats.countries
    );

    // Example 1: a typo, a house number and a trailing state
    println!("--- Example 1: Match an address with a typo ---");
    let result = index.match_address("1023 n. clark chacago il", Some("us"), DEFAULT_THRESHOLD)?;
    match result.city() {
        Some(city) => println!(
            "  {} ({:.2}, {:.2}) score {:.2}",
            city.name, city.latitude, city.longitude, city.score
        ),
        None => println!("  no match"),
    }
    println!();

    // Example 2: the state picks between two cities of the same name
    println!("--- Example 2: Same name, different states ---");
    for address in ["12 main st springfield il", "12 main st springfield ma"] {
        let matched = index.match_address(address, Some("us"), 0.8)?;
        let (name, lat, lng) = matched.as_triple();
        println!("  {address:30} -> {name:?} {lat:?} {lng:?}");
    }
    println!();

    // Example 3: without a country every city is a candidate
    println!("--- Example 3: No country filter ---");
    let result = index.match_address("mannerheimintie 5 helsinki", None, 0.8)?;
    println!("  {:?}", result.city_name());
    println!();

    // Example 4: the Query builder
    println!("--- Example 4: Query builder ---");
    let query = Query::new("tapiola espo").country("fi").threshold(0.75);
    println!("  {:?}", index.search(&query)?.city_name());

    Ok(())
}
