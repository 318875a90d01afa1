//! Advanced filtering example for fuzzygeo-rs
//!
//! Shows the index configuration knobs: phonetic signatures, extra
//! region-aware countries, diacritic folding and batch matching.

use fuzzygeo_core::prelude::*;

fn records() -> Vec<CityRecord> {
    vec![
        CityRecord::new("chicago", "us", Some("il"), 2_700_000, 41.88, -87.63),
        CityRecord::new("york", "us", Some("pa"), 44_000, 39.96, -76.73),
        CityRecord::new("new york", "us", Some("ny"), 8_300_000, 40.71, -74.00),
        CityRecord::new("toronto", "ca", Some("on"), 2_800_000, 43.65, -79.38),
        CityRecord::new("london", "ca", Some("on"), 420_000, 42.98, -81.25),
        CityRecord::new("cologne", "de", None, 1_080_000, 50.94, 6.96),
        CityRecord::new("zurich", "ch", None, 400_000, 47.37, 8.54),
    ]
}

fn main() -> Result<()> {
    println!("=== fuzzygeo-rs Advanced Filtering Example ===\n");

    // Example 1: which regions are recognized
    println!("--- Example 1: Region policy ---");
    let index = GazetteerIndex::build_with(
        records(),
        IndexConfig {
            region_countries: vec!["us".into(), "ca".into()],
            ..IndexConfig::default()
        },
    )?;
    for country in index.region_policy().countries() {
        println!("  {country}: {:?}", index.regions_for_country(country));
    }
    let r = index.match_address("12 market st york pa", Some("us"), 0.8)?;
    println!("  york pa -> {:?} {:?}", r.city_name(), r.latitude());
    let r = index.match_address("99 dundas st london on", Some("ca"), 0.8)?;
    println!("  london on -> {:?} {:?}", r.city_name(), r.latitude());
    println!();

    // Example 2: a phonetic signature tolerates a wrong first letter
    println!("--- Example 2: Signatures ---");
    for signature in [SignatureKind::FirstLetter, SignatureKind::DoubleMetaphone] {
        let config = IndexConfig {
            signature,
            ..IndexConfig::default()
        };
        match GazetteerIndex::build_with(records(), config) {
            Ok(index) => {
                let r = index.match_address("domplatz kologne", Some("de"), 0.8)?;
                println!("  {signature:?}: {:?}", r.city_name());
            }
            Err(e) => println!("  {signature:?}: {e}"),
        }
    }
    println!();

    // Example 3: folding accents and case
    println!("--- Example 3: Diacritic folding ---");
    let folded = GazetteerIndex::build_with(
        records(),
        IndexConfig {
            fold_diacritics: true,
            ..IndexConfig::default()
        },
    )?;
    let r = folded.match_address("Bahnhofstrasse 1 ZÜRICH", Some("ch"), 0.9)?;
    println!("  {:?}", r.city_name());
    println!();

    // Example 4: batch
    println!("--- Example 4: Batch matching ---");
    let addresses = ["1023 n. clark chacago il", "5th ave new york ny", "main st nowhere"];
    for (address, result) in addresses
        .iter()
        .zip(index.match_batch(addresses, Some("us"), 0.7)?)
    {
        println!("  {address:28} -> {:?}", result.city_name());
    }

    Ok(())
}
