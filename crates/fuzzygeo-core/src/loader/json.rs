// crates/fuzzygeo-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

use crate::error::Result;
use crate::model::CityRecord;
use crate::raw::CityRaw;
use std::io::Read;

/// Parse a JSON array of row objects into validated records.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<CityRecord>> {
    let raw: Vec<CityRaw> = serde_json::from_reader(reader)?;
    raw.into_iter()
        .enumerate()
        .map(|(i, row)| row.into_record(i))
        .collect()
}
