// crates/fuzzygeo-core/src/loader/tabular.rs
use crate::error::Result;
use crate::model::CityRecord;
use crate::raw::CityRaw;
use std::io::Read;

/// Parse delimited text with a header row into validated records.
///
/// Row indices in errors count data rows from zero (the header is not
/// counted).
pub fn load_from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Vec<CityRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut out = Vec::new();
    for (i, row) in rdr.deserialize::<CityRaw>().enumerate() {
        out.push(row?.into_record(i)?);
    }
    Ok(out)
}
