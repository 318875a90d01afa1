// crates/fuzzygeo-core/src/loader/mod.rs

//! # Gazetteer Loader
//!
//! Handles the physical layer (I/O, decompression) and delegates to the
//! format parsers (CSV/TSV vs JSON). The format is picked from the file
//! extension; a trailing `.gz` adds gzip decompression.

use crate::error::{GeoError, Result};
use crate::index::{GazetteerIndex, IndexConfig};
use crate::model::CityRecord;
use std::io::Read;
use std::path::Path;

mod common_io;
mod tabular;

#[cfg(feature = "json")]
mod json;

/// Supported gazetteer file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GazetteerFormat {
    Csv,
    Tsv,
    Json,
}

impl GazetteerFormat {
    /// Detect the format from a path. Returns the format and whether the
    /// file is gzip-compressed.
    ///
    /// ```rust
    /// use fuzzygeo_core::loader::GazetteerFormat;
    ///
    /// assert_eq!(
    ///     GazetteerFormat::from_path("cities.csv.gz").unwrap(),
    ///     (GazetteerFormat::Csv, true)
    /// );
    /// assert_eq!(
    ///     GazetteerFormat::from_path("cities.JSON").unwrap(),
    ///     (GazetteerFormat::Json, false)
    /// );
    /// assert!(GazetteerFormat::from_path("cities.xlsx").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<(Self, bool)> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        let (stem, gzip) = match name.strip_suffix(".gz") {
            Some(stem) => (stem.to_string(), true),
            None => (name.clone(), false),
        };

        let format = if stem.ends_with(".csv") {
            GazetteerFormat::Csv
        } else if stem.ends_with(".tsv") || stem.ends_with(".tab") {
            GazetteerFormat::Tsv
        } else if stem.ends_with(".json") {
            GazetteerFormat::Json
        } else {
            return Err(GeoError::UnsupportedFormat(path.display().to_string()));
        };
        Ok((format, gzip))
    }
}

/// Parse records from an already-decompressed reader.
pub fn load_records_from_reader<R: Read>(
    reader: R,
    format: GazetteerFormat,
) -> Result<Vec<CityRecord>> {
    match format {
        GazetteerFormat::Csv => tabular::load_from_reader(reader, b','),
        GazetteerFormat::Tsv => tabular::load_from_reader(reader, b'\t'),
        #[cfg(feature = "json")]
        GazetteerFormat::Json => json::load_from_reader(reader),
        #[cfg(not(feature = "json"))]
        GazetteerFormat::Json => {
            let _ = reader;
            Err(GeoError::UnsupportedFormat(
                "JSON gazetteers require the 'json' feature".into(),
            ))
        }
    }
}

/// Read and validate every record of a gazetteer file.
pub fn load_records_from_path(path: impl AsRef<Path>) -> Result<Vec<CityRecord>> {
    let path = path.as_ref();
    let (format, gzip) = GazetteerFormat::from_path(path)?;
    let reader = common_io::open_stream(path, gzip)?;
    let records = load_records_from_reader(reader, format)?;
    tracing::info!(
        path = %path.display(),
        ?format,
        records = records.len(),
        "gazetteer loaded"
    );
    Ok(records)
}

impl GazetteerIndex {
    /// Load a gazetteer file and build an index from it.
    pub fn load_from_path(path: impl AsRef<Path>, config: IndexConfig) -> Result<Self> {
        let records = load_records_from_path(path)?;
        Self::build_with(records, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
country,region,city,population,lat,lng
us,IL,chicago,2700000,41.88,-87.63
fi,,helsinki,,60.17,24.94
us,12,springfield,114000.0,39.80,-89.65
";

    #[test]
    fn csv_rows_become_records() {
        let recs = load_records_from_reader(CSV.as_bytes(), GazetteerFormat::Csv).unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].region(), Some("il"));
        assert_eq!(recs[0].population(), 2_700_000);
        assert_eq!(recs[1].region(), None);
        assert_eq!(recs[1].population(), 0);
        // non-string region
        assert_eq!(recs[2].region(), None);
        assert_eq!(recs[2].population(), 114_000);
    }

    #[test]
    fn tsv_with_aliased_headers() {
        let tsv = "name\tcountry\tlatitude\tlongitude\nparis\tfr\t48.85\t2.35\n";
        let recs = load_records_from_reader(tsv.as_bytes(), GazetteerFormat::Tsv).unwrap();
        assert_eq!(recs[0].name(), "paris");
        assert_eq!(recs[0].latitude(), 48.85);
    }

    #[test]
    fn csv_missing_coordinates_is_an_invalid_record() {
        let csv = "country,city,lat,lng\nus,chicago,41.88,-87.63\nus,gary,,\n";
        let err = load_records_from_reader(csv.as_bytes(), GazetteerFormat::Csv).unwrap_err();
        assert!(matches!(err, GeoError::InvalidRecord { index: 1, .. }), "{err}");
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_rows_accept_strings_and_nulls() {
        let json = r#"[
            {"city": "chicago", "country": "us", "region": "IL", "population": 2700000, "lat": 41.88, "lng": -87.63},
            {"city": "helsinki", "country": "fi", "region": null, "lat": "60.17", "lng": "24.94"},
            {"name": "cork", "country": "ie", "region": 5, "latitude": 51.9, "longitude": -8.47}
        ]"#;
        let recs = load_records_from_reader(json.as_bytes(), GazetteerFormat::Json).unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].region(), Some("il"));
        assert_eq!(recs[1].latitude(), 60.17);
        assert_eq!(recs[1].population(), 0);
        assert_eq!(recs[2].region(), None);
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzipped_csv_is_decompressed() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cities.csv.gz");
        let mut enc = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
        enc.write_all(CSV.as_bytes()).unwrap();
        enc.finish().unwrap();

        let recs = load_records_from_path(&path).unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].name(), "chicago");

        let idx = GazetteerIndex::load_from_path(&path, IndexConfig::default()).unwrap();
        assert_eq!(idx.len(), 3);
        assert_eq!(idx.regions_for_country("us"), vec!["il"]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_records_from_path("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, GeoError::NotFound(_)));
    }

    #[test]
    fn format_detection() {
        assert_eq!(
            GazetteerFormat::from_path("/data/cities.tsv").unwrap(),
            (GazetteerFormat::Tsv, false)
        );
        assert_eq!(
            GazetteerFormat::from_path("cities.json.gz").unwrap(),
            (GazetteerFormat::Json, true)
        );
        assert!(matches!(
            GazetteerFormat::from_path("cities.gz"),
            Err(GeoError::UnsupportedFormat(_))
        ));
    }
}
