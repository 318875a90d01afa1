// crates/fuzzygeo-core/src/index.rs

//! # Gazetteer Index
//!
//! Built once from a list of [`CityRecord`]s and read-only afterwards. Every
//! derived value a query needs (signature, word count, match key, region
//! suffix patterns) is computed here, never per query, so a single index can
//! be shared across threads without locking.

use crate::common::IndexStats;
use crate::error::{GeoError, Result};
use crate::model::CityRecord;
use crate::region::{RegionPolicy, RegionSuffix};
use crate::signature::{Signature, SignatureFn, SignatureKind, DEFAULT_HASH_LENGTH};
use crate::text::{collapse_whitespace, fold_key, word_count};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Build-time options of a [`GazetteerIndex`].
///
/// ```rust
/// use fuzzygeo_core::{IndexConfig, SignatureKind};
///
/// let cfg = IndexConfig::default();
/// assert_eq!(cfg.signature, SignatureKind::FirstLetter);
/// assert_eq!(cfg.region_countries, vec!["us".to_string()]);
/// assert!(!cfg.fold_diacritics);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Signature function used to bucket names.
    pub signature: SignatureKind,
    /// Code length for phonetic signatures.
    pub hash_length: usize,
    /// Countries whose addresses may end with a region token.
    pub region_countries: Vec<String>,
    /// Transliterate and lowercase both names and addresses before matching.
    pub fold_diacritics: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            signature: SignatureKind::FirstLetter,
            hash_length: DEFAULT_HASH_LENGTH,
            region_countries: vec!["us".to_string()],
            fold_diacritics: false,
        }
    }
}

impl IndexConfig {
    /// Read a config from a JSON file. Missing keys take their defaults.
    #[cfg(feature = "json")]
    pub fn from_json_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            GeoError::NotFound(format!("Config not found at {}: {}", path.display(), e))
        })?;
        let cfg = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(cfg)
    }
}

/// A gazetteer record together with the values derived from it at build
/// time.
#[derive(Debug, Clone)]
pub struct IndexedCity {
    record: CityRecord,
    signature: Option<Signature>,
    word_count: usize,
    match_key: String,
    region_key: Option<String>,
    country_key: String,
}

impl IndexedCity {
    pub fn record(&self) -> &CityRecord {
        &self.record
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The form of the name compared against addresses.
    pub fn match_key(&self) -> &str {
        &self.match_key
    }

    pub fn name(&self) -> &str {
        self.record.name()
    }

    pub fn region(&self) -> Option<&str> {
        self.record.region()
    }

    /// The region in the form resolved from addresses.
    pub fn region_key(&self) -> Option<&str> {
        self.region_key.as_deref()
    }

    pub fn population(&self) -> u64 {
        self.record.population()
    }

    pub(crate) fn is_in_country(&self, country: &str) -> bool {
        self.country_key.eq_ignore_ascii_case(country)
    }
}

/// The read-only gazetteer index.
#[derive(Debug)]
pub struct GazetteerIndex {
    cities: Vec<IndexedCity>,
    by_signature: HashMap<Signature, Vec<usize>>,
    by_country: HashMap<String, Vec<usize>>,
    regions: RegionPolicy,
    signer: Box<dyn SignatureFn>,
    config: IndexConfig,
}

impl GazetteerIndex {
    /// Build an index with [`IndexConfig::default`].
    ///
    /// Fails with [`GeoError::InvalidRecord`] if any record has an empty
    /// name or country, or non-finite coordinates.
    ///
    /// ```rust
    /// use fuzzygeo_core::{CityRecord, GazetteerIndex};
    ///
    /// let index = GazetteerIndex::build(vec![
    ///     CityRecord::new("chicago", "us", Some("il"), 2_700_000, 41.88, -87.63),
    /// ])?;
    /// assert_eq!(index.len(), 1);
    /// # Ok::<(), fuzzygeo_core::GeoError>(())
    /// ```
    pub fn build(records: impl IntoIterator<Item = CityRecord>) -> Result<Self> {
        Self::build_with(records, IndexConfig::default())
    }

    /// Build an index with an explicit configuration.
    pub fn build_with(
        records: impl IntoIterator<Item = CityRecord>,
        config: IndexConfig,
    ) -> Result<Self> {
        let signer = config.signature.build(config.hash_length)?;

        let mut cities: Vec<IndexedCity> = Vec::new();
        let mut by_signature: HashMap<Signature, Vec<usize>> = HashMap::new();
        let mut by_country: HashMap<String, Vec<usize>> = HashMap::new();

        for (i, record) in records.into_iter().enumerate() {
            validate(i, &record)?;

            let match_key = text_key(record.name(), config.fold_diacritics);
            let region_key = record
                .region()
                .map(|r| text_key(r, config.fold_diacritics));
            let signature = signer.signature(&match_key);
            let word_count = word_count(&match_key);
            let country_key = record.country().trim().to_ascii_lowercase();

            if let Some(sig) = &signature {
                by_signature.entry(sig.clone()).or_default().push(i);
            }
            by_country.entry(country_key.clone()).or_default().push(i);

            cities.push(IndexedCity {
                record,
                signature,
                word_count,
                match_key,
                region_key,
                country_key,
            });
        }

        let regions = build_region_policy(&cities, &by_country, &config)?;

        tracing::info!(
            cities = cities.len(),
            countries = by_country.len(),
            buckets = by_signature.len(),
            region_countries = regions.len(),
            "gazetteer index built"
        );

        Ok(Self {
            cities,
            by_signature,
            by_country,
            regions,
            signer,
            config,
        })
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// All indexed cities in insertion order.
    pub fn records(&self) -> &[IndexedCity] {
        &self.cities
    }

    /// Signature of a standalone name or address token, as computed for
    /// indexed city names.
    pub fn signature_of(&self, name: &str) -> Option<Signature> {
        self.signer.signature(name)
    }

    /// All cities whose signature is in `signatures`, in insertion order.
    pub fn lookup_by_signature(&self, signatures: &HashSet<Signature>) -> Vec<&IndexedCity> {
        let mut ids: Vec<usize> = signatures
            .iter()
            .filter_map(|s| self.by_signature.get(s))
            .flatten()
            .copied()
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids.into_iter().map(|i| &self.cities[i]).collect()
    }

    /// All cities of a country (ASCII case-insensitive), in insertion order.
    /// An unknown country yields an empty list.
    pub fn records_for_country(&self, country: &str) -> Vec<&IndexedCity> {
        self.by_country
            .get(&country.trim().to_ascii_lowercase())
            .map(|ids| ids.iter().map(|&i| &self.cities[i]).collect())
            .unwrap_or_default()
    }

    pub fn has_country(&self, country: &str) -> bool {
        self.by_country
            .contains_key(&country.trim().to_ascii_lowercase())
    }

    /// Country codes present in the index, sorted.
    pub fn countries(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.by_country.keys().map(String::as_str).collect();
        out.sort_unstable();
        out
    }

    pub fn region_policy(&self) -> &RegionPolicy {
        &self.regions
    }

    /// The region suffix used for `country`, if region disambiguation is
    /// enabled for it.
    pub fn region_suffix(&self, country: &str) -> Option<&RegionSuffix> {
        self.regions.for_country(country)
    }

    /// Known regions of `country`, sorted. Empty when the country has no
    /// region policy.
    pub fn regions_for_country(&self, country: &str) -> Vec<&str> {
        self.region_suffix(country)
            .map(|s| s.regions().iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Whether any token of the address is a known region of `country`,
    /// wherever it appears in the address.
    pub fn mentions_region(&self, country: &str, address: &str) -> bool {
        let Some(suffix) = self.region_suffix(country) else {
            return false;
        };
        let normalized = self.prepare_address(address);
        crate::text::tokenize(&normalized)
            .into_iter()
            .any(|tok| suffix.contains(tok))
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            cities: self.cities.len(),
            countries: self.by_country.len(),
            signature_buckets: self.by_signature.len(),
            region_countries: self.regions.len(),
            regions: self
                .regions
                .countries()
                .filter_map(|c| self.regions.for_country(c))
                .map(|s| s.regions().len())
                .sum(),
        }
    }

    /// Normalize an address the way names were keyed at build time.
    pub(crate) fn prepare_address(&self, raw: &str) -> String {
        let normalized = crate::text::normalize(raw);
        if self.config.fold_diacritics {
            collapse_whitespace(&fold_key(&normalized))
        } else {
            normalized
        }
    }
}

/// Key a name or region the way addresses are normalized: single spaces,
/// then optionally folded.
fn text_key(s: &str, fold: bool) -> String {
    let key = collapse_whitespace(s);
    if fold {
        collapse_whitespace(&fold_key(&key))
    } else {
        key
    }
}

fn validate(index: usize, record: &CityRecord) -> Result<()> {
    if record.name().trim().is_empty() {
        return Err(GeoError::invalid_record(index, "missing city name"));
    }
    if record.country().trim().is_empty() {
        return Err(GeoError::invalid_record(index, "missing country"));
    }
    if !record.latitude().is_finite() {
        return Err(GeoError::invalid_record(
            index,
            format!("latitude is not finite: {}", record.latitude()),
        ));
    }
    if !record.longitude().is_finite() {
        return Err(GeoError::invalid_record(
            index,
            format!("longitude is not finite: {}", record.longitude()),
        ));
    }
    Ok(())
}

fn build_region_policy(
    cities: &[IndexedCity],
    by_country: &HashMap<String, Vec<usize>>,
    config: &IndexConfig,
) -> Result<RegionPolicy> {
    let mut policy = RegionPolicy::default();
    for country in &config.region_countries {
        let key = country.trim().to_ascii_lowercase();
        let Some(ids) = by_country.get(&key) else {
            continue;
        };
        let regions: BTreeSet<&str> = ids
            .iter()
            .filter_map(|&i| cities[i].region_key())
            .collect();
        if let Some(suffix) = RegionSuffix::compile(&regions)? {
            policy.insert(&key, suffix);
        }
    }
    Ok(policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CityRecord> {
        vec![
            CityRecord::new("chicago", "us", Some("il"), 2_700_000, 41.88, -87.63),
            CityRecord::new("new york", "us", Some("ny"), 8_300_000, 40.71, -74.0),
            CityRecord::new("springfield", "us", Some("il"), 114_000, 39.8, -89.65),
            CityRecord::new("springfield", "us", Some("ma"), 155_000, 42.1, -72.59),
            CityRecord::new("helsinki", "fi", None, 650_000, 60.17, 24.94),
            CityRecord::new("cologne", "de", Some("nrw"), 1_080_000, 50.94, 6.96),
        ]
    }

    #[test]
    fn derived_fields_are_computed_at_build() {
        let idx = GazetteerIndex::build(sample()).unwrap();
        let ny = &idx.records()[1];
        assert_eq!(ny.signature(), Some("n"));
        assert_eq!(ny.word_count(), 2);
        assert_eq!(ny.match_key(), "new york");
    }

    #[test]
    fn rejects_missing_name() {
        let mut recs = sample();
        recs.push(CityRecord::new("  ", "us", None, 0, 1.0, 1.0));
        let err = GazetteerIndex::build(recs).unwrap_err();
        assert!(matches!(err, GeoError::InvalidRecord { index: 6, .. }));
    }

    #[test]
    fn rejects_missing_country_and_bad_coordinates() {
        let err = GazetteerIndex::build(vec![CityRecord::new("x", "", None, 0, 1.0, 1.0)])
            .unwrap_err();
        assert!(matches!(err, GeoError::InvalidRecord { index: 0, .. }));

        let err = GazetteerIndex::build(vec![CityRecord::new("x", "us", None, 0, f64::NAN, 1.0)])
            .unwrap_err();
        assert!(matches!(err, GeoError::InvalidRecord { index: 0, .. }));

        let err = GazetteerIndex::build(vec![CityRecord::new(
            "x",
            "us",
            None,
            0,
            1.0,
            f64::INFINITY,
        )])
        .unwrap_err();
        assert!(matches!(err, GeoError::InvalidRecord { index: 0, .. }));
    }

    #[test]
    fn lookup_by_signature_preserves_insertion_order() {
        let idx = GazetteerIndex::build(sample()).unwrap();
        let sigs: HashSet<Signature> = ["s", "c"].iter().map(|s| s.to_string()).collect();
        let names: Vec<&str> = idx.lookup_by_signature(&sigs).iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["chicago", "springfield", "springfield", "cologne"]);
    }

    #[test]
    fn records_for_country_is_case_insensitive() {
        let idx = GazetteerIndex::build(sample()).unwrap();
        assert_eq!(idx.records_for_country("US").len(), 4);
        assert_eq!(idx.records_for_country("fi").len(), 1);
        assert!(idx.records_for_country("br").is_empty());
    }

    #[test]
    fn region_policy_only_for_configured_countries() {
        let idx = GazetteerIndex::build(sample()).unwrap();
        assert_eq!(idx.regions_for_country("us"), vec!["il", "ma", "ny"]);
        // "de" has regions in the data but is not configured
        assert!(idx.region_suffix("de").is_none());

        let cfg = IndexConfig {
            region_countries: vec!["us".into(), "de".into(), "xx".into()],
            ..IndexConfig::default()
        };
        let idx = GazetteerIndex::build_with(sample(), cfg).unwrap();
        assert_eq!(idx.regions_for_country("de"), vec!["nrw"]);
        assert_eq!(idx.region_policy().len(), 2);
    }

    #[test]
    fn no_region_policy_without_us_records() {
        let idx = GazetteerIndex::build(vec![CityRecord::new(
            "helsinki", "fi", None, 0, 60.17, 24.94,
        )])
        .unwrap();
        assert!(idx.region_policy().is_empty());
    }

    #[test]
    fn folding_applies_to_match_keys_only() {
        let cfg = IndexConfig {
            fold_diacritics: true,
            ..IndexConfig::default()
        };
        let idx = GazetteerIndex::build_with(
            vec![CityRecord::new("Zürich", "ch", None, 400_000, 47.37, 8.54)],
            cfg,
        )
        .unwrap();
        let z = &idx.records()[0];
        assert_eq!(z.match_key(), "zurich");
        assert_eq!(z.name(), "Zürich");
        assert_eq!(z.signature(), Some("z"));
    }

    #[test]
    fn match_key_collapses_internal_whitespace() {
        let idx = GazetteerIndex::build(vec![CityRecord::new(
            " new \t york ",
            "us",
            Some("ny"),
            8_300_000,
            40.71,
            -74.0,
        )])
        .unwrap();
        let ny = &idx.records()[0];
        assert_eq!(ny.match_key(), "new york");
        assert_eq!(ny.word_count(), 2);
        assert_eq!(ny.name(), " new \t york ");
    }

    #[test]
    fn folded_region_key_feeds_the_region_policy() {
        let cfg = IndexConfig {
            fold_diacritics: true,
            region_countries: vec!["ca".into()],
            ..IndexConfig::default()
        };
        let idx = GazetteerIndex::build_with(
            vec![CityRecord::new("Montréal", "ca", Some("Québec"), 1_760_000, 45.5, -73.57)],
            cfg,
        )
        .unwrap();
        let m = &idx.records()[0];
        assert_eq!(m.region(), Some("québec"));
        assert_eq!(m.region_key(), Some("quebec"));
        assert_eq!(idx.regions_for_country("ca"), vec!["quebec"]);
    }

    #[test]
    fn mentions_region_checks_every_token() {
        let idx = GazetteerIndex::build(sample()).unwrap();
        assert!(idx.mentions_region("us", "il 60601 chicago"));
        assert!(!idx.mentions_region("us", "chicago"));
        assert!(!idx.mentions_region("fi", "helsinki il"));
    }

    #[test]
    fn stats_summarize_the_index() {
        let s = GazetteerIndex::build(sample()).unwrap().stats();
        assert_eq!(s.cities, 6);
        assert_eq!(s.countries, 3);
        assert_eq!(s.region_countries, 1);
        assert_eq!(s.regions, 3);
    }

    #[test]
    fn index_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GazetteerIndex>();
    }
}
