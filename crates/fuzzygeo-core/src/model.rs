// crates/fuzzygeo-core/src/model.rs
use crate::index::IndexedCity;
use serde::{Deserialize, Serialize};

/// Default similarity threshold for a [`Query`].
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// A single gazetteer entry.
///
/// Records are immutable once created. The region is stored lowercased and a
/// blank region is treated as absent; everything else is kept exactly as
/// given. Validation (non-empty name and country, finite coordinates)
/// happens when the record is indexed, see
/// [`GazetteerIndex::build`](crate::GazetteerIndex::build).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CityRecord {
    name: String,
    country: String,
    region: Option<String>,
    population: u64,
    latitude: f64,
    longitude: f64,
}

impl CityRecord {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        region: Option<&str>,
        population: u64,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        let region = region
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_lowercase);
        Self {
            name: name.into(),
            country: country.into(),
            region,
            population,
            latitude,
            longitude,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// One geocoding request: the raw address, an optional country filter and
/// the minimum similarity a fuzzy match must reach.
///
/// ```rust
/// use fuzzygeo_core::Query;
///
/// let q = Query::new("1023 n. clark chacago il").country("us").threshold(0.8);
/// assert_eq!(q.country.as_deref(), Some("us"));
/// assert_eq!(q.threshold, 0.8);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub address: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Query {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            country: None,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

/// A city that passed the similarity threshold for one query.
///
/// `end_position` is the character offset at which the matching n-gram ends
/// in the normalized, region-stripped address.
#[derive(Clone, Copy, Debug)]
pub struct MatchCandidate<'a> {
    pub city: &'a IndexedCity,
    pub end_position: usize,
    pub score: f64,
    pub population: u64,
    /// `true` when the city name occurred verbatim in the address.
    pub exact: bool,
}

/// The city selected for an address.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CityMatch {
    pub name: String,
    pub country: String,
    pub region: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub population: u64,
    pub score: f64,
}

impl CityMatch {
    pub(crate) fn from_candidate(candidate: &MatchCandidate<'_>) -> Self {
        let record = candidate.city.record();
        Self {
            name: record.name().to_string(),
            country: record.country().to_string(),
            region: record.region().map(str::to_string),
            latitude: record.latitude(),
            longitude: record.longitude(),
            population: record.population(),
            score: candidate.score,
        }
    }
}

/// Outcome of a geocoding query.
///
/// Either a city was found, in which case name, latitude and longitude are
/// all available, or nothing was found and all three are `None`. There is no
/// partial result.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MatchResult {
    matched: Option<CityMatch>,
}

impl MatchResult {
    /// The all-absent result.
    pub fn none() -> Self {
        Self { matched: None }
    }

    pub fn found(city: CityMatch) -> Self {
        Self {
            matched: Some(city),
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched.is_some()
    }

    pub fn city(&self) -> Option<&CityMatch> {
        self.matched.as_ref()
    }

    pub fn into_city(self) -> Option<CityMatch> {
        self.matched
    }

    pub fn city_name(&self) -> Option<&str> {
        self.matched.as_ref().map(|c| c.name.as_str())
    }

    pub fn latitude(&self) -> Option<f64> {
        self.matched.as_ref().map(|c| c.latitude)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.matched.as_ref().map(|c| c.longitude)
    }

    /// `(city, lat, lng)`, all present or all absent.
    pub fn as_triple(&self) -> (Option<&str>, Option<f64>, Option<f64>) {
        (self.city_name(), self.latitude(), self.longitude())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_is_lowercased_and_blank_is_absent() {
        let r = CityRecord::new("chicago", "us", Some(" IL "), 1, 41.88, -87.63);
        assert_eq!(r.region(), Some("il"));

        let r = CityRecord::new("chicago", "us", Some("   "), 1, 41.88, -87.63);
        assert_eq!(r.region(), None);
    }

    #[test]
    fn empty_result_has_no_fields() {
        let r = MatchResult::none();
        assert!(!r.is_match());
        assert_eq!(r.as_triple(), (None, None, None));
    }

    #[test]
    fn found_result_has_all_fields() {
        let r = MatchResult::found(CityMatch {
            name: "chicago".into(),
            country: "us".into(),
            region: Some("il".into()),
            latitude: 41.88,
            longitude: -87.63,
            population: 2_700_000,
            score: 0.857,
        });
        assert_eq!(r.as_triple(), (Some("chicago"), Some(41.88), Some(-87.63)));
    }

    #[test]
    fn query_defaults_to_standard_threshold() {
        let q = Query::new("helsinki");
        assert_eq!(q.threshold, DEFAULT_THRESHOLD);
        assert!(q.country.is_none());
    }
}
