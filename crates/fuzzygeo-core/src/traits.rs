// crates/fuzzygeo-core/src/traits.rs
use crate::error::Result;
use crate::model::{MatchResult, Query};

/// Address-to-city resolution.
///
/// Implemented by [`GazetteerIndex`](crate::GazetteerIndex). Every call is
/// independent: implementations must not mutate shared state, so one value
/// can serve concurrent callers.
pub trait CitySearch {
    /// Resolve `address` to a city.
    ///
    /// `country` restricts the gazetteer to one country code; an unknown
    /// country yields an empty result, not an error. `threshold` must be a
    /// finite number in `[0, 1]`, otherwise
    /// [`GeoError::InvalidThreshold`](crate::GeoError::InvalidThreshold) is
    /// returned before any work is done.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fuzzygeo_core::{CityRecord, CitySearch, GazetteerIndex};
    ///
    /// let index = GazetteerIndex::build(vec![
    ///     CityRecord::new("chicago", "us", Some("il"), 2_700_000, 41.88, -87.63),
    /// ])?;
    ///
    /// let hit = index.match_address("1023 n. clark chacago il", Some("us"), 0.7)?;
    /// assert_eq!(hit.as_triple(), (Some("chicago"), Some(41.88), Some(-87.63)));
    ///
    /// let miss = index.match_address("1244 helsnky", Some("fi"), 0.7)?;
    /// assert!(!miss.is_match());
    /// # Ok::<(), fuzzygeo_core::GeoError>(())
    /// ```
    fn match_address(
        &self,
        address: &str,
        country: Option<&str>,
        threshold: f64,
    ) -> Result<MatchResult>;

    /// Resolve a [`Query`].
    fn search(&self, query: &Query) -> Result<MatchResult> {
        self.match_address(&query.address, query.country.as_deref(), query.threshold)
    }

    /// Resolve many addresses with the same country filter and threshold.
    /// Fails on the first invalid input; results keep the input order.
    fn match_batch<I, S>(
        &self,
        addresses: I,
        country: Option<&str>,
        threshold: f64,
    ) -> Result<Vec<MatchResult>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        addresses
            .into_iter()
            .map(|a| self.match_address(a.as_ref(), country, threshold))
            .collect()
    }
}
