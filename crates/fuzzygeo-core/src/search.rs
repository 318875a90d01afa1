// crates/fuzzygeo-core/src/search.rs

//! The query pipeline:
//! normalize → resolve/strip region → filter candidates → score → disambiguate.

use crate::disambiguate::disambiguate;
use crate::error::{GeoError, Result};
use crate::filter::filter_candidates;
use crate::index::GazetteerIndex;
use crate::matcher::match_candidates;
use crate::model::MatchResult;
use crate::region::{resolve_region, strip_region};
use crate::text::tokenize;
use crate::traits::CitySearch;

/// Reject thresholds that are not finite or fall outside `[0, 1]`.
pub fn validate_threshold(threshold: f64) -> Result<()> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(GeoError::InvalidThreshold(threshold))
    }
}

impl CitySearch for GazetteerIndex {
    fn match_address(
        &self,
        address: &str,
        country: Option<&str>,
        threshold: f64,
    ) -> Result<MatchResult> {
        validate_threshold(threshold)?;

        let country = country.map(str::trim).filter(|c| !c.is_empty());
        if let Some(c) = country {
            if !self.has_country(c) {
                tracing::debug!(country = c, "country not in gazetteer");
                return Ok(MatchResult::none());
            }
        }

        let mut normalized = self.prepare_address(address);
        if normalized.is_empty() {
            return Ok(MatchResult::none());
        }

        // Region disambiguation is opt-in per country.
        let region = country
            .and_then(|c| self.region_suffix(c))
            .and_then(|suffix| resolve_region(&normalized, suffix));
        if let Some(r) = &region {
            normalized = strip_region(&normalized, r);
        }
        tracing::debug!(address = %normalized, region = ?region, "normalized address");

        let tokens = tokenize(&normalized);
        if tokens.is_empty() {
            return Ok(MatchResult::none());
        }

        let cities = filter_candidates(&tokens, country, region.as_deref(), self);
        tracing::debug!(candidates = cities.len(), "filtered gazetteer");
        if cities.is_empty() {
            return Ok(MatchResult::none());
        }

        let candidates = match_candidates(&cities, &tokens, threshold);
        Ok(disambiguate(&candidates))
    }
}
