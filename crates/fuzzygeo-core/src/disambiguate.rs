// crates/fuzzygeo-core/src/disambiguate.rs

//! Choosing one city among several candidates.
//!
//! Candidates are ordered by `(end_position, score, population)` and the
//! greatest one wins: the match ending furthest right in the address first
//! (city names tend to follow street and unit information), then the higher
//! score, then the larger population. Exact hits take part with score `1.0`.

use crate::model::{CityMatch, MatchCandidate, MatchResult};
use std::cmp::Ordering;

/// Total order used to rank candidates, ascending.
pub fn rank(a: &MatchCandidate<'_>, b: &MatchCandidate<'_>) -> Ordering {
    a.end_position
        .cmp(&b.end_position)
        .then_with(|| a.score.total_cmp(&b.score))
        .then_with(|| a.population.cmp(&b.population))
}

/// The winning candidate, if any. On a complete tie the later candidate
/// wins, as the last element of an ascending stable sort would.
pub fn select<'a, 'c>(candidates: &'a [MatchCandidate<'c>]) -> Option<&'a MatchCandidate<'c>> {
    candidates.iter().max_by(|a, b| rank(a, b))
}

/// Turn the candidate set of a query into its result.
pub fn disambiguate(candidates: &[MatchCandidate<'_>]) -> MatchResult {
    match select(candidates) {
        Some(winner) => {
            tracing::debug!(
                city = winner.city.name(),
                end_position = winner.end_position,
                score = winner.score,
                candidates = candidates.len(),
                "selected city"
            );
            MatchResult::found(CityMatch::from_candidate(winner))
        }
        None => MatchResult::none(),
    }
}
