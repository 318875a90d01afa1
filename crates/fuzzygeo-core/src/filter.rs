// crates/fuzzygeo-core/src/filter.rs

//! Candidate pre-filtering.

use crate::index::{GazetteerIndex, IndexedCity};
use crate::signature::Signature;
use std::collections::HashSet;

/// Narrow the gazetteer to cities worth scoring against `tokens`.
///
/// A city survives when its signature equals the signature of at least one
/// token, it belongs to `country` (if given) and its region equals `region`
/// (if one was resolved). An empty result is the ordinary "no match" path.
pub fn filter_candidates<'a>(
    tokens: &[&str],
    country: Option<&str>,
    region: Option<&str>,
    index: &'a GazetteerIndex,
) -> Vec<&'a IndexedCity> {
    let signatures: HashSet<Signature> = tokens
        .iter()
        .filter_map(|tok| index.signature_of(tok))
        .collect();
    if signatures.is_empty() {
        return Vec::new();
    }

    index
        .lookup_by_signature(&signatures)
        .into_iter()
        .filter(|city| country.map_or(true, |c| city.is_in_country(c.trim())))
        .filter(|city| region.map_or(true, |r| city.region_key() == Some(r)))
        .collect()
}
