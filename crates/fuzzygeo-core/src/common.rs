// crates/fuzzygeo-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a [`GazetteerIndex`](crate::GazetteerIndex).
///
/// Returned by [`GazetteerIndex::stats`](crate::GazetteerIndex::stats); the
/// counts describe the index as built, after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub cities: usize,
    pub countries: usize,
    pub signature_buckets: usize,
    /// Countries with a compiled region-suffix pattern.
    pub region_countries: usize,
    /// Distinct regions across those countries.
    pub regions: usize,
}
