// crates/fuzzygeo-core/src/region.rs

//! Region-suffix detection.
//!
//! Some countries' addresses end with a state or province token
//! (`"... chicago il"`). For those countries the index keeps the set of known
//! region names and one compiled pattern that recognizes any of them at the
//! end of an address, preceded by whitespace. Which countries get such a
//! pattern is the [`RegionPolicy`].

use crate::error::{GeoError, Result};
use regex::Regex;
use std::collections::{BTreeSet, HashMap};

/// Known regions of one country and the suffix pattern compiled from them.
#[derive(Debug, Clone)]
pub struct RegionSuffix {
    regions: BTreeSet<String>,
    pattern: Regex,
}

impl RegionSuffix {
    /// Compile the suffix pattern for a set of lowercase region names.
    ///
    /// Returns `Ok(None)` when there are no regions to recognize.
    pub fn compile<I, S>(regions: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let regions: BTreeSet<String> = regions
            .into_iter()
            .map(|r| r.as_ref().trim().to_lowercase())
            .filter(|r| !r.is_empty())
            .collect();
        if regions.is_empty() {
            return Ok(None);
        }

        // Longer names first so "new york" is tried before "york".
        let mut alternatives: Vec<&String> = regions.iter().collect();
        alternatives.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alternation = alternatives
            .iter()
            .map(|r| regex::escape(r))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = Regex::new(&format!(r"\s({alternation})\s*$"))
            .map_err(|e| GeoError::InvalidConfig(format!("region pattern: {e}")))?;

        Ok(Some(Self { regions, pattern }))
    }

    pub fn regions(&self) -> &BTreeSet<String> {
        &self.regions
    }

    pub fn contains(&self, region: &str) -> bool {
        self.regions.contains(region)
    }

    /// The region token the address ends with, if any.
    pub fn resolve(&self, normalized_address: &str) -> Option<String> {
        self.pattern
            .captures(normalized_address)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    }
}

/// Country code (lowercase) to region suffix.
#[derive(Debug, Clone, Default)]
pub struct RegionPolicy {
    suffixes: HashMap<String, RegionSuffix>,
}

impl RegionPolicy {
    pub fn insert(&mut self, country: &str, suffix: RegionSuffix) {
        self.suffixes.insert(country.to_ascii_lowercase(), suffix);
    }

    /// The suffix for `country`, if region disambiguation is enabled for it.
    pub fn for_country(&self, country: &str) -> Option<&RegionSuffix> {
        self.suffixes.get(&country.to_ascii_lowercase())
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.suffixes.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }
}

/// Resolve the trailing region token of a normalized address.
pub fn resolve_region(normalized_address: &str, suffix: &RegionSuffix) -> Option<String> {
    suffix.resolve(normalized_address)
}

/// Remove a trailing `<whitespace><region><optional whitespace>` suffix.
///
/// The address is returned unchanged when it does not end that way.
///
/// ```rust
/// use fuzzygeo_core::region::strip_region;
///
/// assert_eq!(strip_region("n. clark chacago il", "il"), "n. clark chacago");
/// assert_eq!(strip_region("n. clark chacago", "il"), "n. clark chacago");
/// ```
pub fn strip_region(normalized_address: &str, region: &str) -> String {
    let trimmed = normalized_address.trim_end();
    if region.is_empty() {
        return normalized_address.to_string();
    }
    match trimmed.strip_suffix(region) {
        Some(head) if head.ends_with(char::is_whitespace) => head.trim_end().to_string(),
        _ => normalized_address.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us() -> RegionSuffix {
        RegionSuffix::compile(["il", "ny", "new york", "york", "d.c."])
            .unwrap()
            .unwrap()
    }

    #[test]
    fn empty_region_set_compiles_to_nothing() {
        let none: [&str; 0] = [];
        assert!(RegionSuffix::compile(none).unwrap().is_none());
        assert!(RegionSuffix::compile(["", "  "]).unwrap().is_none());
    }

    #[test]
    fn resolves_trailing_region() {
        let s = us();
        assert_eq!(resolve_region("n. clark chacago il", &s).as_deref(), Some("il"));
        assert_eq!(resolve_region("broadway ny ", &s).as_deref(), Some("ny"));
        assert_eq!(resolve_region("il chicago", &s), None);
    }

    #[test]
    fn region_needs_preceding_whitespace() {
        let s = us();
        assert_eq!(resolve_region("il", &s), None);
        assert_eq!(resolve_region("brazil", &s), None);
    }

    #[test]
    fn longest_region_wins() {
        let s = us();
        assert_eq!(resolve_region("main st new york", &s).as_deref(), Some("new york"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let s = us();
        assert_eq!(resolve_region("pennsylvania ave d.c.", &s).as_deref(), Some("d.c."));
        assert_eq!(resolve_region("pennsylvania ave dxcx", &s), None);
    }

    #[test]
    fn strip_removes_only_a_whole_trailing_token() {
        assert_eq!(strip_region("chicago il", "il"), "chicago");
        assert_eq!(strip_region("chicago il  ", "il"), "chicago");
        assert_eq!(strip_region("brazil", "il"), "brazil");
        assert_eq!(strip_region("il", "il"), "il");
    }

    #[test]
    fn stripping_is_a_fixed_point_once_no_region_remains() {
        let s = us();
        let addr = "n. clark chacago il";
        let region = resolve_region(addr, &s).unwrap();
        let once = strip_region(addr, &region);
        assert_eq!(resolve_region(&once, &s), None);
        assert_eq!(strip_region(&once, &region), once);
    }

    #[test]
    fn policy_is_keyed_case_insensitively() {
        let mut policy = RegionPolicy::default();
        policy.insert("US", us());
        assert!(policy.for_country("us").is_some());
        assert!(policy.for_country("fi").is_none());
        assert_eq!(policy.len(), 1);
    }
}
