// crates/fuzzygeo-core/src/matcher.rs

//! # Approximate Matcher
//!
//! For a candidate city whose name has `n` words, every run of `n`
//! consecutive address tokens (an n-gram) is compared with the name and the
//! best one is kept. Windows that would run past the last token are shorter
//! than `n` and are not scored.
//!
//! Scores use the normalized Levenshtein similarity
//! `1 - levenshtein(a, b) / max(chars(a), chars(b))`, so `1.0` means the
//! window equals the name. A window equal to the name short-circuits scoring
//! for that city.

use crate::index::IndexedCity;
use crate::model::MatchCandidate;
use crate::text::token_end_offsets;

/// Edit similarity of two strings in `[0, 1]`.
///
/// ```rust
/// use fuzzygeo_core::matcher::similarity;
///
/// assert_eq!(similarity("chicago", "chicago"), 1.0);
/// assert!((similarity("chacago", "chicago") - 6.0 / 7.0).abs() < 1e-9);
/// assert_eq!(similarity("", ""), 1.0);
/// ```
#[inline]
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// All full windows of `n` consecutive tokens, as `(start, text)`.
///
/// ```rust
/// use fuzzygeo_core::matcher::ngram_windows;
///
/// let toks = ["main", "st", "new", "yrok"];
/// let grams: Vec<String> = ngram_windows(&toks, 2).map(|(_, g)| g).collect();
/// assert_eq!(grams, vec!["main st", "st new", "new yrok"]);
/// ```
pub fn ngram_windows<'t>(
    tokens: &'t [&'t str],
    n: usize,
) -> impl Iterator<Item = (usize, String)> + 't {
    let count = if n == 0 || n > tokens.len() {
        0
    } else {
        tokens.len() - n + 1
    };
    (0..count).map(move |i| (i, tokens[i..i + n].join(" ")))
}

/// Tokens of one address prepared for scoring against many cities.
#[derive(Debug, Clone)]
pub struct AddressGrams<'t> {
    tokens: &'t [&'t str],
    ends: Vec<usize>,
}

impl<'t> AddressGrams<'t> {
    pub fn new(tokens: &'t [&'t str]) -> Self {
        Self {
            ends: token_end_offsets(tokens),
            tokens,
        }
    }

    /// Char offset at which the window `[start, start + n)` ends.
    fn end_of(&self, start: usize, n: usize) -> usize {
        self.ends[start + n - 1]
    }

    /// Score one city. Returns a candidate when its best window reaches
    /// `threshold`.
    pub fn score_city<'c>(&self, city: &'c IndexedCity, threshold: f64) -> Option<MatchCandidate<'c>> {
        let n = city.word_count();
        let key = city.match_key();

        // Exact fast path: first window equal to the name.
        if let Some((start, _)) = ngram_windows(self.tokens, n).find(|(_, g)| g == key) {
            return Some(MatchCandidate {
                city,
                end_position: self.end_of(start, n),
                score: 1.0,
                population: city.population(),
                exact: true,
            });
        }

        let mut best: Option<(usize, f64)> = None;
        for (start, gram) in ngram_windows(self.tokens, n) {
            let score = similarity(&gram, key);
            tracing::trace!(city = key, gram = %gram, score, "scored window");
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((start, score));
            }
        }

        let (start, score) = best?;
        if score < threshold {
            return None;
        }
        Some(MatchCandidate {
            city,
            end_position: self.end_of(start, n),
            score,
            population: city.population(),
            exact: false,
        })
    }
}

/// Score every candidate city against the address tokens, keeping those
/// that reach `threshold`. Order follows `cities`.
pub fn match_candidates<'c>(
    cities: &[&'c IndexedCity],
    tokens: &[&str],
    threshold: f64,
) -> Vec<MatchCandidate<'c>> {
    let grams = AddressGrams::new(tokens);
    cities
        .iter()
        .filter_map(|city| grams.score_city(city, threshold))
        .collect()
}
