// crates/fuzzygeo-core/src/text.rs

//! Address normalization and tokenization.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("invalid RE_DIGITS"));

/// Normalize a raw address for matching.
///
/// Every maximal run of digits is deleted, leading and trailing whitespace is
/// trimmed and internal whitespace runs collapse to a single space.
///
/// ```rust
/// use fuzzygeo_core::text::normalize;
///
/// assert_eq!(normalize("1023 n. clark  chacago il"), "n. clark chacago il");
/// assert_eq!(normalize("  42  "), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let stripped = RE_DIGITS.replace_all(raw, "");
    collapse_whitespace(&stripped)
}

/// Trim and join whitespace-separated runs with single spaces.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a normalized address on whitespace. An empty address has no tokens.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// Character offset at which each token ends once the tokens are joined
/// with single spaces.
pub fn token_end_offsets(tokens: &[&str]) -> Vec<usize> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut pos = 0usize;
    for (i, tok) in tokens.iter().enumerate() {
        if i > 0 {
            pos += 1;
        }
        pos += tok.chars().count();
        out.push(pos);
    }
    out
}

/// Convert a string into a folded key: Unicode transliterated to ASCII
/// (`Łódź` -> `Lodz`) and lowercased.
///
/// ```rust
/// use fuzzygeo_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("MÜNCHEN"), "munchen");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Number of whitespace-separated tokens in a city name.
pub fn word_count(name: &str) -> usize {
    name.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_digit_runs_and_collapses_whitespace() {
        assert_eq!(normalize("1244 helsnky "), "helsnky");
        assert_eq!(normalize("apt 4b\t  main st\n 60601"), "apt b main st");
        assert_eq!(normalize("12b34"), "b");
    }

    #[test]
    fn normalize_of_digits_only_is_empty() {
        assert_eq!(normalize("60601 1234"), "");
        assert!(tokenize(&normalize("60601 1234")).is_empty());
    }

    #[test]
    fn tokenize_splits_on_whitespace() {
        assert_eq!(tokenize("n. clark chacago"), vec!["n.", "clark", "chacago"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn end_offsets_count_characters() {
        let toks = tokenize("n. clark chacago");
        assert_eq!(token_end_offsets(&toks), vec![2, 8, 16]);

        // multi-byte characters count once
        let toks = tokenize("rue zürich");
        assert_eq!(token_end_offsets(&toks), vec![3, 10]);
    }

    #[test]
    fn collapse_keeps_digits() {
        assert_eq!(collapse_whitespace("  new \t york  10 "), "new york 10");
    }

    #[test]
    fn word_count_ignores_extra_spaces() {
        assert_eq!(word_count("new york"), 2);
        assert_eq!(word_count(" rio  de janeiro "), 3);
        assert_eq!(word_count(""), 0);
    }
}
