// crates/fuzzygeo-core/src/signature.rs

//! Phonetic signatures used to bucket city names for candidate
//! pre-filtering.
//!
//! A signature is a short code computed from a name. Address tokens are
//! signed the same way, and only cities whose signature equals the
//! signature of some address token are scored. The reference signature is
//! the first character of the name ([`FirstLetter`]): cheap, but a typo in
//! the first letter loses the city. [`DoubleMetaphone`] buckets by sound
//! instead, which changes which cities reach scoring.

use crate::error::{GeoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A bucket key produced by a [`SignatureFn`].
pub type Signature = String;

/// Capability `name -> signature`.
///
/// Implementations must be deterministic. `None` means the name carries no
/// usable signature (for example a token made only of punctuation); such a
/// name never lands in a bucket.
pub trait SignatureFn: Debug + Send + Sync {
    fn signature(&self, name: &str) -> Option<Signature>;
}

/// First character of the name.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLetter;

impl SignatureFn for FirstLetter {
    #[inline]
    fn signature(&self, name: &str) -> Option<Signature> {
        name.trim_start().chars().next().map(String::from)
    }
}

/// Double Metaphone primary code of the first token, truncated to
/// `hash_length` characters. Longer hashes trade recall for precision.
#[cfg(feature = "phonetic")]
#[derive(Debug, Clone, Copy)]
pub struct DoubleMetaphone {
    hash_length: usize,
}

#[cfg(feature = "phonetic")]
impl DoubleMetaphone {
    pub fn new(hash_length: usize) -> Self {
        Self { hash_length }
    }
}

#[cfg(feature = "phonetic")]
impl Default for DoubleMetaphone {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_LENGTH)
    }
}

#[cfg(feature = "phonetic")]
impl SignatureFn for DoubleMetaphone {
    fn signature(&self, name: &str) -> Option<Signature> {
        use rphonetic::Encoder;

        let first = name.split_whitespace().next()?;
        let word: String = crate::text::fold_key(first)
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        if word.is_empty() {
            return None;
        }

        // A zero hash length leaves the code unbounded.
        let max_len = (self.hash_length > 0).then_some(self.hash_length);

        // rphonetic has panicked on odd inputs before; treat that as "no signature".
        let code = match std::panic::catch_unwind(|| {
            rphonetic::DoubleMetaphone::new(max_len).encode(&word)
        }) {
            Ok(code) => code,
            Err(_) => {
                tracing::warn!("DoubleMetaphone panicked on input {:?}", word);
                return None;
            }
        };

        if code.is_empty() {
            None
        } else {
            Some(code)
        }
    }
}

/// Default Double Metaphone code length.
pub const DEFAULT_HASH_LENGTH: usize = 4;

/// Which signature function an index is built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureKind {
    #[default]
    FirstLetter,
    DoubleMetaphone,
}

impl SignatureKind {
    /// Instantiate the signature function.
    ///
    /// Fails with [`GeoError::InvalidConfig`] when Double Metaphone is
    /// requested but the crate was built without the `phonetic` feature.
    pub fn build(self, hash_length: usize) -> Result<Box<dyn SignatureFn>> {
        match self {
            SignatureKind::FirstLetter => Ok(Box::new(FirstLetter)),
            #[cfg(feature = "phonetic")]
            SignatureKind::DoubleMetaphone => Ok(Box::new(DoubleMetaphone::new(hash_length))),
            #[cfg(not(feature = "phonetic"))]
            SignatureKind::DoubleMetaphone => {
                let _ = hash_length;
                Err(GeoError::InvalidConfig(
                    "double_metaphone signatures require the 'phonetic' feature".into(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_letter_takes_first_char() {
        assert_eq!(FirstLetter.signature("chicago").as_deref(), Some("c"));
        assert_eq!(FirstLetter.signature("new york").as_deref(), Some("n"));
        assert_eq!(FirstLetter.signature("  zürich").as_deref(), Some("z"));
        assert_eq!(FirstLetter.signature(""), None);
    }

    #[test]
    fn first_letter_is_case_sensitive() {
        assert_ne!(FirstLetter.signature("Chicago"), FirstLetter.signature("chicago"));
    }

    #[cfg(feature = "phonetic")]
    #[test]
    fn metaphone_buckets_sound_alikes_together() {
        let dm = DoubleMetaphone::default();
        assert_eq!(dm.signature("helsinki"), dm.signature("helsnky"));
        assert_eq!(dm.signature("new york"), dm.signature("new"));
        assert!(dm.signature("...").is_none());
    }

    #[cfg(feature = "phonetic")]
    #[test]
    fn metaphone_respects_hash_length() {
        let code = DoubleMetaphone::new(1).signature("helsinki").unwrap();
        assert_eq!(code.chars().count(), 1);
    }

    #[cfg(feature = "phonetic")]
    #[test]
    fn metaphone_codes_longer_than_four() {
        let short = DoubleMetaphone::default().signature("washington").unwrap();
        let long = DoubleMetaphone::new(8).signature("washington").unwrap();
        assert_eq!(short.chars().count(), 4);
        assert!(long.chars().count() > 4, "{long}");
        assert!(long.starts_with(&short));

        let unbounded = DoubleMetaphone::new(0).signature("washington").unwrap();
        assert_eq!(unbounded, long);
    }

    #[test]
    fn kind_builds_first_letter_by_default() {
        let f = SignatureKind::default().build(DEFAULT_HASH_LENGTH).unwrap();
        assert_eq!(f.signature("paris").as_deref(), Some("p"));
    }
}
