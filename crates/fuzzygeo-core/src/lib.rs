// crates/fuzzygeo-core/src/lib.rs

//! # fuzzygeo-core
//!
//! Resolve free-text postal addresses to a city from a gazetteer, tolerating
//! typos, abbreviations and embedded numbers.
//!
//! ```rust
//! use fuzzygeo_core::prelude::*;
//!
//! let index = GazetteerIndex::build(vec![
//!     CityRecord::new("chicago", "us", Some("il"), 2_700_000, 41.88, -87.63),
//!     CityRecord::new("helsinki", "fi", None, 650_000, 60.17, 24.94),
//! ])?;
//!
//! let hit = index.match_address("1023 n. clark chacago il", Some("us"), 0.7)?;
//! assert_eq!(hit.city_name(), Some("chicago"));
//! # Ok::<(), GeoError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod disambiguate;
pub mod error;
pub mod filter;
pub mod index;
pub mod loader;
pub mod matcher;
pub mod model;
pub mod prelude;
pub mod raw;
pub mod region;
pub mod search;
pub mod signature;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::IndexStats;
pub use crate::error::{GeoError, Result};
pub use crate::index::{GazetteerIndex, IndexConfig, IndexedCity};
pub use crate::loader::{load_records_from_path, GazetteerFormat};
pub use crate::model::{CityMatch, CityRecord, MatchCandidate, MatchResult, Query, DEFAULT_THRESHOLD};
pub use crate::region::{RegionPolicy, RegionSuffix};
pub use crate::signature::{FirstLetter, Signature, SignatureFn, SignatureKind};
#[cfg(feature = "phonetic")]
pub use crate::signature::DoubleMetaphone;
// Export the Search Trait (Crucial for users!)
pub use crate::traits::CitySearch;
