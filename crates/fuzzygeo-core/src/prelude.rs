// crates/fuzzygeo-core/src/prelude.rs
pub use crate::error::{GeoError, Result};
pub use crate::index::{GazetteerIndex, IndexConfig};
pub use crate::model::{CityMatch, CityRecord, MatchResult, Query, DEFAULT_THRESHOLD};
pub use crate::signature::SignatureKind;
pub use crate::traits::CitySearch;
