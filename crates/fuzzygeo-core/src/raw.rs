// crates/fuzzygeo-core/src/raw.rs

//! Gazetteer rows as they come out of a file, before validation.

use crate::error::{GeoError, Result};
use crate::model::CityRecord;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

/// Raw gazetteer row.
///
/// Column names follow the usual `country, region, city, population, lat,
/// lng` layout; `name`, `latitude`, `longitude` and `lon` are accepted as
/// aliases. Numbers may be given as strings.
#[derive(Debug, Default, Deserialize)]
pub struct CityRaw {
    #[serde(default, alias = "name")]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// Non-string values (numbers, booleans, null) count as "no region".
    #[serde(default, deserialize_with = "lenient_region")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub population: Option<f64>,
    #[serde(default, alias = "latitude", deserialize_with = "lenient_f64")]
    pub lat: Option<f64>,
    #[serde(
        default,
        alias = "longitude",
        alias = "lon",
        deserialize_with = "lenient_f64"
    )]
    pub lng: Option<f64>,
}

impl CityRaw {
    /// Validate and convert. `index` is the row number used in errors.
    pub fn into_record(self, index: usize) -> Result<CityRecord> {
        let city = non_blank(self.city)
            .ok_or_else(|| GeoError::invalid_record(index, "missing city name"))?;
        let country = non_blank(self.country)
            .ok_or_else(|| GeoError::invalid_record(index, "missing country"))?;
        let lat = self
            .lat
            .ok_or_else(|| GeoError::invalid_record(index, "missing latitude"))?;
        let lng = self
            .lng
            .ok_or_else(|| GeoError::invalid_record(index, "missing longitude"))?;

        let population = match self.population {
            None => 0,
            Some(p) if p.is_finite() && p >= 0.0 => p.round() as u64,
            Some(p) => {
                return Err(GeoError::invalid_record(
                    index,
                    format!("population must be a non-negative number, got {p}"),
                ))
            }
        };

        Ok(CityRecord::new(
            city,
            country.trim(),
            self.region.as_deref(),
            population,
            lat,
            lng,
        ))
    }
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}

/// Parses an optional numeric string into an `f64`, trimming whitespace.
/// Unparseable input gives `None`.
fn parse_opt_f64(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        None
    } else {
        t.parse::<f64>().ok()
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct F64Visitor;

    impl<'de> Visitor<'de> for F64Visitor {
        type Value = Option<f64>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number, a numeric string or nothing")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
            Ok(Some(v as f64))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
            Ok(Some(v as f64))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
            Ok(parse_opt_f64(v))
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(
            self,
            d: D2,
        ) -> std::result::Result<Self::Value, D2::Error> {
            d.deserialize_any(F64Visitor)
        }
    }

    deserializer.deserialize_any(F64Visitor)
}

fn lenient_region<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct RegionVisitor;

    impl<'de> Visitor<'de> for RegionVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a region name or nothing")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
            let t = v.trim();
            Ok((!t.is_empty()).then(|| t.to_lowercase()))
        }

        fn visit_f64<E: de::Error>(self, _: f64) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_i64<E: de::Error>(self, _: i64) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_u64<E: de::Error>(self, _: u64) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(
            self,
            d: D2,
        ) -> std::result::Result<Self::Value, D2::Error> {
            d.deserialize_any(RegionVisitor)
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error> {
            while seq.next_element::<de::IgnoredAny>()?.is_some() {}
            Ok(None)
        }

        fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
            while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
            Ok(None)
        }
    }

    deserializer.deserialize_any(RegionVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> CityRaw {
        CityRaw {
            city: Some("chicago".into()),
            country: Some("us".into()),
            region: Some("il".into()),
            population: Some(2_700_000.0),
            lat: Some(41.88),
            lng: Some(-87.63),
        }
    }

    #[test]
    fn converts_a_complete_row() {
        let r = raw().into_record(0).unwrap();
        assert_eq!(r.name(), "chicago");
        assert_eq!(r.region(), Some("il"));
        assert_eq!(r.population(), 2_700_000);
    }

    #[test]
    fn missing_population_is_zero() {
        let r = CityRaw {
            population: None,
            ..raw()
        }
        .into_record(0)
        .unwrap();
        assert_eq!(r.population(), 0);
    }

    #[test]
    fn missing_required_fields_are_rejected_with_row_index() {
        for bad in [
            CityRaw { city: None, ..raw() },
            CityRaw { city: Some(" ".into()), ..raw() },
            CityRaw { country: None, ..raw() },
            CityRaw { lat: None, ..raw() },
            CityRaw { lng: None, ..raw() },
            CityRaw { population: Some(-1.0), ..raw() },
        ] {
            let err = bad.into_record(7).unwrap_err();
            assert!(matches!(err, GeoError::InvalidRecord { index: 7, .. }), "{err}");
        }
    }

    #[test]
    fn numeric_strings_are_parsed() {
        assert_eq!(parse_opt_f64(" 41.88 "), Some(41.88));
        assert_eq!(parse_opt_f64("N/A"), None);
        assert_eq!(parse_opt_f64(""), None);
    }
}
