use fuzzygeo_core::MatchResult;
use serde::Serialize;

/// One output line: the input address and what it resolved to.
#[derive(Debug, Serialize)]
pub struct MatchLine<'a> {
    pub address: &'a str,
    pub city: Option<&'a str>,
    pub country: Option<&'a str>,
    pub region: Option<&'a str>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub score: Option<f64>,
}

impl<'a> MatchLine<'a> {
    pub fn new(address: &'a str, result: &'a MatchResult) -> Self {
        let city = result.city();
        Self {
            address,
            city: city.map(|c| c.name.as_str()),
            country: city.map(|c| c.country.as_str()),
            region: city.and_then(|c| c.region.as_deref()),
            lat: city.map(|c| c.latitude),
            lng: city.map(|c| c.longitude),
            score: city.map(|c| c.score),
        }
    }

    /// `address<TAB>city<TAB>lat<TAB>lng`, empty fields when unmatched.
    pub fn to_tsv(&self) -> String {
        let opt = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_default();
        format!(
            "{}\t{}\t{}\t{}",
            self.address,
            self.city.unwrap_or(""),
            opt(self.lat),
            opt(self.lng)
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
