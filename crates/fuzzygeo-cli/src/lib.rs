//! # fuzzygeo-cli
//!
//! Command-line front end for `fuzzygeo-core`. The binary loads a gazetteer
//! (CSV, TSV or JSON, optionally gzip-compressed), builds an index and runs
//! one of the subcommands:
//!
//! ```text
//! fuzzygeo -i cities.csv match "1023 n. clark chacago il" -c us
//! fuzzygeo -i cities.csv.gz batch addresses.txt -c us -t 0.8 --json
//! fuzzygeo -i cities.csv --signature double-metaphone match "domplatz kologne" -c de
//! fuzzygeo -i cities.csv regions us
//! fuzzygeo -i cities.csv stats
//! ```
//!
//! Logs go to stderr and are controlled with `RUST_LOG`
//! (default `fuzzygeo_cli=info,fuzzygeo_core=info`).

pub mod args;
pub mod output;

use crate::args::{split_list, CliArgs};
#[cfg(feature = "json")]
use anyhow::Context;
use fuzzygeo_core::IndexConfig;

/// Resolve the index configuration: the optional JSON file first, then
/// command-line overrides.
pub fn index_config(args: &CliArgs) -> anyhow::Result<IndexConfig> {
    let mut config = match &args.config {
        #[cfg(feature = "json")]
        Some(path) => IndexConfig::from_json_path(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        #[cfg(not(feature = "json"))]
        Some(path) => anyhow::bail!(
            "config file {} needs the 'json' feature",
            path.display()
        ),
        None => IndexConfig::default(),
    };

    if let Some(sig) = args.signature {
        config.signature = sig.into();
    }
    if let Some(len) = args.hash_length {
        config.hash_length = len;
    }
    if let Some(list) = &args.region_countries {
        config.region_countries = split_list(list);
    }
    if args.fold {
        config.fold_diacritics = true;
    }
    Ok(config)
}
