use clap::{Parser, Subcommand, ValueEnum};
use fuzzygeo_core::{SignatureKind, DEFAULT_THRESHOLD};
use std::path::PathBuf;

/// CLI arguments for fuzzygeo
#[derive(Debug, Parser)]
#[command(
    name = "fuzzygeo",
    version,
    about = "Match free-text postal addresses to cities in a gazetteer"
)]
pub struct CliArgs {
    /// Path to the gazetteer (.csv, .tsv or .json, optionally .gz)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Optional JSON index configuration; flags below override it
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Signature used to pre-filter candidate cities
    #[arg(long = "signature", value_enum, global = true)]
    pub signature: Option<SignatureArg>,

    /// Code length for phonetic signatures
    #[arg(long = "hash-length", global = true)]
    pub hash_length: Option<usize>,

    /// Comma-separated country codes whose addresses end with a region (e.g. us,ca)
    #[arg(long = "region-countries", global = true)]
    pub region_countries: Option<String>,

    /// Transliterate and lowercase names and addresses before matching
    #[arg(long = "fold", global = true)]
    pub fold: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SignatureArg {
    FirstLetter,
    DoubleMetaphone,
}

impl From<SignatureArg> for SignatureKind {
    fn from(arg: SignatureArg) -> Self {
        match arg {
            SignatureArg::FirstLetter => SignatureKind::FirstLetter,
            SignatureArg::DoubleMetaphone => SignatureKind::DoubleMetaphone,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the gazetteer index
    Stats,

    /// List the country codes in the gazetteer
    Countries,

    /// List the regions recognized at the end of a country's addresses
    Regions {
        /// Country code (e.g. us)
        country: String,
    },

    /// Match a single address
    Match {
        /// The free-text address
        address: String,

        #[command(flatten)]
        opts: MatchOpts,
    },

    /// Match one address per line from a file ("-" for stdin)
    Batch {
        /// Input file
        file: String,

        #[command(flatten)]
        opts: MatchOpts,
    },
}

#[derive(Debug, Clone, clap::Args)]
pub struct MatchOpts {
    /// Restrict matching to one country code
    #[arg(short = 'c', long = "country")]
    pub country: Option<String>,

    /// Minimum similarity in [0, 1]
    #[arg(short = 't', long = "threshold", default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Print JSON instead of tab-separated values
    #[arg(long = "json")]
    pub json: bool,
}

/// Split a comma-separated list, dropping empty entries.
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim())
        .filter(|x| !x.is_empty())
        .map(str::to_string)
        .collect()
}
