//! fuzzygeo: match postal addresses to cities from the terminal.
//!
//! Usage examples
//! --------------
//!
//! - Match one address
//!   $ fuzzygeo -i cities.csv match "1023 n. clark chacago il" -c us
//!
//! - Match a file of addresses, one per line, as JSON lines
//!   $ fuzzygeo -i cities.csv.gz batch addresses.txt -c us --json
//!
//! - Read addresses from stdin with a phonetic pre-filter
//!   $ cat addresses.txt | fuzzygeo -i cities.csv --signature double-metaphone batch - -c de
//!
//! - Inspect the index
//!   $ fuzzygeo -i cities.csv stats
//!   $ fuzzygeo -i cities.csv countries
//!   $ fuzzygeo -i cities.csv regions us
use anyhow::Context;
use clap::Parser;
use fuzzygeo_cli::args::{CliArgs, Commands, MatchOpts};
use fuzzygeo_cli::index_config;
use fuzzygeo_cli::output::MatchLine;
use fuzzygeo_core::{CitySearch, GazetteerIndex};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fuzzygeo_cli=info,fuzzygeo_core=info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = CliArgs::parse();

    let input = args
        .input
        .clone()
        .context("no gazetteer given; pass --input <FILE>")?;
    let config = index_config(&args)?;
    let index = GazetteerIndex::load_from_path(&input, config)
        .with_context(|| format!("loading gazetteer {}", input.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Commands::Stats => {
            let stats = index.stats();
            writeln!(out, "Gazetteer statistics:")?;
            writeln!(out, "  Cities: {}", stats.cities)?;
            writeln!(out, "  Countries: {}", stats.countries)?;
            writeln!(out, "  Signature buckets: {}", stats.signature_buckets)?;
            writeln!(out, "  Region countries: {}", stats.region_countries)?;
            writeln!(out, "  Regions: {}", stats.regions)?;
        }

        Commands::Countries => {
            for c in index.countries() {
                writeln!(out, "{c}")?;
            }
        }

        Commands::Regions { country } => {
            let regions = index.regions_for_country(&country);
            if regions.is_empty() {
                eprintln!("No regions recognized for: {country}");
            } else {
                for r in regions {
                    writeln!(out, "{r}")?;
                }
            }
        }

        Commands::Match { address, opts } => {
            let result = index.match_address(&address, opts.country.as_deref(), opts.threshold)?;
            write_line(&mut out, &address, &result, &opts)?;
        }

        Commands::Batch { file, opts } => {
            let reader: Box<dyn BufRead> = if file == "-" {
                Box::new(BufReader::new(io::stdin()))
            } else {
                let f = File::open(&file).with_context(|| format!("opening {file}"))?;
                Box::new(BufReader::new(f))
            };

            let (mut total, mut matched) = (0usize, 0usize);
            for line in reader.lines() {
                let line = line.with_context(|| format!("reading {file}"))?;
                let address = line.trim();
                if address.is_empty() {
                    continue;
                }
                let result =
                    index.match_address(address, opts.country.as_deref(), opts.threshold)?;
                total += 1;
                matched += usize::from(result.is_match());
                write_line(&mut out, address, &result, &opts)?;
            }
            tracing::info!(total, matched, "batch finished");
        }
    }

    Ok(())
}

fn write_line(
    out: &mut impl Write,
    address: &str,
    result: &fuzzygeo_core::MatchResult,
    opts: &MatchOpts,
) -> anyhow::Result<()> {
    let line = MatchLine::new(address, result);
    if opts.json {
        writeln!(out, "{}", line.to_json()?)?;
    } else {
        writeln!(out, "{}", line.to_tsv())?;
    }
    Ok(())
}
