//! # cart-totals
//!
//! Prints the totals breakdown of a cart or order record.
//!
//! ## Usage
//! ```text
//! cart-totals order.json
//! cat cart.json | cart-totals --region reg_eu --format json
//! ```
//!
//! Input is one JSON document, either tagged (`{"cart": {...}}`,
//! `{"order": {...}}`, `{"totals": {...}}`) or a bare totals record.

mod config;
mod error;

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use totals_core::{
    render_text, Region, RegionFormatter, TotalsBreakdown, TotalsPresenter, TotalsRecord,
    TotalsSource,
};

use crate::config::{OutputFormat, TotalsConfig};
use crate::error::{CliError, CliResult};

#[derive(Parser, Debug)]
#[command(name = "cart-totals")]
#[command(about = "Show the totals breakdown of a cart or order", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON input file; reads standard input when omitted or `-`.
    input: Option<PathBuf>,

    /// Config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Configured region id to present the record in.
    #[arg(long)]
    region: Option<String>,

    /// Text block width.
    #[arg(long)]
    width: Option<usize>,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Log filter when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut config = TotalsConfig::load(cli.config.clone()).context("loading configuration")?;
    apply_flags(&mut config, &cli);
    config.validate().context("validating configuration")?;

    let input = read_input(cli.input.as_deref()).context("reading input")?;
    let mut record = parse_record(&input)?;

    if let Some(ref id) = config.display.region {
        let region = config
            .find_region(id)
            .ok_or_else(|| CliError::UnknownRegion(id.clone()))?;
        apply_region(&mut record, region)?;
    }

    let breakdown = present_record(&config, &record)
        .with_context(|| format!("presenting totals in region '{}'", record.region.id))?;

    match config.display.format {
        OutputFormat::Text => print!("{}", render_text(&breakdown, config.display.width)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&breakdown)?),
    }

    Ok(())
}

/// Initializes the tracing subscriber on stderr, leaving stdout for output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=totals_core=trace` - Trace the library only
/// - Default: `--log-level` (warn)
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn apply_flags(config: &mut TotalsConfig, cli: &Cli) {
    if let Some(ref region) = cli.region {
        config.display.region = Some(region.clone());
    }
    if let Some(width) = cli.width {
        config.display.width = width;
    }
    if let Some(format) = cli.format {
        config.display.format = format;
    }
}

fn read_input(path: Option<&std::path::Path>) -> CliResult<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            info!(?path, "Reading record");
            std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(CliError::Stdin)?;
            Ok(buf)
        }
    }
}

/// Swaps in a configured region, picking up its name and tax rate.
///
/// Amounts are minor units of the record's own currency, so a region in
/// another currency would rescale them and is refused.
fn apply_region(record: &mut TotalsRecord, region: &Region) -> CliResult<()> {
    let expected = region.currency_code.trim();
    let found = record.region.currency_code.trim();

    if !expected.eq_ignore_ascii_case(found) {
        return Err(CliError::CurrencyMismatch {
            region: region.id.clone(),
            expected: expected.to_string(),
            found: found.to_string(),
        });
    }

    debug!(from = %record.region.id, to = %region.id, "Replacing record region");
    record.region = region.clone();
    Ok(())
}

fn present_record(config: &TotalsConfig, record: &TotalsRecord) -> CliResult<TotalsBreakdown> {
    let presenter = TotalsPresenter::new(RegionFormatter::with_catalog(config.catalog()))
        .with_labels(config.display.labels.clone());
    Ok(presenter.present(record)?)
}

/// Accepts a tagged cart/order/totals document or a bare totals record.
fn parse_record(input: &str) -> CliResult<TotalsRecord> {
    match serde_json::from_str::<TotalsSource>(input) {
        Ok(source) => {
            debug!(id = %source.id(), "Parsed tagged record");
            Ok(source.to_record())
        }
        Err(tagged_err) => serde_json::from_str::<TotalsRecord>(input).map_err(|bare_err| {
            debug!(%tagged_err, "Input is neither a tagged source nor a bare record");
            CliError::InputParse(bare_err)
        }),
    }
}
