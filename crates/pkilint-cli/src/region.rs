//! # Region Subcommand
//!
//! Prints the region table's answer for a single `(country, province)` pair.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use pkilint_core::CountryCode;
use pkilint_regions::RegionLookup;

use crate::config::CliConfig;
use crate::{load_region_table, OutputFormat};

/// Arguments for the `pkilint region` subcommand.
#[derive(Args, Debug)]
pub struct RegionArgs {
    /// Subject country code, e.g. `US`.
    pub country: String,

    /// Subject state or province name.
    pub province: String,

    /// Region table (overrides `region_table` in the config file).
    #[arg(long, value_name = "TABLE")]
    pub regions: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the region subcommand.
pub fn run_region(args: &RegionArgs, config: &CliConfig, out: &mut dyn Write) -> Result<u8> {
    let table = load_region_table(config.region_table(args.regions.as_deref()))?;
    let check = table
        .check_region(&args.country, &args.province)
        .with_context(|| format!("region lookup failed for {}/{}", args.country, args.province))?;

    match args.format {
        OutputFormat::Json => {
            let verified = CountryCode::new(&args.country)
                .ok()
                .and_then(|code| table.is_verified(&code));
            let report = serde_json::json!({
                "country": args.country,
                "province": args.province,
                "check": check,
                "verified": verified,
            });
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => writeln!(out, "{check}")?,
    }

    Ok(0)
}
