//! # Lint Subcommand
//!
//! Runs every registered lint over one decoded certificate and prints the
//! per-lint results. Findings do not change the exit code; only failures to
//! load inputs do.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use crate::config::CliConfig;
use crate::{build_registry, load_certificate, load_region_table, OutputFormat};

/// Arguments for the `pkilint lint` subcommand.
#[derive(Args, Debug)]
pub struct LintArgs {
    /// Decoded certificate (YAML or JSON) with `subject` and `not_before`.
    #[arg(value_name = "CERT")]
    pub cert: PathBuf,

    /// Region table (overrides `region_table` in the config file).
    #[arg(long, value_name = "TABLE")]
    pub regions: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the lint subcommand.
pub fn run_lint(args: &LintArgs, config: &CliConfig, out: &mut dyn Write) -> Result<u8> {
    let table = load_region_table(config.region_table(args.regions.as_deref()))?;
    let registry = build_registry(config, Arc::new(table))?;
    let cert = load_certificate(&args.cert)?;

    let results = registry.run(&cert);

    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &results)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for (name, result) in results.iter() {
                match &result.details {
                    Some(details) => writeln!(out, "{name:<40} {}  ({details})", result.status)?,
                    None => writeln!(out, "{name:<40} {}", result.status)?,
                }
            }
        }
    }

    Ok(0)
}
