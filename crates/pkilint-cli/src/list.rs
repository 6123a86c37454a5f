//! # List Subcommand
//!
//! Prints the metadata of every registered lint, optionally restricted to
//! one requirement source.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use pkilint_core::{EffectiveDate, LintMetadata, LintSource};
use pkilint_regions::RegionTable;

use crate::config::CliConfig;
use crate::{build_registry, OutputFormat};

/// Arguments for the `pkilint list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list lints from this source (e.g. `community`, `rfc5280`).
    #[arg(long)]
    pub source: Option<LintSource>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the list subcommand.
pub fn run_list(args: &ListArgs, config: &CliConfig, out: &mut dyn Write) -> Result<u8> {
    // Metadata does not depend on region data; skip loading the table.
    let registry = build_registry(config, Arc::new(RegionTable::default()))?;

    let selected: Vec<&LintMetadata> = registry
        .metadata()
        .filter(|meta| args.source.map_or(true, |source| meta.source == source))
        .collect();

    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &selected)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for meta in selected {
                let effective = match meta.effective_date {
                    EffectiveDate::Always => "always".to_string(),
                    EffectiveDate::Since(at) => at.format("%Y-%m-%d").to_string(),
                };
                writeln!(
                    out,
                    "{}\n  source: {}  citation: {}  effective: {}\n  {}",
                    meta.name, meta.source, meta.citation, effective, meta.description
                )?;
            }
        }
    }

    Ok(0)
}
