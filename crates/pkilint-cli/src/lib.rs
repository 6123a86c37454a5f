//! # pkilint-cli — Command-Line Interface
//!
//! ## Subcommands
//!
//! - `lint` — Run every registered lint over a decoded certificate
//! - `region` — Query the region table for one `(country, province)` pair
//! - `list` — Print metadata of registered lints
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers in this library so
//!   handlers can be driven from tests.
//! - Handlers delegate to the domain crates; no lint logic lives here.
//! - Handlers return an exit code; operational failures are `Err`.

pub mod config;
pub mod lint;
pub mod list;
pub mod region;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use pkilint_core::Certificate;
use pkilint_lints::{default_registry, LintRegistry};
use pkilint_regions::{RegionLookup, RegionTable};

use crate::config::CliConfig;

/// Output rendering shared by subcommands.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned, human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Load the region table, or an empty one when no table is configured.
///
/// With an empty table every province is an unknown region.
pub fn load_region_table(path: Option<&Path>) -> Result<RegionTable> {
    match path {
        Some(path) => RegionTable::load(path)
            .with_context(|| format!("failed to load region table {}", path.display())),
        None => {
            tracing::warn!("no region table configured; every province will be reported as unknown");
            Ok(RegionTable::default())
        }
    }
}

/// Read a decoded certificate from a YAML or JSON file.
pub fn load_certificate(path: &Path) -> Result<Certificate> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read certificate {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse certificate {}", path.display()))
}

/// Build the lint registry, dropping lints disabled in `config`.
pub fn build_registry(config: &CliConfig, lookup: Arc<dyn RegionLookup>) -> Result<LintRegistry> {
    let mut registry = default_registry(lookup).context("failed to register lints")?;
    for name in &config.disabled_lints {
        if registry.remove(name).is_none() {
            tracing::warn!(lint = %name, "disabled lint is not registered");
        }
    }
    tracing::info!(lints = registry.len(), "lint registry ready");
    Ok(registry)
}
