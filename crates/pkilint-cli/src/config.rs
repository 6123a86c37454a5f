//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`:
//!
//! ```yaml
//! region_table: data/regions.yaml
//! disabled_lints:
//!   - n_subject_state_unknown
//! ```
//!
//! A relative `region_table` is resolved against the config file's
//! directory. Command-line flags take precedence over the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings shared by all subcommands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Region table used by region-aware lints.
    #[serde(default)]
    pub region_table: Option<PathBuf>,
    /// Lint names to leave out of the registry.
    #[serde(default)]
    pub disabled_lints: Vec<String>,
}

impl CliConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;

        if let Some(table) = config.region_table.take() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            config.region_table = Some(if table.is_absolute() {
                table
            } else {
                base.join(table)
            });
        }

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// The region table to use: the flag if given, else the config value.
    pub fn region_table<'a>(&'a self, flag: Option<&'a Path>) -> Option<&'a Path> {
        flag.or(self.region_table.as_deref())
    }
}
